//! Auth Parameters
//!
//! String-keyed parameters of a password-grant authentication call.

use std::collections::BTreeMap;
use std::fmt;

use platform::secret::SecretString;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::credentials::LoginCredentials;
use super::secret_hash::SecretHash;

pub const USERNAME: &str = "USERNAME";
pub const PASSWORD: &str = "PASSWORD";
pub const SECRET_HASH: &str = "SECRET_HASH";

/// Parameters sent to the identity provider
///
/// Values are held as [`SecretString`] and zeroized once the call is done.
pub struct AuthParameters(BTreeMap<&'static str, SecretString>);

impl AuthParameters {
    /// `USERNAME` and `PASSWORD` from the given credentials
    pub fn for_password(credentials: &LoginCredentials) -> Self {
        let mut params = BTreeMap::new();
        params.insert(USERNAME, SecretString::new(credentials.email()));
        params.insert(
            PASSWORD,
            SecretString::new(credentials.password().expose_secret()),
        );
        Self(params)
    }

    /// Attach `SECRET_HASH`
    pub fn with_secret_hash(mut self, hash: SecretHash) -> Self {
        self.0.insert(SECRET_HASH, SecretString::new(hash.into_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(SecretString::expose_secret)
    }
}

impl Serialize for AuthParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value.expose_secret())?;
        }
        map.end()
    }
}

impl fmt::Debug for AuthParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the username is safe to print.
        let mut map = f.debug_map();
        for (key, value) in &self.0 {
            if *key == USERNAME {
                map.entry(key, &value.expose_secret());
            } else {
                map.entry(key, &"[REDACTED]");
            }
        }
        map.finish()
    }
}
