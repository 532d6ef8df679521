//! Secret Hash Value Object
//!
//! Keyed integrity code binding a public client id to its confidential
//! secret for one authentication attempt:
//! `Base64(HMAC-SHA256(client_secret, username + client_id))`.

use std::fmt;

use platform::crypto::{CryptoError, hmac_sha256, to_base64};
use platform::secret::SecretString;

/// Base64-encoded secret hash
#[derive(Clone, PartialEq, Eq)]
pub struct SecretHash(String);

impl SecretHash {
    /// Compute the secret hash for `username` under `client_id`
    pub fn compute(
        username: &str,
        client_id: &str,
        client_secret: &SecretString,
    ) -> Result<Self, CryptoError> {
        let mut message = String::with_capacity(username.len() + client_id.len());
        message.push_str(username);
        message.push_str(client_id);

        let mac = hmac_sha256(client_secret.expose_secret().as_bytes(), message.as_bytes())?;
        Ok(Self(to_base64(&mac)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SecretHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretHash([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value)
    }

    #[test]
    fn test_known_values() {
        let hash =
            SecretHash::compute("user@example.com", "client-id", &secret("client-secret")).unwrap();
        assert_eq!(hash.as_str(), "NpqglvUHBpz0nyO+qeiUjlRR297+e+uA7UhuwY3pkSE=");

        let hash = SecretHash::compute("alice@example.com", "7abc", &secret("s3cr3t")).unwrap();
        assert_eq!(hash.as_str(), "8uF3gqAu5Gzwa+BOc5jj5RwNO911FCuSj6LJvAjawNg=");
    }

    #[test]
    fn test_deterministic() {
        let a = SecretHash::compute("user@example.com", "client-id", &secret("k")).unwrap();
        let b = SecretHash::compute("user@example.com", "client-id", &secret("k")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_input_changes_the_hash() {
        let hash = |user: &str, client: &str, key: &str| {
            SecretHash::compute(user, client, &secret(key)).unwrap()
        };

        let base = hash("user@example.com", "client-id", "k");
        let other_user = hash("other@example.com", "client-id", "k");
        let other_client = hash("user@example.com", "client-id2", "k");
        let other_secret = hash("user@example.com", "client-id", "k2");

        assert_ne!(base, other_user);
        assert_ne!(base, other_client);
        assert_ne!(base, other_secret);
    }

    #[test]
    fn test_debug_is_redacted() {
        let hash = SecretHash::compute("u", "c", &secret("k")).unwrap();
        assert!(!format!("{:?}", hash).contains(hash.as_str()));
    }
}
