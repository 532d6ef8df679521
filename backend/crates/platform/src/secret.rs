//! Secret Strings (Zeroized on drop)

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// String holding sensitive data (passwords, client secrets)
///
/// - Zeroized when dropped
/// - Not `Clone`, so copies are explicit via [`SecretString::expose_secret`]
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the clear text
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}
