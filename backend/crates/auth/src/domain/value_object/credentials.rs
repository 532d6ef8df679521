//! Login Credentials Value Object
//!
//! The email/password pair submitted by a client. The email doubles as
//! the identity provider username. No format validation happens here;
//! the identity provider is the authority on what a valid username is.

use platform::secret::SecretString;

use crate::error::{AuthError, AuthResult};

/// Validated login credentials
#[derive(Debug)]
pub struct LoginCredentials {
    email: String,
    password: SecretString,
}

impl LoginCredentials {
    /// Create credentials, rejecting an empty email or password
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> AuthResult<Self> {
        let email = email.into();
        let password = SecretString::new(password);

        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        Ok(Self { email, password })
    }

    /// Email, used as the provider username
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}
