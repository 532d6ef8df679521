//! Identity Provider Port
//!
//! Interface to the managed identity provider. Implementation is in the
//! infrastructure layer.

use thiserror::Error;

use crate::domain::outcome::AuthOutcome;
use crate::domain::value_object::auth_parameters::AuthParameters;

/// Failures reported by (or while talking to) the identity provider
///
/// The first four variants are the account-state failures the gateway
/// distinguishes; everything else is an unclassified upstream error.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Wrong username or password
    #[error("NotAuthorizedException: {0}")]
    NotAuthorized(String),

    /// No such user in the pool
    #[error("UserNotFoundException: {0}")]
    UserNotFound(String),

    /// User exists but has not confirmed the account
    #[error("UserNotConfirmedException: {0}")]
    UserNotConfirmed(String),

    /// User must reset the password before signing in
    #[error("PasswordResetRequiredException: {0}")]
    PasswordResetRequired(String),

    /// Any other error returned by the service
    #[error("{code} (HTTP {status}): {message}")]
    Service {
        code: String,
        message: String,
        status: u16,
    },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but could not be understood
    #[error("unexpected response: {0}")]
    InvalidResponse(String),
}

/// Identity provider trait
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Run the password-grant flow (`USER_PASSWORD_AUTH`) for `client_id`
    async fn initiate_password_auth(
        &self,
        client_id: &str,
        parameters: &AuthParameters,
    ) -> Result<AuthOutcome, ProviderError>;
}
