//! Auth Error Types
//!
//! Every way a login attempt can fail, and how each one is reported.
//! Variants integrate with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::crypto::CryptoError;
use thiserror::Error;

use crate::domain::identity_provider::ProviderError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// The `Display` text of each variant is the message returned to the client.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No request body at all
    #[error("Request body is required.")]
    MissingBody,

    /// Body flagged as base64 but not decodable
    #[error("Invalid base64 body")]
    InvalidBase64(#[source] base64::DecodeError),

    /// Body is not a JSON login request
    #[error("Request body must be valid JSON")]
    InvalidJson(#[source] serde_json::Error),

    /// Email or password empty
    #[error("Both email and password are required.")]
    MissingCredentials,

    /// Secret hash could not be computed
    #[error("Failed to calculate client secret hash.")]
    SecretHash(#[source] CryptoError),

    /// Provider rejected the credentials
    #[error("Invalid email or password.")]
    InvalidCredentials,

    /// Provider has no such user
    #[error("User does not exist.")]
    UserNotFound,

    /// Account not confirmed yet
    #[error("User not confirmed.")]
    UserNotConfirmed,

    /// Account requires a password reset
    #[error("Password reset required.")]
    PasswordResetRequired,

    /// Unclassified provider failure
    #[error("Cognito error: {0}")]
    Upstream(#[source] ProviderError),
}

impl AuthError {
    /// Machine-readable error code for the response body
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingBody
            | AuthError::InvalidBase64(_)
            | AuthError::InvalidJson(_)
            | AuthError::MissingCredentials => "invalid_request",
            AuthError::SecretHash(_) => "server_error",
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::UserNotFound => "user_not_found",
            AuthError::UserNotConfirmed => "user_not_confirmed",
            AuthError::PasswordResetRequired => "password_reset_required",
            AuthError::Upstream(_) => "upstream_error",
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingBody
            | AuthError::InvalidBase64(_)
            | AuthError::InvalidJson(_)
            | AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::SecretHash(_) => ErrorKind::InternalServerError,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserNotConfirmed | AuthError::PasswordResetRequired => ErrorKind::Forbidden,
            AuthError::Upstream(_) => ErrorKind::BadGateway,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let message = self.to_string();
        let err = match self.kind() {
            ErrorKind::BadRequest => AppError::bad_request(message),
            ErrorKind::Unauthorized => AppError::unauthorized(message),
            ErrorKind::Forbidden => AppError::forbidden(message),
            ErrorKind::NotFound => AppError::not_found(message),
            ErrorKind::InternalServerError => AppError::internal(message),
            ErrorKind::BadGateway => AppError::bad_gateway(message),
            kind => AppError::new(kind, message),
        };
        err.with_code(self.code())
    }

    /// Log the error with appropriate level
    ///
    /// Client input errors are expected traffic and stay at debug.
    pub(crate) fn log(&self) {
        if self.kind().is_server_error() {
            let cause = std::error::Error::source(self).map(ToString::to_string);
            tracing::error!(
                code = self.code(),
                cause = cause.as_deref(),
                error = %self,
                "Login failed"
            );
        } else {
            tracing::debug!(code = self.code(), error = %self, "Login rejected");
        }
    }
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotAuthorized(_) => AuthError::InvalidCredentials,
            ProviderError::UserNotFound(_) => AuthError::UserNotFound,
            ProviderError::UserNotConfirmed(_) => AuthError::UserNotConfirmed,
            ProviderError::PasswordResetRequired(_) => AuthError::PasswordResetRequired,
            other => AuthError::Upstream(other),
        }
    }
}
