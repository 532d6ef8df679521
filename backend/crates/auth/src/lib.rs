//! Auth (Authentication Gateway) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Credentials, auth parameters, outcomes, identity provider port
//! - `application/` - Sign in use case and configuration
//! - `infra/` - Cognito user pools client
//! - `presentation/` - HTTP handlers, gateway envelope, router
//!
//! ## Features
//! - Email/password sign in through Cognito `USER_PASSWORD_AUTH`
//! - `SECRET_HASH` for app clients with a client secret
//! - Plain HTTP and API Gateway proxy-event entry points
//! - Every failure mapped to a status code and a machine-readable error code
//!
//! ## Security Model
//! - No credentials, tokens, or sessions are stored
//! - Passwords and client secrets are zeroized on drop and never logged

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, ConfigError};
pub use error::{AuthError, AuthResult};
pub use infra::cognito::CognitoClient;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
