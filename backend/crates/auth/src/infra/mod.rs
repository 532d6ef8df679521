//! Infrastructure Layer
//!
//! External service integrations.

pub mod cognito;

pub use cognito::CognitoClient;
