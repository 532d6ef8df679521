//! Application Layer
//!
//! Use cases and application configuration.

pub mod config;
pub mod sign_in;

// Re-exports
pub use config::{AuthConfig, ConfigError};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
