//! Domain Layer
//!
//! Contains value objects, authentication outcomes, and the identity
//! provider port.

pub mod identity_provider;
pub mod outcome;
pub mod value_object;

// Re-exports
pub use identity_provider::{IdentityProvider, ProviderError};
pub use outcome::{AuthOutcome, TokenBundle};
pub use value_object::{
    auth_parameters::AuthParameters, credentials::LoginCredentials, secret_hash::SecretHash,
};
