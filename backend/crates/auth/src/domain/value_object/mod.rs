//! Value Object Module

pub mod auth_parameters;
pub mod credentials;
pub mod secret_hash;
