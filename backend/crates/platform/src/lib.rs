//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64)
//! - Secret strings that are zeroized on drop

pub mod crypto;
pub mod secret;
