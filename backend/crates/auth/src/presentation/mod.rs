//! Presentation Layer
//!
//! HTTP handlers, DTOs, gateway envelope, and router.

pub mod dto;
pub mod gateway;
pub mod handlers;
pub mod router;

pub use gateway::{GatewayEnvelope, GatewayRequest, GatewayResponse};
pub use handlers::{AuthAppState, handle_login};
pub use router::{auth_router, auth_router_generic};
