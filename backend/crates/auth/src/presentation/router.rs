//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::identity_provider::IdentityProvider;
use crate::infra::cognito::CognitoClient;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by Cognito
pub fn auth_router(provider: CognitoClient, config: AuthConfig) -> Router {
    auth_router_generic(provider, config)
}

/// Create a generic Auth router for any identity provider implementation
pub fn auth_router_generic<P>(provider: P, config: AuthConfig) -> Router
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route("/auth/login", post(handlers::login::<P>))
        .route("/invoke", post(handlers::invoke::<P>))
        .route("/health", get(handlers::health))
        .with_state(state)
}
