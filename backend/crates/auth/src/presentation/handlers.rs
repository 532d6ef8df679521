//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::RequestId;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::Instrument;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase};
use crate::domain::identity_provider::IdentityProvider;
use crate::presentation::gateway::{GatewayEnvelope, GatewayRequest, GatewayResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<AuthConfig>,
}

/// Run one login invocation end to end
///
/// Never fails: every error becomes a structured response.
pub async fn handle_login<P>(state: &AuthAppState<P>, request: GatewayRequest) -> GatewayResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let request_id = RequestId::new();
    let span = tracing::info_span!("handle_auth", request_id = %request_id);

    async move {
        tracing::info!("handle_auth invoked");

        let req = match request.decode() {
            Ok(req) => req,
            Err(err) => return GatewayResponse::from_error(err),
        };

        let use_case = SignInUseCase::new(state.provider.clone(), state.config.clone());
        let input = SignInInput {
            email: req.email,
            password: req.password,
        };

        match use_case.execute(input).await {
            Ok(output) => GatewayResponse::from(output),
            Err(err) => GatewayResponse::from_error(err),
        }
    }
    .instrument(span)
    .await
}

// ============================================================================
// Plain HTTP
// ============================================================================

/// POST /auth/login
///
/// `Content-Transfer-Encoding: base64` marks a base64-encoded body.
pub async fn login<P>(
    State(state): State<AuthAppState<P>>,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResponse
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let request = GatewayRequest::from_http(&headers, &body);
    handle_login(&state, request).await
}

// ============================================================================
// API Gateway proxy event
// ============================================================================

/// POST /invoke
pub async fn invoke<P>(
    State(state): State<AuthAppState<P>>,
    body: Bytes,
) -> AppResult<Json<GatewayEnvelope>>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let event: GatewayRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::from(e).with_code("invalid_event"))?;

    let response = handle_login(&state, event).await;

    Ok(Json(response.into_envelope(state.config.return_json_object)))
}

// ============================================================================
// Health
// ============================================================================

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
