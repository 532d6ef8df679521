//! Gateway Server Entry Point
//!
//! Loads configuration, initializes logging and serves the login adapter.
//! Uses `anyhow` for startup errors; request-level errors are handled by
//! the `auth` crate and never reach this layer.

use std::env;
use std::net::SocketAddr;

use auth::{AuthConfig, CognitoClient, auth_router};
use axum::http::{HeaderName, Method, header};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = AuthConfig::from_env();

    // Initialize tracing (RUST_LOG wins over LOG_LEVEL)
    let default_filter = config
        .as_ref()
        .map(AuthConfig::log_filter)
        .unwrap_or("info");
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    if config.client_secret.is_none() {
        tracing::warn!("COGNITO_CLIENT_SECRET not set, requests will not carry SECRET_HASH");
    }

    tracing::info!(
        user_pool_id = config.user_pool_id.as_deref().unwrap_or("-"),
        region = config.region.as_deref().unwrap_or("-"),
        endpoint = %config.endpoint,
        json_object_bodies = config.return_json_object,
        "Configuration loaded"
    );

    let client = CognitoClient::from_config(&config)?;

    // Build router
    let app = auth_router(client, config)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Any origin may call the gateway; no credentials are involved
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            // base64 body flag on /auth/login
            HeaderName::from_static("content-transfer-encoding"),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_preflight_allows_base64_flag_header() {
        let app = Router::new()
            .route("/auth/login", post(|| async {}))
            .layer(cors_layer());

        let response = app
            .oneshot(
                Request::options("/auth/login")
                    .header(header::ORIGIN, "https://app.example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(
                        header::ACCESS_CONTROL_REQUEST_HEADERS,
                        "content-type,content-transfer-encoding",
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

        let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(allowed.contains("content-type"), "{allowed}");
        assert!(allowed.contains("content-transfer-encoding"), "{allowed}");
    }
}
