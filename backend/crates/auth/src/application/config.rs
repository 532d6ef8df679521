//! Application Configuration
//!
//! Immutable snapshot of the gateway configuration, built once at startup
//! and shared by reference with every request.

use platform::secret::SecretString;
use thiserror::Error;

/// Startup configuration errors (fatal)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("COGNITO_CLIENT_ID not configured")]
    MissingClientId,

    #[error("AWS_REGION not configured and no COGNITO_ENDPOINT override given")]
    MissingRegion,
}

/// Auth application configuration
#[derive(Debug)]
pub struct AuthConfig {
    /// App client id registered with the user pool
    pub client_id: String,
    /// App client secret; when present every call carries `SECRET_HASH`
    pub client_secret: Option<SecretString>,
    /// User pool id (informational only)
    pub user_pool_id: Option<String>,
    pub region: Option<String>,
    /// Identity provider endpoint URL
    pub endpoint: String,
    /// Emit gateway envelope bodies as JSON objects instead of strings
    pub return_json_object: bool,
    /// Debug-level logging
    pub verbose: bool,
}

impl AuthConfig {
    /// Minimal config talking to `endpoint` with no client secret
    pub fn new(client_id: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: None,
            user_pool_id: None,
            region: None,
            endpoint: endpoint.into(),
            return_json_object: false,
            verbose: false,
        }
    }

    pub fn with_client_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = Some(SecretString::new(secret));
        self
    }

    pub fn with_json_object_bodies(mut self, enabled: bool) -> Self {
        self.return_json_object = enabled;
        self
    }

    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let client_id = var("COGNITO_CLIENT_ID").ok_or(ConfigError::MissingClientId)?;
        let region = var("AWS_REGION").or_else(|| var("AWS_DEFAULT_REGION"));

        let endpoint = match (var("COGNITO_ENDPOINT"), &region) {
            (Some(endpoint), _) => endpoint,
            (None, Some(region)) => regional_endpoint(region),
            (None, None) => return Err(ConfigError::MissingRegion),
        };

        let return_json_object = var("RETURN_JSON_OBJECT")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let verbose = var("LOG_LEVEL")
            .map(|v| v.eq_ignore_ascii_case("debug"))
            .unwrap_or(false);

        Ok(Self {
            client_id,
            client_secret: var("COGNITO_CLIENT_SECRET").map(SecretString::from),
            user_pool_id: var("COGNITO_USER_POOL_ID"),
            region,
            endpoint,
            return_json_object,
            verbose,
        })
    }

    /// Default tracing filter directive
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// Public Cognito user pools endpoint for `region`
pub fn regional_endpoint(region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/")
}
