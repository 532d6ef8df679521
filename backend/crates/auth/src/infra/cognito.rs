//! Cognito Identity Provider Client
//!
//! Speaks the AWS JSON 1.1 protocol of the Cognito user pools API.
//! `InitiateAuth` is a public operation, so requests are not signed.

use axum::http::{StatusCode, header};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::identity_provider::{IdentityProvider, ProviderError};
use crate::domain::outcome::{AuthOutcome, TokenBundle};
use crate::domain::value_object::auth_parameters::AuthParameters;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const AMZ_TARGET: &str = "x-amz-target";
const AMZN_ERROR_TYPE: &str = "x-amzn-errortype";
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const USER_PASSWORD_AUTH: &str = "USER_PASSWORD_AUTH";

/// Cognito user pools client
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct CognitoClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CognitoClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AuthConfig) -> Result<Self, reqwest::Error> {
        Self::new(config.endpoint.clone())
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: &'a str,
    client_id: &'a str,
    auth_parameters: &'a AuthParameters,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
    challenge_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    id_token: Option<String>,
    access_token: Option<String>,
    #[serde(default)]
    expires_in: i32,
    token_type: Option<String>,
}

#[derive(Deserialize, Default)]
struct ServiceErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

impl From<InitiateAuthResponse> for AuthOutcome {
    fn from(response: InitiateAuthResponse) -> Self {
        match response.authentication_result {
            Some(result) => AuthOutcome::Authenticated(TokenBundle {
                id_token: result.id_token,
                access_token: result.access_token,
                expires_in: result.expires_in,
                token_type: result.token_type,
            }),
            None => AuthOutcome::ChallengeRequired {
                challenge_name: response.challenge_name.unwrap_or_default(),
            },
        }
    }
}

// ============================================================================
// IdentityProvider implementation
// ============================================================================

impl IdentityProvider for CognitoClient {
    async fn initiate_password_auth(
        &self,
        client_id: &str,
        parameters: &AuthParameters,
    ) -> Result<AuthOutcome, ProviderError> {
        let request = InitiateAuthRequest {
            auth_flow: USER_PASSWORD_AUTH,
            client_id,
            auth_parameters: parameters,
        };

        tracing::debug!(endpoint = %self.endpoint, "Calling InitiateAuth");

        let response = self
            .http
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, AMZ_JSON)
            .header(AMZ_TARGET, INITIATE_AUTH_TARGET)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let error_type = response
            .headers()
            .get(AMZN_ERROR_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(service_error(status, error_type.as_deref(), &body));
        }

        let parsed: InitiateAuthResponse = serde_json::from_slice(&body)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(parsed.into())
    }
}

/// Classify an error response by its exception name
///
/// The `x-amzn-ErrorType` header (`Name:namespace`) wins over the body's
/// `__type` (`namespace#Name`).
fn service_error(status: StatusCode, error_type: Option<&str>, body: &[u8]) -> ProviderError {
    let parsed: ServiceErrorBody = serde_json::from_slice(body).unwrap_or_default();

    let code = error_type
        .and_then(|h| h.split(':').next())
        .or_else(|| {
            parsed
                .error_type
                .as_deref()
                .and_then(|t| t.rsplit('#').next())
        })
        .filter(|c| !c.is_empty())
        .unwrap_or("UnknownError")
        .to_owned();
    let message = parsed.message.unwrap_or_default();

    match code.as_str() {
        "NotAuthorizedException" => ProviderError::NotAuthorized(message),
        "UserNotFoundException" => ProviderError::UserNotFound(message),
        "UserNotConfirmedException" => ProviderError::UserNotConfirmed(message),
        "PasswordResetRequiredException" => ProviderError::PasswordResetRequired(message),
        _ => ProviderError::Service {
            code,
            message,
            status: status.as_u16(),
        },
    }
}
