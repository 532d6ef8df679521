//! Gateway Request / Response
//!
//! Transport-neutral shapes of one login invocation. A request is either a
//! plain HTTP request or an API Gateway (HTTP API v2) proxy event; both are
//! reduced to [`GatewayRequest`], and both are answered from one
//! [`GatewayResponse`].

use std::borrow::Cow;
use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::application::sign_in::SignInOutput;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{AuthResponse, ChallengeResponse, SignInRequest};

/// Value of `Content-Transfer-Encoding` marking a base64 body
const BASE64_ENCODING: &str = "base64";

/// One login invocation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayRequest {
    /// Build from a plain HTTP request
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so it surfaces as a
    /// JSON error later.
    pub fn from_http(headers: &HeaderMap, body: &[u8]) -> Self {
        let is_base64_encoded = headers
            .get("content-transfer-encoding")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.trim().eq_ignore_ascii_case(BASE64_ENCODING));

        Self {
            body: (!body.is_empty()).then(|| String::from_utf8_lossy(body).into_owned()),
            is_base64_encoded,
        }
    }

    /// Decode the body into a sign in request
    pub fn decode(&self) -> AuthResult<SignInRequest> {
        let raw = match self.body.as_deref() {
            None | Some("") => return Err(AuthError::MissingBody),
            Some(raw) => raw,
        };

        let text: Cow<'_, str> = if self.is_base64_encoded {
            let bytes = platform::crypto::from_base64(raw).map_err(AuthError::InvalidBase64)?;
            Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
        } else {
            Cow::Borrowed(raw)
        };

        // A top-level `null` decodes to an empty request
        serde_json::from_str::<Option<SignInRequest>>(&text)
            .map(Option::unwrap_or_default)
            .map_err(AuthError::InvalidJson)
    }
}

/// One login response
#[derive(Debug, Clone)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl GatewayResponse {
    fn new(status: StatusCode, body: Value) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );

        Self {
            status,
            headers,
            body,
        }
    }

    /// Render an error, logging it first
    pub fn from_error(err: AuthError) -> Self {
        err.log();
        let app_err = err.to_app_error();
        let status = StatusCode::from_u16(app_err.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, json!(app_err.body()))
    }

    /// The error code carried in the body, if any
    pub fn error_code(&self) -> Option<&str> {
        self.body.get("error").and_then(Value::as_str)
    }

    /// Wrap as an API Gateway proxy response
    pub fn into_envelope(self, json_object_body: bool) -> GatewayEnvelope {
        let headers = self
            .headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (canonical_header_name(name.as_str()), v.to_owned()))
            })
            .collect();

        let body = if json_object_body {
            self.body
        } else {
            Value::String(self.body.to_string())
        };

        GatewayEnvelope {
            status_code: self.status.as_u16(),
            headers,
            body,
            is_base64_encoded: false,
        }
    }
}

impl From<SignInOutput> for GatewayResponse {
    fn from(output: SignInOutput) -> Self {
        match output {
            SignInOutput::Authenticated {
                token,
                expires_in,
                token_type,
            } => Self::new(
                StatusCode::OK,
                json!(AuthResponse {
                    token,
                    expires_in,
                    token_type,
                }),
            ),
            SignInOutput::ChallengeRequired { challenge_name } => Self::new(
                StatusCode::FORBIDDEN,
                json!(ChallengeResponse {
                    error: "challenge_required",
                    message: "Additional challenge required",
                    challenge: challenge_name,
                }),
            ),
        }
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.to_string()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// API Gateway HTTP API (v2) proxy response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEnvelope {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// Serialized JSON string, or a JSON object in test-harness mode
    pub body: Value,
    pub is_base64_encoded: bool,
}

/// `content-type` -> `Content-Type`
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(body: Option<&str>, is_base64_encoded: bool) -> GatewayRequest {
        GatewayRequest {
            body: body.map(str::to_owned),
            is_base64_encoded,
        }
    }

    #[test]
    fn test_decode_plain_json() {
        let req = request(Some(r#"{"email":"a@b.c","password":"pw"}"#), false)
            .decode()
            .unwrap();
        assert_eq!(req.email, "a@b.c");
        assert_eq!(req.password, "pw");
    }

    #[test]
    fn test_decode_base64_json() {
        let req = request(
            Some("eyJlbWFpbCI6InVzZXJAZXhhbXBsZS5jb20iLCJwYXNzd29yZCI6Imh1bnRlcjIyIn0="),
            true,
        )
        .decode()
        .unwrap();
        assert_eq!(req.email, "user@example.com");
        assert_eq!(req.password, "hunter22");
    }

    #[test]
    fn test_decode_missing_body() {
        assert!(matches!(request(None, false).decode(), Err(AuthError::MissingBody)));
        assert!(matches!(request(Some(""), true).decode(), Err(AuthError::MissingBody)));
    }

    #[test]
    fn test_decode_bad_base64() {
        assert!(matches!(
            request(Some("%%%not-base64%%%"), true).decode(),
            Err(AuthError::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_decode_bad_json() {
        assert!(matches!(
            request(Some("{\"email\":"), false).decode(),
            Err(AuthError::InvalidJson(_))
        ));
        // Valid base64 wrapping invalid JSON
        assert!(matches!(
            request(Some("aGVsbG8gd29ybGQ="), true).decode(),
            Err(AuthError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_decode_null_body_is_empty_request() {
        let req = request(Some("null"), false).decode().unwrap();
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());

        // "null" in base64
        let req = request(Some("bnVsbA=="), true).decode().unwrap();
        assert!(req.email.is_empty());
    }

    #[test]
    fn test_from_http_detects_base64_flag() {
        let mut headers = HeaderMap::new();
        headers.insert("content-transfer-encoding", HeaderValue::from_static("BASE64"));
        let req = GatewayRequest::from_http(&headers, b"e30=");
        assert!(req.is_base64_encoded);
        assert_eq!(req.body.as_deref(), Some("e30="));

        let req = GatewayRequest::from_http(&HeaderMap::new(), b"");
        assert!(!req.is_base64_encoded);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_from_http_invalid_utf8_is_json_error() {
        let req = GatewayRequest::from_http(&HeaderMap::new(), &[0xff, 0xfe, b'{']);
        assert!(matches!(req.decode(), Err(AuthError::InvalidJson(_))));
    }

    #[test]
    fn test_response_headers() {
        let response = GatewayResponse::from_error(AuthError::MissingBody);
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            response.body,
            json!({"error": "invalid_request", "message": "Request body is required."})
        );
    }

    #[test]
    fn test_envelope_string_body() {
        let response = GatewayResponse::from(SignInOutput::ChallengeRequired {
            challenge_name: "NEW_PASSWORD_REQUIRED".to_string(),
        });
        let envelope = response.into_envelope(false);

        assert_eq!(envelope.status_code, 403);
        assert_eq!(envelope.headers["Content-Type"], "application/json");
        assert_eq!(envelope.headers["Access-Control-Allow-Origin"], "*");
        assert!(!envelope.is_base64_encoded);

        let body: Value = serde_json::from_str(envelope.body.as_str().unwrap()).unwrap();
        assert_eq!(body["challenge"], "NEW_PASSWORD_REQUIRED");
    }

    #[test]
    fn test_envelope_object_body() {
        let response = GatewayResponse::from(SignInOutput::Authenticated {
            token: Some("A".to_string()),
            expires_in: 3600,
            token_type: Some("Bearer".to_string()),
        });
        let envelope = response.into_envelope(true);

        assert_eq!(envelope.status_code, 200);
        assert_eq!(
            envelope.body,
            json!({"token": "A", "expires_in": 3600, "token_type": "Bearer"})
        );
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(
            canonical_header_name("access-control-allow-origin"),
            "Access-Control-Allow-Origin"
        );
    }
}
