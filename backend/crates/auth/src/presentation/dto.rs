//! API DTOs (Data Transfer Objects)

use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request body
///
/// Lenient about shape, strict about types:
/// - keys match case-insensitively (`Email`, `PASSWORD`)
/// - absent and `null` fields stay empty and are rejected by validation
/// - a repeated key overwrites the earlier value
/// - unknown keys are ignored
#[derive(Clone, Default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl<'de> Deserialize<'de> for SignInRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SignInRequestVisitor)
    }
}

struct SignInRequestVisitor;

impl<'de> Visitor<'de> for SignInRequestVisitor {
    type Value = SignInRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with email and password")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut req = SignInRequest::default();

        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("email") {
                &mut req.email
            } else if key.eq_ignore_ascii_case("password") {
                &mut req.password
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };

            // null leaves the field untouched
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }

        Ok(req)
    }
}

impl fmt::Debug for SignInRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Successful sign in response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub expires_in: i32,
    pub token_type: Option<String>,
}

/// Challenge response (no token issued)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChallengeResponse {
    pub error: &'static str,
    pub message: &'static str,
    pub challenge: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: SignInRequest = serde_json::from_str(r#"{"email":"user@example.com"}"#).unwrap();
        assert_eq!(req.email, "user@example.com");
        assert!(req.password.is_empty());
    }

    #[test]
    fn test_null_fields_are_empty() {
        let req: SignInRequest =
            serde_json::from_str(r#"{"email":null,"password":"pw"}"#).unwrap();
        assert!(req.email.is_empty());
        assert_eq!(req.password, "pw");
    }

    #[test]
    fn test_keys_match_case_insensitively() {
        let req: SignInRequest =
            serde_json::from_str(r#"{"Email":"user@example.com","PASSWORD":"hunter22"}"#)
                .unwrap();
        assert_eq!(req.email, "user@example.com");
        assert_eq!(req.password, "hunter22");
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let req: SignInRequest =
            serde_json::from_str(r#"{"email":"a@b.c","password":"pw","email":"x@y.z"}"#)
                .unwrap();
        assert_eq!(req.email, "x@y.z");

        // null does not clear an earlier value
        let req: SignInRequest =
            serde_json::from_str(r#"{"email":"a@b.c","email":null}"#).unwrap();
        assert_eq!(req.email, "a@b.c");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let req: SignInRequest = serde_json::from_str(
            r#"{"email":"a@b.c","password":"pw","remember":true,"meta":{"x":[1,2]}}"#,
        )
        .unwrap();
        assert_eq!(req.email, "a@b.c");
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        assert!(serde_json::from_str::<SignInRequest>(r#"{"email":42,"password":"pw"}"#).is_err());
        assert!(serde_json::from_str::<SignInRequest>(r#"["a@b.c","pw"]"#).is_err());
        assert!(serde_json::from_str::<SignInRequest>(r#""a@b.c""#).is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let req: SignInRequest =
            serde_json::from_str(r#"{"email":"user@example.com","password":"hunter22"}"#).unwrap();
        assert!(!format!("{:?}", req).contains("hunter22"));
    }

    #[test]
    fn test_auth_response_keeps_null_fields() {
        let body = AuthResponse {
            token: None,
            expires_in: 0,
            token_type: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"token": null, "expires_in": 0, "token_type": null})
        );
    }
}
