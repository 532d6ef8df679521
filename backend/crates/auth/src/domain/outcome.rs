//! Authentication Outcomes
//!
//! What a successful call to the identity provider can produce.

/// Tokens issued by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBundle {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
    /// Lifetime of the issued tokens in seconds
    pub expires_in: i32,
    pub token_type: Option<String>,
}

impl TokenBundle {
    /// The token handed back to the client: ID token, else access token
    pub fn preferred_token(&self) -> Option<&str> {
        self.id_token.as_deref().or(self.access_token.as_deref())
    }
}

/// Result of a password-grant authentication that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials accepted, tokens issued
    Authenticated(TokenBundle),
    /// The provider needs the client to answer a challenge first
    ChallengeRequired { challenge_name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_id_token() {
        let bundle = TokenBundle {
            id_token: Some("A".to_string()),
            access_token: Some("B".to_string()),
            expires_in: 3600,
            token_type: Some("Bearer".to_string()),
        };
        assert_eq!(bundle.preferred_token(), Some("A"));
    }

    #[test]
    fn test_falls_back_to_access_token() {
        let bundle = TokenBundle {
            access_token: Some("B".to_string()),
            ..Default::default()
        };
        assert_eq!(bundle.preferred_token(), Some("B"));
    }

    #[test]
    fn test_no_tokens() {
        assert_eq!(TokenBundle::default().preferred_token(), None);
    }
}
