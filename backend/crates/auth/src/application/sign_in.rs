//! Sign In Use Case
//!
//! Exchanges an email/password pair for tokens at the identity provider.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::identity_provider::IdentityProvider;
use crate::domain::outcome::AuthOutcome;
use crate::domain::value_object::{
    auth_parameters::AuthParameters, credentials::LoginCredentials, secret_hash::SecretHash,
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutput {
    /// Tokens issued
    Authenticated {
        token: Option<String>,
        expires_in: i32,
        token_type: Option<String>,
    },
    /// Provider demands an additional challenge
    ChallengeRequired { challenge_name: String },
}

/// Sign in use case
pub struct SignInUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> SignInUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self { provider, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let credentials = LoginCredentials::new(input.email, input.password)?;
        let parameters = self.build_parameters(&credentials)?;

        let outcome = self
            .provider
            .initiate_password_auth(&self.config.client_id, &parameters)
            .await?;

        match outcome {
            AuthOutcome::ChallengeRequired { challenge_name } => {
                tracing::info!(
                    challenge = %challenge_name,
                    "Identity provider returned a challenge"
                );
                Ok(SignInOutput::ChallengeRequired { challenge_name })
            }
            AuthOutcome::Authenticated(tokens) => {
                tracing::info!(email = %credentials.email(), "Authentication successful");
                Ok(SignInOutput::Authenticated {
                    token: tokens.preferred_token().map(str::to_owned),
                    expires_in: tokens.expires_in,
                    token_type: tokens.token_type,
                })
            }
        }
    }

    /// `USERNAME`/`PASSWORD`, plus `SECRET_HASH` when a client secret is configured
    fn build_parameters(&self, credentials: &LoginCredentials) -> AuthResult<AuthParameters> {
        let parameters = AuthParameters::for_password(credentials);

        match &self.config.client_secret {
            Some(secret) => {
                let hash = SecretHash::compute(credentials.email(), &self.config.client_id, secret)
                    .map_err(AuthError::SecretHash)?;
                Ok(parameters.with_secret_hash(hash))
            }
            None => Ok(parameters),
        }
    }
}
