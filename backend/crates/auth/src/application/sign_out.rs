//! Sign Out Use Case
//!
//! Invalidates a user session.

use std::sync::Arc;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Sign out from current session
    ///
    /// A missing or forged token is a no-op; returns whether a session was removed.
    pub async fn execute(&self, session_token: Option<&str>) -> AuthResult<bool> {
        let Some(session_id) =
            session_token.and_then(|t| session_token::verify(t, &self.config.session_secret))
        else {
            tracing::debug!("Sign out without a valid session token");
            return Ok(false);
        };

        let deleted = self.session_repo.delete(&session_id).await?;

        tracing::info!(session_id = %session_id, deleted, "User signed out");
        Ok(deleted)
    }
}
