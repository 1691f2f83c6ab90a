//! Request Password Reset Use Case
//!
//! Issues a reset token for a known email and hands it to the notifier.
//! The outcome is invisible to the caller: known and unknown emails look
//! the same from outside. Delivery runs detached so its latency does not
//! show in the response time; the token write still does.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::password_reset::PasswordResetToken;
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::{PasswordResetRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub struct RequestPasswordResetUseCase<U, P, N>
where
    U: UserRepository,
    P: PasswordResetRepository,
    N: ResetNotifier + Sync + 'static,
{
    user_repo: Arc<U>,
    reset_repo: Arc<P>,
    notifier: Arc<N>,
    config: Arc<AuthConfig>,
}

impl<U, P, N> RequestPasswordResetUseCase<U, P, N>
where
    U: UserRepository,
    P: PasswordResetRepository,
    N: ResetNotifier + Sync + 'static,
{
    pub fn new(
        user_repo: Arc<U>,
        reset_repo: Arc<P>,
        notifier: Arc<N>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            reset_repo,
            notifier,
            config,
        }
    }

    /// Returns whether a token was issued. Callers must not surface this.
    pub async fn execute(&self, email: &Email) -> AuthResult<bool> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            tracing::info!(domain = email.domain(), "Password reset for unknown email");
            return Ok(false);
        };

        let ttl = chrono::Duration::from_std(self.config.reset_token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid reset token TTL: {e}")))?;
        let (token, secret) = PasswordResetToken::issue(user.user_id, ttl);

        self.reset_repo.replace_for_user(&token).await?;

        tracing::info!(
            user_id = %user.user_id,
            token_id = %token.token_id,
            "Password reset token issued"
        );

        // Delivery failure must not change the response
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(e) = notifier.send_reset_link(&user, &token, &secret).await {
                tracing::error!(error = %e, user_id = %user.user_id, "Failed to send reset link");
            }
        });

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use kernel::id::UserId;
    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::entity::user::User;
    use crate::infra::InMemoryAuthRepository;

    /// Reports each call, then never finishes
    struct StalledNotifier {
        calls: mpsc::UnboundedSender<UserId>,
    }

    impl ResetNotifier for StalledNotifier {
        async fn send_reset_link(
            &self,
            user: &User,
            _token: &PasswordResetToken,
            _secret: &str,
        ) -> AuthResult<()> {
            let _ = self.calls.send(user.user_id);
            std::future::pending::<()>().await;
            Ok(())
        }
    }

    async fn setup() -> (
        RequestPasswordResetUseCase<InMemoryAuthRepository, InMemoryAuthRepository, StalledNotifier>,
        User,
        mpsc::UnboundedReceiver<UserId>,
    ) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let user = repo
            .insert_user("ada@example.com", "analytical-engine", None)
            .await
            .unwrap();
        let (calls, rx) = mpsc::unbounded_channel();

        let use_case = RequestPasswordResetUseCase::new(
            Arc::clone(&repo),
            repo,
            Arc::new(StalledNotifier { calls }),
            Arc::new(AuthConfig::development()),
        );
        (use_case, user, rx)
    }

    #[tokio::test]
    async fn test_slow_delivery_does_not_delay_known_email() {
        let (use_case, user, mut calls) = setup().await;
        let email = Email::new("ada@example.com").unwrap();

        let issued = tokio::time::timeout(Duration::from_secs(1), use_case.execute(&email))
            .await
            .expect("reset request waited on delivery")
            .unwrap();
        assert!(issued);

        let delivered_to = tokio::time::timeout(Duration::from_secs(1), calls.recv())
            .await
            .unwrap();
        assert_eq!(delivered_to, Some(user.user_id));
    }

    #[tokio::test]
    async fn test_unknown_email_reaches_no_notifier() {
        let (use_case, _, mut calls) = setup().await;
        let email = Email::new("nobody@example.com").unwrap();

        assert!(!use_case.execute(&email).await.unwrap());
        tokio::task::yield_now().await;
        assert!(calls.try_recv().is_err());
    }
}
