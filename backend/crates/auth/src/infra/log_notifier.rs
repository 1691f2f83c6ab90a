//! Logging reset notifier
//!
//! Records that a reset link would be sent. Email dispatch is not wired
//! yet; the secret is never written to the log.

use crate::domain::entity::{password_reset::PasswordResetToken, user::User};
use crate::domain::notifier::ResetNotifier;
use crate::error::AuthResult;

#[derive(Debug, Clone, Default)]
pub struct LogResetNotifier;

impl ResetNotifier for LogResetNotifier {
    async fn send_reset_link(
        &self,
        user: &User,
        token: &PasswordResetToken,
        _secret: &str,
    ) -> AuthResult<()> {
        tracing::info!(
            user_id = %user.user_id,
            token_id = %token.token_id,
            expires_at = %token.expires_at,
            "Password reset link ready for delivery"
        );
        Ok(())
    }
}
