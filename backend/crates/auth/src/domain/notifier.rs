//! Reset Notifier Port
//!
//! Delivery of password reset links. The auth crate only issues tokens;
//! how the link reaches the user is an infrastructure concern.

use crate::domain::entity::{password_reset::PasswordResetToken, user::User};
use crate::error::AuthResult;

#[trait_variant::make(ResetNotifier: Send)]
pub trait LocalResetNotifier {
    /// Deliver `secret` for `token` to `user`
    async fn send_reset_link(
        &self,
        user: &User,
        token: &PasswordResetToken,
        secret: &str,
    ) -> AuthResult<()>;
}
