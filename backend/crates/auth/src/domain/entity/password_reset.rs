//! Password Reset Token Entity
//!
//! Only the SHA-256 of the secret is stored. The secret itself leaves the
//! process once, through the reset notifier.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{ResetTokenId, UserId};
use platform::crypto::{random_token, sha256};

/// Secret length in random bytes (before base64url)
const RESET_SECRET_BYTES: usize = 32;

#[derive(Debug, Clone)]
pub struct PasswordResetToken {
    pub token_id: ResetTokenId,
    pub user_id: UserId,
    /// SHA-256 of the secret sent to the user
    pub token_hash: Vec<u8>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PasswordResetToken {
    /// Issue a new token; returns the entity and the clear secret
    pub fn issue(user_id: UserId, ttl: Duration) -> (Self, String) {
        let secret = random_token(RESET_SECRET_BYTES);
        let now = Utc::now();

        let token = Self {
            token_id: ResetTokenId::new(),
            user_id,
            token_hash: sha256(secret.as_bytes()).to_vec(),
            expires_at: now + ttl,
            created_at: now,
        };

        (token, secret)
    }
}
