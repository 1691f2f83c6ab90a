//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{SessionId, UserId};

use crate::domain::entity::{
    auth_session::AuthSession, credential::Credential, password_reset::PasswordResetToken,
    user::User,
};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Find user by (normalised) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Update user
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Find credential by user ID
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;

    /// Count one failed login in a single atomic step, locking the account
    /// once `Credential::MAX_LOGIN_FAILURES` is reached. Returns the stored state.
    async fn record_failure(&self, user_id: &UserId) -> AuthResult<Option<Credential>>;

    /// Clear the failure counter and any lockout
    async fn reset_failures(&self, user_id: &UserId) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>>;

    /// Update session (e.g., last activity, expiry)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session; returns whether a row was removed
    async fn delete(&self, session_id: &SessionId) -> AuthResult<bool>;
}

/// Password reset token repository trait
#[trait_variant::make(PasswordResetRepository: Send)]
pub trait LocalPasswordResetRepository {
    /// Store a token, dropping any earlier tokens for the same user
    async fn replace_for_user(&self, token: &PasswordResetToken) -> AuthResult<()>;
}

/// Everything the auth routes need from storage, in one handle
pub trait AuthStore:
    UserRepository
    + CredentialRepository
    + AuthSessionRepository
    + PasswordResetRepository
    + Send
    + Sync
    + 'static
{
}

impl<T> AuthStore for T where
    T: UserRepository
        + CredentialRepository
        + AuthSessionRepository
        + PasswordResetRepository
        + Send
        + Sync
        + 'static
{
}
