//! In-memory repository
//!
//! Backs the router tests and local runs without PostgreSQL. Maps are
//! guarded by `tokio::sync::RwLock`; a failure switch lets tests exercise
//! the database-error paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use kernel::id::{SessionId, UserId};
use platform::password::{ClearTextPassword, HashedPassword};
use tokio::sync::RwLock;

use crate::domain::entity::{
    auth_session::AuthSession, credential::Credential, password_reset::PasswordResetToken,
    user::User,
};
use crate::domain::repository::{
    AuthSessionRepository, CredentialRepository, PasswordResetRepository, UserRepository,
};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
pub struct InMemoryAuthRepository {
    users: RwLock<HashMap<UserId, User>>,
    credentials: RwLock<HashMap<UserId, Credential>>,
    sessions: RwLock<HashMap<SessionId, AuthSession>>,
    reset_tokens: RwLock<Vec<PasswordResetToken>>,
    failing: AtomicBool,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail like a lost database connection
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> AuthResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AuthError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }

    /// Add a user with the given clear text password
    pub async fn insert_user(
        &self,
        email: &str,
        password: &str,
        pepper: Option<&[u8]>,
    ) -> AuthResult<User> {
        let user = User::new(Email::new(email)?);
        let hash = hash_password(password, pepper)?;

        self.users.write().await.insert(user.user_id, user.clone());
        self.credentials
            .write()
            .await
            .insert(user.user_id, Credential::new(user.user_id, hash));

        Ok(user)
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn reset_tokens_for(&self, user_id: &UserId) -> Vec<PasswordResetToken> {
        self.reset_tokens
            .read()
            .await
            .iter()
            .filter(|t| t.user_id == *user_id)
            .cloned()
            .collect()
    }

    /// Same contract as the PostgreSQL cleanup
    pub async fn cleanup_expired(&self) -> AuthResult<(u64, u64)> {
        self.check()?;
        let now = Utc::now();

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at >= now);
        let sessions_deleted = (before - sessions.len()) as u64;

        let mut tokens = self.reset_tokens.write().await;
        let before = tokens.len();
        tokens.retain(|t| t.expires_at >= now);
        let tokens_deleted = (before - tokens.len()) as u64;

        Ok((sessions_deleted, tokens_deleted))
    }
}

fn hash_password(password: &str, pepper: Option<&[u8]>) -> AuthResult<HashedPassword> {
    ClearTextPassword::new(password.to_string())
        .map_err(|e| AuthError::Internal(e.to_string()))?
        .hash(pepper)
        .map_err(|e| AuthError::Internal(e.to_string()))
}

impl UserRepository for InMemoryAuthRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.check()?;
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == *email)
            .cloned())
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        self.check()?;
        self.users.write().await.insert(user.user_id, user.clone());
        Ok(())
    }
}

impl CredentialRepository for InMemoryAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        self.check()?;
        Ok(self.credentials.read().await.get(user_id).cloned())
    }

    async fn record_failure(&self, user_id: &UserId) -> AuthResult<Option<Credential>> {
        self.check()?;
        let mut credentials = self.credentials.write().await;
        Ok(credentials.get_mut(user_id).map(|credential| {
            credential.record_failure();
            credential.clone()
        }))
    }

    async fn reset_failures(&self, user_id: &UserId) -> AuthResult<()> {
        self.check()?;
        if let Some(credential) = self.credentials.write().await.get_mut(user_id) {
            credential.reset_failures();
        }
        Ok(())
    }
}

impl AuthSessionRepository for InMemoryAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        self.check()?;
        self.sessions
            .write()
            .await
            .insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: &SessionId) -> AuthResult<Option<AuthSession>> {
        self.check()?;
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn update(&self, session: &AuthSession) -> AuthResult<()> {
        self.check()?;
        if let Some(stored) = self.sessions.write().await.get_mut(&session.session_id) {
            stored.expires_at = session.expires_at;
            stored.last_activity_at = session.last_activity_at;
        }
        Ok(())
    }

    async fn delete(&self, session_id: &SessionId) -> AuthResult<bool> {
        self.check()?;
        Ok(self.sessions.write().await.remove(session_id).is_some())
    }
}

impl PasswordResetRepository for InMemoryAuthRepository {
    async fn replace_for_user(&self, token: &PasswordResetToken) -> AuthResult<()> {
        self.check()?;
        let mut tokens = self.reset_tokens.write().await;
        tokens.retain(|t| t.user_id != token.user_id);
        tokens.push(token.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryAuthRepository::new();
        let user = repo
            .insert_user("ada@example.com", "pw", None)
            .await
            .unwrap();

        let email = Email::new("ADA@example.com").unwrap();
        let found = repo.find_by_email(&email).await.unwrap().unwrap();
        assert_eq!(found.user_id, user.user_id);
    }

    #[tokio::test]
    async fn test_replace_for_user_keeps_latest() {
        let repo = InMemoryAuthRepository::new();
        let user_id = UserId::new();

        let (first, _) = PasswordResetToken::issue(user_id, Duration::hours(1));
        let (second, _) = PasswordResetToken::issue(user_id, Duration::hours(1));
        repo.replace_for_user(&first).await.unwrap();
        repo.replace_for_user(&second).await.unwrap();

        let tokens = repo.reset_tokens_for(&user_id).await;
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_id, second.token_id);
    }

    #[tokio::test]
    async fn test_cleanup_expired() {
        let repo = InMemoryAuthRepository::new();
        let (expired, _) = PasswordResetToken::issue(UserId::new(), Duration::seconds(-1));
        let (live, _) = PasswordResetToken::issue(UserId::new(), Duration::hours(1));
        repo.replace_for_user(&expired).await.unwrap();
        repo.replace_for_user(&live).await.unwrap();

        let (_, tokens_deleted) = repo.cleanup_expired().await.unwrap();
        assert_eq!(tokens_deleted, 1);
    }

    #[tokio::test]
    async fn test_failing_switch() {
        let repo = InMemoryAuthRepository::new();
        repo.set_failing(true);
        let email = Email::new("ada@example.com").unwrap();
        let result = repo.find_by_email(&email).await;
        assert!(matches!(result, Err(AuthError::Database(_))));
    }
}
