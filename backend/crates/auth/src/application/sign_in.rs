//! Sign In Use Case
//!
//! Authenticates a user and creates a session.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::{config::AuthConfig, session_token};
use crate::domain::entity::{auth_session::AuthSession, credential::Credential};
use crate::domain::repository::{AuthSessionRepository, CredentialRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Re-export ClientFingerprint from platform
pub use platform::client::ClientFingerprint;

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
    /// Remember me flag
    pub remember_me: bool,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    /// Cookie lifetime matching the session TTL
    pub max_age: std::time::Duration,
}

/// Sign in use case
pub struct SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    credential_repo: Arc<C>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, C, S> SignInUseCase<U, C, S>
where
    U: UserRepository,
    C: CredentialRepository,
    S: AuthSessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        credential_repo: Arc<C>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            credential_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: SignInInput,
        fingerprint: ClientFingerprint,
    ) -> AuthResult<SignInOutput> {
        // A malformed email cannot belong to anyone
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user.can_login() {
            return Err(AuthError::AccountDisabled);
        }

        let credential = self
            .credential_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if credential.is_locked() {
            return Err(AuthError::AccountLocked);
        }

        let password =
            ClearTextPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !credential
            .password_hash
            .verify(&password, self.config.pepper())
        {
            let recorded = self.credential_repo.record_failure(&user.user_id).await?;

            tracing::warn!(
                user_id = %user.user_id,
                failures = recorded.as_ref().map(|c| c.login_failed_count),
                locked = recorded.as_ref().is_some_and(Credential::is_locked),
                "Wrong password"
            );
            return Err(AuthError::InvalidCredentials);
        }

        if credential.login_failed_count > 0 {
            self.credential_repo.reset_failures(&user.user_id).await?;
        }

        user.record_login();
        self.user_repo.update(&user).await?;

        let ttl = self.config.session_ttl(input.remember_me);
        let session = AuthSession::new(
            user.user_id,
            input.remember_me,
            &fingerprint,
            chrono::Duration::from_std(ttl)
                .map_err(|e| AuthError::Internal(format!("Invalid session TTL: {e}")))?,
        );

        self.session_repo.create(&session).await?;

        let session_token = session_token::sign(&session.session_id, &self.config.session_secret);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            remember_me = input.remember_me,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            max_age: ttl,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    use crate::infra::InMemoryAuthRepository;

    const EMAIL: &str = "ada@example.com";

    async fn use_case() -> (
        Arc<SignInUseCase<InMemoryAuthRepository, InMemoryAuthRepository, InMemoryAuthRepository>>,
        Arc<InMemoryAuthRepository>,
    ) {
        let repo = Arc::new(InMemoryAuthRepository::new());
        let config = Arc::new(AuthConfig::development());
        repo.insert_user(EMAIL, "analytical-engine", config.pepper())
            .await
            .unwrap();

        let use_case = SignInUseCase::new(
            Arc::clone(&repo),
            Arc::clone(&repo),
            Arc::clone(&repo),
            config,
        );
        (Arc::new(use_case), repo)
    }

    fn input(password: &str) -> SignInInput {
        SignInInput {
            email: EMAIL.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    fn fingerprint() -> ClientFingerprint {
        ClientFingerprint::from_headers(&HeaderMap::new(), None)
    }

    async fn stored_credential(repo: &InMemoryAuthRepository) -> Credential {
        let user = repo
            .find_by_email(&Email::new(EMAIL).unwrap())
            .await
            .unwrap()
            .unwrap();
        repo.find_by_user_id(&user.user_id).await.unwrap().unwrap()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_parallel_wrong_passwords_are_all_counted() {
        let (use_case, repo) = use_case().await;

        let attempts: Vec<_> = (0..20)
            .map(|_| {
                let use_case = Arc::clone(&use_case);
                tokio::spawn(async move { use_case.execute(input("wrong"), fingerprint()).await })
            })
            .collect();

        let mut password_checks = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Err(AuthError::InvalidCredentials) => password_checks += 1,
                Err(AuthError::AccountLocked) => {}
                Err(e) => panic!("unexpected error: {e}"),
                Ok(_) => panic!("wrong password accepted"),
            }
        }

        // Every attempt that reached the password check is on record
        let credential = stored_credential(&repo).await;
        assert_eq!(credential.login_failed_count, password_checks);
        assert!(credential.login_failed_count >= Credential::MAX_LOGIN_FAILURES);
        assert!(credential.is_locked());
    }

    #[tokio::test]
    async fn test_success_clears_failures() {
        let (use_case, repo) = use_case().await;

        for _ in 0..Credential::MAX_LOGIN_FAILURES - 1 {
            assert!(use_case.execute(input("wrong"), fingerprint()).await.is_err());
        }
        assert_eq!(
            stored_credential(&repo).await.login_failed_count,
            Credential::MAX_LOGIN_FAILURES - 1
        );

        use_case
            .execute(input("analytical-engine"), fingerprint())
            .await
            .unwrap();
        assert_eq!(stored_credential(&repo).await.login_failed_count, 0);
    }
}
