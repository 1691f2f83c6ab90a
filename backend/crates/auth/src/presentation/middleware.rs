//! Auth Middleware
//!
//! Resolves the session cookie into an [`AuthStatus`] request extension.
//! Page gating happens downstream; this layer never rejects a request.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::cookie::extract_cookie;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;
use crate::presentation::extract::ClientContext;

/// Middleware state
pub struct AuthMiddlewareState<R> {
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> Clone for AuthMiddlewareState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Authentication status stored in request extensions
///
/// Absent extension means the middleware did not run; treat as unauthenticated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

impl AuthStatus {
    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
        }
    }
}

/// Middleware that checks auth session but doesn't require it
pub async fn check_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: AuthSessionRepository + Send + Sync + 'static,
{
    let client = ClientContext::from_request_data(req.headers(), req.extensions());
    let token = extract_cookie(req.headers(), &state.config.session_cookie_name);

    let status = match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
            match use_case.get_session(&token, &client.fingerprint).await {
                Ok(session) => {
                    tracing::trace!(user_id = %session.user_id, "Session accepted");
                    AuthStatus::authenticated()
                }
                Err(e @ (AuthError::Database(_) | AuthError::Internal(_))) => {
                    tracing::warn!(error = %e, "Session check failed; treating as signed out");
                    AuthStatus::default()
                }
                Err(e) => {
                    tracing::debug!(error = %e, "Session rejected");
                    AuthStatus::default()
                }
            }
        }
        None => AuthStatus::default(),
    };

    req.extensions_mut().insert(status);
    next.run(req).await
}
