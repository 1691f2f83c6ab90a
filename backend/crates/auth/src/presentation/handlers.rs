//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppResult;
use platform::cookie::extract_cookie;

use crate::application::config::AuthConfig;
use crate::application::{RequestPasswordResetUseCase, SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::AuthStore;
use crate::domain::value_object::email::Email;
use crate::error::AuthError;
use crate::locale::Message;
use crate::presentation::dto::{ActionResponse, LoginRequest, ResetPasswordRequest};
use crate::presentation::extract::ClientContext;

/// Shared state for auth handlers
pub struct AuthAppState<R, N> {
    pub repo: Arc<R>,
    pub notifier: Arc<N>,
    pub config: Arc<AuthConfig>,
}

// Not derived: derive would require `R: Clone` and `N: Clone`.
impl<R, N> Clone for AuthAppState<R, N> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            notifier: Arc::clone(&self.notifier),
            config: Arc::clone(&self.config),
        }
    }
}

/// Treat absent, empty and whitespace-only input alike
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R, N>(
    State(state): State<AuthAppState<R, N>>,
    client: ClientContext,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Response>
where
    R: AuthStore,
    N: ResetNotifier + Sync + 'static,
{
    let locale = client.locale;
    let fail = |e: AuthError| e.into_app_error(locale);

    let Json(req) = body.map_err(|e| fail(AuthError::InvalidBody(e.body_text())))?;

    let (Some(email), Some(password)) = (present(req.email), present(req.password)) else {
        return Err(fail(AuthError::MissingCredentials));
    };

    let use_case = SignInUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.config),
    );

    let input = SignInInput {
        email,
        password,
        remember_me: req.remember_me,
    };

    let output = use_case
        .execute(input, client.fingerprint)
        .await
        .map_err(fail)?;

    // Max-Age must match the session TTL
    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token, Some(output.max_age));

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ActionResponse::ok(Message::LoginSucceeded.text(locale))),
    )
        .into_response())
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/auth/logout
pub async fn logout<R, N>(
    State(state): State<AuthAppState<R, N>>,
    client: ClientContext,
    headers: HeaderMap,
) -> AppResult<Response>
where
    R: AuthStore,
    N: ResetNotifier + Sync + 'static,
{
    let locale = client.locale;
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = SignOutUseCase::new(Arc::clone(&state.repo), Arc::clone(&state.config));
    use_case
        .execute(token.as_deref())
        .await
        .map_err(|e| e.into_app_error(locale))?;

    let cookie = state.config.cookie_config().build_delete_cookie();

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(ActionResponse::ok(Message::LogoutSucceeded.text(locale))),
    )
        .into_response())
}

// ============================================================================
// Password Reset
// ============================================================================

/// POST /api/auth/reset-password
///
/// Known and unknown emails get the same response.
pub async fn reset_password<R, N>(
    State(state): State<AuthAppState<R, N>>,
    client: ClientContext,
    body: Result<Json<ResetPasswordRequest>, JsonRejection>,
) -> AppResult<Response>
where
    R: AuthStore,
    N: ResetNotifier + Sync + 'static,
{
    let locale = client.locale;
    let fail = |e: AuthError| e.into_app_error(locale);

    let Json(req) = body.map_err(|e| fail(AuthError::InvalidBody(e.body_text())))?;

    let email = present(req.email).ok_or_else(|| fail(AuthError::MissingEmail))?;
    let email = Email::new(email).map_err(|e| fail(e.into()))?;

    let use_case = RequestPasswordResetUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.notifier),
        Arc::clone(&state.config),
    );
    use_case.execute(&email).await.map_err(fail)?;

    Ok((
        StatusCode::OK,
        Json(ActionResponse::ok(Message::ResetLinkRequested.text(locale))),
    )
        .into_response())
}
