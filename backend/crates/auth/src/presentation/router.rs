//! Auth Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::AuthConfig;
use crate::domain::notifier::ResetNotifier;
use crate::domain::repository::AuthStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
///
/// Mount under `/api/auth`.
pub fn auth_router<R, N>(repo: Arc<R>, notifier: Arc<N>, config: Arc<AuthConfig>) -> Router
where
    R: AuthStore,
    N: ResetNotifier + Sync + 'static,
{
    let state = AuthAppState {
        repo,
        notifier,
        config,
    };

    Router::new()
        .route("/login", post(handlers::login::<R, N>))
        .route("/logout", post(handlers::logout::<R, N>))
        .route("/reset-password", post(handlers::reset_password::<R, N>))
        .with_state(state)
}
