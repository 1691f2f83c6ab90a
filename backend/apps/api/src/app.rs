//! Router assembly
//!
//! Request path: CORS → trace → session status → route guard → handler.

use std::sync::Arc;

use auth::domain::{AuthStore, ResetNotifier};
use auth::middleware::{AuthMiddlewareState, check_auth_session};
use auth::{AuthConfig, auth_router};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware::from_fn_with_state,
};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use web::{GuardConfig, pages_router, route_guard};

pub fn build_router<R, N>(
    repo: Arc<R>,
    notifier: Arc<N>,
    auth_config: Arc<AuthConfig>,
    guard_config: GuardConfig,
    allowed_origins: Vec<HeaderValue>,
) -> Router
where
    R: AuthStore,
    N: ResetNotifier + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ]))
        .allow_credentials(true);

    let session_state = AuthMiddlewareState {
        repo: Arc::clone(&repo),
        config: Arc::clone(&auth_config),
    };

    Router::new()
        .nest("/api/auth", auth_router(repo, notifier, auth_config))
        .merge(pages_router())
        .layer(from_fn_with_state(Arc::new(guard_config), route_guard))
        .layer(from_fn_with_state(session_state, check_auth_session::<R>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
