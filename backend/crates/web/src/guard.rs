//! Route Guard
//!
//! Decides per request whether a page may be served, given the
//! [`AuthStatus`] left by the session middleware:
//! - static assets always pass
//! - protected prefixes require a session, otherwise redirect to login
//!   with the requested path as `callbackUrl`
//! - signed-in users are sent home from the login/register pages

use std::sync::Arc;

use auth::middleware::AuthStatus;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

#[derive(Debug, Clone)]
pub struct GuardConfig {
    /// Paths below these prefixes need a session
    pub protected_prefixes: Vec<String>,
    /// Pages a signed-in user has no business on
    pub guest_only_paths: Vec<String>,
    /// Exact static asset paths
    pub static_paths: Vec<String>,
    /// Static asset directory prefixes
    pub static_prefixes: Vec<String>,
    pub login_path: String,
    pub home_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: vec![
                "/settings".to_string(),
                "/dashboard".to_string(),
                "/profile".to_string(),
            ],
            guest_only_paths: vec!["/auth/login".to_string(), "/auth/register".to_string()],
            static_paths: vec!["/favicon.ico".to_string(), "/robots.txt".to_string()],
            static_prefixes: vec!["/static".to_string()],
            login_path: "/auth/login".to_string(),
            home_path: "/".to_string(),
        }
    }
}

/// Outcome of the guard for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Carries the full `Location`
    RedirectToLogin(String),
    RedirectHome,
}

/// `prefix` itself or anything below it, never a sibling like `/settings-old`
fn under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Accepts a post-login target only if it is a plain same-origin path.
///
/// Backslashes and anything outside a conservative URL character set are
/// refused; browsers fold `/\host` into `//host`.
pub fn safe_callback(target: &str) -> Option<&str> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || "/-._~%?=&+:@!,;*()".contains(c);

    (target.starts_with('/') && !target.starts_with("//") && target.chars().all(allowed))
        .then_some(target)
}

impl GuardConfig {
    pub fn is_static(&self, path: &str) -> bool {
        self.static_paths.iter().any(|p| p == path)
            || self.static_prefixes.iter().any(|p| under(path, p))
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes.iter().any(|p| under(path, p))
    }

    pub fn is_guest_only(&self, path: &str) -> bool {
        self.guest_only_paths.iter().any(|p| under(path, p))
    }

    /// Login URL that brings the user back to `path` afterwards
    pub fn login_redirect(&self, path: &str) -> String {
        format!(
            "{}?callbackUrl={}",
            self.login_path,
            urlencoding::encode(path)
        )
    }

    pub fn decide(&self, path: &str, authenticated: bool) -> GuardDecision {
        if self.is_static(path) {
            return GuardDecision::Allow;
        }

        if !authenticated && self.is_protected(path) {
            return GuardDecision::RedirectToLogin(self.login_redirect(path));
        }

        if authenticated && self.is_guest_only(path) {
            return GuardDecision::RedirectHome;
        }

        GuardDecision::Allow
    }
}

/// Middleware; must run inside `check_auth_session`
pub async fn route_guard(
    State(config): State<Arc<GuardConfig>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let authenticated = req
        .extensions()
        .get::<AuthStatus>()
        .is_some_and(|status| status.is_authenticated);

    match config.decide(req.uri().path(), authenticated) {
        GuardDecision::Allow => next.run(req).await,
        GuardDecision::RedirectToLogin(location) => {
            tracing::debug!(path = req.uri().path(), %location, "Guard: login required");
            Redirect::temporary(&location).into_response()
        }
        GuardDecision::RedirectHome => {
            tracing::debug!(path = req.uri().path(), "Guard: already signed in");
            Redirect::temporary(&config.home_path).into_response()
        }
    }
}
