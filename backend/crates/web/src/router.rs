//! Page Router

use axum::{Router, routing::get};

use crate::pages;

/// Page routes; gate them with [`crate::guard::route_guard`]
pub fn pages_router() -> Router {
    Router::new()
        .route("/", get(pages::home_page))
        .route("/settings", get(pages::settings_page))
        .route("/auth/login", get(pages::login_page))
        .route("/auth/register", get(pages::register_page))
        .route("/auth/reset-password", get(pages::reset_password_page))
}
