//! Landing page

use axum::response::Html;

use super::layout::app_layout;

/// GET /
pub async fn home_page() -> Html<String> {
    app_layout(
        "Home",
        r#"<h1>Dashboard</h1>
<ul>
<li><a href="/settings">Settings</a></li>
<li><a href="/auth/login">Sign in</a></li>
</ul>"#,
    )
}
