//! Page shells
//!
//! Callers pass trusted markup only; nothing from the request is
//! interpolated here.

use axum::response::Html;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #111827; background: #f9fafb; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem 1.5rem; }
nav { display: flex; gap: 1rem; padding: 1rem 1.5rem; border-bottom: 1px solid #e5e7eb; background: #fff; }
.auth-shell { min-height: 100vh; display: flex; align-items: center; justify-content: center; }
.auth-card { width: 100%; max-width: 24rem; padding: 2rem; background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
.auth-card form { display: flex; flex-direction: column; gap: 0.75rem; }
.muted { color: #6b7280; }
.form-message { min-height: 1.25rem; }
"#;

const LOGOUT_SCRIPT: &str = r#"
document.getElementById('logout').addEventListener('click', async () => {
  await fetch('/api/auth/logout', { method: 'POST' });
  window.location.href = '/auth/login';
});
"#;

/// Full HTML document around `body`
pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Dashboard</title>
<style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Dashboard chrome: top navigation plus main column
pub fn app_layout(title: &str, content: &str) -> Html<String> {
    let body = format!(
        r#"<nav>
<a href="/">Dashboard</a>
<a href="/settings">Settings</a>
<button type="button" id="logout">Sign out</button>
</nav>
<main>
{content}
</main>
<script>{LOGOUT_SCRIPT}</script>"#
    );
    Html(document(title, &body))
}

/// Centered card shared by the login, register and reset pages
pub fn auth_layout(title: &str, content: &str) -> Html<String> {
    let body = format!(
        r#"<div class="auth-shell">
<section class="auth-card">
<h1>{title}</h1>
{content}
</section>
</div>"#
    );
    Html(document(title, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_layout_wraps_content() {
        let Html(html) = auth_layout("Sign in", "<p>inner</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Sign in | Dashboard</title>"));
        assert!(html.contains(r#"<section class="auth-card">"#));
        assert!(html.contains("<p>inner</p>"));
    }

    #[test]
    fn test_app_layout_has_navigation() {
        let Html(html) = app_layout("Home", "");
        assert!(html.contains(r#"href="/settings""#));
        assert!(html.contains("/api/auth/logout"));
    }
}
