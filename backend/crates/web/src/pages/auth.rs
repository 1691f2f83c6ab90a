//! Auth pages, rendered inside [`auth_layout`]
//!
//! Forms submit JSON to the `/api/auth/*` routes from a small inline
//! script. The only query parameter reflected into the markup is a
//! `callbackUrl` that passed [`safe_callback`].

use axum::extract::RawQuery;
use axum::response::Html;

use super::layout::auth_layout;
use crate::guard::safe_callback;

const LOGIN_FORM: &str = r#"<form id="login-form" data-callback="{callback}" novalidate>
<label>Email <input type="email" name="email" autocomplete="username" required></label>
<label>Password <input type="password" name="password" autocomplete="current-password" required></label>
<label><input type="checkbox" name="rememberMe"> Keep me signed in</label>
<button type="submit">Sign in</button>
<p class="form-message" role="alert"></p>
</form>
<p><a href="/auth/reset-password">Forgot your password?</a></p>
<p class="muted"><a href="/auth/register">Need an account?</a></p>"#;

// The callback was vetted server-side; the origin check is repeated here.
const LOGIN_SCRIPT: &str = r#"
const form = document.getElementById('login-form');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const data = new FormData(form);
  const res = await fetch('/api/auth/login', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({
      email: data.get('email'),
      password: data.get('password'),
      rememberMe: data.get('rememberMe') === 'on',
    }),
  });
  const body = await res.json().catch(() => ({}));
  if (!res.ok) {
    form.querySelector('.form-message').textContent = body.error || 'Sign in failed';
    return;
  }
  const dest = new URL(form.dataset.callback || '/', window.location.origin);
  window.location.href =
    dest.origin === window.location.origin ? dest.pathname + dest.search : '/';
});
"#;

const REGISTER_CONTENT: &str = r#"<p class="muted">Accounts are created by an administrator. Ask your workspace owner for an invitation.</p>
<p><a href="/auth/login">Back to sign in</a></p>"#;

const RESET_FORM: &str = r#"<form id="reset-form" novalidate>
<label>Email <input type="email" name="email" autocomplete="email" required></label>
<button type="submit">Send reset link</button>
<p class="form-message" role="status"></p>
</form>
<p><a href="/auth/login">Back to sign in</a></p>"#;

const RESET_SCRIPT: &str = r#"
const form = document.getElementById('reset-form');
form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const res = await fetch('/api/auth/reset-password', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ email: new FormData(form).get('email') }),
  });
  const body = await res.json().catch(() => ({}));
  form.querySelector('.form-message').textContent = body.message || body.error || '';
});
"#;

fn with_script(markup: &str, script: &str) -> String {
    format!("{markup}\n<script>{script}</script>")
}

/// `callbackUrl` from the raw query, if present and safe to follow
fn callback_from_query(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "callbackUrl")
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .and_then(|value| safe_callback(&value).map(str::to_string))
}

/// GET /auth/login
pub async fn login_page(RawQuery(query): RawQuery) -> Html<String> {
    let callback = callback_from_query(query.as_deref()).unwrap_or_else(|| "/".to_string());
    // `&` is the only markup-significant character safe_callback lets through
    let form = LOGIN_FORM.replace("{callback}", &callback.replace('&', "&amp;"));
    auth_layout("Sign in", &with_script(&form, LOGIN_SCRIPT))
}

/// GET /auth/register
pub async fn register_page() -> Html<String> {
    auth_layout("Create an account", REGISTER_CONTENT)
}

/// GET /auth/reset-password
pub async fn reset_password_page() -> Html<String> {
    auth_layout("Reset your password", &with_script(RESET_FORM, RESET_SCRIPT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_from_query() {
        assert_eq!(
            callback_from_query(Some("callbackUrl=%2Fsettings")),
            Some("/settings".to_string())
        );
        assert_eq!(
            callback_from_query(Some("lang=ja&callbackUrl=%2Fdashboard%3Ftab%3D1")),
            Some("/dashboard?tab=1".to_string())
        );
    }

    #[test]
    fn test_callback_from_query_drops_unsafe_targets() {
        assert_eq!(callback_from_query(None), None);
        assert_eq!(callback_from_query(Some("callbackUrl=%2F%5Cevil.example")), None);
        assert_eq!(callback_from_query(Some("callbackUrl=%2F%2Fevil.example")), None);
        assert_eq!(callback_from_query(Some("callbackUrl=https%3A%2F%2Fevil.example")), None);
    }
}
