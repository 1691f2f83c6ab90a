//! Settings page

use axum::response::Html;

use super::layout::app_layout;

pub const TITLE: &str = "Settings";
pub const DESCRIPTION: &str = "Manage your account settings and generate sample data.";

/// Mount point for the client-side data generator widget
const DATA_GENERATOR: &str =
    r#"<div id="data-generator" data-widget="data-generator" aria-live="polite"></div>"#;

/// GET /settings
pub async fn settings_page() -> Html<String> {
    let content = format!(
        r#"<header>
<h1>{TITLE}</h1>
<p class="muted">{DESCRIPTION}</p>
</header>
<section>
{DATA_GENERATOR}
</section>"#
    );
    app_layout(TITLE, &content)
}
