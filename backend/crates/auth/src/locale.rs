//! User-facing messages in English and Japanese
//!
//! The locale comes from the first supported tag of `Accept-Language`.

use axum::http::{HeaderMap, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    /// Pick the first supported language tag, ignoring q-values
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|value| {
                value.split(',').find_map(|part| {
                    let tag = part.split(';').next()?.trim();
                    let primary = tag.split(['-', '_']).next()?;
                    Self::from_primary_tag(primary)
                })
            })
            .unwrap_or_default()
    }

    fn from_primary_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ja" => Some(Self::Ja),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

/// Every message the auth routes put on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LoginSucceeded,
    LogoutSucceeded,
    ResetLinkRequested,
    MissingCredentials,
    MissingEmail,
    InvalidEmail,
    InvalidBody,
    InvalidCredentials,
    AccountLocked,
    AccountDisabled,
    SessionInvalid,
    InternalError,
}

impl Message {
    pub fn text(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::LoginSucceeded, Locale::En) => "Signed in successfully",
            (Self::LoginSucceeded, Locale::Ja) => "ログインしました",

            (Self::LogoutSucceeded, Locale::En) => "Signed out successfully",
            (Self::LogoutSucceeded, Locale::Ja) => "ログアウトしました",

            (Self::ResetLinkRequested, Locale::En) => {
                "If an account exists for that email, a password reset link has been sent"
            }
            (Self::ResetLinkRequested, Locale::Ja) => {
                "該当するアカウントが存在する場合、パスワード再設定用のリンクを送信しました"
            }

            (Self::MissingCredentials, Locale::En) => "Email and password are required",
            (Self::MissingCredentials, Locale::Ja) => "メールアドレスとパスワードを入力してください",

            (Self::MissingEmail, Locale::En) => "Email is required",
            (Self::MissingEmail, Locale::Ja) => "メールアドレスを入力してください",

            (Self::InvalidEmail, Locale::En) => "Invalid email address",
            (Self::InvalidEmail, Locale::Ja) => "メールアドレスの形式が正しくありません",

            (Self::InvalidBody, Locale::En) => "Request body is not valid JSON",
            (Self::InvalidBody, Locale::Ja) => "リクエストの形式が正しくありません",

            (Self::InvalidCredentials, Locale::En) => "Invalid email or password",
            (Self::InvalidCredentials, Locale::Ja) => {
                "メールアドレスまたはパスワードが正しくありません"
            }

            (Self::AccountLocked, Locale::En) => {
                "Too many failed attempts. Please try again later"
            }
            (Self::AccountLocked, Locale::Ja) => {
                "ログインの試行回数が上限に達しました。しばらくしてから再度お試しください"
            }

            (Self::AccountDisabled, Locale::En) => "This account is disabled",
            (Self::AccountDisabled, Locale::Ja) => "このアカウントは無効化されています",

            (Self::SessionInvalid, Locale::En) => "Session is invalid or has expired",
            (Self::SessionInvalid, Locale::Ja) => "セッションが無効か期限切れです",

            (Self::InternalError, Locale::En) => "Internal server error",
            (Self::InternalError, Locale::Ja) => "サーバーエラーが発生しました",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn locale(accept_language: &'static str) -> Locale {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(accept_language),
        );
        Locale::from_headers(&headers)
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::from_headers(&HeaderMap::new()), Locale::En);
        assert_eq!(locale("fr-FR, de;q=0.8"), Locale::En);
    }

    #[test]
    fn test_first_supported_tag_wins() {
        assert_eq!(locale("ja-JP,ja;q=0.9,en;q=0.8"), Locale::Ja);
        assert_eq!(locale("fr, en-US;q=0.9, ja;q=0.8"), Locale::En);
        assert_eq!(locale("JA"), Locale::Ja);
    }

    #[test]
    fn test_messages_differ_by_locale() {
        let en = Message::InvalidCredentials.text(Locale::En);
        let ja = Message::InvalidCredentials.text(Locale::Ja);
        assert_ne!(en, ja);
    }
}
