//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Login
// ============================================================================

/// Login request
///
/// Fields are optional so that a missing field is reported as a
/// validation error rather than a body decoding error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub remember_me: bool,
}

// ============================================================================
// Password Reset
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
}

// ============================================================================
// Common
// ============================================================================

/// `{success, message}` body shared by the auth routes
#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: &'static str,
}

impl ActionResponse {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_camel_case() {
        let req: LoginRequest = serde_json::from_str(
            r#"{"email":"a@example.com","password":"pw","rememberMe":true}"#,
        )
        .unwrap();
        assert!(req.remember_me);
        assert_eq!(req.email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn test_login_request_missing_fields() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_none());
        assert!(req.password.is_none());
        assert!(!req.remember_me);
    }
}
