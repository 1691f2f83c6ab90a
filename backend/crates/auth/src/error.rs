//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::email::EmailError;
use crate::locale::{Locale, Message};

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login body without email or password
    #[error("Email and password are required")]
    MissingCredentials,

    /// Reset request without email
    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Body could not be decoded as the expected JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Account is locked (too many failed attempts)
    #[error("Account is temporarily locked")]
    AccountLocked,

    /// Account is disabled
    #[error("Account is disabled")]
    AccountDisabled,

    /// Session not found or expired
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Session fingerprint mismatch
    #[error("Session fingerprint mismatch")]
    SessionFingerprintMismatch,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::MissingEmail
            | AuthError::InvalidEmail(_)
            | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials
            | AuthError::AccountLocked
            | AuthError::AccountDisabled
            | AuthError::SessionInvalid
            | AuthError::SessionFingerprintMismatch => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// User-facing message; server-side detail stays in the logs
    pub fn message(&self) -> Message {
        match self {
            AuthError::MissingCredentials => Message::MissingCredentials,
            AuthError::MissingEmail => Message::MissingEmail,
            AuthError::InvalidEmail(_) => Message::InvalidEmail,
            AuthError::InvalidBody(_) => Message::InvalidBody,
            AuthError::InvalidCredentials => Message::InvalidCredentials,
            AuthError::AccountLocked => Message::AccountLocked,
            AuthError::AccountDisabled => Message::AccountDisabled,
            AuthError::SessionInvalid | AuthError::SessionFingerprintMismatch => {
                Message::SessionInvalid
            }
            AuthError::Database(_) | AuthError::Internal(_) => Message::InternalError,
        }
    }

    /// Log, then convert to a localised AppError
    pub fn into_app_error(self, locale: Locale) -> AppError {
        self.log();
        let error = AppError::new(self.kind(), self.message().text(locale));
        match self {
            AuthError::Database(e) => error.with_source(e),
            _ => error,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::AccountLocked => {
                tracing::warn!("Login attempt on locked account");
            }
            AuthError::AccountDisabled => {
                tracing::warn!("Login attempt on disabled account");
            }
            AuthError::SessionFingerprintMismatch => {
                tracing::warn!("Session fingerprint mismatch detected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.into_app_error(Locale::default()).into_response()
    }
}
