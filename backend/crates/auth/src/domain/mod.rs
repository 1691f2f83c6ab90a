//! Domain Layer
//!
//! Contains entities, value objects, repository traits and the reset
//! notification port.

pub mod entity;
pub mod notifier;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    auth_session::AuthSession, credential::Credential, password_reset::PasswordResetToken,
    user::User,
};
pub use notifier::ResetNotifier;
pub use repository::{
    AuthSessionRepository, AuthStore, CredentialRepository, PasswordResetRepository,
    UserRepository,
};
