//! Application Layer
//!
//! Use cases and application services.

pub mod check_session;
pub mod config;
pub mod request_password_reset;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;

// Re-exports
pub use check_session::CheckSessionUseCase;
pub use config::AuthConfig;
pub use request_password_reset::RequestPasswordResetUseCase;
pub use sign_in::{ClientFingerprint, SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
