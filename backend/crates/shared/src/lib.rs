//! Shared Kernel
//!
//! Vocabulary shared by every crate in the dashboard backend:
//! - [`error::app_error::AppError`], the error that crosses the HTTP boundary
//! - [`error::kind::ErrorKind`], its classification onto status codes
//! - typed entity IDs
//!
//! Nothing domain specific lives here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
