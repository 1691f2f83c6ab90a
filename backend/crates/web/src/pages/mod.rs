//! Server-rendered pages

pub mod auth;
pub mod home;
pub mod layout;
pub mod settings;

pub use self::auth::{login_page, register_page, reset_password_page};
pub use home::home_page;
pub use settings::settings_page;
