//! Domain Entities

pub mod auth_session;
pub mod credential;
pub mod password_reset;
pub mod user;
