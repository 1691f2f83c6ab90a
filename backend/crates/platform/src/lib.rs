//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations used by the auth provider:
//! - Cryptographic utilities (SHA-256, HMAC-SHA256, Base64url, random tokens)
//! - Password hashing (Argon2id)
//! - Cookie building and parsing
//! - Client identification (fingerprint, client IP)

pub mod client;
pub mod cookie;
pub mod crypto;
pub mod password;
