//! Session Token
//!
//! Cookie value format: `<session_id>.<base64url(HMAC-SHA256(secret, session_id))>`.
//! A token whose signature does not verify is never looked up in storage.

use kernel::id::SessionId;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};

/// Generate signed session token
pub fn sign(session_id: &SessionId, secret: &[u8]) -> String {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes());
    format!("{}.{}", session_id, to_base64url(&signature))
}

/// Parse and verify session token
pub fn verify(token: &str, secret: &[u8]) -> Option<SessionId> {
    let (session_id, signature_b64) = token.split_once('.')?;
    let signature = from_base64url(signature_b64).ok()?;

    if !verify_hmac_sha256(secret, session_id.as_bytes(), &signature) {
        return None;
    }

    session_id.parse().ok()
}
