//! Auth Session Entity
//!
//! Represents an authenticated user session.
//! Stored in database with cookie-based token reference.

use chrono::{DateTime, Duration, Utc};
use kernel::id::{SessionId, UserId};
use platform::{client::ClientFingerprint, crypto::constant_time_eq};

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: SessionId,
    /// Reference to User
    pub user_id: UserId,
    /// Session expiration
    pub expires_at: DateTime<Utc>,
    /// Whether "Remember Me" was checked
    pub remember_me: bool,
    /// Client fingerprint hash (User-Agent based)
    pub client_fingerprint_hash: Vec<u8>,
    /// Client IP (optional, for logging)
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Last activity timestamp
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(
        user_id: UserId,
        remember_me: bool,
        fingerprint: &ClientFingerprint,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            session_id: SessionId::new(),
            user_id,
            expires_at: now + ttl,
            remember_me,
            client_fingerprint_hash: fingerprint.hash_vec(),
            client_ip: fingerprint.ip_string(),
            user_agent: fingerprint.user_agent.clone(),
            created_at: now,
            last_activity_at: now,
        }
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check the presenting client against the one that created the session
    pub fn matches_fingerprint(&self, fingerprint: &ClientFingerprint) -> bool {
        constant_time_eq(&self.client_fingerprint_hash, &fingerprint.hash)
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Extend session if "Remember Me" is enabled
    ///
    /// Extends to (now + ttl_long) once remaining time falls below half of
    /// ttl_long. Returns whether the expiry moved.
    pub fn extend_if_needed(&mut self, ttl_long: Duration) -> bool {
        if !self.remember_me {
            return false;
        }

        let now = Utc::now();
        if self.expires_at < now + ttl_long / 2 {
            self.expires_at = now + ttl_long;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, HeaderValue, header};

    fn fingerprint(user_agent: &'static str) -> ClientFingerprint {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(user_agent));
        ClientFingerprint::from_headers(&headers, None)
    }

    #[test]
    fn test_new_session_not_expired() {
        let session = AuthSession::new(
            UserId::new(),
            false,
            &fingerprint("test-agent"),
            Duration::hours(12),
        );
        assert!(!session.is_expired());
        assert_eq!(session.user_agent.as_deref(), Some("test-agent"));
    }

    #[test]
    fn test_zero_ttl_is_expired() {
        let session = AuthSession::new(
            UserId::new(),
            false,
            &fingerprint("test-agent"),
            Duration::zero(),
        );
        assert!(session.is_expired());
    }

    #[test]
    fn test_fingerprint_match() {
        let session = AuthSession::new(
            UserId::new(),
            false,
            &fingerprint("agent-a"),
            Duration::hours(1),
        );
        assert!(session.matches_fingerprint(&fingerprint("agent-a")));
        assert!(!session.matches_fingerprint(&fingerprint("agent-b")));
    }

    #[test]
    fn test_extend_only_remember_me() {
        let ttl_long = Duration::days(7);
        let mut session = AuthSession::new(
            UserId::new(),
            false,
            &fingerprint("agent"),
            Duration::hours(1),
        );
        assert!(!session.extend_if_needed(ttl_long));

        session.remember_me = true;
        assert!(session.extend_if_needed(ttl_long));
        assert!(session.expires_at > Utc::now() + Duration::days(6));
    }

    #[test]
    fn test_no_extend_when_plenty_remaining() {
        let ttl_long = Duration::days(7);
        let mut session =
            AuthSession::new(UserId::new(), true, &fingerprint("agent"), ttl_long);
        let before = session.expires_at;

        assert!(!session.extend_if_needed(ttl_long));
        assert_eq!(session.expires_at, before);
    }
}
