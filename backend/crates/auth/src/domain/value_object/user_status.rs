//! User Status Value Object

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// User account status
///
/// Stored as `SMALLINT`; unknown ids read back as `Disabled` so a row
/// written by a newer schema never grants login.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum UserStatus {
    /// Normal account
    #[default]
    #[display("active")]
    Active = 0,

    /// Cannot sign in
    #[display("disabled")]
    Disabled = 1,
}

impl UserStatus {
    /// Get numeric ID for database storage
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    /// Check if login is allowed
    #[inline]
    pub const fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Create from numeric ID
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => Self::Active,
            _ => Self::Disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for status in [UserStatus::Active, UserStatus::Disabled] {
            assert_eq!(UserStatus::from_id(status.id()), status);
        }
    }

    #[test]
    fn test_unknown_id_is_disabled() {
        assert_eq!(UserStatus::from_id(42), UserStatus::Disabled);
        assert!(!UserStatus::from_id(42).can_login());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserStatus::Active.to_string(), "active");
        assert_eq!(UserStatus::Disabled.to_string(), "disabled");
    }
}
