//! Type-safe room identifier.
//!
//! [`RoomId`] is a newtype wrapper around a positive integer. The clinic
//! floor has rooms 1 through [`ROOM_COUNT`], but the protocol only
//! enforces positivity server-side; the set of physical rooms is a
//! deployment detail of the displays.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::KioskError;

/// Number of physical rooms on the clinic floor.
pub const ROOM_COUNT: i32 = 5;

/// Identifier of a physical room.
///
/// Guaranteed positive on construction. Used as the upsert key in the
/// `room_state` table, so exactly one snapshot document exists per id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RoomId(i32);

impl RoomId {
    /// Creates a `RoomId` from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRoomId`] if the value is not
    /// positive.
    pub fn new(value: i32) -> Result<Self, KioskError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(KioskError::InvalidRoomId(value.to_string()))
        }
    }

    /// Parses a `RoomId` from a path segment.
    ///
    /// # Errors
    ///
    /// Returns [`KioskError::InvalidRoomId`] if the segment is not a
    /// positive integer.
    pub fn parse(segment: &str) -> Result<Self, KioskError> {
        segment
            .trim()
            .parse::<i32>()
            .map_err(|_| KioskError::InvalidRoomId(segment.to_string()))
            .and_then(Self::new)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_ids() {
        for value in 1..=ROOM_COUNT {
            assert!(RoomId::new(value).is_ok());
        }
        // Above the physical set is still protocol-valid.
        assert!(RoomId::new(99).is_ok());
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(RoomId::new(0).is_err());
        assert!(RoomId::new(-3).is_err());
    }

    #[test]
    fn parse_accepts_digits_only() {
        let Ok(id) = RoomId::parse("4") else {
            panic!("expected valid room id");
        };
        assert_eq!(id.get(), 4);

        assert!(RoomId::parse("abc").is_err());
        assert!(RoomId::parse("").is_err());
        assert!(RoomId::parse("0").is_err());
        assert!(RoomId::parse("2.5").is_err());
    }

    #[test]
    fn serializes_as_bare_number() {
        let Ok(id) = RoomId::new(3) else {
            panic!("expected valid room id");
        };
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("3"));
    }
}
