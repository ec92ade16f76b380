//! Participant types.
//!
//! The transcript always has exactly two participants, one per fixed slot.
//! Slots are modeled as an enum so an out-of-range participant index is
//! unrepresentable inside the engine.

use serde::{Deserialize, Serialize};

/// Default display color for the first slot (light blue).
pub const DEFAULT_FIRST_COLOR: &str = "#ADD8E6";
/// Default display color for the second slot (gold).
pub const DEFAULT_SECOND_COLOR: &str = "#FFD700";

/// One of the two fixed participant positions.
///
/// Slot order is stable for the process lifetime: `First` is slot 0,
/// `Second` is slot 1. The numeric form only exists at the IPC boundary;
/// engine code works with the enum directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Slot 0.
    First,
    /// Slot 1.
    Second,
}

impl Slot {
    /// Both slots in slot order.
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    /// Returns the other slot (the 0↔1 toggle).
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    /// Returns the numeric index of this slot (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

impl TryFrom<usize> for Slot {
    type Error = crate::error::StickyError;

    fn try_from(index: usize) -> crate::error::Result<Slot> {
        match index {
            0 => Ok(Slot::First),
            1 => Ok(Slot::Second),
            other => Err(crate::error::StickyError::internal(format!(
                "Invalid participant slot index: {}",
                other
            ))),
        }
    }
}

/// A chat participant occupying one slot.
///
/// The name is mutable via the rename operation; the color is assigned to
/// the slot at startup and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name shown in rendered transcript lines and the header.
    pub name: String,
    /// Color tag the display layer uses to decorate this participant's lines.
    pub color: String,
}

impl Participant {
    /// Creates a participant with the given name and color.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// The default pair of participants, matching the slot order:
    /// "User 1" (light blue) and "User 2" (gold).
    pub fn default_pair() -> [Participant; 2] {
        [
            Participant::new("User 1", DEFAULT_FIRST_COLOR),
            Participant::new("User 2", DEFAULT_SECOND_COLOR),
        ]
    }
}
