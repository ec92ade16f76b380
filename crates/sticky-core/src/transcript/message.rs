//! Transcript message types.

use super::participant::Slot;
use serde::{Deserialize, Serialize};

/// A single message in the transcript.
///
/// Messages are immutable once appended and ordered by append time. A
/// message records the slot that was active when it was sent, not the
/// participant's name: renaming a participant retroactively relabels
/// rendered lines because display resolution goes through the slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The slot that was active when this message was appended.
    pub slot: Slot,
    /// The message text, already trimmed of surrounding whitespace.
    pub text: String,
    /// Timestamp when the message was appended (ISO 8601 format).
    /// Never part of rendered or exported output.
    pub sent_at: String,
}

impl Message {
    /// Creates a message for the given slot, stamped with the current time.
    pub fn new(slot: Slot, text: impl Into<String>) -> Self {
        Self {
            slot,
            text: text.into(),
            sent_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
