//! Transcript domain module.
//!
//! This module contains the turn-based transcript engine and its domain
//! models.
//!
//! # Module Structure
//!
//! - `participant`: Participant slot and identity types (`Slot`, `Participant`)
//! - `message`: Transcript message type (`Message`)
//! - `engine`: The session state engine (`TranscriptEngine`)

mod engine;
mod message;
mod participant;

#[cfg(test)]
mod engine_test;

// Re-export public API
pub use engine::TranscriptEngine;
pub use message::Message;
pub use participant::{Participant, Slot, DEFAULT_FIRST_COLOR, DEFAULT_SECOND_COLOR};
