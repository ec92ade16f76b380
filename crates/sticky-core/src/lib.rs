//! StickyChat core: the turn-based transcript engine.
//!
//! This crate owns the whole session state of the StickyChat widget — the
//! two participant identities, the active-speaker slot, and the append-only
//! message log — and exposes the operations the desktop shell drives from
//! user actions. It is purely synchronous and has no UI, file, or network
//! dependencies, so the engine is testable without instantiating any
//! toolkit.

pub mod config;
pub mod error;
pub mod transcript;

// Re-export common types
pub use error::{Result, StickyError};
pub use transcript::{Message, Participant, Slot, TranscriptEngine};
