use sticky_core::TranscriptEngine;
use tokio::sync::Mutex;

/// Application state shared across Tauri commands.
///
/// The engine is single-session and only ever touched from command
/// handlers in response to discrete user actions; the mutex exists because
/// Tauri shares managed state across handlers, not because there is any
/// concurrent mutation by design.
pub struct AppState {
    /// The transcript engine holding the whole session state.
    pub engine: Mutex<TranscriptEngine>,
    /// Window-level always-on-top flag, external to the engine's data model.
    /// The frontend re-derives the menu label from this on each render.
    pub always_on_top: Mutex<bool>,
}
