use sticky_core::TranscriptEngine;
use tokio::sync::Mutex;

use crate::app::config_service::ConfigService;
use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
    /// Initial always-on-top flag, applied to the window during setup.
    pub always_on_top: bool,
}

/// Composition root: loads the startup configuration and builds the
/// Tauri-managed application state.
///
/// Configuration only seeds the session (participant names/colors and the
/// initial always-on-top flag); renames and toggles during the session are
/// never written back.
pub fn bootstrap() -> AppBootstrap {
    let config_service = ConfigService::new();
    let config = config_service.get_config();

    let participants = config.participant_pair();
    tracing::info!(
        "[Bootstrap] Participants: {:?} / {:?}",
        participants[0].name,
        participants[1].name
    );

    let engine = TranscriptEngine::with_participants(participants);
    let always_on_top = config.always_on_top;

    let app_state = AppState {
        engine: Mutex::new(engine),
        always_on_top: Mutex::new(always_on_top),
    };

    AppBootstrap {
        app_state,
        always_on_top,
    }
}
