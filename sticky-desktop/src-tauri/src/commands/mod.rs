pub mod export;
pub mod participants;
pub mod transcript;
pub mod window;

pub use export::*;
pub use participants::*;
pub use transcript::*;
pub use window::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        transcript::append_message,
        transcript::switch_turn,
        transcript::get_active_speaker,
        transcript::get_transcript,
        transcript::clear_transcript,
        participants::get_participants,
        participants::rename_participant,
        export::export_transcript,
        window::toggle_always_on_top,
        window::get_always_on_top,
    ]
}
