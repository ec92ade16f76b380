use serde::Serialize;
use sticky_core::Slot;
use tauri::State;

use crate::app::AppState;

/// Serializable transcript line for Tauri IPC.
///
/// Carries the speaker's current name and color tag so the display layer
/// can decorate the line without a second round trip.
#[derive(Serialize, Clone)]
pub struct TranscriptLine {
    pub slot: Slot,
    pub speaker: String,
    pub color: String,
    pub text: String,
}

/// The participant currently permitted to compose a message.
#[derive(Serialize, Clone)]
pub struct ActiveSpeaker {
    pub slot: Slot,
    pub name: String,
    pub color: String,
}

/// Outcome of an append for Tauri IPC.
///
/// Empty or whitespace-only input is a silent no-op, reported as `Ignored`
/// so the frontend knows not to clear the input box.
#[derive(Serialize)]
#[serde(tag = "type", content = "data")]
pub enum AppendOutcome {
    /// The message was appended; the new line is ready to render.
    Appended(TranscriptLine),
    /// The input was empty after trimming; nothing changed.
    Ignored,
}

/// Appends a message attributed to the active speaker.
#[tauri::command]
pub async fn append_message(
    text: String,
    state: State<'_, AppState>,
) -> Result<AppendOutcome, String> {
    let mut engine = state.engine.lock().await;

    let appended = engine
        .append_message(&text)
        .map(|message| (message.slot, message.text.clone()));

    match appended {
        Some((slot, text)) => {
            let speaker = engine.participant(slot);
            tracing::debug!("Appended message for slot {:?}", slot);
            Ok(AppendOutcome::Appended(TranscriptLine {
                slot,
                speaker: speaker.name.clone(),
                color: speaker.color.clone(),
                text,
            }))
        }
        None => Ok(AppendOutcome::Ignored),
    }
}

/// Switches the turn to the other participant.
///
/// The frontend re-derives the header label and turn-button text from the
/// returned speaker.
#[tauri::command]
pub async fn switch_turn(state: State<'_, AppState>) -> Result<ActiveSpeaker, String> {
    let mut engine = state.engine.lock().await;
    engine.switch_turn();

    let active = engine.active_participant();
    Ok(ActiveSpeaker {
        slot: engine.active_slot(),
        name: active.name.clone(),
        color: active.color.clone(),
    })
}

/// Returns the currently active speaker (for the initial render).
#[tauri::command]
pub async fn get_active_speaker(state: State<'_, AppState>) -> Result<ActiveSpeaker, String> {
    let engine = state.engine.lock().await;

    let active = engine.active_participant();
    Ok(ActiveSpeaker {
        slot: engine.active_slot(),
        name: active.name.clone(),
        color: active.color.clone(),
    })
}

/// Returns the full transcript in append order.
///
/// Speaker names are resolved by slot at render time, so lines reflect
/// renames retroactively.
#[tauri::command]
pub async fn get_transcript(state: State<'_, AppState>) -> Result<Vec<TranscriptLine>, String> {
    let engine = state.engine.lock().await;

    let lines = engine
        .messages()
        .iter()
        .map(|message| {
            let speaker = engine.participant(message.slot);
            TranscriptLine {
                slot: message.slot,
                speaker: speaker.name.clone(),
                color: speaker.color.clone(),
                text: message.text.clone(),
            }
        })
        .collect();

    Ok(lines)
}

/// Empties the transcript unconditionally.
#[tauri::command]
pub async fn clear_transcript(state: State<'_, AppState>) -> Result<(), String> {
    let mut engine = state.engine.lock().await;
    let discarded = engine.len();
    engine.clear();

    tracing::info!("Cleared transcript ({} message(s) discarded)", discarded);
    Ok(())
}
