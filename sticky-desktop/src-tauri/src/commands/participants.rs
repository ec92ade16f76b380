use serde::Serialize;
use sticky_core::Slot;
use tauri::State;

use crate::app::AppState;

/// Serializable participant snapshot for Tauri IPC.
#[derive(Serialize, Clone)]
pub struct ParticipantInfo {
    pub slot: Slot,
    pub name: String,
    pub color: String,
}

fn snapshot(engine: &sticky_core::TranscriptEngine) -> Vec<ParticipantInfo> {
    Slot::ALL
        .iter()
        .map(|&slot| {
            let participant = engine.participant(slot);
            ParticipantInfo {
                slot,
                name: participant.name.clone(),
                color: participant.color.clone(),
            }
        })
        .collect()
}

/// Returns both participants in slot order.
#[tauri::command]
pub async fn get_participants(state: State<'_, AppState>) -> Result<Vec<ParticipantInfo>, String> {
    let engine = state.engine.lock().await;
    Ok(snapshot(&engine))
}

/// Renames the participant in the given slot.
///
/// Empty or whitespace-only input leaves the old name in place. Returns the
/// refreshed participant list so the frontend can re-render labels in one
/// step. Out-of-range slots never reach the engine: serde rejects them at
/// the IPC boundary.
#[tauri::command]
pub async fn rename_participant(
    slot: Slot,
    new_name: String,
    state: State<'_, AppState>,
) -> Result<Vec<ParticipantInfo>, String> {
    let mut engine = state.engine.lock().await;

    if engine.rename_participant(slot, &new_name) {
        tracing::info!("Renamed slot {:?} to {:?}", slot, new_name.trim());
    } else {
        tracing::debug!("Ignored empty rename for slot {:?}", slot);
    }

    Ok(snapshot(&engine))
}
