use tauri::State;

use crate::app::AppState;

/// Writes the plain-text transcript to the user-chosen path, overwriting
/// any existing file.
///
/// The save dialog (with the `*.txt` filter) runs in the frontend via the
/// dialog plugin; this command only performs the write. The engine itself
/// has no file I/O.
#[tauri::command]
pub async fn export_transcript(path: String, state: State<'_, AppState>) -> Result<(), String> {
    let text = {
        let engine = state.engine.lock().await;
        engine.export_text()
    };

    tokio::fs::write(&path, &text)
        .await
        .map_err(|e| format!("Failed to write transcript to {}: {}", path, e))?;

    tracing::info!("Exported transcript to {}", path);
    Ok(())
}
