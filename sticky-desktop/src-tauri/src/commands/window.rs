use tauri::{State, WebviewWindow};

use crate::app::AppState;

/// Toggles the always-on-top flag and applies it to the window.
///
/// Returns the new state; the frontend re-derives the menu label from it
/// instead of mutating label text ad hoc. Has no effect on transcript
/// semantics.
#[tauri::command]
pub async fn toggle_always_on_top(
    window: WebviewWindow,
    state: State<'_, AppState>,
) -> Result<bool, String> {
    let mut flag = state.always_on_top.lock().await;
    let enabled = !*flag;

    window
        .set_always_on_top(enabled)
        .map_err(|e| e.to_string())?;
    *flag = enabled;

    tracing::info!("Always on top: {}", enabled);
    Ok(enabled)
}

/// Returns the current always-on-top flag (for the initial render).
#[tauri::command]
pub async fn get_always_on_top(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(*state.always_on_top.lock().await)
}
