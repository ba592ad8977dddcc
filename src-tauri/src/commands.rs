use file_flow::{FileHistoryItem, OpenFileResult};
use tauri::State;
use tracing::error;

use crate::EditorState;

fn report(action: &str) -> impl FnOnce(file_flow::Error) -> String + '_ {
    move |e| {
        error!(error = %e, "{action} failed");
        e.to_string()
    }
}

// Dialog commands run async so the blocking pickers stay off the main thread.
#[tauri::command]
pub async fn open_file(state: State<'_, EditorState>) -> Result<OpenFileResult, String> {
    state.files.open_file().map_err(report("open file"))
}

#[tauri::command]
pub async fn save_file_as(state: State<'_, EditorState>, content: String) -> Result<String, String> {
    state.files.save_file_as(&content).map_err(report("save file as"))
}

#[tauri::command]
pub fn save_file(state: State<'_, EditorState>, file_path: String, content: String) -> Result<(), String> {
    state
        .files
        .save_file(&file_path, &content)
        .map_err(report("save file"))
}

#[tauri::command]
pub fn read_file(state: State<'_, EditorState>, file_path: String) -> Result<String, String> {
    state.files.read_file(&file_path).map_err(report("read file"))
}

#[tauri::command]
pub fn load_file_history(state: State<'_, EditorState>) -> Vec<FileHistoryItem> {
    state.history.load()
}

#[tauri::command]
pub fn save_file_history(
    state: State<'_, EditorState>,
    history: Vec<FileHistoryItem>,
) -> Result<(), String> {
    state.history.save(&history).map_err(report("save file history"))
}
