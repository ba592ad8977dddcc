use file_flow::{FileService, HistoryStore};
use tauri::Manager;
use tracing_subscriber::EnvFilter;

mod commands;
mod dialogs;
mod menu;

use dialogs::TauriDialogs;

/// Services shared by every command, built once in `setup`.
pub struct EditorState {
    pub files: FileService<TauriDialogs<tauri::Wry>>,
    pub history: HistoryStore,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.set_focus();
            }
        }))
        .plugin(tauri_plugin_dialog::init())
        .menu(|app| menu::build_menu(app))
        .on_menu_event(|app, event| menu::handle_menu_event(app, &event))
        .setup(|app| {
            app.manage(EditorState {
                files: FileService::new(TauriDialogs::new(app.handle().clone())),
                history: HistoryStore::from_user_config(),
            });
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::open_file,
            commands::save_file,
            commands::save_file_as,
            commands::read_file,
            commands::load_file_history,
            commands::save_file_history
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

#[cfg(test)]
mod tests {
    #[test]
    fn webview_gets_only_core_permissions() {
        let capability: serde_json::Value =
            serde_json::from_str(include_str!("../capabilities/default.json")).unwrap();
        assert_eq!(capability["windows"], serde_json::json!(["main"]));
        assert_eq!(capability["permissions"], serde_json::json!(["core:default"]));
    }
}
