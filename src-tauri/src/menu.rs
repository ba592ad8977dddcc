use file_flow::menu::{action_for, MenuAction, MenuEntry, FILE_MENU, FILE_MENU_TITLE};
use tauri::menu::{Menu, MenuBuilder, MenuEvent, MenuItem, SubmenuBuilder};
use tauri::{AppHandle, Emitter, Runtime};
use tracing::{debug, error, info};

/// Build the application menu bar from the File menu table.
pub fn build_menu<R: Runtime>(app: &AppHandle<R>) -> tauri::Result<Menu<R>> {
    let mut file_menu = SubmenuBuilder::new(app, FILE_MENU_TITLE);
    for entry in FILE_MENU {
        file_menu = match entry {
            MenuEntry::Item(spec) => {
                let item = MenuItem::with_id(app, spec.id, spec.label, true, Some(spec.accelerator))?;
                file_menu.item(&item)
            }
            MenuEntry::Separator => file_menu.separator(),
        };
    }
    let file_menu = file_menu.build()?;

    MenuBuilder::new(app).item(&file_menu).build()
}

pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: &MenuEvent) {
    let id: &str = event.id().as_ref();
    match action_for(id) {
        Some(MenuAction::Emit(name)) => {
            debug!(event = name, "forwarding menu activation");
            if let Err(e) = app.emit(name, ()) {
                error!(event = name, error = %e, "failed to emit menu event");
            }
        }
        Some(MenuAction::Quit) => {
            info!("quit requested from menu");
            app.exit(0);
        }
        None => debug!(id, "ignoring unknown menu item"),
    }
}

// Native menus must be built on the main thread on macOS; test threads are not.
#[cfg(all(test, not(target_os = "macos")))]
mod tests {
    use super::*;
    use file_flow::menu::{EVENT_FILE_OPEN, EVENT_FILE_SAVE, EVENT_FILE_SAVE_AS};
    use std::sync::mpsc;
    use std::time::Duration;
    use tauri::menu::{MenuId, MenuItemKind};
    use tauri::test::{mock_builder, mock_context, noop_assets, MockRuntime};
    use tauri::{App, Listener};

    fn mock_app() -> App<MockRuntime> {
        mock_builder().build(mock_context(noop_assets())).unwrap()
    }

    #[test]
    fn menu_bar_is_a_single_file_submenu() {
        let app = mock_app();
        let menu = build_menu(app.handle()).unwrap();

        let top = menu.items().unwrap();
        assert_eq!(top.len(), 1);
        let MenuItemKind::Submenu(file) = &top[0] else {
            panic!("top-level entry is not a submenu");
        };
        assert_eq!(file.text().unwrap(), "File");

        let entries = file.items().unwrap();
        assert_eq!(entries.len(), 5);
        let labels: Vec<Option<String>> = entries
            .iter()
            .map(|entry| match entry {
                MenuItemKind::MenuItem(item) => Some(item.text().unwrap()),
                _ => None,
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                Some("Open".to_string()),
                Some("Save".to_string()),
                Some("Save As".to_string()),
                None,
                Some("Quit".to_string()),
            ]
        );
        assert!(matches!(entries[3], MenuItemKind::Predefined(_)));
        assert_eq!(entries[0].id(), &MenuId::new("file-open"));
        assert_eq!(entries[4].id(), &MenuId::new("file-quit"));
    }

    #[test]
    fn file_items_emit_their_events() {
        let app = mock_app();
        let handle = app.handle();
        let (tx, rx) = mpsc::channel();
        for name in [EVENT_FILE_OPEN, EVENT_FILE_SAVE, EVENT_FILE_SAVE_AS] {
            let tx = tx.clone();
            handle.listen_any(name, move |_| {
                let _ = tx.send(name);
            });
        }

        for id in ["file-open", "file-save", "file-save-as", "edit-undo"] {
            handle_menu_event(handle, &MenuEvent { id: MenuId::new(id) });
        }

        let mut received: Vec<&str> = (0..3)
            .map(|_| rx.recv_timeout(Duration::from_secs(2)).unwrap())
            .collect();
        received.sort_unstable();
        assert_eq!(received, vec![EVENT_FILE_OPEN, EVENT_FILE_SAVE, EVENT_FILE_SAVE_AS]);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
