//! The native "File" menu as data. The desktop shell turns this table into
//! real menu objects and routes activations back through [`action_for`].

pub const EVENT_FILE_OPEN: &str = "menu:file:open";
pub const EVENT_FILE_SAVE: &str = "menu:file:save";
pub const EVENT_FILE_SAVE_AS: &str = "menu:file:saveas";

pub const FILE_MENU_TITLE: &str = "File";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Emit a payload-less event for the frontend to handle.
    Emit(&'static str),
    /// Terminate the application.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItemSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub accelerator: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Item(MenuItemSpec),
    Separator,
}

pub const FILE_MENU: &[MenuEntry] = &[
    MenuEntry::Item(MenuItemSpec {
        id: "file-open",
        label: "Open",
        accelerator: "CmdOrCtrl+O",
        action: MenuAction::Emit(EVENT_FILE_OPEN),
    }),
    MenuEntry::Item(MenuItemSpec {
        id: "file-save",
        label: "Save",
        accelerator: "CmdOrCtrl+S",
        action: MenuAction::Emit(EVENT_FILE_SAVE),
    }),
    MenuEntry::Item(MenuItemSpec {
        id: "file-save-as",
        label: "Save As",
        accelerator: "CmdOrCtrl+Shift+S",
        action: MenuAction::Emit(EVENT_FILE_SAVE_AS),
    }),
    MenuEntry::Separator,
    MenuEntry::Item(MenuItemSpec {
        id: "file-quit",
        label: "Quit",
        accelerator: "CmdOrCtrl+Q",
        action: MenuAction::Quit,
    }),
];

/// Look up what a menu item id should do. Unknown ids (other menus,
/// platform-provided items) yield `None`.
pub fn action_for(id: &str) -> Option<MenuAction> {
    FILE_MENU.iter().find_map(|entry| match entry {
        MenuEntry::Item(item) if item.id == id => Some(item.action),
        _ => None,
    })
}
