use std::path::PathBuf;

use file_flow::{DialogOptions, Error, FileDialogs};
use tauri::{AppHandle, Runtime};
use tauri_plugin_dialog::{DialogExt, FileDialogBuilder, FilePath};

/// Native pickers backed by `tauri-plugin-dialog`.
///
/// The blocking pickers deadlock on the main thread, so only call these from
/// async commands.
pub struct TauriDialogs<R: Runtime> {
    app_handle: AppHandle<R>,
}

impl<R: Runtime> TauriDialogs<R> {
    pub fn new(app_handle: AppHandle<R>) -> Self {
        Self { app_handle }
    }

    fn builder(&self, options: &DialogOptions) -> FileDialogBuilder<R> {
        let mut dialog = self.app_handle.dialog().file().set_title(&options.title);
        for filter in &options.filters {
            dialog = dialog.add_filter(&filter.display_name, &filter.extensions());
        }
        if let Some(name) = &options.default_file_name {
            dialog = dialog.set_file_name(name);
        }
        dialog
    }
}

fn local_path(picked: Option<FilePath>) -> file_flow::Result<Option<PathBuf>> {
    match picked {
        None => Ok(None),
        Some(file_path) => file_path
            .as_path()
            .map(|p| Some(p.to_path_buf()))
            .ok_or_else(|| {
                Error::Dialog(format!("selected location is not a local file: {file_path:?}"))
            }),
    }
}

impl<R: Runtime> FileDialogs for TauriDialogs<R> {
    fn pick_open_path(&self, options: &DialogOptions) -> file_flow::Result<Option<PathBuf>> {
        local_path(self.builder(options).blocking_pick_file())
    }

    fn pick_save_path(&self, options: &DialogOptions) -> file_flow::Result<Option<PathBuf>> {
        local_path(self.builder(options).blocking_save_file())
    }
}
