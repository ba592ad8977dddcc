use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::dialog::{DialogOptions, FileDialogs};
use crate::error::Result;
use crate::fs;

/// What the frontend gets back from an open. Both fields are empty when the
/// user cancelled the dialog.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenFileResult {
    pub file_path: String,
    pub content: String,
}

/// Dialog-driven document I/O for the editor.
pub struct FileService<D> {
    dialogs: D,
}

impl<D: FileDialogs> FileService<D> {
    pub fn new(dialogs: D) -> Self {
        Self { dialogs }
    }

    /// Ask the user for a document and load it.
    pub fn open_file(&self) -> Result<OpenFileResult> {
        let Some(path) = self.dialogs.pick_open_path(&DialogOptions::open_document())? else {
            debug!("open dialog cancelled");
            return Ok(OpenFileResult::default());
        };

        let content = fs::read_text(&path)?;
        info!(path = %path.display(), bytes = content.len(), "opened file");
        Ok(OpenFileResult {
            file_path: path_to_string(&path),
            content,
        })
    }

    pub fn save_file(&self, file_path: &str, content: &str) -> Result<()> {
        fs::write_text(Path::new(file_path), content)?;
        info!(path = file_path, bytes = content.len(), "saved file");
        Ok(())
    }

    /// Ask the user where to save and write `content` there. Returns the
    /// chosen path, or an empty string if the dialog was cancelled.
    pub fn save_file_as(&self, content: &str) -> Result<String> {
        let Some(path) = self.dialogs.pick_save_path(&DialogOptions::save_document())? else {
            debug!("save dialog cancelled");
            return Ok(String::new());
        };

        fs::write_text(&path, content)?;
        info!(path = %path.display(), bytes = content.len(), "saved file as");
        Ok(path_to_string(&path))
    }

    pub fn read_file(&self, file_path: &str) -> Result<String> {
        let content = fs::read_text(Path::new(file_path))?;
        debug!(path = file_path, bytes = content.len(), "read file");
        Ok(content)
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
