//! The recently opened files list, persisted as one JSON document under the
//! user's configuration directory.
//!
//! The store has no opinion on ordering, duplicates or length; the frontend
//! hands over the complete list on every save.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::fs;

pub const APP_DIR_NAME: &str = "mdxEditor";
pub const HISTORY_FILE_NAME: &str = "file-history.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHistoryItem {
    pub file_path: String,
    pub timestamp: i64,
}

impl FileHistoryItem {
    pub fn new(file_path: impl Into<String>, timestamp: i64) -> Self {
        Self {
            file_path: file_path.into(),
            timestamp,
        }
    }
}

/// Outcome of reading the history file, before any fallback is applied.
#[derive(Debug)]
enum StoredHistory {
    Loaded(Vec<FileHistoryItem>),
    Absent,
    Unreadable(Error),
    Malformed(serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    config_dir: Option<PathBuf>,
}

impl HistoryStore {
    /// `config_dir` is the per-user configuration root; `None` means the
    /// platform could not supply one.
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self { config_dir }
    }

    pub fn from_user_config() -> Self {
        let config_dir = dirs::config_dir();
        if config_dir.is_none() {
            warn!("no user configuration directory; file history will not persist");
        }
        Self::new(config_dir)
    }

    /// Resolve `<config>/mdxEditor/file-history.json`, creating the app
    /// directory if needed.
    pub fn history_file_path(&self) -> Result<PathBuf> {
        let app_dir = self
            .config_dir
            .as_ref()
            .ok_or(Error::ConfigDirUnavailable)?
            .join(APP_DIR_NAME);
        fs::ensure_dir(&app_dir)?;
        Ok(app_dir.join(HISTORY_FILE_NAME))
    }

    /// Load the saved history. Never fails: anything short of a readable,
    /// well-formed file yields an empty list.
    pub fn load(&self) -> Vec<FileHistoryItem> {
        match self.read_stored() {
            StoredHistory::Loaded(items) => {
                debug!(count = items.len(), "loaded file history");
                items
            }
            StoredHistory::Absent => {
                debug!("no file history yet");
                Vec::new()
            }
            StoredHistory::Unreadable(err) => {
                warn!(error = %err, "file history unavailable, starting empty");
                Vec::new()
            }
            StoredHistory::Malformed(err) => {
                warn!(error = %err, "file history is corrupt, starting empty");
                Vec::new()
            }
        }
    }

    /// Replace the saved history with `history`.
    pub fn save(&self, history: &[FileHistoryItem]) -> Result<()> {
        let path = self.history_file_path()?;
        let json = serde_json::to_string_pretty(history)?;
        fs::write_text(&path, &json)?;
        info!(path = %path.display(), count = history.len(), "saved file history");
        Ok(())
    }

    fn read_stored(&self) -> StoredHistory {
        let path = match self.history_file_path() {
            Ok(path) => path,
            Err(err) => return StoredHistory::Unreadable(err),
        };

        let data = match fs::read_text(&path) {
            Ok(data) => data,
            Err(err) if err.io_error().map(std::io::Error::kind) == Some(ErrorKind::NotFound) => {
                return StoredHistory::Absent;
            }
            Err(err) => return StoredHistory::Unreadable(err),
        };

        match serde_json::from_str(&data) {
            Ok(items) => StoredHistory::Loaded(items),
            Err(err) => StoredHistory::Malformed(err),
        }
    }
}
