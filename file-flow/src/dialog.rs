//! Native dialog descriptions and the seam the desktop shell plugs into.

use std::path::PathBuf;

use crate::error::Result;

pub const OPEN_DIALOG_TITLE: &str = "Open MDX File";
pub const SAVE_DIALOG_TITLE: &str = "Save MDX File";
pub const DEFAULT_FILE_NAME: &str = "untitled.mdx";

/// A named file-type filter, e.g. `MDX Files (*.mdx)` / `*.mdx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub display_name: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn new(display_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            pattern: pattern.into(),
        }
    }

    /// Extensions for dialog APIs that take bare extensions instead of
    /// globs. `*.mdx` becomes `mdx`; `*.*` and `*` become `*`.
    pub fn extensions(&self) -> Vec<&str> {
        self.pattern
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| p.strip_prefix("*.").unwrap_or(p))
            .collect()
    }
}

/// The filters offered by both the open and save dialogs.
pub fn editor_filters() -> Vec<FileFilter> {
    vec![
        FileFilter::new("MDX Files (*.mdx)", "*.mdx"),
        FileFilter::new("Markdown Files (*.md)", "*.md"),
        FileFilter::new("All Files (*.*)", "*.*"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub title: String,
    pub default_file_name: Option<String>,
    pub filters: Vec<FileFilter>,
}

impl DialogOptions {
    pub fn open_document() -> Self {
        Self {
            title: OPEN_DIALOG_TITLE.to_string(),
            default_file_name: None,
            filters: editor_filters(),
        }
    }

    pub fn save_document() -> Self {
        Self {
            title: SAVE_DIALOG_TITLE.to_string(),
            default_file_name: Some(DEFAULT_FILE_NAME.to_string()),
            filters: editor_filters(),
        }
    }
}

/// Presents native file pickers.
///
/// Both methods block until the user answers. `Ok(None)` means the user
/// dismissed the dialog; `Err` is reserved for the dialog itself failing.
pub trait FileDialogs {
    fn pick_open_path(&self, options: &DialogOptions) -> Result<Option<PathBuf>>;

    fn pick_save_path(&self, options: &DialogOptions) -> Result<Option<PathBuf>>;
}
