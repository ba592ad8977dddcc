//! Native file plumbing for the mdxEditor shell: dialog-driven open/save,
//! raw reads and writes, the recent-files history and the File menu table.
//!
//! Nothing here depends on a UI toolkit. The desktop crate supplies a
//! [`FileDialogs`] implementation and translates [`menu::FILE_MENU`] into
//! native menu objects.

pub mod dialog;
pub mod error;
pub mod fs;
pub mod history;
pub mod menu;
pub mod service;

pub use dialog::{DialogOptions, FileDialogs, FileFilter};
pub use error::{Error, Result};
pub use history::{FileHistoryItem, HistoryStore};
pub use service::{FileService, OpenFileResult};
