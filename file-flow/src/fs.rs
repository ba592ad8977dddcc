//! Thin wrappers over `std::fs` that attach the path to every error and
//! apply the permission modes the editor writes with.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;
#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Read a whole file as text. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD rather than failing the read.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(path = %path.display(), "file is not valid UTF-8; invalid bytes replaced");
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Create or truncate `path` and write `content` to it.
///
/// Not atomic: a crash mid-write can leave a partial file behind.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;
    file.flush().map_err(to_error)
}

/// Create `path` and any missing parents. An existing directory is fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn write_then_read_returns_same_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.mdx");
        let content = "# Title\n\n<Chart data={[1, 2]} />\n\u{00e9}\u{4e2d}\r\n";

        write_text(&path, content).unwrap();
        assert_eq!(read_text(&path).unwrap(), content);
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.md");
        write_text(&path, "a much longer original body").unwrap();
        write_text(&path, "short").unwrap();
        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[cfg(unix)]
    #[test]
    fn new_files_are_not_group_writable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perm.mdx");
        write_text(&path, "x").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o033, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn read_missing_file_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.mdx");
        let err = read_text(&path).unwrap_err();
        assert_eq!(err.io_error().map(std::io::Error::kind), Some(ErrorKind::NotFound));
        assert!(err.to_string().contains("missing.mdx"));
    }

    #[test]
    fn read_replaces_invalid_utf8_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.md");
        fs::write(&path, b"# Caf\xe9 notes\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "# Caf\u{fffd} notes\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("file.mdx");
        assert!(matches!(write_text(&path, "x"), Err(Error::Write { .. })));
    }

    #[test]
    fn ensure_dir_accepts_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_fails_when_a_file_is_in_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("mdxEditor");
        fs::write(&blocker, "not a directory").unwrap();
        assert!(matches!(ensure_dir(&blocker), Err(Error::CreateDir { .. })));
    }
}
