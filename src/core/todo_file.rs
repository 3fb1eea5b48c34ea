//! # Todo File
//!
//! The backing store: plain text, one to-do per line, newline-terminated,
//! no header and no escaping.
//!
//! Read once at startup, written once at exit. Writes go to a `<file>_tmp`
//! sibling and are then renamed over the original so a crash mid-write never
//! truncates the list.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

#[derive(Debug)]
pub enum TodoFileError {
    Read { path: PathBuf, source: io::Error },
    WriteTemp { path: PathBuf, source: io::Error },
    Rename { from: PathBuf, to: PathBuf, source: io::Error },
}

impl fmt::Display for TodoFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoFileError::Read { path, source } => {
                write!(f, "There was an error opening the file {}: {source}", path.display())
            }
            TodoFileError::WriteTemp { path, source } => {
                write!(f, "Error while writing to the file {}: {source}", path.display())
            }
            TodoFileError::Rename { from, to, source } => write!(
                f,
                "Error while writing to the file (rename {} -> {}): {source}",
                from.display(),
                to.display()
            ),
        }
    }
}

impl std::error::Error for TodoFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TodoFileError::Read { source, .. }
            | TodoFileError::WriteTemp { source, .. }
            | TodoFileError::Rename { source, .. } => Some(source),
        }
    }
}

/// Sibling path used for the atomic write: `todos.txt` → `todos.txt_tmp`.
pub fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push("_tmp");
    PathBuf::from(name)
}

/// Read every line of `path` verbatim (line terminators stripped).
pub fn load(path: &Path) -> Result<Vec<String>, TodoFileError> {
    let contents = fs::read_to_string(path).map_err(|source| TodoFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<String> = parse(&contents);
    info!("Loaded {} todos from {}", items.len(), path.display());
    Ok(items)
}

/// Split file contents into items. Handles `\n` and `\r\n` endings and a
/// missing final newline.
pub fn parse(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}

/// Serialize items back to file contents, one per line.
pub fn serialize(items: &[String]) -> String {
    let mut out = String::with_capacity(items.iter().map(|s| s.len() + 1).sum());
    for item in items {
        out.push_str(item);
        out.push('\n');
    }
    out
}

/// Atomically replace `path` with `items`.
pub fn save(path: &Path, items: &[String]) -> Result<(), TodoFileError> {
    let tmp_path = temp_path(path);
    fs::write(&tmp_path, serialize(items)).map_err(|source| TodoFileError::WriteTemp {
        path: tmp_path.clone(),
        source,
    })?;
    debug!("Wrote {} todos to {}", items.len(), tmp_path.display());
    fs::rename(&tmp_path, path).map_err(|source| TodoFileError::Rename {
        from: tmp_path.clone(),
        to: path.to_path_buf(),
        source,
    })?;
    info!("Saved {} todos to {}", items.len(), path.display());
    Ok(())
}
