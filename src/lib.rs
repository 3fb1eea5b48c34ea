//! todo-tui library exports for the binary and integration tests

use std::fmt;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

use crate::core::config::ConfigError;
use crate::core::todo_file::TodoFileError;

/// Failures that end the process with a non-zero status.
///
/// All of them happen at a boundary: before the event loop starts (config,
/// reading the file) or after it ends (writing the file back).
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    TodoFile(TodoFileError),
    Terminal(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{e}"),
            AppError::TodoFile(e) => write!(f, "{e}"),
            AppError::Terminal(e) => write!(f, "There has been an error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::TodoFile(e) => Some(e),
            AppError::Terminal(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<TodoFileError> for AppError {
    fn from(e: TodoFileError) -> Self {
        AppError::TodoFile(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::todo_file;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_file_read_failure_keeps_its_own_message() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err: AppError = todo_file::load(&missing).unwrap_err().into();

        assert!(matches!(err, AppError::TodoFile(_)));
        let message = err.to_string();
        assert!(message.contains("missing.txt"), "{message}");
        assert!(!message.starts_with("There has been an error"), "{message}");
    }

    #[test]
    fn test_terminal_failure_is_wrapped_explicitly() {
        let err = AppError::Terminal(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"));
        assert_eq!(err.to_string(), "There has been an error: tty gone");
        assert!(err.source().is_some());
    }
}
