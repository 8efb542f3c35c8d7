//! Storage error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the durable key/value backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error when accessing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_storage_error_display() {
        let io_err = StorageError::Io(
            PathBuf::from("state/content.json"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("content.json"));

        let key_err = StorageError::InvalidKey("../escape".to_string());
        assert!(format!("{key_err}").contains("../escape"));
    }
}
