//! Storage-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing persisted values.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to read the storage file
    #[error("Failed to read storage from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the storage file
    #[error("Failed to write storage to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the directory holding the storage file
    #[error("Failed to create storage directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Storage file contents could not be parsed
    #[error("Failed to deserialize storage: {0}")]
    DeserializationFailed(String),

    /// Storage contents could not be serialized
    #[error("Failed to serialize storage: {0}")]
    SerializationFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let error = StorageError::DeserializationFailed("bad yaml".to_string());
        assert!(error.to_string().contains("bad yaml"));

        let error = StorageError::SerializationFailed("oops".to_string());
        assert!(error.to_string().contains("serialize"));
    }

    #[test]
    fn test_storage_error_with_path() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = StorageError::WriteFailed {
            path: PathBuf::from("/test/storage.yml"),
            source: io_error,
        };
        let error_str = error.to_string();
        assert!(error_str.contains("/test/storage.yml"));
        assert!(error_str.contains("denied"));
    }
}
