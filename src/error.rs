//! Error types for the storage and configuration layers
//!
//! The course store never surfaces these to its callers; it logs and absorbs
//! them. They are returned directly by `KeyValueStore` implementations and
//! by config loading.

use thiserror::Error;

/// Errors raised by a `KeyValueStore` backend
#[derive(Error, Debug)]
pub enum StorageError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be mapped onto the backend (e.g. contains a path separator)
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::InvalidKey("a/b".to_string());
        assert_eq!(err.to_string(), "Invalid storage key: a/b");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let storage_err: StorageError = io_err.into();
        assert!(matches!(storage_err, StorageError::Io(_)));
    }
}
