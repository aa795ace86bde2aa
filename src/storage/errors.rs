//! Storage error types

use thiserror::Error;

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Store failures. None occur in normal operation; they signal a broken
/// process (a writer panicked while holding a collection lock).
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// A collection lock was poisoned by a panicking writer
    #[error("Collection '{0}' lock poisoned")]
    LockPoisoned(&'static str),

    /// Backend-specific failure
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StorageError::LockPoisoned("contacts").to_string(),
            "Collection 'contacts' lock poisoned"
        );
        assert_eq!(
            StorageError::Unavailable("down".to_string()).to_string(),
            "Storage unavailable: down"
        );
    }
}
