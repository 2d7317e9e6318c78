//! Error types for PageKit
//!
//! None of these reach the components' callers: the theme controller and the
//! accessibility injector degrade to a default or a no-op. They exist so the
//! adapters, stores and binaries can still report what went wrong.

use thiserror::Error;

/// Errors raised by a [`DocumentAdapter`](crate::document::DocumentAdapter)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The document has no `<body>` to insert into
    #[error("Document has no body element")]
    MissingBody,

    /// The host DOM rejected an operation
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Errors raised by a [`PreferenceStore`](crate::storage::PreferenceStore)
#[derive(Error, Debug)]
pub enum StoreError {
    /// No backing storage exists (private mode, SSR, sandboxed frame)
    #[error("Preference storage unavailable")]
    Unavailable,

    /// Generic storage failure reported by the backend
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a [`PageKitConfig`](crate::config::PageKitConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A string that is neither `dark` nor `light`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unrecognized theme: {0:?}")]
pub struct ThemeParseError(pub String);

/// Umbrella error for code that touches more than one concern
#[derive(Error, Debug)]
pub enum PageKitError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Theme(#[from] ThemeParseError),
}

/// Result type alias using DocumentError
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Result type alias using StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias using PageKitError
pub type PageKitResult<T> = Result<T, PageKitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ThemeParseError("blue".to_string());
        assert_eq!(format!("{}", err), "Unrecognized theme: \"blue\"");
        assert_eq!(
            format!("{}", DocumentError::MissingBody),
            "Document has no body element"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));

        let umbrella: PageKitError = store_err.into();
        assert!(matches!(umbrella, PageKitError::Store(StoreError::Io(_))));
    }
}
