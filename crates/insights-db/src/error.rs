//! Database error types for insights-db.
//!
//! `DatabaseError` is whatever the store raised. `StorageError` is the
//! classified fault the operation functions hand upward; it always carries
//! the originating `DatabaseError` as its source.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema creation failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The store handle was closed before the call.
    #[error("Database connection is closed")]
    Closed,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The store rejected or could not complete an operation.
///
/// Raised only by the operation functions, never by validation. `message` is
/// for logs; the HTTP boundary reports this kind generically.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StorageError {
    pub message: String,
    #[source]
    pub source: DatabaseError,
}

impl StorageError {
    /// Wrap a raw store failure raised while performing `operation`.
    #[must_use]
    pub fn new(operation: &str, source: DatabaseError) -> Self {
        Self {
            message: format!("{operation} failed: {source}"),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn storage_error_keeps_cause() {
        let err = StorageError::new("delete insight", DatabaseError::Closed);
        assert_eq!(
            err.to_string(),
            "delete insight failed: Database connection is closed"
        );
        let cause = err.source().expect("has source");
        assert_eq!(cause.to_string(), "Database connection is closed");
        assert!(matches!(err.source, DatabaseError::Closed));
    }
}
