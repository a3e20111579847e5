//! # insights-db
//!
//! libSQL persistence for insights.
//!
//! - [`InsightsDb`]: the store handle, one connection owned by the process
//! - [`repos`]: the `InsightRepository` contract, its libSQL binding, and an
//!   in-memory double
//! - [`operations`]: create / delete / list / lookup, each one repository call
//!   with storage faults classified as [`error::StorageError`]
//! - `test_support` (feature `test-support`): disposable per-test stores
//!
//! Concurrent writers are serialized by `SQLite` itself; nothing here adds
//! application-level locking or retries.

pub mod error;
pub mod helpers;
mod migrations;
pub mod operations;
pub mod repos;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

pub use migrations::CREATE_INSIGHTS_TABLE;

/// Store handle wrapping a libSQL database and its single connection.
///
/// Pass it explicitly to whatever needs storage; there is no global handle.
pub struct InsightsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: Option<libsql::Connection>,
}

impl InsightsDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Creates the schema on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// schema creation fails.
    pub async fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let insights_db = Self {
            db,
            conn: Some(conn),
        };
        insights_db.run_migrations().await?;
        tracing::debug!(path = %path.display(), "opened insights database");
        Ok(insights_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Closed` after [`close`](Self::close).
    pub fn conn(&self) -> Result<&libsql::Connection, DatabaseError> {
        self.conn.as_ref().ok_or(DatabaseError::Closed)
    }

    /// Drop the connection. Every later call fails with `DatabaseError::Closed`.
    pub fn close(&mut self) {
        if self.conn.take().is_some() {
            tracing::debug!("closed insights database connection");
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.conn.is_none()
    }
}
