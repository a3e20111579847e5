//! Disposable store fixtures for tests.
//!
//! Each [`DbFixture`] owns a fresh temp directory holding its own database
//! file, created with the same schema step the server runs at startup. Nothing
//! is shared between fixtures. The directory is removed when the fixture is
//! dropped, so keep it alive for as long as the test group needs the store.

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use crate::InsightsDb;
use crate::error::DatabaseError;
use crate::helpers::format_datetime;
use crate::repos::{InsightRepository, InsightRow, NewInsightRow};

pub struct DbFixture {
    db: InsightsDb,
    _dir: TempDir,
}

impl DbFixture {
    /// Provision an empty, file-backed store in a new temp directory.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory or database cannot be created.
    pub async fn new() -> Result<Self, DatabaseError> {
        let dir = TempDir::new().map_err(|e| DatabaseError::Other(e.into()))?;
        let db = InsightsDb::open_local(dir.path().join("insights.sqlite3")).await?;
        Ok(Self { db, _dir: dir })
    }

    /// The live store handle.
    #[must_use]
    pub const fn db(&self) -> &InsightsDb {
        &self.db
    }

    /// Mutable access, e.g. to [`InsightsDb::close`] the connection.
    pub const fn db_mut(&mut self) -> &mut InsightsDb {
        &mut self.db
    }

    /// The repository bound to this fixture's store.
    #[must_use]
    pub fn insights(&self) -> &dyn InsightRepository {
        &self.db
    }

    /// Seed rows directly, skipping the create operation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn insert(&self, rows: &[NewInsightRow]) -> Result<Vec<i64>, DatabaseError> {
        self.db.insert_many(rows).await
    }

    /// Every stored row, `created_at` still as text.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn select_all(&self) -> Result<Vec<InsightRow>, DatabaseError> {
        self.db.select_all().await
    }
}

/// Build a seed row with a chosen timestamp.
#[must_use]
pub fn seed_row(brand: i64, text: &str, created_at: DateTime<Utc>) -> NewInsightRow {
    NewInsightRow {
        brand,
        created_at: format_datetime(&created_at),
        text: text.to_string(),
    }
}
