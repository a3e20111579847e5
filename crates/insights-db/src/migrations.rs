//! Schema creation.
//!
//! The single statement is idempotent (`IF NOT EXISTS`) and runs every time a
//! store is opened. There is no versioned migration history.

use crate::InsightsDb;
use crate::error::DatabaseError;

/// The `insights` table. `AUTOINCREMENT` keeps deleted ids from being reused.
pub const CREATE_INSIGHTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS insights (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    brand INTEGER NOT NULL,
    createdAt TEXT NOT NULL,
    text TEXT NOT NULL
)";

impl InsightsDb {
    /// Create the schema if it does not exist yet.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn()?
            .execute_batch(CREATE_INSIGHTS_TABLE)
            .await
            .map_err(|e| DatabaseError::Migration(format!("insights table: {e}")))?;
        Ok(())
    }
}
