//! The Insight Repository: the only code path that reads or writes insight rows.
//!
//! [`InsightRepository`] is the contract. `InsightsDb` implements it against
//! libSQL (see [`insight`]); [`memory::MemoryInsightRepository`] implements it
//! over a `Vec` for tests that do not need a real store. The repository does no
//! validation and no fault classification: whatever the store raises comes
//! back as a raw `DatabaseError`.

pub mod insight;
pub mod memory;

use async_trait::async_trait;
use insights_core::entities::Insight;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

/// Payload for a new row. `created_at` is already serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInsightRow {
    pub brand: i64,
    pub created_at: String,
    pub text: String,
}

/// A stored row, `created_at` still in its TEXT form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightRow {
    pub id: i64,
    pub brand: i64,
    pub created_at: String,
    pub text: String,
}

impl InsightRow {
    /// Rehydrate `created_at` into a timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if the stored text is not a timestamp.
    pub fn into_insight(self) -> Result<Insight, DatabaseError> {
        Ok(Insight {
            id: self.id,
            brand: self.brand,
            created_at: parse_datetime(&self.created_at)?,
            text: self.text,
        })
    }
}

/// Storage operations for insights.
#[async_trait]
pub trait InsightRepository: Send + Sync {
    /// Write one row; the store assigns `id`. Rows the table's constraints
    /// would reject are skipped silently (`INSERT OR IGNORE`).
    async fn insert(&self, row: &NewInsightRow) -> Result<(), DatabaseError>;

    /// Every row, in insertion order.
    async fn select_all(&self) -> Result<Vec<InsightRow>, DatabaseError>;

    /// Zero or one row.
    async fn select_by_id(&self, id: i64) -> Result<Option<InsightRow>, DatabaseError>;

    /// Remove the row with `id`, if any. A miss is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError>;
}
