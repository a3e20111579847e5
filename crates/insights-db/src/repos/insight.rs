//! libSQL binding for the insight repository.

use async_trait::async_trait;

use crate::InsightsDb;
use crate::error::DatabaseError;
use crate::repos::{InsightRepository, InsightRow, NewInsightRow};

fn row_to_insight(row: &libsql::Row) -> Result<InsightRow, DatabaseError> {
    Ok(InsightRow {
        id: row.get::<i64>(0)?,
        brand: row.get::<i64>(1)?,
        created_at: row.get::<String>(2)?,
        text: row.get::<String>(3)?,
    })
}

const INSERT_SQL: &str = "INSERT OR IGNORE INTO insights (brand, createdAt, text) VALUES (?1, ?2, ?3)";

#[async_trait]
impl InsightRepository for InsightsDb {
    async fn insert(&self, row: &NewInsightRow) -> Result<(), DatabaseError> {
        self.conn()?
            .execute(
                INSERT_SQL,
                libsql::params![row.brand, row.created_at.as_str(), row.text.as_str()],
            )
            .await?;
        Ok(())
    }

    async fn select_all(&self) -> Result<Vec<InsightRow>, DatabaseError> {
        let mut rows = self
            .conn()?
            .query(
                "SELECT id, brand, createdAt, text FROM insights ORDER BY id",
                (),
            )
            .await?;

        let mut insights = Vec::new();
        while let Some(row) = rows.next().await? {
            insights.push(row_to_insight(&row)?);
        }
        Ok(insights)
    }

    async fn select_by_id(&self, id: i64) -> Result<Option<InsightRow>, DatabaseError> {
        let mut rows = self
            .conn()?
            .query(
                "SELECT id, brand, createdAt, text FROM insights WHERE id = ?1",
                libsql::params![id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_insight(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        let affected = self
            .conn()?
            .execute("DELETE FROM insights WHERE id = ?1", libsql::params![id])
            .await?;
        tracing::trace!(id, affected, "delete_by_id");
        Ok(())
    }
}

impl InsightsDb {
    /// Insert many rows in one transaction, bypassing the create operation.
    ///
    /// Lets callers pick `created_at`, so fixtures can seed deterministic
    /// orderings. Returns the assigned ids in input order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails; nothing is committed then.
    pub async fn insert_many(&self, rows: &[NewInsightRow]) -> Result<Vec<i64>, DatabaseError> {
        let tx = self.conn()?.transaction().await?;
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            tx.execute(
                INSERT_SQL,
                libsql::params![row.brand, row.created_at.as_str(), row.text.as_str()],
            )
            .await?;
            ids.push(tx.last_insert_rowid());
        }
        tx.commit().await?;
        Ok(ids)
    }
}
