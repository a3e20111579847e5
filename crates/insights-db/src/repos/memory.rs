//! In-memory `InsightRepository` for tests that do not need libSQL.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::DatabaseError;
use crate::repos::{InsightRepository, InsightRow, NewInsightRow};

#[derive(Debug, Default)]
struct State {
    rows: Vec<InsightRow>,
    last_id: i64,
}

/// A `Vec`-backed repository with the same id and miss semantics as the
/// libSQL binding: ids start at 1, increase, and are never reused.
#[derive(Debug, Default)]
pub struct MemoryInsightRepository {
    state: Mutex<State>,
    closed: AtomicBool,
}

impl MemoryInsightRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later call fail with `DatabaseError::Closed`.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn state(&self) -> Result<std::sync::MutexGuard<'_, State>, DatabaseError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(DatabaseError::Closed);
        }
        self.state
            .lock()
            .map_err(|_| DatabaseError::InvalidState("memory repository lock poisoned".into()))
    }
}

#[async_trait]
impl InsightRepository for MemoryInsightRepository {
    async fn insert(&self, row: &NewInsightRow) -> Result<(), DatabaseError> {
        let mut state = self.state()?;
        state.last_id += 1;
        let id = state.last_id;
        state.rows.push(InsightRow {
            id,
            brand: row.brand,
            created_at: row.created_at.clone(),
            text: row.text.clone(),
        });
        Ok(())
    }

    async fn select_all(&self) -> Result<Vec<InsightRow>, DatabaseError> {
        Ok(self.state()?.rows.clone())
    }

    async fn select_by_id(&self, id: i64) -> Result<Option<InsightRow>, DatabaseError> {
        Ok(self.state()?.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DatabaseError> {
        self.state()?.rows.retain(|row| row.id != id);
        Ok(())
    }
}
