//! Insight operations.
//!
//! Each operation takes the repository explicitly, issues exactly one
//! repository call, and classifies any raw failure as a [`StorageError`].
//! Inputs are already-validated commands; validation happens at the boundary.
//! Nothing retries: a storage fault ends the request.

use chrono::{DateTime, Utc};
use insights_core::commands::{CreateInsight, DeleteInsight};
use insights_core::entities::Insight;

use crate::error::{DatabaseError, StorageError};
use crate::helpers::format_datetime;
use crate::repos::{InsightRepository, NewInsightRow};

fn storage_fault(operation: &'static str) -> impl FnOnce(DatabaseError) -> StorageError {
    move |source| {
        tracing::warn!(operation, error = %source, "storage fault");
        StorageError::new(operation, source)
    }
}

/// Persist a new insight stamped with the current time.
///
/// # Errors
///
/// Returns `StorageError` if the insert fails.
pub async fn create_insight(
    repo: &dyn InsightRepository,
    command: &CreateInsight,
) -> Result<(), StorageError> {
    create_insight_at(repo, command, Utc::now()).await
}

/// Persist a new insight with an explicit creation time.
///
/// # Errors
///
/// Returns `StorageError` if the insert fails.
pub async fn create_insight_at(
    repo: &dyn InsightRepository,
    command: &CreateInsight,
    created_at: DateTime<Utc>,
) -> Result<(), StorageError> {
    let row = NewInsightRow {
        brand: command.brand,
        created_at: format_datetime(&created_at),
        text: command.text.clone(),
    };
    repo.insert(&row)
        .await
        .map_err(storage_fault("create insight"))?;

    tracing::debug!(brand = command.brand, "inserted new insight");
    Ok(())
}

/// Delete an insight. Succeeds whether or not the row existed.
///
/// # Errors
///
/// Returns `StorageError` if the delete statement fails.
pub async fn delete_insight(
    repo: &dyn InsightRepository,
    command: DeleteInsight,
) -> Result<(), StorageError> {
    repo.delete_by_id(command.id)
        .await
        .map_err(storage_fault("delete insight"))?;

    tracing::debug!(id = command.id, "deleted insight");
    Ok(())
}

/// All insights in the order storage returned them.
///
/// # Errors
///
/// Returns `StorageError` if the query fails or a stored `createdAt` cannot
/// be parsed.
pub async fn list_insights(repo: &dyn InsightRepository) -> Result<Vec<Insight>, StorageError> {
    let rows = repo
        .select_all()
        .await
        .map_err(storage_fault("list insights"))?;

    rows.into_iter()
        .map(|row| row.into_insight().map_err(storage_fault("list insights")))
        .collect()
}

/// One insight by id, or `None` if no row has that id.
///
/// # Errors
///
/// Returns `StorageError` if the query fails or the stored `createdAt`
/// cannot be parsed.
pub async fn lookup_insight(
    repo: &dyn InsightRepository,
    id: i64,
) -> Result<Option<Insight>, StorageError> {
    let row = repo
        .select_by_id(id)
        .await
        .map_err(storage_fault("lookup insight"))?;

    row.map(|row| row.into_insight().map_err(storage_fault("lookup insight")))
        .transpose()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::repos::memory::MemoryInsightRepository;

    fn cmd(brand: i64, text: &str) -> CreateInsight {
        CreateInsight {
            brand,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_lookup_with_fixed_clock() {
        let repo = MemoryInsightRepository::new();
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
        create_insight_at(&repo, &cmd(6, "night sales spike"), at)
            .await
            .unwrap();

        let insight = lookup_insight(&repo, 1).await.unwrap().unwrap();
        assert_eq!(
            insight,
            Insight {
                id: 1,
                brand: 6,
                text: "night sales spike".to_string(),
                created_at: at,
            }
        );
    }

    #[tokio::test]
    async fn list_preserves_storage_order() {
        let repo = MemoryInsightRepository::new();
        let late = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        create_insight_at(&repo, &cmd(1, "late"), late).await.unwrap();
        create_insight_at(&repo, &cmd(2, "early"), early).await.unwrap();

        let texts: Vec<String> = list_insights(&repo)
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.text)
            .collect();
        assert_eq!(texts, ["late", "early"]);
    }

    #[tokio::test]
    async fn unparseable_created_at_is_a_storage_fault() {
        let repo = MemoryInsightRepository::new();
        repo.insert(&NewInsightRow {
            brand: 1,
            created_at: "not a date".to_string(),
            text: "corrupt".to_string(),
        })
        .await
        .unwrap();

        let err = list_insights(&repo).await.unwrap_err();
        assert!(matches!(err.source, DatabaseError::Query(_)));
        let err = lookup_insight(&repo, 1).await.unwrap_err();
        assert!(matches!(err.source, DatabaseError::Query(_)));
    }

    #[tokio::test]
    async fn every_operation_classifies_closed_store() {
        let repo = MemoryInsightRepository::new();
        repo.close();

        let err = create_insight(&repo, &cmd(1, "x")).await.unwrap_err();
        assert!(err.message.starts_with("create insight failed"));
        let err = delete_insight(&repo, DeleteInsight { id: 1 }).await.unwrap_err();
        assert!(err.message.starts_with("delete insight failed"));
        let err = list_insights(&repo).await.unwrap_err();
        assert!(matches!(err.source, DatabaseError::Closed));
        let err = lookup_insight(&repo, 1).await.unwrap_err();
        assert!(matches!(err.source, DatabaseError::Closed));
    }
}
