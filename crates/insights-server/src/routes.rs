//! HTTP route table.
//!
//! Handlers validate at the boundary, call one operation, and map the result:
//! validation faults are 400, storage faults are 500, an absent lookup is 404.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use insights_core::entities::Insight;
use insights_core::responses::MessageResponse;
use insights_core::validation::{parse_create_insight, parse_delete_insight, parse_insight_id};
use insights_db::operations;
use insights_db::repos::InsightRepository;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

/// Shared handler state: the repository every request goes through.
#[derive(Clone)]
pub struct AppState {
    pub insights: Arc<dyn InsightRepository>,
}

impl AppState {
    pub fn new(insights: Arc<dyn InsightRepository>) -> Self {
        Self { insights }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/_health", get(health))
        .route("/insights", get(list_insights))
        .route("/insights/create", post(create_insight))
        .route("/insights/:id", get(lookup_insight))
        .route("/insights/:id/delete", post(delete_insight))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

async fn list_insights(State(state): State<AppState>) -> Result<Json<Vec<Insight>>, ApiError> {
    let insights = operations::list_insights(state.insights.as_ref()).await?;
    tracing::debug!(count = insights.len(), "listed insights");
    Ok(Json(insights))
}

async fn lookup_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Insight>, ApiError> {
    let id = parse_insight_id(&json!({ "id": id }))?;
    operations::lookup_insight(state.insights.as_ref(), id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Insight {id} not found")))
}

async fn create_insight(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let command = parse_create_insight(&body)?;

    operations::create_insight(state.insights.as_ref(), &command).await?;
    tracing::info!(brand = command.brand, "created insight");
    Ok(Json(MessageResponse::new("Insight created")))
}

async fn delete_insight(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let command = parse_delete_insight(&json!({ "id": id }))?;

    operations::delete_insight(state.insights.as_ref(), command).await?;
    tracing::info!(id = command.id, "deleted insight");
    Ok(Json(MessageResponse::new("Insight deleted")))
}
