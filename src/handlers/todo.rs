//! Todo CRUD endpoints.
//!
//! Every handler borrows the pool from the injected [`ConnectionManager`], runs a
//! single repository call and maps the outcome to JSON. Malformed `item_id` path
//! segments and missing `content` query parameters are rejected by the extractors
//! before a handler runs.

use crate::db::{ConnectionManager, TodoRepository};
use crate::error::DbResult;
use crate::models::{ContentParams, StatusResponse, Todo};
use axum::Json;
use axum::extract::{Path, Query, State};
use std::sync::Arc;
use tracing::info;

/// `GET /`
pub async fn list_items(
    State(manager): State<Arc<ConnectionManager>>,
) -> DbResult<Json<Vec<Todo>>> {
    let pool = manager.get().await?;
    let todos = TodoRepository::new(&pool).list().await?;
    Ok(Json(todos))
}

/// `POST /todo?content=...`
pub async fn create_item(
    State(manager): State<Arc<ConnectionManager>>,
    Query(params): Query<ContentParams>,
) -> DbResult<Json<StatusResponse>> {
    let pool = manager.get().await?;
    TodoRepository::new(&pool).create(&params.content).await?;
    info!("Item created");
    Ok(Json(StatusResponse::created()))
}

/// `PUT /todo/{item_id}?content=...`
pub async fn update_item(
    State(manager): State<Arc<ConnectionManager>>,
    Path(item_id): Path<i64>,
    Query(params): Query<ContentParams>,
) -> DbResult<Json<StatusResponse>> {
    let pool = manager.get().await?;
    TodoRepository::new(&pool)
        .update(item_id, &params.content)
        .await?;
    info!(item_id, "Item updated");
    Ok(Json(StatusResponse::updated()))
}

/// `DELETE /todo/{item_id}`
pub async fn delete_item(
    State(manager): State<Arc<ConnectionManager>>,
    Path(item_id): Path<i64>,
) -> DbResult<Json<StatusResponse>> {
    let pool = manager.get().await?;
    TodoRepository::new(&pool).delete(item_id).await?;
    info!(item_id, "Item deleted");
    Ok(Json(StatusResponse::deleted()))
}
