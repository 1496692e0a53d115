//! Resource handlers, one per CRUD operation
//!
//! Each handler is a single-shot, stateless transaction: parse and validate
//! the request, issue one store call, serialize the result. Validation
//! failures are reported before anything touches the store; store failures
//! roll back inside the repository and surface through [`ApiError`].

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use todo_core::{Todo, TodoError, TodoRepository, TodoValidator};

use crate::error::ApiError;

/// Parse a path segment into a todo id.
///
/// Non-integer ids map to 404, never 500: an id the store could not hold
/// addresses nothing, the same as a missing one.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError(TodoError::not_found_raw(raw)))
}

/// Root liveness route
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Todo API is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/todos
pub async fn list_todos<R: TodoRepository>(
    State(repo): State<Arc<R>>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = repo.list().await?;
    Ok(Json(todos))
}

/// POST /api/todos
pub async fn create_todo<R: TodoRepository>(
    State(repo): State<Arc<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let payload = TodoValidator::parse_payload(&body)?;
    let new_todo = TodoValidator::validate_create(&payload)?;

    let todo = repo.create(new_todo).await?;
    tracing::info!(id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todos/{id}
pub async fn get_todo<R: TodoRepository>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw_id)?;

    match repo.get(id).await? {
        Some(todo) => Ok(Json(todo)),
        None => Err(ApiError(TodoError::not_found_id(id))),
    }
}

/// PUT /api/todos/{id}
pub async fn update_todo<R: TodoRepository>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw_id)?;
    let payload = TodoValidator::parse_payload(&body)?;
    let patch = TodoValidator::validate_update(&payload)?;

    let todo = repo.update(id, patch).await?;
    tracing::info!(id = todo.id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo<R: TodoRepository>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(&raw_id)?;

    repo.delete(id).await?;
    tracing::info!(id, "Todo deleted");

    Ok(Json(json!({
        "message": format!("Todo {id} deleted successfully"),
    })))
}

/// PATCH /api/todos/{id}/toggle
pub async fn toggle_todo<R: TodoRepository>(
    State(repo): State<Arc<R>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = parse_id(&raw_id)?;

    let todo = repo.toggle(id).await?;
    tracing::info!(id = todo.id, completed = todo.completed, "Todo toggled");

    Ok(Json(todo))
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Resource not found" })),
    )
}
