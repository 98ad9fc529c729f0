//! Handlers for `/api/Todo`.
//!
//! Each handler validates, issues one repository call and maps the outcome to a
//! response. Success bodies for writes are plain text.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{Todo, TodoPayload};
use crate::state::AppState;

pub const CREATED_MESSAGE: &str = "New Todo task is created successfully";
pub const UPDATED_MESSAGE: &str = "Task updated successfully";

/// Returns all the tasks
#[utoipa::path(
    get,
    path = "/api/Todo",
    tag = "Todo",
    responses(
        (status = 200, description = "The list of the tasks", body = [Todo]),
        (status = 500, description = "Error retrieving data from database", body = String)
    )
)]
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.list().await.map_err(AppError::Retrieve)?;
    Ok(Json(todos))
}

/// Get the Todo task by id
///
/// An unknown id yields an empty array, not a 404.
#[utoipa::path(
    get,
    path = "/api/Todo/{id}",
    tag = "Todo",
    params(("id" = String, Path, description = "The Todo task id")),
    responses(
        (status = 200, description = "Zero or one matching tasks", body = [Todo]),
        (status = 500, description = "Error retrieving data from database", body = String)
    )
)]
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.todos.find_by_id(&id).await.map_err(AppError::Retrieve)?;
    Ok(Json(todos))
}

/// Create a new Todo task
#[utoipa::path(
    post,
    path = "/api/Todo",
    tag = "Todo",
    request_body = TodoPayload,
    responses(
        (status = 201, description = "New Todo task is created successfully", body = String),
        (status = 500, description = "Status out of range or database failure", body = String)
    )
)]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<TodoPayload>,
) -> Result<(StatusCode, &'static str), AppError> {
    req.validate()?;
    let id = state.todos.insert(&req).await.map_err(AppError::Insert)?;
    info!("created todo {}", id);
    Ok((StatusCode::CREATED, CREATED_MESSAGE))
}

/// Update the Todo task by the id
///
/// Succeeds even when no row has that id.
#[utoipa::path(
    put,
    path = "/api/Todo/{id}",
    tag = "Todo",
    params(("id" = String, Path, description = "The Todo id")),
    request_body = TodoPayload,
    responses(
        (status = 200, description = "Task updated successfully", body = String),
        (status = 500, description = "Status out of range or database failure", body = String)
    )
)]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TodoPayload>,
) -> Result<&'static str, AppError> {
    req.validate()?;
    let rows = state.todos.update(&id, &req).await.map_err(AppError::Update)?;
    debug!("update of todo {} touched {} rows", id, rows);
    Ok(UPDATED_MESSAGE)
}

/// Remove the Todo task by id
#[utoipa::path(
    delete,
    path = "/api/Todo/{id}",
    tag = "Todo",
    params(("id" = String, Path, description = "The Todo task id")),
    responses(
        (status = 200, description = "The Todo task was deleted", body = String),
        (status = 500, description = "Error deleting data from database", body = String)
    )
)]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let rows = state.todos.delete(&id).await.map_err(AppError::Delete)?;
    debug!("delete of todo {} touched {} rows", id, rows);
    Ok(format!("The todo task with id {} was deleted", id))
}
