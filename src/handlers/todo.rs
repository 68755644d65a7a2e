//! Todo handlers: list, create, update, delete.

use crate::error::AppError;
use crate::extractors::ValidJson;
use crate::model::{CreateTodo, Todo, UpdateTodo};
use crate::response::{message, MessageBody};
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = state.store.list_all().await?;
    Ok(Json(todos))
}

/// Responds 200 rather than 201; existing clients expect it.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    RequestValidator::validate_create(&body)?;
    let todo = state.store.create(&body.title).await?;
    tracing::info!(id = %todo.id, "todo created");
    Ok((StatusCode::OK, Json(todo)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(body): ValidJson<UpdateTodo>,
) -> Result<Json<Todo>, AppError> {
    RequestValidator::validate_update(&body)?;
    let todo = state
        .store
        .update(&id, body.title.as_deref(), body.completed)
        .await?
        .ok_or(AppError::NotFound("Todo"))?;
    tracing::info!(id = %todo.id, "todo updated");
    Ok(Json(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, AppError> {
    state
        .store
        .delete(&id)
        .await?
        .ok_or(AppError::NotFound("Todo"))?;
    tracing::info!(id = %id, "todo deleted");
    Ok(message("Todo deleted successfully"))
}
