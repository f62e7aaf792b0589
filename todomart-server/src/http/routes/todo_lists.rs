//! Todo list endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::MessageResponse;
use crate::db::repos::{TodoList, TodoListFields, TodoListRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{Params, ValidId};
use crate::http::server::AppState;
use crate::models::lenient;

/// Full-overwrite update request; `id` addresses the row
#[derive(Deserialize)]
pub struct UpdateTodoListRequest {
    #[serde(deserialize_with = "lenient::req_i64")]
    pub id: i64,
    #[serde(flatten)]
    pub fields: TodoListFields,
}

/// GET /todo_lists
pub(super) async fn list_todo_lists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoList>>, ApiError> {
    let lists = TodoListRepo::new(&state.pool).list().await?;
    Ok(Json(lists))
}

/// GET /todo_list/{id}
pub(super) async fn get_todo_list(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<TodoList>, ApiError> {
    let list = TodoListRepo::new(&state.pool).get(id).await?;
    Ok(Json(list))
}

/// POST /todo_list
pub(super) async fn create_todo_list(
    State(state): State<Arc<AppState>>,
    Params(fields): Params<TodoListFields>,
) -> Result<Json<TodoList>, ApiError> {
    let list = TodoListRepo::new(&state.pool).create(fields).await?;
    Ok(Json(list))
}

/// PATCH /todo_list - overwrites every field, absent ones become null
pub(super) async fn update_todo_list(
    State(state): State<Arc<AppState>>,
    Params(req): Params<UpdateTodoListRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let list = TodoListRepo::new(&state.pool)
        .update(req.id, req.fields)
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Todo list #{} updated successfully", list.id),
    }))
}
