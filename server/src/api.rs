//! Route handlers. Every todo handler takes `CurrentUser` ahead of its body
//! so the guard runs first.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, Request, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{Result, ServerError};
use crate::guard::CurrentUser;
use crate::models::{RegisterUser, Todo, TodoInput, User};
use crate::Db;

/// `Json` whose rejection is rendered as a `{"error": ...}` body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(value))
    }
}

pub async fn register_user(
    State(db): State<Db>,
    JsonBody(input): JsonBody<RegisterUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = db.write().await.register(input.username, input.name)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn list_todos(State(db): State<Db>, user: CurrentUser) -> Result<Json<Vec<Todo>>> {
    let registry = db.read().await;
    Ok(Json(registry.todos(user.username())?.to_vec()))
}

pub async fn create_todo(
    State(db): State<Db>,
    user: CurrentUser,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<(StatusCode, Json<Todo>)> {
    let deadline = input.parsed_deadline();
    let todo = db
        .write()
        .await
        .create_todo(user.username(), input.title, deadline)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(db): State<Db>,
    user: CurrentUser,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<TodoInput>,
) -> Result<(StatusCode, Json<Todo>)> {
    let id = todo_id(&id)?;
    let deadline = input.parsed_deadline();
    let todo = db
        .write()
        .await
        .update_todo(user.username(), id, input.title, deadline)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn mark_done(
    State(db): State<Db>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Todo>)> {
    let id = todo_id(&id)?;
    let todo = db.write().await.mark_done(user.username(), id)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn delete_todo(
    State(db): State<Db>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = todo_id(&id)?;
    db.write().await.delete_todo(user.username(), id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Ids are only ever generated as UUIDs, so anything else names no todo.
fn todo_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ServerError::TodoNotFound)
}
