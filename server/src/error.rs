use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerError {
    #[error("Username already in use")]
    UsernameConflict,

    #[error("User not found")]
    UserNotFound,

    #[error("Todo not found")]
    TodoNotFound,

    /// The request body was not JSON, or not sent as JSON.
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UsernameConflict | ServerError::UserNotFound => StatusCode::BAD_REQUEST,
            ServerError::TodoNotFound => StatusCode::NOT_FOUND,
            ServerError::InvalidBody { status, .. } => *status,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (self.status(), body).into_response()
    }
}
