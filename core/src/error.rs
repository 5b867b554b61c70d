//! Error types for the todo API client.
//!
//! The three failures the service reports by name get their own variants,
//! recognised from the `{"error": ...}` body. Any other unexpected status
//! lands in `HttpError` with the raw status code and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `username` header did not name a registered user.
    #[error("user not found")]
    UserNotFound,

    /// Registration used a username that is already taken.
    #[error("username already in use")]
    UsernameConflict,

    /// The todo does not exist for the acting user.
    #[error("todo not found")]
    TodoNotFound,

    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
