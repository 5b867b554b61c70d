//! Domain DTOs for the todo API.
//!
//! These mirror the server's JSON but are defined independently. Timestamps
//! are `Option` where the server may send `null`: a deadline it could not
//! parse comes back that way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user as returned by `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub todos: Vec<Todo>,
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub deadline: Option<DateTime<Utc>>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub name: String,
}

/// Request payload for creating or replacing a todo. `deadline` is sent as
/// given; the server decides whether it is a valid time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: String,
    pub deadline: String,
}
