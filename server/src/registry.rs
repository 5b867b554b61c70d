//! In-memory store of users and their todos.
//!
//! # Design
//! Users are keyed by username, so registration checks uniqueness and inserts
//! in one map operation. Each user's todos stay in a `Vec` to keep insertion
//! order for listing; id lookups scan that vector. Callers identify the acting
//! user by username on every call instead of holding a reference across the
//! lock. Users are never removed, so a username that resolved once keeps
//! resolving.

use std::collections::{hash_map::Entry, HashMap};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{Result, ServerError};
use crate::models::{Todo, User};

#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<String, User>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, username: String, name: String) -> Result<User> {
        match self.users.entry(username) {
            Entry::Occupied(_) => Err(ServerError::UsernameConflict),
            Entry::Vacant(slot) => {
                let user = User {
                    username: slot.key().clone(),
                    name,
                    todos: Vec::new(),
                    id: Uuid::new_v4(),
                };
                tracing::debug!(username = %user.username, id = %user.id, "registered user");
                Ok(slot.insert(user).clone())
            }
        }
    }

    /// Exact, case-sensitive lookup by username.
    pub fn identify(&self, username: &str) -> Result<&User> {
        self.users.get(username).ok_or(ServerError::UserNotFound)
    }

    pub fn todos(&self, username: &str) -> Result<&[Todo]> {
        Ok(&self.identify(username)?.todos)
    }

    pub fn create_todo(
        &mut self,
        username: &str,
        title: String,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Todo> {
        let user = self.user_mut(username)?;
        let todo = Todo {
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
            id: Uuid::new_v4(),
        };
        user.todos.push(todo.clone());
        tracing::debug!(%username, id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Overwrites title and deadline together; `done` and `created_at` are kept.
    pub fn update_todo(
        &mut self,
        username: &str,
        id: Uuid,
        title: String,
        deadline: Option<DateTime<Utc>>,
    ) -> Result<Todo> {
        let todo = self.todo_mut(username, id)?;
        todo.title = title;
        todo.deadline = deadline;
        tracing::debug!(%username, %id, "updated todo");
        Ok(todo.clone())
    }

    pub fn mark_done(&mut self, username: &str, id: Uuid) -> Result<Todo> {
        let todo = self.todo_mut(username, id)?;
        todo.done = true;
        tracing::debug!(%username, %id, "marked todo done");
        Ok(todo.clone())
    }

    pub fn delete_todo(&mut self, username: &str, id: Uuid) -> Result<()> {
        let todos = &mut self.user_mut(username)?.todos;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(ServerError::TodoNotFound)?;
        todos.remove(index);
        tracing::debug!(%username, %id, "deleted todo");
        Ok(())
    }

    fn user_mut(&mut self, username: &str) -> Result<&mut User> {
        self.users.get_mut(username).ok_or(ServerError::UserNotFound)
    }

    fn todo_mut(&mut self, username: &str, id: Uuid) -> Result<&mut Todo> {
        self.user_mut(username)?
            .todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(ServerError::TodoNotFound)
    }
}
