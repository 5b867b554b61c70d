//! Multi-user to-do list HTTP API backed by an in-memory registry.
//!
//! # Overview
//! Users register with a username, then manage todos scoped to that user by
//! sending the username in the `username` header. Nothing is persisted; the
//! registry lives as long as the router that owns it.
//!
//! # Design
//! - One `Registry` behind a `tokio::sync::RwLock`, shared as router state.
//!   Every mutation runs under a single write lock, so check-then-insert
//!   registration and todo updates are atomic.
//! - `CurrentUser` resolves the header before a todo handler runs.
//! - `ServerError` renders `{"error": "..."}` with the matching status.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod registry;

use std::sync::Arc;

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{ConfigError, ServerConfig};
pub use error::{Result, ServerError};
pub use guard::{CurrentUser, USERNAME_HEADER};
pub use models::{Todo, User};
pub use registry::Registry;

pub type Db = Arc<RwLock<Registry>>;

/// Router over a fresh, empty registry.
pub fn app() -> Router {
    router(Db::default())
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/users", post(api::register_user))
        .route("/todos", get(api::list_todos).post(api::create_todo))
        .route("/todos/{id}", put(api::update_todo).delete(api::delete_todo))
        .route("/todos/{id}/done", patch(api::mark_done))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> std::result::Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
