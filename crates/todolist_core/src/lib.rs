//! Core of the todolist app.
//! Owns the persisted to-do store and the cached list shown to the user.

pub mod config;
pub mod db;
pub mod intent;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError};
pub use intent::{Intent, ListOutcome};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{normalize_title, Todo, TodoId, TodoValidationError};
pub use model::view::{ParseViewError, TodoFilter, TodoSort, ViewSettings};
pub use repo::todo_repo::{
    RepoError, RepoResult, SqliteTodoRepository, TodoListQuery, TodoRepository,
};
pub use service::list_manager::{ListError, ListManager, ListResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
