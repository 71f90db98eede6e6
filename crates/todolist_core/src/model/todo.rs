//! Todo domain model.
//!
//! # Responsibility
//! - Define the persisted to-do record shared by repository and list manager.
//! - Own title normalization used by the add path.
//!
//! # Invariants
//! - `id` is generated by the store and never reused for another record.
//! - `title` is non-blank for every record created through the add path.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of one to-do record.
pub type TodoId = Uuid;

/// Validation errors for todo records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Nil UUID is reserved and cannot identify a record.
    NilId,
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be nil"),
            Self::EmptyTitle => write!(f, "todo title must not be blank"),
        }
    }
}

impl Error for TodoValidationError {}

/// One persisted list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-generated stable ID.
    pub id: TodoId,
    /// User-entered text, trimmed.
    pub title: String,
    /// Completion flag flipped by the toggle path.
    pub completed: bool,
    /// Unix epoch milliseconds, set by the store on insert.
    pub created_at: i64,
    /// Unix epoch milliseconds, bumped by the store on every update.
    pub updated_at: i64,
}

impl Todo {
    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Normalizes raw user input into a storable title.
///
/// Returns `None` for empty or whitespace-only input.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
