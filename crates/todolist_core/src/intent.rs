//! Presentation intents and their outcomes.
//!
//! The presentation layer sends one [`Intent`] per user action to
//! `ListManager::handle` and re-renders from `ListManager::items` whenever
//! the returned outcome is not [`ListOutcome::Ignored`].

use crate::model::todo::{Todo, TodoId};
use crate::model::view::{TodoFilter, TodoSort, ViewSettings};

/// User action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add button pressed with the current text field contents.
    AddRequested(String),
    /// Row tapped; toggles completion.
    RowSelected(TodoId),
    /// Row swiped away.
    RowDeleted(TodoId),
    FilterChanged(TodoFilter),
    SortChanged(TodoSort),
    /// Reload from the store, e.g. after a previous failure.
    Refresh,
}

/// Result of a handled intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    Added(Todo),
    /// Blank add request; nothing changed.
    Ignored,
    Toggled(Todo),
    Deleted(TodoId),
    ViewChanged(ViewSettings),
    Refreshed,
}

impl ListOutcome {
    /// Whether the cached list may have changed and should be re-rendered.
    pub fn needs_render(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
