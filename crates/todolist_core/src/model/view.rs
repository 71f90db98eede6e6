//! View parameters applied to list queries.
//!
//! Filter and sort are independent axes; any combination is valid.

use crate::model::todo::Todo;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Predicate restricting which todos a query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoFilter {
    /// Every record.
    #[default]
    All,
    /// Only records with `completed == false`.
    IncompleteOnly,
}

impl TodoFilter {
    /// Returns whether `todo` passes this filter.
    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::IncompleteOnly => !todo.completed,
        }
    }

    /// Short name accepted by `FromStr`, used in logs and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::IncompleteOnly => "incomplete",
        }
    }
}

/// Ordering rule applied to query results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoSort {
    /// Incomplete before complete, then oldest first.
    #[default]
    ByCompletionThenInsertion,
    /// Title ascending, case-insensitive for ASCII letters only.
    ///
    /// Titles equal under that folding are ordered by exact title, then
    /// oldest first. Non-ASCII letters compare by byte value, so `É` sorts
    /// after every lowercase ASCII title.
    ByTitleAscending,
}

impl TodoSort {
    /// Short name accepted by `FromStr`, used in logs and the CLI.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ByCompletionThenInsertion => "completion",
            Self::ByTitleAscending => "title",
        }
    }
}

/// Current filter + sort pair of a list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewSettings {
    pub filter: TodoFilter,
    pub sort: TodoSort,
}

impl ViewSettings {
    pub fn new(filter: TodoFilter, sort: TodoSort) -> Self {
        Self { filter, sort }
    }
}

/// Error returned when a filter or sort name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseViewError {
    kind: &'static str,
    value: String,
}

impl Display for ParseViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl Error for ParseViewError {}

impl FromStr for TodoFilter {
    type Err = ParseViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "incomplete" | "incomplete_only" => Ok(Self::IncompleteOnly),
            other => Err(ParseViewError {
                kind: "filter",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for TodoSort {
    type Err = ParseViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "completion" | "default" => Ok(Self::ByCompletionThenInsertion),
            "title" | "name" => Ok(Self::ByTitleAscending),
            other => Err(ParseViewError {
                kind: "sort",
                value: other.to_string(),
            }),
        }
    }
}
