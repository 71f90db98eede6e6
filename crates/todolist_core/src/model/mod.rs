//! To-do domain model.
//!
//! # Responsibility
//! - Define the persisted `Todo` record.
//! - Define the filter/sort view parameters used by list queries.
//!
//! # Invariants
//! - Every record is identified by a store-generated `TodoId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod todo;
pub mod view;
