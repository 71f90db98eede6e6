//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract the list manager depends on.
//! - Keep SQLite query details out of the service layer.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   transport errors.

pub mod todo_repo;
