//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into presentation-facing operations.
//! - Keep presentation code decoupled from storage details.

pub mod list_manager;
