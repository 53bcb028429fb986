//! Storage abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection persistence contract used by the manager.
//! - Isolate JSON and file-system details from service orchestration.
//!
//! # Invariants
//! - Every save replaces the persisted snapshot wholesale.
//! - Trait-level calls never panic and never surface errors to callers;
//!   failures are logged and collapsed to `false` / `None`.

pub mod file_store;
pub mod memory_store;
pub mod todo_store;
