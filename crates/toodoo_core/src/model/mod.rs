//! Domain model for the todo collection.
//!
//! # Responsibility
//! - Define the record shared by the manager and every storage backend.
//! - Own the derived display form so callers never format flags by hand.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - Deletion is a hard removal from the collection; there are no tombstones.

pub mod todo;
