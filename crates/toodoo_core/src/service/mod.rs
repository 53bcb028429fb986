//! Core use-case services.
//!
//! # Responsibility
//! - Own the live todo collection and orchestrate storage calls.
//! - Keep the terminal loop decoupled from storage details.

pub mod todo_service;
