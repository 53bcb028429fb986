//! Storage contract and error types shared by every backend.
//!
//! # Responsibility
//! - Declare the two-operation `TodoStore` capability.
//! - Provide semantic errors for backends that expose fallible APIs.
//!
//! # Invariants
//! - `save` reports success as a plain bool.
//! - `load` returns `None` for missing, empty and unreadable state alike.

use crate::model::todo::Todo;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for fallible storage operations.
#[derive(Debug)]
pub enum StoreError {
    /// File-system read/write failure.
    Io(std::io::Error),
    /// Collection could not be serialized.
    Serialize(serde_json::Error),
    /// Stored document exists but is not a valid todo array.
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// No per-user data directory could be resolved.
    NoDataDir,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize todos: {err}"),
            Self::Corrupt { path, source } => {
                write!(f, "corrupt todo file `{}`: {source}", path.display())
            }
            Self::NoDataDir => write!(f, "failed to determine per-user data directory"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Corrupt { source, .. } => Some(source),
            Self::NoDataDir => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Whole-collection persistence capability.
///
/// The manager receives one implementation at construction and keeps it for
/// its lifetime.
pub trait TodoStore {
    /// Replaces the persisted state with `todos`. Returns `false` on failure.
    fn save(&mut self, todos: &[Todo]) -> bool;
    /// Reads the persisted state, or `None` when there is nothing usable.
    fn load(&self) -> Option<Vec<Todo>>;
}
