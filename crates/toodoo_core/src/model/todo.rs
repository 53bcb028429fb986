//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its JSON wire shape.
//! - Provide the completion toggle and the derived display form.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `is_completed` is the only field mutated after creation.
//! - The display form is derived on demand and never persisted.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Marker rendered in front of a todo that is still open.
pub const PENDING_MARKER: &str = "⏳";
/// Marker rendered in front of a completed todo.
pub const COMPLETED_MARKER: &str = "👌";

/// Single task record.
///
/// Serialized as `{"id", "title", "isCompleted"}`. Unknown fields are
/// ignored on read, so files carrying extra keys still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Stable ID assigned at creation.
    pub id: TodoId,
    /// User-supplied text. Empty titles are accepted as-is.
    pub title: String,
    /// Completion flag, `false` at creation.
    pub is_completed: bool,
}

impl Todo {
    /// Creates an open todo with a freshly generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates an open todo with a caller-provided ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            is_completed: false,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }

    /// Returns the glyph matching the current completion state.
    pub fn marker(&self) -> &'static str {
        if self.is_completed {
            COMPLETED_MARKER
        } else {
            PENDING_MARKER
        }
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.marker(), self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, COMPLETED_MARKER, PENDING_MARKER};

    #[test]
    fn display_uses_pending_marker_for_new_todo() {
        let todo = Todo::new("buy milk");
        assert_eq!(todo.to_string(), format!("{PENDING_MARKER} buy milk"));
    }

    #[test]
    fn display_switches_marker_after_toggle() {
        let mut todo = Todo::new("pay bills");
        assert!(todo.toggle());
        assert_eq!(todo.to_string(), format!("{COMPLETED_MARKER} pay bills"));
        assert!(!todo.toggle());
        assert_eq!(todo.marker(), PENDING_MARKER);
    }

    #[test]
    fn display_keeps_empty_title() {
        let todo = Todo::new("");
        assert_eq!(todo.to_string(), format!("{PENDING_MARKER} "));
    }
}
