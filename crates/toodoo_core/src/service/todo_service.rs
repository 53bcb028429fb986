//! Todo manager use-cases.
//!
//! # Responsibility
//! - Own the ordered in-memory collection for the session.
//! - Apply add/list/toggle/delete and persist the full collection after
//!   every mutating call.
//!
//! # Invariants
//! - Collection order is insertion order and doubles as the 1-based index.
//! - Valid indices satisfy `1 <= index <= len`; index `0` is always invalid.
//! - Toggle and delete persist even when the index is rejected.
//! - The manager never writes to the terminal; callers render reports.

use crate::model::todo::{Todo, TodoId};
use crate::store::todo_store::TodoStore;
use log::{info, warn};

/// What a mutating manager call did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A new todo was appended.
    Added { id: TodoId },
    /// The todo at `index` (1-based) now has `is_completed`.
    Toggled { index: usize, is_completed: bool },
    /// The todo formerly at `index` (1-based) was removed.
    Deleted { index: usize, todo: Todo },
    /// `index` was outside `1..=len`; nothing changed.
    InvalidIndex { index: i64, len: usize },
}

/// Outcome of a mutating call plus the result of the save that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub outcome: ActionOutcome,
    /// `false` when the storage backend failed to persist the collection.
    pub persisted: bool,
}

impl ActionReport {
    /// Returns whether the call changed the collection.
    pub fn is_applied(&self) -> bool {
        !matches!(self.outcome, ActionOutcome::InvalidIndex { .. })
    }
}

/// Session owner of the todo collection.
pub struct TodoManager<S: TodoStore> {
    todos: Vec<Todo>,
    store: S,
}

impl<S: TodoStore> TodoManager<S> {
    /// Creates a manager and loads the initial collection from `store`.
    ///
    /// Absent or unusable stored state starts an empty collection.
    pub fn new(store: S) -> Self {
        let todos = store.load().unwrap_or_default();
        info!(
            "event=manager_init module=service status=ok count={}",
            todos.len()
        );
        Self { todos, store }
    }

    /// Appends a new open todo and persists the collection.
    ///
    /// The title is stored as given; empty titles are accepted.
    pub fn add_todo(&mut self, title: impl Into<String>) -> ActionReport {
        let todo = Todo::new(title);
        let id = todo.id;
        let title_len = todo.title.chars().count();
        self.todos.push(todo);

        let persisted = self.persist();
        info!(
            "event=todo_add module=service status=ok id={} title_chars={} count={} persisted={}",
            id,
            title_len,
            self.todos.len(),
            persisted
        );
        ActionReport {
            outcome: ActionOutcome::Added { id },
            persisted,
        }
    }

    /// Renders one `"{position}. {display}"` line per todo, in order.
    pub fn list_todos(&self) -> Vec<String> {
        self.todos
            .iter()
            .enumerate()
            .map(|(offset, todo)| format!("{}. {}", offset + 1, todo))
            .collect()
    }

    /// Flips completion of the todo at 1-based `index`.
    pub fn toggle_completion(&mut self, index: i64) -> ActionReport {
        let outcome = match self.offset_of(index) {
            Some(offset) => {
                let is_completed = self.todos[offset].toggle();
                info!(
                    "event=todo_toggle module=service status=ok index={} is_completed={}",
                    index, is_completed
                );
                ActionOutcome::Toggled {
                    index: offset + 1,
                    is_completed,
                }
            }
            None => self.reject_index("todo_toggle", index),
        };

        ActionReport {
            outcome,
            persisted: self.persist(),
        }
    }

    /// Removes the todo at 1-based `index`; later todos shift down by one.
    pub fn delete_todo(&mut self, index: i64) -> ActionReport {
        let outcome = match self.offset_of(index) {
            Some(offset) => {
                let todo = self.todos.remove(offset);
                info!(
                    "event=todo_delete module=service status=ok index={} id={} count={}",
                    index,
                    todo.id,
                    self.todos.len()
                );
                ActionOutcome::Deleted {
                    index: offset + 1,
                    todo,
                }
            }
            None => self.reject_index("todo_delete", index),
        };

        ActionReport {
            outcome,
            persisted: self.persist(),
        }
    }

    /// Current collection in display order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of todos in the collection.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns whether the collection has no todos.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Storage backend injected at construction.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the manager and returns its storage backend.
    pub fn into_store(self) -> S {
        self.store
    }

    fn offset_of(&self, index: i64) -> Option<usize> {
        let offset = usize::try_from(index).ok()?.checked_sub(1)?;
        (offset < self.todos.len()).then_some(offset)
    }

    fn reject_index(&self, event: &str, index: i64) -> ActionOutcome {
        warn!(
            "event={} module=service status=invalid_index index={} count={}",
            event,
            index,
            self.todos.len()
        );
        ActionOutcome::InvalidIndex {
            index,
            len: self.todos.len(),
        }
    }

    fn persist(&mut self) -> bool {
        self.store.save(&self.todos)
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionOutcome, TodoManager};
    use crate::store::memory_store::MemoryTodoStore;

    #[test]
    fn offset_of_rejects_zero_negative_and_past_end() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        manager.add_todo("a");
        manager.add_todo("b");

        assert_eq!(manager.offset_of(0), None);
        assert_eq!(manager.offset_of(-1), None);
        assert_eq!(manager.offset_of(i64::MIN), None);
        assert_eq!(manager.offset_of(3), None);
        assert_eq!(manager.offset_of(1), Some(0));
        assert_eq!(manager.offset_of(2), Some(1));
    }

    #[test]
    fn invalid_index_still_saves() {
        let mut manager = TodoManager::new(MemoryTodoStore::new());
        let report = manager.toggle_completion(1);

        assert_eq!(
            report.outcome,
            ActionOutcome::InvalidIndex { index: 1, len: 0 }
        );
        assert!(!report.is_applied());
        assert!(report.persisted);
        assert_eq!(manager.store().snapshot(), Some(&[][..]));
    }
}
