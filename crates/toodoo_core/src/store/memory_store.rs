//! Volatile in-process store.
//!
//! # Invariants
//! - `load` treats "never saved" and "last saved empty" the same way.
//! - `snapshot` keeps the two cases apart for callers that care.

use crate::model::todo::Todo;
use crate::store::todo_store::TodoStore;
use log::debug;

/// Store that keeps the last saved collection in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoStore {
    todos: Option<Vec<Todo>>,
}

impl MemoryTodoStore {
    /// Creates a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded as if `todos` had already been saved.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { todos: Some(todos) }
    }

    /// Returns the raw saved state.
    ///
    /// `None` means no save happened; `Some(&[])` means an empty collection
    /// was saved.
    pub fn snapshot(&self) -> Option<&[Todo]> {
        self.todos.as_deref()
    }
}

impl TodoStore for MemoryTodoStore {
    fn save(&mut self, todos: &[Todo]) -> bool {
        self.todos = Some(todos.to_vec());
        debug!(
            "event=store_save module=store status=ok backend=memory count={}",
            todos.len()
        );
        true
    }

    fn load(&self) -> Option<Vec<Todo>> {
        match self.todos.as_ref() {
            Some(todos) if !todos.is_empty() => {
                debug!(
                    "event=store_load module=store status=ok backend=memory count={}",
                    todos.len()
                );
                Some(todos.clone())
            }
            Some(_) => {
                debug!("event=store_load module=store status=empty backend=memory");
                None
            }
            None => {
                debug!("event=store_load module=store status=missing backend=memory");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryTodoStore;
    use crate::model::todo::Todo;
    use crate::store::todo_store::TodoStore;

    #[test]
    fn load_is_none_before_first_save() {
        let store = MemoryTodoStore::new();
        assert!(store.load().is_none());
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn empty_save_loads_as_none_but_snapshot_is_present() {
        let mut store = MemoryTodoStore::new();
        assert!(store.save(&[]));

        assert!(store.load().is_none());
        assert_eq!(store.snapshot(), Some(&[][..]));
    }

    #[test]
    fn save_replaces_previous_state() {
        let mut store = MemoryTodoStore::with_todos(vec![Todo::new("old")]);
        let replacement = vec![Todo::new("new a"), Todo::new("new b")];
        assert!(store.save(&replacement));

        assert_eq!(store.load().unwrap(), replacement);
    }
}
