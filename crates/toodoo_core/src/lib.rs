//! Core domain logic for toodoo.
//! This crate owns the todo collection, its persistence and its invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError, LOG_DIR_NAME};
pub use model::todo::{Todo, TodoId, COMPLETED_MARKER, PENDING_MARKER};
pub use service::todo_service::{ActionOutcome, ActionReport, TodoManager};
pub use store::file_store::{default_data_dir, FileTodoStore, STORE_FILE_NAME};
pub use store::memory_store::MemoryTodoStore;
pub use store::todo_store::{StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
