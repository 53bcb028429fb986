//! JSON file-backed store.
//!
//! # Responsibility
//! - Persist the full collection as one JSON array at a fixed path.
//! - Expose fallible read/write entry points that keep "no file yet" and
//!   "corrupt file" apart.
//!
//! # Invariants
//! - Writes go to a sibling temp file that is fsynced and renamed over the
//!   target, so a failed save leaves the previous file intact.
//! - The parent directory is created on demand before writing.
//! - Todo titles never appear in log events.

use crate::model::todo::Todo;
use crate::store::todo_store::{StoreError, StoreResult, TodoStore};
use directories::BaseDirs;
use log::{error, info};
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name of the persisted collection.
pub const STORE_FILE_NAME: &str = "todos.json";
const APP_DIR_NAME: &str = "toodoo";

/// Returns the per-user application data directory for toodoo.
///
/// # Errors
/// - Returns `StoreError::NoDataDir` when no home directory can be resolved.
pub fn default_data_dir() -> StoreResult<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or(StoreError::NoDataDir)?;
    Ok(base_dirs.data_dir().join(APP_DIR_NAME))
}

/// Store that serializes the collection to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileTodoStore {
    path: PathBuf,
}

impl FileTodoStore {
    /// Creates a store backed by the exact file `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by `todos.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STORE_FILE_NAME))
    }

    /// Creates a store at the default per-user location.
    pub fn open_default() -> StoreResult<Self> {
        Ok(Self::in_dir(default_data_dir()?))
    }

    /// Path of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the stored collection.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    ///
    /// # Errors
    /// - `StoreError::Io` when the file exists but cannot be read.
    /// - `StoreError::Corrupt` when the content is not a todo array.
    pub fn read_todos(&self) -> StoreResult<Option<Vec<Todo>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let todos = serde_json::from_slice::<Vec<Todo>>(&bytes).map_err(|source| {
            StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        Ok(Some(todos))
    }

    /// Serializes `todos` and atomically replaces the stored file.
    ///
    /// # Errors
    /// - `StoreError::Serialize` when encoding fails.
    /// - `StoreError::Io` when the directory, temp file or rename fails.
    pub fn write_todos(&self, todos: &[Todo]) -> StoreResult<()> {
        let json = serde_json::to_vec_pretty(todos)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let written =
            write_synced(&temp_path, &json).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(err) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|value| value.to_os_string())
            .unwrap_or_else(|| OsString::from(STORE_FILE_NAME));
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

impl TodoStore for FileTodoStore {
    fn save(&mut self, todos: &[Todo]) -> bool {
        let started_at = Instant::now();
        match self.write_todos(todos) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok backend=file count={} duration_ms={}",
                    todos.len(),
                    started_at.elapsed().as_millis()
                );
                true
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error backend=file count={} duration_ms={} path={} error={}",
                    todos.len(),
                    started_at.elapsed().as_millis(),
                    self.path.display(),
                    err
                );
                false
            }
        }
    }

    fn load(&self) -> Option<Vec<Todo>> {
        match self.read_todos() {
            Ok(Some(todos)) if todos.is_empty() => {
                info!("event=store_load module=store status=empty backend=file");
                None
            }
            Ok(Some(todos)) => {
                info!(
                    "event=store_load module=store status=ok backend=file count={}",
                    todos.len()
                );
                Some(todos)
            }
            Ok(None) => {
                info!(
                    "event=store_load module=store status=missing backend=file path={}",
                    self.path.display()
                );
                None
            }
            Err(err @ StoreError::Corrupt { .. }) => {
                error!(
                    "event=store_load module=store status=corrupt backend=file error={}",
                    err
                );
                None
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error backend=file path={} error={}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
