//! # Record Store
//!
//! A read-only "database" of todo records.
//!
//! The store is loaded once from a JSON data file at startup and is
//! immutable for the process lifetime. It offers lookup-by-id and exposes
//! the full collection to the query pipeline; it performs no filtering
//! itself. A missing or malformed data file is a startup failure, not a
//! per-request error.

mod todo;

pub use todo::Todo;

use std::fs;
use std::path::Path;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while loading the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be read
    #[error("failed to read todo data file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid todo JSON
    #[error("failed to parse todo data file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The immutable in-memory collection of todo records.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Load the store from a JSON data file.
    ///
    /// The file must contain a JSON array of todo objects. Collection
    /// order is the file's order.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let todos: Vec<Todo> = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(Self { todos })
    }

    /// Get the single todo with the given id, if any.
    ///
    /// Exact match only; a linear scan is fine at this collection size.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// The full, unfiltered collection in file order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
