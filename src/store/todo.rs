//! The todo record type.

use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// Records are immutable once loaded; the identifier is assigned by the
/// data file and never reassigned. The wire format uses `_id` for the
/// identifier field, matching the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Free-text owner name
    pub owner: String,

    /// Completion status (true = complete)
    pub status: bool,

    /// Free-text body, searched by substring containment
    pub body: String,

    /// Free-text category
    pub category: String,
}
