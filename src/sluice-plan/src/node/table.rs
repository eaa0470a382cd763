//! Table reference nodes.

use serde::{Deserialize, Serialize};

use sluice_core::Schema;

/// A table bound to a concrete catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTable {
    /// Table name as stored in the catalog.
    pub name: String,
    /// Column schema of the table.
    pub schema: Schema,
}

impl ResolvedTable {
    /// Create a resolved table.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// A table referenced only by name, optionally qualified with a database.
///
/// Trigger definitions point at their target through this node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnresolvedTable {
    /// Database qualifier, `None` when the reference is unqualified.
    pub database: Option<String>,
    /// Table name.
    pub name: String,
}

impl UnresolvedTable {
    /// Create an unqualified table reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            database: None,
            name: name.into(),
        }
    }

    /// Create a table reference qualified with a database.
    pub fn qualified(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: Some(database.into()),
            name: name.into(),
        }
    }
}
