//! Column definitions.

use serde::{Deserialize, Serialize};

use crate::types::DataType;

/// A column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Data type.
    pub data_type: DataType,
    /// Whether this column can contain nulls.
    pub nullable: bool,
    /// Whether values are assigned from a per-table counter on insert.
    pub auto_increment: bool,
}

impl Column {
    /// Create a new nullable column.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            auto_increment: false,
        }
    }

    /// Set nullable for this column.
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Mark this column as `AUTO_INCREMENT`. Auto-increment columns are never null.
    #[must_use]
    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self.nullable = false;
        self
    }
}
