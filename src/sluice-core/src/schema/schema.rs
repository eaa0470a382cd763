//! Ordered column schema of a table.

use serde::{Deserialize, Serialize};

use super::Column;
use crate::ident::eq_ignore_case;

/// Ordered list of columns describing a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Columns in declaration order.
    pub columns: Vec<Column>,
}

impl Schema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema with the given columns.
    pub fn with_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Add a column to the schema.
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Find a column by case-insensitive name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| eq_ignore_case(&c.name, name))
    }

    /// The first auto-increment column, if any.
    pub fn auto_increment_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.auto_increment)
    }

    /// Check whether any column is auto-increment.
    pub fn has_auto_increment(&self) -> bool {
        self.auto_increment_column().is_some()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<Column> for Schema {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Self::with_columns(iter.into_iter().collect())
    }
}
