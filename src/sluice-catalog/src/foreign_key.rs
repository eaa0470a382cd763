//! Foreign key constraints.

use serde::{Deserialize, Serialize};

use sluice_core::eq_ignore_case;

/// A foreign key declared on `table` that points at `referenced_table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,
    /// Table that owns the constraint.
    pub table: String,
    /// Columns of the owning table.
    pub columns: Vec<String>,
    /// Table the constraint points at, in the same database.
    pub referenced_table: String,
    /// Columns of the referenced table.
    pub referenced_columns: Vec<String>,
}

impl ForeignKey {
    /// Create a foreign key with no column lists.
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        referenced_table: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            columns: Vec::new(),
            referenced_table: referenced_table.into(),
            referenced_columns: Vec::new(),
        }
    }

    /// Set the column pairs.
    #[must_use]
    pub fn with_columns<I, J, S, T>(mut self, columns: I, referenced_columns: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self.referenced_columns = referenced_columns.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether this key points at `table`, ignoring case.
    pub fn references(&self, table: &str) -> bool {
        eq_ignore_case(&self.referenced_table, table)
    }
}
