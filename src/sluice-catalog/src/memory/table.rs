//! In-memory table.

use common_error::SluiceResult;
use sluice_core::Schema;

use crate::{ForeignKey, ForeignKeyTable, Table};

/// A table that only holds metadata.
///
/// Foreign key support is opt-in: a table built with
/// [`MemoryTable::with_foreign_keys`] exposes the [`ForeignKeyTable`]
/// capability, one built with [`MemoryTable::new`] does not.
#[derive(Debug, Clone)]
pub struct MemoryTable {
    name: String,
    schema: Schema,
    foreign_keys: Option<Vec<ForeignKey>>,
}

impl MemoryTable {
    /// Create a table without foreign key support.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            foreign_keys: None,
        }
    }

    /// Enable foreign key support with the given keys.
    #[must_use]
    pub fn with_foreign_keys(mut self, foreign_keys: Vec<ForeignKey>) -> Self {
        self.foreign_keys = Some(foreign_keys);
        self
    }

    /// Declare another foreign key, enabling foreign key support if needed.
    pub fn add_foreign_key(&mut self, foreign_key: ForeignKey) {
        self.foreign_keys.get_or_insert_with(Vec::new).push(foreign_key);
    }
}

impl Table for MemoryTable {
    fn name(&self) -> &str {
        &self.name
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn as_foreign_key_table(&self) -> Option<&dyn ForeignKeyTable> {
        self.foreign_keys.as_ref().map(|_| self as &dyn ForeignKeyTable)
    }
}

impl ForeignKeyTable for MemoryTable {
    fn foreign_keys(&self) -> SluiceResult<Vec<ForeignKey>> {
        Ok(self.foreign_keys.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sluice_core::{Column, DataType};
    use sluice_plan::PlanNode;

    #[test]
    fn test_foreign_key_capability_is_opt_in() {
        let plain = MemoryTable::new("orders", Schema::new());
        assert!(plain.as_foreign_key_table().is_none());

        let mut items = MemoryTable::new("order_items", Schema::new());
        items.add_foreign_key(ForeignKey::new("fk1", "order_items", "orders"));

        let fks = items.as_foreign_key_table().unwrap().foreign_keys().unwrap();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].name, "fk1");
    }

    #[test]
    fn test_resolve() {
        let schema = Schema::with_columns(vec![Column::new("id", DataType::Int64)]);
        let table = MemoryTable::new("orders", schema.clone());

        assert_eq!(table.resolve(), PlanNode::resolved_table("orders", schema));
    }
}
