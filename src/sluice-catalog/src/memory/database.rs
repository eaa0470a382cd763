//! In-memory database.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use common_error::{SluiceError, SluiceResult};
use sluice_core::normalize;

use crate::{Database, Table};

/// A database holding tables in memory, keyed by lowercase name.
pub struct MemoryDatabase {
    name: String,
    tables: RwLock<BTreeMap<String, Arc<dyn Table>>>,
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: RwLock::new(BTreeMap::new()),
        }
    }

    /// Add a table, replacing any table whose name differs only in case.
    pub fn add_table<T: Table + 'static>(&self, table: T) {
        let mut tables = self.tables.write().expect("database lock poisoned");
        tables.insert(normalize(table.name()), Arc::new(table));
    }

    /// Builder form of [`MemoryDatabase::add_table`].
    #[must_use]
    pub fn with_table<T: Table + 'static>(self, table: T) -> Self {
        self.add_table(table);
        self
    }

    /// Remove a table by case-insensitive name.
    pub fn drop_table(&self, name: &str) -> bool {
        let mut tables = self.tables.write().expect("database lock poisoned");
        tables.remove(&normalize(name)).is_some()
    }

    fn read_tables(
        &self,
    ) -> SluiceResult<std::sync::RwLockReadGuard<'_, BTreeMap<String, Arc<dyn Table>>>> {
        self.tables
            .read()
            .map_err(|_| SluiceError::catalog(format!("database {} lock poisoned", self.name)))
    }
}

impl Database for MemoryDatabase {
    fn name(&self) -> &str {
        &self.name
    }

    fn table_names(&self) -> SluiceResult<Vec<String>> {
        Ok(self
            .read_tables()?
            .values()
            .map(|t| t.name().to_string())
            .collect())
    }

    fn get_table_insensitive(&self, name: &str) -> SluiceResult<Option<Arc<dyn Table>>> {
        Ok(self.read_tables()?.get(&normalize(name)).cloned())
    }
}

impl std::fmt::Debug for MemoryDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDatabase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTable;
    use sluice_core::Schema;

    #[test]
    fn test_table_lookup_ignores_case() {
        let db = MemoryDatabase::new("Sales")
            .with_table(MemoryTable::new("Orders", Schema::new()))
            .with_table(MemoryTable::new("customers", Schema::new()));

        assert_eq!(db.table_names().unwrap(), vec!["customers", "Orders"]);
        let table = db.get_table_insensitive("ORDERS").unwrap().unwrap();
        assert_eq!(table.name(), "Orders");
        assert!(db.get_table_insensitive("missing").unwrap().is_none());
    }

    #[test]
    fn test_drop_table() {
        let db = MemoryDatabase::new("sales").with_table(MemoryTable::new("orders", Schema::new()));

        assert!(db.drop_table("ORDERS"));
        assert!(!db.drop_table("orders"));
        assert!(db.table_names().unwrap().is_empty());
    }
}
