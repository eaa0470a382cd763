//! In-memory catalog.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use common_error::{SluiceError, SluiceResult};
use sluice_core::{eq_ignore_case, normalize};

use crate::{Catalog, Database, Trigger, TriggerSource};

/// Catalog holding databases and their triggers in memory.
///
/// Databases are reported in registration order.
#[derive(Default)]
pub struct MemoryCatalog {
    databases: RwLock<Vec<Arc<dyn Database>>>,
    /// Triggers by lowercase database name.
    triggers: RwLock<HashMap<String, Vec<Trigger>>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a database.
    pub fn add_database(&self, database: Arc<dyn Database>) {
        self.databases
            .write()
            .expect("catalog lock poisoned")
            .push(database);
    }

    /// Builder form of [`MemoryCatalog::add_database`].
    #[must_use]
    pub fn with_database(self, database: impl Database + 'static) -> Self {
        self.add_database(Arc::new(database));
        self
    }

    /// Find a database by case-insensitive name.
    pub fn database(&self, name: &str) -> Option<Arc<dyn Database>> {
        self.databases
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|db| eq_ignore_case(db.name(), name))
            .cloned()
    }

    /// Register a trigger under the database it names.
    pub fn add_trigger(&self, trigger: Trigger) {
        self.triggers
            .write()
            .expect("catalog lock poisoned")
            .entry(normalize(&trigger.database))
            .or_default()
            .push(trigger);
    }

    /// Builder form of [`MemoryCatalog::add_trigger`].
    #[must_use]
    pub fn with_trigger(self, trigger: Trigger) -> Self {
        self.add_trigger(trigger);
        self
    }
}

impl Catalog for MemoryCatalog {
    fn all_databases(&self) -> Vec<Arc<dyn Database>> {
        self.databases.read().expect("catalog lock poisoned").clone()
    }
}

impl TriggerSource for MemoryCatalog {
    fn triggers(&self, database: &dyn Database) -> SluiceResult<Vec<Trigger>> {
        let triggers = self
            .triggers
            .read()
            .map_err(|_| SluiceError::catalog("trigger lock poisoned"))?;
        Ok(triggers
            .get(&normalize(database.name()))
            .cloned()
            .unwrap_or_default())
    }
}

impl std::fmt::Debug for MemoryCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .all_databases()
            .iter()
            .map(|db| db.name().to_string())
            .collect();
        f.debug_struct("MemoryCatalog")
            .field("databases", &names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryDatabase, TriggerEvent, TriggerTiming};
    use sluice_plan::PlanNode;

    #[test]
    fn test_catalog_operations() {
        let catalog = MemoryCatalog::new()
            .with_database(MemoryDatabase::new("sales"))
            .with_database(MemoryDatabase::new("HR"));

        let names: Vec<String> = catalog
            .all_databases()
            .iter()
            .map(|db| db.name().to_string())
            .collect();
        assert_eq!(names, vec!["sales", "HR"]);
        assert!(catalog.database("hr").is_some());
        assert!(catalog.database("inventory").is_none());
    }

    #[test]
    fn test_triggers_by_database() {
        let catalog = MemoryCatalog::new()
            .with_database(MemoryDatabase::new("Sales"))
            .with_database(MemoryDatabase::new("hr"))
            .with_trigger(Trigger::new(
                "audit_delete",
                "sales",
                TriggerEvent::Delete,
                TriggerTiming::After,
                PlanNode::unresolved_table("orders"),
            ));

        let sales = catalog.database("sales").unwrap();
        let hr = catalog.database("hr").unwrap();

        let triggers = catalog.triggers(sales.as_ref()).unwrap();
        assert_eq!(triggers.len(), 1);
        assert!(triggers[0].fires_on(TriggerEvent::Delete));
        assert!(catalog.triggers(hr.as_ref()).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_readers() {
        let catalog = Arc::new(MemoryCatalog::new().with_database(MemoryDatabase::new("sales")));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let catalog = Arc::clone(&catalog);
                std::thread::spawn(move || catalog.all_databases().len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }
}
