//! Catalog access traits.

use std::sync::Arc;

use common_error::SluiceResult;
use sluice_core::Schema;
use sluice_plan::PlanNode;

use crate::{ForeignKey, Trigger};

/// Entry point to every database the engine knows about.
pub trait Catalog: Send + Sync {
    /// All databases, in a stable order.
    fn all_databases(&self) -> Vec<Arc<dyn Database>>;
}

/// A named collection of tables.
pub trait Database: Send + Sync {
    /// Database name as created.
    fn name(&self) -> &str;

    /// Names of every table in this database.
    fn table_names(&self) -> SluiceResult<Vec<String>>;

    /// Fetch a table by case-insensitive name.
    fn get_table_insensitive(&self, name: &str) -> SluiceResult<Option<Arc<dyn Table>>>;
}

/// A table known to the catalog.
pub trait Table: Send + Sync {
    /// Table name as created.
    fn name(&self) -> &str;

    /// Column schema.
    fn schema(&self) -> &Schema;

    /// The foreign key capability, for tables whose storage tracks foreign keys.
    fn as_foreign_key_table(&self) -> Option<&dyn ForeignKeyTable> {
        None
    }

    /// Bind this table into a plan.
    fn resolve(&self) -> PlanNode {
        PlanNode::resolved_table(self.name(), self.schema().clone())
    }
}

/// A table that can report the foreign keys it declares.
pub trait ForeignKeyTable {
    /// Foreign keys owned by this table.
    fn foreign_keys(&self) -> SluiceResult<Vec<ForeignKey>>;
}

/// Source of trigger definitions.
pub trait TriggerSource: Send + Sync {
    /// Triggers defined in `database`.
    fn triggers(&self, database: &dyn Database) -> SluiceResult<Vec<Trigger>>;
}
