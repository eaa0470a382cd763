//! Catalog metadata for Sluice.
//!
//! The analyzer never owns storage; it reads databases, tables, foreign keys
//! and triggers through the traits defined here. [`memory`] provides an
//! in-process implementation used by tests and embedders without a storage
//! engine.

mod catalog;
mod foreign_key;
pub mod memory;
mod trigger;

pub use catalog::{Catalog, Database, ForeignKeyTable, Table, TriggerSource};
pub use foreign_key::ForeignKey;
pub use memory::{MemoryCatalog, MemoryDatabase, MemoryTable};
pub use trigger::{Trigger, TriggerEvent, TriggerTiming};
