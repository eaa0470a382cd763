//! In-memory catalog.
//!
//! Every collection sits behind a `std::sync::RwLock`, so a catalog shared
//! through an `Arc` can be read from many threads while tables and triggers
//! are registered.

mod catalog;
mod database;
mod table;

pub use catalog::MemoryCatalog;
pub use database::MemoryDatabase;
pub use table::MemoryTable;
