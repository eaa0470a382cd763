//! Display utilities for Sluice plans.
//!
//! Renders plan trees for explain output and analyzer traces.

mod tree;

pub use tree::{DisplayTree, ExplainNode};

/// Quote an identifier for explain output, qualifying it when a database is known.
pub fn qualified_name(database: Option<&str>, name: &str) -> String {
    match database {
        Some(db) if !db.is_empty() => format!("{db}.{name}"),
        _ => name.to_string(),
    }
}
