//! Data modification nodes.

use serde::{Deserialize, Serialize};

use super::PlanNode;

/// `DELETE FROM` over the rows produced by `child`.
///
/// An unconditional delete has a [`PlanNode::ResolvedTable`] child; a
/// `WHERE` clause shows up as a filter between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteFrom {
    /// Source of the rows to delete.
    pub child: Box<PlanNode>,
}

impl DeleteFrom {
    /// Create a delete over `child`.
    pub fn new(child: PlanNode) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    /// The node rows are deleted from.
    pub fn child(&self) -> &PlanNode {
        &self.child
    }
}

/// `TRUNCATE TABLE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truncate {
    /// Database the table lives in; `None` means the session's current database.
    pub database: Option<String>,
    /// The table to empty.
    pub child: Box<PlanNode>,
}

impl Truncate {
    /// Create a truncate of `child`.
    pub fn new(database: Option<String>, child: PlanNode) -> Self {
        Self {
            database,
            child: Box::new(child),
        }
    }

    /// Explicit database name, if the statement carried one.
    pub fn database_name(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// The table to empty.
    pub fn child(&self) -> &PlanNode {
        &self.child
    }
}
