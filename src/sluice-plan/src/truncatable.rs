//! The view of a plan node that TRUNCATE can empty.

use common_error::{SluiceError, SluiceResult};

use crate::node::{PlanNode, ResolvedTable};

/// A plan node backed by a single table that can be truncated.
pub trait Truncatable {
    /// Name of the table that would be emptied.
    fn table_name(&self) -> &str;
}

impl Truncatable for ResolvedTable {
    fn table_name(&self) -> &str {
        &self.name
    }
}

/// Resolve the truncatable view of `node`.
///
/// Only resolved tables can be truncated; any other node yields
/// [`SluiceError::NotTruncatable`] naming the node kind.
pub fn get_truncatable(node: &PlanNode) -> SluiceResult<&dyn Truncatable> {
    match node {
        PlanNode::ResolvedTable(table) => Ok(table),
        other => Err(SluiceError::not_truncatable(other.name())),
    }
}
