//! Logical plan nodes.
//!
//! [`PlanNode`] is a closed set of variants; every pass matches on it
//! exhaustively, so adding a variant forces each dispatch point to decide what
//! to do with it.

mod dml;
mod relational;
mod table;

pub use dml::{DeleteFrom, Truncate};
pub use relational::{CrossJoin, Filter, Project, SubqueryAlias};
pub use table::{ResolvedTable, UnresolvedTable};

use std::fmt;

use common_display::{DisplayTree, ExplainNode, qualified_name};
use serde::{Deserialize, Serialize};
use sluice_core::Schema;

use crate::expr::{ColumnRef, Expression};
use crate::walk::{NodeVisitor, TreeNode, inspect, walk_expressions_with_node};

/// A node in the logical query plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanNode {
    /// A table bound to the catalog.
    ResolvedTable(ResolvedTable),
    /// A table referenced by name only.
    UnresolvedTable(UnresolvedTable),
    /// Row filter.
    Filter(Filter),
    /// Projection.
    Project(Project),
    /// Cartesian product.
    CrossJoin(CrossJoin),
    /// Derived table.
    SubqueryAlias(SubqueryAlias),
    /// `DELETE FROM`.
    DeleteFrom(DeleteFrom),
    /// `TRUNCATE TABLE`.
    Truncate(Truncate),
}

impl PlanNode {
    // ========== Constructors ==========

    /// A table bound to the catalog.
    pub fn resolved_table(name: impl Into<String>, schema: Schema) -> Self {
        Self::ResolvedTable(ResolvedTable::new(name, schema))
    }

    /// An unqualified table reference.
    pub fn unresolved_table(name: impl Into<String>) -> Self {
        Self::UnresolvedTable(UnresolvedTable::new(name))
    }

    /// A table reference qualified with a database.
    pub fn qualified_table(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnresolvedTable(UnresolvedTable::qualified(database, name))
    }

    /// Filter `child` by `predicate`.
    pub fn filter(child: Self, predicate: Expression) -> Self {
        Self::Filter(Filter {
            predicate,
            child: Box::new(child),
        })
    }

    /// Project `expressions` over `child`.
    pub fn project(child: Self, expressions: Vec<Expression>) -> Self {
        Self::Project(Project {
            expressions,
            child: Box::new(child),
        })
    }

    /// Cartesian product of `left` and `right`.
    pub fn cross_join(left: Self, right: Self) -> Self {
        Self::CrossJoin(CrossJoin {
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Name `child` as a derived table.
    pub fn subquery_alias(name: impl Into<String>, child: Self) -> Self {
        Self::SubqueryAlias(SubqueryAlias {
            name: name.into(),
            child: Box::new(child),
        })
    }

    /// Delete the rows produced by `child`.
    pub fn delete_from(child: Self) -> Self {
        Self::DeleteFrom(DeleteFrom::new(child))
    }

    /// Truncate the table `child`, optionally in an explicit database.
    pub fn truncate(database: Option<String>, child: Self) -> Self {
        Self::Truncate(Truncate::new(database, child))
    }

    // ========== Structure ==========

    /// Get the name of this node kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ResolvedTable(_) => "ResolvedTable",
            Self::UnresolvedTable(_) => "UnresolvedTable",
            Self::Filter(_) => "Filter",
            Self::Project(_) => "Project",
            Self::CrossJoin(_) => "CrossJoin",
            Self::SubqueryAlias(_) => "SubqueryAlias",
            Self::DeleteFrom(_) => "DeleteFrom",
            Self::Truncate(_) => "Truncate",
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Self> {
        match self {
            Self::ResolvedTable(_) | Self::UnresolvedTable(_) => vec![],
            Self::Filter(Filter { child, .. })
            | Self::Project(Project { child, .. })
            | Self::SubqueryAlias(SubqueryAlias { child, .. })
            | Self::DeleteFrom(DeleteFrom { child })
            | Self::Truncate(Truncate { child, .. }) => vec![&**child],
            Self::CrossJoin(CrossJoin { left, right }) => vec![&**left, &**right],
        }
    }

    /// Expressions owned by this node itself (not its children).
    pub fn expressions(&self) -> Vec<&Expression> {
        match self {
            Self::Filter(filter) => vec![&filter.predicate],
            Self::Project(project) => project.expressions.iter().collect(),
            Self::ResolvedTable(_)
            | Self::UnresolvedTable(_)
            | Self::CrossJoin(_)
            | Self::SubqueryAlias(_)
            | Self::DeleteFrom(_)
            | Self::Truncate(_) => vec![],
        }
    }

    // ========== Analysis ==========

    /// Check whether any node in this tree satisfies `predicate`.
    pub fn contains<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Self) -> bool,
    {
        let mut found = false;
        inspect(self, |node| {
            if let Some(node) = node {
                found = found || predicate(node);
            }
            !found
        });
        found
    }

    /// Count the nodes in this tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        inspect(self, |node| {
            count += usize::from(node.is_some());
            true
        });
        count
    }

    /// Every column reference in the tree, paired with the node whose
    /// expression contains it.
    pub fn column_refs(&self) -> Vec<(&Self, &ColumnRef)> {
        let mut collector = ColumnCollector::default();
        walk_expressions_with_node(&mut collector, self);
        collector.refs
    }

    /// Generate a tree-formatted explanation of the plan.
    pub fn explain(&self) -> String {
        DisplayTree::new(self).to_string()
    }
}

#[derive(Default)]
struct ColumnCollector<'n> {
    refs: Vec<(&'n PlanNode, &'n ColumnRef)>,
}

impl<'n> NodeVisitor<'n> for ColumnCollector<'n> {
    fn visit(
        &mut self,
        node: Option<&'n PlanNode>,
        expr: Option<&'n Expression>,
    ) -> Option<&mut dyn NodeVisitor<'n>> {
        if let (Some(node), Some(Expression::Column(c))) = (node, expr) {
            self.refs.push((node, c));
        }
        Some(self)
    }
}

impl TreeNode for PlanNode {
    fn children(&self) -> Vec<&Self> {
        PlanNode::children(self)
    }
}

impl ExplainNode for PlanNode {
    fn label(&self) -> String {
        match self {
            Self::ResolvedTable(t) => format!("ResolvedTable({})", t.name),
            Self::UnresolvedTable(t) => format!(
                "UnresolvedTable({})",
                qualified_name(t.database.as_deref(), &t.name)
            ),
            Self::Filter(f) => format!("Filter({})", f.predicate),
            Self::Project(p) => {
                let exprs: Vec<String> = p.expressions.iter().map(ToString::to_string).collect();
                format!("Project({})", exprs.join(", "))
            }
            Self::SubqueryAlias(s) => format!("SubqueryAlias({})", s.name),
            Self::Truncate(t) => match t.database_name() {
                Some(db) => format!("Truncate({db})"),
                None => "Truncate".to_string(),
            },
            Self::CrossJoin(_) | Self::DeleteFrom(_) => self.name().to_string(),
        }
    }

    fn explain_children(&self) -> Vec<&dyn ExplainNode> {
        self.children()
            .into_iter()
            .map(|c| c as &dyn ExplainNode)
            .collect()
    }
}

impl fmt::Display for PlanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
