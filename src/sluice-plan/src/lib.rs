//! Logical plan layer for Sluice.
//!
//! `sluice-plan` provides the plan nodes the analyzer rewrites and the generic
//! depth-first walker that analyzer passes use to search plan and expression
//! trees.
//!
//! # Overview
//!
//! - **Expressions**: [`Expression`] trees used by filters and projections
//! - **Plan nodes**: the closed set of [`PlanNode`] variants, including
//!   `DeleteFrom` and `Truncate`
//! - **Walker**: [`walk`], [`inspect`] and the node-aware [`walk_with_node`]
//! - **Truncatable view**: [`get_truncatable`] resolves the table a TRUNCATE
//!   would empty
//!
//! # Example
//!
//! ```rust
//! use sluice_core::{Column, DataType, Schema};
//! use sluice_plan::{PlanNode, col, inspect, lit};
//!
//! let orders = PlanNode::resolved_table(
//!     "orders",
//!     Schema::with_columns(vec![Column::new("total", DataType::Int64)]),
//! );
//! let plan = PlanNode::delete_from(PlanNode::filter(orders, col("total").gt(lit(100i64))));
//!
//! let mut tables = Vec::new();
//! inspect(&plan, |node| {
//!     if let Some(PlanNode::ResolvedTable(t)) = node {
//!         tables.push(t.name.clone());
//!     }
//!     true
//! });
//! assert_eq!(tables, vec!["orders".to_string()]);
//! ```

pub mod expr;
pub mod node;
mod truncatable;
pub mod walk;

pub use expr::{BinaryOp, ColumnRef, Expression, UnaryOp, col, lit, qualified_col};
pub use node::{
    CrossJoin, DeleteFrom, Filter, PlanNode, Project, ResolvedTable, SubqueryAlias, Truncate,
    UnresolvedTable,
};
pub use truncatable::{Truncatable, get_truncatable};
pub use walk::{
    Inspector, NodeVisitor, TreeNode, Visitor, inspect, walk, walk_expressions_with_node,
    walk_with_node,
};
