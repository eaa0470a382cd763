//! Relational nodes that can sit between a statement and its tables.

use serde::{Deserialize, Serialize};

use super::PlanNode;
use crate::expr::Expression;

/// Keeps the rows of `child` for which `predicate` holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub predicate: Expression,
    pub child: Box<PlanNode>,
}

/// Computes `expressions` over each row of `child`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub expressions: Vec<Expression>,
    pub child: Box<PlanNode>,
}

/// Cartesian product of two inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossJoin {
    pub left: Box<PlanNode>,
    pub right: Box<PlanNode>,
}

/// A derived table: `(child) AS name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubqueryAlias {
    pub name: String,
    pub child: Box<PlanNode>,
}
