//! Depth-first traversal of plan and expression trees.
//!
//! A [`Visitor`] is called on every node in pre-order. Returning a
//! continuation visitor descends into the node's children with that
//! continuation and finishes with a `visit(None)` call once the subtree is
//! done; returning `None` skips the children. Siblings are always visited by
//! the visitor that was active for their parent, so pruning one subtree never
//! hides another.
//!
//! ```rust
//! use sluice_plan::{col, inspect, lit};
//!
//! let expr = col("a").gt(lit(1i64)).and(col("b").is_null());
//!
//! let mut seen = 0;
//! inspect(&expr, |e| {
//!     if e.is_some() {
//!         seen += 1;
//!     }
//!     true
//! });
//! assert_eq!(seen, 6);
//! ```

use crate::expr::Expression;
use crate::node::PlanNode;

/// A tree whose nodes expose their children in order.
pub trait TreeNode {
    /// Direct children of this node.
    fn children(&self) -> Vec<&Self>;
}

/// Visits nodes of a tree during [`walk`].
pub trait Visitor<'n, N: ?Sized + 'n> {
    /// Called with `Some(node)` on entry and with `None` when the subtree of
    /// the node this visitor was returned for is finished.
    ///
    /// Returning `Some(visitor)` walks the children with `visitor`; returning
    /// `None` skips them.
    fn visit(&mut self, node: Option<&'n N>) -> Option<&mut dyn Visitor<'n, N>>;
}

/// Traverse `node` in depth-first order.
///
/// Calls `visitor.visit(Some(node))`; if that yields a continuation, every
/// child is walked with it, followed by one `visit(None)` on the continuation.
pub fn walk<'n, N: TreeNode>(visitor: &mut dyn Visitor<'n, N>, node: &'n N) {
    let Some(visitor) = visitor.visit(Some(node)) else {
        return;
    };

    for child in node.children() {
        walk(&mut *visitor, child);
    }

    visitor.visit(None);
}

/// Adapts a predicate into a [`Visitor`].
///
/// `true` keeps descending with the same inspector, `false` prunes the
/// subtree. The predicate also receives the `None` exit notifications; its
/// result is ignored there.
pub struct Inspector<F> {
    predicate: F,
}

impl<F> Inspector<F> {
    /// Wrap a predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }

    /// Unwrap the predicate, e.g. to recover state it owns.
    pub fn into_inner(self) -> F {
        self.predicate
    }
}

impl<'n, N, F> Visitor<'n, N> for Inspector<F>
where
    N: ?Sized + 'n,
    F: FnMut(Option<&'n N>) -> bool,
{
    fn visit(&mut self, node: Option<&'n N>) -> Option<&mut dyn Visitor<'n, N>> {
        if (self.predicate)(node) {
            Some(self as &mut dyn Visitor<'n, N>)
        } else {
            None
        }
    }
}

/// Traverse `node` in depth-first order, calling `predicate` on every node.
///
/// If `predicate` returns `true` the children are inspected too, followed by a
/// call with `None`.
pub fn inspect<'n, N, F>(node: &'n N, predicate: F)
where
    N: TreeNode,
    F: FnMut(Option<&'n N>) -> bool,
{
    walk(&mut Inspector::new(predicate), node);
}

/// Visits expressions together with the plan node that owns them.
pub trait NodeVisitor<'n> {
    /// Called with the owning node and the expression on entry, and with
    /// `(None, None)` when the expression's subtree is finished.
    fn visit(
        &mut self,
        node: Option<&'n PlanNode>,
        expr: Option<&'n Expression>,
    ) -> Option<&mut dyn NodeVisitor<'n>>;
}

/// Traverse `expr` in depth-first order, passing `node` along with every
/// sub-expression.
pub fn walk_with_node<'n>(
    visitor: &mut dyn NodeVisitor<'n>,
    node: &'n PlanNode,
    expr: &'n Expression,
) {
    let Some(visitor) = visitor.visit(Some(node), Some(expr)) else {
        return;
    };

    for child in expr.children() {
        walk_with_node(&mut *visitor, node, child);
    }

    visitor.visit(None, None);
}

/// Walk every expression of every node in `plan` with [`walk_with_node`].
///
/// Plan nodes are taken in pre-order and each node's expressions in
/// declaration order.
pub fn walk_expressions_with_node<'n>(visitor: &mut dyn NodeVisitor<'n>, plan: &'n PlanNode) {
    inspect(plan, |node| {
        if let Some(node) = node {
            for expr in node.expressions() {
                walk_with_node(&mut *visitor, node, expr);
            }
        }
        true
    });
}
