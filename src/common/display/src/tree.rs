//! Tree display for query plans.

use std::fmt;

/// A node that can be rendered as part of an explain tree.
pub trait ExplainNode {
    /// One-line label for this node, e.g. `Truncate(sales.orders)`.
    fn label(&self) -> String;

    /// Child nodes in display order.
    fn explain_children(&self) -> Vec<&dyn ExplainNode>;
}

/// Renders an [`ExplainNode`] tree with box-drawing connectors.
///
/// ```text
/// DeleteFrom
///  └─ ResolvedTable(orders)
/// ```
pub struct DisplayTree<'a> {
    root: &'a dyn ExplainNode,
}

impl<'a> DisplayTree<'a> {
    /// Create a new display tree.
    pub fn new(root: &'a dyn ExplainNode) -> Self {
        Self { root }
    }

    fn fmt_children(
        f: &mut fmt::Formatter<'_>,
        node: &dyn ExplainNode,
        prefix: &str,
    ) -> fmt::Result {
        let children = node.explain_children();
        let last = children.len().saturating_sub(1);

        for (i, child) in children.into_iter().enumerate() {
            let (connector, continuation) = if i == last {
                (" └─ ", "    ")
            } else {
                (" ├─ ", " │  ")
            };
            writeln!(f, "{prefix}{connector}{}", child.label())?;
            Self::fmt_children(f, child, &format!("{prefix}{continuation}"))?;
        }

        Ok(())
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.root.label())?;
        Self::fmt_children(f, self.root, "")
    }
}
