//! Analyzer rule trait and the results the analyzer reports.

use common_error::SluiceResult;
use sluice_plan::PlanNode;

use crate::Session;

/// A single analyzer rule that can rewrite or reject a plan.
///
/// Rules must terminate: applying a rule to its own output eventually reports
/// no change.
pub trait AnalyzerRule: Send + Sync {
    /// Get the name of this rule.
    fn name(&self) -> &'static str;

    /// Get a description of what this rule does.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Apply this rule to the plan.
    ///
    /// Returns the plan unchanged when the rule does not apply. An error
    /// rejects the statement.
    fn apply(&self, session: &Session, plan: PlanNode) -> SluiceResult<Transformed>;
}

/// The result of applying an analyzer rule.
#[derive(Debug, Clone)]
pub struct Transformed {
    /// The (potentially transformed) plan.
    pub plan: PlanNode,
    /// Whether the plan was actually changed.
    pub changed: bool,
}

impl Transformed {
    /// The plan was changed.
    pub fn yes(plan: PlanNode) -> Self {
        Self {
            plan,
            changed: true,
        }
    }

    /// The plan was left alone.
    pub fn no(plan: PlanNode) -> Self {
        Self {
            plan,
            changed: false,
        }
    }
}

impl From<PlanNode> for Transformed {
    fn from(plan: PlanNode) -> Self {
        Self::no(plan)
    }
}

/// A trace entry for a single rule application.
#[derive(Debug, Clone)]
pub struct RuleTrace {
    /// The name of the rule that was applied.
    pub rule_name: String,
    /// The plan before the rule was applied (as explain string).
    pub before: String,
    /// The plan after the rule was applied (as explain string).
    pub after: String,
}

impl RuleTrace {
    /// Create a new trace entry.
    pub fn new(
        rule_name: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// The analyzed plan with optional trace information.
#[derive(Debug, Clone)]
pub struct AnalyzedPlan {
    /// The final plan.
    pub plan: PlanNode,
    /// Number of passes over the rule list.
    pub iterations: usize,
    /// Number of rule applications that changed the plan.
    pub rules_applied: usize,
    /// Rules that changed the plan, in order (empty unless tracing).
    pub trace: Vec<RuleTrace>,
}

impl AnalyzedPlan {
    /// Format the trace as a human-readable string.
    pub fn format_trace(&self) -> String {
        let mut output = format!(
            "Analysis completed in {} iterations, {} rules applied\n",
            self.iterations, self.rules_applied
        );

        if self.trace.is_empty() {
            output.push_str("  (no trace available)\n");
            return output;
        }

        for (i, entry) in self.trace.iter().enumerate() {
            output.push_str(&format!("\n--- Rule {} applied: {} ---\n", i + 1, entry.rule_name));
            output.push_str("Before:\n");
            output.push_str(&entry.before);
            output.push_str("After:\n");
            output.push_str(&entry.after);
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformed() {
        let plan = PlanNode::unresolved_table("orders");

        let unchanged = Transformed::from(plan.clone());
        assert!(!unchanged.changed);

        let changed = Transformed::yes(plan);
        assert!(changed.changed);
    }

    #[test]
    fn test_format_trace() {
        let analyzed = AnalyzedPlan {
            plan: PlanNode::unresolved_table("orders"),
            iterations: 2,
            rules_applied: 1,
            trace: vec![RuleTrace::new("ProcessTruncate", "DeleteFrom\n", "Truncate\n")],
        };

        let text = analyzed.format_trace();
        assert!(text.starts_with("Analysis completed in 2 iterations, 1 rules applied"));
        assert!(text.contains("--- Rule 1 applied: ProcessTruncate ---"));
        assert!(text.ends_with("After:\nTruncate\n"));
    }
}
