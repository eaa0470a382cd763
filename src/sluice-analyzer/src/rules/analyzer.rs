//! The analyzer that drives rules over a plan.
//!
//! Rules run in order, repeatedly, until a pass changes nothing or the
//! configured iteration limit is hit.

use std::sync::Arc;

use common_config::AnalyzerConfig;
use common_error::SluiceResult;
use log::debug;
use sluice_catalog::{Catalog, TriggerSource};
use sluice_plan::PlanNode;

use super::rule::{AnalyzedPlan, AnalyzerRule, RuleTrace};
use super::ProcessTruncate;
use crate::Session;

/// Applies a list of [`AnalyzerRule`]s to plans.
pub struct Analyzer {
    /// The rules to apply (in order).
    rules: Vec<Box<dyn AnalyzerRule>>,
    /// Configuration.
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create a new analyzer with the given rules.
    pub fn new(rules: Vec<Box<dyn AnalyzerRule>>) -> Self {
        Self {
            rules,
            config: AnalyzerConfig::default(),
        }
    }

    /// Create a new analyzer with custom config.
    pub fn with_config(rules: Vec<Box<dyn AnalyzerRule>>, config: AnalyzerConfig) -> Self {
        Self { rules, config }
    }

    /// Create an analyzer running the standard rules against a catalog.
    pub fn with_default_rules(
        catalog: Arc<dyn Catalog>,
        triggers: Arc<dyn TriggerSource>,
        config: AnalyzerConfig,
    ) -> Self {
        let truncate = ProcessTruncate::new(catalog, triggers)
            .with_delete_rewrite(config.rewrite_delete_to_truncate);
        Self::with_config(vec![Box::new(truncate)], config)
    }

    /// Add a rule to the analyzer.
    pub fn add_rule<R: AnalyzerRule + 'static>(&mut self, rule: R) {
        self.rules.push(Box::new(rule));
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a plan, iterating until no rule changes it.
    pub fn analyze(&self, session: &Session, plan: PlanNode) -> SluiceResult<AnalyzedPlan> {
        let mut current_plan = plan;
        let mut iterations = 0;
        let mut total_rules_applied = 0;
        let mut trace = Vec::new();

        loop {
            if iterations >= self.config.max_iterations {
                debug!(
                    "Analyzer reached max iterations ({}), stopping",
                    self.config.max_iterations
                );
                break;
            }

            iterations += 1;
            let (next, applied) = self.run_rules(session, current_plan, &mut trace)?;
            current_plan = next;
            total_rules_applied += applied;

            if applied == 0 {
                debug!("No changes in iteration {iterations}, reached fixpoint");
                break;
            }
        }

        Ok(AnalyzedPlan {
            plan: current_plan,
            iterations,
            rules_applied: total_rules_applied,
            trace,
        })
    }

    /// Analyze with a single pass over the rules.
    pub fn analyze_once(&self, session: &Session, plan: PlanNode) -> SluiceResult<AnalyzedPlan> {
        let mut trace = Vec::new();
        let (plan, rules_applied) = self.run_rules(session, plan, &mut trace)?;

        Ok(AnalyzedPlan {
            plan,
            iterations: 1,
            rules_applied,
            trace,
        })
    }

    fn run_rules(
        &self,
        session: &Session,
        plan: PlanNode,
        trace: &mut Vec<RuleTrace>,
    ) -> SluiceResult<(PlanNode, usize)> {
        let mut current_plan = plan;
        let mut applied = 0;

        for rule in &self.rules {
            let before = self.config.enable_trace.then(|| current_plan.explain());

            let result = rule.apply(session, current_plan)?;

            if result.changed {
                applied += 1;
                debug!("Rule '{}' changed the plan", rule.name());

                if let Some(before) = before {
                    trace.push(RuleTrace::new(rule.name(), before, result.plan.explain()));
                }
            }

            current_plan = result.plan;
        }

        Ok((current_plan, applied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::rule::Transformed;
    use sluice_core::Schema;

    /// Wraps any table in a delete, once.
    struct WrapInDelete;

    impl AnalyzerRule for WrapInDelete {
        fn name(&self) -> &'static str {
            "WrapInDelete"
        }

        fn apply(&self, _session: &Session, plan: PlanNode) -> SluiceResult<Transformed> {
            if matches!(plan, PlanNode::DeleteFrom(_)) {
                return Ok(Transformed::no(plan));
            }
            Ok(Transformed::yes(PlanNode::delete_from(plan)))
        }
    }

    /// Never terminates on its own.
    struct AlwaysChanges;

    impl AnalyzerRule for AlwaysChanges {
        fn name(&self) -> &'static str {
            "AlwaysChanges"
        }

        fn apply(&self, _session: &Session, plan: PlanNode) -> SluiceResult<Transformed> {
            Ok(Transformed::yes(plan))
        }
    }

    fn orders() -> PlanNode {
        PlanNode::resolved_table("orders", Schema::new())
    }

    #[test]
    fn test_analyzer_fixpoint() {
        let analyzer = Analyzer::new(vec![Box::new(WrapInDelete)]);
        let result = analyzer.analyze(&Session::default(), orders()).unwrap();

        assert_eq!(result.iterations, 2);
        assert_eq!(result.rules_applied, 1);
        assert_eq!(result.plan, PlanNode::delete_from(orders()));
        assert!(result.trace.is_empty());
    }

    #[test]
    fn test_analyzer_max_iterations() {
        let config = AnalyzerConfig::default().with_max_iterations(3);
        let analyzer = Analyzer::with_config(vec![Box::new(AlwaysChanges)], config);
        let result = analyzer.analyze(&Session::default(), orders()).unwrap();

        assert_eq!(result.iterations, 3);
        assert_eq!(result.rules_applied, 3);
    }

    #[test]
    fn test_analyzer_with_trace() {
        let config = AnalyzerConfig::default().with_trace(true);
        let mut analyzer = Analyzer::with_config(vec![], config);
        analyzer.add_rule(WrapInDelete);

        let result = analyzer.analyze_once(&Session::default(), orders()).unwrap();

        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace[0].rule_name, "WrapInDelete");
        assert_eq!(result.trace[0].before, "ResolvedTable(orders)\n");
        assert_eq!(
            result.trace[0].after,
            "DeleteFrom\n └─ ResolvedTable(orders)\n"
        );
    }
}
