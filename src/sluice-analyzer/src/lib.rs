//! Plan analyzer for Sluice.
//!
//! The analyzer runs [`AnalyzerRule`]s over a statement plan before execution.
//! The standard rule set is [`ProcessTruncate`], which validates `TRUNCATE`
//! statements and turns unconditional `DELETE` statements into `TRUNCATE`
//! when no trigger, foreign key or auto-increment counter can tell them
//! apart.

mod rules;
mod session;

pub use rules::{
    AnalyzedPlan, Analyzer, AnalyzerRule, ProcessTruncate, RuleTrace, Transformed, TruncateCheck,
};
pub use session::Session;

use std::sync::Arc;

use common_config::AnalyzerConfig;
use common_error::SluiceResult;
use sluice_catalog::{Catalog, TriggerSource};
use sluice_plan::PlanNode;

/// Analyze a plan using the default rules and configuration.
pub fn analyze(
    catalog: Arc<dyn Catalog>,
    triggers: Arc<dyn TriggerSource>,
    session: &Session,
    plan: PlanNode,
) -> SluiceResult<PlanNode> {
    let analyzer = Analyzer::with_default_rules(catalog, triggers, AnalyzerConfig::default());
    Ok(analyzer.analyze(session, plan)?.plan)
}
