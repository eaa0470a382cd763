//! Analyzer rules for Sluice plans.
//!
//! A rule receives the whole statement plan and either returns it unchanged,
//! returns a rewritten plan, or rejects the statement with an error.

mod analyzer;
mod process_truncate;
mod rule;

pub use analyzer::Analyzer;
pub use process_truncate::{ProcessTruncate, TruncateCheck};
pub use rule::{AnalyzedPlan, AnalyzerRule, RuleTrace, Transformed};
