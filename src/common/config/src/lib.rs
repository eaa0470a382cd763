//! Configuration management for Sluice.
//!
//! Provides the analyzer's runtime switches and the session defaults used when
//! a statement omits its database qualifier.

use common_error::SluiceResult;
use serde::{Deserialize, Serialize};

/// Global Sluice configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SluiceConfig {
    /// Analyzer configuration.
    pub analyzer: AnalyzerConfig,
    /// Session defaults.
    pub session: SessionConfig,
}

impl SluiceConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> SluiceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> SluiceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Analyzer pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of fixpoint iterations before the analyzer stops.
    pub max_iterations: usize,
    /// Record before/after explain strings for every rule that fires.
    pub enable_trace: bool,
    /// Allow unconditional DELETE statements to be rewritten into TRUNCATE.
    ///
    /// Explicit TRUNCATE statements are validated either way.
    pub rewrite_delete_to_truncate: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            enable_trace: false,
            rewrite_delete_to_truncate: true,
        }
    }
}

impl AnalyzerConfig {
    /// Set the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    /// Enable or disable tracing.
    #[must_use]
    pub fn with_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }

    /// Enable or disable the DELETE to TRUNCATE rewrite.
    #[must_use]
    pub fn with_delete_to_truncate(mut self, enable: bool) -> Self {
        self.rewrite_delete_to_truncate = enable;
        self
    }
}

/// Per-session defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Database used when a statement carries no qualifier.
    pub default_database: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_database: "mydb".to_string(),
        }
    }
}
