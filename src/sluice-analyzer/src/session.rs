//! Per-connection analyzer state.

use common_config::SessionConfig;

/// The state of the client session a statement is analyzed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    current_database: String,
}

impl Session {
    /// Create a session using `database` as its current database.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            current_database: database.into(),
        }
    }

    /// Create a session from configured defaults.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.default_database.clone())
    }

    /// Database used when a statement carries no qualifier.
    pub fn current_database(&self) -> &str {
        &self.current_database
    }

    /// Switch databases, as `USE db` would.
    pub fn set_current_database(&mut self, database: impl Into<String>) {
        self.current_database = database.into();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
