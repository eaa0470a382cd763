//! Trigger definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use sluice_plan::PlanNode;

/// Statement kind a trigger fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerEvent {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => write!(f, "INSERT"),
            Self::Update => write!(f, "UPDATE"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// When a trigger runs relative to the row change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerTiming {
    Before,
    After,
}

/// A trigger as loaded from a database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Trigger name.
    pub name: String,
    /// Database the trigger is defined in.
    pub database: String,
    /// Event the trigger fires on.
    pub event: TriggerEvent,
    /// Before or after the row change.
    pub timing: TriggerTiming,
    /// Target table, normally a [`PlanNode::UnresolvedTable`].
    pub table: PlanNode,
}

impl Trigger {
    /// Create a trigger.
    pub fn new(
        name: impl Into<String>,
        database: impl Into<String>,
        event: TriggerEvent,
        timing: TriggerTiming,
        table: PlanNode,
    ) -> Self {
        Self {
            name: name.into(),
            database: database.into(),
            event,
            timing,
            table,
        }
    }

    /// Check whether this trigger fires on `event`.
    pub fn fires_on(&self, event: TriggerEvent) -> bool {
        self.event == event
    }
}
