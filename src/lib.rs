//! Sluice - DELETE to TRUNCATE analysis for a SQL engine
//!
//! Sluice rewrites unconditional `DELETE` statements into `TRUNCATE` when no
//! trigger, foreign key or auto-increment counter could observe the
//! difference, and validates explicit `TRUNCATE` statements against the same
//! catalog metadata. The plan walker it is built on is exported for other
//! analyzer passes.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export core crates
pub use common_auth as auth;
pub use common_config as config;
pub use common_error as error;
pub use sluice_analyzer as analyzer;
pub use sluice_catalog as catalog;
pub use sluice_core as core;
pub use sluice_plan as plan;

/// Sluice version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
