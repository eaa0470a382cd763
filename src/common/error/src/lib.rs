//! Error types and result aliases for Sluice.
//!
//! Every crate in the workspace reports failures through [`SluiceError`], so
//! callers can tell metadata-access failures apart from semantic violations
//! without downcasting.

mod error;

pub use error::{SluiceError, SluiceResult};
