//! Core data model for Sluice.
//!
//! This crate provides the fundamental types shared by the plan, catalog and
//! analyzer crates:
//! - `Value` and `DataType` for the type system
//! - `Column` and `Schema` for table shapes
//! - case-insensitive identifier helpers in [`ident`]

pub mod ident;
pub mod schema;
pub mod types;

// Re-export commonly used types
pub use ident::{eq_ignore_case, normalize};
pub use schema::{Column, Schema};
pub use types::{DataType, Value};
