//! Table schema definitions.

mod column;
#[allow(clippy::module_inception)]
mod schema;

pub use column::Column;
pub use schema::Schema;
