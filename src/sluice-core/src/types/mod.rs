//! Type system for column definitions and literal values.

mod data_type;
mod value;

pub use data_type::DataType;
pub use value::Value;
