//! SQL column data types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean type.
    Boolean,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit unsigned integer.
    UInt64,
    /// 64-bit floating point.
    Float64,
    /// Variable-length string with a maximum length.
    Varchar(u32),
    /// Unbounded text.
    Text,
    /// Binary data.
    Blob,
    /// Calendar date.
    Date,
    /// Date and time.
    Timestamp,
}

impl DataType {
    /// Check if this type is an integer type (the only kind that may auto-increment).
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Int32 | Self::Int64 | Self::UInt64)
    }

    /// Check if this type is numeric.
    pub const fn is_numeric(&self) -> bool {
        self.is_integer() || matches!(self, Self::Float64)
    }

    /// Check if this type is a string type.
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Varchar(_) | Self::Text)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Int32 => write!(f, "INT"),
            Self::Int64 => write!(f, "BIGINT"),
            Self::UInt64 => write!(f, "BIGINT UNSIGNED"),
            Self::Float64 => write!(f, "DOUBLE"),
            Self::Varchar(len) => write!(f, "VARCHAR({len})"),
            Self::Text => write!(f, "TEXT"),
            Self::Blob => write!(f, "BLOB"),
            Self::Date => write!(f, "DATE"),
            Self::Timestamp => write!(f, "TIMESTAMP"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_classification() {
        assert!(DataType::Int64.is_integer());
        assert!(DataType::Float64.is_numeric());
        assert!(!DataType::Float64.is_integer());
        assert!(DataType::Varchar(20).is_string());
        assert!(!DataType::Blob.is_string());
    }

    #[test]
    fn test_display() {
        assert_eq!(DataType::Varchar(255).to_string(), "VARCHAR(255)");
        assert_eq!(DataType::UInt64.to_string(), "BIGINT UNSIGNED");
    }
}
