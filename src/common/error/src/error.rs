//! Core error types for Sluice.

use thiserror::Error;

/// Result type alias using `SluiceError`.
pub type SluiceResult<T> = std::result::Result<T, SluiceError>;

/// Core error type for Sluice operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SluiceError {
    /// A table listed by the catalog could not be fetched.
    #[error("table not found: {0}")]
    TableNotFound(String),

    /// TRUNCATE on a table that another table references through a foreign key.
    #[error(
        "cannot truncate table {table} as it is referenced in foreign key {constraint} on table {referencing_table}"
    )]
    TruncateReferencedFromForeignKey {
        /// The table being truncated.
        table: String,
        /// Name of the offending foreign key.
        constraint: String,
        /// Table that owns the foreign key.
        referencing_table: String,
    },

    /// The plan node does not support TRUNCATE at all.
    #[error("{0} cannot be truncated")]
    NotTruncatable(String),

    /// Catalog, storage or trigger metadata could not be read.
    #[error("CatalogError: {0}")]
    CatalogError(String),

    /// The auth layer rejected an operation.
    #[error("user {user} does not have {permission} permission")]
    PermissionDenied {
        /// User name.
        user: String,
        /// The permission that was checked.
        permission: String,
    },

    /// Invalid parameter provided.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Internal error (bug in Sluice).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl SluiceError {
    /// Create a new `CatalogError`.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        Self::CatalogError(msg.into())
    }

    /// Create a new `TableNotFound` error.
    pub fn table_not_found<S: Into<String>>(name: S) -> Self {
        Self::TableNotFound(name.into())
    }

    /// Create a new `NotTruncatable` error.
    pub fn not_truncatable<S: Into<String>>(kind: S) -> Self {
        Self::NotTruncatable(kind.into())
    }

    /// Create a new `TruncateReferencedFromForeignKey` error.
    pub fn truncate_referenced(
        table: impl Into<String>,
        constraint: impl Into<String>,
        referencing_table: impl Into<String>,
    ) -> Self {
        Self::TruncateReferencedFromForeignKey {
            table: table.into(),
            constraint: constraint.into(),
            referencing_table: referencing_table.into(),
        }
    }

    /// Create a new `PermissionDenied` error.
    pub fn permission_denied(user: impl Into<String>, permission: impl Into<String>) -> Self {
        Self::PermissionDenied {
            user: user.into(),
            permission: permission.into(),
        }
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }

    /// Whether this error means catalog metadata could not be trusted.
    pub fn is_metadata_error(&self) -> bool {
        matches!(self, Self::CatalogError(_) | Self::TableNotFound(_))
    }
}
