//! Authorization boundary for Sluice.
//!
//! Only the capability check is modelled here; the network handshake lives
//! with the server that embeds the analyzer.

use std::fmt;

use common_error::SluiceResult;
use serde::{Deserialize, Serialize};

/// Permission requested by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Read-only access.
    Read,
    /// Data or schema modification, including DELETE and TRUNCATE.
    Write,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "read"),
            Self::Write => write!(f, "write"),
        }
    }
}

/// An authorization policy.
pub trait Auth: Send + Sync {
    /// Check whether `user` holds `permission`.
    ///
    /// Returns `SluiceError::PermissionDenied` when the check fails.
    fn allowed(&self, user: &str, permission: Permission) -> SluiceResult<()>;
}

/// Auth method that always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneAuth;

impl Auth for NoneAuth {
    fn allowed(&self, _user: &str, _permission: Permission) -> SluiceResult<()> {
        Ok(())
    }
}
