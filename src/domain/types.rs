//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (non-empty identifiers, known sync
//! states) so that once a value reaches the domain layer it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided sync status is not one of the known lifecycle states.
    #[error("unknown sync status: {0}")]
    UnknownSyncStatus(String),
}

/// Opaque identifier of an indexed product, assigned by the sync process.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Creates an identifier, rejecting blank input.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(value))
        }
    }

    /// Wraps an identifier read back from storage exactly as stored.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// Borrow the identifier as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

/// Lifecycle state of a record mirrored from the external catalog.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    /// Visible in the public catalog.
    #[default]
    Active,
    /// Hidden, usually removed upstream.
    Inactive,
    /// Waiting for the next sync pass.
    Pending,
}

impl SyncStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Active => "active",
            SyncStatus::Inactive => "inactive",
            SyncStatus::Pending => "pending",
        }
    }
}

impl Display for SyncStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(SyncStatus::Active),
            "inactive" => Ok(SyncStatus::Inactive),
            "pending" => Ok(SyncStatus::Pending),
            other => Err(TypeConstraintError::UnknownSyncStatus(other.to_string())),
        }
    }
}

impl TryFrom<&str> for SyncStatus {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
