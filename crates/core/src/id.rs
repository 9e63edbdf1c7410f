//! Strongly-typed identifiers used across the billing domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::BillingError;

/// Identifier of a play (the key of the play lookup table, e.g. `"hamlet"`).
///
/// Deserialization goes through [`PlayId::new`], so blank ids are rejected at
/// the input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayId(String);

impl PlayId {
    /// Create an identifier, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, BillingError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(BillingError::validation("PlayId: must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PlayId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unchecked conversion, for literals and tests.
impl From<&str> for PlayId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<PlayId> for String {
    fn from(value: PlayId) -> Self {
        value.0
    }
}

impl TryFrom<String> for PlayId {
    type Error = BillingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for PlayId {
    type Err = BillingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
