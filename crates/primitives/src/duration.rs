//! Staking duration identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier selecting a staking duration policy, e.g. `"3m"`.
///
/// The identifier is opaque to the lifecycle core: it is fixed at minipool
/// creation and carried around so external accounting can resolve it to a
/// concrete commitment period.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StakingDurationId(String);

impl StakingDurationId {
    /// Creates a duration identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        StakingDurationId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StakingDurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StakingDurationId {
    fn from(id: &str) -> Self {
        StakingDurationId::new(id)
    }
}
