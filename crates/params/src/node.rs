//! Policy parameters scoped to node operators.

use serde::{Deserialize, Serialize};

/// Owner-controlled switches for node-scoped operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeParams {
    /// Whether new node operators may register.
    pub registration_allowed: bool,

    /// Whether node operators may withdraw their minipool deposits.
    ///
    /// Read by the withdrawal gateway before any state or ownership check; a
    /// disabled flag rejects the operation outright.
    pub withdrawal_allowed: bool,
}

impl Default for NodeParams {
    fn default() -> Self {
        Self {
            registration_allowed: true,
            withdrawal_allowed: true,
        }
    }
}
