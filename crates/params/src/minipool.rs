//! Policy parameters governing minipool lifecycle transitions.

use minipool_primitives::Wei;
use serde::{Deserialize, Serialize};

use super::default::{MINIPOOL_TIMEOUT_SECS, NODE_DEPOSIT};

/// Owner-controlled parameters consulted by the minipool state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinipoolParams {
    /// Whether a withdrawal that empties a minipool also destroys it.
    ///
    /// While disabled, emptied minipools are kept as addressable shells until
    /// an admin finalization destroys them (e.g. for audit or migration).
    pub closing_enabled: bool,

    /// Ether deposited by the node operator per minipool, released in full on
    /// withdrawal.
    #[serde(with = "crate::wei_toml")]
    pub node_deposit: Wei,

    /// Seconds after which a pool that has not begun staking can be timed
    /// out, measured from its last status change.
    pub timeout_period_secs: u64,
}

impl Default for MinipoolParams {
    fn default() -> Self {
        Self {
            closing_enabled: true,
            node_deposit: NODE_DEPOSIT,
            timeout_period_secs: MINIPOOL_TIMEOUT_SECS,
        }
    }
}
