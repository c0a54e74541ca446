//! Dynamic state of a minipool.

use minipool_primitives::{MinipoolStatus, UnixTimestamp, Wei};
use serde::{Deserialize, Serialize};

/// Holds the state machine values that change over the lifetime of the
/// minipool.
///
/// The pool's RPL balance is not tracked here: it lives in the external RPL
/// ledger keyed by the pool's address, and the withdrawal executor drains it
/// alongside the ether balance below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinipoolState {
    /// Current lifecycle status.
    pub status: MinipoolStatus,

    /// Ether held by the pool on behalf of its node operator. Released in
    /// full, never partially.
    pub ether_balance: Wei,

    /// When the status last changed. Timeout deadlines are measured from
    /// here.
    pub status_changed_at: UnixTimestamp,
}

impl MinipoolState {
    /// Initial state for a freshly created pool seeded with the node
    /// operator's deposit.
    pub const fn new(node_deposit: Wei, created_at: UnixTimestamp) -> Self {
        MinipoolState {
            status: MinipoolStatus::Initialized,
            ether_balance: node_deposit,
            status_changed_at: created_at,
        }
    }
}
