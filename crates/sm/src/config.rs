//! Static configuration of a minipool, fixed at creation.

use minipool_primitives::{Address, StakingDurationId, UnixTimestamp};
use serde::{Deserialize, Serialize};

/// Holds the state machine values that remain static for the lifetime of the
/// minipool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinipoolCfg {
    /// The address of the minipool itself. Keys the pool in the arena and in
    /// external token ledgers.
    pub address: Address,

    /// The node operator that owns this minipool. The binding never changes.
    pub operator: Address,

    /// Identifier of the staking duration policy selected at creation.
    pub staking_duration: StakingDurationId,

    /// When the minipool was created.
    pub created_at: UnixTimestamp,
}
