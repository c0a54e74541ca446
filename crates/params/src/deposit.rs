//! Policy parameters for staker deposits routed into minipools.

use minipool_primitives::Wei;
use serde::{Deserialize, Serialize};

use super::default::{DEPOSIT_CHUNK_SIZE, DEPOSIT_MAX};

/// Owner-controlled parameters for the deposit pool boundary.
///
/// Deposit pooling itself is an external collaborator; the lifecycle core
/// only validates the chunking of deposits it is asked to assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositParams {
    /// Whether staker deposits are currently accepted.
    pub deposit_allowed: bool,

    /// Size of a single deposit chunk assigned to a minipool.
    #[serde(with = "crate::wei_toml")]
    pub chunk_size: Wei,

    /// Maximum size of a single staker deposit.
    #[serde(with = "crate::wei_toml")]
    pub max_deposit: Wei,
}

impl Default for DepositParams {
    fn default() -> Self {
        Self {
            deposit_allowed: true,
            chunk_size: DEPOSIT_CHUNK_SIZE,
            max_deposit: DEPOSIT_MAX,
        }
    }
}
