//! Per-operator node contracts.

use minipool_primitives::{types::ADDRESS_LEN, Address};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::errors::ManagerErr;

/// Derives a stable entity address from a tag, a seed address and a nonce.
///
/// Used for node contracts and minipools so that arena and ledger keys are
/// deterministic and collision-free.
pub(crate) fn derive_address(tag: &[u8], seed: &Address, nonce: u64) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(tag);
    hasher.update(seed.as_bytes());
    hasher.update(nonce.to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; ADDRESS_LEN];
    bytes.copy_from_slice(&digest[..ADDRESS_LEN]);

    Address::new(bytes)
}

/// The contract bound to a node operator at registration.
///
/// Exactly one node contract exists per registered operator; the binding is
/// immutable and the contract is never destroyed. It is the gateway through
/// which the operator reaches its minipools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeContract {
    address: Address,
    operator: Address,
    timezone: String,
}

impl NodeContract {
    /// Binds a fresh contract to `operator`.
    pub(crate) fn new(operator: Address, timezone: String) -> Self {
        NodeContract {
            address: derive_address(b"node-contract", &operator, 0),
            operator,
            timezone,
        }
    }

    /// The contract's own address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The operator this contract is bound to.
    pub const fn operator(&self) -> Address {
        self.operator
    }

    /// Timezone metadata supplied at registration.
    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    /// Checks that `caller` is the bound operator.
    pub(crate) fn authorize(&self, caller: Address, action: &'static str) -> Result<(), ManagerErr> {
        if caller != self.operator {
            warn!(%caller, operator = %self.operator, action, "rejecting caller at node contract");

            return Err(ManagerErr::Unauthorized { caller, action });
        }

        Ok(())
    }
}
