//! The front door of the minipool lifecycle core.
//!
//! [`PoolManager`] owns the minipool arena, the node contract directory and
//! the policy stores, and mediates every externally triggered operation:
//! operator registration, minipool creation, lifecycle triggers, the node
//! withdrawal gateway and the owner's admin switches. It executes the duties
//! the state machines emit against the external token ledgers so that each
//! operation commits atomically or not at all.

pub mod constants;
pub mod errors;
pub mod manager;
pub mod node_contract;

#[cfg(test)]
mod tests;

pub use errors::ManagerErr;
pub use manager::{PoolManager, WithdrawalReceipt};
pub use node_contract::NodeContract;
