//! Errors surfaced by the pool manager front door.

use minipool_primitives::{Address, BudgetExhausted, Wei};
use minipool_registry::RegistryErr;
use minipool_sm::errors::TransitionErr;
use thiserror::Error;

/// Errors raised by [`PoolManager`](crate::manager::PoolManager) operations.
///
/// Lower layers surface through `#[from]` conversions so tests and callers
/// can match on the originating guard.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ManagerErr {
    /// The operation's budget could not cover its fixed cost.
    #[error("operation aborted: {0}")]
    ResourceExhausted(#[from] BudgetExhausted),

    /// An owner-controlled policy switch currently forbids the operation.
    #[error("{0} is currently disabled by policy")]
    PolicyDisabled(&'static str),

    /// The caller is not permitted to perform the operation.
    #[error("caller {caller} is not authorized to {action}")]
    Unauthorized {
        /// The rejected caller.
        caller: Address,
        /// The operation that was attempted.
        action: &'static str,
    },

    /// No node contract is bound to the address.
    #[error("no node contract bound to {0}")]
    NodeContractNotFound(Address),

    /// No minipool exists at the address.
    #[error("no minipool at {0}")]
    MinipoolNotFound(Address),

    /// A staker deposit failed validation against the deposit policy.
    #[error("deposit of {amount} rejected: {reason}")]
    DepositRejected {
        /// The offered amount.
        amount: Wei,
        /// Why the deposit policy rejected it.
        reason: &'static str,
    },

    /// A registry operation failed.
    #[error(transparent)]
    Registry(#[from] RegistryErr),

    /// The minipool state machine rejected the transition.
    #[error(transparent)]
    Transition(#[from] TransitionErr),
}
