//! Errors arising from the node registry and the token ledger.

use minipool_primitives::{Address, Wei};
use thiserror::Error;

/// Errors raised by [`NodeRegistry`](crate::nodes::NodeRegistry) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryErr {
    /// The caller is not the registry owner.
    #[error("caller {0} is not the registry owner")]
    Unauthorized(Address),

    /// No node is registered at the address.
    #[error("no node registered at {0}")]
    NodeNotFound(Address),

    /// The trust flag already holds the requested value.
    ///
    /// Setting a node to its current trust status is deliberately rejected
    /// rather than treated as a successful no-op.
    #[error("node {node} trust flag is already {trusted}")]
    TrustUnchanged {
        /// The targeted node operator.
        node: Address,
        /// The value the flag already holds.
        trusted: bool,
    },

    /// A node contract is already bound to the address.
    #[error("node already registered at {0}")]
    AlreadyRegistered(Address),
}

/// Errors raised by [`TokenLedger`](crate::ledger::TokenLedger) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerErr {
    /// The account balance cannot cover the transfer.
    #[error("account {account} holds {available} but the transfer needs {needed}")]
    InsufficientBalance {
        /// The debited account.
        account: Address,
        /// The amount the transfer required.
        needed: Wei,
        /// The balance actually held.
        available: Wei,
    },
}
