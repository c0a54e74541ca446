//! Node operator directory, trust registry and token ledger boundary.
//!
//! The [`NodeRegistry`](nodes::NodeRegistry) records which operators have
//! registered a node contract and carries the owner-administered trust flag
//! per operator. The [`TokenLedger`](ledger::TokenLedger) trait is the
//! interface to external balance stores (the RPL token, operator ether
//! accounts); [`InMemoryLedger`](ledger::InMemoryLedger) is the reference
//! implementation used by the lifecycle core and its tests.

pub mod errors;
pub mod ledger;
pub mod nodes;

pub use errors::RegistryErr;
pub use ledger::{InMemoryLedger, TokenLedger};
pub use nodes::NodeRegistry;
