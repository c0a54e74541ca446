//! Core primitive types shared by the minipool protocol crates.
//!
//! Everything in here is deliberately small and dependency-light: account
//! addresses, balance units, the minipool status enum with its externally
//! pinned ordinals, staking duration identifiers and the per-operation
//! resource budget.

pub mod budget;
pub mod duration;
pub mod status;
pub mod types;

pub use budget::{BudgetExhausted, OpBudget};
pub use duration::StakingDurationId;
pub use status::MinipoolStatus;
pub use types::{Address, UnixTimestamp, Wei};
