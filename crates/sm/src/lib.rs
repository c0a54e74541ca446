//! The state machine for managing the lifecycle of a single minipool.
//!
//! This state machine handles the following:
//!
//! - Advancing a pool from creation through staking to its exit path.
//! - Guarding node operator withdrawals so capital can never be pulled out
//!   from under an active staker.
//! - Timing out pools whose staking attempt expired, making their deposits
//!   recoverable.
//! - Representing the "emptied but not destroyed" shell that withdrawals
//!   leave behind while minipool closure is disabled.
//!
//! Transitions mutate state only after every guard has passed; a rejected
//! event leaves the machine exactly as it was. Balance movements and entity
//! destruction are emitted as [`duties`] for the caller to execute, keeping
//! the machine testable in isolation.

pub mod config;
pub mod duties;
pub mod errors;
pub mod events;
pub mod machine;
pub mod state;

#[cfg(test)]
mod tests;

pub use machine::MinipoolSM;
