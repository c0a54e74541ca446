//! This crate contains the owner-controlled policy parameters that gate the
//! minipool lifecycle: whether node withdrawals are allowed, whether emptied
//! minipools may be destroyed, and the deposit chunking configuration.
//!
//! The parameters are plain serde structs so they can be loaded from TOML,
//! and every guarded operation reads them afresh at call time.

pub mod default;
pub mod deposit;
pub mod minipool;
pub mod node;
pub mod prelude;

pub(crate) mod wei_toml;
