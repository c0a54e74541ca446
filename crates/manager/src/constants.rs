//! Fixed resource costs charged by manager operations.
//!
//! Every externally triggered operation charges its cost against the caller's
//! [`OpBudget`](minipool_primitives::OpBudget) before evaluating any guard, so
//! an exhausted budget can never leave partial state behind.

/// Default budget granted to a single operation.
pub const DEFAULT_OP_BUDGET: u64 = 5_000_000;

/// Cost of flipping a node's trust flag.
pub const SET_NODE_TRUSTED_COST: u64 = 100_000;

/// Cost of registering a node operator and its node contract.
pub const REGISTER_NODE_COST: u64 = 500_000;

/// Cost of creating a single minipool. Batched creation charges this per
/// pool, up front.
pub const CREATE_MINIPOOL_COST: u64 = 1_000_000;

/// Cost of a node deposit withdrawal, including duty execution.
pub const WITHDRAW_MINIPOOL_DEPOSIT_COST: u64 = 400_000;

/// Cost of assigning a staker deposit chunk to a pool.
pub const ASSIGN_DEPOSIT_COST: u64 = 300_000;

/// Cost of confirming a pool's launch into staking.
pub const BEGIN_STAKING_COST: u64 = 200_000;

/// Cost of logging a pool out of staking.
pub const LOGOUT_MINIPOOL_COST: u64 = 200_000;

/// Cost of crediting returned consensus-layer funds after logout.
pub const FINALIZE_WITHDRAWAL_COST: u64 = 300_000;

/// Cost of firing the timeout trigger on a stalled pool.
pub const TIMEOUT_MINIPOOL_COST: u64 = 200_000;

/// Cost of finalizing destruction of an emptied shell.
pub const UPDATE_STATUS_COST: u64 = 200_000;

/// Cost of flipping an owner-controlled policy switch.
pub const SET_POLICY_COST: u64 = 100_000;
