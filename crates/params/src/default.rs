//! Default values for the minipool policy parameters.

use minipool_primitives::Wei;

/// One ether in wei.
pub(crate) const ETHER: Wei = 1_000_000_000_000_000_000;

/// Default ether deposit required from a node operator per minipool.
pub(crate) const NODE_DEPOSIT: Wei = 16 * ETHER;

/// Default period after which a minipool that has not begun staking can be
/// timed out.
pub(crate) const MINIPOOL_TIMEOUT_SECS: u64 = 60 * 60 * 24 * 28; // 4 weeks

/// Default chunk size for staker deposits routed into minipools.
pub(crate) const DEPOSIT_CHUNK_SIZE: Wei = 4 * ETHER;

/// Default cap on a single staker deposit.
pub(crate) const DEPOSIT_MAX: Wei = 1_000 * ETHER;
