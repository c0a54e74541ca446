//! The minipool lifecycle status enum and its pinned ordinal mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a minipool.
///
/// The numeric ordinals are part of the external interface: callers assert on
/// the literal values, so the mapping must never change. `Closed` is the
/// "emptied but not yet destroyed" shell that a withdrawal leaves behind while
/// minipool closure is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MinipoolStatus {
    /// Created by the factory; only the node operator's deposit is at risk.
    Initialized = 0,

    /// A staker deposit has been assigned; awaiting launch conditions.
    PreLaunch = 1,

    /// Capital is actively staking on behalf of a staker.
    Staking = 2,

    /// The pool has begun its post-staking exit.
    LoggedOut = 3,

    /// Consensus-layer funds have been returned after logout.
    Withdrawn = 4,

    /// Balances emptied; awaiting destruction once closure is re-enabled.
    Closed = 5,

    /// The staking attempt expired before making progress.
    TimedOut = 6,
}

impl MinipoolStatus {
    /// Returns the externally significant ordinal for this status.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether the owning node operator may withdraw its deposit in this
    /// status.
    ///
    /// Withdrawal is permitted only where the operator's capital is not at
    /// stake on behalf of a staker: nothing has been deposited yet
    /// (`Initialized`), the staking attempt expired (`TimedOut`), or staking
    /// has fully completed and funds were returned (`Withdrawn`).
    pub const fn is_node_withdrawable(self) -> bool {
        matches!(
            self,
            MinipoolStatus::Initialized | MinipoolStatus::TimedOut | MinipoolStatus::Withdrawn
        )
    }

    /// Whether the timeout trigger applies to this status.
    ///
    /// Only pools that have not started staking can time out; everything past
    /// `Staking` has its own exit path.
    pub const fn can_time_out(self) -> bool {
        matches!(self, MinipoolStatus::Initialized | MinipoolStatus::PreLaunch)
    }
}

impl fmt::Display for MinipoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinipoolStatus::Initialized => write!(f, "initialized"),
            MinipoolStatus::PreLaunch => write!(f, "pre_launch"),
            MinipoolStatus::Staking => write!(f, "staking"),
            MinipoolStatus::LoggedOut => write!(f, "logged_out"),
            MinipoolStatus::Withdrawn => write!(f, "withdrawn"),
            MinipoolStatus::Closed => write!(f, "closed"),
            MinipoolStatus::TimedOut => write!(f, "timed_out"),
        }
    }
}

impl TryFrom<u8> for MinipoolStatus {
    type Error = InvalidStatusOrdinal;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MinipoolStatus::Initialized),
            1 => Ok(MinipoolStatus::PreLaunch),
            2 => Ok(MinipoolStatus::Staking),
            3 => Ok(MinipoolStatus::LoggedOut),
            4 => Ok(MinipoolStatus::Withdrawn),
            5 => Ok(MinipoolStatus::Closed),
            6 => Ok(MinipoolStatus::TimedOut),
            other => Err(InvalidStatusOrdinal(other)),
        }
    }
}

/// Error returned when a numeric value does not map to a [`MinipoolStatus`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("no minipool status with ordinal {0}")]
pub struct InvalidStatusOrdinal(pub u8);
