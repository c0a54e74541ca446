//! The unified event type for the minipool state machine.

use std::fmt;

use minipool_primitives::{Address, UnixTimestamp, Wei};

/// Events fed to the minipool state machine.
///
/// Every event is the result of a discrete, externally triggered transaction;
/// timestamps are the caller's reading of the clock at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinipoolEvent {
    /// A staker deposit chunk has been assigned to this pool.
    StakerDeposit {
        /// The deposited amount. Staker capital is accounted by the deposit
        /// pool, not by this machine; the amount is recorded for logging.
        amount: Wei,

        /// When the deposit was assigned.
        at: UnixTimestamp,
    },

    /// Launch conditions have been met; the pool begins staking.
    Launch {
        /// When the launch was confirmed.
        at: UnixTimestamp,
    },

    /// The watchtower has logged the pool out of staking, beginning its exit.
    Logout {
        /// When the logout was observed.
        at: UnixTimestamp,
    },

    /// Consensus-layer funds have been returned after logout.
    WithdrawalFinalized {
        /// Ether returned to the pool for its node operator.
        returned: Wei,

        /// When the return was observed.
        at: UnixTimestamp,
    },

    /// External timeout trigger for a pool that never began staking.
    Timeout {
        /// The caller's reading of the clock.
        now: UnixTimestamp,

        /// Seconds after the last status change at which the pool becomes
        /// eligible for timeout.
        timeout_after: u64,
    },

    /// The owning node operator withdraws the pool's deposit.
    NodeWithdrawal {
        /// The authenticated caller; must be the owning operator.
        caller: Address,

        /// Whether emptied pools may currently be destroyed. Read from
        /// policy by the gateway at call time.
        closing_enabled: bool,

        /// When the withdrawal executes.
        at: UnixTimestamp,
    },

    /// Admin finalization of a pool emptied while closure was disabled.
    UpdateStatus,
}

impl MinipoolEvent {
    /// Short name of the event for logs and error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            MinipoolEvent::StakerDeposit { .. } => "staker_deposit",
            MinipoolEvent::Launch { .. } => "launch",
            MinipoolEvent::Logout { .. } => "logout",
            MinipoolEvent::WithdrawalFinalized { .. } => "withdrawal_finalized",
            MinipoolEvent::Timeout { .. } => "timeout",
            MinipoolEvent::NodeWithdrawal { .. } => "node_withdrawal",
            MinipoolEvent::UpdateStatus => "update_status",
        }
    }
}

impl fmt::Display for MinipoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
