//! The minipool state machine.
//!
//! All of the states, events and transition rules are encoded in this
//! structure. When the machine accepts an event it may give back duties to
//! execute as a result of the state transition.

use minipool_primitives::{Address, MinipoolStatus, UnixTimestamp, Wei};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    config::MinipoolCfg,
    duties::MinipoolDuty,
    errors::{TransitionErr, TransitionResult},
    events::MinipoolEvent,
    state::MinipoolState,
};

/// The core state machine for a single minipool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinipoolSM {
    cfg: MinipoolCfg,
    state: MinipoolState,
}

impl MinipoolSM {
    /// Builds a new machine for a freshly created pool seeded with the node
    /// operator's deposit.
    pub const fn new(cfg: MinipoolCfg, node_deposit: Wei) -> Self {
        let state = MinipoolState::new(node_deposit, cfg.created_at);

        MinipoolSM { cfg, state }
    }

    /// Restores a [`MinipoolSM`] from its config and a previously persisted
    /// state.
    pub const fn restore(cfg: MinipoolCfg, state: MinipoolState) -> Self {
        MinipoolSM { cfg, state }
    }

    /// The static configuration of this pool.
    pub const fn cfg(&self) -> &MinipoolCfg {
        &self.cfg
    }

    /// The current dynamic state of this pool.
    pub const fn state(&self) -> &MinipoolState {
        &self.state
    }

    /// The pool's current lifecycle status.
    pub const fn status(&self) -> MinipoolStatus {
        self.state.status
    }

    /// Processes the unified event type for the minipool.
    ///
    /// This is the primary state folding function. Guards are evaluated
    /// against the current state before anything is written, so a rejected
    /// event leaves the machine untouched.
    pub fn process_event(&mut self, event: MinipoolEvent) -> TransitionResult<Vec<MinipoolDuty>> {
        match event {
            MinipoolEvent::StakerDeposit { amount, at } => self.process_staker_deposit(amount, at),
            MinipoolEvent::Launch { at } => self.process_launch(at),
            MinipoolEvent::Logout { at } => self.process_logout(at),
            MinipoolEvent::WithdrawalFinalized { returned, at } => {
                self.process_withdrawal_finalized(returned, at)
            }
            MinipoolEvent::Timeout { now, timeout_after } => self.process_timeout(now, timeout_after),
            MinipoolEvent::NodeWithdrawal {
                caller,
                closing_enabled,
                at,
            } => self.process_node_withdrawal(caller, closing_enabled, at),
            MinipoolEvent::UpdateStatus => self.process_update_status(),
        }
    }

    fn invalid_state(&self, event: &'static str) -> TransitionErr {
        warn!(
            minipool = %self.cfg.address,
            status = %self.state.status,
            event,
            "rejecting event in current status"
        );

        TransitionErr::InvalidState {
            address: self.cfg.address,
            status: self.state.status,
            event,
        }
    }

    fn set_status(&mut self, status: MinipoolStatus, at: UnixTimestamp) {
        info!(
            minipool = %self.cfg.address,
            from = %self.state.status,
            to = %status,
            "minipool status changed"
        );

        self.state.status = status;
        self.state.status_changed_at = at;
    }

    fn process_staker_deposit(
        &mut self,
        amount: Wei,
        at: UnixTimestamp,
    ) -> TransitionResult<Vec<MinipoolDuty>> {
        if self.state.status != MinipoolStatus::Initialized {
            return Err(self.invalid_state("staker_deposit"));
        }

        info!(minipool = %self.cfg.address, amount, "staker deposit assigned");
        self.set_status(MinipoolStatus::PreLaunch, at);

        Ok(Vec::new())
    }

    fn process_launch(&mut self, at: UnixTimestamp) -> TransitionResult<Vec<MinipoolDuty>> {
        if self.state.status != MinipoolStatus::PreLaunch {
            return Err(self.invalid_state("launch"));
        }

        self.set_status(MinipoolStatus::Staking, at);

        Ok(Vec::new())
    }

    fn process_logout(&mut self, at: UnixTimestamp) -> TransitionResult<Vec<MinipoolDuty>> {
        if self.state.status != MinipoolStatus::Staking {
            return Err(self.invalid_state("logout"));
        }

        self.set_status(MinipoolStatus::LoggedOut, at);

        Ok(Vec::new())
    }

    fn process_withdrawal_finalized(
        &mut self,
        returned: Wei,
        at: UnixTimestamp,
    ) -> TransitionResult<Vec<MinipoolDuty>> {
        if self.state.status != MinipoolStatus::LoggedOut {
            return Err(self.invalid_state("withdrawal_finalized"));
        }

        self.state.ether_balance += returned;
        info!(minipool = %self.cfg.address, returned, "consensus-layer funds returned");
        self.set_status(MinipoolStatus::Withdrawn, at);

        Ok(Vec::new())
    }

    fn process_timeout(
        &mut self,
        now: UnixTimestamp,
        timeout_after: u64,
    ) -> TransitionResult<Vec<MinipoolDuty>> {
        if !self.state.status.can_time_out() {
            return Err(self.invalid_state("timeout"));
        }

        let deadline = self.state.status_changed_at + timeout_after;
        if now < deadline {
            warn!(
                minipool = %self.cfg.address,
                now,
                deadline,
                "rejecting premature timeout trigger"
            );

            return Err(TransitionErr::TimeoutNotReached {
                address: self.cfg.address,
                now,
                deadline,
            });
        }

        self.set_status(MinipoolStatus::TimedOut, now);

        Ok(Vec::new())
    }

    fn process_node_withdrawal(
        &mut self,
        caller: Address,
        closing_enabled: bool,
        at: UnixTimestamp,
    ) -> TransitionResult<Vec<MinipoolDuty>> {
        if caller != self.cfg.operator {
            warn!(
                minipool = %self.cfg.address,
                %caller,
                operator = %self.cfg.operator,
                "rejecting withdrawal by non-operator"
            );

            return Err(TransitionErr::Unauthorized {
                address: self.cfg.address,
                caller,
            });
        }

        if !self.state.status.is_node_withdrawable() {
            return Err(self.invalid_state("node_withdrawal"));
        }

        let ether = self.state.ether_balance;
        self.state.ether_balance = 0;
        self.set_status(MinipoolStatus::Closed, at);

        let mut duties = vec![MinipoolDuty::ReleaseDeposit {
            operator: self.cfg.operator,
            ether,
        }];

        if closing_enabled {
            duties.push(MinipoolDuty::Destroy);
        } else {
            info!(
                minipool = %self.cfg.address,
                "closure disabled; leaving emptied pool as an addressable shell"
            );
        }

        Ok(duties)
    }

    fn process_update_status(&mut self) -> TransitionResult<Vec<MinipoolDuty>> {
        // only an emptied shell left behind by a closure-disabled withdrawal
        // has anything to finalize
        if self.state.status != MinipoolStatus::Closed || self.state.ether_balance != 0 {
            return Err(self.invalid_state("update_status"));
        }

        info!(minipool = %self.cfg.address, "finalizing destruction of emptied pool");

        Ok(vec![MinipoolDuty::Destroy])
    }
}
