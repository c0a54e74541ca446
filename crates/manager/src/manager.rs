//! The pool manager front door.
//!
//! Every externally triggered operation enters here: factories, admin policy
//! switches, the withdrawal gateway and the lifecycle triggers. The manager
//! owns the minipool arena and the node contract directory, holds the policy
//! stores, and executes the duties the state machines emit against the
//! external token ledgers.
//!
//! Each operation is atomic. Its fixed cost is charged first, then every
//! guard is evaluated against freshly read state, and only then is anything
//! written; a failure at any step aborts with no partial mutation.

use std::collections::BTreeMap;

use minipool_params::{deposit::DepositParams, minipool::MinipoolParams, node::NodeParams};
use minipool_primitives::{Address, OpBudget, StakingDurationId, UnixTimestamp, Wei};
use minipool_registry::{NodeRegistry, TokenLedger};
use minipool_sm::{
    config::MinipoolCfg, duties::MinipoolDuty, events::MinipoolEvent, MinipoolSM,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    constants::{
        ASSIGN_DEPOSIT_COST, BEGIN_STAKING_COST, CREATE_MINIPOOL_COST, FINALIZE_WITHDRAWAL_COST,
        LOGOUT_MINIPOOL_COST, REGISTER_NODE_COST, SET_NODE_TRUSTED_COST, SET_POLICY_COST,
        TIMEOUT_MINIPOOL_COST, UPDATE_STATUS_COST, WITHDRAW_MINIPOOL_DEPOSIT_COST,
    },
    errors::ManagerErr,
    node_contract::{derive_address, NodeContract},
};

/// Outcome of a successful node deposit withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    /// The pool the deposit was withdrawn from.
    pub minipool: Address,

    /// The operator the balances were released to.
    pub operator: Address,

    /// Ether credited to the operator's account.
    pub ether_released: Wei,

    /// RPL drained from the pool to the operator.
    pub rpl_released: Wei,

    /// Whether the pool was removed from the arena, or left behind as a
    /// `Closed` shell because closure is disabled.
    pub destroyed: bool,
}

/// Owns the minipool arena and mediates every operation against it.
#[derive(Debug)]
pub struct PoolManager<L: TokenLedger> {
    owner: Address,
    node_params: NodeParams,
    minipool_params: MinipoolParams,
    deposit_params: DepositParams,
    registry: NodeRegistry,
    node_contracts: BTreeMap<Address, NodeContract>,
    minipools: BTreeMap<Address, MinipoolSM>,
    rpl: L,
    ether: L,
    nonce: u64,
}

impl<L: TokenLedger> PoolManager<L> {
    /// Creates a manager administered by `owner` with default policy
    /// parameters, backed by the given RPL and ether ledgers.
    pub fn new(owner: Address, rpl: L, ether: L) -> Self {
        Self::with_params(
            owner,
            NodeParams::default(),
            MinipoolParams::default(),
            DepositParams::default(),
            rpl,
            ether,
        )
    }

    /// Creates a manager with explicit policy parameters, typically loaded
    /// from configuration.
    pub fn with_params(
        owner: Address,
        node_params: NodeParams,
        minipool_params: MinipoolParams,
        deposit_params: DepositParams,
        rpl: L,
        ether: L,
    ) -> Self {
        PoolManager {
            owner,
            node_params,
            minipool_params,
            deposit_params,
            registry: NodeRegistry::new(owner),
            node_contracts: BTreeMap::new(),
            minipools: BTreeMap::new(),
            rpl,
            ether,
            nonce: 0,
        }
    }

    /// The privileged owner address.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// The node trust registry.
    pub const fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Current node-scoped policy.
    pub const fn node_params(&self) -> &NodeParams {
        &self.node_params
    }

    /// Current minipool lifecycle policy.
    pub const fn minipool_params(&self) -> &MinipoolParams {
        &self.minipool_params
    }

    /// Current staker deposit policy.
    pub const fn deposit_params(&self) -> &DepositParams {
        &self.deposit_params
    }

    /// The node contract at `address`, if one is registered.
    pub fn node_contract(&self, address: &Address) -> Option<&NodeContract> {
        self.node_contracts.get(address)
    }

    /// The minipool at `address`, if it exists in the arena.
    pub fn minipool(&self, address: &Address) -> Option<&MinipoolSM> {
        self.minipools.get(address)
    }

    /// Number of minipools currently in the arena.
    pub fn minipool_count(&self) -> usize {
        self.minipools.len()
    }

    fn require_owner(&self, caller: Address, action: &'static str) -> Result<(), ManagerErr> {
        if caller != self.owner {
            warn!(%caller, action, "rejecting non-owner caller");

            return Err(ManagerErr::Unauthorized { caller, action });
        }

        Ok(())
    }

    fn minipool_mut(&mut self, address: Address) -> Result<&mut MinipoolSM, ManagerErr> {
        self.minipools
            .get_mut(&address)
            .ok_or(ManagerErr::MinipoolNotFound(address))
    }

    /// Registers a node operator and binds its node contract.
    ///
    /// Returns the new contract's address. A second registration for the same
    /// operator fails.
    pub fn register_node(
        &mut self,
        operator: Address,
        timezone: impl Into<String>,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<Address, ManagerErr> {
        budget.charge(REGISTER_NODE_COST)?;

        if !self.node_params.registration_allowed {
            return Err(ManagerErr::PolicyDisabled("node registration"));
        }

        let timezone = timezone.into();
        self.registry.register(operator, timezone.clone(), now)?;

        let contract = NodeContract::new(operator, timezone);
        let address = contract.address();
        self.node_contracts.insert(address, contract);

        info!(%operator, contract = %address, "node contract bound");

        Ok(address)
    }

    /// Sets the trust flag of a registered node operator. Owner-only.
    pub fn set_node_trusted(
        &mut self,
        caller: Address,
        node: Address,
        trusted: bool,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(SET_NODE_TRUSTED_COST)?;

        self.registry.set_node_trusted(caller, node, trusted)?;

        Ok(())
    }

    /// Creates `count` minipools for a registered operator.
    ///
    /// Each pool starts in `Initialized`, seeded with the node deposit from
    /// the minipool policy, at a derived address returned in creation order.
    pub fn create_minipools(
        &mut self,
        caller: Address,
        count: u32,
        staking_duration: StakingDurationId,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<Vec<Address>, ManagerErr> {
        budget.charge(CREATE_MINIPOOL_COST.saturating_mul(u64::from(count)))?;

        if !self.registry.is_registered(&caller) {
            warn!(%caller, "rejecting minipool creation by unregistered operator");

            return Err(ManagerErr::NodeContractNotFound(caller));
        }

        let mut created = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let address = derive_address(b"minipool", &caller, self.nonce);
            self.nonce += 1;

            let cfg = MinipoolCfg {
                address,
                operator: caller,
                staking_duration: staking_duration.clone(),
                created_at: now,
            };
            self.minipools
                .insert(address, MinipoolSM::new(cfg, self.minipool_params.node_deposit));
            created.push(address);
        }

        info!(operator = %caller, count, "minipools created");

        Ok(created)
    }

    /// Assigns a staker deposit chunk to a pool, advancing it to `PreLaunch`.
    ///
    /// The deposit amount must satisfy the deposit policy; staker capital
    /// itself is accounted by the external deposit pool.
    pub fn assign_staker_deposit(
        &mut self,
        staker: Address,
        minipool: Address,
        amount: Wei,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(ASSIGN_DEPOSIT_COST)?;

        if !self.deposit_params.deposit_allowed {
            return Err(ManagerErr::PolicyDisabled("staker deposits"));
        }

        if amount == 0 {
            return Err(ManagerErr::DepositRejected {
                amount,
                reason: "amount is zero",
            });
        }
        if amount > self.deposit_params.max_deposit {
            return Err(ManagerErr::DepositRejected {
                amount,
                reason: "amount exceeds the deposit maximum",
            });
        }
        // checked_rem also covers a zero chunk size in loaded params
        if amount.checked_rem(self.deposit_params.chunk_size) != Some(0) {
            return Err(ManagerErr::DepositRejected {
                amount,
                reason: "amount is not a whole number of chunks",
            });
        }

        info!(%staker, %minipool, amount, "assigning staker deposit");

        self.minipool_mut(minipool)?
            .process_event(MinipoolEvent::StakerDeposit { amount, at: now })?;

        Ok(())
    }

    /// Confirms a pool's launch conditions, moving it into `Staking`.
    /// Owner-only (watchtower role).
    pub fn begin_staking(
        &mut self,
        caller: Address,
        minipool: Address,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(BEGIN_STAKING_COST)?;
        self.require_owner(caller, "begin staking")?;

        self.minipool_mut(minipool)?
            .process_event(MinipoolEvent::Launch { at: now })?;

        Ok(())
    }

    /// Logs a pool out of staking, beginning its exit path. Owner-only
    /// (watchtower role).
    pub fn logout_minipool(
        &mut self,
        caller: Address,
        minipool: Address,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(LOGOUT_MINIPOOL_COST)?;
        self.require_owner(caller, "log out a minipool")?;

        self.minipool_mut(minipool)?
            .process_event(MinipoolEvent::Logout { at: now })?;

        Ok(())
    }

    /// Credits consensus-layer funds returned after logout, moving the pool
    /// to `Withdrawn`. Owner-only (watchtower role).
    pub fn finalize_withdrawal(
        &mut self,
        caller: Address,
        minipool: Address,
        returned: Wei,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(FINALIZE_WITHDRAWAL_COST)?;
        self.require_owner(caller, "finalize a withdrawal")?;

        self.minipool_mut(minipool)?
            .process_event(MinipoolEvent::WithdrawalFinalized { returned, at: now })?;

        Ok(())
    }

    /// Times out a pool that never began staking.
    ///
    /// An open trigger: the guard is the elapsed timeout period, not the
    /// caller's identity.
    pub fn timeout_minipool(
        &mut self,
        caller: Address,
        minipool: Address,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(TIMEOUT_MINIPOOL_COST)?;

        let timeout_after = self.minipool_params.timeout_period_secs;

        info!(%caller, %minipool, "timeout trigger fired");

        self.minipool_mut(minipool)?
            .process_event(MinipoolEvent::Timeout { now, timeout_after })?;

        Ok(())
    }

    /// Withdraws a minipool's node deposit through a node contract.
    ///
    /// The caller must be the operator bound to the contract at
    /// `node_contract`. Releases the pool's full ether balance to the
    /// operator's account, drains the pool's RPL balance to the operator,
    /// and removes the pool from the arena unless closure is disabled, in
    /// which case the pool is left behind as an addressable `Closed` shell.
    pub fn withdraw_minipool_deposit(
        &mut self,
        caller: Address,
        node_contract: Address,
        minipool: Address,
        now: UnixTimestamp,
        budget: &mut OpBudget,
    ) -> Result<WithdrawalReceipt, ManagerErr> {
        budget.charge(WITHDRAW_MINIPOOL_DEPOSIT_COST)?;

        if !self.node_params.withdrawal_allowed {
            warn!(%caller, %minipool, "rejecting withdrawal while disabled by policy");

            return Err(ManagerErr::PolicyDisabled("node withdrawals"));
        }

        let contract = self
            .node_contracts
            .get(&node_contract)
            .ok_or(ManagerErr::NodeContractNotFound(node_contract))?;
        contract.authorize(caller, "withdraw a minipool deposit")?;

        let closing_enabled = self.minipool_params.closing_enabled;
        let sm = self.minipool_mut(minipool)?;

        if sm.cfg().operator != caller {
            warn!(%caller, %minipool, "rejecting withdrawal from another operator's pool");

            return Err(ManagerErr::Unauthorized {
                caller,
                action: "withdraw a minipool deposit",
            });
        }

        let duties = sm.process_event(MinipoolEvent::NodeWithdrawal {
            caller,
            closing_enabled,
            at: now,
        })?;

        Ok(self.execute_withdrawal_duties(minipool, caller, duties))
    }

    /// Finalizes destruction of a pool emptied while closure was disabled.
    /// Owner-only; fails while closure is still disabled.
    pub fn update_status(
        &mut self,
        caller: Address,
        minipool: Address,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(UPDATE_STATUS_COST)?;
        self.require_owner(caller, "finalize a closed minipool")?;

        if !self.minipool_params.closing_enabled {
            return Err(ManagerErr::PolicyDisabled("minipool closing"));
        }

        let duties = self
            .minipool_mut(minipool)?
            .process_event(MinipoolEvent::UpdateStatus)?;

        for duty in duties {
            if duty == MinipoolDuty::Destroy {
                self.minipools.remove(&minipool);
                info!(%minipool, "emptied shell destroyed");
            }
        }

        Ok(())
    }

    /// Enables or disables node deposit withdrawals. Owner-only.
    pub fn set_withdrawal_allowed(
        &mut self,
        caller: Address,
        allowed: bool,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(SET_POLICY_COST)?;
        self.require_owner(caller, "set the withdrawal policy")?;

        self.node_params.withdrawal_allowed = allowed;
        info!(allowed, "withdrawal policy updated");

        Ok(())
    }

    /// Enables or disables destruction of emptied minipools. Owner-only.
    pub fn set_minipool_closing_enabled(
        &mut self,
        caller: Address,
        enabled: bool,
        budget: &mut OpBudget,
    ) -> Result<(), ManagerErr> {
        budget.charge(SET_POLICY_COST)?;
        self.require_owner(caller, "set the closing policy")?;

        self.minipool_params.closing_enabled = enabled;
        info!(enabled, "minipool closing policy updated");

        Ok(())
    }

    fn execute_withdrawal_duties(
        &mut self,
        minipool: Address,
        operator: Address,
        duties: Vec<MinipoolDuty>,
    ) -> WithdrawalReceipt {
        let mut receipt = WithdrawalReceipt {
            minipool,
            operator,
            ether_released: 0,
            rpl_released: 0,
            destroyed: false,
        };

        for duty in duties {
            match duty {
                MinipoolDuty::ReleaseDeposit { operator, ether } => {
                    self.ether.credit(operator, ether);
                    receipt.ether_released = ether;
                    receipt.rpl_released = self.rpl.drain(minipool, operator);
                }
                MinipoolDuty::Destroy => {
                    self.minipools.remove(&minipool);
                    receipt.destroyed = true;
                }
            }
        }

        info!(
            %minipool,
            %operator,
            ether = receipt.ether_released,
            rpl = receipt.rpl_released,
            destroyed = receipt.destroyed,
            "minipool deposit withdrawn"
        );

        receipt
    }
}
