//! End-to-end tests driving the manager front door the way external callers
//! would, with every balance effect checked against the shared ledgers.

use std::sync::Once;

use minipool_common::logging::{self, LoggerConfig};
use minipool_primitives::{Address, OpBudget, UnixTimestamp, Wei};
use minipool_registry::InMemoryLedger;
use minipool_test_utils::prelude::generate_address;

use crate::{constants::DEFAULT_OP_BUDGET, ManagerErr, PoolManager, WithdrawalReceipt};

mod withdrawal;

pub(crate) const NOW: UnixTimestamp = 1_700_000_000;
pub(crate) const NODE_DEPOSIT: Wei = 16_000_000_000_000_000_000;
pub(crate) const DEPOSIT_CHUNK: Wei = 4_000_000_000_000_000_000;
pub(crate) const TIMEOUT_AFTER: u64 = 2_419_200;

static INIT_LOGGING: Once = Once::new();

/// A manager with one registered operator, plus handles to the backing
/// ledgers.
pub(crate) struct Harness {
    pub(crate) manager: PoolManager<InMemoryLedger>,
    pub(crate) owner: Address,
    pub(crate) operator: Address,
    /// Address of the operator's node contract.
    pub(crate) contract: Address,
    pub(crate) rpl: InMemoryLedger,
    pub(crate) ether: InMemoryLedger,
}

impl Harness {
    pub(crate) fn new() -> Self {
        INIT_LOGGING.call_once(|| {
            logging::init(LoggerConfig::with_base_name("minipool-manager-tests"));
        });

        let owner = generate_address();
        let operator = generate_address();
        let rpl = InMemoryLedger::new();
        let ether = InMemoryLedger::new();

        let mut manager = PoolManager::new(owner, rpl.clone(), ether.clone());
        let contract = manager
            .register_node(operator, "Australia/Brisbane", NOW, &mut budget())
            .unwrap();

        Harness {
            manager,
            owner,
            operator,
            contract,
            rpl,
            ether,
        }
    }

    /// Withdraws `pool`'s node deposit as the harness operator through its
    /// node contract.
    pub(crate) fn withdraw(
        &mut self,
        pool: Address,
        now: UnixTimestamp,
    ) -> Result<WithdrawalReceipt, ManagerErr> {
        self.manager
            .withdraw_minipool_deposit(self.operator, self.contract, pool, now, &mut budget())
    }

    /// Creates one minipool for the harness operator and returns its address.
    pub(crate) fn create_minipool(&mut self) -> Address {
        self.manager
            .create_minipools(self.operator, 1, "3m".into(), NOW, &mut budget())
            .unwrap()[0]
    }

    /// Creates a minipool and advances it to `PreLaunch` with one chunk.
    pub(crate) fn create_pre_launch_minipool(&mut self, staker: Address) -> Address {
        let pool = self.create_minipool();
        self.manager
            .assign_staker_deposit(staker, pool, DEPOSIT_CHUNK, NOW + 10, &mut budget())
            .unwrap();

        pool
    }

    pub(crate) fn status_ordinal(&self, pool: Address) -> u8 {
        self.manager.minipool(&pool).unwrap().status().ordinal()
    }
}

pub(crate) fn budget() -> OpBudget {
    OpBudget::new(DEFAULT_OP_BUDGET)
}
