//! Unit tests for the minipool state machine.

use minipool_primitives::{Address, MinipoolStatus, UnixTimestamp, Wei};
use minipool_test_utils::prelude::generate_address;

use crate::{config::MinipoolCfg, machine::MinipoolSM, state::MinipoolState};

mod timeout;

pub(crate) const CREATED_AT: UnixTimestamp = 1_700_000_000;
pub(crate) const NODE_DEPOSIT: Wei = 16_000_000_000_000_000_000;
pub(crate) const TIMEOUT_AFTER: u64 = 2_419_200; // 4 weeks

pub(crate) fn test_cfg(operator: Address) -> MinipoolCfg {
    MinipoolCfg {
        address: generate_address(),
        operator,
        staking_duration: "3m".into(),
        created_at: CREATED_AT,
    }
}

pub(crate) fn create_sm(operator: Address) -> MinipoolSM {
    MinipoolSM::new(test_cfg(operator), NODE_DEPOSIT)
}

/// Builds a machine restored into the given status, as if the pool had
/// progressed there naturally.
pub(crate) fn sm_in_status(operator: Address, status: MinipoolStatus) -> MinipoolSM {
    let ether_balance = match status {
        // a closed pool has already been emptied by a withdrawal
        MinipoolStatus::Closed => 0,
        _ => NODE_DEPOSIT,
    };

    MinipoolSM::restore(
        test_cfg(operator),
        MinipoolState {
            status,
            ether_balance,
            status_changed_at: CREATED_AT,
        },
    )
}
