//! Node deposit withdrawals through the gateway.

use minipool_primitives::{MinipoolStatus, OpBudget};
use minipool_registry::TokenLedger;
use minipool_sm::errors::TransitionErr;
use minipool_test_utils::prelude::generate_address;

use crate::{
    errors::ManagerErr,
    tests::{budget, Harness, DEPOSIT_CHUNK, NODE_DEPOSIT, NOW, TIMEOUT_AFTER},
};

#[test]
fn test_cannot_withdraw_while_withdrawals_disabled() {
    let mut h = Harness::new();
    let pool = h.create_minipool();

    h.manager
        .set_withdrawal_allowed(h.owner, false, &mut budget())
        .unwrap();

    assert_eq!(
        h.withdraw(pool, NOW + 10),
        Err(ManagerErr::PolicyDisabled("node withdrawals"))
    );
    assert_eq!(h.status_ordinal(pool), 0, "pool must be untouched");

    // re-enabling the policy unblocks the same call
    h.manager
        .set_withdrawal_allowed(h.owner, true, &mut budget())
        .unwrap();
    h.withdraw(pool, NOW + 20).unwrap();
}

#[test]
fn test_can_withdraw_from_initialised_minipool() {
    let mut h = Harness::new();
    let pool = h.create_minipool();

    let receipt = h.withdraw(pool, NOW + 10).unwrap();

    assert_eq!(receipt.ether_released, NODE_DEPOSIT);
    assert_eq!(receipt.rpl_released, 0);
    assert!(receipt.destroyed);
    assert_eq!(h.ether.balance_of(h.operator), NODE_DEPOSIT);
    assert!(h.manager.minipool(&pool).is_none(), "pool must be destroyed");
}

#[test]
fn test_withdrawal_drains_rpl_balance() {
    let mut h = Harness::new();
    let pool = h.create_minipool();

    let rpl_amount = 5_000_000_000_000_000_000;
    h.rpl.credit(pool, rpl_amount);

    let receipt = h.withdraw(pool, NOW + 10).unwrap();

    assert_eq!(receipt.rpl_released, rpl_amount);
    assert_eq!(h.rpl.balance_of(h.operator), rpl_amount);
    assert_eq!(h.rpl.balance_of(pool), 0);
}

#[test]
fn test_cannot_withdraw_while_deposits_assigned() {
    let mut h = Harness::new();
    let staker = generate_address();
    let pool = h.create_pre_launch_minipool(staker);
    assert_eq!(h.status_ordinal(pool), 1);

    let err = h.withdraw(pool, NOW + 20).unwrap_err();

    assert!(matches!(
        err,
        ManagerErr::Transition(TransitionErr::InvalidState { .. })
    ));
    assert_eq!(h.ether.balance_of(h.operator), 0);
}

#[test]
fn test_cannot_withdraw_while_staking() {
    let mut h = Harness::new();
    let staker = generate_address();
    let pool = h.create_pre_launch_minipool(staker);
    h.manager
        .begin_staking(h.owner, pool, NOW + 20, &mut budget())
        .unwrap();
    assert_eq!(h.status_ordinal(pool), 2);

    let err = h.withdraw(pool, NOW + 30).unwrap_err();

    assert!(matches!(
        err,
        ManagerErr::Transition(TransitionErr::InvalidState { .. })
    ));
}

#[test]
fn test_can_withdraw_from_timed_out_minipool() {
    let mut h = Harness::new();
    let pool = h.create_minipool();

    h.manager
        .timeout_minipool(generate_address(), pool, NOW + TIMEOUT_AFTER, &mut budget())
        .unwrap();
    assert_eq!(h.status_ordinal(pool), 6);

    let receipt = h.withdraw(pool, NOW + TIMEOUT_AFTER + 10).unwrap();

    assert_eq!(receipt.ether_released, NODE_DEPOSIT);
    assert!(h.manager.minipool(&pool).is_none());
}

#[test]
fn test_closure_disabled_leaves_addressable_shell() {
    let mut h = Harness::new();
    let pool = h.create_minipool();

    h.manager
        .set_minipool_closing_enabled(h.owner, false, &mut budget())
        .unwrap();

    let receipt = h.withdraw(pool, NOW + 10).unwrap();

    assert_eq!(receipt.ether_released, NODE_DEPOSIT);
    assert!(!receipt.destroyed);

    let shell = h.manager.minipool(&pool).unwrap();
    assert_eq!(shell.status(), MinipoolStatus::Closed);
    assert_eq!(shell.state().ether_balance, 0);

    // finalization is refused until closing is re-enabled
    assert_eq!(
        h.manager.update_status(h.owner, pool, &mut budget()),
        Err(ManagerErr::PolicyDisabled("minipool closing"))
    );

    h.manager
        .set_minipool_closing_enabled(h.owner, true, &mut budget())
        .unwrap();
    h.manager
        .update_status(h.owner, pool, &mut budget())
        .unwrap();
    assert!(h.manager.minipool(&pool).is_none());
}

#[test]
fn test_stranger_cannot_call_anothers_contract() {
    let mut h = Harness::new();
    let pool = h.create_minipool();
    let stranger = generate_address();

    let err = h
        .manager
        .withdraw_minipool_deposit(stranger, h.contract, pool, NOW + 10, &mut budget())
        .unwrap_err();

    assert!(matches!(
        err,
        ManagerErr::Unauthorized { caller, .. } if caller == stranger
    ));
    assert_eq!(h.status_ordinal(pool), 0);
}

#[test]
fn test_withdrawal_through_unknown_contract_fails() {
    let mut h = Harness::new();
    let pool = h.create_minipool();
    let bogus = generate_address();

    assert_eq!(
        h.manager
            .withdraw_minipool_deposit(h.operator, bogus, pool, NOW + 10, &mut budget()),
        Err(ManagerErr::NodeContractNotFound(bogus))
    );
}

#[test]
fn test_other_operator_cannot_withdraw() {
    let mut h = Harness::new();
    let pool = h.create_minipool();
    let other = generate_address();
    let other_contract = h
        .manager
        .register_node(other, "UTC", NOW, &mut budget())
        .unwrap();

    // a legitimate operator using its own contract against someone else's pool
    let err = h
        .manager
        .withdraw_minipool_deposit(other, other_contract, pool, NOW + 10, &mut budget())
        .unwrap_err();

    assert!(matches!(
        err,
        ManagerErr::Unauthorized { caller, .. } if caller == other
    ));
    assert_eq!(h.status_ordinal(pool), 0);
}

#[test]
fn test_withdrawal_from_unknown_pool_fails() {
    let mut h = Harness::new();
    let nowhere = generate_address();

    assert_eq!(
        h.withdraw(nowhere, NOW),
        Err(ManagerErr::MinipoolNotFound(nowhere))
    );
}

#[test]
fn test_exhausted_budget_aborts_without_state_change() {
    let mut h = Harness::new();
    let pool = h.create_minipool();
    let mut empty = OpBudget::new(0);

    let err = h
        .manager
        .withdraw_minipool_deposit(h.operator, h.contract, pool, NOW + 10, &mut empty)
        .unwrap_err();

    assert!(matches!(err, ManagerErr::ResourceExhausted(_)));
    assert_eq!(h.status_ordinal(pool), 0);
    assert_eq!(h.ether.balance_of(h.operator), 0);
    assert_eq!(empty.remaining(), 0);
}
