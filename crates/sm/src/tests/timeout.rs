//! Unit tests for the timeout trigger.

use minipool_primitives::MinipoolStatus;
use minipool_test_utils::prelude::generate_address;

use crate::{
    errors::TransitionErr,
    events::MinipoolEvent,
    tests::{create_sm, sm_in_status, CREATED_AT, TIMEOUT_AFTER},
};

#[test]
fn test_timeout_after_deadline() {
    let operator = generate_address();

    for status in [MinipoolStatus::Initialized, MinipoolStatus::PreLaunch] {
        let mut sm = sm_in_status(operator, status);

        sm.process_event(MinipoolEvent::Timeout {
            now: CREATED_AT + TIMEOUT_AFTER,
            timeout_after: TIMEOUT_AFTER,
        })
        .unwrap();

        assert_eq!(sm.status(), MinipoolStatus::TimedOut);
        assert_eq!(sm.status().ordinal(), 6);
    }
}

#[test]
fn test_premature_timeout_rejected() {
    let operator = generate_address();
    let mut sm = create_sm(operator);

    let err = sm
        .process_event(MinipoolEvent::Timeout {
            now: CREATED_AT + TIMEOUT_AFTER - 1,
            timeout_after: TIMEOUT_AFTER,
        })
        .unwrap_err();

    assert_eq!(
        err,
        TransitionErr::TimeoutNotReached {
            address: sm.cfg().address,
            now: CREATED_AT + TIMEOUT_AFTER - 1,
            deadline: CREATED_AT + TIMEOUT_AFTER,
        }
    );
    assert_eq!(sm.status(), MinipoolStatus::Initialized);
}

#[test]
fn test_timeout_rejected_past_launch() {
    let operator = generate_address();

    for status in [
        MinipoolStatus::Staking,
        MinipoolStatus::LoggedOut,
        MinipoolStatus::Withdrawn,
        MinipoolStatus::Closed,
        MinipoolStatus::TimedOut,
    ] {
        let mut sm = sm_in_status(operator, status);

        let err = sm
            .process_event(MinipoolEvent::Timeout {
                now: CREATED_AT + 10 * TIMEOUT_AFTER,
                timeout_after: TIMEOUT_AFTER,
            })
            .unwrap_err();

        assert!(
            matches!(err, TransitionErr::InvalidState { .. }),
            "expected InvalidState in {status}, got {err:?}"
        );
        assert_eq!(sm.status(), status);
    }
}
