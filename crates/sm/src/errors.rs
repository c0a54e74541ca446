//! Errors related to the state transitions in the minipool state machine.

use minipool_primitives::{Address, MinipoolStatus, UnixTimestamp};
use thiserror::Error;

/// Errors raised when an event is not valid for the minipool's current state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionErr {
    /// The event is not permitted in the pool's current status.
    #[error("invalid event {event} for minipool {address} in status {status}")]
    InvalidState {
        /// The minipool that rejected the event.
        address: Address,
        /// The status the pool was in.
        status: MinipoolStatus,
        /// Short name of the rejected event.
        event: &'static str,
    },

    /// The caller does not operate this minipool.
    #[error("caller {caller} does not operate minipool {address}")]
    Unauthorized {
        /// The minipool that rejected the caller.
        address: Address,
        /// The rejected caller.
        caller: Address,
    },

    /// The timeout trigger fired before the pool's deadline.
    #[error("minipool {address} has not reached its timeout deadline ({now} < {deadline})")]
    TimeoutNotReached {
        /// The minipool that rejected the trigger.
        address: Address,
        /// The caller's clock reading.
        now: UnixTimestamp,
        /// The earliest time at which the pool may be timed out.
        deadline: UnixTimestamp,
    },
}

/// The result type for minipool state transitions.
pub type TransitionResult<T> = Result<T, TransitionErr>;
