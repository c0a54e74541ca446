//! Duties emitted by the minipool state machine.

use minipool_primitives::{Address, Wei};

/// Side effects the caller must execute after an accepted transition.
///
/// The machine itself never touches ledgers or the pool arena; it describes
/// the balance movements and teardown it requires and trusts the executor to
/// apply them within the same atomic operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinipoolDuty {
    /// Release the pool's entire ether balance to its node operator and
    /// drain the pool's RPL balance to the same operator.
    ReleaseDeposit {
        /// The operator to credit.
        operator: Address,

        /// The full ether amount released.
        ether: Wei,
    },

    /// Remove the pool from the arena. Emitted only once the pool is empty.
    Destroy,
}
