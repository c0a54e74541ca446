//! Token ledger boundary and its in-memory implementation.

use std::{collections::BTreeMap, sync::Arc};

use minipool_primitives::{Address, Wei};
use parking_lot::RwLock;
use tracing::debug;

use crate::errors::LedgerErr;

/// Interface to an external token balance store.
///
/// The RPL token ledger and operator ether accounts are both reached through
/// this boundary; the lifecycle core only ever credits accounts, moves full
/// balances and reads them back.
pub trait TokenLedger {
    /// Current balance of an account.
    fn balance_of(&self, account: Address) -> Wei;

    /// Credits an account. Models external minting/funding.
    fn credit(&self, account: Address, amount: Wei);

    /// Moves `amount` from one account to another.
    fn transfer(&self, from: Address, to: Address, amount: Wei) -> Result<(), LedgerErr>;

    /// Moves the entire balance of `from` to `to`, returning the amount
    /// moved. Draining an empty account is a no-op that returns zero.
    fn drain(&self, from: Address, to: Address) -> Wei;
}

/// In-memory ledger backing the lifecycle core and its tests.
///
/// Handles are cheap clones over shared state so the same ledger can be given
/// to multiple components.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLedger {
    balances: Arc<RwLock<BTreeMap<Address, Wei>>>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, account: Address) -> Wei {
        self.balances.read().get(&account).copied().unwrap_or(0)
    }

    fn credit(&self, account: Address, amount: Wei) {
        let mut balances = self.balances.write();
        *balances.entry(account).or_insert(0) += amount;

        debug!(%account, amount, "credited account");
    }

    fn transfer(&self, from: Address, to: Address, amount: Wei) -> Result<(), LedgerErr> {
        let mut balances = self.balances.write();

        let available = balances.get(&from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerErr::InsufficientBalance {
                account: from,
                needed: amount,
                available,
            });
        }

        balances.insert(from, available - amount);
        *balances.entry(to).or_insert(0) += amount;

        debug!(%from, %to, amount, "transferred balance");

        Ok(())
    }

    fn drain(&self, from: Address, to: Address) -> Wei {
        let mut balances = self.balances.write();

        let amount = balances.remove(&from).unwrap_or(0);
        if amount > 0 {
            *balances.entry(to).or_insert(0) += amount;
            debug!(%from, %to, amount, "drained account");
        }

        amount
    }
}

#[cfg(test)]
mod tests {
    use minipool_test_utils::prelude::generate_address;

    use super::*;

    #[test]
    fn test_credit_and_balance() {
        let ledger = InMemoryLedger::new();
        let account = generate_address();

        assert_eq!(ledger.balance_of(account), 0);

        ledger.credit(account, 100);
        ledger.credit(account, 50);
        assert_eq!(ledger.balance_of(account), 150);
    }

    #[test]
    fn test_transfer_checks_balance() {
        let ledger = InMemoryLedger::new();
        let from = generate_address();
        let to = generate_address();

        ledger.credit(from, 30);
        assert_eq!(
            ledger.transfer(from, to, 31),
            Err(LedgerErr::InsufficientBalance {
                account: from,
                needed: 31,
                available: 30,
            })
        );
        assert_eq!(ledger.balance_of(from), 30, "failed transfer must not move funds");

        ledger.transfer(from, to, 30).unwrap();
        assert_eq!(ledger.balance_of(from), 0);
        assert_eq!(ledger.balance_of(to), 30);
    }

    #[test]
    fn test_drain_moves_everything() {
        let ledger = InMemoryLedger::new();
        let from = generate_address();
        let to = generate_address();

        assert_eq!(ledger.drain(from, to), 0, "empty drain is a no-op");

        ledger.credit(from, 77);
        assert_eq!(ledger.drain(from, to), 77);
        assert_eq!(ledger.balance_of(from), 0);
        assert_eq!(ledger.balance_of(to), 77);
    }

    #[test]
    fn test_clones_share_state() {
        let ledger = InMemoryLedger::new();
        let handle = ledger.clone();
        let account = generate_address();

        ledger.credit(account, 5);
        assert_eq!(handle.balance_of(account), 5);
    }
}
