//! Per-operation resource budgets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gas-equivalent meter for a single externally triggered operation.
///
/// Every operation charges its cost before evaluating any guard, so an
/// exhausted budget can never leave partial state behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpBudget {
    remaining: u64,
}

impl OpBudget {
    /// Creates a budget with the given limit.
    pub const fn new(limit: u64) -> Self {
        OpBudget { remaining: limit }
    }

    /// Returns the unspent portion of the budget.
    pub const fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Deducts `cost` from the budget.
    ///
    /// Fails without deducting anything if the remaining budget cannot cover
    /// the charge.
    pub fn charge(&mut self, cost: u64) -> Result<(), BudgetExhausted> {
        if cost > self.remaining {
            return Err(BudgetExhausted {
                needed: cost,
                remaining: self.remaining,
            });
        }

        self.remaining -= cost;

        Ok(())
    }
}

/// Error returned when an operation's budget cannot cover the next charge.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("operation budget exhausted: needed {needed}, remaining {remaining}")]
pub struct BudgetExhausted {
    /// The cost that could not be covered.
    pub needed: u64,

    /// The budget left at the time of the charge.
    pub remaining: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_deducts() {
        let mut budget = OpBudget::new(100);

        budget.charge(60).unwrap();
        assert_eq!(budget.remaining(), 40);

        budget.charge(40).unwrap();
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_overdraft_leaves_budget_untouched() {
        let mut budget = OpBudget::new(50);

        let err = budget.charge(51).unwrap_err();
        assert_eq!(
            err,
            BudgetExhausted {
                needed: 51,
                remaining: 50
            }
        );
        assert_eq!(budget.remaining(), 50, "failed charge must not deduct");
    }
}
