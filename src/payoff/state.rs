//! Per-debt mutable state for a single simulation run

use crate::strategy::OrderedDebt;
use serde::{Deserialize, Serialize};

/// Lifecycle of a debt within a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtStatus {
    Active,
    PaidOff,
}

/// State of one debt during a simulation run
///
/// Owned exclusively by the run that created it; concurrent runs never share
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtState {
    /// Debt identifier carried over from the input record
    pub id: u32,

    /// Display name
    pub name: String,

    /// Category label
    pub category: String,

    /// Surplus allocation rank assigned by the orderer, fixed for the run
    pub priority: u32,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Contractual minimum payment per month
    pub min_payment: f64,

    /// Balance at the start of the run
    pub initial_balance: f64,

    /// Outstanding balance, updated every month and clamped at zero
    pub current_balance: f64,

    /// Interest accrued on this debt since the start of the run
    pub interest_paid: f64,

    /// 1-based month in which the balance reached zero
    pub payoff_month: Option<u32>,

    /// Current lifecycle state
    pub status: DebtStatus,
}

impl DebtState {
    /// Initialize state from an ordered debt at run start
    pub fn from_ordered(ordered: &OrderedDebt) -> Self {
        Self {
            id: ordered.debt.id,
            name: ordered.debt.name.clone(),
            category: ordered.debt.category.clone(),
            priority: ordered.priority,
            annual_rate_pct: ordered.debt.annual_rate_pct,
            min_payment: ordered.debt.min_payment,
            initial_balance: ordered.debt.balance,
            current_balance: ordered.debt.balance,
            interest_paid: 0.0,
            payoff_month: None,
            status: DebtStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// Monthly interest rate derived from the annual percentage
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Transition to PaidOff once the balance bottoms out.
    ///
    /// The transition is one-way: a settled debt is skipped by all later
    /// accrual and payment passes, so its balance stays exactly zero.
    /// `month` is the 0-based index of the month in which the balance
    /// cleared; the recorded payoff month is 1-based.
    pub fn settle_if_cleared(&mut self, month: u32) {
        if self.status == DebtStatus::Active && self.current_balance <= 0.0 {
            self.current_balance = 0.0;
            self.status = DebtStatus::PaidOff;
            self.payoff_month = Some(month + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::Debt;

    fn ordered() -> OrderedDebt {
        OrderedDebt {
            debt: Debt::new(7, "Car Loan", "Auto", 11800.0, 6.49, 310.0),
            priority: 2,
        }
    }

    #[test]
    fn test_from_ordered() {
        let state = DebtState::from_ordered(&ordered());

        assert_eq!(state.id, 7);
        assert_eq!(state.priority, 2);
        assert_eq!(state.current_balance, 11800.0);
        assert_eq!(state.initial_balance, 11800.0);
        assert_eq!(state.interest_paid, 0.0);
        assert_eq!(state.payoff_month, None);
        assert!(state.is_active());
    }

    #[test]
    fn test_settle_is_one_way() {
        let mut state = DebtState::from_ordered(&ordered());
        state.current_balance = 0.0;
        state.settle_if_cleared(11);

        assert_eq!(state.status, DebtStatus::PaidOff);
        assert_eq!(state.payoff_month, Some(12));

        // A later call never rewrites the payoff month
        state.settle_if_cleared(20);
        assert_eq!(state.payoff_month, Some(12));
    }

    #[test]
    fn test_settle_ignores_open_balance() {
        let mut state = DebtState::from_ordered(&ordered());
        state.settle_if_cleared(3);

        assert!(state.is_active());
        assert_eq!(state.payoff_month, None);
    }
}
