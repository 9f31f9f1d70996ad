//! Debt records and input screening

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single debt as entered by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// Unique debt identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Category label (e.g. "Credit Card", "Auto")
    pub category: String,

    /// Outstanding balance
    pub balance: f64,

    /// Annual interest rate in percent (e.g. 19.99)
    pub annual_rate_pct: f64,

    /// Contractual minimum payment per month
    pub min_payment: f64,
}

impl Debt {
    /// Create a new debt record
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        balance: f64,
        annual_rate_pct: f64,
        min_payment: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            balance,
            annual_rate_pct,
            min_payment,
        }
    }
}

/// Why an input row was dropped before simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectReason {
    /// Nothing to amortize
    #[error("balance must be positive")]
    NonPositiveBalance,

    /// The payoff loop cannot make progress without a minimum payment
    #[error("minimum payment must be positive")]
    NonPositiveMinPayment,

    /// NaN or infinite numeric field
    #[error("balance, rate, and minimum payment must be finite")]
    NonFiniteField,
}

/// A dropped input row together with the reason it was dropped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedDebt {
    pub debt: Debt,
    pub reason: RejectReason,
}

/// Outcome of screening a caller-supplied debt list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatedDebts {
    /// Rows that enter the simulation, in their original relative order
    pub accepted: Vec<Debt>,

    /// Rows excluded from the run, reported rather than silently dropped
    pub rejected: Vec<RejectedDebt>,
}

/// Screen raw input rows before a run.
///
/// Rows that cannot amortize (non-positive balance or minimum payment) and
/// rows carrying non-finite numbers are returned in `rejected` with a typed
/// reason so collaborators can surface them to the user.
pub fn validate_debts(debts: &[Debt]) -> ValidatedDebts {
    let mut accepted = Vec::with_capacity(debts.len());
    let mut rejected = Vec::new();

    for debt in debts {
        match screen(debt) {
            None => accepted.push(debt.clone()),
            Some(reason) => rejected.push(RejectedDebt {
                debt: debt.clone(),
                reason,
            }),
        }
    }

    ValidatedDebts { accepted, rejected }
}

fn screen(debt: &Debt) -> Option<RejectReason> {
    if !debt.balance.is_finite()
        || !debt.annual_rate_pct.is_finite()
        || !debt.min_payment.is_finite()
    {
        return Some(RejectReason::NonFiniteField);
    }
    if debt.balance <= 0.0 {
        return Some(RejectReason::NonPositiveBalance);
    }
    if debt.min_payment <= 0.0 {
        return Some(RejectReason::NonPositiveMinPayment);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(id: u32, balance: f64, min_payment: f64) -> Debt {
        Debt::new(id, format!("Debt {}", id), "Credit Card", balance, 19.99, min_payment)
    }

    #[test]
    fn test_accepts_well_formed_rows() {
        let debts = vec![debt(1, 4200.0, 95.0), debt(2, 860.0, 35.0)];
        let screened = validate_debts(&debts);

        assert_eq!(screened.accepted.len(), 2);
        assert!(screened.rejected.is_empty());
        // Relative order is preserved
        assert_eq!(screened.accepted[0].id, 1);
        assert_eq!(screened.accepted[1].id, 2);
    }

    #[test]
    fn test_rejects_with_reasons() {
        let debts = vec![
            debt(1, 0.0, 95.0),
            debt(2, 860.0, 0.0),
            debt(3, f64::NAN, 35.0),
            debt(4, 1200.0, 50.0),
        ];
        let screened = validate_debts(&debts);

        assert_eq!(screened.accepted.len(), 1);
        assert_eq!(screened.accepted[0].id, 4);

        assert_eq!(screened.rejected.len(), 3);
        assert_eq!(screened.rejected[0].reason, RejectReason::NonPositiveBalance);
        assert_eq!(screened.rejected[1].reason, RejectReason::NonPositiveMinPayment);
        assert_eq!(screened.rejected[2].reason, RejectReason::NonFiniteField);
    }

    #[test]
    fn test_negative_balance_rejected() {
        let screened = validate_debts(&[debt(1, -500.0, 25.0)]);
        assert!(screened.accepted.is_empty());
        assert_eq!(screened.rejected[0].reason, RejectReason::NonPositiveBalance);
    }
}
