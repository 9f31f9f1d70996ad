//! Monthly schedule rows produced by the simulator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How a simulation run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffOutcome {
    /// Every debt reached zero balance
    Completed,
    /// The horizon cap was hit with at least one debt still open
    HorizonExceeded,
}

/// Payment applied to one debt in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    pub debt_id: u32,

    /// Minimum payment actually applied, capped at the post-interest balance
    pub minimum_portion: f64,

    /// Share of the month's surplus pool applied to this debt
    pub surplus_portion: f64,

    /// Interest accrued on this debt this month
    pub interest_accrued: f64,

    /// Balance left on this debt after all payments this month
    pub remaining_balance: f64,
}

impl PaymentRow {
    /// Total amount paid on this debt this month
    pub fn total_paid(&self) -> f64 {
        self.minimum_portion + self.surplus_portion
    }
}

/// One simulated month across all debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    /// 0-based month index
    pub month: u32,

    /// Calendar month this row covers
    pub date: NaiveDate,

    /// Per-debt payment rows, one for each debt still open this month
    pub payments: Vec<PaymentRow>,

    /// Sum of minimum and surplus portions paid this month
    pub total_paid: f64,

    /// Sum of interest accrued across all debts this month
    pub total_interest: f64,

    /// Balance left across all debts at the end of the month
    pub remaining_balance: f64,
}
