//! Assembles final ledger state into a presentation-ready result

use super::engine::SimulationRun;
use super::schedule::{MonthlyBreakdown, PayoffOutcome};
use super::state::{DebtState, DebtStatus};
use crate::debt::RejectedDebt;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lifecycle summary for one debt across the whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtTimelineEntry {
    pub debt_id: u32,
    pub name: String,
    pub category: String,

    /// Always zero: every debt accrues interest from the first month, even
    /// while waiting for surplus allocation
    pub start_month: u32,

    /// 1-based payoff month, or the number of months simulated when the
    /// debt is still open (signaling the horizon was exceeded)
    pub end_month: u32,

    /// Balance the debt entered the run with
    pub original_balance: f64,

    /// Interest accrued on this debt over the run
    pub total_interest: f64,

    pub is_paid_off: bool,
}

/// Full output of a payoff calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// How the run ended
    pub outcome: PayoffOutcome,

    /// Calendar month in which the last debt was cleared; `None` when the
    /// run ended at the horizon with balances remaining
    pub debt_free_date: Option<NaiveDate>,

    /// Interest accrued across all debts and months
    pub total_interest_paid: f64,

    /// Number of months simulated
    pub total_months: u32,

    /// One entry per debt that entered the run
    pub debt_timeline: Vec<DebtTimelineEntry>,

    /// The full month-by-month schedule
    pub monthly_breakdown: Vec<MonthlyBreakdown>,

    /// Input rows dropped before simulation, with the reason for each
    pub excluded: Vec<RejectedDebt>,
}

/// Build the caller-facing result from a finished run
pub fn build_result(
    run: SimulationRun,
    start_date: NaiveDate,
    excluded: Vec<RejectedDebt>,
) -> CalculationResult {
    let debt_free_date = debt_free_date(&run.final_states, start_date);

    let debt_timeline = run
        .final_states
        .iter()
        .map(|state| DebtTimelineEntry {
            debt_id: state.id,
            name: state.name.clone(),
            category: state.category.clone(),
            start_month: 0,
            end_month: state.payoff_month.unwrap_or(run.months_simulated),
            original_balance: state.initial_balance,
            total_interest: state.interest_paid,
            is_paid_off: state.status == DebtStatus::PaidOff,
        })
        .collect();

    CalculationResult {
        outcome: run.outcome,
        debt_free_date,
        total_interest_paid: run.total_interest,
        total_months: run.months_simulated,
        debt_timeline,
        monthly_breakdown: run.breakdown,
        excluded,
    }
}

/// Latest payoff month as a calendar date, if every debt settled
fn debt_free_date(states: &[DebtState], start_date: NaiveDate) -> Option<NaiveDate> {
    let mut latest: Option<u32> = None;
    for state in states {
        match state.payoff_month {
            Some(month) => latest = latest.max(Some(month)),
            None => return None,
        }
    }
    // payoff_month is 1-based; the debt cleared during month index
    // payoff_month - 1, which is the month the date should name.
    latest.map(|month| start_date + Months::new(month - 1))
}
