//! Core simulation loop advancing the debt set one calendar month at a time

use super::schedule::{MonthlyBreakdown, PaymentRow, PayoffOutcome};
use super::state::DebtState;
use crate::strategy::OrderedDebt;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of months a run may simulate before stopping
///
/// Bounds plans that never converge, e.g. a minimum payment smaller than the
/// monthly interest accrual. Hitting the cap is a valid terminal state, not
/// an error.
pub const HORIZON_MONTHS: u32 = 600;

/// Payment cadence label supplied by callers
///
/// Informational only: the simulator always advances one calendar month per
/// iteration regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayInterval {
    Monthly,
    Biweekly,
    Weekly,
}

impl fmt::Display for PayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayInterval::Monthly => write!(f, "monthly"),
            PayInterval::Biweekly => write!(f, "biweekly"),
            PayInterval::Weekly => write!(f, "weekly"),
        }
    }
}

/// Error returned when parsing an unrecognized interval label
#[derive(Debug, Clone, Error)]
#[error("unknown pay interval `{0}`, expected monthly, biweekly, or weekly")]
pub struct ParsePayIntervalError(String);

impl FromStr for PayInterval {
    type Err = ParsePayIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monthly" => Ok(PayInterval::Monthly),
            "biweekly" => Ok(PayInterval::Biweekly),
            "weekly" => Ok(PayInterval::Weekly),
            _ => Err(ParsePayIntervalError(s.to_string())),
        }
    }
}

/// Configuration for a payoff run
#[derive(Debug, Clone)]
pub struct PayoffConfig {
    /// First simulated calendar month
    pub start_date: NaiveDate,

    /// Default surplus applied each month on top of minimum payments
    pub extra_payment: f64,

    /// Per-month surplus overrides keyed by "YYYY-MM"
    pub overrides: BTreeMap<String, f64>,

    /// Hard cap on the number of simulated months
    pub horizon_months: u32,

    /// Declared payment cadence (label only, see [`PayInterval`])
    pub pay_interval: PayInterval,
}

impl PayoffConfig {
    /// Create a config with no surplus and the default horizon
    pub fn new(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            extra_payment: 0.0,
            overrides: BTreeMap::new(),
            horizon_months: HORIZON_MONTHS,
            pay_interval: PayInterval::Monthly,
        }
    }

    /// Calendar date of the given 0-based month index
    pub fn month_date(&self, month: u32) -> NaiveDate {
        self.start_date + Months::new(month)
    }

    /// Surplus pool for the month at the given date
    fn surplus_for(&self, date: NaiveDate) -> f64 {
        let key = date.format("%Y-%m").to_string();
        self.overrides.get(&key).copied().unwrap_or(self.extra_payment)
    }
}

/// Raw output of a simulation run, before timeline assembly
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Final per-debt states, in ledger storage order
    pub final_states: Vec<DebtState>,

    /// Number of months actually simulated
    pub months_simulated: u32,

    /// Interest accrued across all debts and months
    pub total_interest: f64,

    /// Month-by-month schedule, ordered by month index
    pub breakdown: Vec<MonthlyBreakdown>,

    /// How the run ended
    pub outcome: PayoffOutcome,
}

/// Month-by-month payoff simulator
pub struct PayoffSimulator {
    config: PayoffConfig,
}

impl PayoffSimulator {
    /// Create a simulator with the given run configuration
    pub fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PayoffConfig {
        &self.config
    }

    /// Run the simulation until every debt settles or the horizon cap is hit
    pub fn run(&self, debts: &[OrderedDebt]) -> SimulationRun {
        let mut states: Vec<DebtState> = debts.iter().map(DebtState::from_ordered).collect();

        // Surplus is handed out in ascending priority, independent of
        // storage order.
        let mut by_priority: Vec<usize> = (0..states.len()).collect();
        by_priority.sort_by_key(|&i| states[i].priority);

        let mut breakdown = Vec::new();
        let mut total_interest = 0.0;
        let mut month = 0;

        while month < self.config.horizon_months && states.iter().any(DebtState::is_active) {
            let row = self.advance_month(month, &mut states, &by_priority, &mut total_interest);
            breakdown.push(row);
            month += 1;
        }

        let outcome = if states.iter().any(DebtState::is_active) {
            PayoffOutcome::HorizonExceeded
        } else {
            PayoffOutcome::Completed
        };

        SimulationRun {
            final_states: states,
            months_simulated: month,
            total_interest,
            breakdown,
            outcome,
        }
    }

    /// Advance every debt by one calendar month
    fn advance_month(
        &self,
        month: u32,
        states: &mut [DebtState],
        by_priority: &[usize],
        total_interest: &mut f64,
    ) -> MonthlyBreakdown {
        let date = self.config.month_date(month);
        let mut surplus = self.config.surplus_for(date);

        let mut payments: Vec<PaymentRow> = Vec::new();
        let mut total_paid = 0.0;
        let mut month_interest = 0.0;

        // Interest accrual and minimum payments, in storage order.
        for state in states.iter_mut() {
            if !state.is_active() {
                continue;
            }

            let interest = state.current_balance * state.monthly_rate();
            state.current_balance += interest;
            state.interest_paid += interest;
            *total_interest += interest;
            month_interest += interest;

            let minimum = state.min_payment.min(state.current_balance);
            state.current_balance -= minimum;
            state.settle_if_cleared(month);
            total_paid += minimum;

            payments.push(PaymentRow {
                debt_id: state.id,
                minimum_portion: minimum,
                surplus_portion: 0.0,
                interest_accrued: interest,
                remaining_balance: state.current_balance,
            });
        }

        // The surplus pool drains into debts in ascending priority order.
        for &idx in by_priority {
            if surplus <= 0.0 {
                break;
            }
            let state = &mut states[idx];
            if !state.is_active() {
                continue;
            }

            let applied = surplus.min(state.current_balance);
            state.current_balance -= applied;
            surplus -= applied;
            total_paid += applied;
            state.settle_if_cleared(month);

            let remaining = state.current_balance;
            if let Some(row) = payments.iter_mut().find(|r| r.debt_id == state.id) {
                row.surplus_portion = applied;
                row.remaining_balance = remaining;
            }
        }

        let remaining_balance = states.iter().map(|s| s.current_balance).sum();

        MonthlyBreakdown {
            month,
            date,
            payments,
            total_paid,
            total_interest: month_interest,
            remaining_balance,
        }
    }
}
