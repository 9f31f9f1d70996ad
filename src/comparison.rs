//! Composed payoff runs and side-by-side strategy comparison

use crate::debt::{validate_debts, Debt};
use crate::payoff::{build_result, CalculationResult, PayoffConfig, PayoffSimulator};
use crate::strategy::{reorder, Strategy};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Run the full pipeline for one strategy: screen the input, assign the
/// payoff order, simulate month by month, and assemble the result.
///
/// The input list is copied defensively and never mutated.
pub fn calculate_debt_payoff(
    debts: &[Debt],
    strategy: Strategy,
    config: &PayoffConfig,
) -> CalculationResult {
    let screened = validate_debts(debts);
    if !screened.rejected.is_empty() {
        log::warn!(
            "excluded {} of {} debt row(s) from the run",
            screened.rejected.len(),
            debts.len()
        );
    }

    let ordered = reorder(&screened.accepted, strategy);
    let run = PayoffSimulator::new(config.clone()).run(&ordered);
    build_result(run, config.start_date, screened.rejected)
}

/// Results of running the same plan under each ordering strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: CalculationResult,
    pub snowball: CalculationResult,
    pub custom: CalculationResult,
}

/// Run the same debts and surplus under all three strategies.
///
/// Each run owns a private copy of the working set, so the three results
/// share no state with each other or with the caller's list.
pub fn compare_strategies(
    debts: &[Debt],
    extra_payment: f64,
    start_date: NaiveDate,
) -> StrategyComparison {
    let config = PayoffConfig {
        extra_payment,
        ..PayoffConfig::new(start_date)
    };

    StrategyComparison {
        avalanche: calculate_debt_payoff(debts, Strategy::Avalanche, &config),
        snowball: calculate_debt_payoff(debts, Strategy::Snowball, &config),
        custom: calculate_debt_payoff(debts, Strategy::Custom, &config),
    }
}
