//! Sweep surplus payment levels across all three payoff strategies
//!
//! Outputs a table of months-to-debt-free and total interest for each
//! strategy at each surplus level.

use chrono::NaiveDate;
use debt_payoff::{compare_strategies, load_default_portfolio, CalculationResult, PayoffOutcome};
use rayon::prelude::*;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();
    println!("Loading portfolio from data/debts.csv...");

    let debts = load_default_portfolio().expect("Failed to load portfolio");
    println!("Loaded {} debts in {:?}", debts.len(), start.elapsed());

    let start_date = NaiveDate::from_ymd_opt(2026, 1, 1).expect("valid start date");
    let levels: Vec<f64> = (0..=10).map(|step| f64::from(step) * 50.0).collect();

    println!("Running {} comparisons...", levels.len());
    let sweep_start = Instant::now();

    // Each comparison owns its working set, so the sweep parallelizes
    // without any shared state.
    let comparisons: Vec<_> = levels
        .par_iter()
        .map(|&extra| (extra, compare_strategies(&debts, extra, start_date)))
        .collect();

    println!("Sweep complete in {:?}\n", sweep_start.elapsed());

    println!(
        "{:>8}  {:>24} {:>24} {:>24}",
        "Extra", "Avalanche", "Snowball", "Custom"
    );
    println!("{}", "-".repeat(84));

    for (extra, comparison) in &comparisons {
        println!(
            "{:>8.2}  {:>24} {:>24} {:>24}",
            extra,
            cell(&comparison.avalanche),
            cell(&comparison.snowball),
            cell(&comparison.custom),
        );
    }
}

/// One table cell: months to debt-free and total interest paid
fn cell(result: &CalculationResult) -> String {
    match result.outcome {
        PayoffOutcome::Completed => format!(
            "{} mo / ${:.2}",
            result.total_months, result.total_interest_paid
        ),
        PayoffOutcome::HorizonExceeded => "no payoff".to_string(),
    }
}
