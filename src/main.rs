//! Debt Payoff CLI
//!
//! Loads a debt portfolio, runs the payoff projection for one strategy, and
//! prints the monthly schedule, per-debt timeline, and summary metrics.

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use debt_payoff::{
    calculate_debt_payoff, load_debts, PayoffConfig, PayoffOutcome, Strategy, HORIZON_MONTHS,
};
use debt_payoff::payoff::PayInterval;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "debt_payoff", about = "Project a month-by-month debt payoff schedule")]
struct Args {
    /// Path to the portfolio CSV (Id,Name,Category,Balance,Rate,MinPayment)
    #[arg(long, default_value = "data/debts.csv")]
    portfolio: PathBuf,

    /// Ordering strategy: snowball, avalanche, or custom
    #[arg(long, default_value = "avalanche")]
    strategy: Strategy,

    /// Default surplus payment per month on top of minimum payments
    #[arg(long, default_value_t = 0.0)]
    extra: f64,

    /// First simulated month (YYYY-MM-DD)
    #[arg(long, default_value = "2026-01-01")]
    start: NaiveDate,

    /// Per-month surplus override, e.g. --override 2026-06=500 (repeatable)
    #[arg(long = "override", value_name = "YYYY-MM=AMOUNT", value_parser = parse_override)]
    overrides: Vec<(String, f64)>,

    /// Declared payment cadence (monthly, biweekly, weekly); the schedule
    /// always advances one calendar month per iteration
    #[arg(long, default_value = "monthly")]
    interval: PayInterval,

    /// Hard cap on the number of simulated months
    #[arg(long, default_value_t = HORIZON_MONTHS)]
    horizon: u32,

    /// Write the full monthly breakdown to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn parse_override(s: &str) -> Result<(String, f64), String> {
    let (month, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected YYYY-MM=AMOUNT, got `{}`", s))?;
    let amount: f64 = amount
        .parse()
        .map_err(|e| format!("bad amount in `{}`: {}", s, e))?;
    Ok((month.to_string(), amount))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let debts = load_debts(&args.portfolio)
        .with_context(|| format!("failed to load portfolio from {}", args.portfolio.display()))?;

    let mut config = PayoffConfig::new(args.start);
    config.extra_payment = args.extra;
    config.horizon_months = args.horizon;
    config.overrides = args.overrides.into_iter().collect();
    config.pay_interval = args.interval;

    let result = calculate_debt_payoff(&debts, args.strategy, &config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Debt Payoff v0.1.0");
    println!("==================\n");
    println!("Portfolio: {} ({} debts)", args.portfolio.display(), debts.len());
    println!("Strategy:  {}", args.strategy);
    println!("Surplus:   ${:.2}/month", args.extra);
    println!();

    for rejected in &result.excluded {
        println!(
            "  excluded: {} ({}) - {}",
            rejected.debt.name, rejected.debt.id, rejected.reason
        );
    }

    // Print first 24 months to console
    println!("Schedule ({} months):", result.total_months);
    println!(
        "{:>5} {:>10} {:>12} {:>12} {:>14}",
        "Month", "Date", "Paid", "Interest", "Remaining"
    );
    println!("{}", "-".repeat(58));

    for row in result.monthly_breakdown.iter().take(24) {
        println!(
            "{:>5} {:>10} {:>12.2} {:>12.2} {:>14.2}",
            row.month,
            row.date.format("%Y-%m"),
            row.total_paid,
            row.total_interest,
            row.remaining_balance,
        );
    }

    if result.monthly_breakdown.len() > 24 {
        println!("... ({} more months)", result.monthly_breakdown.len() - 24);
    }

    // Per-debt timeline
    println!("\nTimeline:");
    println!(
        "{:>4} {:<20} {:<14} {:>10} {:>12} {:>10}",
        "Id", "Name", "Category", "End month", "Interest", "Paid off"
    );
    println!("{}", "-".repeat(76));
    for entry in &result.debt_timeline {
        println!(
            "{:>4} {:<20} {:<14} {:>10} {:>12.2} {:>10}",
            entry.debt_id,
            entry.name,
            entry.category,
            entry.end_month,
            entry.total_interest,
            if entry.is_paid_off { "yes" } else { "no" },
        );
    }

    // Write full breakdown to CSV
    if let Some(path) = &args.output {
        write_breakdown(path, &result)
            .with_context(|| format!("failed to write breakdown to {}", path.display()))?;
        println!("\nFull breakdown written to: {}", path.display());
    }

    // Print summary
    println!("\nSummary:");
    println!("  Total Months: {}", result.total_months);
    println!("  Total Interest: ${:.2}", result.total_interest_paid);
    match result.outcome {
        PayoffOutcome::Completed => {
            if let Some(date) = result.debt_free_date {
                println!("  Debt-free: {}", date.format("%B %Y"));
            }
        }
        PayoffOutcome::HorizonExceeded => {
            println!(
                "  Plan does not converge within {} months",
                config.horizon_months
            );
        }
    }

    Ok(())
}

fn write_breakdown(
    path: &std::path::Path,
    result: &debt_payoff::CalculationResult,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Month,Date,DebtId,Minimum,Surplus,Total,Interest,Remaining")?;
    for row in &result.monthly_breakdown {
        for payment in &row.payments {
            writeln!(
                file,
                "{},{},{},{:.8},{:.8},{:.8},{:.8},{:.8}",
                row.month,
                row.date.format("%Y-%m"),
                payment.debt_id,
                payment.minimum_portion,
                payment.surplus_portion,
                payment.total_paid(),
                payment.interest_accrued,
                payment.remaining_balance,
            )?;
        }
    }

    Ok(())
}
