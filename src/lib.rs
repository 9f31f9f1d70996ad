//! Debt Payoff - projection engine for debt amortization schedules
//!
//! This library provides:
//! - Month-by-month amortization of a debt portfolio
//! - Snowball, avalanche, and custom payoff ordering
//! - Per-month surplus payment overrides
//! - Side-by-side strategy comparison
//! - Portfolio loading from CSV

pub mod comparison;
pub mod debt;
pub mod payoff;
pub mod strategy;

// Re-export commonly used types
pub use comparison::{calculate_debt_payoff, compare_strategies, StrategyComparison};
pub use debt::{load_debts, load_default_portfolio, validate_debts, Debt, RejectedDebt};
pub use payoff::{
    CalculationResult, DebtTimelineEntry, MonthlyBreakdown, PayoffConfig, PayoffOutcome,
    PayoffSimulator, HORIZON_MONTHS,
};
pub use strategy::{reorder, OrderedDebt, Strategy};
