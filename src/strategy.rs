//! Payoff ordering strategies
//!
//! A strategy decides which debt receives surplus payment first. The orderer
//! assigns each debt a priority once per run; the priority is never changed
//! afterwards.

use crate::debt::Debt;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Surplus allocation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest balance first
    Snowball,
    /// Highest interest rate first
    Avalanche,
    /// Caller-supplied order, unchanged
    Custom,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Snowball => write!(f, "snowball"),
            Strategy::Avalanche => write!(f, "avalanche"),
            Strategy::Custom => write!(f, "custom"),
        }
    }
}

/// Error returned when parsing an unrecognized strategy name
#[derive(Debug, Clone, Error)]
#[error("unknown strategy `{0}`, expected snowball, avalanche, or custom")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "snowball" => Ok(Strategy::Snowball),
            "avalanche" => Ok(Strategy::Avalanche),
            "custom" => Ok(Strategy::Custom),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// A debt with its surplus allocation rank for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedDebt {
    pub debt: Debt,

    /// Position in the payoff queue; 0 receives surplus first
    pub priority: u32,
}

/// Rank debts for surplus allocation under the given strategy.
///
/// The sort is stable: debts tied on the sort key keep their original
/// relative position. Priorities are assigned 0..n-1 by resulting position.
/// The input is never mutated.
pub fn reorder(debts: &[Debt], strategy: Strategy) -> Vec<OrderedDebt> {
    let mut ordered: Vec<Debt> = debts.to_vec();
    match strategy {
        Strategy::Snowball => ordered.sort_by(|a, b| a.balance.total_cmp(&b.balance)),
        Strategy::Avalanche => {
            ordered.sort_by(|a, b| b.annual_rate_pct.total_cmp(&a.annual_rate_pct))
        }
        Strategy::Custom => {}
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(position, debt)| OrderedDebt {
            debt,
            priority: position as u32,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(id: u32, balance: f64, rate: f64) -> Debt {
        Debt::new(id, format!("Debt {}", id), "Credit Card", balance, rate, 25.0)
    }

    #[test]
    fn test_snowball_orders_by_ascending_balance() {
        let debts = vec![debt(1, 3000.0, 6.0), debt(2, 500.0, 24.0), debt(3, 1200.0, 12.0)];
        let ordered = reorder(&debts, Strategy::Snowball);

        let ids: Vec<u32> = ordered.iter().map(|o| o.debt.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_avalanche_orders_by_descending_rate() {
        let debts = vec![debt(1, 3000.0, 6.0), debt(2, 500.0, 24.0), debt(3, 1200.0, 12.0)];
        let ordered = reorder(&debts, Strategy::Avalanche);

        let ids: Vec<u32> = ordered.iter().map(|o| o.debt.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_custom_preserves_caller_order() {
        let debts = vec![debt(9, 3000.0, 6.0), debt(4, 500.0, 24.0)];
        let ordered = reorder(&debts, Strategy::Custom);

        let ids: Vec<u32> = ordered.iter().map(|o| o.debt.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn test_ties_keep_original_position() {
        let debts = vec![debt(1, 500.0, 10.0), debt(2, 500.0, 10.0), debt(3, 500.0, 10.0)];

        for strategy in [Strategy::Snowball, Strategy::Avalanche] {
            let ordered = reorder(&debts, strategy);
            let ids: Vec<u32> = ordered.iter().map(|o| o.debt.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_priorities_are_a_permutation() {
        let debts = vec![debt(1, 3000.0, 6.0), debt(2, 500.0, 24.0), debt(3, 1200.0, 12.0)];
        let ordered = reorder(&debts, Strategy::Avalanche);

        let mut priorities: Vec<u32> = ordered.iter().map(|o| o.priority).collect();
        priorities.sort_unstable();
        assert_eq!(priorities, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(reorder(&[], Strategy::Snowball).is_empty());
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("snowball".parse::<Strategy>().unwrap(), Strategy::Snowball);
        assert_eq!("Avalanche".parse::<Strategy>().unwrap(), Strategy::Avalanche);
        assert_eq!("custom".parse::<Strategy>().unwrap(), Strategy::Custom);
        assert!("hybrid".parse::<Strategy>().is_err());
    }
}
