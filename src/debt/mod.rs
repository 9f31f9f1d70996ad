//! Debt records, input screening, and portfolio loading

mod data;
pub mod loader;

pub use data::{validate_debts, Debt, RejectReason, RejectedDebt, ValidatedDebts};
pub use loader::{load_debts, load_debts_from_reader, load_default_portfolio};
