//! Month-by-month payoff simulation

mod engine;
mod schedule;
mod state;
mod timeline;

pub use engine::{
    ParsePayIntervalError, PayInterval, PayoffConfig, PayoffSimulator, SimulationRun,
    HORIZON_MONTHS,
};
pub use schedule::{MonthlyBreakdown, PaymentRow, PayoffOutcome};
pub use state::{DebtState, DebtStatus};
pub use timeline::{build_result, CalculationResult, DebtTimelineEntry};
