//! Mortgage amortization: payment formula and full schedules

mod amortizer;
mod schedule;

pub use amortizer::{amortize, monthly_payment};
pub use schedule::{AmortizationRow, AmortizationSchedule};
