//! Projection output types

use serde::{Deserialize, Serialize};

/// One projected year of ownership
///
/// `equity` is always `property_value - loan_balance` for the same year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlySnapshot {
    pub year: u32,
    pub gross_rent: f64,
    pub effective_rent: f64,
    pub operating_expenses: f64,
    pub debt_service: f64,
    pub net_cash_flow: f64,
    pub cumulative_cash_flow: f64,
    pub property_value: f64,
    pub loan_balance: f64,
    pub equity: f64,
}

/// Full multi-year projection, one snapshot per year in year order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub snapshots: Vec<YearlySnapshot>,
    /// First year where cumulative cash flow plus equity gain has recovered
    /// the cash invested, `None` if not reached within the horizon
    pub break_even_year: Option<u32>,
}

impl ProjectionResult {
    pub fn snapshot_for_year(&self, year: u32) -> Option<&YearlySnapshot> {
        self.snapshots.iter().find(|s| s.year == year)
    }

    /// Condensed figures for report headlines
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.snapshots.last();
        ProjectionSummary {
            horizon_years: self.snapshots.len() as u32,
            total_net_cash_flow: last.map(|s| s.cumulative_cash_flow).unwrap_or(0.0),
            final_property_value: last.map(|s| s.property_value).unwrap_or(0.0),
            final_loan_balance: last.map(|s| s.loan_balance).unwrap_or(0.0),
            final_equity: last.map(|s| s.equity).unwrap_or(0.0),
            break_even_year: self.break_even_year,
        }
    }
}

/// End-of-horizon totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub total_net_cash_flow: f64,
    pub final_property_value: f64,
    pub final_loan_balance: f64,
    pub final_equity: f64,
    pub break_even_year: Option<u32>,
}
