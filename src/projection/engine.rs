//! Year-by-year ownership projection

use crate::mortgage::AmortizationSchedule;
use crate::normalize::AnalysisInput;
use super::snapshot::{ProjectionResult, YearlySnapshot};
use serde::{Deserialize, Serialize};

/// Horizon used when the caller does not pick one
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Longest supported projection horizon
pub const MAX_HORIZON_YEARS: u32 = 20;

/// Configuration for a projection run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of years to project
    pub horizon_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

/// Projects rent, expenses, debt and equity over the holding period
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a single property
    ///
    /// Rent and expenses compound from year 2 onward (exponent `year - 1`);
    /// appreciation compounds from the purchase itself (exponent `year`).
    pub fn project(
        &self,
        input: &AnalysisInput,
        schedule: &AmortizationSchedule,
    ) -> ProjectionResult {
        let base_rent = input.property.annual_rent;
        let base_expenses = input.base_operating_expenses();
        let assumptions = &input.assumptions;

        let mut snapshots = Vec::with_capacity(self.config.horizon_years as usize);
        let mut cumulative_cash_flow = 0.0;
        let mut break_even_year = None;

        for year in 1..=self.config.horizon_years {
            let gross_rent =
                base_rent * (1.0 + assumptions.rent_growth_rate).powi((year - 1) as i32);
            let effective_rent = gross_rent * (1.0 - assumptions.vacancy_rate);
            let operating_expenses =
                base_expenses * (1.0 + assumptions.expense_inflation_rate).powi((year - 1) as i32);
            let debt_service = schedule.debt_service_for_year(year);
            let net_cash_flow = effective_rent - operating_expenses - debt_service;
            cumulative_cash_flow += net_cash_flow;

            let property_value = input.property.purchase_price
                * (1.0 + assumptions.appreciation_rate).powi(year as i32);
            let loan_balance = schedule.balance_at_end_of_year(year);
            let equity = property_value - loan_balance;

            // Break even once cash received plus equity built since purchase
            // covers the cash put in
            let equity_gain = equity - input.financing.down_payment;
            if break_even_year.is_none()
                && cumulative_cash_flow + equity_gain >= input.financing.total_cash_invested
            {
                break_even_year = Some(year);
            }

            snapshots.push(YearlySnapshot {
                year,
                gross_rent,
                effective_rent,
                operating_expenses,
                debt_service,
                net_cash_flow,
                cumulative_cash_flow,
                property_value,
                loan_balance,
                equity,
            });
        }

        ProjectionResult {
            snapshots,
            break_even_year,
        }
    }
}
