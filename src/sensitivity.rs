//! One-dimensional sensitivity grids over the year-1 economics
//!
//! Each cell clones the validated input, shifts exactly one figure, and
//! re-runs amortization and the yield metrics. The validated baseline is
//! never mutated.

use crate::metrics::{calculate_yields, Metric};
use crate::mortgage::amortize;
use crate::normalize::AnalysisInput;
use serde::{Deserialize, Serialize};

/// Multiplicative shifts applied to annual rent
pub const RENT_DELTAS: [f64; 5] = [-0.20, -0.10, 0.0, 0.10, 0.20];

/// Absolute vacancy rates substituted for the baseline assumption
pub const VACANCY_LEVELS: [f64; 5] = [0.0, 0.05, 0.10, 0.15, 0.20];

/// Additive shifts applied to the annual interest rate
pub const INTEREST_DELTAS: [f64; 5] = [-0.02, -0.01, 0.0, 0.01, 0.02];

/// Input dimension a sensitivity row perturbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityAxis {
    Rent,
    Vacancy,
    InterestRate,
}

impl SensitivityAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityAxis::Rent => "rent",
            SensitivityAxis::Vacancy => "vacancy",
            SensitivityAxis::InterestRate => "interest_rate",
        }
    }
}

/// One cell of the sensitivity grid
///
/// `value` is the shift applied: a rent delta, an absolute vacancy level,
/// or an interest-rate delta, depending on the axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityResult {
    pub axis: SensitivityAxis,
    pub value: f64,
    pub net_cash_flow: f64,
    pub cash_on_cash: Metric,
}

/// Runs the fixed sensitivity grids against one validated input
pub struct SensitivityAnalyzer;

impl SensitivityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate all three axes in a fixed order: rent, vacancy, interest,
    /// each with ascending shift values
    pub fn run(&self, input: &AnalysisInput) -> Vec<SensitivityResult> {
        let mut results =
            Vec::with_capacity(RENT_DELTAS.len() + VACANCY_LEVELS.len() + INTEREST_DELTAS.len());

        for &delta in RENT_DELTAS.iter() {
            let mut shifted = input.clone();
            shifted.property.annual_rent = input.property.annual_rent * (1.0 + delta);
            results.push(evaluate(SensitivityAxis::Rent, delta, &shifted));
        }

        for &level in VACANCY_LEVELS.iter() {
            let mut shifted = input.clone();
            shifted.assumptions.vacancy_rate = level;
            results.push(evaluate(SensitivityAxis::Vacancy, level, &shifted));
        }

        for &delta in INTEREST_DELTAS.iter() {
            let mut shifted = input.clone();
            // Rates cannot go negative, a large downward shift bottoms out at 0
            shifted.financing.annual_interest_rate =
                (input.financing.annual_interest_rate + delta).max(0.0);
            results.push(evaluate(SensitivityAxis::InterestRate, delta, &shifted));
        }

        results
    }
}

impl Default for SensitivityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn evaluate(axis: SensitivityAxis, value: f64, input: &AnalysisInput) -> SensitivityResult {
    let schedule = amortize(
        input.financing.loan_amount,
        input.financing.annual_interest_rate,
        input.financing.loan_term_years,
    );
    let metrics = calculate_yields(input, &schedule);

    SensitivityResult {
        axis,
        value,
        net_cash_flow: metrics.net_cash_flow,
        cash_on_cash: metrics.cash_on_cash,
    }
}
