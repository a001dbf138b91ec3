//! Exit-sale return scenarios
//!
//! An exit scenario sells the property at the end of a projected year,
//! settles the remaining loan, and measures the whole holding period
//! against the cash originally invested.

use crate::error::ExitError;
use crate::metrics::{Metric, UndefinedReason};
use crate::normalize::AnalysisInput;
use crate::projection::ProjectionResult;
use serde::{Deserialize, Serialize};

/// Outcome of selling at the end of one projected year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitScenario {
    pub exit_year: u32,
    pub sale_price: f64,
    pub selling_cost_rate: f64,
    pub selling_costs: f64,
    /// Sale price net of selling costs and the remaining loan balance
    pub net_sale_proceeds: f64,
    /// Whole-period profit over cash invested
    pub total_return: Metric,
    /// Geometric per-year rate implied by the total return
    pub annualized_return: Metric,
}

/// Prices exit scenarios against a finished projection
pub struct ExitCalculator {
    selling_cost_rate: f64,
}

impl ExitCalculator {
    pub fn new(selling_cost_rate: f64) -> Self {
        Self { selling_cost_rate }
    }

    /// Price a sale at the end of `exit_year`
    ///
    /// The year must fall inside the projected horizon.
    pub fn scenario(
        &self,
        input: &AnalysisInput,
        projection: &ProjectionResult,
        exit_year: u32,
    ) -> Result<ExitScenario, ExitError> {
        let snapshot =
            projection
                .snapshot_for_year(exit_year)
                .ok_or(ExitError::InvalidExitYear {
                    requested: exit_year,
                    horizon: projection.snapshots.len() as u32,
                })?;

        let sale_price = snapshot.property_value;
        let selling_costs = sale_price * self.selling_cost_rate;
        let net_sale_proceeds = sale_price - selling_costs - snapshot.loan_balance;

        let invested = input.financing.total_cash_invested;
        let total_return = Metric::ratio(
            net_sale_proceeds + snapshot.cumulative_cash_flow - invested,
            invested,
            UndefinedReason::ZeroCashInvested,
        );

        Ok(ExitScenario {
            exit_year,
            sale_price,
            selling_cost_rate: self.selling_cost_rate,
            selling_costs,
            net_sale_proceeds,
            total_return,
            annualized_return: annualize(total_return, exit_year),
        })
    }

    /// Price several exit years, preserving the requested order
    pub fn scenarios(
        &self,
        input: &AnalysisInput,
        projection: &ProjectionResult,
        exit_years: &[u32],
    ) -> Result<Vec<ExitScenario>, ExitError> {
        exit_years
            .iter()
            .map(|&year| self.scenario(input, projection, year))
            .collect()
    }
}

/// Convert a whole-period return into a per-year rate
///
/// A loss deeper than the invested basis has no real geometric rate, so it
/// stays undefined rather than producing NaN.
fn annualize(total_return: Metric, years: u32) -> Metric {
    match total_return {
        Metric::Defined(total) => {
            let base = 1.0 + total;
            if base < 0.0 {
                Metric::Undefined(UndefinedReason::LossExceedsBasis)
            } else {
                Metric::Defined(base.powf(1.0 / years as f64) - 1.0)
            }
        }
        undefined => undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssumptionOverrides;
    use crate::mortgage::amortize;
    use crate::normalize::InputNormalizer;
    use crate::projection::{ProjectionConfig, ProjectionEngine};
    use crate::property::{FinancingInput, PropertyInput};
    use approx::assert_relative_eq;

    fn project(
        property: PropertyInput,
        financing: FinancingInput,
        overrides: Option<&AssumptionOverrides>,
        horizon: u32,
    ) -> (AnalysisInput, ProjectionResult) {
        let input = InputNormalizer::new()
            .normalize(&property, &financing, overrides)
            .unwrap();
        let schedule = amortize(
            input.financing.loan_amount,
            input.financing.annual_interest_rate,
            input.financing.loan_term_years,
        );
        let projection = ProjectionEngine::new(ProjectionConfig {
            horizon_years: horizon,
        })
        .project(&input, &schedule);
        (input, projection)
    }

    fn flat_overrides() -> AssumptionOverrides {
        AssumptionOverrides {
            vacancy_rate: Some(0.0),
            rent_growth_rate: Some(0.0),
            expense_inflation_rate: Some(0.0),
            appreciation_rate: Some(0.0),
            service_charge_per_sqft: Some(0.0),
            maintenance_rate: Some(0.0),
            management_fee_rate: Some(0.0),
        }
    }

    fn fee_free_cash_purchase() -> FinancingInput {
        let mut financing = FinancingInput::cash_purchase();
        financing.dld_fee_rate = Some(0.0);
        financing.agent_fee_rate = Some(0.0);
        financing.mortgage_reg_fee_rate = Some(0.0);
        financing
    }

    #[test]
    fn test_flat_cash_exit_arithmetic() {
        let overrides = flat_overrides();
        let (input, projection) = project(
            PropertyInput::new(300_000.0, 25_000.0),
            fee_free_cash_purchase(),
            Some(&overrides),
            15,
        );

        let exit = ExitCalculator::new(0.02)
            .scenario(&input, &projection, 12)
            .unwrap();

        assert!((exit.sale_price - 300_000.0).abs() < 1e-9);
        assert!((exit.selling_costs - 6_000.0).abs() < 1e-9);
        assert!((exit.net_sale_proceeds - 294_000.0).abs() < 1e-9);

        // 294,000 proceeds + 300,000 rent collected - 300,000 invested
        let total = exit.total_return.value().unwrap();
        assert!((total - 0.98).abs() < 1e-9);

        let annualized = exit.annualized_return.value().unwrap();
        assert_relative_eq!(
            annualized,
            1.98_f64.powf(1.0 / 12.0) - 1.0,
            max_relative = 1e-12
        );
        assert!(annualized > 0.0 && annualized < total);
    }

    #[test]
    fn test_exit_year_must_be_projected() {
        let overrides = flat_overrides();
        let (input, projection) = project(
            PropertyInput::new(300_000.0, 25_000.0),
            fee_free_cash_purchase(),
            Some(&overrides),
            5,
        );
        let calculator = ExitCalculator::new(0.02);

        let too_late = calculator.scenario(&input, &projection, 6).unwrap_err();
        assert_eq!(
            too_late,
            ExitError::InvalidExitYear {
                requested: 6,
                horizon: 5
            }
        );

        let year_zero = calculator.scenario(&input, &projection, 0).unwrap_err();
        assert_eq!(
            year_zero,
            ExitError::InvalidExitYear {
                requested: 0,
                horizon: 5
            }
        );
    }

    #[test]
    fn test_year_one_annualized_equals_total() {
        let (input, projection) = project(
            PropertyInput::new(1_500_000.0, 120_000.0),
            FinancingInput::new(0.25, 0.045, 25),
            None,
            5,
        );

        let exit = ExitCalculator::new(0.02)
            .scenario(&input, &projection, 1)
            .unwrap();

        let total = exit.total_return.value().unwrap();
        let annualized = exit.annualized_return.value().unwrap();
        assert!((annualized - total).abs() < 1e-12);
    }

    #[test]
    fn test_zero_cash_invested_propagates() {
        let mut financing = FinancingInput::new(0.0, 0.05, 25);
        financing.dld_fee_rate = Some(0.0);
        financing.agent_fee_rate = Some(0.0);
        financing.mortgage_reg_fee_rate = Some(0.0);

        let (input, projection) = project(
            PropertyInput::new(1_000_000.0, 80_000.0),
            financing,
            None,
            5,
        );

        let exit = ExitCalculator::new(0.02)
            .scenario(&input, &projection, 5)
            .unwrap();

        assert_eq!(
            exit.total_return,
            Metric::Undefined(UndefinedReason::ZeroCashInvested)
        );
        assert_eq!(
            exit.annualized_return,
            Metric::Undefined(UndefinedReason::ZeroCashInvested)
        );
    }

    #[test]
    fn test_loss_beyond_basis_has_no_annual_rate() {
        // Thin 5% equity, collapsing values, deep negative carry: the loss
        // is a large multiple of the 50,000 put in
        let mut financing = FinancingInput::new(0.05, 0.05, 25);
        financing.dld_fee_rate = Some(0.0);
        financing.agent_fee_rate = Some(0.0);
        financing.mortgage_reg_fee_rate = Some(0.0);
        let overrides = AssumptionOverrides {
            appreciation_rate: Some(-0.15),
            ..Default::default()
        };

        let (input, projection) = project(
            PropertyInput::new(1_000_000.0, 10_000.0),
            financing,
            Some(&overrides),
            5,
        );

        let exit = ExitCalculator::new(0.02)
            .scenario(&input, &projection, 5)
            .unwrap();

        assert!(exit.total_return.value().unwrap() < -1.0);
        assert_eq!(
            exit.annualized_return,
            Metric::Undefined(UndefinedReason::LossExceedsBasis)
        );
    }

    #[test]
    fn test_multiple_exits_keep_request_order() {
        let (input, projection) = project(
            PropertyInput::new(1_500_000.0, 120_000.0),
            FinancingInput::new(0.25, 0.045, 25),
            None,
            10,
        );

        let exits = ExitCalculator::new(0.02)
            .scenarios(&input, &projection, &[3, 7, 10])
            .unwrap();

        assert_eq!(exits.len(), 3);
        assert_eq!(exits[0].exit_year, 3);
        assert_eq!(exits[1].exit_year, 7);
        assert_eq!(exits[2].exit_year, 10);
        // Later sales carry more appreciation and more paid-down principal
        assert!(exits[2].net_sale_proceeds > exits[0].net_sale_proceeds);
    }
}
