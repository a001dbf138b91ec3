//! Purchase closing-cost rate table

use crate::property::FinancingInput;
use serde::{Deserialize, Serialize};

/// Closing-cost rates applied at purchase
///
/// The table is a configuration value supplied by the caller; the default
/// matches the Dubai fee structure. Percentage-of-price fees and the
/// percentage-of-loan registration fee are kept separate so a cash purchase
/// never pays the latter. All rates are flat fractions (VAT excluded).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosingCostSchedule {
    /// Land-department transfer fee, fraction of the purchase price
    pub dld_fee_rate: f64,

    /// Buyer-side agency commission, fraction of the purchase price
    pub agent_fee_rate: f64,

    /// Mortgage registration fee, fraction of the loan amount
    pub mortgage_reg_fee_rate: f64,
}

impl ClosingCostSchedule {
    /// Default Dubai fee table
    pub fn default_dubai() -> Self {
        Self {
            dld_fee_rate: 0.04,            // 4% DLD transfer fee
            agent_fee_rate: 0.02,          // 2% agency commission
            mortgage_reg_fee_rate: 0.0025, // 0.25% of the loan
        }
    }

    /// Resolve the effective rates for one analysis, applying any
    /// per-analysis overrides carried on the financing input
    pub fn resolve(&self, financing: &FinancingInput) -> ResolvedClosingRates {
        ResolvedClosingRates {
            dld_fee_rate: financing.dld_fee_rate.unwrap_or(self.dld_fee_rate),
            agent_fee_rate: financing.agent_fee_rate.unwrap_or(self.agent_fee_rate),
            mortgage_reg_fee_rate: financing
                .mortgage_reg_fee_rate
                .unwrap_or(self.mortgage_reg_fee_rate),
        }
    }
}

impl Default for ClosingCostSchedule {
    fn default() -> Self {
        Self::default_dubai()
    }
}

/// Effective closing rates after overrides
#[derive(Debug, Clone, Copy)]
pub struct ResolvedClosingRates {
    pub dld_fee_rate: f64,
    pub agent_fee_rate: f64,
    pub mortgage_reg_fee_rate: f64,
}

impl ResolvedClosingRates {
    /// Total closing costs for a given price and loan amount
    pub fn total(&self, purchase_price: f64, loan_amount: f64) -> f64 {
        purchase_price * (self.dld_fee_rate + self.agent_fee_rate)
            + loan_amount * self.mortgage_reg_fee_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let schedule = ClosingCostSchedule::default_dubai();
        assert_eq!(schedule.dld_fee_rate, 0.04);
        assert_eq!(schedule.agent_fee_rate, 0.02);
        assert_eq!(schedule.mortgage_reg_fee_rate, 0.0025);
    }

    #[test]
    fn test_overrides_take_precedence() {
        let schedule = ClosingCostSchedule::default_dubai();
        let mut financing = FinancingInput::new(0.20, 0.045, 25);
        financing.agent_fee_rate = Some(0.0);

        let rates = schedule.resolve(&financing);
        assert_eq!(rates.dld_fee_rate, 0.04);
        assert_eq!(rates.agent_fee_rate, 0.0);
    }

    #[test]
    fn test_total_splits_price_and_loan_bases() {
        let rates = ClosingCostSchedule::default_dubai().resolve(&FinancingInput::new(0.25, 0.045, 25));

        // 1,000,000 price with a 750,000 loan:
        // 4% + 2% of price = 60,000; 0.25% of loan = 1,875
        let total = rates.total(1_000_000.0, 750_000.0);
        assert!((total - 61_875.0).abs() < 1e-9);

        // Cash purchase pays no mortgage registration
        let cash_total = rates.total(1_000_000.0, 0.0);
        assert!((cash_total - 60_000.0).abs() < 1e-9);
    }
}
