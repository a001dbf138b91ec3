//! Property and financing input structures

use serde::{Deserialize, Serialize};

/// A residential property under analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyInput {
    /// Purchase price (must be positive)
    pub purchase_price: f64,

    /// Contracted gross annual rent
    pub annual_rent: f64,

    /// Built-up area in square feet; drives the service charge when known
    #[serde(default)]
    pub size_sqft: Option<f64>,

    /// Free-form location tag, echoed into reports and never used in a formula
    #[serde(default)]
    pub location: Option<String>,
}

impl PropertyInput {
    /// Create a property with the two required figures
    pub fn new(purchase_price: f64, annual_rent: f64) -> Self {
        Self {
            purchase_price,
            annual_rent,
            size_sqft: None,
            location: None,
        }
    }
}

/// Financing terms for the purchase
///
/// The loan amount is never an input: it is always derived as
/// `purchase_price * (1 - down_payment_ratio)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingInput {
    /// Fraction of the price paid upfront; 1.0 is a cash purchase
    pub down_payment_ratio: f64,

    /// Annual mortgage interest rate as a fraction (ignored when no loan)
    #[serde(default)]
    pub annual_interest_rate: f64,

    /// Loan term in years; may be 0 for a cash purchase
    #[serde(default)]
    pub loan_term_years: u32,

    /// Transfer-fee rate override, fraction of price
    #[serde(default)]
    pub dld_fee_rate: Option<f64>,

    /// Agency-commission rate override, fraction of price
    #[serde(default)]
    pub agent_fee_rate: Option<f64>,

    /// Mortgage-registration rate override, fraction of the loan
    #[serde(default)]
    pub mortgage_reg_fee_rate: Option<f64>,
}

impl FinancingInput {
    /// Create mortgage financing with the default closing-cost table
    pub fn new(down_payment_ratio: f64, annual_interest_rate: f64, loan_term_years: u32) -> Self {
        Self {
            down_payment_ratio,
            annual_interest_rate,
            loan_term_years,
            dld_fee_rate: None,
            agent_fee_rate: None,
            mortgage_reg_fee_rate: None,
        }
    }

    /// Create an all-cash purchase (no loan, no mortgage registration)
    pub fn cash_purchase() -> Self {
        Self::new(1.0, 0.0, 0)
    }
}
