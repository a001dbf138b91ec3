//! Year-1 yield metrics
//!
//! Every ratio is computed from the normalized bundle's first-year economics.
//! Ratios whose denominator is zero are reported as undefined with a reason
//! instead of panicking or emitting infinities; this is reachable, e.g. a
//! fully financed purchase with all closing rates at zero invests no cash.

use crate::mortgage::AmortizationSchedule;
use crate::normalize::AnalysisInput;
use serde::{Deserialize, Serialize};

/// Why a ratio has no defined value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    ZeroCashInvested,
    ZeroPurchasePrice,
    LossExceedsBasis,
}

/// A ratio metric that may be undefined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Metric {
    Defined(f64),
    Undefined(UndefinedReason),
}

impl Metric {
    /// Divide, or record why the ratio cannot exist
    pub fn ratio(numerator: f64, denominator: f64, reason: UndefinedReason) -> Self {
        if denominator == 0.0 {
            Metric::Undefined(reason)
        } else {
            Metric::Defined(numerator / denominator)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Metric::Defined(v) => Some(*v),
            Metric::Undefined(_) => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Metric::Defined(_))
    }
}

/// Headline year-1 ratios plus the figures they were derived from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldMetrics {
    pub effective_rent: f64,
    pub operating_expenses: f64,
    pub noi: f64,
    pub annual_debt_service: f64,
    pub net_cash_flow: f64,
    pub total_cash_invested: f64,

    /// Annual rent over purchase price
    pub gross_yield: Metric,
    /// Rent net of operating costs over total cash invested
    pub net_yield: Metric,
    /// NOI over purchase price, financing excluded
    pub cap_rate: Metric,
    /// Year-1 net cash flow over total cash invested
    pub cash_on_cash: Metric,
}

impl YieldMetrics {
    /// Year-1 figures divided into monthly terms
    pub fn monthly_breakdown(&self) -> MonthlyBreakdown {
        MonthlyBreakdown {
            effective_rent: self.effective_rent / 12.0,
            operating_expenses: self.operating_expenses / 12.0,
            debt_service: self.annual_debt_service / 12.0,
            net_cash_flow: self.net_cash_flow / 12.0,
        }
    }
}

/// Month-sized view of the first year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub effective_rent: f64,
    pub operating_expenses: f64,
    pub debt_service: f64,
    pub net_cash_flow: f64,
}

/// Compute all year-1 yield metrics for a normalized input
pub fn calculate_yields(input: &AnalysisInput, schedule: &AmortizationSchedule) -> YieldMetrics {
    let effective_rent = input.effective_rent();
    let operating_expenses = input.base_operating_expenses();
    let noi = effective_rent - operating_expenses;
    let annual_debt_service = schedule.debt_service_for_year(1);
    let net_cash_flow = noi - annual_debt_service;

    let price = input.property.purchase_price;
    let invested = input.financing.total_cash_invested;

    YieldMetrics {
        effective_rent,
        operating_expenses,
        noi,
        annual_debt_service,
        net_cash_flow,
        total_cash_invested: invested,
        gross_yield: Metric::ratio(
            input.property.annual_rent,
            price,
            UndefinedReason::ZeroPurchasePrice,
        ),
        net_yield: Metric::ratio(
            input.property.annual_rent - operating_expenses,
            invested,
            UndefinedReason::ZeroCashInvested,
        ),
        cap_rate: Metric::ratio(noi, price, UndefinedReason::ZeroPurchasePrice),
        cash_on_cash: Metric::ratio(net_cash_flow, invested, UndefinedReason::ZeroCashInvested),
    }
}
