//! Input validation and defaulting ahead of analysis
//!
//! Every downstream stage reads from the [`AnalysisInput`] produced here, so
//! validation happens exactly once: after a bundle exists, the arithmetic
//! pipeline cannot fail.

use crate::assumptions::{
    AssumptionOverrides, ClosingCostSchedule, OperatingAssumptions, ResolvedClosingRates,
};
use crate::error::{ValidationError, ValidationIssue};
use crate::property::{FinancingInput, PropertyInput};
use log::debug;
use serde::{Deserialize, Serialize};

/// Resolved financing terms with every derived quantity filled in
///
/// `loan_amount` is always `purchase_price * (1 - down_payment_ratio)` and
/// `total_cash_invested` is always `down_payment + closing_costs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancingTerms {
    pub down_payment_ratio: f64,
    pub annual_interest_rate: f64,
    pub loan_term_years: u32,

    // Effective closing rates after per-analysis overrides
    pub dld_fee_rate: f64,
    pub agent_fee_rate: f64,
    pub mortgage_reg_fee_rate: f64,

    // Derived amounts
    pub down_payment: f64,
    pub loan_amount: f64,
    pub closing_costs: f64,
    pub total_cash_invested: f64,
}

/// Validated, fully resolved input bundle
///
/// Echoes every input and default actually used, so reports can show the
/// caller exactly what the numbers were computed from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub property: PropertyInput,
    pub financing: FinancingTerms,
    pub assumptions: OperatingAssumptions,
}

impl AnalysisInput {
    /// True when the purchase takes no loan
    pub fn is_cash_purchase(&self) -> bool {
        self.financing.loan_amount == 0.0
    }

    /// Year-1 rent actually collected after vacancy
    pub fn effective_rent(&self) -> f64 {
        self.property.annual_rent * (1.0 - self.assumptions.vacancy_rate)
    }

    /// Year-1 operating-expense base: service charge + maintenance + management
    ///
    /// An unknown size contributes no service charge. The whole base inflates
    /// together at the expense-inflation rate in later projection years.
    pub fn base_operating_expenses(&self) -> f64 {
        let service_charge =
            self.property.size_sqft.unwrap_or(0.0) * self.assumptions.service_charge_per_sqft;
        let maintenance = self.property.purchase_price * self.assumptions.maintenance_rate;
        let management = self.effective_rent() * self.assumptions.management_fee_rate;

        service_charge + maintenance + management
    }
}

/// Validates raw inputs and resolves defaults into an [`AnalysisInput`]
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    base_assumptions: OperatingAssumptions,
    closing_costs: ClosingCostSchedule,
}

impl InputNormalizer {
    /// Normalizer with the market default assumptions and fee table
    pub fn new() -> Self {
        Self {
            base_assumptions: OperatingAssumptions::default_market(),
            closing_costs: ClosingCostSchedule::default_dubai(),
        }
    }

    /// Normalizer with caller-supplied defaults
    pub fn with_defaults(
        base_assumptions: OperatingAssumptions,
        closing_costs: ClosingCostSchedule,
    ) -> Self {
        Self {
            base_assumptions,
            closing_costs,
        }
    }

    /// Validate and resolve one property + financing pair
    ///
    /// Collects every violation before reporting; the returned error never
    /// stops at the first bad field.
    pub fn normalize(
        &self,
        property: &PropertyInput,
        financing: &FinancingInput,
        overrides: Option<&AssumptionOverrides>,
    ) -> Result<AnalysisInput, ValidationError> {
        let assumptions = match overrides {
            Some(o) => self.base_assumptions.apply_overrides(o),
            None => self.base_assumptions.clone(),
        };
        let rates = self.closing_costs.resolve(financing);

        let issues = validate(property, financing, &rates, &assumptions);
        if !issues.is_empty() {
            debug!("input rejected with {} validation issue(s)", issues.len());
            return Err(ValidationError::new(issues));
        }

        let down_payment = property.purchase_price * financing.down_payment_ratio;
        let loan_amount = property.purchase_price * (1.0 - financing.down_payment_ratio);
        let closing_costs = rates.total(property.purchase_price, loan_amount);
        let total_cash_invested = down_payment + closing_costs;

        Ok(AnalysisInput {
            property: property.clone(),
            financing: FinancingTerms {
                down_payment_ratio: financing.down_payment_ratio,
                annual_interest_rate: financing.annual_interest_rate,
                loan_term_years: financing.loan_term_years,
                dld_fee_rate: rates.dld_fee_rate,
                agent_fee_rate: rates.agent_fee_rate,
                mortgage_reg_fee_rate: rates.mortgage_reg_fee_rate,
                down_payment,
                loan_amount,
                closing_costs,
                total_cash_invested,
            },
            assumptions,
        })
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(
    property: &PropertyInput,
    financing: &FinancingInput,
    rates: &ResolvedClosingRates,
    assumptions: &OperatingAssumptions,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    // Property
    if require_finite(&mut issues, "purchase_price", property.purchase_price)
        && property.purchase_price <= 0.0
    {
        issues.push(ValidationIssue::new("purchase_price", "must be positive"));
    }
    if require_finite(&mut issues, "annual_rent", property.annual_rent)
        && property.annual_rent < 0.0
    {
        issues.push(ValidationIssue::new("annual_rent", "must not be negative"));
    }
    if let Some(size) = property.size_sqft {
        if require_finite(&mut issues, "size_sqft", size) && size <= 0.0 {
            issues.push(ValidationIssue::new(
                "size_sqft",
                "must be positive when provided",
            ));
        }
    }

    // Financing
    require_fraction(
        &mut issues,
        "down_payment_ratio",
        financing.down_payment_ratio,
    );
    require_fraction(
        &mut issues,
        "annual_interest_rate",
        financing.annual_interest_rate,
    );
    if financing.down_payment_ratio < 1.0 && financing.loan_term_years == 0 {
        issues.push(ValidationIssue::new(
            "loan_term_years",
            "must be at least 1 when the purchase is financed",
        ));
    }
    require_fraction(&mut issues, "dld_fee_rate", rates.dld_fee_rate);
    require_fraction(&mut issues, "agent_fee_rate", rates.agent_fee_rate);
    require_fraction(
        &mut issues,
        "mortgage_reg_fee_rate",
        rates.mortgage_reg_fee_rate,
    );

    // Assumptions, after overrides
    if require_finite(&mut issues, "vacancy_rate", assumptions.vacancy_rate) {
        if assumptions.vacancy_rate < 0.0 {
            issues.push(ValidationIssue::new("vacancy_rate", "must not be negative"));
        } else if assumptions.vacancy_rate >= 1.0 {
            issues.push(ValidationIssue::new(
                "vacancy_rate",
                "must be below 1.0; a fully vacant property cannot be analyzed",
            ));
        }
    }
    require_growth_rate(
        &mut issues,
        "rent_growth_rate",
        assumptions.rent_growth_rate,
    );
    require_growth_rate(
        &mut issues,
        "expense_inflation_rate",
        assumptions.expense_inflation_rate,
    );
    require_growth_rate(
        &mut issues,
        "appreciation_rate",
        assumptions.appreciation_rate,
    );
    if require_finite(
        &mut issues,
        "service_charge_per_sqft",
        assumptions.service_charge_per_sqft,
    ) && assumptions.service_charge_per_sqft < 0.0
    {
        issues.push(ValidationIssue::new(
            "service_charge_per_sqft",
            "must not be negative",
        ));
    }
    require_fraction(&mut issues, "maintenance_rate", assumptions.maintenance_rate);
    require_fraction(
        &mut issues,
        "management_fee_rate",
        assumptions.management_fee_rate,
    );

    issues
}

/// Push an issue and return false unless the value is a finite number
fn require_finite(issues: &mut Vec<ValidationIssue>, field: &'static str, value: f64) -> bool {
    if value.is_finite() {
        true
    } else {
        issues.push(ValidationIssue::new(field, "must be a finite number"));
        false
    }
}

/// Rates are canonical fractions in [0, 1]; anything above 1 looks like a
/// percentage and is rejected rather than silently rescaled
fn require_fraction(issues: &mut Vec<ValidationIssue>, field: &'static str, value: f64) {
    if !require_finite(issues, field, value) {
        return;
    }
    if value < 0.0 {
        issues.push(ValidationIssue::new(field, "must not be negative"));
    } else if value > 1.0 {
        issues.push(ValidationIssue::new(
            field,
            "must be a fraction between 0 and 1 (use 0.05 for 5%, not 5)",
        ));
    }
}

/// Growth-like rates may be negative but never lose more than 100% a year
fn require_growth_rate(issues: &mut Vec<ValidationIssue>, field: &'static str, value: f64) {
    if !require_finite(issues, field, value) {
        return;
    }
    if value < -1.0 {
        issues.push(ValidationIssue::new(
            field,
            "cannot be below -1.0 (a -100% year already zeroes the figure)",
        ));
    } else if value > 1.0 {
        issues.push(ValidationIssue::new(
            field,
            "must be a fraction between -1 and 1 (use 0.03 for 3%, not 3)",
        ));
    }
}
