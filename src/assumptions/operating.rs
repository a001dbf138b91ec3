//! Operating assumptions with market defaults

use serde::{Deserialize, Serialize};

/// Operating assumptions applied to every analysis
///
/// Each field carries a market default and can be overridden per analysis
/// through [`AssumptionOverrides`]. All rates are annual fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatingAssumptions {
    /// Share of the year the unit sits unlet
    pub vacancy_rate: f64,

    /// Annual growth applied to gross rent from year 2 onward
    pub rent_growth_rate: f64,

    /// Annual inflation applied to the operating-expense base from year 2 onward
    pub expense_inflation_rate: f64,

    /// Annual property-value appreciation
    pub appreciation_rate: f64,

    /// Building service charge per square foot per year (same currency as price/rent)
    pub service_charge_per_sqft: f64,

    /// Annual maintenance allowance as a fraction of the purchase price
    pub maintenance_rate: f64,

    /// Property-management fee as a fraction of collected (effective) rent
    pub management_fee_rate: f64,
}

impl OperatingAssumptions {
    /// Market default assumption set for Dubai residential property
    pub fn default_market() -> Self {
        Self {
            vacancy_rate: 0.05,            // 5% of the year unlet
            rent_growth_rate: 0.03,        // 3% per annum
            expense_inflation_rate: 0.02,  // 2% per annum
            appreciation_rate: 0.03,       // 3% per annum
            service_charge_per_sqft: 15.0, // per sqft per year
            maintenance_rate: 0.01,        // 1% of purchase price per year
            management_fee_rate: 0.05,     // 5% of collected rent
        }
    }

    /// Return a copy with every supplied override applied
    pub fn apply_overrides(&self, overrides: &AssumptionOverrides) -> Self {
        Self {
            vacancy_rate: overrides.vacancy_rate.unwrap_or(self.vacancy_rate),
            rent_growth_rate: overrides.rent_growth_rate.unwrap_or(self.rent_growth_rate),
            expense_inflation_rate: overrides
                .expense_inflation_rate
                .unwrap_or(self.expense_inflation_rate),
            appreciation_rate: overrides.appreciation_rate.unwrap_or(self.appreciation_rate),
            service_charge_per_sqft: overrides
                .service_charge_per_sqft
                .unwrap_or(self.service_charge_per_sqft),
            maintenance_rate: overrides.maintenance_rate.unwrap_or(self.maintenance_rate),
            management_fee_rate: overrides
                .management_fee_rate
                .unwrap_or(self.management_fee_rate),
        }
    }
}

impl Default for OperatingAssumptions {
    fn default() -> Self {
        Self::default_market()
    }
}

/// Partial set of assumption overrides; `None` keeps the default
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionOverrides {
    pub vacancy_rate: Option<f64>,
    pub rent_growth_rate: Option<f64>,
    pub expense_inflation_rate: Option<f64>,
    pub appreciation_rate: Option<f64>,
    pub service_charge_per_sqft: Option<f64>,
    pub maintenance_rate: Option<f64>,
    pub management_fee_rate: Option<f64>,
}

impl AssumptionOverrides {
    /// True when no field is overridden
    pub fn is_empty(&self) -> bool {
        self.vacancy_rate.is_none()
            && self.rent_growth_rate.is_none()
            && self.expense_inflation_rate.is_none()
            && self.appreciation_rate.is_none()
            && self.service_charge_per_sqft.is_none()
            && self.maintenance_rate.is_none()
            && self.management_fee_rate.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let assumptions = OperatingAssumptions::default_market();
        assert_eq!(assumptions.vacancy_rate, 0.05);
        assert_eq!(assumptions.rent_growth_rate, 0.03);
        assert_eq!(assumptions.maintenance_rate, 0.01);
    }

    #[test]
    fn test_overrides_apply_only_supplied_fields() {
        let overrides = AssumptionOverrides {
            vacancy_rate: Some(0.10),
            appreciation_rate: Some(0.0),
            ..Default::default()
        };

        let resolved = OperatingAssumptions::default_market().apply_overrides(&overrides);

        assert_eq!(resolved.vacancy_rate, 0.10);
        assert_eq!(resolved.appreciation_rate, 0.0);
        // Untouched fields keep their defaults
        assert_eq!(resolved.rent_growth_rate, 0.03);
        assert_eq!(resolved.management_fee_rate, 0.05);
    }

    #[test]
    fn test_empty_overrides_deserialize() {
        let overrides: AssumptionOverrides = serde_json::from_str("{}").unwrap();
        assert!(overrides.is_empty());

        let resolved = OperatingAssumptions::default_market().apply_overrides(&overrides);
        assert_eq!(resolved.vacancy_rate, 0.05);
    }
}
