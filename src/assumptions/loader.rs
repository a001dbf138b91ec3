//! CSV-based assumption override loader
//!
//! Reads a two-column `parameter,value` file of market-config overrides,
//! e.g. a per-community tuning file maintained next to the portfolio data.

use super::AssumptionOverrides;
use std::error::Error;
use std::path::Path;

/// Load assumption overrides from a CSV file
pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<AssumptionOverrides, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    load_overrides_from_reader(file)
}

/// Load assumption overrides from any reader (e.g., string buffer)
pub fn load_overrides_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<AssumptionOverrides, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut overrides = AssumptionOverrides::default();

    for result in csv_reader.records() {
        let record = result?;
        let parameter = record
            .get(0)
            .ok_or("missing parameter column")?
            .trim()
            .to_string();
        let value: f64 = record.get(1).ok_or("missing value column")?.trim().parse()?;

        match parameter.as_str() {
            "vacancy_rate" => overrides.vacancy_rate = Some(value),
            "rent_growth_rate" => overrides.rent_growth_rate = Some(value),
            "expense_inflation_rate" => overrides.expense_inflation_rate = Some(value),
            "appreciation_rate" => overrides.appreciation_rate = Some(value),
            "service_charge_per_sqft" => overrides.service_charge_per_sqft = Some(value),
            "maintenance_rate" => overrides.maintenance_rate = Some(value),
            "management_fee_rate" => overrides.management_fee_rate = Some(value),
            other => return Err(format!("Unknown assumption parameter: {}", other).into()),
        }
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_overrides_from_reader() {
        let csv = "parameter,value\n\
                   vacancy_rate,0.08\n\
                   service_charge_per_sqft,22.5\n";

        let overrides = load_overrides_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(overrides.vacancy_rate, Some(0.08));
        assert_eq!(overrides.service_charge_per_sqft, Some(22.5));
        assert!(overrides.rent_growth_rate.is_none());
    }

    #[test]
    fn test_unknown_parameter_rejected() {
        let csv = "parameter,value\nmortgage_insurance_rate,0.01\n";
        let result = load_overrides_from_reader(csv.as_bytes());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mortgage_insurance_rate"));
    }
}
