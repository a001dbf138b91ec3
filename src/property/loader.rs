//! Load labeled properties from a portfolio CSV

use super::{FinancingInput, PropertyInput};
use csv::Reader;
use std::error::Error;
use std::path::Path;

/// A labeled property + financing pair from a portfolio file
#[derive(Debug, Clone)]
pub struct PortfolioEntry {
    pub label: String,
    pub property: PropertyInput,
    pub financing: FinancingInput,
}

/// Raw CSV row matching the portfolio file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Label")]
    label: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "AnnualRent")]
    annual_rent: f64,
    #[serde(rename = "SizeSqft")]
    size_sqft: Option<f64>,
    #[serde(rename = "Location")]
    location: Option<String>,
    #[serde(rename = "DownPaymentRatio")]
    down_payment_ratio: f64,
    #[serde(rename = "InterestRate")]
    annual_interest_rate: f64,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: u32,
}

impl CsvRow {
    fn into_entry(self) -> PortfolioEntry {
        let location = self.location.filter(|l| !l.is_empty());

        PortfolioEntry {
            label: self.label,
            property: PropertyInput {
                purchase_price: self.purchase_price,
                annual_rent: self.annual_rent,
                size_sqft: self.size_sqft,
                location,
            },
            financing: FinancingInput::new(
                self.down_payment_ratio,
                self.annual_interest_rate,
                self.loan_term_years,
            ),
        }
    }
}

/// Load all portfolio entries from a CSV file
pub fn load_portfolio<P: AsRef<Path>>(path: P) -> Result<Vec<PortfolioEntry>, Box<dyn Error>> {
    let file = std::fs::File::open(path)?;
    load_portfolio_from_reader(file)
}

/// Load portfolio entries from any reader (e.g., string buffer, network stream)
pub fn load_portfolio_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<PortfolioEntry>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        entries.push(row.into_entry());
    }

    Ok(entries)
}
