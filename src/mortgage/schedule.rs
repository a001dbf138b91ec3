//! Month-by-month amortization schedule

use serde::{Deserialize, Serialize};

/// One month of an amortizing loan
///
/// `period` counts from 1; `balance` is the remaining principal after this
/// month's payment is applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub period: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

/// Full schedule for one loan, plus the figures it was built from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub loan_amount: f64,
    pub annual_interest_rate: f64,
    pub monthly_payment: f64,
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    /// Schedule for a purchase with no loan
    pub fn empty() -> Self {
        Self {
            loan_amount: 0.0,
            annual_interest_rate: 0.0,
            monthly_payment: 0.0,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remaining balance after `year` full years of payments
    ///
    /// Year 0 is the moment of purchase. A year past the end of the schedule
    /// means the loan is already paid off.
    pub fn balance_at_end_of_year(&self, year: u32) -> f64 {
        if year == 0 {
            return self.loan_amount;
        }
        let target = year * 12;
        match self.rows.iter().find(|row| row.period == target) {
            Some(row) => row.balance,
            None => 0.0,
        }
    }

    /// Total payments falling inside calendar year `year` (1-based)
    pub fn debt_service_for_year(&self, year: u32) -> f64 {
        if year == 0 {
            return 0.0;
        }
        let start = (year - 1) * 12;
        let end = year * 12;
        self.rows
            .iter()
            .filter(|row| row.period > start && row.period <= end)
            .map(|row| row.payment)
            .sum()
    }

    /// Interest paid inside calendar year `year` (1-based)
    pub fn interest_for_year(&self, year: u32) -> f64 {
        if year == 0 {
            return 0.0;
        }
        let start = (year - 1) * 12;
        let end = year * 12;
        self.rows
            .iter()
            .filter(|row| row.period > start && row.period <= end)
            .map(|row| row.interest)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::amortize;

    #[test]
    fn test_empty_schedule_reports_zero_everywhere() {
        let schedule = super::AmortizationSchedule::empty();
        assert!(schedule.is_empty());
        assert_eq!(schedule.balance_at_end_of_year(0), 0.0);
        assert_eq!(schedule.balance_at_end_of_year(7), 0.0);
        assert_eq!(schedule.debt_service_for_year(1), 0.0);
    }

    #[test]
    fn test_year_zero_balance_is_the_loan() {
        let schedule = amortize(800_000.0, 0.05, 20);
        assert_eq!(schedule.balance_at_end_of_year(0), 800_000.0);
    }

    #[test]
    fn test_balance_declines_year_over_year() {
        let schedule = amortize(800_000.0, 0.05, 20);
        for year in 1..=20 {
            let prev = schedule.balance_at_end_of_year(year - 1);
            let curr = schedule.balance_at_end_of_year(year);
            assert!(
                curr < prev,
                "balance must fall every year: year {} had {} -> {}",
                year,
                prev,
                curr
            );
        }
    }

    #[test]
    fn test_debt_service_matches_twelve_payments() {
        let schedule = amortize(500_000.0, 0.0, 10);
        assert!((schedule.debt_service_for_year(3) - 50_000.0).abs() < 1e-6);
        // Past the term there is nothing left to pay
        assert_eq!(schedule.debt_service_for_year(11), 0.0);
    }

    #[test]
    fn test_higher_rate_never_lowers_yearly_debt_service() {
        let cheap = amortize(800_000.0, 0.03, 20);
        let dear = amortize(800_000.0, 0.06, 20);
        for year in 1..=20 {
            assert!(dear.debt_service_for_year(year) >= cheap.debt_service_for_year(year));
        }
    }

    #[test]
    fn test_yearly_interest_plus_principal_reconciles() {
        let schedule = amortize(300_000.0, 0.04, 15);
        for year in 1..=15 {
            let payments = schedule.debt_service_for_year(year);
            let interest = schedule.interest_for_year(year);
            let principal =
                schedule.balance_at_end_of_year(year - 1) - schedule.balance_at_end_of_year(year);
            assert!((payments - (interest + principal)).abs() < 1e-6);
        }
    }
}
