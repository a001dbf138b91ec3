//! Fixed-rate mortgage amortization

use super::{AmortizationRow, AmortizationSchedule};

/// Residual balance below this is treated as fully repaid
const BALANCE_EPSILON: f64 = 1e-6;

/// Standard annuity payment for a fixed-rate loan
///
/// A zero rate degenerates to straight-line repayment of the principal.
pub fn monthly_payment(principal: f64, monthly_rate: f64, periods: u32) -> f64 {
    if periods == 0 {
        return 0.0;
    }
    if monthly_rate == 0.0 {
        return principal / periods as f64;
    }
    let growth = (1.0 + monthly_rate).powi(periods as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Build the full month-by-month schedule for a loan
///
/// A zero loan or zero term yields an empty schedule. The final period's
/// principal is clamped to the remaining balance so the schedule always
/// terminates at exactly zero.
pub fn amortize(loan_amount: f64, annual_interest_rate: f64, term_years: u32) -> AmortizationSchedule {
    if loan_amount <= 0.0 || term_years == 0 {
        return AmortizationSchedule::empty();
    }

    let monthly_rate = annual_interest_rate / 12.0;
    let periods = term_years * 12;
    let payment = monthly_payment(loan_amount, monthly_rate, periods);

    let mut rows = Vec::with_capacity(periods as usize);
    let mut balance = loan_amount;
    for period in 1..=periods {
        let interest = balance * monthly_rate;
        let mut principal = payment - interest;
        if period == periods || principal > balance {
            principal = balance;
        }
        balance -= principal;
        rows.push(AmortizationRow {
            period,
            payment: principal + interest,
            principal,
            interest,
            balance,
        });
        if balance <= BALANCE_EPSILON {
            break;
        }
    }

    AmortizationSchedule {
        loan_amount,
        annual_interest_rate,
        monthly_payment: payment,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_pays_straight_line() {
        let schedule = amortize(500_000.0, 0.0, 10);

        assert!((schedule.monthly_payment - 4_166.666_666_666_667).abs() < 1e-6);
        assert_eq!(schedule.rows.len(), 120);
        for row in &schedule.rows {
            assert_eq!(row.interest, 0.0);
        }
        assert!(schedule.rows.last().map(|r| r.balance).unwrap_or(1.0) < 0.01);
    }

    #[test]
    fn test_schedule_terminates_at_zero() {
        let schedule = amortize(1_125_000.0, 0.045, 25);

        assert_eq!(schedule.rows.len(), 300);
        let last = schedule.rows.last().unwrap();
        assert!(last.balance.abs() < 0.01);

        // Balance never dips below zero along the way
        for row in &schedule.rows {
            assert!(row.balance >= 0.0);
        }
    }

    #[test]
    fn test_principals_sum_to_the_loan() {
        let schedule = amortize(1_125_000.0, 0.045, 25);
        let repaid: f64 = schedule.rows.iter().map(|r| r.principal).sum();
        assert!((repaid - 1_125_000.0).abs() < 0.01);
    }

    #[test]
    fn test_each_row_splits_payment_exactly() {
        let schedule = amortize(740_000.0, 0.0525, 30);
        for row in &schedule.rows {
            assert!((row.payment - (row.principal + row.interest)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_payment_is_level_until_the_final_row() {
        let schedule = amortize(900_000.0, 0.038, 20);
        let level = schedule.monthly_payment;
        for row in schedule.rows.iter().take(schedule.rows.len() - 1) {
            assert!((row.payment - level).abs() < 0.01);
        }
    }

    #[test]
    fn test_interest_dominates_early_then_fades() {
        let schedule = amortize(1_000_000.0, 0.06, 25);
        let first = &schedule.rows[0];
        let last = &schedule.rows[schedule.rows.len() - 1];
        assert!(first.interest > first.principal);
        assert!(last.principal > last.interest);
    }

    #[test]
    fn test_no_loan_means_no_schedule() {
        assert!(amortize(0.0, 0.045, 25).is_empty());
        assert!(amortize(-5.0, 0.045, 25).is_empty());
        assert!(amortize(500_000.0, 0.045, 0).is_empty());
    }

    #[test]
    fn test_payment_formula_zero_periods() {
        assert_eq!(monthly_payment(100_000.0, 0.004, 0), 0.0);
    }
}
