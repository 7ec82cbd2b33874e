//! Fixed-rate loan amortization
//!
//! Inputs are assumed non-negative; nothing here validates them. A zero
//! interest rate falls back to straight-line repayment.

use super::results::AmortizationRow;
use crate::params::MONTHS_PER_YEAR;

/// Annual percentage rate to monthly decimal rate
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64
}

/// Level monthly instalment that repays `loan_amount` over `loan_tenure_years`
///
/// payment = L * r * (1+r)^n / ((1+r)^n - 1), evaluated as L * r / (1 - (1+r)^-n)
///
/// Very long terms tend towards interest-only (L * r).
pub fn monthly_payment(loan_amount: f64, loan_tenure_years: u32, annual_rate_percent: f64) -> f64 {
    let r = monthly_rate(annual_rate_percent);
    let n = loan_tenure_years as f64 * MONTHS_PER_YEAR as f64;

    if r == 0.0 {
        return loan_amount / n;
    }

    loan_amount * r / (1.0 - (1.0 + r).powf(-n))
}

/// Outstanding principal after `payments_made` level payments
///
/// balance = L * (1+r)^p - payment * ((1+r)^p - 1) / r, evaluated as
/// (L - payment / r) * (1+r)^p + payment / r
///
/// Not clamped: past the loan's natural life the result goes negative.
pub fn remaining_balance(
    loan_amount: f64,
    monthly_payment: f64,
    annual_rate_percent: f64,
    payments_made: u32,
) -> f64 {
    let r = monthly_rate(annual_rate_percent);

    if r == 0.0 {
        return loan_amount - monthly_payment * payments_made as f64;
    }

    let growth = (1.0 + r).powf(payments_made as f64);
    let annuity = monthly_payment / r;
    (loan_amount - annuity) * growth + annuity
}

/// Month-by-month schedule for the first `months` payments
pub fn amortization_schedule(
    loan_amount: f64,
    loan_tenure_years: u32,
    annual_rate_percent: f64,
    months: u32,
) -> Vec<AmortizationRow> {
    let r = monthly_rate(annual_rate_percent);
    let payment = monthly_payment(loan_amount, loan_tenure_years, annual_rate_percent);

    let mut balance = loan_amount;
    let expected = months.min(loan_tenure_years.saturating_mul(MONTHS_PER_YEAR));
    let mut rows = Vec::with_capacity(expected as usize);

    for month in 1..=months {
        let interest = balance * r;
        let principal = payment - interest;
        balance -= principal;

        rows.push(AmortizationRow {
            month,
            payment,
            interest,
            principal,
            balance,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_eq!(monthly_payment(120_000.0, 10, 0.0), 120_000.0 / 120.0);
        assert_eq!(remaining_balance(120_000.0, 1000.0, 0.0, 24), 96_000.0);
    }

    #[test]
    fn test_standard_payment() {
        // 100k over 30 years at 4.5%
        let pmt = monthly_payment(100_000.0, 30, 4.5);
        assert_abs_diff_eq!(pmt, 506.69, epsilon = 0.01);
    }

    #[test]
    fn test_full_amortization_zeroes_balance() {
        for &(loan, years, rate) in &[
            (100_000.0, 30, 4.5),
            (250_000.0, 10, 3.2),
            (50_000.0, 5, 0.0),
            (1_000.0, 1, 12.0),
        ] {
            let pmt = monthly_payment(loan, years, rate);
            let bal = remaining_balance(loan, pmt, rate, years * 12);
            assert_abs_diff_eq!(bal, 0.0, epsilon = 1e-6 * loan);
        }
    }

    #[test]
    fn test_balance_after_three_years() {
        let pmt = monthly_payment(100_000.0, 30, 4.5);
        let bal = remaining_balance(100_000.0, pmt, 4.5, 36);
        assert!(bal > 94_000.0 && bal < 96_000.0, "unexpected balance {}", bal);
    }

    #[test]
    fn test_balance_goes_negative_past_loan_life() {
        let pmt = monthly_payment(10_000.0, 1, 5.0);
        let bal = remaining_balance(10_000.0, pmt, 5.0, 24);
        assert!(bal < 0.0);
    }

    #[test]
    fn test_very_long_tenure_does_not_overflow() {
        // 400M years is more months than fit in a u32
        let pmt = monthly_payment(1_000.0, 400_000_000, 4.5);
        assert_abs_diff_eq!(pmt, 3.75, epsilon = 1e-9);

        // Payment count beyond i32::MAX still amortizes past zero
        let bal = remaining_balance(1_000.0, 10.0, 4.5, 3_000_000_000);
        assert!(bal < -1e9, "unexpected balance {}", bal);
    }

    #[test]
    fn test_schedule_matches_closed_form() {
        let schedule = amortization_schedule(100_000.0, 30, 4.5, 36);
        assert_eq!(schedule.len(), 36);

        let pmt = monthly_payment(100_000.0, 30, 4.5);
        let closed = remaining_balance(100_000.0, pmt, 4.5, 36);
        assert_relative_eq!(schedule[35].balance, closed, max_relative = 1e-9);

        // First month: interest on the full loan
        assert_abs_diff_eq!(schedule[0].interest, 375.0, epsilon = 1e-9);
        assert_relative_eq!(schedule[0].interest + schedule[0].principal, pmt);
    }

    #[test]
    fn test_schedule_interest_share_falls() {
        let schedule = amortization_schedule(100_000.0, 30, 4.5, 360);
        assert!(schedule.windows(2).all(|w| w[1].interest < w[0].interest));
        assert_abs_diff_eq!(schedule.last().unwrap().balance, 0.0, epsilon = 1e-4);
    }
}
