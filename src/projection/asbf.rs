//! ASB-financing projection
//!
//! The loan funds a lump sum that earns a flat annual dividend for the whole
//! holding tenure. Equity is whatever the repayments have amortized.

use super::loan::{monthly_payment, remaining_balance};
use super::results::InvestmentResult;
use crate::params::AsbfParams;

/// Project an ASBF position over its holding tenure
pub fn project_asbf(params: &AsbfParams) -> InvestmentResult {
    let payment = monthly_payment(
        params.loan_amount,
        params.loan_tenure_years,
        params.interest_rate_percent,
    );
    let balance = remaining_balance(
        params.loan_amount,
        payment,
        params.interest_rate_percent,
        params.months(),
    );

    // Flat dividend on the full lump sum; `compounding` does not apply here
    let dividend = params.loan_amount * (params.dividend_rate_percent / 100.0) * params.tenure_years as f64;

    if balance < 0.0 {
        log::debug!(
            "asbf: holding tenure {}y outlives {}y loan, balance {:.2}",
            params.tenure_years,
            params.loan_tenure_years,
            balance
        );
    }

    log::debug!(
        "asbf: payment {:.2}, remaining {:.2}, dividend {:.2}",
        payment,
        balance,
        dividend
    );

    InvestmentResult::asbf(params.loan_amount, payment, dividend, balance)
}
