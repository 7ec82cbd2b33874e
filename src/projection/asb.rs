//! ASB savings projection
//!
//! Dividends are declared once a year on the year-end balance at the full
//! annual rate. This approximates the scheme's average-minimum-balance
//! method; it does not reproduce it.

use super::results::InvestmentResult;
use super::state::AsbState;
use crate::params::AsbParams;

/// Project an ASB account over its tenure
pub fn project_asb(params: &AsbParams) -> InvestmentResult {
    let annual_rate = params.dividend_rate_percent / 100.0;
    let mut state = AsbState::from_params(params);

    for _month in 1..=params.months() {
        state.advance_month(params.monthly_investment);

        if state.is_dividend_month() {
            let dividend = state.dividend_base(params.compounding) * annual_rate;
            state.credit_dividend(dividend, params.compounding);
        }
    }

    let total_principal = params.principal + params.monthly_investment * params.months() as f64;

    log::debug!(
        "asb: {} months, principal {:.2}, dividend {:.2}",
        params.months(),
        total_principal,
        state.cumulative_dividend
    );

    InvestmentResult::asb(total_principal, state.cumulative_dividend)
}
