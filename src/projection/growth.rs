//! Half-yearly growth series for charting
//!
//! These accrue dividends monthly (rate / 12 on the running balance) rather
//! than annually, so their end points differ slightly from the headline
//! projections. They are meant for plotting a trajectory.

use super::loan::{monthly_payment, monthly_rate};
use super::results::{AsbGrowthPoint, AsbfGrowthPoint};
use crate::params::{AsbParams, AsbfParams};

/// Months between consecutive points
pub const GROWTH_STEP_MONTHS: u32 = 6;

/// ASB balance and cumulative dividend every six months over the tenure
pub fn asb_growth_series(params: &AsbParams) -> Vec<AsbGrowthPoint> {
    let rate = monthly_rate(params.dividend_rate_percent);
    let months = params.months();

    let mut balance = params.principal;
    let mut dividend = 0.0;
    let mut points = vec![AsbGrowthPoint { month: 0, balance, dividend }];

    for month in 1..=months {
        balance += params.monthly_investment;

        let accrued = balance * rate;
        dividend += accrued;
        if params.compounding {
            balance += accrued;
        }

        if month % GROWTH_STEP_MONTHS == 0 {
            points.push(AsbGrowthPoint { month, balance, dividend });
        }
    }

    points
}

/// ASBF loan balance, surrender value and net position every six months
/// over the full loan term
pub fn asbf_growth_series(params: &AsbfParams) -> Vec<AsbfGrowthPoint> {
    let interest_rate = monthly_rate(params.interest_rate_percent);
    let dividend_rate = monthly_rate(params.dividend_rate_percent);
    let payment = monthly_payment(
        params.loan_amount,
        params.loan_tenure_years,
        params.interest_rate_percent,
    );

    let mut loan_balance = params.loan_amount;
    let mut surrender_value = params.loan_amount;
    let mut points = vec![AsbfGrowthPoint {
        month: 0,
        loan_balance,
        surrender_value,
        net_profit: surrender_value - loan_balance,
    }];

    for month in 1..=params.loan_months() {
        let interest = loan_balance * interest_rate;
        loan_balance -= payment - interest;

        // Dividends stay invested
        surrender_value += surrender_value * dividend_rate;

        if month % GROWTH_STEP_MONTHS == 0 {
            points.push(AsbfGrowthPoint {
                month,
                loan_balance,
                surrender_value,
                net_profit: surrender_value - loan_balance,
            });
        }
    }

    points
}
