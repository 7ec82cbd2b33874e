//! Break-even dividend rate search
//!
//! Finds the ASB dividend rate whose net profit matches a target by bisection
//! on [0, 100]%. Relies on ASB net profit being non-decreasing in the rate.

use crate::params::AsbParams;
use crate::projection::project_asb;

/// Upper end of the searched rate range, in percent
pub const MAX_RATE_PERCENT: f64 = 100.0;

/// Stop once the bracket is this narrow, in percentage points
pub const RATE_TOLERANCE: f64 = 0.01;

/// Accept a midpoint whose net profit is within this many currency units
pub const PROFIT_TOLERANCE: f64 = 1.0;

/// ASB dividend rate (percent) at which `params` would earn `target_net_profit`
///
/// Targets below the 0% outcome converge towards 0; targets above the 100%
/// outcome converge towards 100. Zero tenure returns 0 without searching.
pub fn break_even_rate(params: &AsbParams, target_net_profit: f64) -> f64 {
    if params.tenure_years == 0 {
        return 0.0;
    }

    bisect(params, target_net_profit, 0.0, MAX_RATE_PERCENT)
}

fn bisect(params: &AsbParams, target: f64, low: f64, high: f64) -> f64 {
    let mid = (low + high) / 2.0;

    if high - low <= RATE_TOLERANCE {
        return mid;
    }

    let net_profit = project_asb(&params.with_dividend_rate(mid)).net_profit;

    if (net_profit - target).abs() < PROFIT_TOLERANCE {
        log::debug!("break-even: {:.4}% within tolerance", mid);
        mid
    } else if net_profit < target {
        bisect(params, target, mid, high)
    } else {
        bisect(params, target, low, mid)
    }
}
