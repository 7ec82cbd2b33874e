//! Side-by-side comparison of ASB and ASBF outcomes

use serde::{Deserialize, Serialize};

use super::break_even::break_even_rate;
use crate::params::AsbParams;
use crate::projection::InvestmentResult;

/// How the two products compare under one parameter set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Absolute net-profit gap
    pub difference: f64,

    pub asbf_is_better: bool,

    /// ASB dividend rate (percent) that would match ASBF's net profit
    pub break_even_rate_percent: f64,

    /// Gap as a percentage of ASB's net profit (0 when ASB's is not positive)
    pub percentage_difference: f64,
}

/// Compare two projections; `asb_params` drives the break-even search
pub fn compare(
    asb_params: &AsbParams,
    asb: &InvestmentResult,
    asbf: &InvestmentResult,
) -> ComparisonResult {
    let gap = asbf.net_profit - asb.net_profit;

    let percentage_difference = if asb.net_profit > 0.0 {
        gap.abs() / asb.net_profit * 100.0
    } else {
        0.0
    };

    ComparisonResult {
        difference: gap.abs(),
        asbf_is_better: asbf.net_profit > asb.net_profit,
        break_even_rate_percent: break_even_rate(asb_params, asbf.net_profit),
        percentage_difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn asb_params() -> AsbParams {
        AsbParams {
            principal: 0.0,
            monthly_investment: 500.0,
            tenure_years: 3,
            dividend_rate_percent: 5.5,
            compounding: true,
        }
    }

    #[test]
    fn test_asbf_ahead() {
        let asb = InvestmentResult::asb(18_000.0, 2_000.0);
        let asbf = InvestmentResult::asbf(100_000.0, 506.69, 16_500.0, 95_000.0);

        let result = compare(&asb_params(), &asb, &asbf);
        assert!(result.asbf_is_better);
        assert_abs_diff_eq!(result.difference, 1_500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.percentage_difference, 7.5, epsilon = 1e-9);
        assert!(result.break_even_rate_percent > asb_params().dividend_rate_percent);
    }

    #[test]
    fn test_asb_ahead() {
        let asb = InvestmentResult::asb(20_000.0, 2_000.0);
        let asbf = InvestmentResult::asbf(100_000.0, 506.69, 16_500.0, 95_000.0);

        let result = compare(&asb_params(), &asb, &asbf);
        assert!(!result.asbf_is_better);
        assert_abs_diff_eq!(result.difference, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.percentage_difference, 500.0 / 22_000.0 * 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_equal_profits_favour_asb() {
        let asb = InvestmentResult::asb(20_000.0, 1_500.0);
        let asbf = InvestmentResult::asbf(100_000.0, 506.69, 16_500.0, 95_000.0);
        let result = compare(&asb_params(), &asb, &asbf);
        assert!(!result.asbf_is_better);
        assert_eq!(result.difference, 0.0);
    }

    #[test]
    fn test_non_positive_asb_profit_gives_zero_percentage() {
        let asb = InvestmentResult::asb(0.0, 0.0);
        let asbf = InvestmentResult::asbf(100_000.0, 506.69, 16_500.0, 95_000.0);
        let result = compare(&asb_params(), &asb, &asbf);
        assert_eq!(result.percentage_difference, 0.0);
        assert!(result.asbf_is_better);
    }

    #[test]
    fn test_zero_tenure_break_even_is_zero() {
        let params = AsbParams { tenure_years: 0, ..asb_params() };
        let asb = InvestmentResult::asb(0.0, 0.0);
        let asbf = InvestmentResult::asbf(100_000.0, 506.69, 0.0, 100_000.0);
        let result = compare(&params, &asb, &asbf);
        assert_eq!(result.break_even_rate_percent, 0.0);
    }
}
