//! Comparable ASB and ASBF parameter pairs
//!
//! A comparison asks: if the ASBF instalment were instead deposited into ASB
//! each month, which ends up ahead?

use serde::{Deserialize, Serialize};
use std::fmt;

use super::compare::{compare, ComparisonResult};
use crate::format::format_ringgit;
use crate::params::{AsbParams, AsbfParams};
use crate::projection::{monthly_payment, project_asb, project_asbf, InvestmentResult};

/// ASB and ASBF parameter sets evaluated against each other
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScenario {
    pub asb: AsbParams,
    pub asbf: AsbfParams,
}

impl ComparisonScenario {
    /// Pair ASBF with an ASB plan that deposits the loan instalment monthly
    pub fn from_asbf(asbf: AsbfParams) -> Self {
        let asb = AsbParams {
            principal: 0.0,
            monthly_investment: monthly_payment(
                asbf.loan_amount,
                asbf.loan_tenure_years,
                asbf.interest_rate_percent,
            ),
            tenure_years: asbf.tenure_years,
            dividend_rate_percent: asbf.dividend_rate_percent,
            compounding: asbf.compounding,
        };
        Self { asb, asbf }
    }

    /// Same scenario with both products at a different dividend rate
    pub fn with_dividend_rate(&self, dividend_rate_percent: f64) -> Self {
        Self {
            asb: self.asb.with_dividend_rate(dividend_rate_percent),
            asbf: AsbfParams {
                dividend_rate_percent,
                ..self.asbf
            },
        }
    }

    /// Project both products and compare them
    pub fn evaluate(&self) -> ComparisonReport {
        let asb = project_asb(&self.asb);
        let asbf = project_asbf(&self.asbf);
        let comparison = compare(&self.asb, &asb, &asbf);

        log::debug!(
            "compare: asb {:.2} vs asbf {:.2}, break-even {:.2}%",
            asb.net_profit,
            asbf.net_profit,
            comparison.break_even_rate_percent
        );

        ComparisonReport {
            tenure_years: self.asb.tenure_years,
            asb,
            asbf,
            comparison,
        }
    }
}

/// Both projections plus their comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub tenure_years: u32,
    pub asb: InvestmentResult,
    pub asbf: InvestmentResult,
    pub comparison: ComparisonResult,
}

impl ComparisonReport {
    pub fn winner(&self) -> &'static str {
        if self.comparison.asbf_is_better {
            "ASBF"
        } else {
            "ASB"
        }
    }
}

/// One-line verdict
impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.comparison;
        write!(
            f,
            "{} is better by {} ({:.1}% better).",
            self.winner(),
            format_ringgit(c.difference),
            c.percentage_difference
        )?;

        if c.asbf_is_better {
            write!(
                f,
                " ASB would need a dividend rate of {:.2}% to match ASBF returns.",
                c.break_even_rate_percent
            )
        } else {
            write!(
                f,
                " Consider ASB if you prefer lower risk and simpler investment management."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::break_even::{PROFIT_TOLERANCE, RATE_TOLERANCE};
    use approx::assert_relative_eq;

    fn asbf() -> AsbfParams {
        AsbfParams {
            loan_amount: 100_000.0,
            loan_tenure_years: 30,
            tenure_years: 3,
            interest_rate_percent: 4.5,
            dividend_rate_percent: 5.5,
            compounding: true,
        }
    }

    #[test]
    fn test_asb_side_deposits_instalment() {
        let s = ComparisonScenario::from_asbf(asbf());
        assert_eq!(s.asb.principal, 0.0);
        assert_relative_eq!(s.asb.monthly_investment, monthly_payment(100_000.0, 30, 4.5));
        assert_eq!(s.asb.tenure_years, 3);
        assert_eq!(s.asb.dividend_rate_percent, 5.5);
        assert!(s.asb.compounding);
    }

    #[test]
    fn test_reference_comparison() {
        let report = ComparisonScenario::from_asbf(asbf()).evaluate();

        // ASB deposits ~18.2k, ASBF earns 16.5k dividend plus ~5k equity
        assert!(report.comparison.asbf_is_better);
        assert_eq!(report.winner(), "ASBF");
        assert!(report.comparison.break_even_rate_percent > 5.5);

        let d = report.comparison.break_even_rate_percent;
        let target = report.asbf.net_profit;
        let profit_at = |rate: f64| project_asb(&report_asb_at(rate)).net_profit;

        let diff = (profit_at(d) - target).abs();
        let bracketed =
            profit_at(d - RATE_TOLERANCE) <= target && target <= profit_at(d + RATE_TOLERANCE);
        assert!(diff < PROFIT_TOLERANCE || bracketed, "break-even {} misses by {}", d, diff);
    }

    fn report_asb_at(rate: f64) -> AsbParams {
        ComparisonScenario::from_asbf(asbf()).asb.with_dividend_rate(rate)
    }

    #[test]
    fn test_verdict_for_asbf() {
        let report = ComparisonScenario::from_asbf(asbf()).evaluate();
        let text = report.to_string();
        assert!(text.starts_with("ASBF is better by RM "));
        assert!(text.contains("ASB would need a dividend rate of"));
    }

    #[test]
    fn test_verdict_for_asb() {
        // Expensive loan, short term: ASBF equity barely builds
        let s = ComparisonScenario::from_asbf(AsbfParams {
            loan_tenure_years: 5,
            interest_rate_percent: 15.0,
            dividend_rate_percent: 1.0,
            tenure_years: 1,
            ..asbf()
        });
        let report = s.evaluate();
        assert!(!report.comparison.asbf_is_better);
        assert!(report.to_string().starts_with("ASB is better by RM "));
        assert!(report.to_string().contains("Consider ASB"));
    }

    #[test]
    fn test_with_dividend_rate_moves_both_sides() {
        let s = ComparisonScenario::from_asbf(asbf()).with_dividend_rate(4.0);
        assert_eq!(s.asb.dividend_rate_percent, 4.0);
        assert_eq!(s.asbf.dividend_rate_percent, 4.0);
        assert_eq!(s.asb.monthly_investment, ComparisonScenario::from_asbf(asbf()).asb.monthly_investment);
    }
}
