//! Projection engine for ASB and ASBF investments

mod asb;
mod asbf;
mod growth;
pub mod loan;
mod results;
mod state;

pub use asb::project_asb;
pub use asbf::project_asbf;
pub use growth::{asb_growth_series, asbf_growth_series, GROWTH_STEP_MONTHS};
pub use loan::{amortization_schedule, monthly_payment, remaining_balance};
pub use results::{AmortizationRow, AsbGrowthPoint, AsbfGrowthPoint, InvestmentResult};
pub use state::AsbState;

use crate::params::InvestmentParams;

/// Run whichever projector matches the parameter set
pub fn project(params: &InvestmentParams) -> InvestmentResult {
    match params {
        InvestmentParams::Asb(p) => project_asb(p),
        InvestmentParams::Asbf(p) => project_asbf(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AsbParams, AsbfParams};

    #[test]
    fn test_project_dispatches_by_kind() {
        let asb = AsbParams {
            principal: 0.0,
            monthly_investment: 500.0,
            tenure_years: 1,
            dividend_rate_percent: 5.5,
            compounding: true,
        };
        let asbf = AsbfParams {
            loan_amount: 100_000.0,
            loan_tenure_years: 30,
            tenure_years: 3,
            interest_rate_percent: 4.5,
            dividend_rate_percent: 5.5,
            compounding: true,
        };

        assert_eq!(project(&asb.into()), project_asb(&asb));
        assert_eq!(project(&asbf.into()), project_asbf(&asbf));
        assert!(project(&asbf.into()).surrender_value.is_some());
    }
}
