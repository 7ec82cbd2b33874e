//! Output structures for projections

use serde::{Deserialize, Serialize};

/// Headline figures for one projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentResult {
    /// Capital put in: principal plus contributions (ASB) or the loan amount (ASBF)
    pub total_principal: f64,

    /// Total dividend earned over the holding tenure
    pub dividend: f64,

    /// ASB: total_principal + dividend. ASBF: dividend + surrender_value
    pub net_profit: f64,

    /// Loan instalment (ASBF); zero for ASB
    pub monthly_payment: f64,

    /// Equity built up by amortization (ASBF only)
    pub surrender_value: Option<f64>,

    /// Outstanding loan principal at the end of the tenure (ASBF only)
    pub remaining_balance: Option<f64>,
}

impl InvestmentResult {
    pub fn asb(total_principal: f64, dividend: f64) -> Self {
        Self {
            total_principal,
            dividend,
            net_profit: total_principal + dividend,
            monthly_payment: 0.0,
            surrender_value: None,
            remaining_balance: None,
        }
    }

    pub fn asbf(loan_amount: f64, monthly_payment: f64, dividend: f64, remaining_balance: f64) -> Self {
        let surrender_value = loan_amount - remaining_balance;
        Self {
            total_principal: loan_amount,
            dividend,
            net_profit: dividend + surrender_value,
            monthly_payment,
            surrender_value: Some(surrender_value),
            remaining_balance: Some(remaining_balance),
        }
    }

    /// Whether the loan is fully repaid (only meaningful for ASBF)
    pub fn loan_repaid(&self) -> bool {
        self.remaining_balance.is_some_and(|b| b <= 0.0)
    }
}

/// One month of a loan amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Outstanding principal after this month's payment
    pub balance: f64,
}

/// ASB balance at a point in the growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsbGrowthPoint {
    pub month: u32,
    pub balance: f64,
    pub dividend: f64,
}

/// ASBF position at a point in the growth series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsbfGrowthPoint {
    pub month: u32,
    pub loan_balance: f64,
    pub surrender_value: f64,
    pub net_profit: f64,
}
