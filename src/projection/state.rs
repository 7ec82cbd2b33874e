//! Running balances for a month-by-month ASB simulation

use crate::params::{AsbParams, MONTHS_PER_YEAR};

/// State of an ASB account at a point in time during projection
#[derive(Debug, Clone)]
pub struct AsbState {
    /// Current projection month (1-indexed; 0 before the first deposit)
    pub month: u32,

    /// Principal plus every contribution so far; never includes dividends
    pub contributed: f64,

    /// Contributions plus reinvested dividends (tracks `contributed` when not compounding)
    pub total_amount: f64,

    /// Dividends paid so far
    pub cumulative_dividend: f64,
}

impl AsbState {
    /// Initialize state at projection start
    pub fn from_params(params: &AsbParams) -> Self {
        Self {
            month: 0,
            contributed: params.principal,
            total_amount: params.principal,
            cumulative_dividend: 0.0,
        }
    }

    /// Advance to the next month and take that month's deposit
    pub fn advance_month(&mut self, deposit: f64) {
        self.month += 1;
        self.contributed += deposit;
        self.total_amount += deposit;
    }

    /// True on the last month of each year, when dividends are declared
    pub fn is_dividend_month(&self) -> bool {
        self.month > 0 && self.month % MONTHS_PER_YEAR == 0
    }

    /// Balance the annual dividend is declared on
    ///
    /// Compounding uses the running total; simple uses contributions to date.
    pub fn dividend_base(&self, compounding: bool) -> f64 {
        if compounding {
            self.total_amount
        } else {
            self.contributed
        }
    }

    /// Book a declared dividend, reinvesting it when compounding
    pub fn credit_dividend(&mut self, dividend: f64, compounding: bool) {
        self.cumulative_dividend += dividend;
        if compounding {
            self.total_amount += dividend;
        }
    }
}
