//! Parameter sets for ASB and ASBF projections

use serde::{Deserialize, Serialize};

use crate::config::InputLimits;
use crate::error::{CalculatorError, Result};

/// Months in a year; tenures are always whole years expanded to months
pub const MONTHS_PER_YEAR: u32 = 12;

/// Parameters for an ASB savings projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsbParams {
    /// Lump sum held at the start of the projection
    pub principal: f64,

    /// Amount deposited at the start of every month
    pub monthly_investment: f64,

    /// Holding period in years
    pub tenure_years: u32,

    /// Annual dividend rate, in percent (5.5 = 5.5%)
    pub dividend_rate_percent: f64,

    /// Reinvest dividends into the dividend base
    pub compounding: bool,
}

impl AsbParams {
    pub fn months(&self) -> u32 {
        self.tenure_years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Same parameters with a different dividend rate
    pub fn with_dividend_rate(&self, dividend_rate_percent: f64) -> Self {
        Self {
            dividend_rate_percent,
            ..*self
        }
    }

    /// Check the parameters against the input limits
    pub fn validate(&self, limits: &InputLimits) -> Result<()> {
        check_amount("principal", self.principal)?;
        check_amount("monthly_investment", self.monthly_investment)?;
        check_tenure("tenure_years", self.tenure_years, limits)?;
        check_rate("dividend_rate_percent", self.dividend_rate_percent, limits)?;
        Ok(())
    }
}

/// Parameters for an ASB-financing projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsbfParams {
    /// Loan principal, invested into ASB as a lump sum
    pub loan_amount: f64,

    /// Full term of the loan in years
    pub loan_tenure_years: u32,

    /// Holding period in years (normally no longer than the loan term)
    pub tenure_years: u32,

    /// Annual loan interest rate, in percent
    pub interest_rate_percent: f64,

    /// Annual dividend rate, in percent
    pub dividend_rate_percent: f64,

    /// Carried for parity with ASB; the headline ASBF figures do not compound
    pub compounding: bool,
}

impl AsbfParams {
    pub fn months(&self) -> u32 {
        self.tenure_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn loan_months(&self) -> u32 {
        self.loan_tenure_years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Check a requested schedule length against the longest allowed tenure
    pub fn validate_schedule_months(&self, months: u32, limits: &InputLimits) -> Result<()> {
        let max = limits.max_tenure_years.saturating_mul(MONTHS_PER_YEAR);
        if months > max {
            return Err(CalculatorError::invalid(
                "months",
                format!("must not exceed {} months, got {}", max, months),
            ));
        }
        Ok(())
    }

    /// Check the parameters against the input limits
    pub fn validate(&self, limits: &InputLimits) -> Result<()> {
        check_amount("loan_amount", self.loan_amount)?;
        check_tenure("loan_tenure_years", self.loan_tenure_years, limits)?;
        check_tenure("tenure_years", self.tenure_years, limits)?;
        check_rate("interest_rate_percent", self.interest_rate_percent, limits)?;
        check_rate("dividend_rate_percent", self.dividend_rate_percent, limits)?;
        if self.tenure_years > self.loan_tenure_years {
            log::warn!(
                "holding tenure {}y exceeds loan tenure {}y; remaining balance will be negative",
                self.tenure_years,
                self.loan_tenure_years
            );
        }
        Ok(())
    }
}

/// A parameter set for exactly one product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InvestmentParams {
    Asb(AsbParams),
    Asbf(AsbfParams),
}

impl InvestmentParams {
    pub fn kind(&self) -> &'static str {
        match self {
            InvestmentParams::Asb(_) => "asb",
            InvestmentParams::Asbf(_) => "asbf",
        }
    }

    pub fn tenure_years(&self) -> u32 {
        match self {
            InvestmentParams::Asb(p) => p.tenure_years,
            InvestmentParams::Asbf(p) => p.tenure_years,
        }
    }

    pub fn validate(&self, limits: &InputLimits) -> Result<()> {
        match self {
            InvestmentParams::Asb(p) => p.validate(limits),
            InvestmentParams::Asbf(p) => p.validate(limits),
        }
    }
}

impl From<AsbParams> for InvestmentParams {
    fn from(params: AsbParams) -> Self {
        InvestmentParams::Asb(params)
    }
}

impl From<AsbfParams> for InvestmentParams {
    fn from(params: AsbfParams) -> Self {
        InvestmentParams::Asbf(params)
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(CalculatorError::invalid(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(CalculatorError::invalid(field, format!("must not be negative, got {}", value)));
    }
    Ok(())
}

fn check_tenure(field: &str, years: u32, limits: &InputLimits) -> Result<()> {
    if years < limits.min_tenure_years || years > limits.max_tenure_years {
        return Err(CalculatorError::invalid(
            field,
            format!(
                "must be between {} and {} years, got {}",
                limits.min_tenure_years, limits.max_tenure_years, years
            ),
        ));
    }
    Ok(())
}

fn check_rate(field: &str, percent: f64, limits: &InputLimits) -> Result<()> {
    check_amount(field, percent)?;
    if percent > limits.max_rate_percent {
        return Err(CalculatorError::invalid(
            field,
            format!("must not exceed {}%, got {}", limits.max_rate_percent, percent),
        ));
    }
    Ok(())
}
