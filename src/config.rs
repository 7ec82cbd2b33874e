//! Default parameter sets and input limits
//!
//! Defaults can be overridden from the environment, e.g.
//!   ASB_PRINCIPAL, ASB_MONTHLY_INVESTMENT, ASB_TENURE_YEARS, ASB_DIVIDEND_RATE
//!   ASBF_LOAN_AMOUNT, ASBF_LOAN_TENURE_YEARS, ASBF_TENURE_YEARS,
//!   ASBF_INTEREST_RATE, ASBF_DIVIDEND_RATE, COMPOUNDING

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

use crate::params::{AsbParams, AsbfParams};

/// Ranges accepted by parameter validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    pub min_tenure_years: u32,
    pub max_tenure_years: u32,
    /// Upper bound for any rate, in percent
    pub max_rate_percent: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_tenure_years: 1,
            max_tenure_years: 40,
            max_rate_percent: 100.0,
        }
    }
}

/// Starting parameter sets for each product
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorDefaults {
    pub asb: AsbParams,
    pub asbf: AsbfParams,
    pub limits: InputLimits,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        Self {
            asb: AsbParams {
                principal: 10_000.0,
                monthly_investment: 500.0,
                tenure_years: 3,
                dividend_rate_percent: 5.5,
                compounding: true,
            },
            asbf: AsbfParams {
                loan_amount: 100_000.0,
                loan_tenure_years: 30,
                tenure_years: 3,
                interest_rate_percent: 4.5,
                dividend_rate_percent: 5.5,
                compounding: true,
            },
            limits: InputLimits::default(),
        }
    }
}

impl CalculatorDefaults {
    /// Built-in defaults with any environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaults = Self::default();

        let compounding = parse_var(&lookup, "COMPOUNDING", defaults.asb.compounding);

        let asb = &mut defaults.asb;
        asb.principal = parse_var(&lookup, "ASB_PRINCIPAL", asb.principal);
        asb.monthly_investment = parse_var(&lookup, "ASB_MONTHLY_INVESTMENT", asb.monthly_investment);
        asb.tenure_years = parse_var(&lookup, "ASB_TENURE_YEARS", asb.tenure_years);
        asb.dividend_rate_percent = parse_var(&lookup, "ASB_DIVIDEND_RATE", asb.dividend_rate_percent);
        asb.compounding = compounding;

        let asbf = &mut defaults.asbf;
        asbf.loan_amount = parse_var(&lookup, "ASBF_LOAN_AMOUNT", asbf.loan_amount);
        asbf.loan_tenure_years = parse_var(&lookup, "ASBF_LOAN_TENURE_YEARS", asbf.loan_tenure_years);
        asbf.tenure_years = parse_var(&lookup, "ASBF_TENURE_YEARS", asbf.tenure_years);
        asbf.interest_rate_percent = parse_var(&lookup, "ASBF_INTEREST_RATE", asbf.interest_rate_percent);
        asbf.dividend_rate_percent = parse_var(&lookup, "ASBF_DIVIDEND_RATE", asbf.dividend_rate_percent);
        asbf.compounding = compounding;

        defaults
    }
}

/// Read one environment variable, falling back to `default` when it is
/// unset or unparsable
pub fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    parse_var(&|k: &str| env::var(k).ok(), key, default)
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Copy,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => {
                log::debug!("{} overridden from environment", key);
                value
            }
            Err(_) => {
                log::warn!("ignoring unparsable {}={:?}", key, raw);
                default
            }
        },
        None => default,
    }
}
