//! Load scenario parameter sets from CSV
//!
//! Expected header:
//! `kind,principal,monthly_investment,loan_amount,loan_tenure_years,tenure_years,interest_rate_percent,dividend_rate_percent,compounding`
//!
//! Columns that do not apply to a row's kind may be left empty.

use csv::{Reader, Trim};
use std::path::Path;

use super::{AsbParams, AsbfParams, InvestmentParams};
use crate::comparison::ComparisonScenario;
use crate::config::InputLimits;
use crate::error::{CalculatorError, Result};

/// One scenario from a CSV file
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scenario {
    /// A single-product projection
    Single(InvestmentParams),
    /// ASB vs ASBF comparison driven by the ASBF parameters
    Compare(ComparisonScenario),
}

impl Scenario {
    pub fn kind(&self) -> &'static str {
        match self {
            Scenario::Single(params) => params.kind(),
            Scenario::Compare(_) => "compare",
        }
    }

    /// Validate the user-supplied side; the ASB half of a comparison is derived
    pub fn validate(&self, limits: &InputLimits) -> Result<()> {
        match self {
            Scenario::Single(params) => params.validate(limits),
            Scenario::Compare(scenario) => scenario.asbf.validate(limits),
        }
    }
}

/// Raw CSV row; every numeric column is optional so one file can mix kinds
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    kind: String,
    principal: Option<f64>,
    monthly_investment: Option<f64>,
    loan_amount: Option<f64>,
    loan_tenure_years: Option<u32>,
    tenure_years: Option<u32>,
    interest_rate_percent: Option<f64>,
    dividend_rate_percent: Option<f64>,
    compounding: Option<bool>,
}

impl CsvRow {
    fn to_scenario(self) -> Result<Scenario> {
        match self.kind.trim().to_ascii_lowercase().as_str() {
            "asb" => Ok(Scenario::Single(InvestmentParams::Asb(self.asb_params()?))),
            "asbf" => Ok(Scenario::Single(InvestmentParams::Asbf(self.asbf_params("asbf")?))),
            "compare" => Ok(Scenario::Compare(ComparisonScenario::from_asbf(
                self.asbf_params("compare")?,
            ))),
            other => Err(CalculatorError::UnknownKind(other.to_string())),
        }
    }

    fn asb_params(&self) -> Result<AsbParams> {
        Ok(AsbParams {
            principal: self.principal.unwrap_or(0.0),
            monthly_investment: self.monthly_investment.unwrap_or(0.0),
            tenure_years: required("asb", "tenure_years", self.tenure_years)?,
            dividend_rate_percent: required("asb", "dividend_rate_percent", self.dividend_rate_percent)?,
            compounding: self.compounding.unwrap_or(true),
        })
    }

    fn asbf_params(&self, kind: &str) -> Result<AsbfParams> {
        Ok(AsbfParams {
            loan_amount: required(kind, "loan_amount", self.loan_amount)?,
            loan_tenure_years: required(kind, "loan_tenure_years", self.loan_tenure_years)?,
            tenure_years: required(kind, "tenure_years", self.tenure_years)?,
            interest_rate_percent: required(kind, "interest_rate_percent", self.interest_rate_percent)?,
            dividend_rate_percent: required(kind, "dividend_rate_percent", self.dividend_rate_percent)?,
            compounding: self.compounding.unwrap_or(true),
        })
    }
}

fn required<T>(kind: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| CalculatorError::MissingField {
        kind: kind.to_string(),
        field: field.to_string(),
    })
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    log::info!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    read_rows(&mut csv_reader)
}

fn read_rows<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}
