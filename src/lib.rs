//! ASB Calculator - Projection and comparison engine for ASB and ASBF investments
//!
//! This library provides:
//! - Fixed-rate loan amortization (instalment, remaining balance, schedule)
//! - ASB savings projections with annual compounded or simple dividends
//! - ASBF (loan-funded ASB) projections of dividend and surrender value
//! - ASB vs ASBF comparison with a break-even dividend rate search
//! - Batch and dividend-rate sweep runners

pub mod comparison;
pub mod config;
pub mod error;
pub mod format;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use comparison::{compare, ComparisonReport, ComparisonResult, ComparisonScenario};
pub use config::{CalculatorDefaults, InputLimits};
pub use error::CalculatorError;
pub use params::{AsbParams, AsbfParams, InvestmentParams, Scenario};
pub use projection::{project, project_asb, project_asbf, InvestmentResult};
pub use scenario::{ScenarioOutcome, ScenarioRunner};
