//! Scenario runner for batch projections and what-if sweeps
//!
//! Every projection is independent, so batches and sweeps fan out across
//! threads with rayon. Output order always matches input order.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::comparison::{ComparisonReport, ComparisonScenario};
use crate::config::CalculatorDefaults;
use crate::error::Result;
use crate::params::{InvestmentParams, Scenario};
use crate::projection::{project, InvestmentResult};

/// Result of running one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum ScenarioOutcome {
    Single {
        params: InvestmentParams,
        result: InvestmentResult,
    },
    Compare(ComparisonReport),
}

impl ScenarioOutcome {
    /// Net profit of the single projection, or of the winner in a comparison
    pub fn headline_net_profit(&self) -> f64 {
        match self {
            ScenarioOutcome::Single { result, .. } => result.net_profit,
            ScenarioOutcome::Compare(report) => report.asb.net_profit.max(report.asbf.net_profit),
        }
    }
}

/// Net profits of both products at one dividend rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub dividend_rate_percent: f64,
    pub asb_net_profit: f64,
    pub asbf_net_profit: f64,
    pub difference: f64,
    pub asbf_is_better: bool,
}

/// Runs scenarios against a set of defaults
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_env();
/// let points = runner.sweep_dividend_rates(&runner.default_comparison(), &[4.0, 5.0, 6.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    defaults: CalculatorDefaults,
}

impl ScenarioRunner {
    /// Create runner with built-in defaults
    pub fn new() -> Self {
        Self {
            defaults: CalculatorDefaults::default(),
        }
    }

    /// Create runner with defaults overridden from the environment
    pub fn from_env() -> Self {
        Self {
            defaults: CalculatorDefaults::from_env(),
        }
    }

    pub fn with_defaults(defaults: CalculatorDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &CalculatorDefaults {
        &self.defaults
    }

    /// Comparison built from the default ASBF parameters
    pub fn default_comparison(&self) -> ComparisonScenario {
        ComparisonScenario::from_asbf(self.defaults.asbf)
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        match scenario {
            Scenario::Single(params) => ScenarioOutcome::Single {
                params: *params,
                result: project(params),
            },
            Scenario::Compare(comparison) => ScenarioOutcome::Compare(comparison.evaluate()),
        }
    }

    /// Run many scenarios in parallel without validation
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        log::info!("running {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Validate every scenario against the input limits, then run them
    ///
    /// Fails on the first invalid scenario before anything is projected.
    pub fn run_validated(&self, scenarios: &[Scenario]) -> Result<Vec<ScenarioOutcome>> {
        for (i, scenario) in scenarios.iter().enumerate() {
            scenario.validate(&self.defaults.limits).map_err(|e| {
                log::warn!("scenario {} ({}) rejected: {}", i + 1, scenario.kind(), e);
                e
            })?;
        }
        Ok(self.run_batch(scenarios))
    }

    /// Re-evaluate a comparison at each dividend rate
    pub fn sweep_dividend_rates(&self, scenario: &ComparisonScenario, rates: &[f64]) -> Vec<SweepPoint> {
        rates
            .par_iter()
            .map(|&rate| {
                let report = scenario.with_dividend_rate(rate).evaluate();
                SweepPoint {
                    dividend_rate_percent: rate,
                    asb_net_profit: report.asb.net_profit,
                    asbf_net_profit: report.asbf.net_profit,
                    difference: report.comparison.difference,
                    asbf_is_better: report.comparison.asbf_is_better,
                }
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Evenly spaced rates from `start` to `end` inclusive
pub fn rate_grid(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start {
        return vec![start];
    }
    let count = ((end - start) / step + 1e-9).floor() as usize;
    (0..=count).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{AsbParams, AsbfParams};

    fn scenarios() -> Vec<Scenario> {
        let defaults = CalculatorDefaults::default();
        vec![
            Scenario::Single(InvestmentParams::Asb(defaults.asb)),
            Scenario::Single(InvestmentParams::Asbf(defaults.asbf)),
            Scenario::Compare(ComparisonScenario::from_asbf(defaults.asbf)),
            Scenario::Single(InvestmentParams::Asb(AsbParams {
                tenure_years: 10,
                ..defaults.asb
            })),
        ]
    }

    #[test]
    fn test_batch_preserves_order() {
        let runner = ScenarioRunner::new();
        let input = scenarios();
        let outcomes = runner.run_batch(&input);
        assert_eq!(outcomes.len(), input.len());

        for (scenario, outcome) in input.iter().zip(&outcomes) {
            assert_eq!(runner.run(scenario), *outcome);
        }
        assert!(matches!(outcomes[2], ScenarioOutcome::Compare(_)));
    }

    #[test]
    fn test_run_validated_rejects_out_of_range() {
        let runner = ScenarioRunner::new();
        let mut input = scenarios();
        input.push(Scenario::Single(InvestmentParams::Asbf(AsbfParams {
            interest_rate_percent: -1.0,
            ..runner.defaults().asbf
        })));
        assert!(runner.run_validated(&input).is_err());
        assert!(runner.run_validated(&scenarios()).is_ok());
    }

    #[test]
    fn test_sweep_higher_rate_raises_profit() {
        let runner = ScenarioRunner::new();
        let rates = rate_grid(3.0, 8.0, 0.5);
        let points = runner.sweep_dividend_rates(&runner.default_comparison(), &rates);

        assert_eq!(points.len(), 11);
        assert_eq!(points[0].dividend_rate_percent, 3.0);
        assert!(points.windows(2).all(|w| w[1].asb_net_profit > w[0].asb_net_profit));
        assert!(points.windows(2).all(|w| w[1].asbf_net_profit > w[0].asbf_net_profit));
    }

    #[test]
    fn test_headline_net_profit() {
        let runner = ScenarioRunner::new();
        let outcome = runner.run(&Scenario::Compare(runner.default_comparison()));
        if let ScenarioOutcome::Compare(report) = outcome {
            assert_eq!(
                outcome.headline_net_profit(),
                report.asb.net_profit.max(report.asbf.net_profit)
            );
        } else {
            panic!("expected comparison outcome");
        }
    }

    #[test]
    fn test_rate_grid() {
        assert_eq!(rate_grid(4.0, 5.0, 0.25), vec![4.0, 4.25, 4.5, 4.75, 5.0]);
        assert_eq!(rate_grid(4.0, 5.0, 0.0), vec![4.0]);
        assert_eq!(rate_grid(1.0, 2.0, 0.1).len(), 11);
    }
}
