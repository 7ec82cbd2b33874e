//! Sweep the dividend rate for the default comparison and write net profits
//!
//! Usage: cargo run --bin rate_sweep [output.csv]
//! Accepts config via environment variables:
//!   SWEEP_START, SWEEP_END, SWEEP_STEP (percent)
//!   plus the ASBF_* defaults read by CalculatorDefaults::from_env

use anyhow::{Context, Result};
use asb_calculator::config::env_var_or;
use asb_calculator::scenario::{rate_grid, ScenarioRunner};
use std::env;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let output_path = env::args().nth(1).unwrap_or_else(|| "rate_sweep.csv".to_string());
    let start = Instant::now();

    let rates = rate_grid(
        env_var_or("SWEEP_START", 3.0),
        env_var_or("SWEEP_END", 10.0),
        env_var_or("SWEEP_STEP", 0.25),
    );

    let runner = ScenarioRunner::from_env();
    let scenario = runner.default_comparison();
    log::info!(
        "sweeping {} rates for RM {:.0} over {} years",
        rates.len(),
        scenario.asbf.loan_amount,
        scenario.asbf.tenure_years
    );

    let points = runner.sweep_dividend_rates(&scenario, &rates);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    for point in &points {
        writer.serialize(point)?;
    }
    writer.flush()?;

    if let Some(crossover) = points.iter().find(|p| p.asbf_is_better) {
        println!("ASBF overtakes ASB from {:.2}%", crossover.dividend_rate_percent);
    } else {
        println!("ASB stays ahead across the swept range");
    }

    println!("Written {} rates to {} in {:?}", points.len(), output_path, start.elapsed());
    Ok(())
}
