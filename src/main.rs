//! ASB Calculator CLI
//!
//! Command-line front end for ASB / ASBF projections and comparisons

use anyhow::{Context, Result};
use asb_calculator::{
    format::format_ringgit,
    params::load_scenarios,
    projection::{
        amortization_schedule, asb_growth_series, asbf_growth_series, project_asb, project_asbf,
    },
    AsbParams, AsbfParams, ComparisonScenario, InvestmentResult, ScenarioOutcome,
    ScenarioRunner,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "asb_calculator", version, about = "ASB and ASBF investment calculator")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project an ASB savings plan
    Asb {
        #[command(flatten)]
        params: AsbArgs,
        /// Include the half-yearly growth series
        #[arg(long)]
        growth: bool,
    },
    /// Project a loan-funded ASBF position
    Asbf {
        #[command(flatten)]
        params: AsbfArgs,
        /// Include the half-yearly growth series
        #[arg(long)]
        growth: bool,
    },
    /// Compare ASBF against depositing its instalment into ASB
    Compare {
        #[command(flatten)]
        params: AsbfArgs,
    },
    /// Print the loan amortization schedule
    Schedule {
        #[command(flatten)]
        params: AsbfArgs,
        /// Number of months to list (defaults to the holding tenure)
        #[arg(long)]
        months: Option<u32>,
        /// Write the schedule to a CSV file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run every scenario in a CSV file
    Batch {
        /// Scenario CSV file
        path: PathBuf,
        /// Write a results CSV to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct AsbArgs {
    /// Initial lump sum (RM)
    #[arg(long)]
    principal: Option<f64>,
    /// Monthly deposit (RM)
    #[arg(long)]
    monthly: Option<f64>,
    /// Investment period in years
    #[arg(long)]
    tenure: Option<u32>,
    /// Annual dividend rate (%)
    #[arg(long)]
    dividend_rate: Option<f64>,
    /// Reinvest dividends
    #[arg(long)]
    compounding: Option<bool>,
}

impl AsbArgs {
    fn apply(&self, base: AsbParams) -> AsbParams {
        AsbParams {
            principal: self.principal.unwrap_or(base.principal),
            monthly_investment: self.monthly.unwrap_or(base.monthly_investment),
            tenure_years: self.tenure.unwrap_or(base.tenure_years),
            dividend_rate_percent: self.dividend_rate.unwrap_or(base.dividend_rate_percent),
            compounding: self.compounding.unwrap_or(base.compounding),
        }
    }
}

#[derive(Args)]
struct AsbfArgs {
    /// Loan amount (RM)
    #[arg(long)]
    loan_amount: Option<f64>,
    /// Loan period in years
    #[arg(long)]
    loan_tenure: Option<u32>,
    /// Investment period in years
    #[arg(long)]
    tenure: Option<u32>,
    /// Annual loan interest rate (%)
    #[arg(long)]
    interest_rate: Option<f64>,
    /// Annual dividend rate (%)
    #[arg(long)]
    dividend_rate: Option<f64>,
    /// Reinvest dividends (comparison ASB side)
    #[arg(long)]
    compounding: Option<bool>,
}

impl AsbfArgs {
    fn apply(&self, base: AsbfParams) -> AsbfParams {
        AsbfParams {
            loan_amount: self.loan_amount.unwrap_or(base.loan_amount),
            loan_tenure_years: self.loan_tenure.unwrap_or(base.loan_tenure_years),
            tenure_years: self.tenure.unwrap_or(base.tenure_years),
            interest_rate_percent: self.interest_rate.unwrap_or(base.interest_rate_percent),
            dividend_rate_percent: self.dividend_rate.unwrap_or(base.dividend_rate_percent),
            compounding: self.compounding.unwrap_or(base.compounding),
        }
    }
}

/// Flat per-scenario row for batch CSV output
#[derive(Serialize)]
struct BatchRow {
    scenario: usize,
    kind: &'static str,
    total_principal: f64,
    dividend: f64,
    net_profit: f64,
    monthly_payment: f64,
    surrender_value: Option<f64>,
    asb_net_profit: Option<f64>,
    break_even_rate_percent: Option<f64>,
    winner: Option<&'static str>,
}

impl BatchRow {
    fn from_outcome(scenario: usize, outcome: &ScenarioOutcome) -> Self {
        match outcome {
            ScenarioOutcome::Single { params, result } => Self {
                scenario,
                kind: params.kind(),
                total_principal: result.total_principal,
                dividend: result.dividend,
                net_profit: result.net_profit,
                monthly_payment: result.monthly_payment,
                surrender_value: result.surrender_value,
                asb_net_profit: None,
                break_even_rate_percent: None,
                winner: None,
            },
            ScenarioOutcome::Compare(report) => Self {
                scenario,
                kind: "compare",
                total_principal: report.asbf.total_principal,
                dividend: report.asbf.dividend,
                net_profit: report.asbf.net_profit,
                monthly_payment: report.asbf.monthly_payment,
                surrender_value: report.asbf.surrender_value,
                asb_net_profit: Some(report.asb.net_profit),
                break_even_rate_percent: Some(report.comparison.break_even_rate_percent),
                winner: Some(report.winner()),
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::from_env();
    let defaults = *runner.defaults();

    match cli.command {
        Commands::Asb { params, growth } => {
            let params = params.apply(defaults.asb);
            params.validate(&defaults.limits).context("invalid ASB parameters")?;
            let result = project_asb(&params);

            if cli.json {
                let series = growth.then(|| asb_growth_series(&params));
                print_json(&serde_json::json!({ "params": params, "result": result, "growth": series }))?;
            } else {
                println!("ASB projection ({} years)", params.tenure_years);
                print_result(&result);
                if growth {
                    println!("\n{:>6} {:>16} {:>16}", "Month", "Balance", "Dividend");
                    for point in asb_growth_series(&params) {
                        println!("{:>6} {:>16} {:>16}", point.month, format_ringgit(point.balance), format_ringgit(point.dividend));
                    }
                }
            }
        }
        Commands::Asbf { params, growth } => {
            let params = params.apply(defaults.asbf);
            params.validate(&defaults.limits).context("invalid ASBF parameters")?;
            let result = project_asbf(&params);

            if cli.json {
                let series = growth.then(|| asbf_growth_series(&params));
                print_json(&serde_json::json!({ "params": params, "result": result, "growth": series }))?;
            } else {
                println!("ASBF projection ({} of {} loan years)", params.tenure_years, params.loan_tenure_years);
                print_result(&result);
                if result.loan_repaid() {
                    println!("  Loan fully repaid before the end of the holding period");
                }
                if growth {
                    println!("\n{:>6} {:>16} {:>16} {:>16}", "Month", "Loan Balance", "Surrender", "Net");
                    for point in asbf_growth_series(&params) {
                        println!(
                            "{:>6} {:>16} {:>16} {:>16}",
                            point.month,
                            format_ringgit(point.loan_balance),
                            format_ringgit(point.surrender_value),
                            format_ringgit(point.net_profit)
                        );
                    }
                }
            }
        }
        Commands::Compare { params } => {
            let params = params.apply(defaults.asbf);
            params.validate(&defaults.limits).context("invalid ASBF parameters")?;
            let report = ComparisonScenario::from_asbf(params).evaluate();

            if cli.json {
                print_json(&report)?;
            } else {
                println!("{:<22} {:>18} {:>18}", "Metric", "ASB", "ASBF");
                println!("{}", "-".repeat(60));
                println!("{:<22} {:>18} {:>18}", "Total Investment", format_ringgit(report.asb.total_principal), format_ringgit(report.asbf.total_principal));
                println!("{:<22} {:>18} {:>18}", "Total Dividends", format_ringgit(report.asb.dividend), format_ringgit(report.asbf.dividend));
                println!("{:<22} {:>18} {:>18}", "Surrender Value", "-", format_ringgit(report.asbf.surrender_value.unwrap_or(0.0)));
                println!("{:<22} {:>18} {:>18}", format!("Balance After {}y", report.tenure_years), format_ringgit(report.asb.net_profit), format_ringgit(report.asbf.net_profit));
                println!("\n{}", report);
            }
        }
        Commands::Schedule { params, months, output } => {
            let params = params.apply(defaults.asbf);
            params.validate(&defaults.limits).context("invalid ASBF parameters")?;
            let months = months.unwrap_or_else(|| params.months());
            params
                .validate_schedule_months(months, &defaults.limits)
                .context("invalid schedule length")?;
            let schedule = amortization_schedule(
                params.loan_amount,
                params.loan_tenure_years,
                params.interest_rate_percent,
                months,
            );

            if let Some(path) = output {
                let mut writer = csv::Writer::from_path(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                for row in &schedule {
                    writer.serialize(row)?;
                }
                writer.flush()?;
                println!("{} months written to: {}", schedule.len(), path.display());
            } else if cli.json {
                print_json(&schedule)?;
            } else {
                println!("{:>6} {:>14} {:>14} {:>14} {:>16}", "Month", "Payment", "Interest", "Principal", "Balance");
                println!("{}", "-".repeat(68));
                for row in &schedule {
                    println!("{:>6} {:>14.2} {:>14.2} {:>14.2} {:>16.2}", row.month, row.payment, row.interest, row.principal, row.balance);
                }
            }
        }
        Commands::Batch { path, output } => {
            let scenarios = load_scenarios(&path)
                .with_context(|| format!("Failed to load scenarios from {}", path.display()))?;
            let outcomes = runner.run_validated(&scenarios)?;
            let rows: Vec<BatchRow> = outcomes
                .iter()
                .enumerate()
                .map(|(i, outcome)| BatchRow::from_outcome(i + 1, outcome))
                .collect();

            if let Some(out) = output {
                let mut writer = csv::Writer::from_path(&out)
                    .with_context(|| format!("Failed to create {}", out.display()))?;
                for row in &rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
                println!("{} scenarios written to: {}", rows.len(), out.display());
            } else if cli.json {
                print_json(&outcomes)?;
            } else {
                println!("{:>4} {:<8} {:>18} {:>18} {:>10}", "#", "Kind", "Net Profit", "ASB Net", "Winner");
                println!("{}", "-".repeat(62));
                for row in &rows {
                    println!(
                        "{:>4} {:<8} {:>18} {:>18} {:>10}",
                        row.scenario,
                        row.kind,
                        format_ringgit(row.net_profit),
                        row.asb_net_profit.map(format_ringgit).unwrap_or_else(|| "-".to_string()),
                        row.winner.unwrap_or("-"),
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_result(result: &InvestmentResult) {
    println!("  Total Principal:  {}", format_ringgit(result.total_principal));
    println!("  Total Dividend:   {}", format_ringgit(result.dividend));
    if result.monthly_payment > 0.0 {
        println!("  Monthly Payment:  {}", format_ringgit(result.monthly_payment));
    }
    if let Some(surrender) = result.surrender_value {
        println!("  Surrender Value:  {}", format_ringgit(surrender));
    }
    println!("  Net Profit:       {}", format_ringgit(result.net_profit));
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
