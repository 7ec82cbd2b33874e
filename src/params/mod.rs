//! Parameter sets and scenario loading

mod data;
pub mod loader;

pub use data::{AsbParams, AsbfParams, InvestmentParams, MONTHS_PER_YEAR};
pub use loader::{load_scenarios, load_scenarios_from_reader, Scenario};
