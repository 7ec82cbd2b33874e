//! ASB vs ASBF comparison and break-even search

pub mod break_even;
mod compare;
mod scenario;

pub use break_even::break_even_rate;
pub use compare::{compare, ComparisonResult};
pub use scenario::{ComparisonReport, ComparisonScenario};
