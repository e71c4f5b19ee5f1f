//! Batches of puzzles: scenario files holding one board per line, random
//! scenario generation, and benchmark runs that compare search engines or
//! heuristics across a batch.

mod comparison;
mod errors;
mod scenario_config;
mod scenario_file;
mod summary;
mod trial;

pub use comparison::{compare_heuristics, compare_strategies, BatchReport};
pub use errors::ScenarioError;
pub use scenario_config::ScenarioConfig;
pub use scenario_file::{format_scenario, parse_scenarios, read_scenarios, write_scenarios};
pub use summary::Summary;
pub use trial::Trial;
