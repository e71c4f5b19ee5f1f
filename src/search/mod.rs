//! The generic state space search engine. A [`SearchProblem`] describes the
//! space, the engines in [`search_engines`] explore it, and [`heuristics`]
//! guide the best-first variant.

mod errors;
pub mod heuristics;
pub mod open_lists;
mod path;
mod plan;
mod problem;
pub mod search_engines;
mod validate;

pub use errors::SearchError;
pub use heuristics::{Heuristic, HeuristicValue, ZeroHeuristic};
pub use path::Path;
pub use plan::Plan;
pub use problem::{Cost, SearchProblem, Successor};
pub use search_engines::{
    astar_search, breadth_first_search, depth_first_search, uniform_cost_search, SearchEngine,
    SearchEngineName, SearchOutcome, SearchResult, SearchStatistics,
};
pub use validate::{replay, validate};
