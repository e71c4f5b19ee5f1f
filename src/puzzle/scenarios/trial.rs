use crate::puzzle::{TileHeuristicName, TilePuzzle, TileState};
use crate::search::{Plan, SearchEngineName};
use humantime::format_duration;
use std::fmt::{self, Display};
use std::time::Duration;
use tracing::info;

/// The measurements of one search run on one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trial {
    /// 1-based index of the scenario in its batch
    pub scenario: usize,
    pub label: String,
    /// Length of the plan found, `None` if the search gave up
    pub plan_length: Option<usize>,
    pub expanded_nodes: usize,
    pub max_frontier_size: usize,
    pub duration: Duration,
}

impl Trial {
    /// Solve `state` from scratch with the given engine. Each trial gets its
    /// own problem instance.
    pub fn run(
        scenario: usize,
        label: &str,
        state: &TileState,
        engine: SearchEngineName,
        heuristic: TileHeuristicName,
    ) -> Self {
        let problem = TilePuzzle::new(state.clone());
        let outcome = engine.search(&problem, heuristic.create());
        let trial = Self {
            scenario,
            label: label.to_string(),
            plan_length: outcome.result.plan().map(Plan::len),
            expanded_nodes: outcome.statistics.expanded_nodes(),
            max_frontier_size: outcome.statistics.max_frontier_size(),
            duration: outcome.statistics.search_duration(),
        };
        info!(
            scenario,
            label,
            plan_length = trial.plan_length,
            expanded_nodes = trial.expanded_nodes,
            max_frontier_size = trial.max_frontier_size,
            duration = trial.duration.as_secs_f64(),
            "trial finished"
        );
        trial
    }

    pub fn is_solved(&self) -> bool {
        self.plan_length.is_some()
    }
}

impl Display for Trial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plan_length {
            Some(depth) => {
                let micros = Duration::from_micros(self.duration.as_micros() as u64);
                write!(
                    f,
                    "{}: depth={}, expansions={}, fringe={}, time={}",
                    self.label,
                    depth,
                    self.expanded_nodes,
                    self.max_frontier_size,
                    format_duration(micros)
                )
            }
            None => write!(f, "{}: no solution found", self.label),
        }
    }
}
