use std::time::{Duration, Instant};
use tracing::info;

/// Counters collected by a single search run. Each run owns its statistics and
/// hands them back with the result, so nothing has to be reset between trials.
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes popped from the frontier, whether or not they were
    /// expanded further
    expanded_nodes: usize,
    /// Largest frontier size seen right before a pop
    max_frontier_size: usize,
    /// Number of successor nodes offered to the frontier
    generated_nodes: usize,
    /// Number of popped nodes discarded because their state was already
    /// expanded at least as cheaply
    pruned_nodes: usize,
    /// Number of frontier entries whose priority was lowered in place
    decreased_nodes: usize,
    /// Number of heuristic evaluations
    evaluated_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Set once the search has finished
    search_duration: Option<Duration>,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        info!("starting search");
        Self {
            expanded_nodes: 0,
            max_frontier_size: 0,
            generated_nodes: 0,
            pruned_nodes: 0,
            decreased_nodes: 0,
            evaluated_nodes: 0,
            search_start_time: Instant::now(),
            search_duration: None,
            last_log_time: Instant::now(),
        }
    }

    pub fn record_frontier_size(&mut self, size: usize) {
        self.max_frontier_size = self.max_frontier_size.max(size);
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self) {
        self.generated_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn increment_decreased_nodes(&mut self) {
        self.decreased_nodes += 1;
    }

    pub fn increment_evaluated_nodes(&mut self) {
        self.evaluated_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn max_frontier_size(&self) -> usize {
        self.max_frontier_size
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn decreased_nodes(&self) -> usize {
        self.decreased_nodes
    }

    pub fn evaluated_nodes(&self) -> usize {
        self.evaluated_nodes
    }

    /// Wall clock time of the search, or the time elapsed so far if it is
    /// still running.
    pub fn search_duration(&self) -> Duration {
        self.search_duration
            .unwrap_or_else(|| self.search_start_time.elapsed())
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        info!(
            expanded_nodes = self.expanded_nodes,
            max_frontier_size = self.max_frontier_size,
            generated_nodes = self.generated_nodes,
            pruned_nodes = self.pruned_nodes,
            decreased_nodes = self.decreased_nodes,
            evaluated_nodes = self.evaluated_nodes,
        );
    }

    pub fn finalise_search(&mut self) {
        let duration = self.search_start_time.elapsed();
        self.search_duration = Some(duration);
        info!("finalising search");
        self.log();
        info!(search_duration = duration.as_secs_f64());
    }
}
