use crate::puzzle::scenarios::Trial;
use std::fmt::{self, Display};
use std::time::Duration;

/// Aggregated results of one contender over a batch. Averages are taken over
/// the solved trials only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub label: String,
    pub trials: usize,
    pub solved: usize,
    total_depth: usize,
    total_expanded: usize,
    total_frontier: usize,
    total_duration: Duration,
}

impl Summary {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            trials: 0,
            solved: 0,
            total_depth: 0,
            total_expanded: 0,
            total_frontier: 0,
            total_duration: Duration::ZERO,
        }
    }

    pub fn add(&mut self, trial: &Trial) {
        self.trials += 1;
        if let Some(depth) = trial.plan_length {
            self.solved += 1;
            self.total_depth += depth;
            self.total_expanded += trial.expanded_nodes;
            self.total_frontier += trial.max_frontier_size;
            self.total_duration += trial.duration;
        }
    }

    fn average(&self, total: usize) -> Option<f64> {
        (self.solved > 0).then(|| total as f64 / self.solved as f64)
    }

    pub fn average_depth(&self) -> Option<f64> {
        self.average(self.total_depth)
    }

    pub fn average_expanded(&self) -> Option<f64> {
        self.average(self.total_expanded)
    }

    pub fn average_frontier(&self) -> Option<f64> {
        self.average(self.total_frontier)
    }

    pub fn average_duration(&self) -> Option<Duration> {
        u32::try_from(self.solved)
            .ok()
            .filter(|&solved| solved > 0)
            .map(|solved| self.total_duration / solved)
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (
            self.average_depth(),
            self.average_expanded(),
            self.average_frontier(),
            self.average_duration(),
        ) {
            (Some(depth), Some(expanded), Some(frontier), Some(duration)) => write!(
                f,
                "{}: #Solved={}/{}, avgDepth={:.2}, avgTime={:.3}s, avgExp={:.1}, avgFringe={:.1}",
                self.label,
                self.solved,
                self.trials,
                depth,
                duration.as_secs_f64(),
                expanded,
                frontier
            ),
            _ => write!(f, "{}: no solutions found", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(plan_length: Option<usize>, expanded_nodes: usize, millis: u64) -> Trial {
        Trial {
            scenario: 1,
            label: "test".to_string(),
            plan_length,
            expanded_nodes,
            max_frontier_size: expanded_nodes * 2,
            duration: Duration::from_millis(millis),
        }
    }

    #[test]
    fn averages_skip_unsolved_trials() {
        let mut summary = Summary::new("UCS");
        summary.add(&trial(Some(4), 10, 20));
        summary.add(&trial(None, 1000, 5000));
        summary.add(&trial(Some(6), 30, 40));

        assert_eq!(summary.trials, 3);
        assert_eq!(summary.solved, 2);
        assert_eq!(summary.average_depth(), Some(5.));
        assert_eq!(summary.average_expanded(), Some(20.));
        assert_eq!(summary.average_frontier(), Some(40.));
        assert_eq!(summary.average_duration(), Some(Duration::from_millis(30)));
        assert_eq!(
            summary.to_string(),
            "UCS: #Solved=2/3, avgDepth=5.00, avgTime=0.030s, avgExp=20.0, avgFringe=40.0"
        );
    }

    #[test]
    fn nothing_solved() {
        let mut summary = Summary::new("DFS");
        summary.add(&trial(None, 5, 1));
        assert_eq!(summary.average_depth(), None);
        assert_eq!(summary.average_duration(), None);
        assert_eq!(summary.to_string(), "DFS: no solutions found");
    }
}
