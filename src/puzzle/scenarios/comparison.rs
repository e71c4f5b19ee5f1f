use crate::puzzle::scenarios::{Summary, Trial};
use crate::puzzle::{TileHeuristicName, TileState};
use crate::search::SearchEngineName;
use tracing::{debug, info};

/// Every trial of a batch, in scenario order, and one summary per contender.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub trials: Vec<Trial>,
    pub summaries: Vec<Summary>,
}

#[derive(Debug)]
struct Contender {
    label: String,
    engine: SearchEngineName,
    heuristic: TileHeuristicName,
}

fn run_batch(scenarios: &[TileState], contenders: &[Contender]) -> BatchReport {
    let mut summaries: Vec<Summary> = contenders
        .iter()
        .map(|contender| Summary::new(&contender.label))
        .collect();
    let mut trials = Vec::with_capacity(scenarios.len() * contenders.len());

    for (index, state) in scenarios.iter().enumerate() {
        info!(scenario = index + 1, of = scenarios.len(), "running scenario");
        debug!("\n{}", state);
        for (contender, summary) in contenders.iter().zip(summaries.iter_mut()) {
            let trial = Trial::run(
                index + 1,
                &contender.label,
                state,
                contender.engine,
                contender.heuristic,
            );
            summary.add(&trial);
            trials.push(trial);
        }
    }

    BatchReport { trials, summaries }
}

/// Run A* with each of `heuristics` on every scenario.
pub fn compare_heuristics(
    scenarios: &[TileState],
    heuristics: &[TileHeuristicName],
) -> BatchReport {
    let contenders: Vec<Contender> = heuristics
        .iter()
        .map(|&heuristic| Contender {
            label: heuristic.to_string(),
            engine: SearchEngineName::AStar,
            heuristic,
        })
        .collect();
    run_batch(scenarios, &contenders)
}

/// Run each of `engines` on every scenario. Only A* consults `heuristic`.
pub fn compare_strategies(
    scenarios: &[TileState],
    engines: &[SearchEngineName],
    heuristic: TileHeuristicName,
) -> BatchReport {
    let contenders: Vec<Contender> = engines
        .iter()
        .map(|&engine| Contender {
            label: if engine.uses_heuristic() {
                format!("{} ({})", engine, heuristic)
            } else {
                engine.to_string()
            },
            engine,
            heuristic,
        })
        .collect();
    run_batch(scenarios, &contenders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn scenarios() -> Vec<TileState> {
        (0..3).map(|seed| scrambled_board(3, 12, seed)).collect()
    }

    #[test]
    fn admissible_heuristics_agree_on_depth() {
        let scenarios = scenarios();
        let report = compare_heuristics(&scenarios, &TileHeuristicName::INFORMATIVE);

        assert_eq!(report.trials.len(), 12);
        assert_eq!(report.summaries.len(), 4);
        assert_eq!(report.summaries[2].label, "Manhattan Distance");
        for summary in &report.summaries {
            assert_eq!(summary.solved, 3);
            assert_eq!(summary.average_depth(), report.summaries[0].average_depth());
        }
        for chunk in report.trials.chunks(4) {
            assert!(chunk.iter().all(|trial| trial.scenario == chunk[0].scenario));
        }
    }

    #[test]
    fn optimal_strategies_agree_on_depth() {
        let scenarios = scenarios();
        let engines = [
            SearchEngineName::BFS,
            SearchEngineName::UCS,
            SearchEngineName::AStar,
        ];
        let report = compare_strategies(&scenarios, &engines, TileHeuristicName::Manhattan);

        let labels: Vec<&str> = report
            .summaries
            .iter()
            .map(|summary| summary.label.as_str())
            .collect();
        assert_eq!(labels, vec!["BFS", "UCS", "A* (Manhattan Distance)"]);

        for chunk in report.trials.chunks(3) {
            assert!(chunk.iter().all(|trial| trial.is_solved()));
            assert_eq!(chunk[0].plan_length, chunk[1].plan_length);
            assert_eq!(chunk[1].plan_length, chunk[2].plan_length);
            assert!(chunk[2].expanded_nodes <= chunk[1].expanded_nodes);
        }
    }

    #[test]
    fn empty_batch() {
        let report = compare_strategies(&[], &SearchEngineName::ALL, TileHeuristicName::Zero);
        assert!(report.trials.is_empty());
        assert_eq!(report.summaries.len(), 4);
        assert!(report.summaries.iter().all(|summary| summary.trials == 0));
    }
}
