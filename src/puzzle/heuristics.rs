//! Admissible estimates for the sliding-tile puzzle. The blank is never
//! counted: a move displaces exactly one tile by one cell, so each estimate
//! drops by at most one per move.

use crate::puzzle::TileState;
use crate::search::{Heuristic, HeuristicValue, ZeroHeuristic};
use std::fmt::{self, Display};

/// Number of tiles not on their goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct MisplacedTiles;

impl Heuristic<TileState> for MisplacedTiles {
    fn evaluate(&mut self, state: &TileState) -> HeuristicValue {
        let misplaced = state
            .placed_tiles()
            .filter(|&(tile, row, col)| state.goal_position(tile) != (row, col))
            .count();
        (misplaced as f64).into()
    }
}

/// Sum over tiles of the straight-line distance to the goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistance;

impl Heuristic<TileState> for EuclideanDistance {
    fn evaluate(&mut self, state: &TileState) -> HeuristicValue {
        state
            .placed_tiles()
            .map(|(tile, row, col)| {
                let (goal_row, goal_col) = state.goal_position(tile);
                let d_row = row.abs_diff(goal_row) as f64;
                let d_col = col.abs_diff(goal_col) as f64;
                (d_row * d_row + d_col * d_col).sqrt()
            })
            .sum::<f64>()
            .into()
    }
}

/// Sum over tiles of the grid distance to the goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

impl Heuristic<TileState> for ManhattanDistance {
    fn evaluate(&mut self, state: &TileState) -> HeuristicValue {
        let distance: usize = state
            .placed_tiles()
            .map(|(tile, row, col)| {
                let (goal_row, goal_col) = state.goal_position(tile);
                row.abs_diff(goal_row) + col.abs_diff(goal_col)
            })
            .sum();
        (distance as f64).into()
    }
}

/// Tiles outside their goal row plus tiles outside their goal column.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowColumnMismatch;

impl Heuristic<TileState> for RowColumnMismatch {
    fn evaluate(&mut self, state: &TileState) -> HeuristicValue {
        let mismatches: usize = state
            .placed_tiles()
            .map(|(tile, row, col)| {
                let (goal_row, goal_col) = state.goal_position(tile);
                usize::from(row != goal_row) + usize::from(col != goal_col)
            })
            .sum();
        (mismatches as f64).into()
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum TileHeuristicName {
    #[clap(name = "misplaced", help = "Number of tiles out of place.")]
    MisplacedTiles,
    #[clap(name = "euclidean", help = "Sum of straight-line tile distances.")]
    Euclidean,
    #[clap(name = "manhattan", help = "Sum of grid tile distances.")]
    Manhattan,
    #[clap(
        name = "row-column",
        help = "Tiles out of their row plus tiles out of their column."
    )]
    RowColumn,
    #[clap(name = "zero", help = "The zero heuristic.")]
    Zero,
}

impl TileHeuristicName {
    /// The informative heuristics, compared against each other by the
    /// heuristic benchmark.
    pub const INFORMATIVE: [TileHeuristicName; 4] = [
        TileHeuristicName::MisplacedTiles,
        TileHeuristicName::Euclidean,
        TileHeuristicName::Manhattan,
        TileHeuristicName::RowColumn,
    ];

    pub fn create(&self) -> Box<dyn Heuristic<TileState>> {
        match self {
            TileHeuristicName::MisplacedTiles => Box::new(MisplacedTiles),
            TileHeuristicName::Euclidean => Box::new(EuclideanDistance),
            TileHeuristicName::Manhattan => Box::new(ManhattanDistance),
            TileHeuristicName::RowColumn => Box::new(RowColumnMismatch),
            TileHeuristicName::Zero => Box::new(ZeroHeuristic::new()),
        }
    }
}

impl Display for TileHeuristicName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileHeuristicName::MisplacedTiles => "Misplaced Tiles",
            TileHeuristicName::Euclidean => "Euclidean Distance",
            TileHeuristicName::Manhattan => "Manhattan Distance",
            TileHeuristicName::RowColumn => "Row/Col Difference",
            TileHeuristicName::Zero => "Zero",
        };
        write!(f, "{}", name)
    }
}
