//! The sliding-tile puzzle: a `width × width` board holding the tiles
//! `1..width²` and one blank, solved when the tiles are in row-major order with
//! the blank in the bottom-right corner. Used to drive the search engines.

mod errors;
mod heuristics;
mod moves;
pub mod scenarios;
mod scrambler;
mod tile_puzzle;
mod tile_state;

pub use errors::PuzzleError;
pub use heuristics::{
    EuclideanDistance, ManhattanDistance, MisplacedTiles, RowColumnMismatch, TileHeuristicName,
};
pub use moves::Move;
pub use scrambler::Scrambler;
pub use tile_puzzle::TilePuzzle;
pub use tile_state::TileState;
