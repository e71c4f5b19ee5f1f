use crate::puzzle::{scenarios::ScenarioError, TileState};
use itertools::Itertools;
use std::fs;
use std::path::Path;

/// One board per line as comma separated tile numbers in row-major order,
/// e.g. `1,2,3,4,5,6,7,8,9,10,11,12,13,14,0,15`. Blank lines are skipped.
pub fn parse_scenarios(text: &str) -> Result<Vec<TileState>, ScenarioError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_number: usize, line: &str) -> Result<TileState, ScenarioError> {
    let tiles = line
        .split(',')
        .map(|value| {
            value
                .trim()
                .parse::<u8>()
                .map_err(|_| ScenarioError::InvalidNumber {
                    line: line_number,
                    value: value.trim().to_string(),
                })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    TileState::new(tiles).map_err(|source| ScenarioError::InvalidBoard {
        line: line_number,
        source,
    })
}

pub fn format_scenario(state: &TileState) -> String {
    state.tiles().iter().join(",")
}

pub fn read_scenarios(path: &Path) -> Result<Vec<TileState>, ScenarioError> {
    let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenarios(&text)
}

pub fn write_scenarios(path: &Path, states: &[TileState]) -> Result<(), ScenarioError> {
    let mut text = states.iter().map(format_scenario).join("\n");
    text.push('\n');
    fs::write(path, text).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })
}
