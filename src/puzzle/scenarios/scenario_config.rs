use crate::puzzle::{scenarios::ScenarioError, Scrambler, TileState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// How to generate a batch of random scenarios. Every field is optional in the
/// TOML file, e.g.
///
/// ```toml
/// count = 20
/// scramble-moves = 50
/// width = 4
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Number of boards to generate
    pub count: usize,
    /// Number of random moves applied to the solved board
    pub scramble_moves: usize,
    /// Board width, 4 for the fifteen puzzle
    pub width: usize,
    /// Seed for reproducible batches, random when absent
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            count: 20,
            scramble_moves: 50,
            width: 4,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let text = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(text)?)
    }

    pub fn generate(&self) -> Result<Vec<TileState>, ScenarioError> {
        info!(
            count = self.count,
            scramble_moves = self.scramble_moves,
            width = self.width,
            seed = self.seed,
            "generating scenarios"
        );
        let mut scrambler = Scrambler::new(self.seed);
        (0..self.count)
            .map(|_| {
                scrambler
                    .scramble(self.width, self.scramble_moves)
                    .map_err(ScenarioError::from)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(ScenarioConfig::from_text("").unwrap(), ScenarioConfig::default());
    }

    #[test]
    fn parses_kebab_case_fields() {
        let config = ScenarioConfig::from_text("count = 3\nscramble-moves = 10\nseed = 9\n").unwrap();
        assert_eq!(
            config,
            ScenarioConfig {
                count: 3,
                scramble_moves: 10,
                width: 4,
                seed: Some(9),
            }
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            ScenarioConfig::from_text("shuffle = 10"),
            Err(ScenarioError::Config(_))
        ));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = ScenarioConfig {
            count: 5,
            scramble_moves: 20,
            width: 3,
            seed: Some(1),
        };
        let first = config.generate().unwrap();
        assert_eq!(first.len(), 5);
        assert!(first.iter().all(|state| state.width() == 3));
        assert_eq!(config.generate().unwrap(), first);
    }

    #[test]
    fn invalid_width_is_reported() {
        let config = ScenarioConfig {
            width: 1,
            ..ScenarioConfig::default()
        };
        assert!(matches!(config.generate(), Err(ScenarioError::Puzzle(_))));
    }
}
