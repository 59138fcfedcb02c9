use crate::board::Board;
use crate::error::ConfigError;
use crate::processor::CommandProcessor;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Simulator configuration, usually read from a TOML file such as:
///
/// ```toml
/// rows = 6
/// columns = 6
/// ```
///
/// Missing keys fall back to the 6x6 default table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub rows: u32,
    pub columns: u32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let board = Board::default();
        Self {
            rows: board.rows(),
            columns: board.columns(),
        }
    }
}

impl SimulatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Builds the board, rejecting a zero-sized table.
    pub fn board(&self) -> Result<Board, ConfigError> {
        Board::new(self.rows, self.columns).ok_or(ConfigError::InvalidBoard {
            rows: self.rows,
            columns: self.columns,
        })
    }

    pub fn processor(&self) -> Result<CommandProcessor, ConfigError> {
        Ok(CommandProcessor::new(self.board()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_to_six_by_six() {
        let config = SimulatorConfig::default();
        assert_eq!((config.rows, config.columns), (6, 6));
        assert_eq!(config.board().unwrap(), Board::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SimulatorConfig::from_toml_str("columns = 10").unwrap();
        assert_eq!(config.columns, 10);
        assert_eq!(config.rows, 6);

        let config = SimulatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, SimulatorConfig::default());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            SimulatorConfig::from_toml_str("rows = \"six\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            SimulatorConfig::from_toml_str("rows = -1"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        let config = SimulatorConfig {
            rows: 0,
            columns: 4,
        };
        assert!(matches!(
            config.board(),
            Err(ConfigError::InvalidBoard {
                rows: 0,
                columns: 4
            })
        ));
        assert!(config.processor().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = 3\ncolumns = 8").unwrap();

        let config = SimulatorConfig::load(file.path()).unwrap();
        let processor = config.processor().unwrap();
        assert_eq!(processor.board().rows(), 3);
        assert_eq!(processor.board().columns(), 8);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            SimulatorConfig::load(dir.path().join("absent.toml")),
            Err(ConfigError::Io(_))
        ));
    }
}
