//! Error types for command parsing and configuration loading.

use std::num::ParseIntError;
use thiserror::Error;

/// A command line that could not be turned into a [`Command`](crate::Command).
///
/// Every variant is recoverable: the robot is never touched when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first token is not one of the five command names.
    #[error(
        "Sorry, your command was not recognised. Please try again using the following format: PLACE X,Y,Direction|MOVE|LEFT|RIGHT|REPORT"
    )]
    Unrecognised { input: String },

    /// `PLACE` was given the wrong number of tokens or comma-separated fields.
    #[error("Incomplete command. Please ensure that the PLACE command is using format: PLACE X,Y,Direction")]
    Incomplete,

    /// The third `PLACE` field is not a compass direction.
    #[error("Invalid direction. Please select from one of the following directions: NORTH|EAST|SOUTH|WEST")]
    InvalidDirection { input: String },

    /// An `x` or `y` field is not an integer.
    #[error("Invalid coordinate '{input}'. Please ensure that X and Y are whole numbers")]
    InvalidCoordinate {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure to build a simulator from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid board size {rows}x{columns}: rows and columns must be positive")]
    InvalidBoard { rows: u32, columns: u32 },
}

pub type Result<T> = std::result::Result<T, CommandError>;
