//! # toy-robot
//!
//! A toy robot walking a bounded rectangular table, driven by text commands:
//! `PLACE X,Y,DIRECTION`, `MOVE`, `LEFT`, `RIGHT` and `REPORT`.
//!
//! Commands that would take the robot off the table are ignored, as is everything but
//! `PLACE` until the robot has been placed. The [`CommandProcessor`] owns the state machine;
//! [`Session`] wraps it in a line-oriented read loop.

pub mod board;
pub mod command;
pub mod config;
pub mod error;
pub mod logger;
pub mod processor;
pub mod robot;
pub mod shell;

pub use board::*;
pub use command::*;
pub use config::*;
pub use error::{CommandError, ConfigError};
pub use processor::*;
pub use robot::*;
pub use shell::*;
