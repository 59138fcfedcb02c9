//! Command processor: the state machine that drives a [`Robot`] around a [`Board`].
//!
//! The entry point is [`CommandProcessor`]. Build it from a [`Board`], then feed it one
//! input line at a time through [`CommandProcessor::process_line`] (or pre-split tokens
//! through [`CommandProcessor::process_command`]).

use crate::board::Board;
use crate::command::{
    Command, CommandKind, PLACE_FIELD_COUNT, parse_command, parse_place_parameter,
};
use crate::error::Result;
use crate::robot::{Robot, RobotState};
use tracing::{debug, trace};

/// `PLACE` lines with this many whitespace tokens or more skip the direction shortcut.
const SHORTCUT_TOKEN_LIMIT: usize = 3;

/// Drives one robot on one board.
///
/// Besides the robot, the processor remembers the direction of the last fully specified
/// `PLACE` so that `PLACE X,Y` can reuse it. That memory outlives [`reset`](Self::reset).
#[derive(Clone, Debug)]
pub struct CommandProcessor {
    board: Board,
    robot: Robot,
    last_place_direction: Option<String>,
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

impl CommandProcessor {
    /// Creates a processor with an unplaced robot and no remembered direction.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            robot: Robot::new(),
            last_place_direction: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Raw text of the direction the abbreviated `PLACE X,Y` form will append, if any.
    pub fn last_place_direction(&self) -> Option<&str> {
        self.last_place_direction.as_deref()
    }

    /// Takes the robot off the board. The remembered `PLACE` direction is kept.
    pub fn reset(&mut self) {
        self.robot.reset();
    }

    /// Splits `line` on whitespace and processes the tokens.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        self.process_command(tokens.as_slice())
    }

    /// Processes one tokenized command.
    ///
    /// Returns `Ok(Some(report))` for `REPORT` on a placed robot and `Ok(None)` for every
    /// other accepted command, including those ignored because the robot is unplaced or the
    /// target cell is off the board. Parse failures leave the robot untouched.
    pub fn process_command<T: AsRef<str>>(&mut self, input: &[T]) -> Result<Option<String>> {
        let kind = parse_command(input)?;
        if kind != CommandKind::Place && !self.robot.is_placed() {
            trace!(command = %kind, "ignored, robot not placed");
            return Ok(None);
        }

        let command = match kind {
            CommandKind::Place => {
                let mut tokens: Vec<String> =
                    input.iter().map(|t| t.as_ref().to_owned()).collect();
                self.apply_place_shortcut(&mut tokens);
                Command::Place(parse_place_parameter(&tokens)?)
            }
            CommandKind::Move => Command::Move,
            CommandKind::Left => Command::Left,
            CommandKind::Right => Command::Right,
            CommandKind::Report => Command::Report,
        };

        Ok(self.execute(command))
    }

    /// Applies an already parsed command.
    ///
    /// Off-board targets are silently dropped; commands other than `PLACE` do nothing while
    /// the robot is unplaced.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        trace!(?command, "dispatch");
        match command {
            Command::Place(place) => {
                if self.board.is_valid_position(place.position) {
                    self.robot.place(place.position, place.direction);
                } else {
                    debug!(position = ?place.position, "placement off the board, ignored");
                }
            }
            Command::Move => {
                if let Some(next) = self.robot.next_position() {
                    if self.board.is_valid_position(next) {
                        self.robot.move_to(next);
                    } else {
                        debug!(?next, "move off the board, ignored");
                    }
                }
            }
            Command::Left => self.robot.rotate_left(),
            Command::Right => self.robot.rotate_right(),
            Command::Report => return self.report(),
        }
        None
    }

    /// Formats the robot's state as `Output: X,Y,DIRECTION`, or `None` while unplaced.
    pub fn report(&self) -> Option<String> {
        match self.robot.state() {
            RobotState::Placed {
                position,
                direction,
            } => Some(format!("Output: {},{},{}", position.x, position.y, direction)),
            RobotState::Unplaced => None,
        }
    }

    /// Fills in or records the direction of a `PLACE` line.
    ///
    /// Only lines with fewer than three whitespace tokens are considered. If the parameter
    /// has fewer than three comma fields, the remembered direction (when there is one) is
    /// appended. Otherwise its third field is remembered verbatim, before any validation.
    fn apply_place_shortcut(&mut self, tokens: &mut [String]) {
        if tokens.len() >= SHORTCUT_TOKEN_LIMIT {
            return;
        }
        let Some(blob) = tokens.get_mut(1) else {
            return;
        };

        if blob.split(',').count() < PLACE_FIELD_COUNT {
            if let Some(direction) = self.last_place_direction.as_deref()
                && !direction.is_empty()
            {
                blob.push(',');
                blob.push_str(direction);
                debug!(expanded = %blob, "reusing last PLACE direction");
            }
        } else if let Some(direction) = blob.split(',').nth(PLACE_FIELD_COUNT - 1) {
            debug!(direction, "remembering PLACE direction");
            self.last_place_direction = Some(direction.to_owned());
        }
    }
}
