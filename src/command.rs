//! Parsing of tokenized input lines into typed commands.
//!
//! A line is split on whitespace before it gets here. The first token names the command;
//! `PLACE` additionally takes a single comma-joined `X,Y,DIRECTION` token.

use crate::error::{CommandError, Result};
use crate::robot::{Direction, Position};
use std::fmt;

/// Number of whitespace tokens in a `PLACE` line (`PLACE` + `X,Y,F`).
pub const PLACE_TOKEN_COUNT: usize = 2;

/// Number of comma-separated fields in the `PLACE` parameter (`X`, `Y`, `F`).
pub const PLACE_FIELD_COUNT: usize = 3;

/// The bare command verb, without parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Place,
    Move,
    Left,
    Right,
    Report,
}

impl CommandKind {
    pub const ALL: [CommandKind; 5] = [
        CommandKind::Place,
        CommandKind::Move,
        CommandKind::Left,
        CommandKind::Right,
        CommandKind::Report,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Place => "PLACE",
            Self::Move => "MOVE",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Report => "REPORT",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where and how a `PLACE` command puts the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaceParameter {
    pub position: Position,
    pub direction: Direction,
}

/// A fully parsed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place(PlaceParameter),
    Move,
    Left,
    Right,
    Report,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Place(_) => CommandKind::Place,
            Self::Move => CommandKind::Move,
            Self::Left => CommandKind::Left,
            Self::Right => CommandKind::Right,
            Self::Report => CommandKind::Report,
        }
    }
}

/// Identifies the command named by the first token, ignoring case.
pub fn parse_command<T: AsRef<str>>(tokens: &[T]) -> Result<CommandKind> {
    let verb = tokens.first().map(|t| t.as_ref()).unwrap_or("");
    CommandKind::ALL
        .into_iter()
        .find(|kind| kind.as_str().eq_ignore_ascii_case(verb))
        .ok_or_else(|| CommandError::Unrecognised {
            input: verb.to_owned(),
        })
}

/// Extracts the position and direction from a `PLACE X,Y,DIRECTION` line.
///
/// The direction is validated before the coordinates, so `PLACE a,b,UP` reports the
/// direction.
pub fn parse_place_parameter<T: AsRef<str>>(tokens: &[T]) -> Result<PlaceParameter> {
    if tokens.len() != PLACE_TOKEN_COUNT {
        return Err(CommandError::Incomplete);
    }

    let fields: Vec<&str> = tokens[1].as_ref().split(',').collect();
    let &[x, y, direction] = fields.as_slice() else {
        return Err(CommandError::Incomplete);
    };

    let direction = direction
        .parse::<Direction>()
        .map_err(|_| CommandError::InvalidDirection {
            input: direction.to_owned(),
        })?;

    Ok(PlaceParameter {
        position: Position::new(parse_coordinate(x)?, parse_coordinate(y)?),
        direction,
    })
}

fn parse_coordinate(field: &str) -> Result<i32> {
    field
        .parse()
        .map_err(|source| CommandError::InvalidCoordinate {
            input: field.to_owned(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_match_ignoring_case() {
        assert_eq!(parse_command(&["place", "0,0,NORTH"]), Ok(CommandKind::Place));
        assert_eq!(parse_command(&["Move"]), Ok(CommandKind::Move));
        assert_eq!(parse_command(&["LEFT"]), Ok(CommandKind::Left));
        assert_eq!(parse_command(&["rIgHt"]), Ok(CommandKind::Right));
        assert_eq!(parse_command(&["report", "extra"]), Ok(CommandKind::Report));
    }

    #[test]
    fn unknown_verb_is_unrecognised() {
        assert_eq!(
            parse_command(&["FOO"]),
            Err(CommandError::Unrecognised {
                input: "FOO".into()
            })
        );
        let empty: [&str; 0] = [];
        assert!(matches!(
            parse_command(&empty),
            Err(CommandError::Unrecognised { .. })
        ));
    }

    #[test]
    fn unrecognised_message_carries_usage() {
        let err = parse_command(&["jump"]).unwrap_err();
        assert!(err.to_string().contains("PLACE X,Y,Direction|MOVE|LEFT|RIGHT|REPORT"));
    }

    #[test]
    fn place_parameter_parses() {
        assert_eq!(
            parse_place_parameter(&["PLACE", "1,2,east"]),
            Ok(PlaceParameter {
                position: Position::new(1, 2),
                direction: Direction::East,
            })
        );
        // Off-board coordinates are the processor's concern, not the parser's.
        assert_eq!(
            parse_place_parameter(&["PLACE", "-3,+7,WEST"]),
            Ok(PlaceParameter {
                position: Position::new(-3, 7),
                direction: Direction::West,
            })
        );
    }

    #[test]
    fn wrong_token_count_is_incomplete() {
        assert_eq!(parse_place_parameter(&["PLACE"]), Err(CommandError::Incomplete));
        assert_eq!(
            parse_place_parameter(&["PLACE", "1,2", "NORTH"]),
            Err(CommandError::Incomplete)
        );
    }

    #[test]
    fn wrong_field_count_is_incomplete() {
        for blob in ["1,2", "1", "1,2,NORTH,4", ""] {
            assert_eq!(
                parse_place_parameter(&["PLACE", blob]),
                Err(CommandError::Incomplete),
                "{blob}"
            );
        }
    }

    #[test]
    fn bad_direction_is_reported_before_coordinates() {
        assert_eq!(
            parse_place_parameter(&["PLACE", "a,b,UP"]),
            Err(CommandError::InvalidDirection { input: "UP".into() })
        );
    }

    #[test]
    fn non_integer_coordinate_is_rejected() {
        let err = parse_place_parameter(&["PLACE", "1.5,2,NORTH"]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::InvalidCoordinate { ref input, .. } if input == "1.5"
        ));

        let err = parse_place_parameter(&["PLACE", "1,y,NORTH"]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::InvalidCoordinate { ref input, .. } if input == "y"
        ));
    }

    #[test]
    fn command_reports_its_kind() {
        let place = Command::Place(PlaceParameter {
            position: Position::ZERO,
            direction: Direction::North,
        });
        assert_eq!(place.kind(), CommandKind::Place);
        assert_eq!(Command::Report.kind().to_string(), "REPORT");
    }
}
