//! Robot state and the position/direction model it moves through.

use glam::IVec2;
use std::fmt;
use std::str::FromStr;

/// A grid cell. Validity is only meaningful against a [`Board`](crate::Board).
pub type Position = IVec2;

/// Compass facing, ordered clockwise starting at North.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise order used for rotation.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction 90 degrees counter-clockwise.
    pub fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// The direction 90 degrees clockwise.
    pub fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit step for one move in this direction. North is `+Y`.
    pub fn offset(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Upper-case name as printed in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a string that names no direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownDirection;

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Case-insensitive match against the four direction names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownDirection)
    }
}

/// Returns `position` shifted one cell towards `direction`.
///
/// No bounds check happens here. Coordinates wrap on overflow so the result of stepping off
/// the edge of `i32` lands far outside any board instead of panicking.
pub fn next_position(position: Position, direction: Direction) -> Position {
    position.wrapping_add(direction.offset())
}

/// Whether the robot is on the table yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RobotState {
    /// Not yet placed. Every command except `PLACE` is ignored.
    #[default]
    Unplaced,
    /// On the table at `position`, facing `direction`.
    Placed {
        position: Position,
        direction: Direction,
    },
}

/// The toy robot.
///
/// Holds no knowledge of the board: callers validate positions before handing them over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Robot {
    state: RobotState,
}

impl Robot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, RobotState::Placed { .. })
    }

    pub fn position(&self) -> Option<Position> {
        match self.state {
            RobotState::Placed { position, .. } => Some(position),
            RobotState::Unplaced => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            RobotState::Placed { direction, .. } => Some(direction),
            RobotState::Unplaced => None,
        }
    }

    /// Puts the robot at `position` facing `direction`, replacing any previous state.
    pub fn place(&mut self, position: Position, direction: Direction) {
        self.state = RobotState::Placed {
            position,
            direction,
        };
    }

    /// The cell one step ahead, or `None` while unplaced. Does not move the robot.
    pub fn next_position(&self) -> Option<Position> {
        match self.state {
            RobotState::Placed {
                position,
                direction,
            } => Some(next_position(position, direction)),
            RobotState::Unplaced => None,
        }
    }

    /// Relocates a placed robot, keeping its facing. Ignored while unplaced.
    pub fn move_to(&mut self, target: Position) {
        if let RobotState::Placed { position, .. } = &mut self.state {
            *position = target;
        }
    }

    pub fn rotate_left(&mut self) {
        if let RobotState::Placed { direction, .. } = &mut self.state {
            *direction = direction.rotate_left();
        }
    }

    pub fn rotate_right(&mut self) {
        if let RobotState::Placed { direction, .. } = &mut self.state {
            *direction = direction.rotate_right();
        }
    }

    /// Takes the robot off the table.
    pub fn reset(&mut self) {
        self.state = RobotState::Unplaced;
    }
}
