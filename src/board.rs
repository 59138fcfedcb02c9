use crate::robot::Position;

/// The rectangular table the robot walks on.
///
/// Covers the cells `[0, columns) × [0, rows)` with `(0, 0)` at the south-west corner.
/// A board never changes once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    rows: u32,
    columns: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 6,
        }
    }
}

impl Board {
    /// Creates a board, or `None` if either extent is zero.
    pub fn new(rows: u32, columns: u32) -> Option<Self> {
        (rows > 0 && columns > 0).then_some(Self { rows, columns })
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Returns `true` if `position` lies on the board.
    pub fn is_valid_position(&self, position: Position) -> bool {
        let within = |coord: i32, extent: u32| u32::try_from(coord).is_ok_and(|c| c < extent);
        within(position.x, self.columns) && within(position.y, self.rows)
    }
}
