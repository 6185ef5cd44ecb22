//! Board position (row, column) coordinates.

use std::fmt::{self, Display};

use derive_more::{Display as DisplayDerive, Error};
use serde::{Deserialize, Serialize};

/// A cell position on the 9×9 board.
///
/// Rows and columns are indexed 0-8, top-left origin. Positions serialize as a
/// `(row, col)` pair, the shape the surrounding web layer reports conflict
/// coordinates in.
///
/// # Examples
///
/// ```
/// use webdoku_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.index(), 43);
/// assert_eq!(pos.box_index(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "(u8, u8)", try_from = "(u8, u8)")]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Array containing all 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8. Callers inside the
    /// engine uphold this by contract; external coordinates go through
    /// [`TryFrom`] instead.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index into an 81-element container.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index of the 3×3 box containing this position
    /// (0-8, left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the top-left corner of the 3×3 box containing this position.
    #[must_use]
    pub const fn box_origin(self) -> (u8, u8) {
        (self.row - self.row % 3, self.col - self.col % 3)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error for a `(row, col)` pair outside the 9×9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
#[display("position ({row}, {col}) is outside the 9x9 board")]
pub struct InvalidPosition {
    /// Offending row index.
    pub row: u8,
    /// Offending column index.
    pub col: u8,
}

impl TryFrom<(u8, u8)> for Position {
    type Error = InvalidPosition;

    fn try_from((row, col): (u8, u8)) -> Result<Self, InvalidPosition> {
        if row < 9 && col < 9 {
            Ok(Self { row, col })
        } else {
            Err(InvalidPosition { row, col })
        }
    }
}

impl From<Position> for (u8, u8) {
    fn from(pos: Position) -> (u8, u8) {
        (pos.row, pos.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(0, 8));
        assert_eq!(Position::ALL[9], Position::new(1, 0));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn test_box_geometry() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 8).box_index(), 8);
        assert_eq!(Position::new(5, 7).box_origin(), (3, 6));
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Position::try_from((2, 3)), Ok(Position::new(2, 3)));
        assert_eq!(
            Position::try_from((9, 0)),
            Err(InvalidPosition { row: 9, col: 0 })
        );
        assert_eq!(
            Position::try_from((0, 12)),
            Err(InvalidPosition { row: 0, col: 12 })
        );
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Position::new(4, 7)).unwrap();
        assert_eq!(json, "[4,7]");
        let parsed: Position = serde_json::from_str("[4,7]").unwrap();
        assert_eq!(parsed, Position::new(4, 7));
        assert!(serde_json::from_str::<Position>("[9,0]").is_err());
    }
}
