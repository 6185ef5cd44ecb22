//! The 9×9 Sudoku board and its rule predicates.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display as DisplayDerive, Error};
use serde::{Deserialize, Serialize};

use crate::{Digit, Position};

/// A 9×9 Sudoku board.
///
/// Cells hold `Some(Digit)` or `None` for empty. The dimensions are fixed by
/// construction, so any `Board` in hand is well-formed; malformed external
/// input is rejected at the boundary by [`Board::from_rows`], [`TryFrom`], or
/// deserialization, never deeper inside the engine.
///
/// A board is the unit of mutation during generation. Once handed to a caller
/// it is treated as a snapshot: clone it instead of aliasing it, so a puzzle
/// and its solution never share a buffer.
///
/// Boards serialize as 9 rows of 9 integers in 0-9 (0 = empty), the shape the
/// surrounding web layer exchanges.
///
/// # Examples
///
/// ```
/// use webdoku_core::{Board, Digit, Position};
///
/// let mut board = Board::empty();
/// board.set(Position::new(0, 0), Digit::D5);
///
/// // 5 is now taken in row 0, column 0, and box 0
/// assert!(!board.is_safe(Position::new(0, 8), Digit::D5));
/// assert!(!board.is_safe(Position::new(8, 0), Digit::D5));
/// assert!(!board.is_safe(Position::new(1, 1), Digit::D5));
/// assert!(board.is_safe(Position::new(8, 8), Digit::D5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[[u8; 9]; 9]", try_from = "[[u8; 9]; 9]")]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Places `digit` at `pos`, overwriting any previous digit.
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.index()] = Some(digit);
    }

    /// Empties the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of filled cells (clues).
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the cells of row `row` from left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not in the range 0-8.
    pub fn row(&self, row: u8) -> impl Iterator<Item = Option<Digit>> {
        assert!(row < 9);
        (0..9).map(move |col| self.get(Position::new(row, col)))
    }

    /// Returns the cells of column `col` from top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not in the range 0-8.
    pub fn column(&self, col: u8) -> impl Iterator<Item = Option<Digit>> {
        assert!(col < 9);
        (0..9).map(move |row| self.get(Position::new(row, col)))
    }

    /// Returns the cells of the 3×3 box containing `(row, col)`, row by row.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    pub fn box_at(&self, row: u8, col: u8) -> impl Iterator<Item = Option<Digit>> {
        let pos = Position::new(row, col);
        let (box_row, box_col) = pos.box_origin();
        (0..9).map(move |i| self.get(Position::new(box_row + i / 3, box_col + i % 3)))
    }

    /// Returns `true` if `digit` does not already appear in row `row`.
    #[must_use]
    pub fn is_safe_in_row(&self, row: u8, digit: Digit) -> bool {
        !self.row(row).any(|cell| cell == Some(digit))
    }

    /// Returns `true` if `digit` does not already appear in column `col`.
    #[must_use]
    pub fn is_safe_in_column(&self, col: u8, digit: Digit) -> bool {
        !self.column(col).any(|cell| cell == Some(digit))
    }

    /// Returns `true` if `digit` does not already appear in the 3×3 box
    /// containing `(row, col)`.
    #[must_use]
    pub fn is_safe_in_box(&self, row: u8, col: u8, digit: Digit) -> bool {
        !self.box_at(row, col).any(|cell| cell == Some(digit))
    }

    /// Returns `true` if placing `digit` at `pos` violates no Sudoku rule.
    ///
    /// This is the single predicate behind both generation and move
    /// validation: a placement is safe iff the digit is absent from the
    /// position's row, column, and box.
    #[must_use]
    pub fn is_safe(&self, pos: Position, digit: Digit) -> bool {
        self.is_safe_in_row(pos.row(), digit)
            && self.is_safe_in_column(pos.col(), digit)
            && self.is_safe_in_box(pos.row(), pos.col(), digit)
    }

    /// Returns `true` if the cell at `pos` is filled and its digit also
    /// appears at a *different* position in the same row, column, or box.
    ///
    /// Unlike [`is_safe`](Self::is_safe), this excludes the cell itself from
    /// the scan, so it classifies digits already on the board. Both members
    /// of a colliding pair test `true`.
    #[must_use]
    pub fn has_conflict_at(&self, pos: Position) -> bool {
        let Some(digit) = self.get(pos) else {
            return false;
        };
        for col in 0..9 {
            if col != pos.col() && self.get(Position::new(pos.row(), col)) == Some(digit) {
                return true;
            }
        }
        for row in 0..9 {
            if row != pos.row() && self.get(Position::new(row, pos.col())) == Some(digit) {
                return true;
            }
        }
        let (box_row, box_col) = pos.box_origin();
        for row in box_row..box_row + 3 {
            for col in box_col..box_col + 3 {
                let peer = Position::new(row, col);
                if peer != pos && self.get(peer) == Some(digit) {
                    return true;
                }
            }
        }
        false
    }

    /// Builds a board from dynamically shaped caller input.
    ///
    /// This is the entry point for boards arriving from outside the engine
    /// (e.g. a JSON body): the shape and every cell value are checked, and
    /// malformed input is reported as an error rather than a panic.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::RowCount`] or [`BoardError::ColumnCount`] if the
    /// input is not 9×9, and [`BoardError::ValueOutOfRange`] if a cell is not
    /// in 0-9.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        if rows.len() != 9 {
            return Err(BoardError::RowCount { rows: rows.len() });
        }
        let mut board = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != 9 {
                return Err(BoardError::ColumnCount {
                    row,
                    cols: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 9 {
                    return Err(BoardError::ValueOutOfRange { row, col, value });
                }
                board.cells[row * 9 + col] = Digit::new(value);
            }
        }
        Ok(board)
    }

    /// Returns the board as 9 rows of 9 integers, 0 denoting empty.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        let mut rows = [[0; 9]; 9];
        for pos in Position::ALL {
            rows[usize::from(pos.row())][usize::from(pos.col())] =
                self.get(pos).map_or(0, Digit::value);
        }
        rows
    }
}

/// Errors for malformed board input arriving from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayDerive, Error)]
pub enum BoardError {
    /// The input does not have exactly 9 rows.
    #[display("board must have 9 rows, got {rows}")]
    RowCount {
        /// Number of rows supplied.
        rows: usize,
    },
    /// A row does not have exactly 9 columns.
    #[display("row {row} must have 9 columns, got {cols}")]
    ColumnCount {
        /// Index of the offending row.
        row: usize,
        /// Number of columns in that row.
        cols: usize,
    },
    /// A cell value is outside 0-9.
    #[display("cell ({row}, {col}) holds {value}, expected 0-9")]
    ValueOutOfRange {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The out-of-range value.
        value: u8,
    },
    /// A grid string is not exactly 81 characters.
    #[display("grid string must be 81 characters, got {len}")]
    GridLength {
        /// Length of the supplied string.
        len: usize,
    },
    /// A grid string contains a character other than `0`-`9` or `.`.
    #[display("invalid character {character:?} at index {index} in grid string")]
    GridCharacter {
        /// Index of the offending character.
        index: usize,
        /// The offending character.
        character: char,
    },
}

impl TryFrom<[[u8; 9]; 9]> for Board {
    type Error = BoardError;

    fn try_from(rows: [[u8; 9]; 9]) -> Result<Self, BoardError> {
        let mut board = Self::empty();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value > 9 {
                    return Err(BoardError::ValueOutOfRange { row, col, value });
                }
                board.cells[row * 9 + col] = Digit::new(value);
            }
        }
        Ok(board)
    }
}

impl From<Board> for [[u8; 9]; 9] {
    fn from(board: Board) -> Self {
        board.to_rows()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses an 81-character grid string in row-major order, with `.` or `0`
    /// for empty cells. The format used by test fixtures and logs.
    fn from_str(s: &str) -> Result<Self, BoardError> {
        let count = s.chars().count();
        if count != 81 {
            return Err(BoardError::GridLength { len: count });
        }
        let mut board = Self::empty();
        for (index, character) in s.chars().enumerate() {
            board.cells[index] = match character {
                '.' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = character as u8 - b'0';
                    Digit::new(value)
                }
                _ => return Err(BoardError::GridCharacter { index, character }),
            };
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}
