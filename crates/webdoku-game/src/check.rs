//! Board validation against Sudoku rules and an answer key.

use serde::Serialize;
use webdoku_core::{Board, Position};

/// The outcome of validating a candidate board.
///
/// A board can be wrong in two independent ways: a *conflict* is a rule
/// violation visible on the board itself, while an *incorrect* cell disagrees
/// with the reference solution without necessarily breaking any rule. A cell
/// can be incorrect yet conflict-free, which is exactly why the two sets are
/// reported separately.
///
/// Results are created fresh per validation call and carry no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Cells whose digit collides with another cell in the same row, column,
    /// or 3×3 box. Both members of a colliding pair are listed.
    pub conflicts: Vec<Position>,
    /// Filled cells whose digit differs from the reference solution. Only
    /// populated when a solution was supplied. Empty cells are never
    /// incorrect, merely incomplete.
    pub incorrect: Vec<Position>,
    /// Whether every cell is filled and no conflict exists.
    pub complete: bool,
}

/// Classifies `board` against the Sudoku rules and, when supplied, against a
/// reference solution.
///
/// The function is pure: validating the same board twice yields identical
/// results. Malformed grids cannot reach this layer — the [`Board`] type and
/// its boundary conversions reject them with a [`BoardError`] first.
///
/// [`BoardError`]: webdoku_core::BoardError
///
/// # Examples
///
/// ```
/// use webdoku_core::{Board, Digit, Position};
/// use webdoku_game::validate_board;
///
/// let mut board = Board::empty();
/// board.set(Position::new(0, 0), Digit::D5);
/// board.set(Position::new(0, 1), Digit::D5);
///
/// let result = validate_board(&board, None);
/// assert_eq!(
///     result.conflicts,
///     vec![Position::new(0, 0), Position::new(0, 1)]
/// );
/// assert!(!result.complete);
/// ```
#[must_use]
pub fn validate_board(board: &Board, solution: Option<&Board>) -> CheckResult {
    let conflicts: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| board.has_conflict_at(pos))
        .collect();

    let incorrect: Vec<Position> = solution.map_or_else(Vec::new, |solution| {
        Position::ALL
            .into_iter()
            .filter(|&pos| {
                board
                    .get(pos)
                    .is_some_and(|digit| Some(digit) != solution.get(pos))
            })
            .collect()
    });

    let complete = board.is_full() && conflicts.is_empty();

    CheckResult {
        conflicts,
        incorrect,
        complete,
    }
}
