//! Game-layer errors.

use derive_more::{Display, Error};
use webdoku_core::Position;

/// Errors from game-session and hint operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The player tried to change one of the puzzle's given clues.
    #[display("cell {position} is a given clue and cannot be modified")]
    CannotModifyGivenCell {
        /// The given cell that was targeted.
        position: Position,
    },
    /// Every cell is already filled or revealed; there is nothing to hint.
    #[display("no empty cell is available for a hint")]
    NoHintAvailable,
    /// The reference solution is missing a digit where a hint was requested.
    /// Solutions produced by the generator are always complete; this guards
    /// against externally supplied ones.
    #[display("solution has no digit at {position}")]
    IncompleteSolution {
        /// The empty solution cell.
        position: Position,
    },
}
