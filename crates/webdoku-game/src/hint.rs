//! Hint lookup over the answer key.

use rand::{Rng, seq::IndexedRandom as _};
use serde::Serialize;
use webdoku_core::{Board, Digit, Position};

use crate::GameError;

/// A revealed cell: a position and the solution digit that belongs there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hint {
    /// The cell to reveal.
    pub position: Position,
    /// The digit the solution holds at that cell.
    pub digit: Digit,
}

/// Picks one currently-empty, not-yet-revealed cell and returns its solution
/// digit.
///
/// This is a thin convenience over the solution grid, not a solving
/// algorithm: the cell is chosen uniformly at random from the empty cells of
/// `current` that are not listed in `revealed`. The caller supplies the
/// random source, so concurrent games never share generator state.
///
/// # Errors
///
/// Returns [`GameError::NoHintAvailable`] when no eligible cell remains, and
/// [`GameError::IncompleteSolution`] if `solution` is empty at the chosen
/// cell (impossible for generator-produced solutions).
pub fn find_hint_cell(
    current: &Board,
    solution: &Board,
    revealed: &[Position],
    rng: &mut impl Rng,
) -> Result<Hint, GameError> {
    let open: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| current.get(pos).is_none() && !revealed.contains(&pos))
        .collect();
    let position = *open.choose(rng).ok_or(GameError::NoHintAvailable)?;
    let digit = solution
        .get(position)
        .ok_or(GameError::IncompleteSolution { position })?;
    Ok(Hint { position, digit })
}
