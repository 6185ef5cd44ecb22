//! Clue removal: carving a puzzle out of a complete solution.

use rand::{Rng, seq::SliceRandom as _};
use webdoku_core::{Board, Position};

use crate::{GenerateError, solve::count_solutions};

/// Fewest clues a 9×9 puzzle can keep and still admit a unique solution.
pub const MIN_CLUES: u8 = 17;
/// A full grid; the trivial upper bound.
pub const MAX_CLUES: u8 = 81;

/// Whether clue removal verifies that the puzzle keeps exactly one solution.
///
/// The engine supports both published behaviors of the game:
///
/// - [`Relaxed`](Self::Relaxed) removes cells unconditionally, so the carved
///   puzzle hits the requested clue count exactly; at low counts it may admit
///   more than one completion.
/// - [`Enforced`](Self::Enforced) restores any removal that leaves the board
///   with a second solution. Uniqueness is guaranteed, but when no remaining
///   cell can be removed safely the puzzle finishes with more clues than
///   requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UniquenessPolicy {
    /// Exact clue count, uniqueness not verified.
    #[default]
    Relaxed,
    /// Unique solution guaranteed, clue count treated as a floor target.
    Enforced,
}

/// Empties cells of a copy of `solution` down to `target_clues` clues.
///
/// The 81 cell coordinates are shuffled once and visited in that order, so
/// the pass is finite and termination never depends on the policy. Every
/// clue the returned puzzle retains equals the corresponding solution cell.
///
/// # Errors
///
/// Returns [`GenerateError::ClueCountOutOfRange`] if `target_clues` is not in
/// 17-81. Out-of-range requests fail fast instead of being clamped, since
/// clamping would silently change the requested difficulty.
pub(crate) fn carve_puzzle(
    solution: &Board,
    target_clues: u8,
    policy: UniquenessPolicy,
    rng: &mut impl Rng,
) -> Result<Board, GenerateError> {
    if !(MIN_CLUES..=MAX_CLUES).contains(&target_clues) {
        return Err(GenerateError::ClueCountOutOfRange {
            clues: target_clues,
        });
    }

    let cells_to_remove = usize::from(MAX_CLUES - target_clues);
    let mut puzzle = solution.clone();
    let mut order = Position::ALL;
    order.shuffle(rng);

    let mut removed = 0;
    for pos in order {
        if removed == cells_to_remove {
            break;
        }
        let Some(kept) = puzzle.get(pos) else {
            continue;
        };
        puzzle.clear(pos);
        match policy {
            UniquenessPolicy::Relaxed => removed += 1,
            UniquenessPolicy::Enforced => {
                if count_solutions(&puzzle, 2) == 1 {
                    removed += 1;
                } else {
                    puzzle.set(pos, kept);
                }
            }
        }
    }

    if removed < cells_to_remove {
        log::debug!(
            "carve stopped at {} clues (target {target_clues}): no further cell keeps the solution unique",
            puzzle.clue_count()
        );
    }
    Ok(puzzle)
}
