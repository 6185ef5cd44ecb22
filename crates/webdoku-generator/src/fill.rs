//! Randomized solution filling via backtracking.

use rand::{Rng, seq::SliceRandom as _};
use webdoku_core::{Board, Digit, Position};

/// One unit of backtracking work: the shuffled candidates for a cell and a
/// cursor over them.
struct Frame {
    candidates: [Digit; 9],
    next: usize,
}

impl Frame {
    fn new(rng: &mut impl Rng) -> Self {
        let mut candidates = Digit::ALL;
        candidates.shuffle(rng);
        Self { candidates, next: 0 }
    }
}

/// Fills every empty cell of `board` with a rule-valid digit.
///
/// Backtracking search over the empty cells in row-major order, trying the
/// digits 1-9 in a freshly shuffled order per cell; the shuffle is what makes
/// generated puzzles vary between runs. The search keeps its state in an
/// explicit stack of [`Frame`]s, so its depth is bounded by the number of
/// empty cells (at most 81) no matter how adversarial the shuffle turns out.
///
/// Returns `false` and leaves `board` unchanged when no completion exists.
pub(crate) fn fill_board(board: &mut Board, rng: &mut impl Rng) -> bool {
    let empties: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| board.get(pos).is_none())
        .collect();
    if empties.is_empty() {
        return true;
    }

    let mut stack = vec![Frame::new(rng)];
    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let pos = empties[depth - 1];
        // Drop the tentative digit left over from a failed deeper branch.
        board.clear(pos);

        let mut placed = false;
        while frame.next < frame.candidates.len() {
            let digit = frame.candidates[frame.next];
            frame.next += 1;
            if board.is_safe(pos, digit) {
                board.set(pos, digit);
                placed = true;
                break;
            }
        }

        if !placed {
            stack.pop();
        } else if stack.len() == empties.len() {
            return true;
        } else {
            stack.push(Frame::new(rng));
        }
    }
    false
}
