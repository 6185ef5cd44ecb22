//! Solution counting for uniqueness checks.

use webdoku_core::{Board, Digit, Position};

/// Cursor over the fixed candidate order 1-9 for one cell.
struct Frame {
    next: usize,
}

/// Counts the completions of `board`, stopping once `limit` is reached.
///
/// The search mirrors the filler: backtracking over the empty cells in
/// row-major order with an explicit work stack, but with candidates tried in
/// fixed ascending order (counting needs no randomness) and the search
/// continuing past each found solution instead of returning it.
///
/// Boards whose existing digits already collide have no completion and count
/// as zero. `board` itself is never modified.
///
/// # Examples
///
/// ```
/// use webdoku_generator::count_solutions;
///
/// let empty = webdoku_core::Board::empty();
/// // The empty board has a vast number of completions; stop at two.
/// assert_eq!(count_solutions(&empty, 2), 2);
/// ```
#[must_use]
pub fn count_solutions(board: &Board, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    if Position::ALL.iter().any(|&pos| board.has_conflict_at(pos)) {
        return 0;
    }

    let mut scratch = board.clone();
    let empties: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|&pos| scratch.get(pos).is_none())
        .collect();
    if empties.is_empty() {
        return 1;
    }

    let mut count = 0;
    let mut stack = vec![Frame { next: 0 }];
    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let pos = empties[depth - 1];
        scratch.clear(pos);

        let mut placed = false;
        while frame.next < Digit::ALL.len() {
            let digit = Digit::ALL[frame.next];
            frame.next += 1;
            if scratch.is_safe(pos, digit) {
                scratch.set(pos, digit);
                placed = true;
                break;
            }
        }

        if !placed {
            stack.pop();
        } else if stack.len() == empties.len() {
            count += 1;
            if count >= limit {
                return count;
            }
            // Keep searching: the frame is revisited for its remaining candidates.
        } else {
            stack.push(Frame { next: 0 });
        }
    }
    count
}

/// Returns `true` if `board` has exactly one completion.
///
/// Counts solutions with an early exit upon finding a second one, so the cost
/// is bounded even for very sparse boards.
#[must_use]
pub fn has_unique_solution(board: &Board) -> bool {
    count_solutions(board, 2) == 1
}
