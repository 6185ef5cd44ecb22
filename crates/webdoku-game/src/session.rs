//! A caller-owned game session.

use rand::Rng;
use serde::Serialize;
use webdoku_core::{Board, Digit, Position};
use webdoku_generator::GeneratedPuzzle;

use crate::{CheckResult, GameError, Hint, check::validate_board, hint::find_hint_cell};

/// One player's game: the puzzle, its answer key, and the in-progress board.
///
/// The engine never stores sessions in any process-wide slot; the surrounding
/// system creates a `Game` per started game and owns its keyed storage and
/// lifetime (e.g. one per web session). All operations run synchronously on
/// this value, so concurrent games only need separate `Game` values.
///
/// # Examples
///
/// ```
/// use webdoku_generator::{Difficulty, PuzzleGenerator};
/// use webdoku_game::Game;
///
/// let generator = PuzzleGenerator::new();
/// let generated = generator.generate(Difficulty::Easy)?;
/// let game = Game::new(generated);
///
/// assert_eq!(game.current().clue_count(), 40);
/// assert!(!game.is_solved());
/// # Ok::<(), webdoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    puzzle: Board,
    solution: Board,
    current: Board,
    moves: u32,
    revealed: Vec<Position>,
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// The puzzle's clues become the given cells; the in-progress board
    /// starts as a copy of the puzzle.
    #[must_use]
    pub fn new(generated: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            puzzle,
            solution,
            seed: _,
        } = generated;
        Self {
            current: puzzle.clone(),
            puzzle,
            solution,
            moves: 0,
            revealed: Vec::new(),
        }
    }

    /// Restores a game from persisted boards and counters.
    ///
    /// The surrounding system owns session persistence; this re-validates
    /// what it hands back.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `current` disagrees
    /// with `puzzle` on a given cell.
    pub fn from_saved(
        puzzle: Board,
        solution: Board,
        current: Board,
        moves: u32,
        revealed: Vec<Position>,
    ) -> Result<Self, GameError> {
        for pos in Position::ALL {
            if let Some(given) = puzzle.get(pos)
                && current.get(pos) != Some(given)
            {
                return Err(GameError::CannotModifyGivenCell { position: pos });
            }
        }
        Ok(Self {
            puzzle,
            solution,
            current,
            moves,
            revealed,
        })
    }

    /// Returns the original puzzle (the given cells).
    #[must_use]
    pub fn puzzle(&self) -> &Board {
        &self.puzzle
    }

    /// Returns the answer key.
    #[must_use]
    pub fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the in-progress board.
    #[must_use]
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Returns the number of moves the player has made.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the number of cells revealed through hints.
    #[must_use]
    pub fn hints_used(&self) -> usize {
        self.revealed.len()
    }

    /// Returns `true` if `pos` holds one of the puzzle's given clues.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.puzzle.get(pos).is_some()
    }

    /// Returns `true` if placing `digit` at `pos` would break no rule on the
    /// in-progress board.
    ///
    /// Real-time move feedback for the UI, without a full validation pass.
    #[must_use]
    pub fn is_safe(&self, pos: Position, digit: Digit) -> bool {
        self.current.is_safe(pos, digit)
    }

    /// Places a player digit at `pos`, overwriting any earlier player digit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given cell.
    pub fn set_cell(&mut self, pos: Position, digit: Digit) -> Result<(), GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell { position: pos });
        }
        self.current.set(pos, digit);
        self.moves += 1;
        Ok(())
    }

    /// Empties a player-filled cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if `pos` is a given cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<(), GameError> {
        if self.is_given(pos) {
            return Err(GameError::CannotModifyGivenCell { position: pos });
        }
        self.current.clear(pos);
        self.moves += 1;
        Ok(())
    }

    /// Validates the in-progress board against the rules and the answer key.
    #[must_use]
    pub fn check(&self) -> CheckResult {
        validate_board(&self.current, Some(&self.solution))
    }

    /// Returns `true` if the in-progress board equals the answer key.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current == self.solution
    }

    /// Reveals one empty cell from the answer key and fills it in.
    ///
    /// The revealed cell is recorded so repeated hints never pick the same
    /// cell twice, and [`hints_used`](Self::hints_used) counts it for
    /// scoring.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoHintAvailable`] when no empty cell remains.
    pub fn hint(&mut self, rng: &mut impl Rng) -> Result<Hint, GameError> {
        let hint = find_hint_cell(&self.current, &self.solution, &self.revealed, rng)?;
        self.current.set(hint.position, hint.digit);
        self.revealed.push(hint.position);
        Ok(hint)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;
    use webdoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

    use super::*;

    fn test_game() -> Game {
        let generator = PuzzleGenerator::new();
        let generated = generator
            .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_bytes([9; 32]))
            .expect("generation succeeds");
        Game::new(generated)
    }

    fn first_empty(game: &Game) -> Position {
        Position::ALL
            .into_iter()
            .find(|&pos| game.current().get(pos).is_none())
            .expect("puzzle has empty cells")
    }

    #[test]
    fn test_new_game_starts_from_the_puzzle() {
        let game = test_game();
        assert_eq!(game.current(), game.puzzle());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.hints_used(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_given_cells_are_protected() {
        let mut game = test_game();
        let given = Position::ALL
            .into_iter()
            .find(|&pos| game.is_given(pos))
            .expect("puzzle has givens");
        assert_eq!(
            game.set_cell(given, Digit::D1),
            Err(GameError::CannotModifyGivenCell { position: given })
        );
        assert_eq!(
            game.clear_cell(given),
            Err(GameError::CannotModifyGivenCell { position: given })
        );
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_set_and_clear_count_moves() {
        let mut game = test_game();
        let pos = first_empty(&game);
        game.set_cell(pos, Digit::D5).unwrap();
        assert_eq!(game.current().get(pos), Some(Digit::D5));
        game.clear_cell(pos).unwrap();
        assert_eq!(game.current().get(pos), None);
        assert_eq!(game.moves(), 2);
    }

    #[test]
    fn test_filling_the_solution_solves_the_game() {
        let mut game = test_game();
        for pos in Position::ALL {
            if game.current().get(pos).is_none() {
                let digit = game.solution().get(pos).expect("solution is complete");
                game.set_cell(pos, digit).unwrap();
            }
        }
        assert!(game.is_solved());
        let result = game.check();
        assert!(result.complete);
        assert!(result.conflicts.is_empty());
        assert!(result.incorrect.is_empty());
    }

    #[test]
    fn test_hints_fill_cells_and_are_counted() {
        let mut game = test_game();
        let mut rng = Pcg64Mcg::seed_from_u64(5);
        let hint = game.hint(&mut rng).unwrap();
        assert_eq!(game.current().get(hint.position), Some(hint.digit));
        assert_eq!(Some(hint.digit), game.solution().get(hint.position));
        assert_eq!(game.hints_used(), 1);

        // Hinting every remaining cell solves the game exactly once each.
        while game.hint(&mut rng).is_ok() {}
        assert!(game.is_solved());
        assert_eq!(game.hint(&mut rng), Err(GameError::NoHintAvailable));
    }

    #[test]
    fn test_check_reports_a_wrong_move() {
        let mut game = test_game();
        let pos = first_empty(&game);
        let correct = game.solution().get(pos).expect("solution is complete");
        let wrong = Digit::ALL
            .into_iter()
            .find(|&digit| digit != correct)
            .expect("another digit exists");
        game.set_cell(pos, wrong).unwrap();
        let result = game.check();
        assert!(result.incorrect.contains(&pos));
        assert!(!result.complete);
    }

    #[test]
    fn test_from_saved_round_trip() {
        let mut game = test_game();
        let pos = first_empty(&game);
        game.set_cell(pos, Digit::D5).unwrap();

        let restored = Game::from_saved(
            game.puzzle().clone(),
            game.solution().clone(),
            game.current().clone(),
            game.moves(),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(restored.current(), game.current());
        assert_eq!(restored.moves(), 1);
    }

    #[test]
    fn test_from_saved_rejects_tampered_givens() {
        let game = test_game();
        let given = Position::ALL
            .into_iter()
            .find(|&pos| game.is_given(pos))
            .expect("puzzle has givens");
        let mut tampered = game.current().clone();
        tampered.clear(given);
        assert_eq!(
            Game::from_saved(
                game.puzzle().clone(),
                game.solution().clone(),
                tampered,
                0,
                Vec::new(),
            ),
            Err(GameError::CannotModifyGivenCell { position: given })
        );
    }
}
