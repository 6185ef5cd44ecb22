//! Puzzle generation entry points.

use derive_more::{Display, Error};
use webdoku_core::Board;

use crate::{
    Difficulty, PuzzleSeed, UniquenessPolicy,
    carve::{self, MAX_CLUES, MIN_CLUES},
    fill,
};

/// A generated puzzle together with its solution and seed.
///
/// The puzzle is a strict subset of the solution: every clue it retains
/// equals the corresponding solution cell. The two boards are independent
/// copies, never views into a shared buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The carved puzzle, with empty cells for the player to fill.
    pub puzzle: Board,
    /// The complete solution the puzzle was carved from.
    pub solution: Board,
    /// The seed that reproduces this exact pair.
    pub seed: PuzzleSeed,
}

/// Errors from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GenerateError {
    /// The requested clue count cannot produce a puzzle. Reported instead of
    /// clamping, which would silently change the requested difficulty.
    #[display("clue count {clues} is outside the supported range 17-81")]
    ClueCountOutOfRange {
        /// The rejected clue count.
        clues: u8,
    },
    /// The backtracking filler reported failure at the root. This does not
    /// happen for a standard empty 9×9 grid, but it is a defined failure the
    /// caller may recover from by retrying with a fresh seed.
    #[display("could not fill a complete solution board")]
    Unfillable,
}

/// Generates `(puzzle, solution)` pairs for the game to hand out.
///
/// The generator itself is stateless apart from its [`UniquenessPolicy`]:
/// every call derives a local random stream from a [`PuzzleSeed`], fills a
/// complete solution grid, and carves the puzzle out of a copy of it.
/// Concurrent callers need no coordination.
///
/// # Examples
///
/// ```
/// use webdoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::new();
/// let generated = generator.generate(Difficulty::Easy)?;
/// assert_eq!(generated.puzzle.clue_count(), 40);
/// assert!(generated.solution.is_full());
/// # Ok::<(), webdoku_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    policy: UniquenessPolicy,
}

impl PuzzleGenerator {
    /// Creates a generator with the default [`UniquenessPolicy::Relaxed`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given uniqueness policy.
    #[must_use]
    pub const fn with_policy(policy: UniquenessPolicy) -> Self {
        Self { policy }
    }

    /// Returns the uniqueness policy this generator carves with.
    #[must_use]
    pub const fn policy(&self) -> UniquenessPolicy {
        self.policy
    }

    /// Generates a puzzle of the given difficulty from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unfillable`] if no solution grid could be
    /// filled; retrying is always safe and uses a new seed.
    pub fn generate(&self, difficulty: Difficulty) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed` at the given difficulty.
    ///
    /// The same seed, difficulty, and policy always reproduce the same
    /// `(puzzle, solution)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Unfillable`] if no solution grid could be
    /// filled for this seed.
    pub fn generate_with_seed(
        &self,
        difficulty: Difficulty,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_pair(difficulty.clue_count(), seed)
    }

    /// Generates a puzzle with an explicit clue count instead of a named
    /// difficulty tier.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::ClueCountOutOfRange`] if `clues` is not in
    /// 17-81, and [`GenerateError::Unfillable`] if no solution grid could be
    /// filled.
    pub fn generate_with_clues(&self, clues: u8) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_pair(clues, PuzzleSeed::random())
    }

    fn generate_pair(
        &self,
        target_clues: u8,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        // Reject bad configuration before spending any search effort.
        if !(MIN_CLUES..=MAX_CLUES).contains(&target_clues) {
            return Err(GenerateError::ClueCountOutOfRange {
                clues: target_clues,
            });
        }

        let mut rng = seed.rng();
        let mut solution = Board::empty();
        if !fill::fill_board(&mut solution, &mut rng) {
            return Err(GenerateError::Unfillable);
        }
        let puzzle = carve::carve_puzzle(&solution, target_clues, self.policy, &mut rng)?;
        log::debug!(
            "generated puzzle with {} clues (target {target_clues}) from seed {seed}",
            puzzle.clue_count()
        );
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use webdoku_core::Position;

    use super::*;
    use crate::solve::has_unique_solution;

    fn test_seed(fill: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([fill; 32])
    }

    #[test]
    fn test_generated_solution_is_complete_and_valid() {
        let generator = PuzzleGenerator::new();
        let generated = generator
            .generate_with_seed(Difficulty::Medium, test_seed(1))
            .unwrap();
        assert!(generated.solution.is_full());
        for pos in Position::ALL {
            assert!(!generated.solution.has_conflict_at(pos));
        }
    }

    #[test]
    fn test_clue_counts_match_difficulty_exactly() {
        let generator = PuzzleGenerator::new();
        for (difficulty, expected) in [(Difficulty::Easy, 40), (Difficulty::Expert, 22)] {
            let generated = generator
                .generate_with_seed(difficulty, test_seed(2))
                .unwrap();
            assert_eq!(generated.puzzle.clue_count(), expected);
        }
    }

    #[test]
    fn test_puzzle_is_subset_of_solution() {
        let generator = PuzzleGenerator::new();
        let generated = generator
            .generate_with_seed(Difficulty::Hard, test_seed(3))
            .unwrap();
        for pos in Position::ALL {
            if let Some(digit) = generated.puzzle.get(pos) {
                assert_eq!(Some(digit), generated.solution.get(pos));
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = PuzzleGenerator::new();
        let a = generator
            .generate_with_seed(Difficulty::Medium, test_seed(4))
            .unwrap();
        let b = generator
            .generate_with_seed(Difficulty::Medium, test_seed(4))
            .unwrap();
        assert_eq!(a, b);

        let c = generator
            .generate_with_seed(Difficulty::Medium, test_seed(5))
            .unwrap();
        assert_ne!(a.solution, c.solution);
    }

    #[test]
    fn test_explicit_clue_count_validation() {
        let generator = PuzzleGenerator::new();
        assert_eq!(
            generator.generate_with_clues(16),
            Err(GenerateError::ClueCountOutOfRange { clues: 16 })
        );
        assert_eq!(
            generator.generate_with_clues(82),
            Err(GenerateError::ClueCountOutOfRange { clues: 82 })
        );
        let generated = generator.generate_with_clues(50).unwrap();
        assert_eq!(generated.puzzle.clue_count(), 50);
    }

    #[test]
    fn test_enforced_policy_produces_unique_puzzles() {
        let generator = PuzzleGenerator::with_policy(UniquenessPolicy::Enforced);
        let generated = generator
            .generate_with_seed(Difficulty::Medium, test_seed(6))
            .unwrap();
        assert!(has_unique_solution(&generated.puzzle));
        assert!(generated.puzzle.clue_count() >= 32);
    }

    #[test]
    fn test_puzzle_and_solution_are_independent_copies() {
        let generator = PuzzleGenerator::new();
        let mut generated = generator
            .generate_with_seed(Difficulty::Easy, test_seed(7))
            .unwrap();
        let solution_before = generated.solution.clone();
        // Mutating the puzzle must not bleed into the solution snapshot.
        for pos in Position::ALL {
            generated.puzzle.clear(pos);
        }
        assert_eq!(generated.solution, solution_before);
    }
}
