//! Puzzle generation for the webdoku engine.
//!
//! This crate turns an empty board into a `(puzzle, solution)` pair:
//!
//! 1. **Fill**: a complete, rule-valid solution grid is produced by
//!    randomized backtracking (iterative, with an explicit work stack).
//! 2. **Carve**: clues are removed from a copy of the solution down to the
//!    clue count of the requested [`Difficulty`], optionally verifying after
//!    each removal that the puzzle keeps a unique solution (see
//!    [`UniquenessPolicy`]).
//!
//! Generation is deterministic per [`PuzzleSeed`]: each call derives its own
//! random stream, so there is no shared generator state between calls.
//! [`count_solutions`] and [`has_unique_solution`] expose the uniqueness
//! check on its own for callers that want to grade externally supplied
//! puzzles.
//!
//! # Examples
//!
//! ```
//! use webdoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let generated = generator.generate(Difficulty::Expert)?;
//!
//! assert_eq!(generated.puzzle.clue_count(), usize::from(Difficulty::Expert.clue_count()));
//! assert!(generated.solution.is_full());
//! # Ok::<(), webdoku_generator::GenerateError>(())
//! ```

pub mod carve;
pub mod difficulty;
mod fill;
pub mod generator;
pub mod seed;
pub mod solve;

pub use self::{
    carve::{MAX_CLUES, MIN_CLUES, UniquenessPolicy},
    difficulty::{Difficulty, ParseDifficultyError},
    generator::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
    solve::{count_solutions, has_unique_solution},
};
