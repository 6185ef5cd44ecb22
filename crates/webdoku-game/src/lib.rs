//! Game-session layer for webdoku.
//!
//! Wraps a generated puzzle in a caller-owned [`Game`] that tracks the
//! player's board, refuses edits to given clues, answers safety queries,
//! validates progress against the answer key, and reveals hints.
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64Mcg;
//! use webdoku_game::Game;
//! use webdoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let generated =
//!     generator.generate_with_seed(Difficulty::Medium, PuzzleSeed::from_bytes([7; 32]))?;
//! let mut game = Game::new(generated);
//!
//! let mut rng = Pcg64Mcg::seed_from_u64(0);
//! let hint = game.hint(&mut rng)?;
//! assert_eq!(game.current().get(hint.position), Some(hint.digit));
//!
//! let result = game.check();
//! assert!(result.conflicts.is_empty());
//! assert!(result.incorrect.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod check;
pub mod error;
pub mod hint;
pub mod session;

pub use self::{
    check::{CheckResult, validate_board},
    error::GameError,
    hint::{Hint, find_hint_cell},
    session::Game,
};
