//! Core board types for the webdoku puzzle engine.
//!
//! This crate provides the board representation and constraint checking shared
//! by puzzle generation and game validation:
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`position`]: Board (row, column) coordinate type
//! - [`board`]: The 9×9 board, its accessors, and the rule predicates
//!
//! The types enforce the board invariants (9×9 dimensions, cell values 0-9)
//! at construction, so the rest of the engine never revalidates shapes.
//! Everything here is pure, synchronous computation with no shared state;
//! concurrent callers just need their own board buffers.
//!
//! # Examples
//!
//! ```
//! use webdoku_core::{Board, Digit, Position};
//!
//! let mut board = Board::empty();
//! board.set(Position::new(4, 4), Digit::D5);
//!
//! // 5 is no longer safe anywhere in row 4, column 4, or the center box
//! assert!(!board.is_safe(Position::new(4, 0), Digit::D5));
//! assert!(board.is_safe(Position::new(0, 0), Digit::D5));
//! ```

pub mod board;
pub mod digit;
pub mod position;

pub use self::{
    board::{Board, BoardError},
    digit::Digit,
    position::{InvalidPosition, Position},
};
