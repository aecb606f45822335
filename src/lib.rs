//! Halma engine with a minimax AI opponent
//!
//! A two-player Halma variant on an 8x8 board: each side starts with ten
//! pieces in a triangular corner camp and wins by moving all of them into
//! the opposing camp. Pieces step to any adjacent empty cell or chain
//! jumps over occupied cells; nothing is ever captured.
//!
//! # Architecture
//!
//! - [`board`]: grid, pieces, starting camps
//! - [`rules`]: move generation (steps and jump chains), win detection
//! - [`eval`]: heuristic position evaluation
//! - [`search`]: minimax with alpha-beta pruning
//! - [`engine`]: AI facade with timing and node statistics
//! - [`game`]: turn controller (selection, move validation, turn flips)
//! - [`ui`]: eframe/egui application
//!
//! # Quick Start
//!
//! ```
//! use halma::{AiEngine, Color, Game, Pos};
//!
//! let mut game = Game::new();
//!
//! // Black (human) steps a camp piece forward
//! assert!(game.select(Pos::new(3, 0)));
//! assert!(game.select(Pos::new(4, 1)));
//!
//! // White (AI) answers
//! let engine = AiEngine::new(2);
//! let result = engine.get_move(game.board(), Color::White);
//! if let Some(board) = result.board {
//!     game.commit_board(board);
//! }
//! assert_eq!(game.turn(), Color::Black);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Color, Piece, Pos, BOARD_SIZE};
pub use engine::{AiEngine, MoveResult};
pub use error::HalmaError;
pub use game::Game;
