//! Gomoku against the computer
//!
//! Freestyle five-in-a-row on a 15x15 board:
//! - Black moves first, players alternate
//! - Five or more in a line wins (overlines count)
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Line geometry and win detection
//! - [`eval`]: Pattern classification and cell scoring
//! - [`engine`]: Difficulty-dependent move selection
//! - [`game`]: Game state machine and session statistics
//! - [`config`]: Command line settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Difficulty, Game, MoveOutcome, Stone};
//!
//! let mut game = Game::new(Difficulty::Hard, Stone::Black);
//! assert_eq!(game.apply_move(7, 7), Ok(MoveOutcome::Continue { next: Stone::White }));
//!
//! // The AI answers from a snapshot of the position
//! let request = game.ai_request().unwrap();
//! let reply = request.evaluate();
//! game.play(reply.best_move).unwrap();
//! assert_eq!(game.move_count(), 2);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{evaluate_move, select_move, select_move_with_rng, Difficulty, MoveReason, MoveResult};
pub use game::{AiRequest, Game, GameSnapshot, GameStatus, MoveError, MoveOutcome, Phase, SessionStats, Verdict};
