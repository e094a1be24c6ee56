//! Fourfall: a Connect Four engine.
//!
//! Every position is represented from the perspective of the player about
//! to move: board cells, heuristic score, and hash are all negated when a
//! move is applied. On top of that encoding sit a line-scan heuristic
//! folded into move application, negamax search with alpha-beta pruning
//! and a per-search transposition cache, and a time-bounded
//! iterative-deepening driver.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, scoring values, and search limits
//! - [`zobrist`] - Per-cell key table for incremental position hashing
//! - [`position`] - Core game logic (board state, moves, scoring)
//! - [`search`] - Negamax with alpha-beta and iterative deepening
//! - [`console`] - Interactive terminal game
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use fourfall::position::Position;
//! use fourfall::search::best_move;
//! use fourfall::zobrist::ZobristTable;
//!
//! // Set up a game and take the center column.
//! let zobrist = ZobristTable::default();
//! let mut pos = Position::new();
//! pos = pos.play(3, &zobrist);
//!
//! // Ask the engine for a reply.
//! let reply = best_move(&pos, &zobrist, Duration::from_millis(10)).unwrap();
//! pos = pos.play(reply.column, &zobrist);
//! assert_eq!(pos.legal_moves().len(), 7);
//! ```

pub mod console;
pub mod constants;
pub mod position;
pub mod search;
pub mod zobrist;
