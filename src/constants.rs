//! Constants for board geometry, scoring, and search limits.
//!
//! This module contains all the configuration constants for the Connect Four
//! engine. The board uses a flat 1D array representation in row-major order:
//! index `row * COLS + column`, with row 0 at the top and row `ROWS - 1` at
//! the bottom, so dropping a piece means scanning a column upward from the
//! highest index.
//!
//! Cell contents are relative to the player about to move, not to a fixed
//! color: `OWN` marks the mover's pieces and `FOE` the opponent's, and every
//! applied move negates the whole board so the encoding holds for the next
//! player too.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows (board height).
pub const ROWS: usize = 6;

/// Number of columns (board width). Moves are column indices `0..COLS`.
pub const COLS: usize = 7;

/// Total cell count of the flat board array.
pub const CELLS: usize = ROWS * COLS;

// =============================================================================
// Cell Values (relative to the player to move)
// =============================================================================

/// A piece belonging to the player about to move.
pub const OWN: i8 = 1;

/// A piece belonging to the opponent.
pub const FOE: i8 = -1;

/// An empty cell.
pub const EMPTY: i8 = 0;

// =============================================================================
// Line Scanning
// =============================================================================

/// The four line directions scanned from a placed cell, as
/// (index step, column change per step). Each direction is walked in both
/// signs, so these cover all eight compass rays.
pub const LINE_DIRS: [(isize, isize); 4] = [
    (1, 1),  // East (same row)
    (6, -1), // South-west diagonal
    (7, 0),  // South (same column)
    (8, 1),  // South-east diagonal
];

/// Run length that completes a winning line.
pub const CONNECT: usize = 4;

// =============================================================================
// Scoring
// =============================================================================

/// Score of a just-completed four-in-a-row. The side to move sees the
/// negation, so `-WIN` means the previous move won the game.
pub const WIN: i32 = 1000;

/// Heuristic credit per piece of a run with an open end. A run of length L
/// bordered by a playable empty cell earns `OPEN_RUN_CREDIT * L` per side.
pub const OPEN_RUN_CREDIT: i32 = 40;

// =============================================================================
// Search
// =============================================================================

/// Depth ceiling for iterative deepening. Deep enough to read out any
/// position that fits on the board.
pub const MAX_DEPTH: u32 = 50;

/// Default wall-clock budget per engine move, in milliseconds.
pub const DEFAULT_BUDGET_MS: u64 = 200;

/// Default seed for the Zobrist key table.
pub const ZOBRIST_SEED: u64 = 42;

// =============================================================================
// Console Display
// =============================================================================

/// Column the engine opens with when it moves first.
pub const CENTER_COLUMN: usize = 3;

/// Glyph for the viewing player's own pieces.
pub const OWN_GLYPH: char = 'X';

/// Glyph for the opposing player's pieces.
pub const FOE_GLYPH: char = 'O';

/// Glyph for an empty cell.
pub const EMPTY_GLYPH: char = '.';
