//! Connect Four position representation and move execution.
//!
//! This module provides the core game logic, including:
//! - Board state as a flat 6x7 array
//! - Gravity-respecting move application
//! - A line-scan heuristic folded into every move
//! - Incremental Zobrist-style hashing
//!
//! The board uses a sign-swapping scheme where the current player's pieces
//! are always `OWN` (+1) and the opponent's are `FOE` (-1). Every applied
//! move negates the board, score, and hash together, so evaluation always
//! reads from the perspective of the player about to move.

use std::fmt;

use crate::constants::*;
use crate::zobrist::ZobristTable;

/// A move: the index of the column receiving the piece.
pub type Column = usize;

/// Result of attempting to play an unvalidated move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Column index is outside `0..COLS`
    #[error("illegal move: column {0} is out of range")]
    OutOfRange(Column),
    /// Column has no empty cell left
    #[error("illegal move: column {0} is full")]
    ColumnFull(Column),
}

/// A Connect Four position (board state plus running evaluation).
///
/// The board is a flat array in row-major order with row 0 at the top.
/// Signs are swapped after each move so that the player to move always
/// owns the `OWN` pieces; `score` and `hash` follow the same perspective.
#[derive(Clone, Debug)]
pub struct Position {
    /// Board state: `OWN` = player to move, `FOE` = opponent, `EMPTY` = empty
    pub cells: [i8; CELLS],
    /// Accumulated heuristic score for the player to move.
    /// `-WIN` means the opponent's last move completed four in a row.
    pub score: i32,
    /// Combined hash of the placement history, negated with the perspective
    pub hash: i64,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Create the empty starting position.
    pub fn new() -> Self {
        Position {
            cells: [EMPTY; CELLS],
            score: 0,
            hash: 0,
        }
    }

    /// Columns that can still receive a piece, in ascending order.
    ///
    /// A column is playable while its top cell is empty. The result is
    /// empty exactly when the board is full.
    pub fn legal_moves(&self) -> Vec<Column> {
        (0..COLS).filter(|&col| self.cells[col] == EMPTY).collect()
    }

    /// Apply a move for the player to move and return the resulting
    /// position, seen from the opponent's perspective.
    ///
    /// The piece drops to the lowest empty cell of `col`, the heuristic
    /// score absorbs the placement, and board, score, and hash are negated
    /// so the returned position again reads from its mover's point of view.
    /// A `score` of `-WIN` on the result means this move won the game.
    ///
    /// `col` must come from [`legal_moves`](Self::legal_moves); passing a
    /// full or out-of-range column is a contract violation. Use
    /// [`try_play`](Self::try_play) for unvalidated input.
    pub fn play(&self, col: Column, zobrist: &ZobristTable) -> Position {
        debug_assert!(col < COLS, "column {col} out of range");
        debug_assert!(self.cells[col] == EMPTY, "column {col} is full");

        let mut cells = self.cells;

        // Drop to the lowest empty cell, scanning the column bottom-up.
        let mut placed = col;
        for row in (0..ROWS).rev() {
            placed = row * COLS + col;
            if cells[placed] == EMPTY {
                break;
            }
        }
        cells[placed] = OWN;

        let score = score_placement(&cells, placed, self.score);

        for c in &mut cells {
            *c = -*c;
        }
        Position {
            cells,
            score: -score,
            hash: -(self.hash + zobrist.key(placed)),
        }
    }

    /// Validating wrapper around [`play`](Self::play) for untrusted input.
    pub fn try_play(&self, col: Column, zobrist: &ZobristTable) -> Result<Position, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRange(col));
        }
        if self.cells[col] != EMPTY {
            return Err(MoveError::ColumnFull(col));
        }
        Ok(self.play(col, zobrist))
    }

    /// The same physical board seen from the other player's perspective.
    ///
    /// Negates every cell along with the score and hash; applying it twice
    /// gives back the original position. This never places a piece and is
    /// used for display parity, not inside search.
    pub fn flip(&self) -> Position {
        let mut cells = self.cells;
        for c in &mut cells {
            *c = -*c;
        }
        Position {
            cells,
            score: -self.score,
            hash: -self.hash,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                let ch = match self.cells[row * COLS + col] {
                    OWN => OWN_GLYPH,
                    FOE => FOE_GLYPH,
                    _ => EMPTY_GLYPH,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Cell owner `len` steps along a direction from the placed cell, or `None`
/// when the offset leaves the board or wraps across a row edge.
///
/// The wrap guard requires the offset cell's column to match the placed
/// column advanced by the direction's per-step column change, which rejects
/// horizontal and diagonal scans that run off one row edge and reappear on
/// the other.
#[inline]
fn run_cell(
    cells: &[i8; CELLS],
    placed: usize,
    dir: isize,
    col_step: isize,
    len: isize,
) -> Option<i8> {
    let idx = placed as isize + dir * len;
    if idx < 0 || idx >= CELLS as isize {
        return None;
    }
    if idx % COLS as isize != placed as isize % COLS as isize + col_step * len {
        return None;
    }
    Some(cells[idx as usize])
}

/// Score a just-placed piece, starting from the position's accumulated
/// score.
///
/// Scans the four line directions through `placed`, walking both signs of
/// each direction interleaved and growing the contiguous run of the
/// mover's pieces. An extension that stops on a playable empty cell is an
/// open end and credits `OPEN_RUN_CREDIT` per piece of the run seen so far,
/// once per side. A run reaching `CONNECT` pieces scores `WIN` outright,
/// replacing any accumulated credit.
fn score_placement(cells: &[i8; CELLS], placed: usize, base: i32) -> i32 {
    let mut score = base;
    for &(dir, col_step) in &LINE_DIRS {
        let mut run: i32 = 1; // the placed piece itself
        let mut forward = true;
        let mut backward = true;
        for len in 1..CONNECT as isize {
            if forward {
                match run_cell(cells, placed, dir, col_step, len) {
                    Some(OWN) => run += 1,
                    Some(EMPTY) => {
                        score += OPEN_RUN_CREDIT * run;
                        forward = false;
                    }
                    _ => forward = false,
                }
            }
            if backward {
                match run_cell(cells, placed, -dir, -col_step, len) {
                    Some(OWN) => run += 1,
                    Some(EMPTY) => {
                        score += OPEN_RUN_CREDIT * run;
                        backward = false;
                    }
                    _ => backward = false,
                }
            }
            if run >= CONNECT as i32 || (!forward && !backward) {
                break;
            }
        }
        if run >= CONNECT as i32 {
            return WIN;
        }
    }
    score
}
