//! Negamax game-tree search with alpha-beta pruning.
//!
//! The evaluator recurses over [`Position`] values, negating score and
//! window at every ply, and memoizes results in a transposition cache that
//! lives for exactly one [`best_move`] call. The driver on top runs
//! iterative deepening: complete searches of increasing depth until a
//! wall-clock budget is spent or [`MAX_DEPTH`] is reached. Time is only
//! checked between completed depths, so one deep iteration may overrun
//! the budget; in exchange every reported result comes from a finished
//! search.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::constants::{MAX_DEPTH, WIN};
use crate::position::{Column, Position};
use crate::zobrist::ZobristTable;

/// Bound for the alpha-beta window. `i32::MAX` negates cleanly, which
/// `i32::MIN` would not.
const INFINITY: i32 = i32::MAX;

/// Chosen move with its evaluation, reported by [`best_move`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Column to play.
    pub column: Column,
    /// Evaluation of that column from the mover's perspective.
    pub value: i32,
    /// Deepest fully completed iteration.
    pub depth: u32,
}

/// Memoized evaluations for one search call, keyed by position hash and
/// remaining depth. Keeping the depth in the key stops a shallow result
/// from answering a deeper query for the same position.
struct TranspositionCache {
    entries: HashMap<(i64, u32), i32>,
}

impl TranspositionCache {
    fn new() -> Self {
        TranspositionCache {
            entries: HashMap::new(),
        }
    }

    fn probe(&self, hash: i64, depth: u32) -> Option<i32> {
        self.entries.get(&(hash, depth)).copied()
    }

    fn store(&mut self, hash: i64, depth: u32, value: i32) {
        self.entries.insert((hash, depth), value);
    }
}

/// State shared by one search call: the key table and the cache scoped to
/// that call.
struct Search<'a> {
    zobrist: &'a ZobristTable,
    cache: TranspositionCache,
}

impl Search<'_> {
    /// Negamax evaluation of `pos` to `depth` plies within the window
    /// `(alpha, beta)`, from the perspective of the player to move.
    ///
    /// Terminal values are offset by the remaining depth, so a win found
    /// closer to the root outranks the same win found deeper, and losses
    /// prefer the longest defense.
    fn evaluate(&mut self, pos: &Position, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        if let Some(value) = self.cache.probe(pos.hash, depth) {
            return value;
        }

        // Leaf: out of depth, or the opponent's last move already won.
        if depth == 0 || pos.score == -WIN {
            let value = pos.score - depth as i32;
            self.cache.store(pos.hash, depth, value);
            return value;
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            self.cache.store(pos.hash, depth, 0);
            return 0;
        }

        for col in moves {
            let child = pos.play(col, self.zobrist);
            let value = -self.evaluate(&child, depth - 1, -beta, -alpha);
            if value > alpha {
                alpha = value;
            }
            if beta <= alpha {
                break;
            }
        }
        self.cache.store(pos.hash, depth, alpha);
        alpha
    }
}

/// Pick the best column for the player to move at `root`.
///
/// Runs complete alpha-beta searches of depth 1, 2, ... until `budget`
/// has elapsed or [`MAX_DEPTH`] is reached, and reports the choice of the
/// deepest completed iteration. The first depth always runs, so even a
/// zero budget yields a move. Returns `None` exactly when the root has no
/// legal moves.
pub fn best_move(
    root: &Position,
    zobrist: &ZobristTable,
    budget: Duration,
) -> Option<SearchResult> {
    let moves = root.legal_moves();
    if moves.is_empty() {
        return None;
    }

    let start = Instant::now();
    let mut search = Search {
        zobrist,
        cache: TranspositionCache::new(),
    };
    let mut result = SearchResult {
        column: moves[0],
        value: -INFINITY,
        depth: 0,
    };

    for depth in 1..=MAX_DEPTH {
        let mut alpha = -INFINITY;
        let mut best = moves[0];
        for &col in &moves {
            let child = root.play(col, zobrist);
            let value = -search.evaluate(&child, depth - 1, -INFINITY, -alpha);
            // Strict improvement keeps the first of equal columns.
            if value > alpha {
                alpha = value;
                best = col;
            }
        }
        result = SearchResult {
            column: best,
            value: alpha,
            depth,
        };
        debug!("depth {depth}: column {best}, value {alpha}");
        if start.elapsed() >= budget {
            break;
        }
    }

    info!(
        "chose column {} at depth {} (value {}, {} ms)",
        result.column,
        result.depth,
        result.value,
        start.elapsed().as_millis()
    );
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{COLS, FOE, OWN, ROWS};

    fn table() -> ZobristTable {
        ZobristTable::with_seed(7)
    }

    fn play_out(cols: &[Column]) -> Position {
        let zobrist = table();
        cols.iter()
            .fold(Position::new(), |pos, &col| pos.play(col, &zobrist))
    }

    #[test]
    fn test_depth_zero_returns_the_heuristic() {
        let zobrist = table();
        let mut search = Search {
            zobrist: &zobrist,
            cache: TranspositionCache::new(),
        };
        let pos = play_out(&[3, 2]);
        assert_eq!(search.evaluate(&pos, 0, -INFINITY, INFINITY), pos.score);
    }

    #[test]
    fn test_lost_position_is_terminal_at_any_depth() {
        let zobrist = table();
        let mut search = Search {
            zobrist: &zobrist,
            cache: TranspositionCache::new(),
        };
        // The previous move completed a column of four.
        let pos = play_out(&[3, 0, 3, 1, 3, 2, 3]);
        assert_eq!(pos.score, -WIN);
        assert_eq!(
            search.evaluate(&pos, 5, -INFINITY, INFINITY),
            -WIN - 5,
            "a decided position must not be searched further"
        );
    }

    #[test]
    fn test_cache_separates_depths() {
        let mut cache = TranspositionCache::new();
        cache.store(99, 1, 123);
        assert_eq!(cache.probe(99, 1), Some(123));
        assert_eq!(cache.probe(99, 2), None, "a deeper probe must miss");
        assert_eq!(cache.probe(98, 1), None);
    }

    #[test]
    fn test_best_move_on_the_empty_board() {
        let zobrist = table();
        let result = best_move(&Position::new(), &zobrist, Duration::from_millis(5));
        let result = result.expect("empty board has moves");
        assert!(result.column < COLS);
        assert!(result.depth >= 1);
    }

    #[test]
    fn test_best_move_with_no_moves_left() {
        let zobrist = table();
        let mut pos = Position::new();
        // Full board, owners striped in two-row bands so no line of four
        // exists anywhere.
        for row in 0..ROWS {
            for col in 0..COLS {
                let own_on_even = !matches!(row, 2 | 3);
                pos.cells[row * COLS + col] =
                    if (col % 2 == 0) == own_on_even { OWN } else { FOE };
            }
        }
        assert!(pos.legal_moves().is_empty());
        assert!(best_move(&pos, &zobrist, Duration::from_millis(5)).is_none());
    }

    #[test]
    fn test_zero_budget_still_searches_depth_one() {
        let zobrist = table();
        let result = best_move(&Position::new(), &zobrist, Duration::ZERO)
            .expect("empty board has moves");
        assert_eq!(result.depth, 1, "time is only checked after a full depth");
    }
}
