//! Zobrist-style key table for incremental position hashing.
//!
//! One pseudo-random key per board cell. A position's hash is built by
//! adding the key of every placed piece's cell and negating the running
//! sum each ply, tracking the perspective flip of the board itself. The
//! table is an explicit value passed by reference wherever hashing
//! happens, so tests can pin the seed and nothing lives in global state.

use crate::constants::{CELLS, ZOBRIST_SEED};

/// Exclusive upper bound for generated keys. Keys stay small enough that
/// any signed combination of one key per cell fits comfortably in an `i64`.
const KEY_BOUND: i64 = 1 << 47;

/// A fixed table of per-cell hash keys.
#[derive(Clone)]
pub struct ZobristTable {
    keys: [i64; CELLS],
}

impl ZobristTable {
    /// Generate a table from an RNG seed. Equal seeds give equal tables.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        ZobristTable {
            keys: std::array::from_fn(|_| rng.i64(1..KEY_BOUND)),
        }
    }

    /// Key for a board cell (flat index).
    #[inline]
    pub fn key(&self, cell: usize) -> i64 {
        self.keys[cell]
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::with_seed(ZOBRIST_SEED)
    }
}
