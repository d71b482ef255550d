//! Zobrist keys for positions
//!
//! A position's hash is the XOR of one key per stone plus a side key while
//! black is to move. Placing a stone or changing the side to move is a
//! couple of XORs, so child positions hash in constant time.
//!
//! # Example
//!
//! ```
//! use vcf::board::{Board, Pos, Stone};
//! use vcf::search::zobrist::ZOBRIST;
//!
//! let pos = Pos::new(7, 7);
//! let before = ZOBRIST.hash(&Board::new(), Stone::Black);
//!
//! let mut board = Board::new();
//! board.place_stone(pos, Stone::Black);
//! let after = ZOBRIST.hash(&board, Stone::White);
//!
//! let incremental = before
//!     ^ ZOBRIST.stone_key(pos, Stone::Black)
//!     ^ ZOBRIST.side_key(Stone::Black)
//!     ^ ZOBRIST.side_key(Stone::White);
//! assert_eq!(incremental, after);
//! ```

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

/// Shared key table, generated at compile time
pub static ZOBRIST: ZobristTable = ZobristTable::new();

const SEED: u64 = 0x1234_5678_9ABC_DEF0;

pub struct ZobristTable {
    black_keys: [u64; TOTAL_CELLS],
    white_keys: [u64; TOTAL_CELLS],
    black_to_move: u64,
}

/// SplitMix64 step: returns (new state, output)
const fn splitmix(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

impl ZobristTable {
    /// Fixed seed, so hashes are identical across runs and builds
    #[must_use]
    pub const fn new() -> Self {
        let mut state = SEED;
        let mut black_keys = [0u64; TOTAL_CELLS];
        let mut white_keys = [0u64; TOTAL_CELLS];

        let mut i = 0;
        while i < TOTAL_CELLS {
            let (s, b) = splitmix(state);
            let (s, w) = splitmix(s);
            black_keys[i] = b;
            white_keys[i] = w;
            state = s;
            i += 1;
        }
        let (_, black_to_move) = splitmix(state);

        Self {
            black_keys,
            white_keys,
            black_to_move,
        }
    }

    /// Key of one stone; zero for `Empty`
    #[inline]
    pub fn stone_key(&self, pos: Pos, stone: Stone) -> u64 {
        match stone {
            Stone::Black => self.black_keys[pos.to_index()],
            Stone::White => self.white_keys[pos.to_index()],
            Stone::Empty => 0,
        }
    }

    /// Side component: non-zero only with black to move
    #[inline]
    pub fn side_key(&self, to_move: Stone) -> u64 {
        if to_move == Stone::Black {
            self.black_to_move
        } else {
            0
        }
    }

    /// Full hash of a board with `to_move` to play
    #[must_use]
    pub fn hash(&self, board: &Board, to_move: Stone) -> u64 {
        let blacks = board.black.iter_ones().map(|p| self.black_keys[p.to_index()]);
        let whites = board.white.iter_ones().map(|p| self.white_keys[p.to_index()]);
        blacks
            .chain(whites)
            .fold(self.side_key(to_move), |h, key| h ^ key)
    }
}

impl Default for ZobristTable {
    fn default() -> Self {
        Self::new()
    }
}
