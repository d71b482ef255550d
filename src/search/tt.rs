//! Dead-end table for the VCF search
//!
//! Only failures are cached: a proven win short-circuits the whole search,
//! so there is nothing to reuse. Each entry remembers the deepest remaining
//! depth at which a position was exhausted. An exhausted subtree at depth `d`
//! is exhausted at every smaller depth too, so a probe succeeds whenever the
//! stored depth is at least the probed one.
//!
//! The table belongs to a single solve call and is dropped with it.
//!
//! # Example
//!
//! ```
//! use vcf::board::{Position, Stone};
//! use vcf::search::DeadEndTable;
//!
//! let mut table = DeadEndTable::new();
//! let position = Position::new(Stone::Black);
//!
//! table.store(&position, 3);
//! assert!(table.is_dead_end(&position, 2));
//! assert!(!table.is_dead_end(&position, 4));
//! ```

use std::collections::HashMap;

use crate::board::{Board, Position};

#[derive(Debug, Clone, Copy)]
struct DeadEnd {
    /// Exact stones, to rule out hash collisions
    board: Board,
    /// Deepest remaining depth proven exhausted
    depth: u8,
}

/// Per-solve cache of exhausted positions, keyed by Zobrist hash
#[derive(Debug, Default)]
pub struct DeadEndTable {
    entries: HashMap<u64, DeadEnd>,
    hits: u64,
    stores: u64,
}

impl DeadEndTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `position` is known to be exhausted at `depth` or deeper
    pub fn is_dead_end(&mut self, position: &Position, depth: u8) -> bool {
        let hit = match self.entries.get(&position.hash()) {
            Some(entry) => entry.board == *position.board() && entry.depth >= depth,
            None => false,
        };
        if hit {
            self.hits += 1;
        }
        hit
    }

    /// Record that `position` has no win within `depth` attacker moves.
    ///
    /// A colliding entry for a different board is replaced.
    pub fn store(&mut self, position: &Position, depth: u8) {
        self.stores += 1;
        let entry = self.entries.entry(position.hash()).or_insert(DeadEnd {
            board: *position.board(),
            depth,
        });
        if entry.board != *position.board() {
            entry.board = *position.board();
            entry.depth = depth;
        } else if entry.depth < depth {
            entry.depth = depth;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful probes
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of store calls
    #[inline]
    pub fn stores(&self) -> u64 {
        self.stores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, Stone};

    #[test]
    fn test_empty_table() {
        let mut table = DeadEndTable::new();
        let position = Position::new(Stone::Black);
        assert!(table.is_empty());
        assert!(!table.is_dead_end(&position, 1));
        assert_eq!(table.hits(), 0);
    }

    #[test]
    fn test_depth_dominance() {
        let mut table = DeadEndTable::new();
        let position = Position::new(Stone::Black);

        table.store(&position, 2);
        assert!(table.is_dead_end(&position, 1));
        assert!(table.is_dead_end(&position, 2));
        assert!(!table.is_dead_end(&position, 3));
        assert_eq!(table.hits(), 2);

        // Deeper result replaces shallower one, never the reverse
        table.store(&position, 5);
        table.store(&position, 1);
        assert!(table.is_dead_end(&position, 5));
        assert_eq!(table.len(), 1);
        assert_eq!(table.stores(), 3);
    }

    #[test]
    fn test_different_positions() {
        let mut table = DeadEndTable::new();
        let a = Position::new(Stone::Black);
        let b = a.apply(Pos::new(7, 7), Stone::White).unwrap();

        table.store(&a, 3);
        assert!(!table.is_dead_end(&b, 1));
    }

    #[test]
    fn test_transposition_hits() {
        let mut table = DeadEndTable::new();
        let a = Position::new(Stone::Black)
            .apply(Pos::new(1, 1), Stone::Black)
            .unwrap()
            .apply(Pos::new(2, 2), Stone::White)
            .unwrap();
        let b = Position::from_stones(&[Pos::new(1, 1)], &[Pos::new(2, 2)], Stone::Black)
            .unwrap();

        assert_eq!(a.to_move(), b.to_move());
        table.store(&a, 4);
        assert!(table.is_dead_end(&b, 4));
    }
}
