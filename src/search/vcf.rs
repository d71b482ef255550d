//! Victory by Continuous Four
//!
//! Depth-limited forcing search: the attacker only plays moves that make a
//! four, the defender only plays the single cell that stops it. A branch is
//! won once the attacker makes five or a four the defender cannot block with
//! one stone (open four, double four).
//!
//! Depth counts attacker forcing moves. The final five, and the block and
//! five that close out a double threat, are free.
//!
//! # Example
//!
//! ```
//! use vcf::board::{Pos, Position, Stone};
//! use vcf::rules::Rule;
//! use vcf::search::VcfSearcher;
//!
//! // Black to play an open four on row 8
//! let blacks: Vec<Pos> = (4..7).map(|c| Pos::new(7, c)).collect();
//! let position = Position::from_stones(&blacks, &[], Stone::Black).unwrap();
//!
//! let mut searcher = VcfSearcher::new(Rule::Freestyle);
//! let outcome = searcher.solve(&position, Stone::Black, 1);
//! assert!(outcome.is_proven());
//! ```

use std::time::{Duration, Instant};

use log::{debug, trace, warn};

use crate::board::{Pos, Position, Stone};
use crate::rules::{has_five, makes_five, Rule};

use super::order::{MoveOrdering, OrderingKind};
use super::proof::ProofPath;
use super::threat::{blocking_cells, completion_cells, creates_four, five_moves, four_moves, fours_through};
use super::tt::DeadEndTable;

/// Result of a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Forced win, with the full move sequence
    Proven(ProofPath),
    /// No forced win within the depth limit
    Exhausted,
}

impl Outcome {
    #[inline]
    pub fn is_proven(&self) -> bool {
        matches!(self, Outcome::Proven(_))
    }

    pub fn path(&self) -> Option<&ProofPath> {
        match self {
            Outcome::Proven(path) => Some(path),
            Outcome::Exhausted => None,
        }
    }

    pub fn into_path(self) -> Option<ProofPath> {
        match self {
            Outcome::Proven(path) => Some(path),
            Outcome::Exhausted => None,
        }
    }
}

/// Counters for one solve
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Attacker nodes expanded
    pub nodes: u64,
    /// Nodes answered from the dead-end table
    pub dead_end_hits: u64,
    /// Exhausted nodes recorded in the dead-end table
    pub dead_end_stores: u64,
    /// Deepest iteration started
    pub depth_reached: u8,
    /// Wall time of the solve
    pub elapsed: Duration,
}

/// VCF solver.
///
/// Holds only configuration and the statistics of the last solve; every
/// call to [`VcfSearcher::solve`] builds its own dead-end table.
#[derive(Debug, Clone)]
pub struct VcfSearcher<O: MoveOrdering = OrderingKind> {
    rule: Rule,
    ordering: O,
    iterative_deepening: bool,
    stats: SearchStats,
}

impl VcfSearcher<OrderingKind> {
    /// Searcher with scan ordering and plain depth-first search
    pub fn new(rule: Rule) -> Self {
        Self::with_ordering(rule, OrderingKind::default())
    }
}

impl<O: MoveOrdering> VcfSearcher<O> {
    pub fn with_ordering(rule: Rule, ordering: O) -> Self {
        Self {
            rule,
            ordering,
            iterative_deepening: false,
            stats: SearchStats::default(),
        }
    }

    /// Search depth 1, 2, ... up to the limit so the first proof found uses
    /// the fewest forcing moves.
    #[must_use]
    pub fn iterative_deepening(mut self, enabled: bool) -> Self {
        self.iterative_deepening = enabled;
        self
    }

    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Statistics of the most recent solve
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Look for a forced win for `attacker` within `depth_limit` forcing moves.
    ///
    /// The side to move in `position` is ignored; `attacker` moves first.
    pub fn solve(&mut self, position: &Position, attacker: Stone, depth_limit: u8) -> Outcome {
        self.stats = SearchStats::default();
        let start = Instant::now();

        if attacker == Stone::Empty {
            warn!("solve called without an attacking color");
            return Outcome::Exhausted;
        }
        let root = position.with_to_move(attacker);
        if has_five(root.board(), Stone::Black, self.rule)
            || has_five(root.board(), Stone::White, self.rule)
        {
            warn!("position already contains a five, nothing to solve");
            return Outcome::Exhausted;
        }

        let mut table = DeadEndTable::new();
        let outcome = if self.iterative_deepening {
            let mut outcome = Outcome::Exhausted;
            for depth in 1..=depth_limit {
                self.stats.depth_reached = depth;
                outcome = self.search(&mut table, &root, attacker, depth);
                if outcome.is_proven() {
                    break;
                }
                trace!("depth {depth} exhausted, {} nodes so far", self.stats.nodes);
            }
            outcome
        } else {
            self.stats.depth_reached = depth_limit;
            self.search(&mut table, &root, attacker, depth_limit)
        };

        self.stats.dead_end_hits = table.hits();
        self.stats.dead_end_stores = table.stores();
        self.stats.elapsed = start.elapsed();

        match &outcome {
            Outcome::Proven(path) => debug!(
                "{attacker} wins by VCF in {} moves: {path} ({} nodes, {} dead-end hits, {:?})",
                path.attack_count(),
                self.stats.nodes,
                self.stats.dead_end_hits,
                self.stats.elapsed
            ),
            Outcome::Exhausted => debug!(
                "no VCF for {attacker} within depth {depth_limit} ({} nodes, {} dead ends, {:?})",
                self.stats.nodes,
                table.len(),
                self.stats.elapsed
            ),
        }
        outcome
    }

    /// One attacker node: `position` has `attacker` to move.
    fn search(
        &mut self,
        table: &mut DeadEndTable,
        position: &Position,
        attacker: Stone,
        depth: u8,
    ) -> Outcome {
        if depth == 0 {
            return Outcome::Exhausted;
        }
        self.stats.nodes += 1;

        if table.is_dead_end(position, depth) {
            trace!("dead end hit at depth {depth}");
            return Outcome::Exhausted;
        }

        let board = position.board();
        if let Some(&win) = five_moves(board, attacker, self.rule).first() {
            return Outcome::Proven(ProofPath::five(win, attacker));
        }

        // A defender four must be answered before anything else
        let counters = five_moves(board, attacker.opponent(), self.rule);
        let candidates = match counters.as_slice() {
            [] => {
                let mut moves = four_moves(board, attacker, self.rule);
                self.ordering.order(position, attacker, &mut moves);
                moves
            }
            &[forced] if creates_four(board, forced, attacker, self.rule) => vec![forced],
            _ => {
                trace!("defender threatens {} cells, no counter four", counters.len());
                Vec::new()
            }
        };

        for attack in candidates {
            if let Some(path) = self.try_attack(table, position, attack, attacker, depth) {
                return Outcome::Proven(path);
            }
        }

        table.store(position, depth);
        Outcome::Exhausted
    }

    /// Play the four at `attack`, answer it, and search on
    fn try_attack(
        &mut self,
        table: &mut DeadEndTable,
        position: &Position,
        attack: Pos,
        attacker: Stone,
        depth: u8,
    ) -> Option<ProofPath> {
        let defender = attacker.opponent();
        let after_attack = position.play(attack, attacker);
        let threats = fours_through(after_attack.board(), attack, attacker, self.rule);
        let blocks = blocking_cells(&threats);
        let completions = completion_cells(&threats);

        let block = match (blocks.as_slice(), completions.as_slice()) {
            ([], &[first, second, ..]) => {
                trace!("{attack} makes an unstoppable double threat");
                return Some(ProofPath::double_threat(attack, first, second, attacker));
            }
            (&[block], _) => block,
            _ => unreachable!("candidate {attack} does not make a four"),
        };

        // Unreachable: `search` answers defender fours before attacking
        if makes_five(after_attack.board(), block, defender, self.rule) {
            trace!("block at {block} wins for the defender, dropping {attack}");
            return None;
        }
        trace!("{attack} forces {block} at depth {depth}");

        let after_block = after_attack.play(block, defender);
        self.search(table, &after_block, attacker, depth - 1)
            .into_path()
            .map(|path| path.unshift(attack, block, attacker))
    }
}
