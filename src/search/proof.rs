//! Proof paths
//!
//! A proof path alternates attacker and defender moves, starts and ends with
//! the attacker, and its last move completes five for the attacker.

use std::fmt;

use crate::board::{Pos, Position, Stone};
use crate::error::Result;
use crate::rules::{has_five_at, Rule};

/// One stone placement in a proof
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub stone: Stone,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, stone: Stone) -> Self {
        Self { pos, stone }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProofPath {
    moves: Vec<Move>,
}

impl ProofPath {
    /// A one-move proof: `attacker` completes five at `pos`
    pub fn five(pos: Pos, attacker: Stone) -> Self {
        Self {
            moves: vec![Move::new(pos, attacker)],
        }
    }

    /// Proof ending in an unstoppable double threat.
    ///
    /// `attack` creates completions `first` and `second`; the defender
    /// takes `first` and the attacker wins on `second`.
    pub fn double_threat(attack: Pos, first: Pos, second: Pos, attacker: Stone) -> Self {
        let defender = attacker.opponent();
        Self {
            moves: vec![
                Move::new(attack, attacker),
                Move::new(first, defender),
                Move::new(second, attacker),
            ],
        }
    }

    /// Put an attacker four and the defender's forced block in front
    pub fn unshift(mut self, attack: Pos, block: Pos, attacker: Stone) -> Self {
        let mut moves = Vec::with_capacity(self.moves.len() + 2);
        moves.push(Move::new(attack, attacker));
        moves.push(Move::new(block, attacker.opponent()));
        moves.append(&mut self.moves);
        Self { moves }
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Color of the first move
    pub fn attacker(&self) -> Option<Stone> {
        self.moves.first().map(|m| m.stone)
    }

    /// Number of attacker moves
    #[inline]
    pub fn attack_count(&self) -> usize {
        self.moves.len().div_ceil(2)
    }

    /// Cells in play order, colors dropped
    pub fn cells(&self) -> Vec<Pos> {
        self.moves.iter().map(|m| m.pos).collect()
    }

    /// Play the path onto `start`, failing on the first illegal move
    pub fn replay(&self, start: &Position) -> Result<Position> {
        let mut position = start.clone();
        for m in &self.moves {
            position = position.apply(m.pos, m.stone)?;
        }
        Ok(position)
    }

    /// Check the path is a complete, legal win for its attacker from `start`:
    /// colors alternate, every move lands on an empty cell, and the final
    /// attacker move makes five under `rule`.
    pub fn is_valid_from(&self, start: &Position, rule: Rule) -> bool {
        let Some(attacker) = self.attacker() else {
            return false;
        };
        let alternating = self.moves.iter().enumerate().all(|(i, m)| {
            let expected = if i % 2 == 0 { attacker } else { attacker.opponent() };
            m.stone == expected
        });
        if !alternating || self.moves.len() % 2 == 0 {
            return false;
        }

        let Ok(end) = self.replay(start) else {
            return false;
        };
        let last = self.moves[self.moves.len() - 1].pos;
        has_five_at(end.board(), last, attacker, rule)
    }
}

/// Comma separated notation, e.g. `H8,H9,I8`
impl fmt::Display for ProofPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", m.pos)?;
        }
        Ok(())
    }
}
