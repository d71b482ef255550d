//! Five-in-a-row detection
//!
//! Every check walks the four line directions through a cell, counting
//! consecutive stones of one color on both sides.

use crate::board::{Board, Direction, Pos, Stone};

use super::Rule;

/// Length of the run of `color` through `pos` along `dir`.
///
/// `pos` itself is counted as a `color` stone whether or not it is occupied,
/// so the same helper answers "what if I played here".
pub fn run_length(board: &Board, pos: Pos, dir: Direction, color: Stone) -> usize {
    let mut count = 1;

    let mut n = 1;
    while let Some(p) = pos.offset(dir, n) {
        if board.get(p) != color {
            break;
        }
        count += 1;
        n += 1;
    }

    let mut n = 1;
    while let Some(p) = pos.offset(dir, -n) {
        if board.get(p) != color {
            break;
        }
        count += 1;
        n += 1;
    }

    count
}

/// Check if `color` has five or more in a row anywhere (rule-independent)
pub fn is_five_or_more(board: &Board, color: Stone) -> bool {
    let Some(stones) = board.stones(color) else {
        return false;
    };
    stones
        .iter_ones()
        .any(|pos| Direction::ALL.iter().any(|&dir| run_length(board, pos, dir, color) >= 5))
}

/// Check if `color` has a winning line under `rule`
pub fn has_five(board: &Board, color: Stone, rule: Rule) -> bool {
    find_five_positions(board, color, rule).is_some()
}

/// Check if the stone at `pos` is part of a winning line under `rule`.
///
/// Only checks the 4 lines through `pos`.
#[inline]
pub fn has_five_at(board: &Board, pos: Pos, color: Stone, rule: Rule) -> bool {
    board.get(pos) == color
        && Direction::ALL
            .iter()
            .any(|&dir| rule.is_win(run_length(board, pos, dir, color)))
}

/// Check if playing `color` at the empty cell `pos` would win under `rule`
#[inline]
pub fn makes_five(board: &Board, pos: Pos, color: Stone, rule: Rule) -> bool {
    board.is_empty(pos)
        && Direction::ALL
            .iter()
            .any(|&dir| rule.is_win(run_length(board, pos, dir, color)))
}

/// Find the stones of a winning line if one exists
///
/// Returns the full run (five, or more under `Rule::Freestyle`) in line order.
pub fn find_five_positions(board: &Board, color: Stone, rule: Rule) -> Option<Vec<Pos>> {
    let stones = board.stones(color)?;

    for pos in stones.iter_ones() {
        for &dir in &Direction::ALL {
            // Only start from the first stone of a run
            if pos.offset(dir, -1).is_some_and(|p| board.get(p) == color) {
                continue;
            }

            let mut line = vec![pos];
            let mut n = 1;
            while let Some(p) = pos.offset(dir, n) {
                if board.get(p) != color {
                    break;
                }
                line.push(p);
                n += 1;
            }

            if rule.is_win(line.len()) {
                return Some(line);
            }
        }
    }
    None
}
