//! Board representation for the VCF solver

pub mod bitboard;
pub mod board;
pub mod position;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use position::Position;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Attacker color from the boundary flag (`true` = black)
    #[inline]
    pub fn from_black_flag(black: bool) -> Stone {
        if black {
            Stone::Black
        } else {
            Stone::White
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stone::Black => "black",
            Stone::White => "white",
            Stone::Empty => "empty",
        };
        f.write_str(s)
    }
}

/// Line directions on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right
    DiagonalSE,
    /// Top-right to bottom-left
    DiagonalSW,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalSE,
        Direction::DiagonalSW,
    ];

    /// (row, col) step of this direction
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalSE => (1, 1),
            Direction::DiagonalSW => (1, -1),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < TOTAL_CELLS);
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    /// Checked conversion from an absolute cell index
    pub fn try_from_index(idx: usize) -> Result<Self, Error> {
        if idx < TOTAL_CELLS {
            Ok(Self::from_index(idx))
        } else {
            Err(Error::CellOutOfRange(idx))
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// True if both coordinates lie on the board
    #[inline]
    pub fn on_board(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Step `n` cells along a direction, `None` when leaving the board
    #[inline]
    pub fn offset(self, dir: Direction, n: i32) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        let r = self.row as i32 + dr * n;
        let c = self.col as i32 + dc * n;
        if Pos::is_valid(r, c) {
            Some(Pos::new(r as u8, c as u8))
        } else {
            None
        }
    }

    /// Chebyshev distance between two cells
    #[inline]
    pub fn distance(self, other: Pos) -> u8 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Column letter plus 1-based row, e.g. `H8` for the centre
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col) as char;
        write!(f, "{}{}", col, self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || Error::InvalidNotation(s.to_string());

        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'A'..='O') => c as u8 - b'A',
            Some(c @ 'a'..='o') => c as u8 - b'a',
            _ => return Err(invalid()),
        };
        let row = chars
            .as_str()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=BOARD_SIZE as u8).contains(n))
            .ok_or_else(invalid)?;

        Ok(Pos::new(row - 1, col))
    }
}
