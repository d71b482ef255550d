//! Immutable per-ply positions
//!
//! A [`Position`] is a board snapshot plus the color to move. Applying a move
//! produces a new position and leaves the parent untouched, so the search can
//! backtrack by simply dropping the child.

use super::{Board, Pos, Stone};
use crate::error::{Error, Result};
use crate::rules;
use crate::search::zobrist::ZOBRIST;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    to_move: Stone,
    last_move: Option<Pos>,
    hash: u64,
}

impl Position {
    /// Empty board with `to_move` to play
    pub fn new(to_move: Stone) -> Self {
        Self::from_board(Board::new(), to_move)
    }

    /// Wrap an existing board
    pub fn from_board(board: Board, to_move: Stone) -> Self {
        Self {
            hash: ZOBRIST.hash(&board, to_move),
            board,
            to_move,
            last_move: None,
        }
    }

    /// Build a position from unordered stone lists.
    ///
    /// Fails with an input error when a cell is listed twice, either within
    /// one color or across both.
    pub fn from_stones(blacks: &[Pos], whites: &[Pos], to_move: Stone) -> Result<Self> {
        let mut board = Board::new();
        for (stones, color) in [(blacks, Stone::Black), (whites, Stone::White)] {
            for &pos in stones {
                if !pos.on_board() {
                    return Err(Error::CellOutOfRange(
                        pos.row as usize * super::BOARD_SIZE + pos.col as usize,
                    ));
                }
                if !board.is_empty(pos) {
                    return Err(Error::Overlap(pos));
                }
                board.place_stone(pos, color);
            }
        }
        Ok(Self::from_board(board, to_move))
    }

    /// Replay an ordered move list, colors alternating from `first`
    pub fn from_moves(moves: &[Pos], first: Stone) -> Result<Self> {
        let mut position = Self::new(first);
        for &pos in moves {
            position = position.apply(pos, position.to_move)?;
        }
        Ok(position)
    }

    /// Place `stone` at `pos` and hand the turn to the other color.
    ///
    /// Fails with an illegal-move error if the cell is off the board or
    /// already occupied, or if `stone` is `Empty`.
    pub fn apply(&self, pos: Pos, stone: Stone) -> Result<Position> {
        if !pos.on_board() {
            return Err(Error::OffBoard {
                row: pos.row,
                col: pos.col,
            });
        }
        if stone == Stone::Empty {
            return Err(Error::EmptyStone(pos));
        }
        if !self.board.is_empty(pos) {
            return Err(Error::Occupied(pos));
        }
        Ok(self.play(pos, stone))
    }

    /// Unchecked variant of [`Position::apply`] for cells the search has
    /// already proven empty.
    #[inline]
    pub(crate) fn play(&self, pos: Pos, stone: Stone) -> Position {
        let mut board = self.board;
        board.place_stone(pos, stone);
        let to_move = stone.opponent();
        let hash = self.hash
            ^ ZOBRIST.stone_key(pos, stone)
            ^ ZOBRIST.side_key(self.to_move)
            ^ ZOBRIST.side_key(to_move);
        Position {
            board,
            to_move,
            last_move: Some(pos),
            hash,
        }
    }

    /// Same stones, different side to move
    pub fn with_to_move(&self, to_move: Stone) -> Position {
        Position {
            to_move,
            hash: self.hash ^ ZOBRIST.side_key(self.to_move) ^ ZOBRIST.side_key(to_move),
            ..self.clone()
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Zobrist hash of stones and side to move
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.board.get(pos)
    }

    /// True iff `color` has five or more consecutive stones on some line
    pub fn is_five_or_more(&self, color: Stone) -> bool {
        rules::is_five_or_more(&self.board, color)
    }

    pub fn empty_cells(&self) -> Vec<Pos> {
        self.board.empty_cells()
    }
}
