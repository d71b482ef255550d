//! Error types for the VCF solver
//!
//! "No forced win" is not an error: the solver reports it as an absent
//! result. Errors here cover malformed input, illegal moves on a
//! [`Position`](crate::Position), and configuration loading.

use crate::board::Pos;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Cell index outside `[0, 225)`
    #[error("cell index {0} is outside the board")]
    CellOutOfRange(usize),

    /// Same cell listed twice in the input stone lists
    #[error("cell {0} is listed more than once")]
    Overlap(Pos),

    /// Unparseable point or board notation
    #[error("invalid notation: {0:?}")]
    InvalidNotation(String),

    /// Move onto an occupied cell
    #[error("illegal move: {0} is already occupied")]
    Occupied(Pos),

    /// Move outside the board
    #[error("illegal move: ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    /// Move with the `Empty` color
    #[error("illegal move: cannot place an empty stone at {0}")]
    EmptyStone(Pos),

    /// Config file parse error
    #[error(transparent)]
    Config(#[from] toml::de::Error),

    /// File I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the malformed-input class (bad stone lists or notation)
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Error::CellOutOfRange(_) | Error::Overlap(_) | Error::InvalidNotation(_)
        )
    }

    /// True for moves rejected by [`Position::apply`](crate::Position::apply)
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            Error::Occupied(_) | Error::OffBoard { .. } | Error::EmptyStone(_)
        )
    }
}

/// Result type for solver operations
pub type Result<T> = std::result::Result<T, Error>;
