//! Game rules for five-in-a-row
//!
//! Two win conditions are supported:
//! - Freestyle: five or more stones in a row
//! - Exact: exactly five; an overline does not count
//!
//! Placement restrictions (renju forbidden moves) are not modelled.

pub mod win;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// Re-exports for convenient access
pub use win::{
    find_five_positions, has_five, has_five_at, is_five_or_more, makes_five, run_length,
};

/// Which line lengths count as a win
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Five or more in a row wins
    #[default]
    Freestyle,
    /// Exactly five in a row wins
    Exact,
}

impl Rule {
    /// True if a run of `len` consecutive stones wins under this rule
    #[inline]
    pub fn is_win(self, len: usize) -> bool {
        match self {
            Rule::Freestyle => len >= 5,
            Rule::Exact => len == 5,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Freestyle => f.write_str("freestyle"),
            Rule::Exact => f.write_str("exact"),
        }
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freestyle" => Ok(Rule::Freestyle),
            "exact" => Ok(Rule::Exact),
            _ => Err(Error::InvalidNotation(s.to_string())),
        }
    }
}
