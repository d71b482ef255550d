//! Solver front end
//!
//! [`Solver`] validates raw stone lists, builds the root [`Position`], runs
//! a fresh [`VcfSearcher`] and packages the outcome with its statistics.
//!
//! # Example
//!
//! ```
//! use vcf::{Pos, Solver, SolverConfig, Stone};
//!
//! let solver = Solver::with_config(SolverConfig {
//!     depth_limit: 4,
//!     ..SolverConfig::default()
//! });
//!
//! // Black's broken four X X _ X X on row 8
//! let blacks = [Pos::new(7, 3), Pos::new(7, 4), Pos::new(7, 6), Pos::new(7, 7)];
//! let result = solver.solve(&blacks, &[], Stone::Black).unwrap();
//!
//! assert!(result.is_win());
//! assert_eq!(result.path().unwrap().to_string(), "F8");
//! ```

use std::time::Instant;

use crate::board::{Pos, Position, Stone};
use crate::config::SolverConfig;
use crate::encoding::{decode_cells, encode_outcome};
use crate::error::Result;
use crate::search::{Outcome, ProofPath, SearchStats};

/// Outcome of one solve with its diagnostics
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Attacking color
    pub attacker: Stone,
    /// Proof or exhaustion
    pub outcome: Outcome,
    /// Search counters
    pub stats: SearchStats,
    /// Time taken in milliseconds, including setup
    pub time_ms: u64,
}

impl SolveResult {
    #[inline]
    pub fn is_win(&self) -> bool {
        self.outcome.is_proven()
    }

    #[inline]
    pub fn path(&self) -> Option<&ProofPath> {
        self.outcome.path()
    }

    /// Proof as cell indices, `None` when exhausted
    pub fn encode(&self) -> Option<Vec<u8>> {
        encode_outcome(&self.outcome)
    }
}

/// Configured VCF solver.
///
/// Holds no search state between calls, so one solver can serve any number
/// of solves, including from several threads.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Solver with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve from unordered stone lists.
    ///
    /// Fails with an input error if a cell is off the board or listed twice.
    pub fn solve(&self, blacks: &[Pos], whites: &[Pos], attacker: Stone) -> Result<SolveResult> {
        let position = Position::from_stones(blacks, whites, attacker)?;
        Ok(self.solve_position(&position, attacker))
    }

    /// Solve an already-built position with `attacker` to move
    pub fn solve_position(&self, position: &Position, attacker: Stone) -> SolveResult {
        let start = Instant::now();
        let mut searcher = self.config.searcher();
        let outcome = searcher.solve(position, attacker, self.config.depth_limit);

        SolveResult {
            attacker,
            outcome,
            stats: searcher.stats().clone(),
            time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Solve from cell-index byte lists, returning the proof as indices
    pub fn solve_bytes(&self, blacks: &[u8], whites: &[u8], black: bool) -> Result<Option<Vec<u8>>> {
        let blacks = decode_cells(blacks)?;
        let whites = decode_cells(whites)?;
        let result = self.solve(&blacks, &whites, Stone::from_black_flag(black))?;
        Ok(result.encode())
    }
}
