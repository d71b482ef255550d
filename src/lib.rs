//! VCF solver for five-in-a-row
//!
//! Decides whether the attacking color can force a win on a 15x15 board using
//! only four-threats (Victory by Continuous Four), and if so returns the full
//! winning sequence:
//! - The attacker only plays moves that make a four (or five)
//! - The defender only plays the single cell that stops the four
//! - A line wins with five in a row; overlines count under
//!   [`Rule::Freestyle`] and not under [`Rule::Exact`]
//!
//! # Architecture
//!
//! - [`board`]: Bitboards, cells and immutable positions
//! - [`rules`]: Win conditions
//! - [`search`]: Threat detection, move ordering and the VCF driver
//! - [`encoding`]: Cell index and text formats
//! - [`config`]: Solver settings, loadable from TOML
//! - [`solver`]: Input validation and result packaging
//!
//! # Quick Start
//!
//! ```
//! // Black stones at G8, H8, I8 and H5; white at F8. Black attacks.
//! let blacks = [97, 112, 127, 109];
//! let whites = [82];
//!
//! match vcf::solve_vcf(&blacks, &whites, true, 10).unwrap() {
//!     Some(path) => println!("forced win: {path:?}"),
//!     None => println!("no VCF"),
//! }
//! ```
//!
//! Moves in a returned path alternate between attacker and defender, starting
//! and ending with the attacker.

pub mod board;
pub mod config;
pub mod encoding;
pub mod error;
pub mod rules;
pub mod search;
pub mod solver;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Position, Stone, BOARD_SIZE, TOTAL_CELLS};
pub use config::SolverConfig;
pub use error::{Error, Result};
pub use rules::Rule;
pub use search::{Outcome, ProofPath, VcfSearcher};
pub use solver::{SolveResult, Solver};

/// Search for a VCF win from raw cell indices.
///
/// `blacks` and `whites` list occupied cells as `col * 15 + row` (see
/// [`encoding`]), `black` selects the attacker, and `depth_limit` caps the
/// number of attacker forcing moves. Returns the proof in the same encoding,
/// or `None` when there is no forced win within the limit.
///
/// Fails only on malformed input: an index outside the board, or a cell
/// listed twice.
pub fn solve_vcf(blacks: &[u8], whites: &[u8], black: bool, depth_limit: u8) -> Result<Option<Vec<u8>>> {
    Solver::with_config(SolverConfig {
        depth_limit,
        ..SolverConfig::default()
    })
    .solve_bytes(blacks, whites, black)
}
