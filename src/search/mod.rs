//! VCF search
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Four-threat detection
//! - Candidate move ordering strategies
//! - Dead-end table for exhausted positions
//! - The depth-limited VCF driver and its proof paths

pub mod order;
pub mod proof;
pub mod threat;
pub mod tt;
pub mod vcf;
pub mod zobrist;

pub use order::{ComparatorOrder, MoveOrdering, OrderingKind, ProximityOrder, ScanOrder};
pub use proof::{Move, ProofPath};
pub use threat::{Threat, ThreatKind};
pub use tt::DeadEndTable;
pub use vcf::{Outcome, SearchStats, VcfSearcher};
pub use zobrist::{ZobristTable, ZOBRIST};
