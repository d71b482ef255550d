//! Solver configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! depth_limit = 12
//! rule = "exact"
//! ordering = "proximity"
//! iterative_deepening = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::Rule;
use crate::search::{OrderingKind, VcfSearcher};

/// Default maximum number of attacker forcing moves
pub const DEFAULT_DEPTH_LIMIT: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum number of attacker forcing moves
    pub depth_limit: u8,
    /// Win condition
    pub rule: Rule,
    /// Order in which attacker fours are tried
    pub ordering: OrderingKind,
    /// Search increasing depths to return a shortest proof
    pub iterative_deepening: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            rule: Rule::default(),
            ordering: OrderingKind::default(),
            iterative_deepening: false,
        }
    }
}

impl SolverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Searcher configured with this rule, ordering and deepening mode
    pub fn searcher(&self) -> VcfSearcher<OrderingKind> {
        VcfSearcher::with_ordering(self.rule, self.ordering)
            .iterative_deepening(self.iterative_deepening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.depth_limit, 30);
        assert_eq!(config.rule, Rule::Freestyle);
        assert_eq!(config.ordering, OrderingKind::Scan);
        assert!(!config.iterative_deepening);
        assert_eq!(SolverConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_partial_toml() {
        let config = SolverConfig::from_toml_str(
            r#"
            depth_limit = 12
            rule = "exact"
            "#,
        )
        .unwrap();
        assert_eq!(config.depth_limit, 12);
        assert_eq!(config.rule, Rule::Exact);
        assert_eq!(config.ordering, OrderingKind::Scan);
    }

    #[test]
    fn test_full_toml() {
        let config = SolverConfig::from_toml_str(
            "depth_limit = 5\nrule = \"freestyle\"\nordering = \"proximity\"\niterative_deepening = true\n",
        )
        .unwrap();
        assert_eq!(config.ordering, OrderingKind::Proximity);
        assert!(config.iterative_deepening);
        assert_eq!(config.searcher().rule(), Rule::Freestyle);
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            SolverConfig::from_toml_str("rule = \"renju\""),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml_str("depth = 3"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            SolverConfig::from_toml_str("depth_limit = 300"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SolverConfig::load("/nonexistent/vcf.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = SolverConfig {
            depth_limit: 7,
            rule: Rule::Exact,
            ordering: OrderingKind::Proximity,
            iterative_deepening: true,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(SolverConfig::from_toml_str(&text).unwrap(), config);
    }
}
