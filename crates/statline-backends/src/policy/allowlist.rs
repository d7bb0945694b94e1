//! Prefix-based allow/block lists for stat names and tag keys.
//!
//! Entries are trimmed and lowercased at compile time; candidates are trimmed
//! and lowercased at match time, so matching is case-insensitive.

use std::fmt::Debug;

use crate::config::MetricsSection;

/// Decides whether a stat name (or tag key) may be emitted.
pub trait ListValidator: Send + Sync + Debug {
    fn test(&self, name: &str) -> bool;
}

fn compile_prefixes(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn matches_any(prefixes: &[String], name: &str) -> bool {
    let name = name.trim().to_lowercase();
    prefixes.iter().any(|p| name.starts_with(p.as_str()))
}

/// Keeps names starting with one of the prefixes. Empty list keeps everything.
#[derive(Debug, Clone, Default)]
pub struct PatternAllowListValidator {
    prefixes: Vec<String>,
}

impl PatternAllowListValidator {
    pub fn new(raw: &[String]) -> Self {
        Self { prefixes: compile_prefixes(raw) }
    }
}

impl ListValidator for PatternAllowListValidator {
    fn test(&self, name: &str) -> bool {
        self.prefixes.is_empty() || matches_any(&self.prefixes, name)
    }
}

/// Drops names starting with one of the prefixes. Empty list keeps everything.
#[derive(Debug, Clone, Default)]
pub struct PatternBlockListValidator {
    prefixes: Vec<String>,
}

impl PatternBlockListValidator {
    pub fn new(raw: &[String]) -> Self {
        Self { prefixes: compile_prefixes(raw) }
    }
}

impl ListValidator for PatternBlockListValidator {
    fn test(&self, name: &str) -> bool {
        !matches_any(&self.prefixes, name)
    }
}

/// Stat name validator for a metrics section. An allow list takes precedence.
pub fn validator_from(cfg: &MetricsSection) -> Box<dyn ListValidator> {
    if !cfg.allow_list.is_empty() {
        Box::new(PatternAllowListValidator::new(&cfg.allow_list))
    } else if !cfg.block_list.is_empty() {
        Box::new(PatternBlockListValidator::new(&cfg.block_list))
    } else {
        Box::new(PatternAllowListValidator::default())
    }
}
