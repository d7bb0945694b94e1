use serde::Deserialize;
use statline_core::error::{Result, StatsError};

use crate::policy::stat::validate_stat;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatsConfig {
    pub version: u32,

    #[serde(default)]
    pub metrics: MetricsSection,
}

impl StatsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatsError::UnsupportedVersion);
        }
        self.metrics.validate()
    }
}

/// Which backend `build_stats_logger` hands out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Noop,
    Tracing,
    Dogstatsd,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    #[serde(default)]
    pub backend: BackendKind,

    /// Namespace prepended as `prefix.name`.
    #[serde(default)]
    pub prefix: Option<String>,

    /// Forward tags to backends that support them.
    #[serde(default = "default_tags_enabled")]
    pub tags_enabled: bool,

    /// Tag keys (prefix match) that are never forwarded.
    #[serde(default)]
    pub disabled_tags: Vec<String>,

    /// Stat name prefixes to keep. Empty keeps everything.
    #[serde(default)]
    pub allow_list: Vec<String>,

    /// Stat name prefixes to drop.
    #[serde(default)]
    pub block_list: Vec<String>,

    #[serde(default = "default_stat_name_max_length")]
    pub stat_name_max_length: usize,
}

impl Default for MetricsSection {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            prefix: None,
            tags_enabled: default_tags_enabled(),
            disabled_tags: Vec::new(),
            allow_list: Vec::new(),
            block_list: Vec::new(),
            stat_name_max_length: default_stat_name_max_length(),
        }
    }
}

impl MetricsSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1000).contains(&self.stat_name_max_length) {
            return Err(StatsError::BadConfig(
                "metrics.stat_name_max_length must be between 1 and 1000".into(),
            ));
        }
        if !self.allow_list.is_empty() && !self.block_list.is_empty() {
            return Err(StatsError::BadConfig(
                "metrics.allow_list and metrics.block_list are mutually exclusive".into(),
            ));
        }
        if let Some(prefix) = &self.prefix {
            validate_stat(prefix, self.stat_name_max_length)
                .map_err(|e| StatsError::BadConfig(format!("metrics.prefix: {e}")))?;
        }
        Ok(())
    }
}

fn default_tags_enabled() -> bool {
    true
}
fn default_stat_name_max_length() -> usize {
    250
}
