//! DogStatsD-style backend.
//!
//! The client owns the socket, buffering and flush; its methods return `()`
//! and swallow transport errors. This layer only decides what reaches it:
//! stat names are validated and filtered, tags are filtered and rendered as
//! `key:value`, and timings are converted to milliseconds.

use std::sync::Arc;
use std::time::Duration;

use statline_core::error::Result;
use statline_core::{SampleRate, StatsLogger, Tags, Timer};

use crate::config::MetricsSection;
use crate::policy::{validate_stat, validator_from, ListValidator, PatternAllowListValidator, TagPolicy};

/// Tag-aware statsd client. Implementations must not block the caller.
pub trait DogStatsdClient: Send + Sync {
    fn increment(&self, metric: &str, value: i64, tags: &[String], sample_rate: f64);
    fn decrement(&self, metric: &str, value: i64, tags: &[String], sample_rate: f64);
    fn gauge(&self, metric: &str, value: f64, tags: &[String], sample_rate: f64);
    fn timing(&self, metric: &str, value_ms: f64, tags: &[String]);
}

pub struct SafeDogStatsdLogger {
    client: Arc<dyn DogStatsdClient>,
    prefix: Option<String>,
    max_len: usize,
    name_filter: Box<dyn ListValidator>,
    tag_policy: TagPolicy,
}

impl SafeDogStatsdLogger {
    pub const BACKEND: &'static str = "dogstatsd";

    /// Defaults: no prefix, tags forwarded, every valid name kept.
    pub fn new(client: Arc<dyn DogStatsdClient>) -> Self {
        Self {
            client,
            prefix: None,
            max_len: 250,
            name_filter: Box::new(PatternAllowListValidator::default()),
            tag_policy: TagPolicy::new(true, &[]),
        }
    }

    pub fn from_config(client: Arc<dyn DogStatsdClient>, cfg: &MetricsSection) -> Self {
        Self {
            client,
            prefix: cfg.prefix.clone(),
            max_len: cfg.stat_name_max_length,
            name_filter: validator_from(cfg),
            tag_policy: TagPolicy::new(cfg.tags_enabled, &cfg.disabled_tags),
        }
    }

    fn resolve(&self, name: &str) -> Result<String> {
        validate_stat(name, self.max_len)?;
        Ok(match &self.prefix {
            Some(p) => format!("{p}.{name}"),
            None => name.to_string(),
        })
    }

    /// Name to emit, or `None` when the stat is invalid or filtered out.
    fn accept(&self, name: &str) -> Option<String> {
        match self.resolve(name) {
            Ok(resolved) if self.name_filter.test(name) => Some(resolved),
            Ok(_) => None,
            Err(e) => {
                tracing::error!(stat = %name, error = %e, "dropping invalid stat");
                None
            }
        }
    }
}

impl StatsLogger for SafeDogStatsdLogger {
    fn incr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        if let Some(stat) = self.accept(name) {
            let tags = self.tag_policy.prepare(tags);
            self.client.increment(&stat, amount, &tags, rate.get());
        }
    }

    fn decr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        if let Some(stat) = self.accept(name) {
            let tags = self.tag_policy.prepare(tags);
            self.client.decrement(&stat, amount, &tags, rate.get());
        }
    }

    /// The client has no relative gauges; `delta` is ignored.
    fn gauge(&self, name: &str, value: f64, rate: SampleRate, _delta: bool, tags: Option<&Tags>) {
        if let Some(stat) = self.accept(name) {
            let tags = self.tag_policy.prepare(tags);
            self.client.gauge(&stat, value, &tags, rate.get());
        }
    }

    fn timing(&self, name: &str, duration: Option<Duration>, tags: Option<&Tags>) {
        let Some(duration) = duration else {
            return;
        };
        if let Some(stat) = self.accept(name) {
            let tags = self.tag_policy.prepare(tags);
            self.client.timing(&stat, duration.as_secs_f64() * 1000.0, &tags);
        }
    }

    fn timer(&self, name: &str, tags: Option<&Tags>) -> Timer {
        let Some(stat) = self.accept(name) else {
            return Timer::noop();
        };
        let tags = self.tag_policy.prepare(tags);
        let client = Arc::clone(&self.client);
        Timer::with_commit(move |d| client.timing(&stat, d.as_secs_f64() * 1000.0, &tags))
    }

    /// Tags travel separately, so they do not change the name.
    fn get_name(&self, name: &str, _tags: Option<&Tags>) -> Result<String> {
        self.resolve(name)
    }
}
