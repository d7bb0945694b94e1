//! Console backend: every metric becomes a `tracing` event on the
//! `statline::metrics` target, with tags folded into the metric name.

use std::time::Duration;

use statline_core::error::Result;
use statline_core::{SampleRate, StatsLogger, Tags, Timer};

use super::fold_name;

#[derive(Debug, Clone, Default)]
pub struct TracingStatsLogger {
    prefix: Option<String>,
}

impl TracingStatsLogger {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn name(&self, name: &str, tags: Option<&Tags>) -> String {
        fold_name(self.prefix.as_deref(), name, tags)
    }
}

impl StatsLogger for TracingStatsLogger {
    fn incr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        tracing::info!(target: "statline::metrics", kind = "count", metric = %self.name(name, tags), value = amount, rate = rate.get());
    }

    fn decr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        tracing::info!(target: "statline::metrics", kind = "decr", metric = %self.name(name, tags), value = amount, rate = rate.get());
    }

    fn gauge(&self, name: &str, value: f64, rate: SampleRate, delta: bool, tags: Option<&Tags>) {
        tracing::info!(target: "statline::metrics", kind = "gauge", metric = %self.name(name, tags), value, delta, rate = rate.get());
    }

    fn timing(&self, name: &str, duration: Option<Duration>, tags: Option<&Tags>) {
        if let Some(d) = duration {
            tracing::info!(target: "statline::metrics", kind = "timing", metric = %self.name(name, tags), micros = d.as_micros() as u64);
        }
    }

    fn timer(&self, name: &str, tags: Option<&Tags>) -> Timer {
        let metric = self.name(name, tags);
        Timer::with_commit(move |d| {
            tracing::info!(target: "statline::metrics", kind = "timing", metric = %metric, micros = d.as_micros() as u64);
        })
    }

    fn get_name(&self, name: &str, tags: Option<&Tags>) -> Result<String> {
        Ok(self.name(name, tags))
    }
}
