//! Value shapes passed into the [`StatsLogger`](crate::StatsLogger) contract.
//!
//! Everything here is transient: built at the call site, borrowed by the
//! backend for the duration of one call, then dropped.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

/// Dimensional metadata attached to a metric event.
///
/// Keys are unique. Iteration is sorted by key so anything derived from a
/// tag set (resolved names, rendered tag lists) is deterministic regardless of
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    inner: BTreeMap<String, String>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from borrowed pairs. Later duplicates replace earlier ones.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Insert or replace a tag, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate `(key, value)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Renders as `k=v,k2=v2`.
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}

/// Client-side sampling probability, conceptually in `(0, 1]`.
///
/// Passed through to backends uninterpreted. Whether and how to sample is the
/// backend's call.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SampleRate(f64);

impl SampleRate {
    /// Always emit.
    pub const ALWAYS: SampleRate = SampleRate(1.0);

    pub const fn new(rate: f64) -> Self {
        Self(rate)
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::ALWAYS
    }
}

impl From<f64> for SampleRate {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<f32> for SampleRate {
    fn from(v: f32) -> Self {
        Self(f64::from(v))
    }
}

impl From<u32> for SampleRate {
    fn from(v: u32) -> Self {
        Self(f64::from(v))
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One emitted metric, as observed by backends that keep or forward events.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricEvent {
    Count {
        name: String,
        amount: i64,
        rate: SampleRate,
        tags: Option<Tags>,
    },
    Decrement {
        name: String,
        amount: i64,
        rate: SampleRate,
        tags: Option<Tags>,
    },
    Gauge {
        name: String,
        value: f64,
        rate: SampleRate,
        /// `true` means `value` adjusts the current gauge instead of replacing it.
        delta: bool,
        tags: Option<Tags>,
    },
    Timing {
        name: String,
        duration: Option<Duration>,
        tags: Option<Tags>,
    },
}

impl MetricEvent {
    pub fn name(&self) -> &str {
        match self {
            MetricEvent::Count { name, .. }
            | MetricEvent::Decrement { name, .. }
            | MetricEvent::Gauge { name, .. }
            | MetricEvent::Timing { name, .. } => name,
        }
    }

    /// Short kind label (`count`, `decr`, `gauge`, `timing`).
    pub fn kind(&self) -> &'static str {
        match self {
            MetricEvent::Count { .. } => "count",
            MetricEvent::Decrement { .. } => "decr",
            MetricEvent::Gauge { .. } => "gauge",
            MetricEvent::Timing { .. } => "timing",
        }
    }

    /// Signed contribution to a counter. `None` for non-counter events.
    pub fn counter_delta(&self) -> Option<i64> {
        match self {
            MetricEvent::Count { amount, .. } => Some(*amount),
            MetricEvent::Decrement { amount, .. } => Some(amount.saturating_neg()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_order_independent() {
        let a = Tags::from_pairs(&[("queue", "default"), ("dag", "etl")]);
        let b = Tags::new().with("dag", "etl").with("queue", "default");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "dag=etl,queue=default");
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let t = Tags::from_pairs(&[("k", "1"), ("k", "2")]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get("k"), Some("2"));
    }

    #[test]
    fn sample_rate_defaults_to_always() {
        assert_eq!(SampleRate::default(), SampleRate::ALWAYS);
        assert_eq!(SampleRate::from(1u32).get(), 1.0);
        assert_eq!(SampleRate::from(0.25).get(), 0.25);
    }

    #[test]
    fn decrement_contributes_negative() {
        let ev = MetricEvent::Decrement {
            name: "jobs".into(),
            amount: 3,
            rate: SampleRate::ALWAYS,
            tags: None,
        };
        assert_eq!(ev.counter_delta(), Some(-3));
        assert_eq!(ev.kind(), "decr");
        assert_eq!(ev.name(), "jobs");
    }
}
