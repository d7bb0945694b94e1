//! In-memory backend for tests and local debugging.
//!
//! Keeps the ordered event log plus current counter and gauge values. Series
//! are keyed by the folded name (`name,k=v,...`), so differently tagged events
//! land in different series. Counters use atomics behind a `DashMap`; gauges
//! are plain `f64` updated under the map's shard lock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use dashmap::DashMap;
use statline_core::error::Result;
use statline_core::{MetricEvent, SampleRate, StatsLogger, Tags, Timer};

use super::fold_name;

#[derive(Default)]
struct Recorded {
    events: Mutex<Vec<MetricEvent>>,
    counters: DashMap<String, AtomicI64>,
    gauges: DashMap<String, f64>,
}

impl Recorded {
    fn log(&self) -> MutexGuard<'_, Vec<MetricEvent>> {
        // A panicking test thread must not hide later events.
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, ev: MetricEvent) {
        match &ev {
            MetricEvent::Count { name, tags, .. } | MetricEvent::Decrement { name, tags, .. } => {
                let key = fold_name(None, name, tags.as_ref());
                let delta = ev.counter_delta().unwrap_or_default();
                self.counters
                    .entry(key)
                    .or_insert_with(|| AtomicI64::new(0))
                    .fetch_add(delta, Ordering::Relaxed);
            }
            MetricEvent::Gauge { name, value, delta, tags, .. } => {
                let key = fold_name(None, name, tags.as_ref());
                let mut slot = self.gauges.entry(key).or_insert(0.0);
                if *delta {
                    *slot += *value;
                } else {
                    *slot = *value;
                }
            }
            MetricEvent::Timing { .. } => {}
        }
        self.log().push(ev);
    }
}

/// Cheap to clone; clones share the same recorded state.
#[derive(Clone, Default)]
pub struct RecordingStatsLogger {
    inner: Arc<Recorded>,
}

impl RecordingStatsLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every event emitted so far, in emission order.
    pub fn events(&self) -> Vec<MetricEvent> {
        self.inner.log().clone()
    }

    pub fn emitted(&self) -> usize {
        self.inner.log().len()
    }

    /// Net counter value for `name` with `tags`; 0 if never touched.
    pub fn counter(&self, name: &str, tags: Option<&Tags>) -> i64 {
        self.inner
            .counters
            .get(&fold_name(None, name, tags))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn gauge_value(&self, name: &str, tags: Option<&Tags>) -> Option<f64> {
        self.inner.gauges.get(&fold_name(None, name, tags)).map(|g| *g)
    }

    /// Recorded durations for `name`, in emission order.
    pub fn timings(&self, name: &str) -> Vec<Duration> {
        self.inner
            .log()
            .iter()
            .filter_map(|ev| match ev {
                MetricEvent::Timing { name: n, duration: Some(d), .. } if n == name => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.inner.log().clear();
        self.inner.counters.clear();
        self.inner.gauges.clear();
    }
}

impl StatsLogger for RecordingStatsLogger {
    fn incr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        self.inner.push(MetricEvent::Count {
            name: name.to_string(),
            amount,
            rate,
            tags: tags.cloned(),
        });
    }

    fn decr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        self.inner.push(MetricEvent::Decrement {
            name: name.to_string(),
            amount,
            rate,
            tags: tags.cloned(),
        });
    }

    fn gauge(&self, name: &str, value: f64, rate: SampleRate, delta: bool, tags: Option<&Tags>) {
        self.inner.push(MetricEvent::Gauge {
            name: name.to_string(),
            value,
            rate,
            delta,
            tags: tags.cloned(),
        });
    }

    fn timing(&self, name: &str, duration: Option<Duration>, tags: Option<&Tags>) {
        if duration.is_none() {
            return;
        }
        self.inner.push(MetricEvent::Timing {
            name: name.to_string(),
            duration,
            tags: tags.cloned(),
        });
    }

    fn timer(&self, name: &str, tags: Option<&Tags>) -> Timer {
        let inner = Arc::clone(&self.inner);
        let name = name.to_string();
        let tags = tags.cloned();
        Timer::with_commit(move |d| {
            inner.push(MetricEvent::Timing {
                name,
                duration: Some(d),
                tags,
            })
        })
    }

    fn get_name(&self, name: &str, tags: Option<&Tags>) -> Result<String> {
        Ok(fold_name(None, name, tags))
    }
}
