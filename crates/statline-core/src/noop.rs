//! Fallback backend used when no metrics backend is configured.

use std::sync::Arc;
use std::time::Duration;

use crate::error::{Result, StatsError};
use crate::logger::StatsLogger;
use crate::timer::Timer;
use crate::types::{SampleRate, Tags};

/// Stateless backend whose every operation does nothing.
///
/// Zero-sized and `Copy`: share one instance or construct new ones freely.
/// Timers it hands out keep their own lifecycle but never emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoStatsLogger;

impl NoStatsLogger {
    pub const BACKEND: &'static str = "noop";

    pub fn new() -> Self {
        Self
    }

    pub fn arc() -> Arc<dyn StatsLogger> {
        Arc::new(Self)
    }
}

impl StatsLogger for NoStatsLogger {
    #[inline]
    fn incr(&self, _name: &str, _amount: i64, _rate: SampleRate, _tags: Option<&Tags>) {}

    #[inline]
    fn decr(&self, _name: &str, _amount: i64, _rate: SampleRate, _tags: Option<&Tags>) {}

    #[inline]
    fn gauge(&self, _name: &str, _value: f64, _rate: SampleRate, _delta: bool, _tags: Option<&Tags>) {}

    #[inline]
    fn timing(&self, _name: &str, _duration: Option<Duration>, _tags: Option<&Tags>) {}

    fn timer(&self, _name: &str, _tags: Option<&Tags>) -> Timer {
        Timer::noop()
    }

    fn get_name(&self, _name: &str, _tags: Option<&Tags>) -> Result<String> {
        Err(StatsError::unimplemented(Self::BACKEND, "get_name"))
    }
}
