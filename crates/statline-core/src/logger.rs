//! The contract every metrics backend implements.

use std::time::Duration;

use crate::error::Result;
use crate::timer::Timer;
use crate::types::{SampleRate, Tags};

/// Metrics emitter shared by instrumented code.
///
/// Implementations are immutable configuration from the caller's point of view
/// and are shared read-only across threads (`Send + Sync`, `&self` receivers).
///
/// # Contract
/// - Emission (`incr`, `decr`, `gauge`, `timing`, `timer`) never fails and never
///   blocks. Backends that do I/O buffer it off the calling path and swallow
///   their own transport errors.
/// - Fields a backend cannot honor (tags, delta gauges, ...) are ignored, not
///   rejected.
/// - `get_name` is the only fallible operation. A backend without name
///   resolution returns [`StatsError::Unimplemented`](crate::StatsError::Unimplemented).
///
/// Negative `incr` amounts are passed through with their sign and therefore
/// act as a decrement. Prefer `decr` at call sites.
pub trait StatsLogger: Send + Sync {
    /// Increment counter `name` by `amount`.
    fn incr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>);

    /// Decrement counter `name` by `amount`; equivalent to `incr(name, -amount, ..)`.
    fn decr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>);

    /// Set gauge `name` to `value`, or adjust it by `value` when `delta` is set.
    fn gauge(&self, name: &str, value: f64, rate: SampleRate, delta: bool, tags: Option<&Tags>);

    /// Record an elapsed time. `None` means the caller measures through
    /// [`timer`](Self::timer) instead; nothing is emitted.
    fn timing(&self, name: &str, duration: Option<Duration>, tags: Option<&Tags>);

    /// Fresh scoped timer for `name`. Measurement starts on `Timer::start`.
    fn timer(&self, name: &str, tags: Option<&Tags>) -> Timer;

    /// Literal name the backend would emit for `name` with `tags`.
    /// Pure; never emits.
    fn get_name(&self, name: &str, tags: Option<&Tags>) -> Result<String>;

    /// `incr(name, 1)` with default rate and no tags.
    fn incr_one(&self, name: &str) {
        self.incr(name, 1, SampleRate::ALWAYS, None);
    }

    /// `decr(name, 1)` with default rate and no tags.
    fn decr_one(&self, name: &str) {
        self.decr(name, 1, SampleRate::ALWAYS, None);
    }

    /// Absolute gauge with default rate and no tags.
    fn set_gauge(&self, name: &str, value: f64) {
        self.gauge(name, value, SampleRate::ALWAYS, false, None);
    }
}

impl<L: StatsLogger + ?Sized> StatsLogger for std::sync::Arc<L> {
    fn incr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        (**self).incr(name, amount, rate, tags)
    }

    fn decr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        (**self).decr(name, amount, rate, tags)
    }

    fn gauge(&self, name: &str, value: f64, rate: SampleRate, delta: bool, tags: Option<&Tags>) {
        (**self).gauge(name, value, rate, delta, tags)
    }

    fn timing(&self, name: &str, duration: Option<Duration>, tags: Option<&Tags>) {
        (**self).timing(name, duration, tags)
    }

    fn timer(&self, name: &str, tags: Option<&Tags>) -> Timer {
        (**self).timer(name, tags)
    }

    fn get_name(&self, name: &str, tags: Option<&Tags>) -> Result<String> {
        (**self).get_name(name, tags)
    }
}
