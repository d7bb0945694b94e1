//! Scoped timer handle returned by [`StatsLogger::timer`](crate::StatsLogger::timer).
//!
//! Lifecycle: `Created -> Started -> {Stopped | Cancelled}`. Creating a timer
//! measures nothing; `start` begins measurement, `stop` commits one
//! observation through the backend's commit callback, `cancel` discards it.
//! A handle is owned by one unit of work; it is `Send` but never shared.

use std::fmt;
use std::time::{Duration, Instant};

type CommitFn = Box<dyn FnOnce(Duration) + Send + 'static>;

/// Where a timer is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Created,
    Started,
    Stopped,
    Cancelled,
}

impl TimerState {
    pub fn is_terminal(self) -> bool {
        matches!(self, TimerState::Stopped | TimerState::Cancelled)
    }
}

/// In-flight timing measurement.
///
/// Dropping a started timer commits it, so `let _t = logger.timer(..)` +
/// `start()` behaves like a guard that reports on scope exit.
pub struct Timer {
    commit: Option<CommitFn>,
    state: TimerState,
    started_at: Option<Instant>,
    duration: Option<Duration>,
}

impl Timer {
    /// Timer that tracks its own state but never emits.
    pub fn noop() -> Self {
        Self {
            commit: None,
            state: TimerState::Created,
            started_at: None,
            duration: None,
        }
    }

    /// Timer that hands the measured duration to `commit` on `stop`.
    pub fn with_commit<F>(commit: F) -> Self
    where
        F: FnOnce(Duration) + Send + 'static,
    {
        Self {
            commit: Some(Box::new(commit)),
            state: TimerState::Created,
            started_at: None,
            duration: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Measured duration, available once stopped after a start.
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Whether `stop` would emit an observation.
    pub fn is_emitting(&self) -> bool {
        self.commit.is_some()
    }

    pub fn start(&mut self) -> &mut Self {
        match self.state {
            TimerState::Created => {
                self.started_at = Some(Instant::now());
                self.state = TimerState::Started;
            }
            other => tracing::debug!(state = ?other, "timer start ignored"),
        }
        self
    }

    /// Finish the measurement. Emits only if the timer was started.
    pub fn stop(&mut self) -> Option<Duration> {
        match self.state {
            TimerState::Started => {
                let elapsed = self.started_at.map(|t| t.elapsed()).unwrap_or_default();
                self.state = TimerState::Stopped;
                self.duration = Some(elapsed);
                if let Some(commit) = self.commit.take() {
                    commit(elapsed);
                }
                Some(elapsed)
            }
            TimerState::Created => {
                self.state = TimerState::Stopped;
                self.commit = None;
                None
            }
            other => {
                tracing::debug!(state = ?other, "timer already finished; stop ignored");
                None
            }
        }
    }

    /// Discard the measurement without emitting.
    pub fn cancel(&mut self) {
        match self.state {
            TimerState::Created | TimerState::Started => {
                self.state = TimerState::Cancelled;
                self.commit = None;
            }
            other => tracing::debug!(state = ?other, "timer already finished; cancel ignored"),
        }
    }

    /// Run `f` between `start` and `stop`.
    pub fn time<R>(mut self, f: impl FnOnce() -> R) -> R {
        self.start();
        let out = f();
        self.stop();
        out
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::noop()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if self.state == TimerState::Started {
            self.stop();
        }
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("state", &self.state)
            .field("emitting", &self.commit.is_some())
            .field("duration", &self.duration)
            .finish()
    }
}
