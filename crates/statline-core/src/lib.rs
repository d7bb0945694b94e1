//! statline core: the metrics emission contract, its data model, and the
//! no-op fallback backend.
//!
//! Application code holds one `Arc<dyn StatsLogger>` (or a generic `L:
//! StatsLogger`) and calls it unconditionally. Which backend sits behind it is
//! decided once at configuration time; when metrics are disabled the caller
//! gets a [`NoStatsLogger`] and every call becomes a no-op.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Emission paths return `()`; the only fallible operation is name
//! resolution, which surfaces as `StatsError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod logger;
pub mod noop;
pub mod timer;
pub mod types;

/// Shared result type.
pub use error::{ErrorCode, Result, StatsError};
pub use logger::StatsLogger;
pub use noop::NoStatsLogger;
pub use timer::{Timer, TimerState};
pub use types::{MetricEvent, SampleRate, Tags};
