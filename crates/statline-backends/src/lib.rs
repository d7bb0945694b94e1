//! statline backends library entry.
//!
//! Concrete [`StatsLogger`](statline_core::StatsLogger) implementations plus the
//! plumbing around them: strict config loading, stat-name and tag validators,
//! and the selection step that picks one backend at startup. Consumed by the
//! demo binary (`main.rs`) and by integration tests.

pub mod backends;
pub mod config;
pub mod policy;
pub mod select;

pub use backends::{
    DogStatsdClient, RecordingStatsLogger, SafeDogStatsdLogger, TracingStatsLogger,
};
pub use select::build_stats_logger;
