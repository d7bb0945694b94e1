//! Top-level facade crate for statline.
//!
//! Re-exports the contract and the backends so users can depend on a single crate.

pub mod core {
    pub use statline_core::*;
}

pub mod backends {
    pub use statline_backends::*;
}

pub use statline_core::{NoStatsLogger, SampleRate, StatsLogger, Tags, Timer};
