//! Policy layer (stat name validation, allow/block lists, tag filtering).
//!
//! Compiles the metrics config into small lookup structures that backends
//! consult on every emission. Rejections are logged and dropped; nothing here
//! ever fails a metrics call.

pub mod allowlist;
pub mod stat;
pub mod tags;

pub use allowlist::{
    validator_from, ListValidator, PatternAllowListValidator, PatternBlockListValidator,
};
pub use stat::validate_stat;
pub use tags::TagPolicy;
