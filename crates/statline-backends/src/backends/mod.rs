//! Concrete [`StatsLogger`](statline_core::StatsLogger) implementations.
//!
//! - `dogstatsd`: tag-aware backend over an injected client; transport lives
//!   in the client.
//! - `console`: emits every metric as a structured `tracing` event.
//! - `recording`: keeps events and counter/gauge state in memory.

pub mod console;
pub mod dogstatsd;
pub mod recording;

use statline_core::Tags;

pub use console::TracingStatsLogger;
pub use dogstatsd::{DogStatsdClient, SafeDogStatsdLogger};
pub use recording::RecordingStatsLogger;

/// `prefix.name,k=v,...` for backends that fold tags into the metric name.
pub(crate) fn fold_name(prefix: Option<&str>, name: &str, tags: Option<&Tags>) -> String {
    let mut out = match prefix {
        Some(p) => format!("{p}.{name}"),
        None => name.to_string(),
    };
    if let Some(t) = tags.filter(|t| !t.is_empty()) {
        out.push(',');
        out.push_str(&t.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_name_variants() {
        let tags = Tags::from_pairs(&[("b", "2"), ("a", "1")]);
        assert_eq!(fold_name(None, "m", None), "m");
        assert_eq!(fold_name(Some("app"), "m", None), "app.m");
        assert_eq!(fold_name(None, "m", Some(&Tags::new())), "m");
        assert_eq!(fold_name(Some("app"), "m", Some(&tags)), "app.m,a=1,b=2");
    }
}
