//! Backend selection.
//!
//! Runs once at startup. Call sites receive the returned `Arc` and never learn
//! which backend is behind it.

use std::sync::Arc;

use statline_core::{NoStatsLogger, StatsLogger};

use crate::backends::{DogStatsdClient, SafeDogStatsdLogger, TracingStatsLogger};
use crate::config::{BackendKind, MetricsSection};

/// Build the configured backend. `client` is only consulted for `dogstatsd`;
/// selecting it without one falls back to the no-op backend.
pub fn build_stats_logger(
    cfg: &MetricsSection,
    client: Option<Arc<dyn DogStatsdClient>>,
) -> Arc<dyn StatsLogger> {
    match cfg.backend {
        BackendKind::Noop => NoStatsLogger::arc(),
        BackendKind::Tracing => Arc::new(TracingStatsLogger::new(cfg.prefix.clone())),
        BackendKind::Dogstatsd => match client {
            Some(client) => Arc::new(SafeDogStatsdLogger::from_config(client, cfg)),
            None => {
                tracing::warn!("dogstatsd backend selected without a client; metrics disabled");
                NoStatsLogger::arc()
            }
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_noop() {
        let l = build_stats_logger(&MetricsSection::default(), None);
        assert_eq!(l.get_name("a", None).unwrap_err().code().as_str(), "UNIMPLEMENTED");
    }

    #[test]
    fn tracing_backend_resolves_names() {
        let cfg = MetricsSection {
            backend: BackendKind::Tracing,
            prefix: Some("app".into()),
            ..MetricsSection::default()
        };
        let l = build_stats_logger(&cfg, None);
        assert_eq!(l.get_name("a", None).unwrap(), "app.a");
    }

    #[test]
    fn dogstatsd_without_client_falls_back() {
        let cfg = MetricsSection {
            backend: BackendKind::Dogstatsd,
            ..MetricsSection::default()
        };
        let l = build_stats_logger(&cfg, None);
        assert!(l.get_name("a", None).is_err());
    }
}
