//! statline demo
//!
//! Loads `statline.yaml` (or the path given as first argument), selects a
//! backend, and emits a handful of metrics through it. Run with
//! `RUST_LOG=info` and `backend: tracing` to see them.

use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use statline_backends::{build_stats_logger, config};
use statline_core::{SampleRate, StatsLogger, Tags};

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "statline.yaml".to_string());
    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), error = %e, "config load failed");
            std::process::exit(1);
        }
    };

    let stats = build_stats_logger(&cfg.metrics, None);
    tracing::info!(%path, backend = ?cfg.metrics.backend, "statline-demo starting");

    let tags = Tags::new().with("job", "demo");
    stats.incr("demo.started", 1, SampleRate::ALWAYS, Some(&tags));
    stats.gauge("demo.queue_depth", 3.0, SampleRate::ALWAYS, false, None);
    stats.gauge("demo.queue_depth", -1.0, SampleRate::ALWAYS, true, None);

    let mut t = stats.timer("demo.work", Some(&tags));
    t.start();
    std::thread::sleep(Duration::from_millis(20));
    t.stop();

    stats.timing("demo.sleep", Some(Duration::from_millis(20)), None);
    stats.decr("demo.pending", 1, SampleRate::new(0.5), None);

    match stats.get_name("demo.work", Some(&tags)) {
        Ok(name) => tracing::info!(%name, "resolved metric name"),
        Err(e) => tracing::info!(error = %e, "backend does not resolve names"),
    }
}
