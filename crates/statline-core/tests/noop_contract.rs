//! No-op fallback: every call is accepted and leaves no trace, from any
//! number of threads or tasks.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::time::Duration;

use statline_core::{NoStatsLogger, SampleRate, StatsLogger, Tags, TimerState};

fn exercise(l: &dyn StatsLogger, i: i64) {
    let tags = Tags::new().with("worker", i.to_string());
    l.incr("jobs.started", 1, SampleRate::ALWAYS, Some(&tags));
    l.decr("jobs.pending", 1, SampleRate::new(0.5), None);
    l.gauge("pool.open_slots", i as f64, SampleRate::ALWAYS, i % 2 == 0, Some(&tags));
    l.timing("job.duration", Some(Duration::from_micros(i as u64)), None);
    l.timing("job.duration", None, Some(&tags));
    let mut t = l.timer("job.run", Some(&tags));
    t.start();
    if i % 2 == 0 {
        t.stop();
    } else {
        t.cancel();
    }
}

#[test]
fn shared_instance_via_dyn() {
    let l: Arc<dyn StatsLogger> = NoStatsLogger::arc();
    for i in 0..100 {
        exercise(l.as_ref(), i);
    }
    assert!(l.get_name("jobs.started", None).is_err());
}

#[test]
fn fresh_instances_behave_identically() {
    assert_eq!(NoStatsLogger::new(), NoStatsLogger::default());
    exercise(&NoStatsLogger::new(), 1);
    exercise(&NoStatsLogger, 2);
}

#[test]
fn timer_then_cancel_without_start() {
    let mut t = NoStatsLogger.timer("job.run", None);
    t.cancel();
    assert_eq!(t.state(), TimerState::Cancelled);
    assert!(t.duration().is_none());
}

#[test]
fn concurrent_threads() {
    let l = NoStatsLogger::arc();
    let handles: Vec<_> = (0..10)
        .map(|_| {
            let l = Arc::clone(&l);
            std::thread::spawn(move || {
                for i in 0..100 {
                    l.incr("hits", 1, SampleRate::ALWAYS, None);
                    exercise(l.as_ref(), i);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().expect("worker panicked");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_tasks() {
    let l = NoStatsLogger::arc();
    let mut tasks = Vec::new();
    for _ in 0..10 {
        let l = Arc::clone(&l);
        tasks.push(tokio::spawn(async move {
            for _ in 0..100 {
                l.incr_one("hits");
                tokio::task::yield_now().await;
            }
        }));
    }
    for t in tasks {
        t.await.expect("task failed");
    }
}
