//! Provided methods and `Arc` forwarding on the contract, checked with a spy
//! backend that records what reaches it.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use statline_core::{MetricEvent, Result, SampleRate, StatsLogger, Tags, Timer};

#[derive(Default)]
struct Spy {
    events: Arc<Mutex<Vec<MetricEvent>>>,
}

impl Spy {
    fn events(&self) -> Vec<MetricEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl StatsLogger for Spy {
    fn incr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        self.events.lock().unwrap().push(MetricEvent::Count {
            name: name.into(),
            amount,
            rate,
            tags: tags.cloned(),
        });
    }

    fn decr(&self, name: &str, amount: i64, rate: SampleRate, tags: Option<&Tags>) {
        self.events.lock().unwrap().push(MetricEvent::Decrement {
            name: name.into(),
            amount,
            rate,
            tags: tags.cloned(),
        });
    }

    fn gauge(&self, name: &str, value: f64, rate: SampleRate, delta: bool, tags: Option<&Tags>) {
        self.events.lock().unwrap().push(MetricEvent::Gauge {
            name: name.into(),
            value,
            rate,
            delta,
            tags: tags.cloned(),
        });
    }

    fn timing(&self, name: &str, duration: Option<Duration>, tags: Option<&Tags>) {
        if duration.is_none() {
            return;
        }
        self.events.lock().unwrap().push(MetricEvent::Timing {
            name: name.into(),
            duration,
            tags: tags.cloned(),
        });
    }

    fn timer(&self, name: &str, tags: Option<&Tags>) -> Timer {
        let events = Arc::clone(&self.events);
        let name = name.to_string();
        let tags = tags.cloned();
        Timer::with_commit(move |d| {
            events.lock().unwrap().push(MetricEvent::Timing {
                name,
                duration: Some(d),
                tags,
            });
        })
    }

    fn get_name(&self, name: &str, tags: Option<&Tags>) -> Result<String> {
        Ok(match tags {
            Some(t) if !t.is_empty() => format!("{name},{t}"),
            _ => name.to_string(),
        })
    }
}

#[test]
fn provided_methods_use_defaults() {
    let spy = Spy::default();
    spy.incr_one("a");
    spy.decr_one("b");
    spy.set_gauge("c", 2.5);

    let events = spy.events();
    assert_eq!(
        events,
        vec![
            MetricEvent::Count { name: "a".into(), amount: 1, rate: SampleRate::ALWAYS, tags: None },
            MetricEvent::Decrement { name: "b".into(), amount: 1, rate: SampleRate::ALWAYS, tags: None },
            MetricEvent::Gauge {
                name: "c".into(),
                value: 2.5,
                rate: SampleRate::ALWAYS,
                delta: false,
                tags: None
            },
        ]
    );
}

#[test]
fn arc_forwards_to_inner() {
    let spy = Arc::new(Spy::default());
    let as_dyn: Arc<dyn StatsLogger> = spy.clone();
    as_dyn.incr("x", 4, SampleRate::new(0.5), None);
    as_dyn.timing("t", None, None);
    assert_eq!(spy.events().len(), 1);
    assert_eq!(spy.events()[0].counter_delta(), Some(4));
}

#[test]
fn get_name_is_pure() {
    let spy = Spy::default();
    let tags = Tags::from_pairs(&[("b", "2"), ("a", "1")]);
    let first = spy.get_name("m", Some(&tags)).unwrap();
    let second = spy.get_name("m", Some(&tags)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "m,a=1,b=2");
    assert!(spy.events().is_empty());
}

#[test]
fn started_timer_reports_once() {
    let spy = Spy::default();
    let mut t = spy.timer("t", None);
    assert!(spy.events().is_empty());
    t.start();
    let measured = t.stop().unwrap();
    drop(t);
    let events = spy.events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        MetricEvent::Timing { duration: Some(d), .. } => assert_eq!(*d, measured),
        other => panic!("unexpected event: {other:?}"),
    }
}
