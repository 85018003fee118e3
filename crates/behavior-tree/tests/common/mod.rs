//! Shared harness for scenario tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use behavior_tree::{Action, Behavior, Status};

/// Installs a test subscriber once so `RUST_LOG=behavior_tree=trace` shows
/// engine events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A leaf that replays `script` in a loop, one entry per tick.
pub fn recorded(script: &[Status]) -> Box<dyn Behavior> {
    assert!(!script.is_empty(), "recorded script must not be empty");

    let script = script.to_vec();
    let mut tick = 0;
    Box::new(Action::new(move || {
        let status = script[tick % script.len()];
        tick += 1;
        status
    }))
}

/// Like [`recorded`], but `reset` rewinds the script to its first entry.
pub fn scripted(script: &[Status]) -> Box<dyn Behavior> {
    assert!(!script.is_empty(), "scripted leaf must not be empty");

    Box::new(Script {
        script: script.to_vec(),
        tick: 0,
    })
}

struct Script {
    script: Vec<Status>,
    tick: usize,
}

impl Behavior for Script {
    fn reset(&mut self) {
        self.tick = 0;
    }

    fn execute(&mut self) -> Status {
        let status = self.script[self.tick % self.script.len()];
        self.tick += 1;
        status
    }
}

/// Call and reset counters shared with a [`Probe`].
#[derive(Clone, Default)]
pub struct Counters {
    calls: Rc<Cell<u32>>,
    resets: Rc<Cell<u32>>,
}

impl Counters {
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn resets(&self) -> u32 {
        self.resets.get()
    }
}

/// Wraps a node and counts how often it is ticked and reset.
pub struct Probe {
    inner: Box<dyn Behavior>,
    counters: Counters,
}

impl Probe {
    pub fn wrap(inner: Box<dyn Behavior>) -> (Box<dyn Behavior>, Counters) {
        let counters = Counters::default();
        let probe = Probe {
            inner,
            counters: counters.clone(),
        };
        (Box::new(probe), counters)
    }
}

impl Behavior for Probe {
    fn reset(&mut self) {
        self.inner.reset();
        self.counters.resets.set(self.counters.resets.get() + 1);
    }

    fn execute(&mut self) -> Status {
        self.counters.calls.set(self.counters.calls.get() + 1);
        self.inner.execute()
    }
}

/// Ticks `node` `n` times and collects the outcomes.
pub fn tick_n(node: &mut dyn Behavior, n: usize) -> Vec<Status> {
    (0..n).map(|_| node.execute()).collect()
}
