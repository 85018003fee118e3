//! Parallel composite behavior nodes.
//!
//! Parallel composites tick every unfinished child once per tick, in index
//! order, and remember which children have already settled. "Parallel" is the
//! combination semantics; children still run one after another inside a
//! single [`Behavior::execute`] call.

use crate::{Behavior, Status};

/// Children plus a per-child "settled" flag.
struct Pass {
    children: Vec<Box<dyn Behavior>>,
    completed: Vec<bool>,
}

impl Pass {
    fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        let completed = vec![false; children.len()];
        Self {
            children,
            completed,
        }
    }

    fn reset(&mut self) {
        self.completed.fill(false);
        for child in &mut self.children {
            child.reset();
        }
    }

    fn completed(&self) -> usize {
        self.completed.iter().filter(|done| **done).count()
    }

    /// One pass over unfinished children. `settle` marks a child complete,
    /// any other terminal outcome ends the pass immediately, and `exhausted`
    /// is reported when nothing is running afterwards.
    fn run(&mut self, kind: &'static str, settle: Status, exhausted: Status) -> Status {
        let mut running = false;

        for (index, (child, done)) in self
            .children
            .iter_mut()
            .zip(self.completed.iter_mut())
            .enumerate()
        {
            if *done {
                continue;
            }

            let status = child.execute();
            tracing::trace!(kind, index, %status, "child ticked");

            if status == settle {
                *done = true;
            } else if status.is_running() {
                running = true;
            } else {
                // Opposite terminal outcome or Unknown; remaining children skip this tick
                return status;
            }
        }

        if running { Status::Running } else { exhausted }
    }
}

/// Ticks all unfinished children each tick; succeeds once all have succeeded.
///
/// # Semantics
///
/// During one tick, every child not yet marked complete is executed in order:
/// - `Success` marks the child complete; it is skipped until reset
/// - `Running` keeps the child active and the pass continues
/// - `Failure` returns `Failure` at once; later children are not ticked
/// - `Unknown` returns `Unknown` at once
///
/// After a full pass the node reports `Running` if any child ran, otherwise
/// `Success`. An empty `PSequence` succeeds.
pub struct PSequence {
    pass: Pass,
}

impl PSequence {
    /// Creates a new parallel sequence with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            pass: Pass::new(children),
        }
    }

    /// Number of children that have settled since the last reset.
    pub fn completed(&self) -> usize {
        self.pass.completed()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.pass.children.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.pass.children.is_empty()
    }
}

impl Behavior for PSequence {
    fn reset(&mut self) {
        self.pass.reset();
    }

    fn execute(&mut self) -> Status {
        self.pass
            .run("psequence", Status::Success, Status::Success)
    }
}

/// Ticks all unfinished children each tick; succeeds as soon as one succeeds.
///
/// The dual of [`PSequence`]: `Failure` marks a child complete, `Success`
/// ends the tick with `Success`, and the node fails once every child has
/// failed. An empty `PSelection` fails.
pub struct PSelection {
    pass: Pass,
}

impl PSelection {
    /// Creates a new parallel selection with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            pass: Pass::new(children),
        }
    }

    /// Number of children that have settled since the last reset.
    pub fn completed(&self) -> usize {
        self.pass.completed()
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.pass.children.len()
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.pass.children.is_empty()
    }
}

impl Behavior for PSelection {
    fn reset(&mut self) {
        self.pass.reset();
    }

    fn execute(&mut self) -> Status {
        self.pass
            .run("pselection", Status::Failure, Status::Failure)
    }
}
