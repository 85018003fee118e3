//! Serial composite behavior nodes.
//!
//! Serial composites run one child at a time and remember where they stopped.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selection`] (OR logic).
//!
//! # Resuming
//!
//! Each composite keeps a cursor into its children. A child that reports
//! `Running` is resumed directly on the next tick; children before it are not
//! re-evaluated.
//!
//! The cursor is **not** rewound when the composite reaches `Success` or
//! `Failure`. Ticking a finished composite again without [`Behavior::reset`]
//! resumes from the stale cursor: a finished `Sequence` vacuously reports
//! `Success`, a finished `Selection` reports `Failure`. Wrap the composite in
//! a looping decorator (`Repeat`, `Until`, `While`) or reset it yourself before
//! reuse.

use crate::{Behavior, Status};

/// Children plus the index of the child to resume from.
struct Cursor {
    children: Vec<Box<dyn Behavior>>,
    index: usize,
}

impl Cursor {
    fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        Self { children, index: 0 }
    }

    fn reset(&mut self) {
        self.index = 0;
        for child in &mut self.children {
            child.reset();
        }
    }

    /// Runs children from the cursor until one reports something other than
    /// `pass`. Returns `exhausted` if every remaining child passed.
    fn run(&mut self, kind: &'static str, pass: Status, exhausted: Status) -> Status {
        if self.index > 0 && self.index == self.children.len() {
            tracing::debug!(
                kind,
                children = self.children.len(),
                "ticked after completion without reset; cursor is stale"
            );
        }

        while let Some(child) = self.children.get_mut(self.index) {
            let status = child.execute();
            tracing::trace!(kind, index = self.index, %status, "child ticked");

            if status != pass {
                // Running parks the cursor here; the opposite outcome and Unknown short-circuit
                return status;
            }
            self.index += 1;
        }
        exhausted
    }
}

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from the cursor onwards:
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at that child on the next tick
/// - If a child returns `Success`, the sequence **continues** to the next
///   child within the same tick
/// - If a child returns `Failure`, the sequence **stops immediately** and
///   returns `Failure`
/// - If a child returns `Unknown`, the sequence returns `Unknown`
/// - If all children return `Success`, the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. An empty
/// sequence succeeds.
pub struct Sequence {
    cursor: Cursor,
}

impl Sequence {
    /// Creates a new sequence with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            cursor: Cursor::new(children),
        }
    }

    /// Index of the child the next tick starts from.
    pub fn cursor(&self) -> usize {
        self.cursor.index
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.cursor.children.len()
    }

    /// Returns `true` if the sequence has no children.
    pub fn is_empty(&self) -> bool {
        self.cursor.children.is_empty()
    }
}

impl Behavior for Sequence {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn execute(&mut self) -> Status {
        self.cursor.run("sequence", Status::Success, Status::Success)
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// A `Selection` node evaluates its children from the cursor onwards:
/// - If a child returns `Running`, the selection returns `Running` and
///   resumes at that child on the next tick
/// - If a child returns `Success`, the selection **stops immediately** and
///   returns `Success`
/// - If a child returns `Failure`, the selection **continues** to the next
///   child within the same tick
/// - If a child returns `Unknown`, the selection returns `Unknown`
/// - If all children return `Failure`, the selection returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. An empty
/// selection fails.
pub struct Selection {
    cursor: Cursor,
}

impl Selection {
    /// Creates a new selection with the given child behaviors.
    pub fn new(children: Vec<Box<dyn Behavior>>) -> Self {
        Self {
            cursor: Cursor::new(children),
        }
    }

    /// Index of the child the next tick starts from.
    pub fn cursor(&self) -> usize {
        self.cursor.index
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.cursor.children.len()
    }

    /// Returns `true` if the selection has no children.
    pub fn is_empty(&self) -> bool {
        self.cursor.children.is_empty()
    }
}

impl Behavior for Selection {
    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn execute(&mut self) -> Status {
        self.cursor.run("selection", Status::Failure, Status::Failure)
    }
}
