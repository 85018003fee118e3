//! Leaf behavior nodes.
//!
//! Leaves adapt plain closures into nodes. All side effects live in the
//! wrapped closure; the adapters themselves hold no progress, so `reset` is a
//! no-op for each of them.

use crate::{Behavior, Status};

/// Runs a closure and reports its status verbatim.
pub struct Action<F> {
    run: F,
}

impl<F> Action<F>
where
    F: FnMut() -> Status,
{
    /// Creates a new action around the given closure.
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F> Behavior for Action<F>
where
    F: FnMut() -> Status,
{
    fn reset(&mut self) {}

    fn execute(&mut self) -> Status {
        (self.run)()
    }
}

/// Evaluates a predicate: `true` is `Success`, `false` is `Failure`.
pub struct Conditional<F> {
    predicate: F,
}

impl<F> Conditional<F>
where
    F: FnMut() -> bool,
{
    /// Creates a new conditional around the given predicate.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> Behavior for Conditional<F>
where
    F: FnMut() -> bool,
{
    fn reset(&mut self) {}

    fn execute(&mut self) -> Status {
        Status::from((self.predicate)())
    }
}

/// Runs a side-effecting closure and always succeeds.
///
/// Useful for bookkeeping steps inside a sequence, such as recording that a
/// branch was taken.
pub struct Func<F> {
    run: F,
}

impl<F> Func<F>
where
    F: FnMut(),
{
    /// Creates a new func node around the given closure.
    pub fn new(run: F) -> Self {
        Self { run }
    }
}

impl<F> Behavior for Func<F>
where
    F: FnMut(),
{
    fn reset(&mut self) {}

    fn execute(&mut self) -> Status {
        (self.run)();
        Status::Success
    }
}
