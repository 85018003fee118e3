//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose
//! `Box::new(Sequence::new(vec![...]))`, you can use shorter functions like
//! `sequence(vec![...])`.
//!
//! ```
//! use behavior_tree::builder::*;
//! use behavior_tree::{Behavior, Status};
//!
//! let mut tree = until(sequence(vec![
//!     conditional(|| true),
//!     action(|| Status::Success),
//! ]));
//! assert_eq!(tree.execute(), Status::Success);
//! ```

use crate::{
    Action, Behavior, Conditional, Decorator, DecoratorKind, Func, PSelection, PSequence,
    Selection, Sequence, Status,
};

/// Creates an action leaf.
///
/// Shorthand for `Box::new(Action::new(run))`.
#[inline]
pub fn action<F>(run: F) -> Box<dyn Behavior>
where
    F: FnMut() -> Status + 'static,
{
    Box::new(Action::new(run))
}

/// Creates a conditional leaf.
///
/// Shorthand for `Box::new(Conditional::new(predicate))`.
#[inline]
pub fn conditional<F>(predicate: F) -> Box<dyn Behavior>
where
    F: FnMut() -> bool + 'static,
{
    Box::new(Conditional::new(predicate))
}

/// Creates a leaf that runs `run` and succeeds.
///
/// Shorthand for `Box::new(Func::new(run))`.
#[inline]
pub fn func<F>(run: F) -> Box<dyn Behavior>
where
    F: FnMut() + 'static,
{
    Box::new(Func::new(run))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence(children: Vec<Box<dyn Behavior>>) -> Box<dyn Behavior> {
    Box::new(Sequence::new(children))
}

/// Creates a selection node.
///
/// Shorthand for `Box::new(Selection::new(children))`.
#[inline]
pub fn selection(children: Vec<Box<dyn Behavior>>) -> Box<dyn Behavior> {
    Box::new(Selection::new(children))
}

/// Creates a parallel sequence node.
///
/// Shorthand for `Box::new(PSequence::new(children))`.
#[inline]
pub fn psequence(children: Vec<Box<dyn Behavior>>) -> Box<dyn Behavior> {
    Box::new(PSequence::new(children))
}

/// Creates a parallel selection node.
///
/// Shorthand for `Box::new(PSelection::new(children))`.
#[inline]
pub fn pselection(children: Vec<Box<dyn Behavior>>) -> Box<dyn Behavior> {
    Box::new(PSelection::new(children))
}

/// Wraps `child` in a decorator of the given kind.
#[inline]
pub fn decorate(kind: DecoratorKind, child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    Box::new(Decorator::new(kind, child))
}

/// Creates an inverter node.
#[inline]
pub fn invert(child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    decorate(DecoratorKind::Invert, child)
}

/// Creates a node that reruns `child` forever.
#[inline]
pub fn repeat(child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    decorate(DecoratorKind::Repeat, child)
}

/// Creates a node that reports `Success` for any terminal outcome of `child`.
#[inline]
pub fn force_success(child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    decorate(DecoratorKind::ForceSuccess, child)
}

/// Creates a node that reports `Failure` for any terminal outcome of `child`.
#[inline]
pub fn force_failure(child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    decorate(DecoratorKind::ForceFailure, child)
}

/// Creates a node that retries `child` until it succeeds.
#[inline]
pub fn until(child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    decorate(DecoratorKind::Until, child)
}

/// Creates a node that reruns `child` while it succeeds.
///
/// Named with a trailing underscore since `while` is a keyword.
#[inline]
pub fn while_(child: Box<dyn Behavior>) -> Box<dyn Behavior> {
    decorate(DecoratorKind::While, child)
}
