//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and remap its result. The remapping
//! is a closed set of transforms described by [`DecoratorKind`]; the only side
//! effect a transform may request is resetting the child, which is how the
//! looping decorators (`Repeat`, `Until`, `While`) restart their subtree.
//!
//! `Unknown` passes through every decorator untouched, so anomalies always
//! reach the root instead of being swallowed by a loop.

use crate::error::BuildError;
use crate::{Behavior, Status};

/// The transform applied by a [`Decorator`].
///
/// | Kind | Running | Success | Failure | Unknown |
/// |---|---|---|---|---|
/// | `Invert` | Running | Failure | Success | Unknown |
/// | `Repeat` | Running | reset, Running | reset, Running | Unknown |
/// | `ForceSuccess` | Running | Success | Success | Unknown |
/// | `ForceFailure` | Running | Failure | Failure | Unknown |
/// | `Until` | Running | Success | reset, Running | Unknown |
/// | `While` | Running | reset, Running | Failure | Unknown |
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DecoratorKind {
    /// Swaps `Success` and `Failure` (logical NOT).
    Invert,
    /// Restarts the child after every terminal outcome; never finishes.
    Repeat,
    /// Reports `Success` for any terminal outcome.
    ForceSuccess,
    /// Reports `Failure` for any terminal outcome.
    ForceFailure,
    /// Retries the child until it succeeds.
    Until,
    /// Reruns the child for as long as it succeeds.
    While,
}

/// Outcome of applying a [`DecoratorKind`] to a child status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    /// Status reported by the decorator.
    pub status: Status,
    /// Whether the child must be reset before the next tick.
    pub reset_child: bool,
}

impl Transform {
    const fn report(status: Status) -> Self {
        Self {
            status,
            reset_child: false,
        }
    }

    const fn restart() -> Self {
        Self {
            status: Status::Running,
            reset_child: true,
        }
    }
}

impl DecoratorKind {
    /// Maps a child status to the decorator's status.
    ///
    /// Pure: the caller performs the reset when `reset_child` is set.
    pub const fn transform(self, status: Status) -> Transform {
        use DecoratorKind::*;

        match (self, status) {
            (_, Status::Unknown) => Transform::report(Status::Unknown),
            (_, Status::Running) => Transform::report(Status::Running),
            (Invert, Status::Success) => Transform::report(Status::Failure),
            (Invert, Status::Failure) => Transform::report(Status::Success),
            (Repeat, _) => Transform::restart(),
            (ForceSuccess, _) => Transform::report(Status::Success),
            (ForceFailure, _) => Transform::report(Status::Failure),
            (Until, Status::Success) => Transform::report(Status::Success),
            (Until, Status::Failure) => Transform::restart(),
            (While, Status::Success) => Transform::restart(),
            (While, Status::Failure) => Transform::report(Status::Failure),
        }
    }
}

/// Wraps one child and remaps its status through a [`DecoratorKind`].
pub struct Decorator {
    kind: DecoratorKind,
    child: Box<dyn Behavior>,
}

impl Decorator {
    /// Creates a new decorator of the given kind around `child`.
    pub fn new(kind: DecoratorKind, child: Box<dyn Behavior>) -> Self {
        Self { kind, child }
    }

    /// Creates a decorator from a child list, which must hold exactly one node.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::DecoratorArity`] for zero or several children.
    pub fn from_children(
        kind: DecoratorKind,
        children: Vec<Box<dyn Behavior>>,
    ) -> Result<Self, BuildError> {
        let found = children.len();
        let mut children = children.into_iter();

        match (children.next(), children.next()) {
            (Some(child), None) => Ok(Self::new(kind, child)),
            _ => Err(BuildError::DecoratorArity { kind, found }),
        }
    }

    /// The transform this decorator applies.
    pub fn kind(&self) -> DecoratorKind {
        self.kind
    }
}

impl Behavior for Decorator {
    fn reset(&mut self) {
        self.child.reset();
    }

    fn execute(&mut self) -> Status {
        let Transform {
            status,
            reset_child,
        } = self.kind.transform(self.child.execute());

        if reset_child {
            tracing::trace!(kind = %self.kind, "resetting child");
            self.child.reset();
        }
        status
    }
}
