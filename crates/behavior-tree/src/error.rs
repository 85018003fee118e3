//! Construction errors.
//!
//! Ticking never fails: runtime anomalies travel as [`Status::Unknown`].
//! Errors here only describe trees that could not be assembled.
//!
//! [`Status::Unknown`]: crate::Status::Unknown

use crate::DecoratorKind;

/// Errors surfaced while assembling a behavior tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// A decorator was given something other than a single child.
    #[error("{kind} decorator requires exactly one child, found {found}")]
    DecoratorArity { kind: DecoratorKind, found: usize },
}
