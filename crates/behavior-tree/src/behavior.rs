//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. A node is ticked with
//! [`Behavior::execute`] once per control cycle and cleared back to its
//! constructed state with [`Behavior::reset`].

use crate::Status;

/// A behavior tree node that can be ticked and reset.
///
/// Nodes carry their own progress (cursors, completed children), so both
/// operations take `&mut self`. A tree ticked from several threads needs one
/// exclusive lock around the root; the engine adds no synchronization.
pub trait Behavior {
    /// Clear all progress held by this node and every descendant.
    ///
    /// Idempotent and infallible.
    fn reset(&mut self);

    /// Tick this node once and report its outcome.
    ///
    /// # Returns
    ///
    /// - `Status::Running` if the node needs further ticks
    /// - `Status::Success` if the node succeeded
    /// - `Status::Failure` if the node failed
    /// - `Status::Unknown` if an anomaly occurred somewhere below
    fn execute(&mut self) -> Status;
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior>` to also implement `Behavior`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl Behavior for Box<dyn Behavior> {
    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn execute(&mut self) -> Status {
        (**self).execute()
    }
}
