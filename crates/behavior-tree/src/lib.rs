//! Tick-driven behavior tree engine.
//!
//! Trees are assembled from leaves, composites, and decorators, then polled
//! once per control cycle by the caller. A tick never blocks: unfinished work
//! is reported as [`Status::Running`] and resumed on the next tick.
//!
//! - **Four outcomes**: `Unknown`, `Running`, `Success`, `Failure`
//! - **Resumable composites**: serial composites remember their cursor,
//!   parallel composites remember which children already settled
//! - **Anomalies surface**: `Unknown` is never masked by any node
//! - **No scheduler**: the caller decides when and how often to tick
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Four-valued tick outcome
//! - Leaf nodes: [`Action`], [`Conditional`], [`Func`]
//! - Serial composites: [`Sequence`], [`Selection`]
//! - Parallel composites: [`PSequence`], [`PSelection`]
//! - Decorators: [`Decorator`] driven by [`DecoratorKind`]
//! - [`builder`]: boxed shorthands for assembling trees

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod parallel;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selection, Sequence};
pub use decorator::{Decorator, DecoratorKind, Transform};
pub use error::BuildError;
pub use leaf::{Action, Conditional, Func};
pub use parallel::{PSelection, PSequence};
pub use status::Status;
