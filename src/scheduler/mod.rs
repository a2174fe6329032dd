//! Cancelable delayed-task scheduling.
//!
//! Tasks are one-shot closures that run once after a delay. Keyed tasks can
//! be cancelled by their `SchedulerKey` until they fire. The scheduler knows
//! nothing about sessions or protocol semantics beyond the key it is given.
//!
//! # Architecture
//!
//! - `CancelableScheduler` trait defines the interface
//! - `TokioScheduler` runs every task on its own tokio task
//! - `SchedulerKey` identifies a cancelable task

/// Scheduler key kinds.
pub mod enums;

/// Scheduler key and scheduler implementation structures.
pub mod structs;

/// Implementation blocks for scheduler types.
pub mod impls;

/// Scheduler trait definitions.
pub mod traits;

/// Boxed one-shot task.
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;
