//! Coordination services over the store and projections.
//!
//! # Responsibility
//! - Track the single active landmark across input sources.
//! - Own the explicitly constructed application context.
//! - Route UI/map events to store and selection operations.
//!
//! # Invariants
//! - Views never mutate the store except through routed operations.
//! - Every list rebuild is followed by re-applying the current selection.

pub mod app;
pub mod router;
pub mod selection;
