//! Canonical landmark storage.
//!
//! # Responsibility
//! - Own the ordered landmark collection and the id sequence.
//! - Keep marker map-membership consistent with each record's `visible` flag.
//!
//! # Invariants
//! - Ids come from a monotonic counter and are never reused.
//! - Iteration order is insertion order; removals do not reorder survivors.
//! - Unknown ids are absorbed as no-ops, never errors.

pub mod landmark_store;
