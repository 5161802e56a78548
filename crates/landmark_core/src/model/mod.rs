//! Canonical landmark domain model.
//!
//! # Responsibility
//! - Define the record shared by the list, marker and selection projections.
//! - Keep identity, position and image payload validation next to the types.
//!
//! # Invariants
//! - Every landmark is identified by a `LandmarkId` that is never reused.
//! - A landmark owns exactly one `MarkerHandle` for its whole lifetime.

pub mod landmark;
