//! Asynchronous input collaborators.
//!
//! # Responsibility
//! - Define image-loading and geolocation contracts the engine awaits.
//! - Provide filesystem and fixed-answer implementations.
//!
//! # Invariants
//! - Failures are returned as values; nothing here panics or mutates core state.
//! - Geolocation failures are soft: callers fall back and continue.

pub mod geolocation;
pub mod image;
