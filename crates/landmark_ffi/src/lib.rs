//! Flutter-facing bindings for the landmark engine.

pub mod api;
