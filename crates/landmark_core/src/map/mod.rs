//! Mapping provider contract.
//!
//! # Responsibility
//! - Describe the side-effecting map calls the engine depends on.
//! - Keep marker identity opaque to the engine.
//!
//! # Invariants
//! - `create_marker` returns a detached handle; callers attach explicitly.
//! - `attach`/`detach` are idempotent for a given handle.
//! - Opening a popup replaces any popup that is already open.

use crate::model::landmark::{MarkerHandle, Position};
use crate::view::PopupContent;

pub mod memory;

/// Side-effecting map surface owned by an external mapping provider.
pub trait MapSurface {
    fn create_marker(&mut self, position: Position) -> MarkerHandle;
    fn attach(&mut self, marker: &MarkerHandle);
    fn detach(&mut self, marker: &MarkerHandle);
    fn pan_to(&mut self, position: Position);
    fn open_popup(&mut self, content: PopupContent, anchor: &MarkerHandle);
    fn close_popup(&mut self);
}
