//! List, popup and highlight projections of store state.
//!
//! # Responsibility
//! - Define the `ViewProjector` seam every concrete UI toolkit implements.
//! - Derive toolkit-neutral presentation rows (`ListEntry`, `PopupContent`).
//!
//! # Invariants
//! - `render_list` fully replaces prior list state; there is no diffing.
//! - At most one list entry is active after `apply_highlight` or
//!   `restore_highlight`.
//! - Only `apply_highlight` scrolls; restoring after a rebuild keeps the
//!   user's scroll position.
//! - Showing a popup replaces whatever popup content was shown before.

use crate::map::MapSurface;
use crate::model::landmark::{ImagePayload, Landmark, LandmarkId};
use serde::Serialize;

pub mod memory;

/// Number of decimal digits used for list coordinates.
pub const DEFAULT_COORDINATE_PRECISION: usize = 5;

/// Toolkit-facing projection of landmark state.
pub trait ViewProjector {
    /// Rebuilds the sidebar list from `records`, in order.
    fn render_list(&mut self, records: &[&Landmark]);

    /// Shows the popup for `landmark`, anchored to its marker.
    fn show_popup(&mut self, map: &mut dyn MapSurface, landmark: &Landmark);

    fn close_popup(&mut self, map: &mut dyn MapSurface);

    /// Marks only the entry for `id` as active and scrolls it into view.
    /// `None` or an unknown id clears every entry.
    fn apply_highlight(&mut self, id: Option<LandmarkId>);

    /// Marks only the entry for `id` as active without scrolling.
    /// Called after a list rebuild to carry the current selection over.
    fn restore_highlight(&mut self, id: Option<LandmarkId>);
}

/// One sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: LandmarkId,
    pub title: String,
    pub description: String,
    /// `lat, lng` with fixed precision.
    pub coordinates: String,
    /// State of the row's visibility toggle.
    pub visible: bool,
    pub active: bool,
}

impl ListEntry {
    pub fn from_landmark(landmark: &Landmark, precision: usize) -> Self {
        Self {
            id: landmark.id(),
            title: landmark.title().to_string(),
            description: landmark.description().to_string(),
            coordinates: landmark.position().format(precision),
            visible: landmark.is_visible(),
            active: false,
        }
    }
}

/// Content block shown in a marker popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub title: String,
    pub description: String,
    pub image: Option<ImagePayload>,
}

impl PopupContent {
    pub fn for_landmark(landmark: &Landmark) -> Self {
        Self {
            title: landmark.title().to_string(),
            description: landmark.description().to_string(),
            image: landmark.image().cloned(),
        }
    }
}

/// Builds list rows for `records` with no entry active.
pub fn list_entries(records: &[&Landmark], precision: usize) -> Vec<ListEntry> {
    records
        .iter()
        .map(|landmark| ListEntry::from_landmark(landmark, precision))
        .collect()
}
