//! In-process map surface.
//!
//! Tracks marker positions, attachment, map center and the open popup so the
//! engine can run headless (tests, CLI, FFI snapshot pulls).

use crate::map::MapSurface;
use crate::model::landmark::{MarkerHandle, Position};
use crate::view::PopupContent;
use std::collections::{BTreeMap, BTreeSet};

/// Popup currently shown on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPopup {
    pub anchor: u64,
    pub content: PopupContent,
}

#[derive(Debug, Default)]
pub struct MemoryMap {
    next_marker: u64,
    positions: BTreeMap<u64, Position>,
    attached: BTreeSet<u64>,
    center: Option<Position>,
    popup: Option<OpenPopup>,
}

impl MemoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self, marker: &MarkerHandle) -> bool {
        self.attached.contains(&marker.raw())
    }

    /// Number of markers currently shown on the map.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn marker_position(&self, marker: &MarkerHandle) -> Option<Position> {
        self.positions.get(&marker.raw()).copied()
    }

    pub fn center(&self) -> Option<Position> {
        self.center
    }

    pub fn popup(&self) -> Option<&OpenPopup> {
        self.popup.as_ref()
    }
}

impl MapSurface for MemoryMap {
    fn create_marker(&mut self, position: Position) -> MarkerHandle {
        self.next_marker += 1;
        self.positions.insert(self.next_marker, position);
        MarkerHandle::new(self.next_marker)
    }

    fn attach(&mut self, marker: &MarkerHandle) {
        self.attached.insert(marker.raw());
    }

    fn detach(&mut self, marker: &MarkerHandle) {
        self.attached.remove(&marker.raw());
    }

    fn pan_to(&mut self, position: Position) {
        self.center = Some(position);
    }

    fn open_popup(&mut self, content: PopupContent, anchor: &MarkerHandle) {
        self.popup = Some(OpenPopup {
            anchor: anchor.raw(),
            content,
        });
    }

    fn close_popup(&mut self) {
        self.popup = None;
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryMap;
    use crate::map::MapSurface;
    use crate::model::landmark::Position;
    use crate::view::PopupContent;

    #[test]
    fn attach_and_detach_are_idempotent() {
        let mut map = MemoryMap::new();
        let marker = map.create_marker(Position::new(1.0, 2.0).unwrap());
        assert!(!map.is_attached(&marker));

        map.attach(&marker);
        map.attach(&marker);
        assert_eq!(map.attached_count(), 1);

        map.detach(&marker);
        map.detach(&marker);
        assert!(!map.is_attached(&marker));
    }

    #[test]
    fn opening_popup_replaces_previous_one() {
        let mut map = MemoryMap::new();
        let first = map.create_marker(Position::new(1.0, 2.0).unwrap());
        let second = map.create_marker(Position::new(3.0, 4.0).unwrap());
        let content = |title: &str| PopupContent {
            title: title.to_string(),
            description: "d".to_string(),
            image: None,
        };

        map.open_popup(content("first"), &first);
        map.open_popup(content("second"), &second);
        let popup = map.popup().unwrap();
        assert_eq!(popup.anchor, second.raw());
        assert_eq!(popup.content.title, "second");

        map.close_popup();
        assert!(map.popup().is_none());
    }
}
