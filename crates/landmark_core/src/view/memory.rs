//! Headless `ViewProjector` that keeps projections in memory.
//!
//! Used by the CLI, the FFI session (the UI pulls rows from it) and tests.

use crate::map::MapSurface;
use crate::model::landmark::{Landmark, LandmarkId};
use crate::view::{list_entries, ListEntry, PopupContent, ViewProjector};

#[derive(Debug)]
pub struct MemoryProjector {
    precision: usize,
    entries: Vec<ListEntry>,
    scrolled_to: Option<LandmarkId>,
    popup: Option<(LandmarkId, PopupContent)>,
    render_count: usize,
    scroll_count: usize,
}

impl MemoryProjector {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            entries: Vec::new(),
            scrolled_to: None,
            popup: None,
            render_count: 0,
            scroll_count: 0,
        }
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Ids of entries currently marked active.
    pub fn active_ids(&self) -> Vec<LandmarkId> {
        self.entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.id)
            .collect()
    }

    /// Entry most recently scrolled into view, if it is still listed.
    pub fn scrolled_to(&self) -> Option<LandmarkId> {
        self.scrolled_to
    }

    pub fn popup(&self) -> Option<&(LandmarkId, PopupContent)> {
        self.popup.as_ref()
    }

    /// How many times the list has been rebuilt.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// How many times an entry has been scrolled into view.
    pub fn scroll_count(&self) -> usize {
        self.scroll_count
    }

    fn mark_active(&mut self, id: Option<LandmarkId>) -> bool {
        let mut found = false;
        for entry in &mut self.entries {
            entry.active = Some(entry.id) == id;
            found |= entry.active;
        }
        found
    }

    /// Plain-text rendering of the list, one entry per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let marker = if entry.active { '*' } else { ' ' };
            let hidden = if entry.visible { "" } else { " (hidden)" };
            out.push_str(&format!(
                "[{marker}] {:>3}  {} - {} @ {}{hidden}\n",
                entry.id, entry.title, entry.description, entry.coordinates
            ));
        }
        out
    }
}

impl ViewProjector for MemoryProjector {
    fn render_list(&mut self, records: &[&Landmark]) {
        self.entries = list_entries(records, self.precision);
        if let Some(id) = self.scrolled_to {
            if !records.iter().any(|landmark| landmark.id() == id) {
                self.scrolled_to = None;
            }
        }
        self.render_count += 1;
        if let Some((id, _)) = &self.popup {
            if !records.iter().any(|landmark| landmark.id() == *id) {
                self.popup = None;
            }
        }
    }

    fn show_popup(&mut self, map: &mut dyn MapSurface, landmark: &Landmark) {
        let content = PopupContent::for_landmark(landmark);
        map.open_popup(content.clone(), landmark.marker());
        self.popup = Some((landmark.id(), content));
    }

    fn close_popup(&mut self, map: &mut dyn MapSurface) {
        map.close_popup();
        self.popup = None;
    }

    fn apply_highlight(&mut self, id: Option<LandmarkId>) {
        if self.mark_active(id) {
            self.scrolled_to = id;
            self.scroll_count += 1;
        }
    }

    fn restore_highlight(&mut self, id: Option<LandmarkId>) {
        self.mark_active(id);
    }
}
