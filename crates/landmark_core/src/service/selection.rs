//! Single active landmark tracking.
//!
//! # Invariants
//! - At most one landmark is selected.
//! - The selected id always refers to a record present in the store; deleting
//!   it clears the selection together with its popup and highlight.

use crate::map::MapSurface;
use crate::model::landmark::LandmarkId;
use crate::store::landmark_store::LandmarkStore;
use crate::view::ViewProjector;
use log::debug;

#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<LandmarkId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<LandmarkId> {
        self.selected
    }

    pub fn is_selected(&self, id: LandmarkId) -> bool {
        self.selected == Some(id)
    }

    /// Selects `id`, showing its popup and highlighting its list entry.
    ///
    /// Returns `false` (and changes nothing) for unknown ids.
    pub fn select<V: ViewProjector + ?Sized>(
        &mut self,
        store: &LandmarkStore,
        map: &mut dyn MapSurface,
        projector: &mut V,
        id: LandmarkId,
    ) -> bool {
        let Some(landmark) = store.get(id) else {
            debug!("event=landmark_select module=selection status=skipped id={id} reason=not_found");
            return false;
        };

        self.selected = Some(id);
        projector.show_popup(map, landmark);
        projector.apply_highlight(Some(id));
        debug!("event=landmark_select module=selection status=ok id={id}");
        true
    }

    /// Drops the selection, its popup and every highlight.
    pub fn clear<V: ViewProjector + ?Sized>(&mut self, map: &mut dyn MapSurface, projector: &mut V) {
        if self.selected.take().is_some() {
            projector.close_popup(map);
        }
        projector.apply_highlight(None);
    }

    /// Clears the selection when `id` is the selected landmark.
    ///
    /// Returns whether `id` was selected.
    pub fn release<V: ViewProjector + ?Sized>(
        &mut self,
        map: &mut dyn MapSurface,
        projector: &mut V,
        id: LandmarkId,
    ) -> bool {
        if !self.is_selected(id) {
            return false;
        }
        self.clear(map, projector);
        true
    }

    /// Restores the highlight after a list rebuild without scrolling.
    pub fn reapply<V: ViewProjector + ?Sized>(&self, projector: &mut V) {
        projector.restore_highlight(self.selected);
    }
}
