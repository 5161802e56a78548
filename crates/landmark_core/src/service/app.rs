//! Explicit application context.
//!
//! # Responsibility
//! - Own the store, selection, map surface and view projector together.
//! - Expose the use-case operations the router and hosts call.
//!
//! # Invariants
//! - No ambient singletons: every host constructs its own context.
//! - Core state only changes through the operations below.

use crate::config::AppConfig;
use crate::error::LandmarkError;
use crate::io::geolocation::{resolve_center, GeolocationSource};
use crate::map::MapSurface;
use crate::model::landmark::{CreateLandmark, LandmarkId, Position};
use crate::service::selection::SelectionController;
use crate::store::landmark_store::LandmarkStore;
use crate::view::ViewProjector;
use log::info;

pub struct LandmarkApp<M: MapSurface, V: ViewProjector> {
    config: AppConfig,
    store: LandmarkStore,
    selection: SelectionController,
    map: M,
    projector: V,
}

impl<M: MapSurface, V: ViewProjector> LandmarkApp<M, V> {
    pub fn new(config: AppConfig, map: M, projector: V) -> Self {
        Self {
            config,
            store: LandmarkStore::new(),
            selection: SelectionController::new(),
            map,
            projector,
        }
    }

    /// Centers the map on the device position, or on the configured default
    /// when geolocation fails, and renders the (empty) list.
    pub async fn start<G: GeolocationSource>(&mut self, geolocation: &G) -> Position {
        let center = resolve_center(geolocation, self.config.default_center).await;
        self.map.pan_to(center);
        self.refresh_list();
        info!("event=app_start module=app status=ok zoom={}", self.config.default_zoom);
        center
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &LandmarkStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn projector(&self) -> &V {
        &self.projector
    }

    pub fn selected(&self) -> Option<LandmarkId> {
        self.selection.selected()
    }

    /// Creates a landmark and rebuilds the list.
    ///
    /// # Errors
    /// - `LandmarkError::Validation` with no state change.
    pub fn create(&mut self, request: CreateLandmark) -> Result<LandmarkId, LandmarkError> {
        let id = self.store.create(&mut self.map, request)?.id();
        self.refresh_list();
        Ok(id)
    }

    /// Deletes a landmark, clearing the selection first when it pointed at it.
    ///
    /// Returns `(deleted, was_selected)`.
    pub fn delete(&mut self, id: LandmarkId) -> (bool, bool) {
        let was_selected = self.store.contains(id)
            && self
                .selection
                .release(&mut self.map, &mut self.projector, id);
        let deleted = self.store.delete(&mut self.map, id);
        if deleted {
            self.refresh_list();
        }
        (deleted, was_selected)
    }

    /// Returns whether the landmark exists.
    pub fn set_visible(&mut self, id: LandmarkId, visible: bool) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.store.set_visible(&mut self.map, id, visible);
        self.refresh_list();
        true
    }

    pub fn select(&mut self, id: LandmarkId) -> bool {
        self.selection
            .select(&self.store, &mut self.map, &mut self.projector, id)
    }

    /// Pans to the landmark, then selects it.
    pub fn focus(&mut self, id: LandmarkId) -> bool {
        let Some(position) = self.store.get(id).map(|landmark| landmark.position()) else {
            return false;
        };
        self.map.pan_to(position);
        self.select(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear(&mut self.map, &mut self.projector);
    }

    /// Rebuilds the list and restores the current highlight.
    pub fn refresh_list(&mut self) {
        self.projector.render_list(&self.store.list());
        self.selection.reapply(&mut self.projector);
    }
}
