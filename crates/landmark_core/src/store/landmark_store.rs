//! In-memory landmark store.
//!
//! # Responsibility
//! - Create, delete, toggle and look up landmarks.
//! - Acquire marker handles at creation and release them at deletion.
//!
//! # Invariants
//! - Creation validates before any mutation (all-or-nothing).
//! - A deleted landmark's marker is detached before the record is dropped.
//! - The store never reads view or selection state.

use crate::map::MapSurface;
use crate::model::landmark::{CreateLandmark, Landmark, LandmarkId, ValidationError};
use indexmap::IndexMap;
use log::{debug, info};

/// Ordered, id-keyed landmark collection.
#[derive(Debug)]
pub struct LandmarkStore {
    records: IndexMap<LandmarkId, Landmark>,
    last_id: u64,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkStore {
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            last_id: 0,
        }
    }

    /// Validates `request`, assigns the next id and attaches a new marker.
    ///
    /// # Errors
    /// - Returns `ValidationError` for blank title/description or a
    ///   non-finite position. The store and map are untouched in that case.
    pub fn create<M: MapSurface + ?Sized>(
        &mut self,
        map: &mut M,
        request: CreateLandmark,
    ) -> Result<&Landmark, ValidationError> {
        request.validate()?;

        self.last_id += 1;
        let id = LandmarkId::from_raw(self.last_id);
        let marker = map.create_marker(request.position);
        map.attach(&marker);

        let landmark = Landmark::new(id, request, marker);
        info!(
            "event=landmark_created module=store status=ok id={} has_image={}",
            id,
            landmark.image().is_some()
        );
        let (index, _) = self.records.insert_full(id, landmark);
        Ok(&self.records[index])
    }

    /// Removes the landmark and detaches its marker.
    ///
    /// Returns `false` for unknown ids.
    pub fn delete<M: MapSurface + ?Sized>(&mut self, map: &mut M, id: LandmarkId) -> bool {
        let Some(landmark) = self.records.shift_remove(&id) else {
            debug!("event=landmark_delete module=store status=skipped id={id} reason=not_found");
            return false;
        };

        let marker = landmark.into_marker();
        map.detach(&marker);
        info!("event=landmark_deleted module=store status=ok id={id}");
        true
    }

    /// Updates visibility and marker map-membership together.
    ///
    /// No-op for unknown ids.
    pub fn set_visible<M: MapSurface + ?Sized>(
        &mut self,
        map: &mut M,
        id: LandmarkId,
        visible: bool,
    ) {
        let Some(landmark) = self.records.get_mut(&id) else {
            debug!("event=landmark_visibility module=store status=skipped id={id} reason=not_found");
            return;
        };

        if visible {
            map.attach(landmark.marker());
        } else {
            map.detach(landmark.marker());
        }
        landmark.set_visible(visible);
        debug!("event=landmark_visibility module=store status=ok id={id} visible={visible}");
    }

    /// Read-only snapshot in insertion order.
    pub fn list(&self) -> Vec<&Landmark> {
        self.records.values().collect()
    }

    pub fn get(&self, id: LandmarkId) -> Option<&Landmark> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: LandmarkId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::LandmarkStore;
    use crate::map::memory::MemoryMap;
    use crate::model::landmark::{CreateLandmark, LandmarkId, Position, ValidationError};

    fn request(title: &str) -> CreateLandmark {
        CreateLandmark::new(
            title,
            "somewhere",
            Position::new(43.26, -79.92).unwrap(),
            None,
        )
    }

    #[test]
    fn ids_are_monotonic_and_not_reused_after_delete() {
        let mut map = MemoryMap::new();
        let mut store = LandmarkStore::new();

        let first = store.create(&mut map, request("a")).unwrap().id();
        let second = store.create(&mut map, request("b")).unwrap().id();
        assert!(store.delete(&mut map, second));
        let third = store.create(&mut map, request("c")).unwrap().id();

        assert_eq!(first.to_string(), "1");
        assert_eq!(second.to_string(), "2");
        assert_eq!(third.to_string(), "3");
    }

    #[test]
    fn rejected_create_does_not_consume_an_id() {
        let mut map = MemoryMap::new();
        let mut store = LandmarkStore::new();

        let err = store.create(&mut map, request("")).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
        assert!(store.is_empty());
        assert_eq!(map.attached_count(), 0);

        let id = store.create(&mut map, request("ok")).unwrap().id();
        assert_eq!(id.get(), 1);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let mut map = MemoryMap::new();
        let mut store = LandmarkStore::new();
        let missing: LandmarkId = "99".parse().unwrap();

        assert!(!store.delete(&mut map, missing));
        store.set_visible(&mut map, missing, false);
        assert!(store.get(missing).is_none());
    }
}
