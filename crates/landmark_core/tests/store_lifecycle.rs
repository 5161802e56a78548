use landmark_core::{
    CreateLandmark, LandmarkId, LandmarkStore, MemoryMap, Position, ValidationError,
};
use std::collections::HashSet;

fn request(title: &str) -> CreateLandmark {
    CreateLandmark::new(
        title,
        "A place with art",
        Position::new(43.26, -79.92).unwrap(),
        None,
    )
}

fn id(raw: &str) -> LandmarkId {
    raw.parse().expect("valid landmark id")
}

#[test]
fn create_museum_scenario() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();

    let landmark = store.create(&mut map, request("Museum")).unwrap();
    assert_eq!(landmark.id().to_string(), "1");
    assert!(landmark.is_visible());
    assert!(landmark.image().is_none());
    assert!(map.is_attached(landmark.marker()));
    assert_eq!(
        map.marker_position(landmark.marker()),
        Some(Position::new(43.26, -79.92).unwrap())
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn ids_stay_unique_across_interleaved_creates_and_deletes() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();
    let mut seen = HashSet::new();

    for round in 0..20 {
        let created = store.create(&mut map, request("x")).unwrap().id();
        assert!(seen.insert(created), "id {created} was reused");
        if round % 3 == 0 {
            assert!(store.delete(&mut map, created));
        }
    }

    assert_eq!(seen.len(), 20);
}

#[test]
fn delete_detaches_marker_and_forgets_record() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();
    let first = store.create(&mut map, request("a")).unwrap().id();
    let marker_raw = store.get(first).unwrap().marker().raw();

    assert!(store.delete(&mut map, first));
    assert!(store.get(first).is_none());
    assert_eq!(map.attached_count(), 0);
    assert!(!map.is_attached(&landmark_core::MarkerHandle::new(marker_raw)));
    assert!(!store.delete(&mut map, first), "second delete is a no-op");
}

#[test]
fn delete_first_of_two_keeps_second() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();
    store.create(&mut map, request("a")).unwrap();
    store.create(&mut map, request("b")).unwrap();

    assert!(store.delete(&mut map, id("1")));
    let ids: Vec<String> = store.list().iter().map(|l| l.id().to_string()).collect();
    assert_eq!(ids, vec!["2"]);
}

#[test]
fn list_keeps_insertion_order_of_survivors() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();
    for title in ["a", "b", "c", "d", "e"] {
        store.create(&mut map, request(title)).unwrap();
    }

    store.delete(&mut map, id("2"));
    store.delete(&mut map, id("4"));

    let titles: Vec<&str> = store.list().iter().map(|l| l.title()).collect();
    assert_eq!(titles, vec!["a", "c", "e"]);
    assert_eq!(store.len(), 5 - 2);
}

#[test]
fn visibility_toggles_marker_membership() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();
    let created = store.create(&mut map, request("a")).unwrap().id();

    store.set_visible(&mut map, created, false);
    let landmark = store.get(created).unwrap();
    assert!(!landmark.is_visible());
    assert!(!map.is_attached(landmark.marker()));
    assert_eq!(store.len(), 1, "hidden landmarks stay in the store");

    store.set_visible(&mut map, created, true);
    let landmark = store.get(created).unwrap();
    assert!(landmark.is_visible());
    assert!(map.is_attached(landmark.marker()));
}

#[test]
fn empty_title_is_rejected_and_store_stays_empty() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();

    let err = store.create(&mut map, request("")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyTitle);
    assert!(store.is_empty());
    assert_eq!(map.attached_count(), 0);
}
