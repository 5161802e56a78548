use landmark_core::{
    CreateLandmark, ImagePayload, LandmarkId, LandmarkStore, MemoryMap, Position, ValidationError,
};

#[test]
fn landmark_serialization_uses_expected_wire_fields() {
    let mut map = MemoryMap::new();
    let mut store = LandmarkStore::new();
    let image = ImagePayload::from_base64("png", "iVBORw0KGgo=").unwrap();
    let landmark = store
        .create(
            &mut map,
            CreateLandmark::new(
                "Museum",
                "A place with art",
                Position::new(43.26, -79.92).unwrap(),
                Some(image),
            ),
        )
        .unwrap();

    let json = serde_json::to_value(landmark).unwrap();
    assert_eq!(json["id"], "1");
    assert_eq!(json["title"], "Museum");
    assert_eq!(json["description"], "A place with art");
    assert_eq!(json["position"]["lat"], 43.26);
    assert_eq!(json["position"]["lng"], -79.92);
    assert_eq!(json["image"], "data:image/png;base64,iVBORw0KGgo=");
    assert_eq!(json["visible"], true);
    assert!(json.get("marker").is_none());
}

#[test]
fn landmark_id_deserializes_from_decimal_string() {
    let id: LandmarkId = serde_json::from_value(serde_json::json!("12")).unwrap();
    assert_eq!(id.get(), 12);

    let err = serde_json::from_value::<LandmarkId>(serde_json::json!("twelve")).unwrap_err();
    assert!(err.to_string().contains("invalid landmark id"));
}

#[test]
fn image_payload_deserialize_rejects_non_image_data() {
    let err =
        serde_json::from_value::<ImagePayload>(serde_json::json!("data:text/html;base64,PGI+"))
            .unwrap_err();
    assert!(
        err.to_string().contains("not a base64 image data url"),
        "unexpected error: {err}"
    );
}

#[test]
fn create_request_revalidates_mutated_position() {
    let mut request = CreateLandmark::new(
        "Museum",
        "A place with art",
        Position::new(1.0, 1.0).unwrap(),
        None,
    );
    request.position.lat = f64::NAN;

    assert!(matches!(
        request.validate(),
        Err(ValidationError::NonFiniteCoordinate { .. })
    ));
}
