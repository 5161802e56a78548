//! Landmark domain model.
//!
//! # Responsibility
//! - Define the canonical landmark record and its value types.
//! - Validate positions and image payloads at construction time.
//!
//! # Invariants
//! - `LandmarkId` values are assigned by the store only, starting at 1.
//! - `Position` coordinates are always finite.
//! - `ImagePayload` always holds a well-formed base64 image data URL.
//! - The marker handle is attached to the map iff `visible` is true; the store
//!   is the only writer of `visible`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

static IMAGE_DATA_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^data:image/([a-z0-9.+-]+);base64,([A-Za-z0-9+/]*={0,2})$")
        .expect("valid image data url regex")
});

/// Stable process-lifetime identifier of one landmark.
///
/// Rendered and parsed as its decimal form (`"1"`, `"2"`, ...), which is also
/// the wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LandmarkId(u64);

impl LandmarkId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for LandmarkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0.to_string())
    }
}

impl FromStr for LandmarkId {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse::<u64>().map(Self)
    }
}

impl Serialize for LandmarkId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LandmarkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| de::Error::custom(format!("invalid landmark id `{raw}`")))
    }
}

/// Coordinate axis, used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Latitude/longitude pair with finite components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
struct RawPosition {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawPosition> for Position {
    type Error = ValidationError;

    fn try_from(value: RawPosition) -> Result<Self, Self::Error> {
        Position::new(value.lat, value.lng)
    }
}

impl Position {
    /// Builds a position, rejecting NaN and infinite components.
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate {
                axis: Axis::Latitude,
                value: lat,
            });
        }
        if !lng.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate {
                axis: Axis::Longitude,
                value: lng,
            });
        }
        Ok(Self { lat, lng })
    }

    /// Formats both components with a fixed number of decimal digits.
    pub fn format(&self, precision: usize) -> String {
        format!("{:.*}, {:.*}", precision, self.lat, precision, self.lng)
    }
}

/// Displayable image as a base64 `data:image/...` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Wraps an existing data URL after checking its shape.
    pub fn from_data_url(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !IMAGE_DATA_URL_RE.is_match(&value) {
            return Err(ValidationError::InvalidImagePayload);
        }
        Ok(Self(value))
    }

    /// Builds a data URL from a mime subtype (`png`, `jpeg`, ...) and base64 text.
    pub fn from_base64(subtype: &str, encoded: &str) -> Result<Self, ValidationError> {
        Self::from_data_url(format!("data:image/{subtype};base64,{encoded}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the mime type, e.g. `image/png`.
    pub fn mime_type(&self) -> &str {
        let end = self.0.find(';').unwrap_or(self.0.len());
        &self.0["data:".len()..end]
    }
}

impl TryFrom<String> for ImagePayload {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_data_url(value)
    }
}

impl From<ImagePayload> for String {
    fn from(value: ImagePayload) -> Self {
        value.0
    }
}

/// Opaque map-side handle for one landmark marker.
///
/// Minted by the mapping provider. Deliberately not `Clone`: the owning
/// landmark is the only holder, and other components only borrow it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct MarkerHandle(u64);

impl MarkerHandle {
    /// Wraps a provider-specific raw marker key.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Validated creation request for one landmark.
///
/// Only the form layer and tests build this; every async input (image read)
/// must already be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateLandmark {
    pub title: String,
    pub description: String,
    pub position: Position,
    pub image: Option<ImagePayload>,
}

impl CreateLandmark {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        position: Position,
        image: Option<ImagePayload>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            position,
            image,
        }
    }

    /// Re-checks creation preconditions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Position::new(self.position.lat, self.position.lng)?;
        Ok(())
    }
}

/// Canonical landmark record.
#[derive(Debug, PartialEq, Serialize)]
pub struct Landmark {
    id: LandmarkId,
    title: String,
    description: String,
    position: Position,
    image: Option<ImagePayload>,
    visible: bool,
    #[serde(skip)]
    marker: MarkerHandle,
}

impl Landmark {
    /// Builds a fully resolved record. Only the store calls this.
    pub(crate) fn new(id: LandmarkId, request: CreateLandmark, marker: MarkerHandle) -> Self {
        Self {
            id,
            title: request.title,
            description: request.description,
            position: request.position,
            image: request.image,
            visible: true,
            marker,
        }
    }

    pub fn id(&self) -> LandmarkId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn marker(&self) -> &MarkerHandle {
        &self.marker
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn into_marker(self) -> MarkerHandle {
        self.marker
    }
}

/// Rejected creation input. Nothing is mutated when this is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyDescription,
    /// Coordinate text could not be parsed as a number.
    InvalidCoordinate { axis: Axis, input: String },
    NonFiniteCoordinate { axis: Axis, value: f64 },
    InvalidImagePayload,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::InvalidCoordinate { axis, input } => {
                write!(f, "{axis} `{input}` is not a number")
            }
            Self::NonFiniteCoordinate { axis, value } => {
                write!(f, "{axis} must be finite, got {value}")
            }
            Self::InvalidImagePayload => write!(f, "image payload is not a base64 image data url"),
        }
    }
}

impl Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::{Axis, CreateLandmark, ImagePayload, LandmarkId, Position, ValidationError};

    #[test]
    fn landmark_id_display_honors_width_and_alignment() {
        let id: LandmarkId = "7".parse().unwrap();
        assert_eq!(format!("{id:>3}"), "  7");
        assert_eq!(format!("{id:<3}|"), "7  |");
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn position_rejects_nan_and_infinity() {
        assert!(matches!(
            Position::new(f64::NAN, 1.0),
            Err(ValidationError::NonFiniteCoordinate {
                axis: Axis::Latitude,
                ..
            })
        ));
        assert!(matches!(
            Position::new(1.0, f64::INFINITY),
            Err(ValidationError::NonFiniteCoordinate {
                axis: Axis::Longitude,
                ..
            })
        ));
    }

    #[test]
    fn position_formats_with_fixed_precision() {
        let position = Position::new(43.26, -79.92).unwrap();
        assert_eq!(position.format(5), "43.26000, -79.92000");
    }

    #[test]
    fn landmark_id_round_trips_through_text() {
        let id: LandmarkId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<LandmarkId>().is_err());
    }

    #[test]
    fn image_payload_requires_image_data_url() {
        let payload = ImagePayload::from_base64("png", "iVBORw0KGgo=").unwrap();
        assert_eq!(payload.mime_type(), "image/png");
        assert_eq!(
            ImagePayload::from_data_url("data:text/plain;base64,aGk=").unwrap_err(),
            ValidationError::InvalidImagePayload
        );
        assert!(ImagePayload::from_data_url("https://example.com/a.png").is_err());
    }

    #[test]
    fn create_request_rejects_blank_text() {
        let position = Position::new(0.0, 0.0).unwrap();
        let request = CreateLandmark::new("  ", "desc", position, None);
        assert_eq!(request.validate().unwrap_err(), ValidationError::EmptyTitle);
        let request = CreateLandmark::new("title", "", position, None);
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::EmptyDescription
        );
    }
}
