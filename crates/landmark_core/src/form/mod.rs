//! Landmark creation form.
//!
//! # Responsibility
//! - Hold raw form input and turn it into a validated `CreateLandmark`.
//! - Apply asynchronous field fills (geolocation, image read) with
//!   last-request-wins semantics.
//!
//! # Invariants
//! - Validation never mutates the form or any core state.
//! - A superseded request result is discarded, whatever its outcome.
//! - A failed position lookup leaves the coordinate fields untouched.
//! - A failed image read is returned to the caller and leaves the image unchanged.

pub mod supersession;

use crate::error::LandmarkError;
use crate::io::geolocation::GeolocationError;
use crate::io::image::{ImageLoadError, ImageLoader};
use crate::model::landmark::{Axis, CreateLandmark, ImagePayload, Position, ValidationError};
use log::{debug, info};
use std::path::Path;
use supersession::{FormField, RequestTicket, Supersession};

/// Result of completing an asynchronous field fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    Applied,
    /// A newer request for the same field was started meanwhile.
    Superseded,
    /// The request failed and the field was left as-is.
    Skipped,
}

/// Raw creation form state.
#[derive(Debug)]
pub struct LandmarkForm {
    pub title: String,
    pub description: String,
    pub lat: String,
    pub lng: String,
    image: Option<ImagePayload>,
    position_requests: Supersession,
    image_requests: Supersession,
}

impl Default for LandmarkForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LandmarkForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lat: String::new(),
            lng: String::new(),
            image: None,
            position_requests: Supersession::new(FormField::Position),
            image_requests: Supersession::new(FormField::Image),
        }
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    /// Writes `position` into the coordinate fields.
    pub fn set_position(&mut self, position: Position) {
        self.lat = position.lat.to_string();
        self.lng = position.lng.to_string();
    }

    pub fn begin_position_lookup(&mut self) -> RequestTicket {
        self.position_requests.begin()
    }

    /// Applies a geolocation result if `ticket` is still the newest lookup.
    pub fn complete_position_lookup(
        &mut self,
        ticket: RequestTicket,
        result: Result<Position, GeolocationError>,
    ) -> FieldUpdate {
        if !self.position_requests.is_current(ticket) {
            debug!("event=form_position_fill module=form status=skipped reason=superseded");
            return FieldUpdate::Superseded;
        }
        match result {
            Ok(position) => {
                self.set_position(position);
                FieldUpdate::Applied
            }
            Err(err) => {
                info!("event=form_position_fill module=form status=skipped reason={err}");
                FieldUpdate::Skipped
            }
        }
    }

    pub fn begin_image_read(&mut self) -> RequestTicket {
        self.image_requests.begin()
    }

    /// Applies an image read result if `ticket` is still the newest read.
    ///
    /// # Errors
    /// - Returns the load error of the newest read. Stale failures are dropped.
    pub fn complete_image_read(
        &mut self,
        ticket: RequestTicket,
        result: Result<ImagePayload, ImageLoadError>,
    ) -> Result<FieldUpdate, ImageLoadError> {
        if !self.image_requests.is_current(ticket) {
            debug!("event=form_image_fill module=form status=skipped reason=superseded");
            return Ok(FieldUpdate::Superseded);
        }
        self.image = Some(result?);
        Ok(FieldUpdate::Applied)
    }

    /// Clears the selected image and drops any in-flight read.
    pub fn clear_image(&mut self) {
        self.image_requests.invalidate();
        self.image = None;
    }

    /// Builds a validated creation request from the current fields.
    pub fn validate(&self) -> Result<CreateLandmark, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        let lat = parse_coordinate(Axis::Latitude, &self.lat)?;
        let lng = parse_coordinate(Axis::Longitude, &self.lng)?;

        Ok(CreateLandmark::new(
            title,
            description,
            Position::new(lat, lng)?,
            self.image.clone(),
        ))
    }

    /// Empties every field and supersedes in-flight fills.
    pub fn reset(&mut self) {
        self.title.clear();
        self.description.clear();
        self.lat.clear();
        self.lng.clear();
        self.clear_image();
        self.position_requests.invalidate();
    }
}

fn parse_coordinate(axis: Axis, input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidCoordinate {
            axis,
            input: input.to_string(),
        })
}

/// Validates `form`, then reads `image_path` and attaches it to the request.
///
/// The form is only borrowed for validation, so other events may run while the
/// read is pending.
///
/// # Errors
/// - `LandmarkError::Validation` before any read starts.
/// - `LandmarkError::ImageLoad` when the read fails; no request is produced.
pub async fn prepare_submission<L: ImageLoader>(
    form: &LandmarkForm,
    image_path: Option<&Path>,
    loader: &L,
) -> Result<CreateLandmark, LandmarkError> {
    let mut request = form.validate()?;
    if let Some(path) = image_path {
        request.image = Some(loader.load(path).await?);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::{FieldUpdate, LandmarkForm};
    use crate::io::geolocation::GeolocationError;
    use crate::model::landmark::{Axis, Position, ValidationError};

    fn filled() -> LandmarkForm {
        let mut form = LandmarkForm::new();
        form.title = " Museum ".to_string();
        form.description = "A place with art".to_string();
        form.lat = "43.26".to_string();
        form.lng = "-79.92".to_string();
        form
    }

    #[test]
    fn validate_trims_text_and_parses_coordinates() {
        let request = filled().validate().unwrap();
        assert_eq!(request.title, "Museum");
        assert_eq!(request.position, Position::new(43.26, -79.92).unwrap());
        assert!(request.image.is_none());
    }

    #[test]
    fn validate_reports_unparsable_and_non_finite_coordinates() {
        let mut form = filled();
        form.lat = "north".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidCoordinate {
                axis: Axis::Latitude,
                input: "north".to_string()
            }
        );

        form.lat = "1".to_string();
        form.lng = "inf".to_string();
        assert!(matches!(
            form.validate().unwrap_err(),
            ValidationError::NonFiniteCoordinate {
                axis: Axis::Longitude,
                ..
            }
        ));
    }

    #[test]
    fn stale_position_lookup_is_discarded() {
        let mut form = LandmarkForm::new();
        let older = form.begin_position_lookup();
        let newer = form.begin_position_lookup();

        let update = form.complete_position_lookup(newer, Ok(Position::new(1.5, 2.5).unwrap()));
        assert_eq!(update, FieldUpdate::Applied);
        let update = form.complete_position_lookup(older, Ok(Position::new(9.0, 9.0).unwrap()));
        assert_eq!(update, FieldUpdate::Superseded);

        assert_eq!(form.lat, "1.5");
        assert_eq!(form.lng, "2.5");
    }

    #[test]
    fn failed_position_lookup_leaves_fields() {
        let mut form = filled();
        let ticket = form.begin_position_lookup();
        let update = form.complete_position_lookup(ticket, Err(GeolocationError::PermissionDenied));

        assert_eq!(update, FieldUpdate::Skipped);
        assert_eq!(form.lat, "43.26");
    }

    #[test]
    fn reset_supersedes_in_flight_lookup() {
        let mut form = filled();
        let ticket = form.begin_position_lookup();
        form.reset();

        let update = form.complete_position_lookup(ticket, Ok(Position::new(1.0, 1.0).unwrap()));
        assert_eq!(update, FieldUpdate::Superseded);
        assert!(form.lat.is_empty());
        assert_eq!(form.validate().unwrap_err(), ValidationError::EmptyTitle);
    }
}
