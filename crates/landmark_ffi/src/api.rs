//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level landmark functions to Dart via FRB.
//! - Own the single process-wide session; the UI pulls projections from it.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported as `ok = false` envelopes with a message.
//! - Unknown ids are not failures; they report outcome `ignored`.

use landmark_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    prepare_submission, AppConfig, ClickTarget, EventOutcome, FsImageLoader, GeolocationError,
    LandmarkApp, LandmarkForm, LandmarkId, MemoryMap, MemoryProjector, Position,
    StaticGeolocation, UiEvent,
};
use log::warn;
use once_cell::sync::OnceCell;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use tokio::runtime::{Builder, Runtime};

type Session = LandmarkApp<MemoryMap, MemoryProjector>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();
static RUNTIME: OnceCell<Runtime> = OnceCell::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
/// - Idempotent for the same `level + log_dir`; conflicting calls fail.
/// - Returns empty string on success and the error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), PathBuf::from(log_dir)) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkActionResponse {
    /// Whether the call was accepted.
    pub ok: bool,
    /// Affected landmark ID, when one was resolved.
    pub landmark_id: Option<String>,
    /// `created|deleted|visibility_changed|selected|ignored` on success.
    pub outcome: String,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl LandmarkActionResponse {
    fn from_outcome(outcome: EventOutcome) -> Self {
        let (label, landmark_id, message) = match outcome {
            EventOutcome::Created(id) => ("created", Some(id), "Landmark created."),
            EventOutcome::Deleted { id, .. } => ("deleted", Some(id), "Landmark deleted."),
            EventOutcome::VisibilityChanged { id, .. } => {
                ("visibility_changed", Some(id), "Visibility updated.")
            }
            EventOutcome::Selected(id) => ("selected", Some(id), "Landmark selected."),
            EventOutcome::Ignored => ("ignored", None, "Nothing to do."),
        };
        Self {
            ok: true,
            landmark_id: landmark_id.map(|id| id.to_string()),
            outcome: label.to_string(),
            message: message.to_string(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            landmark_id: None,
            outcome: "failed".to_string(),
            message: message.into(),
        }
    }
}

/// One sidebar row as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkListItem {
    pub landmark_id: String,
    pub title: String,
    pub description: String,
    pub coordinates: String,
    pub visible: bool,
    pub active: bool,
}

/// Popup content as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandmarkPopup {
    pub landmark_id: String,
    pub title: String,
    pub description: String,
    /// `data:image/...;base64,...` when the landmark has an image.
    pub image_data_url: Option<String>,
}

/// Full projection snapshot pulled by the UI after each action.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSnapshot {
    pub items: Vec<LandmarkListItem>,
    pub selected_id: Option<String>,
    pub popup: Option<LandmarkPopup>,
    pub scroll_to_id: Option<String>,
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
}

/// Centers the map, using the device position when the host resolved one.
///
/// Passing `None` for either coordinate means geolocation was denied; the
/// configured default center is used instead. If the async runtime cannot
/// start, the map is left as is and the current snapshot is returned.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_start(device_lat: Option<f64>, device_lng: Option<f64>) -> LandmarkSnapshot {
    let geolocation = match (device_lat, device_lng) {
        (Some(lat), Some(lng)) => match Position::new(lat, lng) {
            Ok(position) => StaticGeolocation::found(position),
            Err(err) => StaticGeolocation::failing(GeolocationError::Unavailable(err.to_string())),
        },
        _ => StaticGeolocation::failing(GeolocationError::PermissionDenied),
    };
    let mut session = lock_session();
    match runtime() {
        Ok(runtime) => {
            runtime.block_on(session.start(&geolocation));
        }
        Err(err) => warn!("event=ffi_call module=ffi status=error op=landmark_start reason={err}"),
    }
    snapshot_of(&session)
}

/// Validates form input, reads the optional image file and creates a landmark.
///
/// # FFI contract
/// - Sync call; may read one image file.
/// - Validation and image errors create nothing and return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_create(
    title: String,
    description: String,
    lat: String,
    lng: String,
    image_path: Option<String>,
) -> LandmarkActionResponse {
    let mut form = LandmarkForm::new();
    form.title = title;
    form.description = description;
    form.lat = lat;
    form.lng = lng;

    let image_path = image_path
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from);
    let runtime = match runtime() {
        Ok(runtime) => runtime,
        Err(err) => return failure("landmark_create", err),
    };
    let submission = prepare_submission(&form, image_path.as_deref(), &FsImageLoader);
    let request = match runtime.block_on(submission) {
        Ok(request) => request,
        Err(err) => return failure("landmark_create", err),
    };

    dispatch(UiEvent::FormSubmitted(request), "landmark_create")
}

/// Deletes one landmark; clears the selection when it was selected.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_delete(landmark_id: String) -> LandmarkActionResponse {
    with_id(&landmark_id, "landmark_delete", UiEvent::DeleteClicked)
}

/// Shows or hides one landmark's marker.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_set_visible(landmark_id: String, visible: bool) -> LandmarkActionResponse {
    with_id(&landmark_id, "landmark_set_visible", |id| {
        UiEvent::VisibilityToggled { id, visible }
    })
}

/// Marker tap on the map.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_marker_tap(landmark_id: String) -> LandmarkActionResponse {
    with_id(&landmark_id, "landmark_marker_tap", UiEvent::MarkerClicked)
}

/// List tap. `target` is `entry`, `toggle` or `delete`; only `entry` selects.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_list_tap(landmark_id: String, target: String) -> LandmarkActionResponse {
    let target = match parse_click_target(&target) {
        Some(target) => target,
        None => {
            return failure(
                "landmark_list_tap",
                format!("unknown target `{}`", target.trim()),
            )
        }
    };
    with_id(&landmark_id, "landmark_list_tap", |id| {
        UiEvent::ListEntryClicked { id, target }
    })
}

/// Current list, selection, popup and map center.
#[flutter_rust_bridge::frb(sync)]
pub fn landmark_snapshot() -> LandmarkSnapshot {
    snapshot_of(&lock_session())
}

fn with_id(
    raw_id: &str,
    operation: &str,
    event: impl FnOnce(LandmarkId) -> UiEvent,
) -> LandmarkActionResponse {
    match raw_id.parse::<LandmarkId>() {
        Ok(id) => dispatch(event(id), operation),
        Err(_) => failure(
            operation,
            format!("invalid landmark id `{}`", raw_id.trim()),
        ),
    }
}

fn dispatch(event: UiEvent, operation: &str) -> LandmarkActionResponse {
    match lock_session().handle(event) {
        Ok(outcome) => LandmarkActionResponse::from_outcome(outcome),
        Err(err) => failure(operation, err),
    }
}

/// Logs the operation name and wraps the reason in a failure envelope.
fn failure(operation: &str, reason: impl std::fmt::Display) -> LandmarkActionResponse {
    warn!("event=ffi_call module=ffi status=error op={operation}");
    LandmarkActionResponse::failure(format!("{operation} failed: {reason}"))
}

fn runtime() -> Result<&'static Runtime, std::io::Error> {
    RUNTIME.get_or_try_init(|| Builder::new_current_thread().enable_all().build())
}

fn parse_click_target(value: &str) -> Option<ClickTarget> {
    match value.trim().to_ascii_lowercase().as_str() {
        "entry" => Some(ClickTarget::Entry),
        "toggle" => Some(ClickTarget::VisibilityToggle),
        "delete" => Some(ClickTarget::DeleteControl),
        _ => None,
    }
}

fn lock_session() -> MutexGuard<'static, Session> {
    let session = SESSION.get_or_init(|| {
        let config = AppConfig::from_env();
        let projector = MemoryProjector::new(config.coordinate_precision);
        Mutex::new(LandmarkApp::new(config, MemoryMap::new(), projector))
    });
    // Creation validates before mutating, so a poisoned session is consistent.
    session
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn snapshot_of(session: &Session) -> LandmarkSnapshot {
    let projector = session.projector();
    let items = projector
        .entries()
        .iter()
        .map(|entry| LandmarkListItem {
            landmark_id: entry.id.to_string(),
            title: entry.title.clone(),
            description: entry.description.clone(),
            coordinates: entry.coordinates.clone(),
            visible: entry.visible,
            active: entry.active,
        })
        .collect();
    let popup = projector.popup().map(|(id, content)| LandmarkPopup {
        landmark_id: id.to_string(),
        title: content.title.clone(),
        description: content.description.clone(),
        image_data_url: content.image.as_ref().map(|image| image.as_str().to_string()),
    });
    let center = session.map().center();

    LandmarkSnapshot {
        items,
        selected_id: session.selected().map(|id| id.to_string()),
        popup,
        scroll_to_id: projector.scrolled_to().map(|id| id.to_string()),
        center_lat: center.map(|position| position.lat),
        center_lng: center.map(|position| position.lng),
    }
}
