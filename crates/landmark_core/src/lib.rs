//! Landmark state/view synchronization engine.
//! This crate owns landmark identity, lifecycle and the consistency between
//! the marker, list and selection projections.

pub mod config;
pub mod error;
pub mod form;
pub mod io;
pub mod logging;
pub mod map;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use config::AppConfig;
pub use error::LandmarkError;
pub use form::supersession::{FormField, RequestTicket};
pub use form::{prepare_submission, FieldUpdate, LandmarkForm};
pub use io::geolocation::{resolve_center, GeolocationError, GeolocationSource, StaticGeolocation};
pub use io::image::{FsImageLoader, ImageLoadError, ImageLoader};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use map::memory::{MemoryMap, OpenPopup};
pub use map::MapSurface;
pub use model::landmark::{
    Axis, CreateLandmark, ImagePayload, Landmark, LandmarkId, MarkerHandle, Position,
    ValidationError,
};
pub use service::app::LandmarkApp;
pub use service::router::{ClickTarget, EventOutcome, UiEvent};
pub use service::selection::SelectionController;
pub use store::landmark_store::LandmarkStore;
pub use view::memory::MemoryProjector;
pub use view::{ListEntry, PopupContent, ViewProjector};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
