//! Geolocation source contract and center fallback.

use crate::model::landmark::Position;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Supplies the device position asynchronously.
#[allow(async_fn_in_trait)]
pub trait GeolocationSource {
    async fn current_position(&self) -> Result<Position, GeolocationError>;
}

/// Soft geolocation failure. Never fatal to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    PermissionDenied,
    Unavailable(String),
    Timeout,
}

impl GeolocationError {
    fn reason(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission_denied",
            Self::Unavailable(_) => "unavailable",
            Self::Timeout => "timeout",
        }
    }
}

impl Display for GeolocationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "geolocation permission denied"),
            Self::Unavailable(reason) => write!(f, "geolocation unavailable: {reason}"),
            Self::Timeout => write!(f, "geolocation timed out"),
        }
    }
}

impl Error for GeolocationError {}

/// Fixed-answer source, for hosts that resolve the position themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticGeolocation {
    answer: Result<Position, GeolocationError>,
}

impl StaticGeolocation {
    pub fn found(position: Position) -> Self {
        Self {
            answer: Ok(position),
        }
    }

    pub fn failing(error: GeolocationError) -> Self {
        Self { answer: Err(error) }
    }
}

impl GeolocationSource for StaticGeolocation {
    async fn current_position(&self) -> Result<Position, GeolocationError> {
        self.answer.clone()
    }
}

/// Resolves the initial map center, falling back to `fallback` on any failure.
pub async fn resolve_center<G: GeolocationSource>(source: &G, fallback: Position) -> Position {
    match source.current_position().await {
        Ok(position) => {
            info!("event=geolocation module=io status=ok");
            position
        }
        Err(err) => {
            warn!(
                "event=geolocation module=io status=skipped reason={} fallback=default_center",
                err.reason()
            );
            fallback
        }
    }
}
