//! Hard failures surfaced by landmark creation.
//!
//! Unknown-id conditions are not represented here: they are absorbed as
//! no-ops by the store, selection and router.

use crate::io::image::ImageLoadError;
use crate::model::landmark::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LandmarkError {
    /// Creation input rejected before any mutation.
    Validation(ValidationError),
    /// Image read failed; creation was aborted.
    ImageLoad(ImageLoadError),
}

impl Display for LandmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ImageLoad(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LandmarkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::ImageLoad(err) => Some(err),
        }
    }
}

impl From<ValidationError> for LandmarkError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImageLoadError> for LandmarkError {
    fn from(value: ImageLoadError) -> Self {
        Self::ImageLoad(value)
    }
}
