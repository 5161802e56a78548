//! Interaction routing from UI/map events to core operations.
//!
//! # Invariants
//! - The router holds no state of its own.
//! - Clicks on controls nested in a list entry never select that entry.
//! - Unknown ids resolve to `EventOutcome::Ignored`, never to an error.

use crate::error::LandmarkError;
use crate::map::MapSurface;
use crate::model::landmark::{CreateLandmark, LandmarkId};
use crate::service::app::LandmarkApp;
use crate::view::ViewProjector;
use log::{debug, warn};

/// Element of a list entry that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The entry container itself (title, description, coordinates).
    Entry,
    VisibilityToggle,
    DeleteControl,
}

/// External event delivered by the UI toolkit or map surface.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    MarkerClicked(LandmarkId),
    ListEntryClicked { id: LandmarkId, target: ClickTarget },
    VisibilityToggled { id: LandmarkId, visible: bool },
    DeleteClicked(LandmarkId),
    /// Validated submission with every async input already resolved.
    FormSubmitted(CreateLandmark),
}

/// What an event changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Created(LandmarkId),
    Deleted { id: LandmarkId, was_selected: bool },
    VisibilityChanged { id: LandmarkId, visible: bool },
    Selected(LandmarkId),
    /// Unknown id or a click on a nested control.
    Ignored,
}

impl<M: MapSurface, V: ViewProjector> LandmarkApp<M, V> {
    /// Routes one event.
    ///
    /// # Errors
    /// - Only `FormSubmitted` can fail, with `LandmarkError::Validation`.
    pub fn handle(&mut self, event: UiEvent) -> Result<EventOutcome, LandmarkError> {
        let outcome = match event {
            UiEvent::MarkerClicked(id) => selected_or_ignored(id, self.select(id)),
            UiEvent::ListEntryClicked {
                id,
                target: ClickTarget::Entry,
            } => selected_or_ignored(id, self.focus(id)),
            UiEvent::ListEntryClicked { .. } => EventOutcome::Ignored,
            UiEvent::VisibilityToggled { id, visible } => {
                if self.set_visible(id, visible) {
                    EventOutcome::VisibilityChanged { id, visible }
                } else {
                    EventOutcome::Ignored
                }
            }
            UiEvent::DeleteClicked(id) => match self.delete(id) {
                (true, was_selected) => EventOutcome::Deleted { id, was_selected },
                (false, _) => EventOutcome::Ignored,
            },
            UiEvent::FormSubmitted(request) => match self.create(request) {
                Ok(id) => EventOutcome::Created(id),
                Err(err) => {
                    warn!(
                        "event=form_submit module=router status=error kind={}",
                        error_kind(&err)
                    );
                    return Err(err);
                }
            },
        };

        if outcome == EventOutcome::Ignored {
            debug!("event=ui_event module=router status=skipped");
        }
        Ok(outcome)
    }
}

fn selected_or_ignored(id: LandmarkId, selected: bool) -> EventOutcome {
    if selected {
        EventOutcome::Selected(id)
    } else {
        EventOutcome::Ignored
    }
}

fn error_kind(err: &LandmarkError) -> &'static str {
    match err {
        LandmarkError::Validation(_) => "validation",
        LandmarkError::ImageLoad(_) => "image_load",
    }
}
