//! Clip types for the timeline.

use serde::{Deserialize, Serialize};
use trackdeck_core::{TickRange, Ticks};
use uuid::Uuid;

/// A clip placed on a track.
///
/// Occupies the half-open interval `[start, end)` on its track. Marker
/// clips are ordinary clips on the marker track; their names carry the
/// labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip ID
    pub id: Uuid,
    /// Clip name (displayed in UI, mutable)
    pub name: String,
    /// Timeline start (inclusive), in host ticks
    pub start: Ticks,
    /// Timeline end (exclusive), in host ticks
    pub end: Ticks,
    /// Is clip part of the current selection
    pub selected: bool,
}

impl Clip {
    /// Create a new deselected clip.
    pub fn new(name: impl Into<String>, start: Ticks, end: Ticks) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start,
            end,
            selected: false,
        }
    }

    /// The clip's timeline range (half-open).
    pub fn range(&self) -> TickRange {
        TickRange::new(self.start, self.end)
    }

    /// Duration on the timeline.
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    /// Host selection primitive.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Host rename primitive.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
