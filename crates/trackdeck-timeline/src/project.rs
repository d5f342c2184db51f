//! Project and sequence types.

use serde::{Deserialize, Serialize};
use trackdeck_core::{FrameRate, Ticks};
use uuid::Uuid;

use crate::track::Track;

/// A project: top-level bin items plus sequences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID
    pub id: Uuid,
    /// Project name
    pub name: String,
    /// Default frame rate
    pub frame_rate: FrameRate,
    /// Top-level bin items (template assets live here)
    pub root_items: Vec<ProjectItem>,
    /// Sequences in this project
    pub sequences: Vec<Sequence>,
}

impl Project {
    /// Create a new empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            frame_rate: FrameRate::default(),
            root_items: Vec::new(),
            sequences: Vec::new(),
        }
    }

    /// Add a new sequence to the project.
    pub fn add_sequence(&mut self, sequence: Sequence) {
        self.sequences.push(sequence);
    }

    /// Add a top-level bin item.
    pub fn add_root_item(&mut self, item: ProjectItem) {
        self.root_items.push(item);
    }

    /// Get the active sequence (first one).
    pub fn active_sequence(&self) -> Option<&Sequence> {
        self.sequences.first()
    }

    /// Get the active sequence mutably.
    pub fn active_sequence_mut(&mut self) -> Option<&mut Sequence> {
        self.sequences.first_mut()
    }

    /// Find a top-level bin item by exact name.
    pub fn find_root_item(&self, name: &str) -> Option<&ProjectItem> {
        self.root_items.iter().find(|item| item.name == name)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("Untitled Project")
    }
}

/// A top-level bin item: a media reference or a template asset that can be
/// copied onto a track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectItem {
    /// Unique item ID
    pub id: Uuid,
    /// Item name
    pub name: String,
    /// Default duration when placed on a track
    pub duration: Ticks,
}

impl ProjectItem {
    /// Create a new bin item.
    pub fn new(name: impl Into<String>, duration: Ticks) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            duration,
        }
    }
}

/// A sequence (timeline) containing tracks and a playhead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    /// Unique sequence ID
    pub id: Uuid,
    /// Sequence name
    pub name: String,
    /// Frame rate
    pub frame_rate: FrameRate,
    /// Video tracks, 0-indexed bottom-up
    pub video_tracks: Vec<Track>,
    /// Audio tracks, 0-indexed
    pub audio_tracks: Vec<Track>,
    /// Current playhead position
    pub playhead: Ticks,
}

impl Sequence {
    /// Create a new sequence with one video and one audio track.
    pub fn new(name: impl Into<String>, frame_rate: FrameRate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            frame_rate,
            video_tracks: vec![Track::new_video("V1")],
            audio_tracks: vec![Track::new_audio("A1")],
            playhead: Ticks::ZERO,
        }
    }

    /// Move the playhead.
    pub fn set_playhead(&mut self, position: Ticks) {
        self.playhead = position;
    }

    /// End of the last clip across all tracks.
    pub fn duration(&self) -> Ticks {
        self.video_tracks
            .iter()
            .chain(self.audio_tracks.iter())
            .flat_map(|track| track.clips.iter())
            .map(|clip| clip.end)
            .max()
            .unwrap_or(Ticks::ZERO)
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new("Sequence 1", FrameRate::default())
    }
}
