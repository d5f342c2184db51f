//! Track types for the timeline.

use serde::{Deserialize, Serialize};
use trackdeck_core::Ticks;
use uuid::Uuid;

use crate::clip::Clip;

/// Kind of track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    Video,
    Audio,
}

/// A track: an ordered lane of non-overlapping clips.
///
/// Clip order is start-ascending and clips never overlap. The invariant is
/// maintained by the mutation primitives here, not re-validated by readers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Unique track ID
    pub id: Uuid,
    /// Track name
    pub name: String,
    /// Track kind
    pub kind: TrackKind,
    /// Clips on this track, start-ascending
    pub clips: Vec<Clip>,
    /// Is track muted
    pub muted: bool,
    /// Is track locked (prevent edits)
    pub locked: bool,
}

impl Track {
    /// Create a new video track.
    pub fn new_video(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: TrackKind::Video,
            clips: Vec::new(),
            muted: false,
            locked: false,
        }
    }

    /// Create a new audio track.
    pub fn new_audio(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: TrackKind::Audio,
            clips: Vec::new(),
            muted: false,
            locked: false,
        }
    }

    /// Host mute primitive.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Host lock primitive.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Number of clips on this track.
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    /// Get the clip at the given index.
    pub fn clip_at(&self, index: usize) -> Option<&Clip> {
        self.clips.get(index)
    }

    /// Get the clip mutably at the given index.
    pub fn clip_at_mut(&mut self, index: usize) -> Option<&mut Clip> {
        self.clips.get_mut(index)
    }

    /// First clip whose half-open range contains `position`. A position
    /// exactly at a clip's end belongs to the next clip, if any.
    pub fn clip_covering(&self, position: Ticks) -> Option<&Clip> {
        self.clips.iter().find(|clip| clip.range().contains(position))
    }

    /// Mutable variant of [`Track::clip_covering`].
    pub fn clip_covering_mut(&mut self, position: Ticks) -> Option<&mut Clip> {
        self.clips
            .iter_mut()
            .find(|clip| clip.range().contains(position))
    }

    /// Append a clip. The caller is responsible for start order; fixtures
    /// and project files supply clips already sorted.
    pub fn append_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Host "overwrite" primitive: place `clip` on the track, truncating or
    /// removing whatever its range overlaps, preserving start order.
    pub fn overwrite_clip(&mut self, clip: Clip) {
        let start = clip.start;
        let end = clip.end;

        let mut result: Vec<Clip> = Vec::with_capacity(self.clips.len() + 1);
        for existing in self.clips.drain(..) {
            if existing.end <= start || existing.start >= end {
                result.push(existing);
            } else if existing.start < start && existing.end > end {
                // Straddles both edges: keep the pieces on either side.
                let mut left = existing.clone();
                left.end = start;
                let mut right = existing;
                right.id = Uuid::new_v4();
                right.start = end;
                result.push(left);
                result.push(right);
            } else if existing.start < start {
                let mut left = existing;
                left.end = start;
                result.push(left);
            } else if existing.end > end {
                let mut right = existing;
                right.start = end;
                result.push(right);
            }
            // fully covered clips are dropped
        }
        result.push(clip);
        result.sort_by_key(|c| c.start);
        self.clips = result;
    }
}
