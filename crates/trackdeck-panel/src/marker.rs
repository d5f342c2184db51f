//! The marker track — resolution, locator, and marker operations.
//!
//! Markers are not a host concept. The convention: the highest-indexed
//! video track of the active sequence hosts copies of a template asset, and
//! the copies' names carry the marker labels. The convention is undefined
//! when the sequence has no video track.

use tracing::{debug, info};
use trackdeck_core::Ticks;
use trackdeck_timeline::{Clip, Sequence, Track};

use crate::error::{PanelError, Result};
use crate::session::Session;

/// Name of the project-root template copied onto the marker track.
pub const MARKER_TEMPLATE_NAME: &str = "MARKER";

/// Resolve the marker track: the highest-indexed video track.
pub fn marker_track(sequence: &Sequence) -> Option<&Track> {
    sequence.video_tracks.last()
}

/// Mutable variant of [`marker_track`].
pub fn marker_track_mut(sequence: &mut Sequence) -> Option<&mut Track> {
    sequence.video_tracks.last_mut()
}

/// The marker clip covering `position`, if any.
pub fn locate_at(sequence: &Sequence, position: Ticks) -> Option<&Clip> {
    marker_track(sequence)?.clip_covering(position)
}

fn current_marker_mut(sequence: &mut Sequence) -> Option<&mut Clip> {
    let playhead = sequence.playhead;
    marker_track_mut(sequence)?.clip_covering_mut(playhead)
}

/// Select the marker clip covering the current playhead position. Doing
/// nothing when the playhead sits in a gap is the normal outcome, not an
/// error.
pub fn select_current_marker(session: &mut Session) -> Result<()> {
    let sequence = session.sequence_mut()?;
    if let Some(clip) = current_marker_mut(sequence) {
        clip.set_selected(true);
        debug!(name = %clip.name, "selected current marker");
    }
    Ok(())
}

/// Rename the marker clip covering the current playhead position, if any.
pub fn set_current_marker_name(session: &mut Session, name: &str) -> Result<()> {
    let sequence = session.sequence_mut()?;
    if let Some(clip) = current_marker_mut(sequence) {
        clip.set_name(name);
        debug!(name, "renamed current marker");
    }
    Ok(())
}

/// Copy the project's marker template onto the marker track at the current
/// playhead position, overwriting whatever the copy's range covers.
pub fn add_custom_marker(session: &mut Session) -> Result<()> {
    let template = session
        .project()
        .find_root_item(MARKER_TEMPLATE_NAME)
        .cloned()
        .ok_or(PanelError::TemplateMissing(MARKER_TEMPLATE_NAME))?;

    let sequence = session.sequence_mut()?;
    let playhead = sequence.playhead;
    let track = marker_track_mut(sequence).ok_or(PanelError::NoMarkerTrack)?;

    track.overwrite_clip(Clip::new(
        template.name,
        playhead,
        playhead + template.duration,
    ));
    info!(at = %playhead, "added custom marker");
    Ok(())
}

/// Toggle the lock of the marker track.
pub fn toggle_lock_marker_track(session: &mut Session) -> Result<()> {
    let sequence = session.sequence_mut()?;
    let track = marker_track_mut(sequence).ok_or(PanelError::NoMarkerTrack)?;
    let locked = !track.locked;
    track.set_locked(locked);
    debug!(locked, "toggled marker track lock");
    Ok(())
}
