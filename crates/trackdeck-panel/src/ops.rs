//! Track operations — mute, selection, locks.
//!
//! Out-of-range track indices on mutations are silently ignored; the host
//! interface has always treated an invalid index as "nothing to do".

use tracing::debug;
use trackdeck_timeline::{Sequence, Track, TrackKind};

use crate::error::Result;
use crate::selector::TrackSelector;
use crate::session::Session;

fn track(sequence: &Sequence, selector: TrackSelector) -> Option<&Track> {
    match selector.kind {
        TrackKind::Video => sequence.video_tracks.get(selector.index),
        TrackKind::Audio => sequence.audio_tracks.get(selector.index),
    }
}

fn track_mut(sequence: &mut Sequence, selector: TrackSelector) -> Option<&mut Track> {
    match selector.kind {
        TrackKind::Video => sequence.video_tracks.get_mut(selector.index),
        TrackKind::Audio => sequence.audio_tracks.get_mut(selector.index),
    }
}

/// Mute an audio track of the active sequence.
pub fn mute_track(session: &mut Session, index: usize) -> Result<()> {
    let sequence = session.sequence_mut()?;
    if let Some(track) = sequence.audio_tracks.get_mut(index) {
        track.set_muted(true);
        debug!(index, "muted audio track");
    }
    Ok(())
}

/// Select exactly the video clips whose name matches `name`
/// (case-sensitive); deselect every other video clip and every audio clip.
pub fn select_named_layer(session: &mut Session, name: &str) -> Result<()> {
    let sequence = session.sequence_mut()?;
    let mut selected = 0usize;
    for track in &mut sequence.video_tracks {
        for clip in &mut track.clips {
            let matches = clip.name == name;
            clip.set_selected(matches);
            selected += usize::from(matches);
        }
    }
    for track in &mut sequence.audio_tracks {
        for clip in &mut track.clips {
            clip.set_selected(false);
        }
    }
    debug!(name, selected, "selected named layer");
    Ok(())
}

/// Write a track's lock state exactly as given.
pub fn set_track_lock(session: &mut Session, selector: TrackSelector, locked: bool) -> Result<()> {
    let sequence = session.sequence_mut()?;
    if let Some(track) = track_mut(sequence, selector) {
        track.set_locked(locked);
        debug!(?selector, locked, "set track lock");
    }
    Ok(())
}

/// Read the current lock state and write the inverse.
pub fn toggle_track_lock(session: &mut Session, selector: TrackSelector) -> Result<()> {
    let sequence = session.sequence_mut()?;
    if let Some(track) = track_mut(sequence, selector) {
        let locked = !track.locked;
        track.set_locked(locked);
        debug!(?selector, locked, "toggled track lock");
    }
    Ok(())
}

/// Current lock state, or `None` when the index is out of range.
pub fn track_lock(session: &Session, selector: TrackSelector) -> Result<Option<bool>> {
    let sequence = session.sequence()?;
    Ok(track(sequence, selector).map(|t| t.locked))
}

/// Toggle locks for a selector batch, in listed order.
pub fn toggle_multiple_track_locks(
    session: &mut Session,
    selectors: &[TrackSelector],
) -> Result<()> {
    for &selector in selectors {
        toggle_track_lock(session, selector)?;
    }
    Ok(())
}

/// Set locks for a selector batch, in listed order.
pub fn set_multiple_track_locks(
    session: &mut Session,
    selectors: &[TrackSelector],
    locked: bool,
) -> Result<()> {
    for &selector in selectors {
        set_track_lock(session, selector, locked)?;
    }
    Ok(())
}
