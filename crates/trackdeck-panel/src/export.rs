//! Marker export — timestamp rendering and the save operation.
//!
//! The rendered text is the one format-compatibility surface of the panel;
//! its layout is fixed: a three-line header (project name, sequence name,
//! marker count), a blank separator line, then one `timestamp - name` line
//! per marker in track order.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use tracing::info;
use trackdeck_timeline::Track;

use crate::error::{PanelError, Result};
use crate::marker::marker_track;
use crate::session::Session;

/// Destination prompt for the export. The app supplies a native dialog;
/// tests supply a fixed path.
pub trait SaveDialog {
    /// Ask the user where to write the export. `None` means cancelled.
    fn pick_save_path(&self) -> Option<PathBuf>;
}

/// Format a whole-second timestamp. `MM:SS`, or `HH:MM:SS` when the hours
/// are non-zero — the hours field is omitted entirely at zero, not shown
/// zero-padded. Every emitted field is zero-padded to width 2.
pub fn format_timestamp(total_seconds: i64) -> String {
    let mut remaining = total_seconds;
    let hours = remaining / 3600;
    remaining -= hours * 3600;
    let minutes = remaining / 60;
    remaining -= minutes * 60;
    let seconds = remaining;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Render the export text for a marker track. Marker order is the track's
/// clip order; no independent sort is applied.
pub fn render_marker_list(project_name: &str, sequence_name: &str, track: &Track) -> String {
    let mut output = format!(
        "Project: {}\nSequence: {}\nMarker count: {}\n\n",
        project_name,
        sequence_name,
        track.clip_count()
    );

    for clip in &track.clips {
        let stamp = format_timestamp(clip.start.to_seconds_floor());
        let _ = writeln!(output, "{} - {}", stamp, clip.name);
    }

    output
}

/// Render the export for the session's marker track.
pub fn render_export(session: &Session) -> Result<String> {
    let project = session.project();
    let sequence = session.sequence()?;
    let track = marker_track(sequence).ok_or(PanelError::NoMarkerTrack)?;
    Ok(render_marker_list(&project.name, &sequence.name, track))
}

/// Full save flow: render, prompt for a destination, write. A cancelled
/// prompt writes nothing and returns `None`.
pub fn save_custom_markers(
    session: &Session,
    dialog: &dyn SaveDialog,
) -> Result<Option<PathBuf>> {
    let output = render_export(session)?;

    let Some(path) = dialog.pick_save_path() else {
        info!("marker export cancelled");
        return Ok(None);
    };

    fs::write(&path, &output)?;
    info!(path = %path.display(), bytes = output.len(), "saved custom markers");
    Ok(Some(path))
}
