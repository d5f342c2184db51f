//! Integration tests for the marker export end to end.
//!
//! The export text is the panel's one bit-exact compatibility surface, so
//! these tests compare whole blobs, not fragments.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use trackdeck_core::{FrameRate, Ticks};
use trackdeck_panel::{Registry, Request, SaveDialog, Session};
use trackdeck_timeline::{Clip, Project, Sequence, Track};

struct FixedDialog(PathBuf);

impl SaveDialog for FixedDialog {
    fn pick_save_path(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}

fn marker_at(name: &str, start_secs: i64) -> Clip {
    Clip::new(
        name,
        Ticks::from_seconds(start_secs),
        Ticks::from_seconds(start_secs + 5),
    )
}

fn project_with_markers(markers: &[(&str, i64)]) -> Project {
    let mut seq = Sequence::new("Main Timeline", FrameRate::FPS_25);
    let mut track = Track::new_video("Markers");
    for &(name, start) in markers {
        track.append_clip(marker_at(name, start));
    }
    seq.video_tracks.push(track);

    let mut project = Project::new("Documentary");
    project.add_sequence(seq);
    project
}

fn save_through_registry(project: &mut Project, dest: PathBuf) -> Value {
    let registry = Registry::new();
    let mut session = Session::new(project);
    registry
        .invoke(
            &mut session,
            &FixedDialog(dest),
            &Request::new("save-custom-markers", &[]),
        )
        .unwrap()
}

#[test]
fn export_blob_is_bit_exact() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("markers.txt");

    let mut project =
        project_with_markers(&[("cold open", 0), ("first take", 45), ("late pickup", 3661)]);
    let result = save_through_registry(&mut project, dest.clone());

    assert_eq!(result, Value::String(dest.display().to_string()));
    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "Project: Documentary\n\
         Sequence: Main Timeline\n\
         Marker count: 3\n\
         \n\
         00:00 - cold open\n\
         00:45 - first take\n\
         01:01:01 - late pickup\n"
    );
}

#[test]
fn export_with_no_markers_is_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("empty.txt");

    let mut project = project_with_markers(&[]);
    save_through_registry(&mut project, dest.clone());

    let content = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        content,
        "Project: Documentary\nSequence: Main Timeline\nMarker count: 0\n\n"
    );
    // Three header lines, no marker lines.
    assert_eq!(content.lines().filter(|l| !l.is_empty()).count(), 3);
}

#[test]
fn export_reads_markers_from_top_video_track_only() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("markers.txt");

    let mut project = project_with_markers(&[("keeper", 10)]);
    // Clips on the lower video track must not appear in the export.
    project.active_sequence_mut().unwrap().video_tracks[0]
        .append_clip(marker_at("footage.mp4", 0));

    save_through_registry(&mut project, dest.clone());

    let content = fs::read_to_string(&dest).unwrap();
    assert!(content.contains("00:10 - keeper"));
    assert!(!content.contains("footage.mp4"));
    assert!(content.contains("Marker count: 1"));
}
