//! Integration tests for the panel driven through the registry.
//!
//! Exercises the same path the live request loop takes: a JSON request is
//! decoded, dispatched by name, and mutates the project graph through a
//! fresh session per call.

use serde_json::Value;
use trackdeck_core::{FrameRate, Ticks};
use trackdeck_panel::marker::MARKER_TEMPLATE_NAME;
use trackdeck_panel::{Registry, Request, SaveDialog, Session};
use trackdeck_timeline::{Clip, Project, ProjectFile, ProjectItem, Sequence, Track};

// ── Helpers ────────────────────────────────────────────────────

struct NoDialog;

impl SaveDialog for NoDialog {
    fn pick_save_path(&self) -> Option<std::path::PathBuf> {
        None
    }
}

fn secs(s: i64) -> Ticks {
    Ticks::from_seconds(s)
}

fn marker(name: &str, start: i64, end: i64) -> Clip {
    Clip::new(name, secs(start), secs(end))
}

/// A project the way an editor would leave it: two video tracks (top one
/// carrying markers), two audio tracks, and the marker template in the bin.
fn build_project() -> Project {
    let mut seq = Sequence::new("Main Timeline", FrameRate::FPS_25);

    seq.video_tracks[0].append_clip(marker("REC_2153.mp4", 0, 30));
    seq.video_tracks[0].append_clip(marker("REC_2154.mp4", 30, 60));

    let mut markers = Track::new_video("Markers");
    markers.append_clip(marker("cold open", 0, 5));
    markers.append_clip(marker("interview", 5, 10));
    seq.video_tracks.push(markers);

    seq.audio_tracks.push(Track::new_audio("A2"));
    seq.audio_tracks[0].append_clip(marker("lav mic", 0, 60));

    let mut project = Project::new("Documentary");
    project.add_root_item(ProjectItem::new(MARKER_TEMPLATE_NAME, secs(5)));
    project.add_sequence(seq);
    project
}

fn invoke(project: &mut Project, op: &str, args: &[&str]) -> Value {
    let registry = Registry::new();
    let mut session = Session::new(project);
    registry
        .invoke(&mut session, &NoDialog, &Request::new(op, args))
        .unwrap()
}

// ── Request decode → dispatch → mutation ───────────────────────

#[test]
fn request_json_decodes_and_dispatches() {
    let mut project = build_project();

    let request: Request =
        serde_json::from_str(r#"{"op": "set-track-lock", "args": ["v", "0", "true"]}"#).unwrap();
    let registry = Registry::new();
    let mut session = Session::new(&mut project);
    registry.invoke(&mut session, &NoDialog, &request).unwrap();

    assert!(project.active_sequence().unwrap().video_tracks[0].locked);
}

#[test]
fn args_field_is_optional_in_request_json() {
    let request: Request = serde_json::from_str(r#"{"op": "add-custom-marker"}"#).unwrap();
    assert!(request.args.is_empty());
}

#[test]
fn mute_by_request_leaves_other_tracks_alone() {
    let mut project = build_project();
    invoke(&mut project, "mute-track", &["0"]);

    let seq = project.active_sequence().unwrap();
    assert!(seq.audio_tracks[0].muted);
    assert!(!seq.audio_tracks[1].muted);
    assert!(seq.video_tracks.iter().all(|t| !t.muted));
}

#[test]
fn batch_lock_descriptors_apply_left_to_right() {
    let mut project = build_project();

    invoke(&mut project, "set-multiple-track-locks", &["a0,v0,v1", "true"]);
    {
        let seq = project.active_sequence().unwrap();
        assert!(seq.audio_tracks[0].locked);
        assert!(seq.video_tracks[0].locked);
        assert!(seq.video_tracks[1].locked);
        assert!(!seq.audio_tracks[1].locked);
    }

    // Repeated descriptor toggles twice: net effect none.
    invoke(&mut project, "toggle-multiple-track-locks", &["v0,v0"]);
    assert!(project.active_sequence().unwrap().video_tracks[0].locked);
}

// ── Marker flow ────────────────────────────────────────────────

#[test]
fn marker_flow_select_rename_add() {
    let mut project = build_project();
    project.active_sequence_mut().unwrap().set_playhead(secs(7));

    invoke(&mut project, "select-current-marker", &[]);
    invoke(&mut project, "set-current-marker-name", &["b-roll"]);

    {
        let seq = project.active_sequence().unwrap();
        let markers = seq.video_tracks.last().unwrap();
        assert!(markers.clips[1].selected);
        assert_eq!(markers.clips[1].name, "b-roll");
        // The lower video track is not the marker track and stays untouched.
        assert_eq!(seq.video_tracks[0].clips[0].name, "REC_2153.mp4");
    }

    // Playhead at 12s sits past both markers; adding drops the template there.
    project.active_sequence_mut().unwrap().set_playhead(secs(12));
    invoke(&mut project, "add-custom-marker", &[]);

    let seq = project.active_sequence().unwrap();
    let markers = seq.video_tracks.last().unwrap();
    assert_eq!(markers.clip_count(), 3);
    let added = markers.clip_covering(secs(12)).unwrap();
    assert_eq!(added.name, MARKER_TEMPLATE_NAME);
    assert_eq!(added.range().duration(), secs(5));
}

#[test]
fn add_custom_marker_reports_missing_template() {
    let mut project = build_project();
    project.root_items.clear();

    let registry = Registry::new();
    let mut session = Session::new(&mut project);
    let err = registry
        .invoke(
            &mut session,
            &NoDialog,
            &Request::new("add-custom-marker", &[]),
        )
        .unwrap_err();
    assert!(err.to_string().contains("MARKER"));
}

#[test]
fn marker_track_lock_only_touches_top_video_track() {
    let mut project = build_project();

    invoke(&mut project, "toggle-lock-custom-marker-track", &[]);
    let seq = project.active_sequence().unwrap();
    assert!(seq.video_tracks.last().unwrap().locked);
    assert!(!seq.video_tracks[0].locked);
}

// ── Selection across the whole sequence ────────────────────────

#[test]
fn select_named_layer_full_scenario() {
    let mut project = build_project();
    {
        // Editor had everything selected.
        let seq = project.active_sequence_mut().unwrap();
        for track in seq
            .video_tracks
            .iter_mut()
            .chain(seq.audio_tracks.iter_mut())
        {
            for clip in &mut track.clips {
                clip.set_selected(true);
            }
        }
    }

    invoke(&mut project, "select-named-layer", &["REC_2153.mp4"]);

    let seq = project.active_sequence().unwrap();
    assert!(seq.video_tracks[0].clips[0].selected);
    assert!(!seq.video_tracks[0].clips[1].selected);
    assert!(seq.video_tracks[1].clips.iter().all(|c| !c.selected));
    assert!(seq.audio_tracks[0].clips.iter().all(|c| !c.selected));
}

// ── Project file round trip under panel mutations ──────────────

#[test]
fn mutated_project_survives_save_and_load() {
    let mut project = build_project();
    invoke(&mut project, "set-track-lock", &["v", "1", "true"]);
    invoke(&mut project, "mute-track", &["0"]);

    let file = ProjectFile::new(project);
    let json = file.to_json().unwrap();
    let loaded = ProjectFile::from_json(&json).unwrap();

    let mut reloaded = loaded.project;
    {
        let seq = reloaded.active_sequence().unwrap();
        assert!(seq.video_tracks[1].locked);
        assert!(seq.audio_tracks[0].muted);
    }
    assert_eq!(
        invoke(&mut reloaded, "get-track-lock", &["v", "1"]),
        Value::Bool(true)
    );
}
