//! TrackDeck — automation panel for a timeline project.
//!
//! Loads a project file, serves panel requests over stdin/stdout (one JSON
//! object per line, strictly serialized), and writes the project back on
//! end of input.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rfd::FileDialog;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use trackdeck_panel::{Registry, Request, Response, SaveDialog, Session};
use trackdeck_timeline::ProjectFile;

/// Native save prompt for the marker export.
struct NativeSaveDialog;

impl SaveDialog for NativeSaveDialog {
    fn pick_save_path(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save custom markers")
            .add_filter("Text", &["txt"])
            .save_file()
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        bail!("usage: trackdeck <project.json>");
    };

    let mut file = ProjectFile::load_from_file(&path)
        .with_context(|| format!("failed to load project {}", path.display()))?;
    info!(project = %file.project.name, "project loaded");

    let registry = Registry::new();
    let dialog = NativeSaveDialog;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                let mut session = Session::new(&mut file.project);
                match registry.invoke(&mut session, &dialog, &request) {
                    Ok(result) => Response::ok(result),
                    Err(err) => {
                        warn!(op = %request.op, %err, "operation failed");
                        Response::error(err.to_string())
                    }
                }
            }
            Err(err) => Response::error(format!("bad request: {err}")),
        };

        serde_json::to_writer(&mut stdout, &response)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    file.save_to_file(&path)
        .with_context(|| format!("failed to save project {}", path.display()))?;
    info!("project saved");
    Ok(())
}
