//! Operation registry — maps request names to panel handlers.
//!
//! The local interface is stringly typed: a request carries an operation
//! name and positional string arguments (booleans arrive as text). All
//! argument decoding happens here, at the boundary; the operations
//! themselves take parsed values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use trackdeck_timeline::TrackKind;

use crate::error::{PanelError, Result};
use crate::export::{self, SaveDialog};
use crate::marker;
use crate::ops;
use crate::selector::{parse_selector_list, TrackSelector};
use crate::session::Session;

/// A request as received from the local interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Operation name, e.g. `toggle-track-lock`.
    pub op: String,
    /// Positional string arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Request {
    pub fn new(op: impl Into<String>, args: &[&str]) -> Self {
        Self {
            op: op.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A response line written back to the local interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok(result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }
}

type Handler = fn(&mut Session, &Args, &dyn SaveDialog) -> Result<Value>;

/// Positional argument reader.
struct Args<'a>(&'a [String]);

impl<'a> Args<'a> {
    fn get(&self, index: usize, name: &'static str) -> Result<&'a str> {
        self.0
            .get(index)
            .map(String::as_str)
            .ok_or(PanelError::MissingArgument(name))
    }
}

fn parse_index(name: &'static str, value: &str) -> Result<usize> {
    value.parse().map_err(|_| PanelError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

fn parse_kind(name: &'static str, value: &str) -> Result<TrackKind> {
    match value {
        "v" | "video" => Ok(TrackKind::Video),
        "a" | "audio" => Ok(TrackKind::Audio),
        _ => Err(PanelError::InvalidArgument {
            name,
            value: value.to_string(),
        }),
    }
}

/// Boolean-as-text: exactly `true` or `false`.
fn parse_bool(name: &'static str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(PanelError::InvalidArgument {
            name,
            value: value.to_string(),
        }),
    }
}

fn selector_args(args: &Args) -> Result<TrackSelector> {
    let kind = parse_kind("kind", args.get(0, "kind")?)?;
    let index = parse_index("track", args.get(1, "track")?)?;
    Ok(TrackSelector::new(kind, index))
}

/// Registry of the panel's exposed operations.
pub struct Registry {
    handlers: HashMap<&'static str, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Handler> = HashMap::new();
        handlers.insert("mute-track", op_mute_track);
        handlers.insert("select-named-layer", op_select_named_layer);
        handlers.insert("toggle-track-lock", op_toggle_track_lock);
        handlers.insert("set-track-lock", op_set_track_lock);
        handlers.insert("get-track-lock", op_get_track_lock);
        handlers.insert("toggle-multiple-track-locks", op_toggle_multiple_track_locks);
        handlers.insert("set-multiple-track-locks", op_set_multiple_track_locks);
        handlers.insert("select-current-marker", op_select_current_marker);
        handlers.insert("set-current-marker-name", op_set_current_marker_name);
        handlers.insert("add-custom-marker", op_add_custom_marker);
        handlers.insert(
            "toggle-lock-custom-marker-track",
            op_toggle_lock_custom_marker_track,
        );
        handlers.insert("save-custom-markers", op_save_custom_markers);
        Self { handlers }
    }

    /// Check if an operation name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// All registered operation names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch a request against the session.
    pub fn invoke(
        &self,
        session: &mut Session,
        dialog: &dyn SaveDialog,
        request: &Request,
    ) -> Result<Value> {
        let handler = self
            .handlers
            .get(request.op.as_str())
            .ok_or_else(|| PanelError::UnknownOperation(request.op.clone()))?;
        debug!(op = %request.op, "dispatching");
        handler(session, &Args(&request.args), dialog)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// ── Handlers ────────────────────────────────────────────────────

fn op_mute_track(session: &mut Session, args: &Args, _: &dyn SaveDialog) -> Result<Value> {
    let index = parse_index("track", args.get(0, "track")?)?;
    ops::mute_track(session, index)?;
    Ok(Value::Null)
}

fn op_select_named_layer(session: &mut Session, args: &Args, _: &dyn SaveDialog) -> Result<Value> {
    ops::select_named_layer(session, args.get(0, "name")?)?;
    Ok(Value::Null)
}

fn op_toggle_track_lock(session: &mut Session, args: &Args, _: &dyn SaveDialog) -> Result<Value> {
    ops::toggle_track_lock(session, selector_args(args)?)?;
    Ok(Value::Null)
}

fn op_set_track_lock(session: &mut Session, args: &Args, _: &dyn SaveDialog) -> Result<Value> {
    let selector = selector_args(args)?;
    let locked = parse_bool("locked", args.get(2, "locked")?)?;
    ops::set_track_lock(session, selector, locked)?;
    Ok(Value::Null)
}

fn op_get_track_lock(session: &mut Session, args: &Args, _: &dyn SaveDialog) -> Result<Value> {
    let selector = selector_args(args)?;
    // A query cannot silently no-op: an out-of-range index is an error.
    let locked = ops::track_lock(session, selector)?.ok_or(PanelError::InvalidArgument {
        name: "track",
        value: selector.index.to_string(),
    })?;
    Ok(Value::Bool(locked))
}

fn op_toggle_multiple_track_locks(
    session: &mut Session,
    args: &Args,
    _: &dyn SaveDialog,
) -> Result<Value> {
    let selectors = parse_selector_list(args.get(0, "tracks")?)?;
    ops::toggle_multiple_track_locks(session, &selectors)?;
    Ok(Value::Null)
}

fn op_set_multiple_track_locks(
    session: &mut Session,
    args: &Args,
    _: &dyn SaveDialog,
) -> Result<Value> {
    let selectors = parse_selector_list(args.get(0, "tracks")?)?;
    let locked = parse_bool("locked", args.get(1, "locked")?)?;
    ops::set_multiple_track_locks(session, &selectors, locked)?;
    Ok(Value::Null)
}

fn op_select_current_marker(session: &mut Session, _: &Args, _: &dyn SaveDialog) -> Result<Value> {
    marker::select_current_marker(session)?;
    Ok(Value::Null)
}

fn op_set_current_marker_name(
    session: &mut Session,
    args: &Args,
    _: &dyn SaveDialog,
) -> Result<Value> {
    marker::set_current_marker_name(session, args.get(0, "name")?)?;
    Ok(Value::Null)
}

fn op_add_custom_marker(session: &mut Session, _: &Args, _: &dyn SaveDialog) -> Result<Value> {
    marker::add_custom_marker(session)?;
    Ok(Value::Null)
}

fn op_toggle_lock_custom_marker_track(
    session: &mut Session,
    _: &Args,
    _: &dyn SaveDialog,
) -> Result<Value> {
    marker::toggle_lock_marker_track(session)?;
    Ok(Value::Null)
}

fn op_save_custom_markers(
    session: &mut Session,
    _: &Args,
    dialog: &dyn SaveDialog,
) -> Result<Value> {
    match export::save_custom_markers(session, dialog)? {
        Some(path) => Ok(Value::String(path.display().to_string())),
        None => Ok(Value::Null),
    }
}
