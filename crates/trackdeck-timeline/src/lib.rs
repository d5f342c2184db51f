//! TrackDeck Timeline - the host object graph
//!
//! The in-memory project/sequence/track/clip model the panel operates on,
//! together with the mutation primitives the panel is allowed to use
//! (set-mute, set-lock, set-selected, rename, overwrite-clip) and the
//! versioned project-file persistence that stands in for a live host.

pub mod clip;
pub mod project;
pub mod serialization;
pub mod track;

pub use clip::Clip;
pub use project::{Project, ProjectItem, Sequence};
pub use serialization::ProjectFile;
pub use track::{Track, TrackKind};
