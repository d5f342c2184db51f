//! TrackDeck Panel — named automation operations over the host graph.
//!
//! Every exposed operation is stateless across calls: it re-reads the
//! project graph through an explicitly passed [`Session`] and performs at
//! most one host mutation (batch lock operations apply one mutation per
//! selector, in listed order).

pub mod error;
pub mod export;
pub mod marker;
pub mod ops;
pub mod registry;
pub mod selector;
pub mod session;

pub use error::PanelError;
pub use export::SaveDialog;
pub use registry::{Registry, Request, Response};
pub use selector::TrackSelector;
pub use session::Session;
