//! Track selectors — the two-character `a0`/`v1` descriptor format.
//!
//! Batch lock operations receive comma-separated descriptors. Each is
//! exactly a kind letter plus one decimal digit; indices above 9 are not
//! representable and are rejected along with every other malformed form.

use smallvec::SmallVec;
use trackdeck_timeline::TrackKind;

use crate::error::{PanelError, Result};

/// A parsed track descriptor: kind plus 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackSelector {
    pub kind: TrackKind,
    pub index: usize,
}

impl TrackSelector {
    pub fn new(kind: TrackKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Parsed descriptor batch. Track counts are double-digit at most, so the
/// batch almost always stays inline.
pub type SelectorList = SmallVec<[TrackSelector; 8]>;

/// Parse a single descriptor (`v3`, `a0`).
pub fn parse_selector(text: &str) -> Result<TrackSelector> {
    let mut chars = text.chars();
    let (kind_ch, digit_ch) = match (chars.next(), chars.next(), chars.next()) {
        (Some(kind), Some(digit), None) => (kind, digit),
        _ => return Err(PanelError::Selector(text.to_string())),
    };

    let kind = match kind_ch {
        'v' => TrackKind::Video,
        'a' => TrackKind::Audio,
        _ => return Err(PanelError::Selector(text.to_string())),
    };
    let index = digit_ch
        .to_digit(10)
        .ok_or_else(|| PanelError::Selector(text.to_string()))? as usize;

    Ok(TrackSelector::new(kind, index))
}

/// Parse a comma-separated descriptor list. The whole list is rejected on
/// the first malformed entry, before anything is applied.
pub fn parse_selector_list(text: &str) -> Result<SelectorList> {
    text.split(',').map(parse_selector).collect()
}
