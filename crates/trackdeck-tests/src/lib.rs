//! Integration test crate for TrackDeck.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the timeline and panel crates to verify they work
//! together the way the live panel drives them.

#[cfg(test)]
mod panel;

#[cfg(test)]
mod export;
