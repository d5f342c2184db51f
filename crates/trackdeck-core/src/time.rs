//! Time representation for the host tick unit
//!
//! The host timebase is an integer tick count. Interval tests are half-open
//! (start inclusive, end exclusive); seconds are derived with rational
//! arithmetic so the export path never touches floating point.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Number of host ticks in one second.
pub const TICKS_PER_SECOND: i64 = 254_016_000_000;

/// A point in sequence time, in host ticks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ticks(pub i64);

impl Ticks {
    /// Zero time constant.
    pub const ZERO: Self = Self(0);

    /// Build from whole seconds.
    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * TICKS_PER_SECOND)
    }

    /// Exact seconds as a rational.
    #[inline]
    pub fn to_seconds(self) -> Rational64 {
        Rational64::new(self.0, TICKS_PER_SECOND)
    }

    /// Whole seconds, truncated toward zero.
    #[inline]
    pub fn to_seconds_floor(self) -> i64 {
        self.to_seconds().to_integer()
    }

    /// Check if this time is zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Ticks {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Ticks {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Ticks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}t", self.0)
    }
}

/// A half-open tick interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRange {
    /// Start (inclusive)
    pub start: Ticks,
    /// End (exclusive)
    pub end: Ticks,
}

impl TickRange {
    /// Create a new range from start and end.
    #[inline]
    pub fn new(start: Ticks, end: Ticks) -> Self {
        Self { start, end }
    }

    /// Duration of the range.
    #[inline]
    pub fn duration(self) -> Ticks {
        self.end - self.start
    }

    /// Check if a position is within this range. A position exactly at
    /// `end` is outside — it belongs to whatever starts there.
    #[inline]
    pub fn contains(self, position: Ticks) -> bool {
        position >= self.start && position < self.end
    }

    /// Check if two ranges overlap.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Frame rate as a rational pair (e.g. 30000/1001 for 29.97 fps).
///
/// Carried as sequence metadata; no panel operation does frame math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl FrameRate {
    /// Create a new frame rate.
    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Frames per second as f64.
    #[inline]
    pub fn to_fps_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Duration of a single frame, in host ticks.
    #[inline]
    pub fn frame_duration(self) -> Ticks {
        Ticks(TICKS_PER_SECOND * self.denominator as i64 / self.numerator as i64)
    }

    pub const FPS_24: Self = Self::new(24, 1);
    pub const FPS_25: Self = Self::new(25, 1);
    pub const FPS_29_97: Self = Self::new(30000, 1001);
    pub const FPS_30: Self = Self::new(30, 1);
    pub const FPS_60: Self = Self::new(60, 1);
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::FPS_25
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fps = self.to_fps_f64();
        if (fps - fps.round()).abs() < 0.001 {
            write!(f, "{} fps", fps.round() as u32)
        } else {
            write!(f, "{:.3} fps", fps)
        }
    }
}
