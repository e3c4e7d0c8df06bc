//! Score value object (1-5 sub-score scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scored result on the 1-5 scale. Every scoring path bottoms out at 1;
/// there is no zero, so an empty canvas still produces a full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest score (1).
    pub const MIN: Self = Self(1);

    /// Highest score (5).
    pub const MAX: Self = Self(5);

    /// Creates a new Score, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Maps a fraction onto the scale: `1 + round(4 * numerator / denominator)`,
    /// rounding half up. A zero denominator scores 1. Integer arithmetic
    /// keeps the result platform-stable and monotone in the numerator.
    pub fn from_ratio(numerator: usize, denominator: usize) -> Self {
        if denominator == 0 {
            return Self::MIN;
        }
        let bump = (8 * numerator + denominator) / (2 * denominator);
        Self::new(1 + bump as u8)
    }

    /// Adds bonus points, capping at 5.
    pub fn saturating_add(self, points: u8) -> Self {
        Self::new(self.0.saturating_add(points))
    }

    /// Subtracts penalty points, flooring at 1.
    pub fn saturating_sub(self, points: u8) -> Self {
        Self(self.0.saturating_sub(points).max(1))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the score as a fraction of the maximum (0.2 to 1.0).
    pub fn normalized(&self) -> f64 {
        f64::from(self.0) / 5.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
