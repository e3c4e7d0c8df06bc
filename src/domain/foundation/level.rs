//! Level value object (1-5 ordinal scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value on the shared 1-5 ordinal scale used for importance, severity,
/// frequency, and satisfaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u8);

impl Level {
    /// Lowest level (1).
    pub const MIN: Self = Self(1);

    /// Highest level (5).
    pub const MAX: Self = Self(5);

    /// Creates a new Level, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    /// Creates a Level, returning error if out of range. The field name
    /// flows into the error so callers validating several levels per item
    /// produce precise messages.
    pub fn try_new(field: &str, value: u8) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(field, 1, 5, value as i32));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns true for the top half of the scale (4 or 5).
    pub fn is_high(&self) -> bool {
        self.0 >= 4
    }

    /// Returns true for the bottom half of the scale (1 or 2).
    pub fn is_low(&self) -> bool {
        self.0 <= 2
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Very Low",
            2 => "Low",
            3 => "Moderate",
            4 => "High",
            _ => "Very High",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
