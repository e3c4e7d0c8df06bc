//! Scoring and recommendation threshold configuration.

use serde::Deserialize;

use crate::domain::foundation::Thresholds;

use super::error::ValidationError;

/// Tunable analysis cutoffs.
///
/// Every field is optional in the environment; the defaults reproduce the
/// documented baseline thresholds.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Sub-scores strictly below this value (1-5) generate recommendations
    #[serde(default = "default_recommendation_cutoff")]
    pub recommendation_cutoff: u8,

    /// Maximum number of recommendations returned per assessment
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// Fit scores strictly below this value (0-100) classify as poor
    #[serde(default = "default_fit_poor_below")]
    pub fit_poor_below: f64,

    /// Fit scores strictly above this value (0-100) classify as strong
    #[serde(default = "default_fit_strong_above")]
    pub fit_strong_above: f64,
}

impl ScoringConfig {
    /// Validate scoring configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.recommendation_cutoff) {
            return Err(ValidationError::InvalidRecommendationCutoff);
        }
        if self.max_recommendations == 0 {
            return Err(ValidationError::InvalidMaxRecommendations);
        }
        if self.fit_poor_below < 0.0
            || self.fit_strong_above > 100.0
            || self.fit_poor_below >= self.fit_strong_above
        {
            return Err(ValidationError::InvalidFitBands);
        }
        Ok(())
    }

    /// Convert into the domain threshold struct consumed by the analyzers
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            recommendation_cutoff: self.recommendation_cutoff,
            max_recommendations: self.max_recommendations,
            fit_poor_below: self.fit_poor_below,
            fit_strong_above: self.fit_strong_above,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            recommendation_cutoff: default_recommendation_cutoff(),
            max_recommendations: default_max_recommendations(),
            fit_poor_below: default_fit_poor_below(),
            fit_strong_above: default_fit_strong_above(),
        }
    }
}

fn default_recommendation_cutoff() -> u8 {
    Thresholds::default().recommendation_cutoff
}

fn default_max_recommendations() -> usize {
    Thresholds::default().max_recommendations
}

fn default_fit_poor_below() -> f64 {
    Thresholds::default().fit_poor_below
}

fn default_fit_strong_above() -> f64 {
    Thresholds::default().fit_strong_above
}
