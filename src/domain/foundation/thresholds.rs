//! Tunable cutoffs for fit classification and recommendation selection.

/// Thresholds shared by the fit analyzer and recommendation generator.
///
/// Values arrive from configuration; the defaults here are the documented
/// baseline and every analysis function takes the struct by reference, so
/// operators can tune cutoffs without touching scoring logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Sub-scores strictly below this value (1-5 scale) produce recommendations.
    pub recommendation_cutoff: u8,

    /// Maximum number of recommendations returned per assessment.
    pub max_recommendations: usize,

    /// Fit scores strictly below this value (0-100 scale) classify as poor.
    pub fit_poor_below: f64,

    /// Fit scores strictly above this value (0-100 scale) classify as strong.
    pub fit_strong_above: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            recommendation_cutoff: 3,
            max_recommendations: 5,
            fit_poor_below: 40.0,
            fit_strong_above: 70.0,
        }
    }
}
