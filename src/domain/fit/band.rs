//! Fit score bands.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Thresholds;

/// Qualitative band for a 0-100 fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    Poor,
    Moderate,
    Strong,
}

impl FitBand {
    /// Classifies a fit score against the configured band edges: strictly
    /// below the poor cutoff is poor, strictly above the strong cutoff is
    /// strong, everything between (edges included) is moderate.
    pub fn classify(score: f64, thresholds: &Thresholds) -> Self {
        if score < thresholds.fit_poor_below {
            FitBand::Poor
        } else if score > thresholds.fit_strong_above {
            FitBand::Strong
        } else {
            FitBand::Moderate
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            FitBand::Poor => "Poor",
            FitBand::Moderate => "Moderate",
            FitBand::Strong => "Strong",
        }
    }
}
