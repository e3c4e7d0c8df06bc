//! The ten quality characteristics of a great value proposition.

use serde::{Deserialize, Serialize};

/// One of the ten characteristics a value proposition is scored on.
///
/// The order of [`Characteristic::ALL`] is the report order and the
/// tie-break order for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    Completeness,
    ImportanceFocus,
    UnsatisfiedFocus,
    Convergence,
    JobTypeCoverage,
    SuccessMetricAlignment,
    HighImpactFocus,
    Differentiation,
    Outperformance,
    DifficultToCopy,
}

impl Characteristic {
    /// All ten characteristics, in report order.
    pub const ALL: [Characteristic; 10] = [
        Characteristic::Completeness,
        Characteristic::ImportanceFocus,
        Characteristic::UnsatisfiedFocus,
        Characteristic::Convergence,
        Characteristic::JobTypeCoverage,
        Characteristic::SuccessMetricAlignment,
        Characteristic::HighImpactFocus,
        Characteristic::Differentiation,
        Characteristic::Outperformance,
        Characteristic::DifficultToCopy,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Characteristic::Completeness => "Completeness",
            Characteristic::ImportanceFocus => "Importance focus",
            Characteristic::UnsatisfiedFocus => "Unsatisfied focus",
            Characteristic::Convergence => "Convergence",
            Characteristic::JobTypeCoverage => "Job-type coverage",
            Characteristic::SuccessMetricAlignment => "Success-metric alignment",
            Characteristic::HighImpactFocus => "High-impact focus",
            Characteristic::Differentiation => "Differentiation",
            Characteristic::Outperformance => "Outperformance",
            Characteristic::DifficultToCopy => "Difficult to copy",
        }
    }

    /// Fixed improvement advice attached to low scores on this characteristic.
    pub fn advice(&self) -> &'static str {
        match self {
            Characteristic::Completeness => {
                "Populate every canvas section and repair dangling references so each reliever and creator points at recorded items."
            }
            Characteristic::ImportanceFocus => {
                "Shift relievers and creators toward the jobs, pains, and gains the customer rates 4 or 5."
            }
            Characteristic::UnsatisfiedFocus => {
                "Target jobs the customer is still dissatisfied with instead of jobs existing solutions already serve well."
            }
            Characteristic::Convergence => {
                "Concentrate the offering: fewer products, each relieving or creating several profile items."
            }
            Characteristic::JobTypeCoverage => {
                "Capture social and emotional jobs alongside functional ones; customers rarely buy on function alone."
            }
            Characteristic::SuccessMetricAlignment => {
                "Link every reliever to a recorded pain and every creator to a recorded gain so claims stay measurable."
            }
            Characteristic::HighImpactFocus => {
                "Prune low-importance items or raise the share of severe, frequent pains the canvas works on."
            }
            Characteristic::Differentiation => {
                "Reword overlapping relievers and creators until each names a distinct mechanism."
            }
            Characteristic::Outperformance => {
                "Stack more than one reliever or creator on the pains and gains that decide the purchase."
            }
            Characteristic::DifficultToCopy => {
                "Add digital, service, or financial elements that competitors cannot replicate by buying the same inputs."
            }
        }
    }
}
