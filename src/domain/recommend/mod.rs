//! Recommendation generation.
//!
//! Walks the scored reports, keeps everything below the configured
//! cutoffs, and returns the weakest areas first. Ordering is fully
//! deterministic: ascending by normalized score, ties broken by a fixed
//! priority over all scoreable areas (the ten VPC characteristics, then
//! the seven BMC dimensions, then the fit stages).

use serde::{Deserialize, Serialize};

use crate::domain::fit::{BusinessModelFit, FitReport};
use crate::domain::foundation::Thresholds;
use crate::domain::scoring::{BmcAttractivenessReport, Characteristic, Dimension, VpcQualityReport};

const PROBLEM_SOLUTION_LABEL: &str = "Problem-solution fit";
const BUSINESS_MODEL_LABEL: &str = "Business-model fit";

const PROBLEM_SOLUTION_ADVICE: &str =
    "Add relievers for the heaviest uncovered pains and creators for the most important uncovered gains; coverage weighs severity and importance.";
const BUSINESS_MODEL_ADVICE: &str =
    "Align the business model with the proposition: name the target segment among customer segments, cover the journey phases the jobs imply, and back the value map with key resources.";

// Tie-break positions after the 10 characteristics and 7 dimensions.
const PROBLEM_SOLUTION_PRIORITY: usize = 17;
const BUSINESS_MODEL_PRIORITY: usize = 18;

/// One improvement recommendation, weakest areas first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Label of the originating characteristic, dimension, or fit stage.
    pub area: String,
    /// The originating score mapped to 0.0-1.0; the sort key.
    pub normalized: f64,
    /// The rationale the scorer produced for the low score.
    pub rationale: String,
    /// Fixed improvement advice for the area.
    pub suggestion: String,
}

struct Candidate {
    priority: usize,
    normalized: f64,
    area: &'static str,
    rationale: String,
    suggestion: &'static str,
}

/// Generates recommendations for a full VPC assessment: quality
/// characteristics, attractiveness dimensions when a business model was
/// scored, and fit stages below the poor band.
pub fn recommend(
    vpc: &VpcQualityReport,
    bmc: Option<&BmcAttractivenessReport>,
    fit: &FitReport,
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    let mut candidates = Vec::new();
    collect_vpc(&mut candidates, vpc, thresholds);
    if let Some(bmc) = bmc {
        collect_bmc(&mut candidates, bmc, thresholds);
    }
    collect_fit(&mut candidates, fit, thresholds);
    finish(candidates, thresholds)
}

/// Generates recommendations for a standalone BMC assessment, where no
/// VPC quality report exists.
pub fn recommend_for_bmc(
    bmc: &BmcAttractivenessReport,
    alignment: Option<&BusinessModelFit>,
    thresholds: &Thresholds,
) -> Vec<Recommendation> {
    let mut candidates = Vec::new();
    collect_bmc(&mut candidates, bmc, thresholds);
    if let Some(alignment) = alignment {
        collect_business_model_stage(&mut candidates, alignment, thresholds);
    }
    finish(candidates, thresholds)
}

fn collect_vpc(candidates: &mut Vec<Candidate>, report: &VpcQualityReport, thresholds: &Thresholds) {
    for entry in &report.characteristics {
        if entry.score.value() < thresholds.recommendation_cutoff {
            candidates.push(Candidate {
                priority: characteristic_priority(entry.characteristic),
                normalized: entry.score.normalized(),
                area: entry.characteristic.label(),
                rationale: entry.rationale.clone(),
                suggestion: entry.characteristic.advice(),
            });
        }
    }
}

fn collect_bmc(
    candidates: &mut Vec<Candidate>,
    report: &BmcAttractivenessReport,
    thresholds: &Thresholds,
) {
    for entry in &report.dimensions {
        if entry.score.value() < thresholds.recommendation_cutoff {
            candidates.push(Candidate {
                priority: dimension_priority(entry.dimension),
                normalized: entry.score.normalized(),
                area: entry.dimension.label(),
                rationale: entry.rationale.clone(),
                suggestion: entry.dimension.advice(),
            });
        }
    }
}

fn collect_fit(candidates: &mut Vec<Candidate>, fit: &FitReport, thresholds: &Thresholds) {
    let psf = &fit.problem_solution;
    if psf.score < thresholds.fit_poor_below {
        candidates.push(Candidate {
            priority: PROBLEM_SOLUTION_PRIORITY,
            normalized: psf.score / 100.0,
            area: PROBLEM_SOLUTION_LABEL,
            rationale: psf.rationale.clone(),
            suggestion: PROBLEM_SOLUTION_ADVICE,
        });
    }
    if let Some(bmf) = &fit.business_model {
        collect_business_model_stage(candidates, bmf, thresholds);
    }
}

fn collect_business_model_stage(
    candidates: &mut Vec<Candidate>,
    bmf: &BusinessModelFit,
    thresholds: &Thresholds,
) {
    if bmf.score < thresholds.fit_poor_below {
        let rationale = format!(
            "business-model fit {:.1}/100: {}",
            bmf.score, bmf.segment_alignment.detail
        );
        candidates.push(Candidate {
            priority: BUSINESS_MODEL_PRIORITY,
            normalized: bmf.score / 100.0,
            area: BUSINESS_MODEL_LABEL,
            rationale,
            suggestion: BUSINESS_MODEL_ADVICE,
        });
    }
}

fn finish(mut candidates: Vec<Candidate>, thresholds: &Thresholds) -> Vec<Recommendation> {
    candidates.sort_by(|a, b| {
        a.normalized
            .total_cmp(&b.normalized)
            .then(a.priority.cmp(&b.priority))
    });
    candidates
        .into_iter()
        .take(thresholds.max_recommendations)
        .map(|c| Recommendation {
            area: c.area.to_string(),
            normalized: c.normalized,
            rationale: c.rationale,
            suggestion: c.suggestion.to_string(),
        })
        .collect()
}

fn characteristic_priority(characteristic: Characteristic) -> usize {
    Characteristic::ALL
        .iter()
        .position(|&c| c == characteristic)
        .unwrap_or(Characteristic::ALL.len())
}

fn dimension_priority(dimension: Dimension) -> usize {
    Characteristic::ALL.len()
        + Dimension::ALL
            .iter()
            .position(|&d| d == dimension)
            .unwrap_or(Dimension::ALL.len())
}
