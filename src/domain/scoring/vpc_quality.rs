//! VPC quality scoring - the ten characteristics, each 1-5.
//!
//! Every characteristic function is pure and total over a constructed
//! canvas: it returns a score and a rationale computed from the same
//! counts, and it never fails. Semantic gaps (empty lists, dangling
//! references) lower scores and show up in rationale text instead of
//! erroring.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::canvas::{JobType, ProductCategory, ValueCanvas, VpcIndex};
use crate::domain::foundation::Score;

use super::Characteristic;

/// A pain is high-impact when severity x frequency reaches this weight
/// (both on the top half of the scale).
pub const HIGH_IMPACT_PAIN_WEIGHT: u16 = 16;

/// One scored characteristic and the computation behind the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicScore {
    pub characteristic: Characteristic,
    pub score: Score,
    pub rationale: String,
}

/// Quality report over all ten characteristics, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcQualityReport {
    /// Sum of the ten sub-scores (10-50).
    pub total: u8,
    pub characteristics: Vec<CharacteristicScore>,
}

impl VpcQualityReport {
    /// Lowest possible total (every characteristic at the floor).
    pub const MIN_TOTAL: u8 = 10;

    /// Highest possible total.
    pub const MAX_TOTAL: u8 = 50;

    /// Looks up a characteristic's entry.
    pub fn characteristic(&self, characteristic: Characteristic) -> Option<&CharacteristicScore> {
        self.characteristics
            .iter()
            .find(|c| c.characteristic == characteristic)
    }

    /// The lowest-scoring entry, earliest in report order on ties.
    pub fn weakest(&self) -> Option<&CharacteristicScore> {
        self.characteristics.iter().min_by_key(|c| c.score)
    }
}

/// Scores a canvas against the ten characteristics of great value
/// propositions. Deterministic: the same canvas always produces the
/// same report.
pub fn score_vpc(canvas: &ValueCanvas) -> VpcQualityReport {
    let index = VpcIndex::new(canvas);

    let characteristics: Vec<CharacteristicScore> = Characteristic::ALL
        .iter()
        .map(|&characteristic| {
            let (score, rationale) = score_characteristic(characteristic, canvas, &index);
            CharacteristicScore {
                characteristic,
                score,
                rationale,
            }
        })
        .collect();

    let total = characteristics.iter().map(|c| c.score.value()).sum();

    VpcQualityReport {
        total,
        characteristics,
    }
}

fn score_characteristic(
    characteristic: Characteristic,
    canvas: &ValueCanvas,
    index: &VpcIndex<'_>,
) -> (Score, String) {
    match characteristic {
        Characteristic::Completeness => completeness(canvas, index),
        Characteristic::ImportanceFocus => importance_focus(canvas, index),
        Characteristic::UnsatisfiedFocus => unsatisfied_focus(canvas, index),
        Characteristic::Convergence => convergence(canvas, index),
        Characteristic::JobTypeCoverage => job_type_coverage(canvas),
        Characteristic::SuccessMetricAlignment => success_metric_alignment(canvas, index),
        Characteristic::HighImpactFocus => high_impact_focus(canvas),
        Characteristic::Differentiation => differentiation(canvas),
        Characteristic::Outperformance => outperformance(index),
        Characteristic::DifficultToCopy => difficult_to_copy(canvas),
    }
}

/// Populated sections drive the base score; the top score additionally
/// requires every reference to resolve and every reliever/creator to
/// reach at least one recorded item.
fn completeness(canvas: &ValueCanvas, index: &VpcIndex<'_>) -> (Score, String) {
    let populated = canvas.populated_sections();
    let base = Score::from_ratio(populated, 6);

    let unlinked = canvas
        .relievers()
        .iter()
        .filter(|r| !r.relieves.iter().any(|id| index.pain(id).is_some()))
        .count()
        + canvas
            .creators()
            .iter()
            .filter(|c| !c.creates.iter().any(|id| index.gain(id).is_some()))
            .count();

    let fully_referenced = index.is_fully_resolved() && unlinked == 0;
    let score = if fully_referenced {
        base
    } else {
        base.min(Score::new(4))
    };

    let mut rationale = format!("{populated} of 6 sections populated");
    if populated == 6 && fully_referenced {
        rationale.push_str("; every reliever and creator reference resolves");
    }
    if !index.is_fully_resolved() {
        let shown: Vec<String> = index
            .unresolved()
            .iter()
            .take(3)
            .map(|u| u.describe())
            .collect();
        rationale.push_str(&format!(
            "; {} dangling reference{}: {}",
            index.unresolved().len(),
            plural(index.unresolved().len()),
            shown.join(", ")
        ));
    }
    if unlinked > 0 {
        let entries = canvas.relievers().len() + canvas.creators().len();
        rationale.push_str(&format!(
            "; {unlinked} of {entries} value-map entries resolve nothing recorded"
        ));
    }
    (score, rationale)
}

/// Fraction of targeted items (addressed pains, created gains, all
/// jobs) sitting in the top half of the importance/severity scale.
fn importance_focus(canvas: &ValueCanvas, index: &VpcIndex<'_>) -> (Score, String) {
    let mut high = 0usize;
    let mut total = 0usize;

    for pain in index.addressed_pains() {
        total += 1;
        if pain.severity.is_high() {
            high += 1;
        }
    }
    for gain in index.created_gains() {
        total += 1;
        if gain.importance.is_high() {
            high += 1;
        }
    }
    for job in canvas.jobs() {
        total += 1;
        if job.importance.is_high() {
            high += 1;
        }
    }

    if total == 0 {
        return (
            Score::MIN,
            "no jobs recorded and no pains or gains addressed".to_string(),
        );
    }
    (
        Score::from_ratio(high, total),
        format!("{high} of {total} targeted items rate 4 or higher on importance or severity"),
    )
}

/// Share of jobs still under-satisfied, with a penalty when reliever
/// effort flows to jobs the customer already rates as well served.
fn unsatisfied_focus(canvas: &ValueCanvas, index: &VpcIndex<'_>) -> (Score, String) {
    if canvas.jobs().is_empty() {
        return (Score::MIN, "no customer jobs recorded".to_string());
    }

    let under = canvas
        .jobs()
        .iter()
        .filter(|j| !j.satisfaction.is_high())
        .count();
    let satisfied_but_worked = canvas
        .jobs()
        .iter()
        .filter(|job| {
            job.satisfaction.is_high()
                && canvas.pains().iter().any(|pain| {
                    index.pain_is_addressed(&pain.id) && pain.related_jobs.contains(&job.id)
                })
        })
        .count();

    let base = Score::from_ratio(under, canvas.jobs().len());
    let score = if satisfied_but_worked > 0 {
        base.saturating_sub(1)
    } else {
        base
    };

    let mut rationale = format!(
        "{under} of {} jobs remain under-satisfied (satisfaction 3 or below)",
        canvas.jobs().len()
    );
    if satisfied_but_worked > 0 {
        rationale.push_str(&format!(
            "; {satisfied_but_worked} well-satisfied job{} still absorb reliever effort",
            plural(satisfied_but_worked)
        ));
    }
    (score, rationale)
}

/// Concentration of covered pains/gains per delivering product. A few
/// products each covering several items beats many products covering
/// one item each.
fn convergence(canvas: &ValueCanvas, index: &VpcIndex<'_>) -> (Score, String) {
    let targets = index.distinct_addressed_count();
    if targets == 0 {
        return (
            Score::MIN,
            "no pains or gains are addressed by the value map".to_string(),
        );
    }

    let delivering = match index.linked_product_count() {
        0 => canvas.products().len(),
        linked => linked,
    };
    if delivering == 0 {
        return (
            Score::new(2),
            format!("{targets} targets covered but no products recorded to deliver them"),
        );
    }

    let concentration = targets as f64 / delivering as f64;
    let score = if concentration >= 3.0 {
        5
    } else if concentration >= 2.0 {
        4
    } else if concentration >= 1.0 {
        3
    } else {
        2
    };
    (
        Score::new(score),
        format!(
            "{targets} distinct pains/gains covered across {delivering} product{} ({concentration:.1} per product)",
            plural(delivering)
        ),
    )
}

/// Presence of all three job types. Functional-only canvases cap at 3.
fn job_type_coverage(canvas: &ValueCanvas) -> (Score, String) {
    let present: Vec<JobType> = JobType::ALL
        .iter()
        .copied()
        .filter(|t| canvas.jobs().iter().any(|j| j.job_type == *t))
        .collect();

    if present.is_empty() {
        return (Score::MIN, "no customer jobs recorded".to_string());
    }

    let score = match present.len() {
        3 => 5,
        2 => 4,
        _ => 3,
    };
    let mut rationale = format!("{} of 3 job types present", present.len());
    if present.len() == 3 {
        rationale.push_str(" (functional, social, and emotional all covered)");
    } else {
        let missing: Vec<&str> = JobType::ALL
            .iter()
            .filter(|t| !present.contains(t))
            .map(|t| t.label())
            .collect();
        rationale.push_str(&format!("; missing {}", missing.join(" and ")));
    }
    (Score::new(score), rationale)
}

/// A reliever or creator is aligned when at least one of its references
/// resolves to a recorded pain or gain.
fn success_metric_alignment(canvas: &ValueCanvas, index: &VpcIndex<'_>) -> (Score, String) {
    let total = canvas.relievers().len() + canvas.creators().len();
    if total == 0 {
        return (
            Score::MIN,
            "no relievers or creators recorded".to_string(),
        );
    }

    let aligned = canvas
        .relievers()
        .iter()
        .filter(|r| r.relieves.iter().any(|id| index.pain(id).is_some()))
        .count()
        + canvas
            .creators()
            .iter()
            .filter(|c| c.creates.iter().any(|id| index.gain(id).is_some()))
            .count();

    (
        Score::from_ratio(aligned, total),
        format!("{aligned} of {total} relievers and creators tie to a recorded pain or gain"),
    )
}

/// Share of profile items that are high-impact: important jobs, severe
/// and frequent pains, important gains.
fn high_impact_focus(canvas: &ValueCanvas) -> (Score, String) {
    let total = canvas.jobs().len() + canvas.pains().len() + canvas.gains().len();
    if total == 0 {
        return (Score::MIN, "no jobs, pains, or gains recorded".to_string());
    }

    let impact = canvas
        .jobs()
        .iter()
        .filter(|j| j.importance.is_high())
        .count()
        + canvas
            .pains()
            .iter()
            .filter(|p| p.weight() >= HIGH_IMPACT_PAIN_WEIGHT)
            .count()
        + canvas
            .gains()
            .iter()
            .filter(|g| g.importance.is_high())
            .count();

    (
        Score::from_ratio(impact, total),
        format!(
            "{impact} of {total} profile items are high-impact (importance 4+, or severity x frequency >= {HIGH_IMPACT_PAIN_WEIGHT})"
        ),
    )
}

/// Distinctness of reliever/creator descriptions after normalization.
/// Duplicated wording signals undifferentiated mechanisms.
fn differentiation(canvas: &ValueCanvas) -> (Score, String) {
    let total = canvas.relievers().len() + canvas.creators().len();
    if total == 0 {
        return (
            Score::MIN,
            "no relievers or creators recorded".to_string(),
        );
    }

    let distinct: BTreeSet<String> = canvas
        .relievers()
        .iter()
        .map(|r| normalize(&r.description))
        .chain(canvas.creators().iter().map(|c| normalize(&c.description)))
        .collect();

    (
        Score::from_ratio(distinct.len(), total),
        format!(
            "{} distinct mechanisms across {total} relievers and creators",
            distinct.len()
        ),
    )
}

/// Reference depth: resolved references per distinct target. Several
/// mechanisms attacking the same pain or gain signal substantial
/// outperformance rather than thin coverage.
fn outperformance(index: &VpcIndex<'_>) -> (Score, String) {
    let resolved = index.resolved_reference_count();
    if resolved == 0 {
        return (
            Score::MIN,
            "no resolved reliever or creator references".to_string(),
        );
    }

    let distinct = index.distinct_addressed_count();
    // depth >= 1.0 whenever anything resolves
    let depth = resolved as f64 / distinct as f64;
    let score = if depth >= 2.0 {
        5
    } else if depth >= 1.5 {
        4
    } else {
        3
    };
    (
        Score::new(score),
        format!("{resolved} resolved references over {distinct} distinct targets (depth {depth:.1})"),
    )
}

/// Copy barriers read off the product mix: digital, service, and
/// financial offerings are harder to replicate than physical ones, and
/// category spread compounds that.
fn difficult_to_copy(canvas: &ValueCanvas) -> (Score, String) {
    if canvas.products().is_empty() {
        return (Score::MIN, "no products or services recorded".to_string());
    }

    let categories: BTreeSet<ProductCategory> =
        canvas.products().iter().map(|p| p.category).collect();
    let digital = categories.contains(&ProductCategory::Digital);
    let intangible = categories.contains(&ProductCategory::Service)
        || categories.contains(&ProductCategory::Financial);

    let mut score = Score::new(2);
    let mut barriers: Vec<&str> = Vec::new();
    if digital {
        score = score.saturating_add(1);
        barriers.push("digital offering");
    }
    if intangible {
        score = score.saturating_add(1);
        barriers.push("service or financial offering");
    }
    if categories.len() >= 3 {
        score = score.saturating_add(1);
        barriers.push("3+ delivery categories");
    }

    let rationale = if barriers.is_empty() {
        format!(
            "{} product{} but only physical delivery; little stands in a copier's way",
            canvas.products().len(),
            plural(canvas.products().len())
        )
    } else {
        format!("copy barriers present: {}", barriers.join(", "))
    };
    (score, rationale)
}

fn normalize(description: &str) -> String {
    description.trim().to_lowercase()
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
