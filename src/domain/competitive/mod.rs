//! Competitive comparison over value-map focus areas.
//!
//! Competitors are described by the pains they relieve and the gains
//! they create, as free text. Comparison runs on normalized description
//! sets, so ordering and casing in the input never change the result.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::canvas::{ProductCategory, ValueCanvas};
use crate::domain::foundation::ValidationError;

/// A competitor claims a threat when it overlaps on strictly more than
/// this many focus areas.
pub const THREAT_OVERLAP_THRESHOLD: usize = 3;

/// A competitor's claimed focus areas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompetitorProfile {
    pub name: String,
    /// Pains the competitor claims to relieve, as descriptions.
    pub pain_focus: Vec<String>,
    /// Gains the competitor claims to create, as descriptions.
    pub gain_focus: Vec<String>,
}

impl CompetitorProfile {
    /// Creates a profile, rejecting a blank competitor name.
    pub fn new(
        name: impl Into<String>,
        pain_focus: Vec<String>,
        gain_focus: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            pain_focus,
            gain_focus,
        })
    }
}

/// Per-competitor overlap counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorOverlap {
    pub name: String,
    pub pain_overlap: usize,
    pub gain_overlap: usize,
}

impl CompetitorOverlap {
    /// Total overlapping focus areas.
    pub fn total(&self) -> usize {
        self.pain_overlap + self.gain_overlap
    }
}

/// How hard the product mix is to replicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyDifficulty {
    Low,
    Medium,
    High,
}

impl CopyDifficulty {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CopyDifficulty::Low => "Low",
            CopyDifficulty::Medium => "Medium",
            CopyDifficulty::High => "High",
        }
    }
}

/// The competitive comparison result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveReport {
    /// Per-competitor overlaps, worst threat first; ties break by name.
    pub overlaps: Vec<CompetitorOverlap>,
    /// Focus areas no competitor claims, sorted.
    pub unique_strengths: Vec<String>,
    /// Areas competitors claim that this canvas leaves open, sorted.
    pub exposed_gaps: Vec<String>,
    /// Competitors overlapping on more areas than the threshold, worst first.
    pub threats: Vec<String>,
    pub copy_difficulty: CopyDifficulty,
    /// One-paragraph positioning summary.
    pub positioning: String,
}

/// Compares a canvas's value map against competitor claims.
/// Deterministic: set arithmetic over normalized descriptions, with
/// every output list explicitly ordered.
pub fn compare(canvas: &ValueCanvas, competitors: &[CompetitorProfile]) -> CompetitiveReport {
    let ours: BTreeSet<String> = canvas
        .relievers()
        .iter()
        .map(|r| normalize(&r.description))
        .chain(canvas.creators().iter().map(|c| normalize(&c.description)))
        .collect();
    let our_pains: BTreeSet<String> = canvas
        .relievers()
        .iter()
        .map(|r| normalize(&r.description))
        .collect();
    let our_gains: BTreeSet<String> = canvas
        .creators()
        .iter()
        .map(|c| normalize(&c.description))
        .collect();

    let mut overlaps: Vec<CompetitorOverlap> = Vec::with_capacity(competitors.len());
    let mut claimed: BTreeSet<String> = BTreeSet::new();
    for competitor in competitors {
        let comp_pains: BTreeSet<String> =
            competitor.pain_focus.iter().map(|p| normalize(p)).collect();
        let comp_gains: BTreeSet<String> =
            competitor.gain_focus.iter().map(|g| normalize(g)).collect();

        overlaps.push(CompetitorOverlap {
            name: competitor.name.clone(),
            pain_overlap: our_pains.intersection(&comp_pains).count(),
            gain_overlap: our_gains.intersection(&comp_gains).count(),
        });
        claimed.extend(comp_pains);
        claimed.extend(comp_gains);
    }
    overlaps.sort_by(|a, b| b.total().cmp(&a.total()).then(a.name.cmp(&b.name)));

    let unique_strengths: Vec<String> = ours.difference(&claimed).cloned().collect();
    let exposed_gaps: Vec<String> = claimed.difference(&ours).cloned().collect();

    let threats: Vec<String> = overlaps
        .iter()
        .filter(|o| o.total() > THREAT_OVERLAP_THRESHOLD)
        .map(|o| format!("{}: high overlap ({} areas)", o.name, o.total()))
        .collect();

    let copy_difficulty = copy_difficulty(canvas);
    let positioning = positioning(
        canvas.company(),
        &unique_strengths,
        &exposed_gaps,
        copy_difficulty,
    );

    CompetitiveReport {
        overlaps,
        unique_strengths,
        exposed_gaps,
        threats,
        copy_difficulty,
        positioning,
    }
}

/// Two or more digital products, or two or more intangible ones, push
/// difficulty to medium; both together push it to high.
fn copy_difficulty(canvas: &ValueCanvas) -> CopyDifficulty {
    let digital = canvas
        .products()
        .iter()
        .filter(|p| p.category == ProductCategory::Digital)
        .count();
    let intangible = canvas
        .products()
        .iter()
        .filter(|p| p.category != ProductCategory::Physical)
        .count();

    if digital >= 2 && intangible >= 2 {
        CopyDifficulty::High
    } else if digital >= 2 || intangible >= 2 {
        CopyDifficulty::Medium
    } else {
        CopyDifficulty::Low
    }
}

fn positioning(
    company: &str,
    strengths: &[String],
    gaps: &[String],
    difficulty: CopyDifficulty,
) -> String {
    let defensibility = match difficulty {
        CopyDifficulty::High => "with strong barriers to imitation",
        CopyDifficulty::Medium => "with moderate defensibility",
        CopyDifficulty::Low => "but should build more defensible advantages",
    };

    let mut statement = if strengths.is_empty() {
        format!(
            "{company} claims no focus area competitors leave open and should identify unique differentiators before positioning."
        )
    } else {
        let examples: Vec<&str> = strengths.iter().take(3).map(String::as_str).collect();
        format!(
            "{company} can position around {} focus area{} no competitor claims (e.g. {}), {defensibility}.",
            strengths.len(),
            if strengths.len() == 1 { "" } else { "s" },
            examples
                .iter()
                .map(|e| format!("'{e}'"))
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    if !gaps.is_empty() {
        statement.push_str(&format!(
            " Competitors already claim {} area{} this canvas leaves open.",
            gaps.len(),
            if gaps.len() == 1 { "" } else { "s" }
        ));
    }
    statement
}

fn normalize(description: &str) -> String {
    description.trim().to_lowercase()
}
