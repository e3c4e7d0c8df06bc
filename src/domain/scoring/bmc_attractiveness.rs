//! BMC attractiveness scoring - the seven dimensions, each 1-5.
//!
//! Dimensions follow the Osterwalder attractiveness questions. Ratio
//! dimensions map shares onto the scale; additive dimensions start at 1
//! and stack fixed bonuses for the structural features that make a model
//! attractive, capped at 5. Empty canvases floor at 1 everywhere.

use serde::{Deserialize, Serialize};

use crate::domain::canvas::{
    ActivityType, BusinessCanvas, CostType, PartnershipType, RelationshipType, ResourceType,
    SegmentType,
};
use crate::domain::foundation::Score;

use super::Dimension;

/// One scored dimension and the computation behind the number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    pub score: Score,
    pub rationale: String,
}

/// Attractiveness report over all seven dimensions, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmcAttractivenessReport {
    /// Sum of the seven sub-scores (7-35).
    pub total: u8,
    pub dimensions: Vec<DimensionScore>,
}

impl BmcAttractivenessReport {
    /// Lowest possible total (every dimension at the floor).
    pub const MIN_TOTAL: u8 = 7;

    /// Highest possible total.
    pub const MAX_TOTAL: u8 = 35;

    /// Looks up a dimension's entry.
    pub fn dimension(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }

    /// The lowest-scoring entry, earliest in report order on ties.
    pub fn weakest(&self) -> Option<&DimensionScore> {
        self.dimensions.iter().min_by_key(|d| d.score)
    }
}

/// Scores a business model against the seven attractiveness dimensions.
/// Deterministic: the same canvas always produces the same report.
pub fn score_bmc(canvas: &BusinessCanvas) -> BmcAttractivenessReport {
    let dimensions: Vec<DimensionScore> = Dimension::ALL
        .iter()
        .map(|&dimension| {
            let (score, rationale) = score_dimension(dimension, canvas);
            DimensionScore {
                dimension,
                score,
                rationale,
            }
        })
        .collect();

    let total = dimensions.iter().map(|d| d.score.value()).sum();

    BmcAttractivenessReport { total, dimensions }
}

fn score_dimension(dimension: Dimension, canvas: &BusinessCanvas) -> (Score, String) {
    match dimension {
        Dimension::SwitchingCosts => switching_costs(canvas),
        Dimension::RecurringRevenues => recurring_revenues(canvas),
        Dimension::EarningBeforeSpending => earning_before_spending(canvas),
        Dimension::CostStructureEfficiency => cost_structure_efficiency(canvas),
        Dimension::Leverage => leverage(canvas),
        Dimension::Scalability => scalability(canvas),
        Dimension::Protection => protection(canvas),
    }
}

/// What binds customers: deep relationships, proprietary assets baked
/// into the offering, and multi-channel delivery.
fn switching_costs(canvas: &BusinessCanvas) -> (Score, String) {
    let mut score = Score::MIN;
    let mut locks: Vec<&str> = Vec::new();

    if canvas.has_relationship(RelationshipType::DedicatedAssistance)
        || canvas.has_relationship(RelationshipType::CoCreation)
    {
        score = score.saturating_add(2);
        locks.push("dedicated-assistance or co-creation relationships");
    }
    if canvas.has_resource(ResourceType::Intellectual) {
        score = score.saturating_add(1);
        locks.push("intellectual key resources woven into delivery");
    }
    if canvas.channels().len() >= 3 {
        score = score.saturating_add(1);
        locks.push("presence across 3+ channels");
    }

    let rationale = if locks.is_empty() {
        "nothing binds customers; leaving costs them little".to_string()
    } else {
        format!("customers held by {}", locks.join(", "))
    };
    (score, rationale)
}

/// Share of revenue streams that repeat without a new sale.
fn recurring_revenues(canvas: &BusinessCanvas) -> (Score, String) {
    let total = canvas.revenue_streams().len();
    if total == 0 {
        return (Score::MIN, "no revenue streams recorded".to_string());
    }
    let recurring = canvas
        .revenue_streams()
        .iter()
        .filter(|s| s.recurring)
        .count();
    (
        Score::from_ratio(recurring, total),
        format!("{recurring} of {total} revenue streams recur"),
    )
}

/// Cash cycle: recurring revenue collected up front plus a cost base
/// that only spends when demand shows up.
fn earning_before_spending(canvas: &BusinessCanvas) -> (Score, String) {
    let mut score = Score::MIN;
    let mut notes: Vec<String> = Vec::new();

    if canvas.revenue_streams().iter().any(|s| s.recurring) {
        score = score.saturating_add(2);
        notes.push("recurring revenue arrives ahead of delivery".to_string());
    }

    let variable = count_costs(canvas, CostType::Variable);
    let fixed = count_costs(canvas, CostType::Fixed);
    if variable > fixed {
        score = score.saturating_add(2);
        notes.push(format!(
            "variable cost items ({variable}) outnumber fixed ones ({fixed})"
        ));
    }

    let rationale = if notes.is_empty() {
        "revenue follows delivery and fixed costs dominate".to_string()
    } else {
        notes.join("; ")
    };
    (score, rationale)
}

/// Share of cost items that scale with volume instead of burning idle.
fn cost_structure_efficiency(canvas: &BusinessCanvas) -> (Score, String) {
    let total = canvas.cost_items().len();
    if total == 0 {
        return (Score::MIN, "no cost structure recorded".to_string());
    }
    let variable = count_costs(canvas, CostType::Variable);
    (
        Score::from_ratio(variable, total),
        format!("{variable} of {total} cost items scale with volume"),
    )
}

/// How much of the work others do: partnerships plus community and
/// co-creation relationships.
fn leverage(canvas: &BusinessCanvas) -> (Score, String) {
    let mut score = Score::MIN;
    let mut notes: Vec<String> = Vec::new();

    let partnerships = canvas.partnerships().len();
    if partnerships >= 3 {
        score = score.saturating_add(2);
        notes.push(format!("{partnerships} key partnerships carry the load"));
    } else if partnerships >= 1 {
        score = score.saturating_add(1);
        notes.push(format!(
            "{partnerships} key partnership{} recorded",
            if partnerships == 1 { "" } else { "s" }
        ));
    }

    if canvas.has_relationship(RelationshipType::Communities)
        || canvas.has_relationship(RelationshipType::CoCreation)
    {
        score = score.saturating_add(2);
        notes.push("customers contribute through communities or co-creation".to_string());
    }

    let rationale = if notes.is_empty() {
        "the company does all the work itself".to_string()
    } else {
        notes.join("; ")
    };
    (score, rationale)
}

/// Growth without proportional cost: platform activities, automated or
/// self-service relationships, intellectual resources.
fn scalability(canvas: &BusinessCanvas) -> (Score, String) {
    let mut score = Score::MIN;
    let mut notes: Vec<&str> = Vec::new();

    if canvas.has_activity(ActivityType::Platform) {
        score = score.saturating_add(2);
        notes.push("platform activities grow without matching headcount");
    }
    if canvas.has_relationship(RelationshipType::Automated)
        || canvas.has_relationship(RelationshipType::SelfService)
    {
        score = score.saturating_add(1);
        notes.push("automated or self-service relationships");
    }
    if canvas.has_resource(ResourceType::Intellectual) {
        score = score.saturating_add(1);
        notes.push("intellectual resources replicate at near-zero cost");
    }

    let rationale = if notes.is_empty() {
        "growth requires proportional people and assets".to_string()
    } else {
        notes.join("; ")
    };
    (score, rationale)
}

/// Structural defenses: intellectual property, deep alliances, and
/// niche positions competitors overlook.
fn protection(canvas: &BusinessCanvas) -> (Score, String) {
    let mut score = Score::MIN;
    let mut notes: Vec<&str> = Vec::new();

    if canvas.has_resource(ResourceType::Intellectual) {
        score = score.saturating_add(2);
        notes.push("intellectual property shields the model");
    }
    if canvas
        .partnerships()
        .iter()
        .any(|p| {
            matches!(
                p.partnership_type,
                PartnershipType::StrategicAlliance | PartnershipType::JointVenture
            )
        })
    {
        score = score.saturating_add(1);
        notes.push("strategic alliances raise the entry bar");
    }
    if canvas
        .segments()
        .iter()
        .any(|s| s.segment_type == SegmentType::Niche)
    {
        score = score.saturating_add(1);
        notes.push("niche segments sit below competitors' radar");
    }

    let rationale = if notes.is_empty() {
        "no structural defense against imitation".to_string()
    } else {
        notes.join("; ")
    };
    (score, rationale)
}

fn count_costs(canvas: &BusinessCanvas, cost_type: CostType) -> usize {
    canvas
        .cost_items()
        .iter()
        .filter(|c| c.cost_type == cost_type)
        .count()
}
