//! The seven attractiveness dimensions of a business model.

use serde::{Deserialize, Serialize};

/// One of the seven dimensions a business model is scored on.
///
/// The order of [`Dimension::ALL`] is the report order and the tie-break
/// order for recommendations, after the ten VPC characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    SwitchingCosts,
    RecurringRevenues,
    EarningBeforeSpending,
    CostStructureEfficiency,
    Leverage,
    Scalability,
    Protection,
}

impl Dimension {
    /// All seven dimensions, in report order.
    pub const ALL: [Dimension; 7] = [
        Dimension::SwitchingCosts,
        Dimension::RecurringRevenues,
        Dimension::EarningBeforeSpending,
        Dimension::CostStructureEfficiency,
        Dimension::Leverage,
        Dimension::Scalability,
        Dimension::Protection,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::SwitchingCosts => "Switching costs",
            Dimension::RecurringRevenues => "Recurring revenues",
            Dimension::EarningBeforeSpending => "Earning before spending",
            Dimension::CostStructureEfficiency => "Cost-structure efficiency",
            Dimension::Leverage => "Leverage of others' work",
            Dimension::Scalability => "Scalability",
            Dimension::Protection => "Protection from competition",
        }
    }

    /// Fixed improvement advice attached to low scores on this dimension.
    pub fn advice(&self) -> &'static str {
        match self {
            Dimension::SwitchingCosts => {
                "Raise the cost of leaving: deepen relationships toward dedicated assistance or co-creation and spread delivery across more channels."
            }
            Dimension::RecurringRevenues => {
                "Convert one-off sales into subscriptions, leases, or licenses so revenue repeats without a new sale."
            }
            Dimension::EarningBeforeSpending => {
                "Collect earlier and defer costs: recurring prepaid revenue and a variable-heavy cost base turn the cash cycle positive."
            }
            Dimension::CostStructureEfficiency => {
                "Shift fixed costs to variable ones so the cost base moves with demand."
            }
            Dimension::Leverage => {
                "Let partners and customers do more of the work through partnerships, communities, and co-creation."
            }
            Dimension::Scalability => {
                "Build platform activities and automated or self-service relationships that grow without proportional headcount."
            }
            Dimension::Protection => {
                "Add defensible elements: intellectual property, strategic alliances, and niche segments competitors overlook."
            }
        }
    }
}
