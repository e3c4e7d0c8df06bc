//! Business Model Canvas records.
//!
//! The nine Osterwalder building blocks as typed lists. Unlike the value
//! proposition canvas there are no intra-canvas id references; blocks are
//! scored on their own composition, so items carry names and closed enums
//! and nothing else.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// How a customer segment is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentType {
    MassMarket,
    Niche,
    Segmented,
    Diversified,
    MultiSided,
}

/// Customer journey phase a channel serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPhase {
    Awareness,
    Evaluation,
    Purchase,
    Delivery,
    AfterSales,
}

impl ChannelPhase {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ChannelPhase::Awareness => "Awareness",
            ChannelPhase::Evaluation => "Evaluation",
            ChannelPhase::Purchase => "Purchase",
            ChannelPhase::Delivery => "Delivery",
            ChannelPhase::AfterSales => "After-sales",
        }
    }
}

/// The six Osterwalder relationship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    PersonalAssistance,
    DedicatedAssistance,
    SelfService,
    Automated,
    Communities,
    CoCreation,
}

/// How a revenue stream prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMechanism {
    Fixed,
    Dynamic,
    Auction,
    MarketDependent,
    VolumeDependent,
    Negotiation,
}

/// What kind of asset a key resource is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Physical,
    Intellectual,
    Human,
    Financial,
}

/// What kind of work a key activity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Production,
    ProblemSolving,
    Platform,
}

/// Why a partnership exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartnershipType {
    StrategicAlliance,
    Coopetition,
    JointVenture,
    BuyerSupplier,
}

/// Whether a cost scales with volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostType {
    Fixed,
    Variable,
}

/// A customer segment the model serves.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSegment {
    pub name: String,
    pub segment_type: SegmentType,
}

impl CustomerSegment {
    /// Creates a new segment, returning error if the name is blank.
    pub fn new(name: impl Into<String>, segment_type: SegmentType) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            segment_type,
        })
    }
}

/// A value proposition entry, naming the segment it targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuePropositionRef {
    pub description: String,
    pub target_segment: String,
}

impl ValuePropositionRef {
    /// Creates a new value proposition reference.
    pub fn new(
        description: impl Into<String>,
        target_segment: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            description: non_blank("description", description)?,
            target_segment: non_blank("target_segment", target_segment)?,
        })
    }
}

/// A channel and the journey phases it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: String,
    pub phases: Vec<ChannelPhase>,
}

impl Channel {
    /// Creates a new channel, returning error if the name is blank.
    pub fn new(name: impl Into<String>, phases: Vec<ChannelPhase>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            phases,
        })
    }
}

/// A customer relationship the model maintains.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRelationship {
    pub relationship_type: RelationshipType,
    pub description: Option<String>,
}

impl CustomerRelationship {
    /// Creates a new relationship.
    pub fn new(relationship_type: RelationshipType, description: Option<String>) -> Self {
        Self {
            relationship_type,
            description,
        }
    }
}

/// A revenue stream.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueStream {
    pub name: String,
    pub pricing: PricingMechanism,
    /// True for repeat revenue (subscriptions, retainers), false for
    /// one-off transactions.
    pub recurring: bool,
}

impl RevenueStream {
    /// Creates a new revenue stream, returning error if the name is blank.
    pub fn new(
        name: impl Into<String>,
        pricing: PricingMechanism,
        recurring: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            pricing,
            recurring,
        })
    }
}

/// A key resource the model depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResource {
    pub name: String,
    pub resource_type: ResourceType,
}

impl KeyResource {
    /// Creates a new key resource, returning error if the name is blank.
    pub fn new(name: impl Into<String>, resource_type: ResourceType) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            resource_type,
        })
    }
}

/// A key activity the model performs.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyActivity {
    pub name: String,
    pub activity_type: ActivityType,
}

impl KeyActivity {
    /// Creates a new key activity, returning error if the name is blank.
    pub fn new(name: impl Into<String>, activity_type: ActivityType) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            activity_type,
        })
    }
}

/// A key partnership.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPartnership {
    pub partner: String,
    pub partnership_type: PartnershipType,
}

impl KeyPartnership {
    /// Creates a new partnership, returning error if the partner is blank.
    pub fn new(
        partner: impl Into<String>,
        partnership_type: PartnershipType,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            partner: non_blank("partner", partner)?,
            partnership_type,
        })
    }
}

/// One entry in the cost structure.
#[derive(Debug, Clone, PartialEq)]
pub struct CostItem {
    pub name: String,
    pub cost_type: CostType,
}

impl CostItem {
    /// Creates a new cost item, returning error if the name is blank.
    pub fn new(name: impl Into<String>, cost_type: CostType) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_blank("name", name)?,
            cost_type,
        })
    }
}

/// A complete Business Model Canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessCanvas {
    company: String,
    industry: Option<String>,
    segments: Vec<CustomerSegment>,
    value_propositions: Vec<ValuePropositionRef>,
    channels: Vec<Channel>,
    relationships: Vec<CustomerRelationship>,
    revenue_streams: Vec<RevenueStream>,
    key_resources: Vec<KeyResource>,
    key_activities: Vec<KeyActivity>,
    partnerships: Vec<KeyPartnership>,
    cost_items: Vec<CostItem>,
}

impl BusinessCanvas {
    /// Assembles a canvas, rejecting a blank company name. All block lists
    /// may be empty; an empty model scores the floor on every dimension
    /// rather than failing.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company: impl Into<String>,
        industry: Option<String>,
        segments: Vec<CustomerSegment>,
        value_propositions: Vec<ValuePropositionRef>,
        channels: Vec<Channel>,
        relationships: Vec<CustomerRelationship>,
        revenue_streams: Vec<RevenueStream>,
        key_resources: Vec<KeyResource>,
        key_activities: Vec<KeyActivity>,
        partnerships: Vec<KeyPartnership>,
        cost_items: Vec<CostItem>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            company: non_blank("company", company)?,
            industry: industry.filter(|s| !s.trim().is_empty()),
            segments,
            value_propositions,
            channels,
            relationships,
            revenue_streams,
            key_resources,
            key_activities,
            partnerships,
            cost_items,
        })
    }

    /// Returns the company name.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the industry, if recorded.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Returns the customer segments.
    pub fn segments(&self) -> &[CustomerSegment] {
        &self.segments
    }

    /// Returns the value proposition entries.
    pub fn value_propositions(&self) -> &[ValuePropositionRef] {
        &self.value_propositions
    }

    /// Returns the channels.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Returns the customer relationships.
    pub fn relationships(&self) -> &[CustomerRelationship] {
        &self.relationships
    }

    /// Returns the revenue streams.
    pub fn revenue_streams(&self) -> &[RevenueStream] {
        &self.revenue_streams
    }

    /// Returns the key resources.
    pub fn key_resources(&self) -> &[KeyResource] {
        &self.key_resources
    }

    /// Returns the key activities.
    pub fn key_activities(&self) -> &[KeyActivity] {
        &self.key_activities
    }

    /// Returns the key partnerships.
    pub fn partnerships(&self) -> &[KeyPartnership] {
        &self.partnerships
    }

    /// Returns the cost structure entries.
    pub fn cost_items(&self) -> &[CostItem] {
        &self.cost_items
    }

    /// Returns true if any relationship has the given type.
    pub fn has_relationship(&self, relationship_type: RelationshipType) -> bool {
        self.relationships
            .iter()
            .any(|r| r.relationship_type == relationship_type)
    }

    /// Returns true if any key resource has the given type.
    pub fn has_resource(&self, resource_type: ResourceType) -> bool {
        self.key_resources
            .iter()
            .any(|r| r.resource_type == resource_type)
    }

    /// Returns true if any key activity has the given type.
    pub fn has_activity(&self, activity_type: ActivityType) -> bool {
        self.key_activities
            .iter()
            .any(|a| a.activity_type == activity_type)
    }
}

fn non_blank(field: &str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}
