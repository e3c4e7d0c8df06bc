//! Canvas module - Typed Value Proposition and Business Model Canvases.
//!
//! Records are immutable once built; analysis layers consume them by
//! shared reference through the cross-reference index.

mod bmc;
mod index;
mod vpc;

pub use bmc::{
    ActivityType, BusinessCanvas, Channel, ChannelPhase, CostItem, CostType, CustomerRelationship,
    CustomerSegment, KeyActivity, KeyPartnership, KeyResource, PartnershipType, PricingMechanism,
    RelationshipType, ResourceType, RevenueStream, SegmentType, ValuePropositionRef,
};
pub use index::{RefTarget, UnresolvedRef, VpcIndex};
pub use vpc::{
    CustomerGain, CustomerJob, CustomerPain, GainCreator, GainType, JobType, PainReliever,
    ProductCategory, ProductService, ValueCanvas,
};
