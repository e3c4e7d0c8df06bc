//! Canvas scoring.
//!
//! Two independent scorers share one shape: a fixed list of named
//! criteria, a 1-5 score per criterion with a rationale derived from the
//! same computation, and an unweighted total.

mod bmc_attractiveness;
mod characteristic;
mod dimension;
mod vpc_quality;

pub use bmc_attractiveness::{score_bmc, BmcAttractivenessReport, DimensionScore};
pub use characteristic::Characteristic;
pub use dimension::Dimension;
pub use vpc_quality::{
    score_vpc, CharacteristicScore, VpcQualityReport, HIGH_IMPACT_PAIN_WEIGHT,
};
