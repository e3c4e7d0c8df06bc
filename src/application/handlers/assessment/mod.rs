//! Assessment handlers - one per analysis operation.

mod analyze_fit;
mod assess_bmc;
mod assess_vpc;
mod compare_competitors;

pub use analyze_fit::{AnalyzeFitCommand, AnalyzeFitHandler, AnalyzeFitResult};
pub use assess_bmc::{AssessBmcCommand, AssessBmcHandler, AssessBmcResult};
pub use assess_vpc::{AssessVpcCommand, AssessVpcHandler, AssessVpcResult};
pub use compare_competitors::{
    CompareCompetitorsCommand, CompareCompetitorsHandler, CompareCompetitorsResult,
};
