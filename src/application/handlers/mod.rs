//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AnalyzeFitCommand, AnalyzeFitHandler, AnalyzeFitResult, AssessBmcCommand, AssessBmcHandler,
    AssessBmcResult, AssessVpcCommand, AssessVpcHandler, AssessVpcResult,
    CompareCompetitorsCommand, CompareCompetitorsHandler, CompareCompetitorsResult,
};
