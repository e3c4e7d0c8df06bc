//! Application layer - Commands and Handlers.
//!
//! Thin synchronous orchestration over the pure domain: each handler
//! wires the scorers, fit analyzer, and recommendation generator together
//! for one assessment operation. Handlers are infallible; structural
//! validation happens at the boundary that constructs the canvases.

pub mod handlers;

pub use handlers::{
    AnalyzeFitCommand, AnalyzeFitHandler, AnalyzeFitResult, AssessBmcCommand, AssessBmcHandler,
    AssessBmcResult, AssessVpcCommand, AssessVpcHandler, AssessVpcResult,
    CompareCompetitorsCommand, CompareCompetitorsHandler, CompareCompetitorsResult,
};
