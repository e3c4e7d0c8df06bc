//! Canvas assessment HTTP endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{
    AnalyzeFitRequest, AnalyzeFitResponse, AssessBmcRequest, AssessBmcResponse, AssessVpcRequest,
    AssessVpcResponse, CompareCompetitorsRequest, CompareCompetitorsResponse, ErrorResponse,
    FormatQuery, HealthResponse, ResponseFormat,
};
pub use handlers::{health, CanvasHandlers};
pub use routes::canvas_routes;
