//! HTTP handlers for canvas assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::adapters::render;
use crate::application::handlers::assessment::{
    AnalyzeFitCommand, AnalyzeFitHandler, AssessBmcCommand, AssessBmcHandler, AssessVpcCommand,
    AssessVpcHandler, CompareCompetitorsCommand, CompareCompetitorsHandler,
};
use crate::domain::canvas::{BusinessCanvas, ValueCanvas};
use crate::domain::competitive::CompetitorProfile;
use crate::domain::foundation::{Thresholds, ValidationError};

use super::dto::{
    AnalyzeFitRequest, AnalyzeFitResponse, AssessBmcRequest, AssessBmcResponse, AssessVpcRequest,
    AssessVpcResponse, CompareCompetitorsRequest, CompareCompetitorsResponse, ErrorResponse,
    FormatQuery, HealthResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CanvasHandlers {
    assess_vpc_handler: Arc<AssessVpcHandler>,
    assess_bmc_handler: Arc<AssessBmcHandler>,
    analyze_fit_handler: Arc<AnalyzeFitHandler>,
    compare_handler: Arc<CompareCompetitorsHandler>,
}

impl CanvasHandlers {
    /// Wires the four assessment handlers against one shared threshold set.
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            assess_vpc_handler: Arc::new(AssessVpcHandler::new(thresholds)),
            assess_bmc_handler: Arc::new(AssessBmcHandler::new(thresholds)),
            analyze_fit_handler: Arc::new(AnalyzeFitHandler::new(thresholds)),
            compare_handler: Arc::new(CompareCompetitorsHandler::new()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/canvas/vpc/assess - Score a value proposition canvas
pub async fn assess_vpc(
    State(handlers): State<CanvasHandlers>,
    Query(query): Query<FormatQuery>,
    Json(req): Json<AssessVpcRequest>,
) -> Response {
    let canvas: ValueCanvas = match req.vpc.try_into() {
        Ok(canvas) => canvas,
        Err(e) => return validation_failed(&e),
    };

    let cmd = AssessVpcCommand { canvas };
    let result = handlers.assess_vpc_handler.handle(&cmd);

    let markdown = query
        .wants_markdown()
        .then(|| render::vpc_assessment(&cmd.canvas, &result));

    debug!(
        company = %cmd.canvas.company(),
        total = result.quality.total,
        "vpc assessment served"
    );

    let response = AssessVpcResponse::new(&cmd.canvas, &result, markdown);
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/canvas/bmc/assess - Score a business model canvas
pub async fn assess_bmc(
    State(handlers): State<CanvasHandlers>,
    Query(query): Query<FormatQuery>,
    Json(req): Json<AssessBmcRequest>,
) -> Response {
    let canvas: BusinessCanvas = match req.bmc.try_into() {
        Ok(canvas) => canvas,
        Err(e) => return validation_failed(&e),
    };
    let vpc: Option<ValueCanvas> = match req.vpc.map(TryInto::try_into).transpose() {
        Ok(vpc) => vpc,
        Err(e) => return validation_failed(&e),
    };

    let cmd = AssessBmcCommand { canvas, vpc };
    let result = handlers.assess_bmc_handler.handle(&cmd);

    let markdown = query
        .wants_markdown()
        .then(|| render::bmc_assessment(&cmd.canvas, &result));

    debug!(
        company = %cmd.canvas.company(),
        total = result.attractiveness.total,
        "bmc assessment served"
    );

    let response = AssessBmcResponse::new(&cmd.canvas, &result, markdown);
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/canvas/fit/analyze - Run the three-stage fit analysis
pub async fn analyze_fit(
    State(handlers): State<CanvasHandlers>,
    Query(query): Query<FormatQuery>,
    Json(req): Json<AnalyzeFitRequest>,
) -> Response {
    let vpc: ValueCanvas = match req.vpc.try_into() {
        Ok(canvas) => canvas,
        Err(e) => return validation_failed(&e),
    };
    let bmc: Option<BusinessCanvas> = match req.bmc.map(TryInto::try_into).transpose() {
        Ok(bmc) => bmc,
        Err(e) => return validation_failed(&e),
    };

    let cmd = AnalyzeFitCommand { vpc, bmc };
    let result = handlers.analyze_fit_handler.handle(&cmd);

    let markdown = query
        .wants_markdown()
        .then(|| render::fit_analysis(&cmd.vpc, &result));

    debug!(
        company = %cmd.vpc.company(),
        score = result.fit.problem_solution.score,
        "fit analysis served"
    );

    let response = AnalyzeFitResponse::new(&cmd.vpc, &result, markdown);
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/canvas/vpc/compare - Compare a canvas against competitor profiles
pub async fn compare_competitors(
    State(handlers): State<CanvasHandlers>,
    Query(query): Query<FormatQuery>,
    Json(req): Json<CompareCompetitorsRequest>,
) -> Response {
    let canvas: ValueCanvas = match req.vpc.try_into() {
        Ok(canvas) => canvas,
        Err(e) => return validation_failed(&e),
    };
    let competitors: Vec<CompetitorProfile> = match req
        .competitors
        .into_iter()
        .map(TryInto::try_into)
        .collect::<Result<_, _>>()
    {
        Ok(competitors) => competitors,
        Err(e) => return validation_failed(&e),
    };

    let cmd = CompareCompetitorsCommand { canvas, competitors };
    let result = handlers.compare_handler.handle(&cmd);

    let markdown = query
        .wants_markdown()
        .then(|| render::competitive(&cmd.canvas, &result));

    debug!(
        company = %cmd.canvas.company(),
        competitors = result.report.overlaps.len(),
        "competitive comparison served"
    );

    let response = CompareCompetitorsResponse::new(&cmd.canvas, &result, markdown);
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn validation_failed(error: &ValidationError) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::validation(error)),
    )
        .into_response()
}
