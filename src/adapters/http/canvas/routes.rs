//! HTTP routes for canvas assessment endpoints.

use axum::{routing::post, Router};

use super::handlers::{analyze_fit, assess_bmc, assess_vpc, compare_competitors, CanvasHandlers};

/// Creates the canvas router with all assessment endpoints.
pub fn canvas_routes(handlers: CanvasHandlers) -> Router {
    Router::new()
        .route("/vpc/assess", post(assess_vpc))
        .route("/vpc/compare", post(compare_competitors))
        .route("/bmc/assess", post(assess_bmc))
        .route("/fit/analyze", post(analyze_fit))
        .with_state(handlers)
}
