//! HTTP adapters - REST API implementations.

use axum::{routing::get, Router};

use crate::domain::foundation::Thresholds;

pub mod canvas;

pub use canvas::{canvas_routes, CanvasHandlers};

/// Assembles the full application router.
///
/// Canvas assessment endpoints nest under `/api/canvas`; the health probe
/// sits at the root so load balancers reach it without the API prefix.
pub fn app_router(thresholds: Thresholds) -> Router {
    let handlers = CanvasHandlers::new(thresholds);

    Router::new()
        .nest("/api/canvas", canvas_routes(handlers))
        .route("/health", get(canvas::health))
}
