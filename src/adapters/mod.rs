//! Adapters - Outward-facing surfaces over the analysis core.
//!
//! - `http` - REST API exposing the assessment operations
//! - `render` - Markdown report rendering

pub mod http;
pub mod render;

pub use http::{app_router, CanvasHandlers};
