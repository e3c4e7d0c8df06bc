//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, identifiers, and error types that form the
//! vocabulary of the CanvasLens domain.

mod errors;
mod ids;
mod level;
mod score;
mod thresholds;

pub use errors::ValidationError;
pub use ids::ItemId;
pub use level::Level;
pub use score::Score;
pub use thresholds::Thresholds;
