//! Domain layer containing scoring logic and canvas types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, thresholds)
//! - `canvas` - Value Proposition Canvas and Business Model Canvas records
//! - `scoring` - VPC quality (10 characteristics) and BMC attractiveness (7 dimensions)
//! - `fit` - Problem-Solution, Product-Market (indicators), and Business Model fit
//! - `recommend` - Cutoff-driven recommendation generation
//! - `competitive` - Value-map overlap comparison against competitors
//!
//! Everything in this layer is pure and synchronous: no I/O, no clocks,
//! no randomness. The same canvas always produces the same report.

pub mod canvas;
pub mod competitive;
pub mod fit;
pub mod foundation;
pub mod recommend;
pub mod scoring;
