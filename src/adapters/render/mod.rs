//! Report rendering adapters.

mod markdown;

pub use markdown::{bmc_assessment, competitive, fit_analysis, vpc_assessment};
