//! Fit analysis across Problem-Solution, Product-Market (indicators
//! only), and Business Model fit.

mod analyzer;
mod band;

pub use analyzer::{
    analyze_fit, AlignmentCheck, BusinessModelFit, FitReport, MarketIndicators,
    ProblemSolutionFit, MARKET_INDICATOR_DISCLAIMER,
};
pub use band::FitBand;
