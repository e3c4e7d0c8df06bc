//! AnalyzeFitHandler - Fit analysis across the three fit stages.

use tracing::debug;

use crate::domain::canvas::{BusinessCanvas, ValueCanvas};
use crate::domain::fit::{analyze_fit, FitReport};
use crate::domain::foundation::Thresholds;
use crate::domain::recommend::{recommend, Recommendation};
use crate::domain::scoring::score_vpc;

/// Command to analyze fit for a value proposition, optionally against a
/// business model.
#[derive(Debug, Clone)]
pub struct AnalyzeFitCommand {
    pub vpc: ValueCanvas,
    pub bmc: Option<BusinessCanvas>,
}

/// Result of a fit analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeFitResult {
    pub fit: FitReport,
    pub recommendations: Vec<Recommendation>,
}

/// Handler for fit analysis.
pub struct AnalyzeFitHandler {
    thresholds: Thresholds,
}

impl AnalyzeFitHandler {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Runs the fit stages. Quality and attractiveness are scored
    /// internally so weak sub-scores surface as recommendations alongside
    /// weak fit stages.
    pub fn handle(&self, cmd: &AnalyzeFitCommand) -> AnalyzeFitResult {
        debug!(
            company = cmd.vpc.company(),
            with_bmc = cmd.bmc.is_some(),
            "analyzing fit"
        );

        let fit = analyze_fit(&cmd.vpc, cmd.bmc.as_ref(), &self.thresholds);
        let quality = score_vpc(&cmd.vpc);
        let attractiveness = cmd.bmc.as_ref().map(crate::domain::scoring::score_bmc);
        let recommendations = recommend(&quality, attractiveness.as_ref(), &fit, &self.thresholds);

        AnalyzeFitResult {
            fit,
            recommendations,
        }
    }
}
