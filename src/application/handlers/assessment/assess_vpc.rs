//! AssessVpcHandler - Full quality assessment of a value proposition canvas.

use tracing::debug;

use crate::domain::canvas::ValueCanvas;
use crate::domain::fit::{analyze_fit, FitReport};
use crate::domain::foundation::Thresholds;
use crate::domain::recommend::{recommend, Recommendation};
use crate::domain::scoring::{score_vpc, VpcQualityReport};

/// Command to assess a value proposition canvas.
#[derive(Debug, Clone)]
pub struct AssessVpcCommand {
    pub canvas: ValueCanvas,
}

/// Result of a VPC assessment.
#[derive(Debug, Clone)]
pub struct AssessVpcResult {
    pub quality: VpcQualityReport,
    pub fit: FitReport,
    pub recommendations: Vec<Recommendation>,
}

/// Handler for VPC assessment.
pub struct AssessVpcHandler {
    thresholds: Thresholds,
}

impl AssessVpcHandler {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Scores the canvas, analyzes fit without a business model, and
    /// derives recommendations. Infallible: a constructed canvas always
    /// assesses.
    pub fn handle(&self, cmd: &AssessVpcCommand) -> AssessVpcResult {
        debug!(
            company = cmd.canvas.company(),
            jobs = cmd.canvas.jobs().len(),
            pains = cmd.canvas.pains().len(),
            gains = cmd.canvas.gains().len(),
            "assessing value proposition canvas"
        );

        let quality = score_vpc(&cmd.canvas);
        let fit = analyze_fit(&cmd.canvas, None, &self.thresholds);
        let recommendations = recommend(&quality, None, &fit, &self.thresholds);

        AssessVpcResult {
            quality,
            fit,
            recommendations,
        }
    }
}
