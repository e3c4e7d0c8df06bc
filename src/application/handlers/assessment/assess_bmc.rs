//! AssessBmcHandler - Attractiveness assessment of a business model canvas.

use tracing::debug;

use crate::domain::canvas::{BusinessCanvas, ValueCanvas};
use crate::domain::fit::{analyze_fit, BusinessModelFit};
use crate::domain::foundation::Thresholds;
use crate::domain::recommend::{recommend_for_bmc, Recommendation};
use crate::domain::scoring::{score_bmc, BmcAttractivenessReport};

/// Command to assess a business model canvas, optionally checking
/// alignment against a value proposition canvas.
#[derive(Debug, Clone)]
pub struct AssessBmcCommand {
    pub canvas: BusinessCanvas,
    pub vpc: Option<ValueCanvas>,
}

/// Result of a BMC assessment.
#[derive(Debug, Clone)]
pub struct AssessBmcResult {
    pub attractiveness: BmcAttractivenessReport,
    /// Business Model Fit against the supplied VPC; absent when no VPC
    /// accompanied the command.
    pub alignment: Option<BusinessModelFit>,
    pub recommendations: Vec<Recommendation>,
}

/// Handler for BMC assessment.
pub struct AssessBmcHandler {
    thresholds: Thresholds,
}

impl AssessBmcHandler {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn handle(&self, cmd: &AssessBmcCommand) -> AssessBmcResult {
        debug!(
            company = cmd.canvas.company(),
            segments = cmd.canvas.segments().len(),
            with_vpc = cmd.vpc.is_some(),
            "assessing business model canvas"
        );

        let attractiveness = score_bmc(&cmd.canvas);
        let alignment = cmd
            .vpc
            .as_ref()
            .and_then(|vpc| analyze_fit(vpc, Some(&cmd.canvas), &self.thresholds).business_model);
        let recommendations =
            recommend_for_bmc(&attractiveness, alignment.as_ref(), &self.thresholds);

        AssessBmcResult {
            attractiveness,
            alignment,
            recommendations,
        }
    }
}
