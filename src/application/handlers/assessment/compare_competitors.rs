//! CompareCompetitorsHandler - Competitive comparison over value maps.

use tracing::debug;

use crate::domain::canvas::ValueCanvas;
use crate::domain::competitive::{compare, CompetitiveReport, CompetitorProfile};

/// Command to compare a canvas against competitor claims.
#[derive(Debug, Clone)]
pub struct CompareCompetitorsCommand {
    pub canvas: ValueCanvas,
    pub competitors: Vec<CompetitorProfile>,
}

/// Result of a competitive comparison.
#[derive(Debug, Clone)]
pub struct CompareCompetitorsResult {
    pub report: CompetitiveReport,
}

/// Handler for competitive comparison. Stateless; comparison takes no
/// thresholds.
#[derive(Default)]
pub struct CompareCompetitorsHandler;

impl CompareCompetitorsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: &CompareCompetitorsCommand) -> CompareCompetitorsResult {
        debug!(
            company = cmd.canvas.company(),
            competitors = cmd.competitors.len(),
            "comparing value maps"
        );

        CompareCompetitorsResult {
            report: compare(&cmd.canvas, &cmd.competitors),
        }
    }
}
