//! Markdown rendering for assessment reports.
//!
//! Builds human-readable reports from the same result structs the JSON
//! responses serialize, so the two formats can never drift apart. Layout
//! follows the canvas walkthrough order: inputs first, then scores, then
//! recommendations.

use crate::application::handlers::assessment::{
    AnalyzeFitResult, AssessBmcResult, AssessVpcResult, CompareCompetitorsResult,
};
use crate::domain::canvas::{BusinessCanvas, ValueCanvas};
use crate::domain::fit::{BusinessModelFit, FitReport, ProblemSolutionFit};
use crate::domain::foundation::Score;
use crate::domain::recommend::Recommendation;
use crate::domain::scoring::{BmcAttractivenessReport, VpcQualityReport};

/// Renders a full VPC assessment report.
pub fn vpc_assessment(canvas: &ValueCanvas, result: &AssessVpcResult) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "# Value Proposition Canvas Assessment: {}\n",
        canvas.company()
    ));
    md.push_str(&format!("**Target Segment:** {}\n\n", canvas.target_segment()));
    md.push_str("---\n\n");

    render_customer_profile(&mut md, canvas);
    render_value_map(&mut md, canvas);
    render_quality(&mut md, &result.quality);
    render_fit(&mut md, &result.fit);
    render_recommendations(&mut md, &result.recommendations);

    md
}

/// Renders a full BMC assessment report.
pub fn bmc_assessment(canvas: &BusinessCanvas, result: &AssessBmcResult) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "# Business Model Canvas Assessment: {}\n",
        canvas.company()
    ));
    if let Some(industry) = canvas.industry() {
        md.push_str(&format!("**Industry:** {}\n", industry));
    }
    md.push('\n');
    md.push_str("---\n\n");

    render_building_blocks(&mut md, canvas);
    render_attractiveness(&mut md, &result.attractiveness);

    if let Some(alignment) = &result.alignment {
        render_business_model_fit(&mut md, alignment);
    }

    render_recommendations(&mut md, &result.recommendations);

    md
}

/// Renders a standalone fit analysis report.
pub fn fit_analysis(canvas: &ValueCanvas, result: &AnalyzeFitResult) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Fit Analysis: {}\n", canvas.company()));
    md.push_str(&format!("**Target Segment:** {}\n\n", canvas.target_segment()));
    md.push_str("---\n\n");

    render_fit(&mut md, &result.fit);
    render_recommendations(&mut md, &result.recommendations);

    md
}

/// Renders a competitive comparison report.
pub fn competitive(canvas: &ValueCanvas, result: &CompareCompetitorsResult) -> String {
    let report = &result.report;
    let mut md = String::new();

    md.push_str(&format!("# Competitive Comparison: {}\n\n", canvas.company()));
    md.push_str("---\n\n");

    md.push_str("## Overlap by Competitor\n\n");
    if report.overlaps.is_empty() {
        md.push_str("*No competitors provided*\n\n");
    } else {
        md.push_str("| Competitor | Pain Overlap | Gain Overlap | Total |\n");
        md.push_str("|------------|--------------|--------------|-------|\n");
        for overlap in &report.overlaps {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                overlap.name,
                overlap.pain_overlap,
                overlap.gain_overlap,
                overlap.total()
            ));
        }
        md.push('\n');
    }

    if !report.unique_strengths.is_empty() {
        md.push_str("## Unique Strengths\n\n");
        for strength in &report.unique_strengths {
            md.push_str(&format!("- {}\n", strength));
        }
        md.push('\n');
    }

    if !report.exposed_gaps.is_empty() {
        md.push_str("## Exposed Gaps\n\n");
        for gap in &report.exposed_gaps {
            md.push_str(&format!("- {}\n", gap));
        }
        md.push('\n');
    }

    if !report.threats.is_empty() {
        md.push_str("## Threats\n\n");
        for threat in &report.threats {
            md.push_str(&format!("- {}\n", threat));
        }
        md.push('\n');
    }

    md.push_str(&format!(
        "**Copy Difficulty:** {}\n\n",
        report.copy_difficulty.label()
    ));
    md.push_str("## Positioning\n\n");
    md.push_str(&format!("{}\n", report.positioning));

    md
}

fn render_customer_profile(md: &mut String, canvas: &ValueCanvas) {
    md.push_str("## Customer Profile\n\n");

    md.push_str("### Customer Jobs\n");
    if canvas.jobs().is_empty() {
        md.push_str("*None recorded*\n");
    }
    for job in canvas.jobs() {
        md.push_str(&format!(
            "- **{}** (Importance: {}/5, Satisfaction: {}/5): {}\n",
            job.job_type.label(),
            job.importance,
            job.satisfaction,
            job.description
        ));
    }

    md.push_str("\n### Customer Pains\n");
    if canvas.pains().is_empty() {
        md.push_str("*None recorded*\n");
    }
    for pain in canvas.pains() {
        md.push_str(&format!(
            "- (Severity: {}/5, Frequency: {}/5): {}\n",
            pain.severity, pain.frequency, pain.description
        ));
    }

    md.push_str("\n### Customer Gains\n");
    if canvas.gains().is_empty() {
        md.push_str("*None recorded*\n");
    }
    for gain in canvas.gains() {
        md.push_str(&format!(
            "- **{}** (Importance: {}/5): {}\n",
            gain.gain_type.label(),
            gain.importance,
            gain.description
        ));
    }

    md.push('\n');
}

fn render_value_map(md: &mut String, canvas: &ValueCanvas) {
    md.push_str("---\n\n## Value Map\n\n");

    md.push_str("### Products & Services\n");
    if canvas.products().is_empty() {
        md.push_str("*None recorded*\n");
    }
    for product in canvas.products() {
        md.push_str(&format!(
            "- **{}** [{}]\n",
            product.description,
            product.category.label()
        ));
    }

    md.push_str("\n### Pain Relievers\n");
    if canvas.relievers().is_empty() {
        md.push_str("*None recorded*\n");
    }
    for reliever in canvas.relievers() {
        md.push_str(&format!("- {}\n", reliever.description));
        if !reliever.relieves.is_empty() {
            let targets: Vec<&str> = reliever.relieves.iter().map(|id| id.as_str()).collect();
            md.push_str(&format!("  - *Relieves:* {}\n", targets.join(", ")));
        }
    }

    md.push_str("\n### Gain Creators\n");
    if canvas.creators().is_empty() {
        md.push_str("*None recorded*\n");
    }
    for creator in canvas.creators() {
        md.push_str(&format!("- {}\n", creator.description));
        if !creator.creates.is_empty() {
            let targets: Vec<&str> = creator.creates.iter().map(|id| id.as_str()).collect();
            md.push_str(&format!("  - *Creates:* {}\n", targets.join(", ")));
        }
    }

    md.push('\n');
}

fn render_quality(md: &mut String, quality: &VpcQualityReport) {
    md.push_str("---\n\n## Quality Assessment (10 Characteristics)\n\n");
    md.push_str(&format!(
        "**Total Score: {} / {}**\n\n",
        quality.total,
        VpcQualityReport::MAX_TOTAL
    ));

    for entry in &quality.characteristics {
        md.push_str(&format!(
            "- {}: {} {}/5\n",
            entry.characteristic.label(),
            score_bar(entry.score),
            entry.score.value()
        ));
        md.push_str(&format!("  - {}\n", entry.rationale));
    }

    md.push('\n');
}

fn render_attractiveness(md: &mut String, attractiveness: &BmcAttractivenessReport) {
    md.push_str("---\n\n## Business Model Attractiveness\n\n");
    md.push_str(&format!(
        "**Total Score: {} / {}**\n\n",
        attractiveness.total,
        BmcAttractivenessReport::MAX_TOTAL
    ));

    md.push_str("| Dimension | Score |\n");
    md.push_str("|-----------|-------|\n");
    for entry in &attractiveness.dimensions {
        md.push_str(&format!(
            "| {} | {} {}/5 |\n",
            entry.dimension.label(),
            score_bar(entry.score),
            entry.score.value()
        ));
    }
    md.push('\n');

    for entry in &attractiveness.dimensions {
        md.push_str(&format!(
            "- **{}:** {}\n",
            entry.dimension.label(),
            entry.rationale
        ));
    }
    md.push('\n');
}

fn render_building_blocks(md: &mut String, canvas: &BusinessCanvas) {
    md.push_str("## The 9 Building Blocks\n\n");

    md.push_str("### Customer Segments\n");
    for segment in canvas.segments() {
        md.push_str(&format!("- {}\n", segment.name));
    }
    md.push_str("\n### Value Propositions\n");
    for vp in canvas.value_propositions() {
        md.push_str(&format!("- **For {}:** {}\n", vp.target_segment, vp.description));
    }
    md.push_str("\n### Channels\n");
    for channel in canvas.channels() {
        let phases: Vec<&str> = channel.phases.iter().map(|p| p.label()).collect();
        if phases.is_empty() {
            md.push_str(&format!("- {}\n", channel.name));
        } else {
            md.push_str(&format!("- {} ({})\n", channel.name, phases.join(", ")));
        }
    }
    md.push_str("\n### Customer Relationships\n");
    for relationship in canvas.relationships() {
        match &relationship.description {
            Some(description) => md.push_str(&format!("- {}\n", description)),
            None => md.push_str(&format!("- {:?}\n", relationship.relationship_type)),
        }
    }
    md.push_str("\n### Revenue Streams\n");
    for stream in canvas.revenue_streams() {
        let recurring = if stream.recurring { " (recurring)" } else { "" };
        md.push_str(&format!("- {}{}\n", stream.name, recurring));
    }
    md.push_str("\n### Key Resources\n");
    for resource in canvas.key_resources() {
        md.push_str(&format!("- {}\n", resource.name));
    }
    md.push_str("\n### Key Activities\n");
    for activity in canvas.key_activities() {
        md.push_str(&format!("- {}\n", activity.name));
    }
    md.push_str("\n### Key Partnerships\n");
    for partnership in canvas.partnerships() {
        md.push_str(&format!("- {}\n", partnership.partner));
    }
    md.push_str("\n### Cost Structure\n");
    for cost in canvas.cost_items() {
        md.push_str(&format!("- {}\n", cost.name));
    }

    md.push('\n');
}

fn render_fit(md: &mut String, fit: &FitReport) {
    md.push_str("## Fit Assessment\n\n");
    render_problem_solution(md, &fit.problem_solution);

    let indicators = &fit.market_indicators;
    md.push_str("### Product-Market Fit Indicators\n\n");
    md.push_str("| Indicator | Value |\n");
    md.push_str("|-----------|-------|\n");
    if let Some(intensity) = indicators.pain_intensity {
        md.push_str(&format!("| Pain Intensity | {:.1}/5 |\n", intensity));
    }
    if let Some(frequency) = indicators.pain_frequency {
        md.push_str(&format!("| Pain Frequency | {:.1}/5 |\n", frequency));
    }
    md.push_str(&format!(
        "| Solution Effectiveness | {:.1}% |\n",
        indicators.solution_effectiveness
    ));
    md.push('\n');
    md.push_str(&format!("> {}\n\n", indicators.disclaimer));

    if let Some(bmf) = &fit.business_model {
        render_business_model_fit(md, bmf);
    }
}

fn render_problem_solution(md: &mut String, psf: &ProblemSolutionFit) {
    md.push_str("### Problem-Solution Fit\n\n");
    md.push_str("| Metric | Value |\n");
    md.push_str("|--------|-------|\n");
    if let Some(coverage) = psf.pain_coverage {
        md.push_str(&format!("| Pain Coverage | {:.1}% |\n", coverage));
    }
    if let Some(coverage) = psf.gain_coverage {
        md.push_str(&format!("| Gain Coverage | {:.1}% |\n", coverage));
    }
    md.push_str(&format!(
        "| **Score** | **{:.1}% ({})** |\n",
        psf.score,
        psf.band.label()
    ));
    md.push('\n');
    md.push_str(&format!("{}\n\n", psf.rationale));
}

fn render_business_model_fit(md: &mut String, bmf: &BusinessModelFit) {
    md.push_str("### Business Model Fit\n\n");
    md.push_str(&format!(
        "**Score: {:.1}% ({})**\n\n",
        bmf.score,
        bmf.band.label()
    ));
    md.push_str(&format!(
        "- Segment alignment ({:.0}%): {}\n",
        bmf.segment_alignment.score, bmf.segment_alignment.detail
    ));
    if let Some(channel) = &bmf.channel_alignment {
        md.push_str(&format!(
            "- Channel alignment ({:.0}%): {}\n",
            channel.score, channel.detail
        ));
    }
    md.push_str(&format!(
        "- Resource alignment ({:.0}%): {}\n",
        bmf.resource_alignment.score, bmf.resource_alignment.detail
    ));
    md.push('\n');
}

fn render_recommendations(md: &mut String, recommendations: &[Recommendation]) {
    if recommendations.is_empty() {
        return;
    }

    md.push_str("---\n\n## Recommendations\n\n");
    for rec in recommendations {
        md.push_str(&format!("### {}\n", rec.area));
        md.push_str(&format!("**{}**\n", rec.suggestion));
        md.push_str(&format!("*{}*\n\n", rec.rationale));
    }
}

fn score_bar(score: Score) -> String {
    let filled = usize::from(score.value());
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(5 - filled));
    bar
}
