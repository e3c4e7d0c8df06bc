//! HTTP DTOs for canvas assessment endpoints.
//!
//! These types decouple the HTTP API from domain types. Request DTOs
//! carry raw scalars; the TryFrom conversions are the validation
//! boundary where ids, levels, and whole canvases get constructed.
//! Response DTOs flatten the domain reports into the wire shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::assessment::{
    AnalyzeFitResult, AssessBmcResult, AssessVpcResult, CompareCompetitorsResult,
};
use crate::domain::canvas::{
    ActivityType, BusinessCanvas, Channel, ChannelPhase, CostItem, CostType, CustomerGain,
    CustomerJob, CustomerPain, CustomerRelationship, CustomerSegment, GainCreator, GainType,
    JobType, KeyActivity, KeyPartnership, KeyResource, PainReliever, PartnershipType,
    PricingMechanism, ProductCategory, ProductService, RelationshipType, ResourceType,
    RevenueStream, SegmentType, ValueCanvas, ValuePropositionRef,
};
use crate::domain::competitive::{CompetitiveReport, CompetitorOverlap, CompetitorProfile};
use crate::domain::fit::{
    AlignmentCheck, BusinessModelFit, FitReport, MarketIndicators, ProblemSolutionFit,
};
use crate::domain::foundation::{ItemId, Level, ValidationError};
use crate::domain::recommend::Recommendation;
use crate::domain::scoring::{
    BmcAttractivenessReport, CharacteristicScore, DimensionScore, VpcQualityReport,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs - Value Proposition Canvas
// ════════════════════════════════════════════════════════════════════════════

/// A customer job as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct JobDto {
    pub id: String,
    pub description: String,
    pub job_type: JobType,
    pub importance: u8,
    pub satisfaction: u8,
}

impl TryFrom<JobDto> for CustomerJob {
    type Error = ValidationError;

    fn try_from(dto: JobDto) -> Result<Self, Self::Error> {
        CustomerJob::new(
            ItemId::new(dto.id)?,
            dto.description,
            dto.job_type,
            Level::try_new("importance", dto.importance)?,
            Level::try_new("satisfaction", dto.satisfaction)?,
        )
    }
}

/// A customer pain as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct PainDto {
    pub id: String,
    pub description: String,
    pub severity: u8,
    pub frequency: u8,
    #[serde(default)]
    pub related_jobs: Vec<String>,
}

impl TryFrom<PainDto> for CustomerPain {
    type Error = ValidationError;

    fn try_from(dto: PainDto) -> Result<Self, Self::Error> {
        CustomerPain::new(
            ItemId::new(dto.id)?,
            dto.description,
            Level::try_new("severity", dto.severity)?,
            Level::try_new("frequency", dto.frequency)?,
            ids(dto.related_jobs)?,
        )
    }
}

/// A customer gain as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct GainDto {
    pub id: String,
    pub description: String,
    pub gain_type: GainType,
    pub importance: u8,
}

impl TryFrom<GainDto> for CustomerGain {
    type Error = ValidationError;

    fn try_from(dto: GainDto) -> Result<Self, Self::Error> {
        CustomerGain::new(
            ItemId::new(dto.id)?,
            dto.description,
            dto.gain_type,
            Level::try_new("importance", dto.importance)?,
        )
    }
}

/// A product or service as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub description: String,
    pub category: ProductCategory,
}

impl TryFrom<ProductDto> for ProductService {
    type Error = ValidationError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        ProductService::new(ItemId::new(dto.id)?, dto.description, dto.category)
    }
}

/// A pain reliever as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RelieverDto {
    pub description: String,
    #[serde(default)]
    pub relieves: Vec<String>,
    #[serde(default)]
    pub product: Option<String>,
}

impl TryFrom<RelieverDto> for PainReliever {
    type Error = ValidationError;

    fn try_from(dto: RelieverDto) -> Result<Self, Self::Error> {
        PainReliever::new(dto.description, ids(dto.relieves)?, opt_id(dto.product)?)
    }
}

/// A gain creator as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatorDto {
    pub description: String,
    #[serde(default)]
    pub creates: Vec<String>,
    #[serde(default)]
    pub product: Option<String>,
}

impl TryFrom<CreatorDto> for GainCreator {
    type Error = ValidationError;

    fn try_from(dto: CreatorDto) -> Result<Self, Self::Error> {
        GainCreator::new(dto.description, ids(dto.creates)?, opt_id(dto.product)?)
    }
}

/// A full value proposition canvas as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueCanvasDto {
    pub company: String,
    pub target_segment: String,
    #[serde(default)]
    pub jobs: Vec<JobDto>,
    #[serde(default)]
    pub pains: Vec<PainDto>,
    #[serde(default)]
    pub gains: Vec<GainDto>,
    #[serde(default)]
    pub products: Vec<ProductDto>,
    #[serde(default)]
    pub relievers: Vec<RelieverDto>,
    #[serde(default)]
    pub creators: Vec<CreatorDto>,
}

impl TryFrom<ValueCanvasDto> for ValueCanvas {
    type Error = ValidationError;

    fn try_from(dto: ValueCanvasDto) -> Result<Self, Self::Error> {
        ValueCanvas::new(
            dto.company,
            dto.target_segment,
            convert(dto.jobs)?,
            convert(dto.pains)?,
            convert(dto.gains)?,
            convert(dto.products)?,
            convert(dto.relievers)?,
            convert(dto.creators)?,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs - Business Model Canvas
// ════════════════════════════════════════════════════════════════════════════

/// A customer segment as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentDto {
    pub name: String,
    pub segment_type: SegmentType,
}

/// A value proposition entry as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ValuePropositionDto {
    pub description: String,
    pub target_segment: String,
}

/// A channel as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelDto {
    pub name: String,
    #[serde(default)]
    pub phases: Vec<ChannelPhase>,
}

/// A customer relationship as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipDto {
    pub relationship_type: RelationshipType,
    #[serde(default)]
    pub description: Option<String>,
}

/// A revenue stream as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenueStreamDto {
    pub name: String,
    pub pricing: PricingMechanism,
    #[serde(default)]
    pub recurring: bool,
}

/// A key resource as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDto {
    pub name: String,
    pub resource_type: ResourceType,
}

/// A key activity as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityDto {
    pub name: String,
    pub activity_type: ActivityType,
}

/// A key partnership as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct PartnershipDto {
    pub partner: String,
    pub partnership_type: PartnershipType,
}

/// A cost structure entry as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct CostItemDto {
    pub name: String,
    pub cost_type: CostType,
}

/// A full business model canvas as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessCanvasDto {
    pub company: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub segments: Vec<SegmentDto>,
    #[serde(default)]
    pub value_propositions: Vec<ValuePropositionDto>,
    #[serde(default)]
    pub channels: Vec<ChannelDto>,
    #[serde(default)]
    pub relationships: Vec<RelationshipDto>,
    #[serde(default)]
    pub revenue_streams: Vec<RevenueStreamDto>,
    #[serde(default)]
    pub key_resources: Vec<ResourceDto>,
    #[serde(default)]
    pub key_activities: Vec<ActivityDto>,
    #[serde(default)]
    pub partnerships: Vec<PartnershipDto>,
    #[serde(default)]
    pub cost_items: Vec<CostItemDto>,
}

impl TryFrom<BusinessCanvasDto> for BusinessCanvas {
    type Error = ValidationError;

    fn try_from(dto: BusinessCanvasDto) -> Result<Self, Self::Error> {
        let segments = dto
            .segments
            .into_iter()
            .map(|s| CustomerSegment::new(s.name, s.segment_type))
            .collect::<Result<_, _>>()?;
        let value_propositions = dto
            .value_propositions
            .into_iter()
            .map(|v| ValuePropositionRef::new(v.description, v.target_segment))
            .collect::<Result<_, _>>()?;
        let channels = dto
            .channels
            .into_iter()
            .map(|c| Channel::new(c.name, c.phases))
            .collect::<Result<_, _>>()?;
        let relationships = dto
            .relationships
            .into_iter()
            .map(|r| CustomerRelationship::new(r.relationship_type, r.description))
            .collect();
        let revenue_streams = dto
            .revenue_streams
            .into_iter()
            .map(|s| RevenueStream::new(s.name, s.pricing, s.recurring))
            .collect::<Result<_, _>>()?;
        let key_resources = dto
            .key_resources
            .into_iter()
            .map(|r| KeyResource::new(r.name, r.resource_type))
            .collect::<Result<_, _>>()?;
        let key_activities = dto
            .key_activities
            .into_iter()
            .map(|a| KeyActivity::new(a.name, a.activity_type))
            .collect::<Result<_, _>>()?;
        let partnerships = dto
            .partnerships
            .into_iter()
            .map(|p| KeyPartnership::new(p.partner, p.partnership_type))
            .collect::<Result<_, _>>()?;
        let cost_items = dto
            .cost_items
            .into_iter()
            .map(|c| CostItem::new(c.name, c.cost_type))
            .collect::<Result<_, _>>()?;

        BusinessCanvas::new(
            dto.company,
            dto.industry,
            segments,
            value_propositions,
            channels,
            relationships,
            revenue_streams,
            key_resources,
            key_activities,
            partnerships,
            cost_items,
        )
    }
}

/// A competitor profile as submitted over the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitorProfileDto {
    pub name: String,
    #[serde(default)]
    pub pain_focus: Vec<String>,
    #[serde(default)]
    pub gain_focus: Vec<String>,
}

impl TryFrom<CompetitorProfileDto> for CompetitorProfile {
    type Error = ValidationError;

    fn try_from(dto: CompetitorProfileDto) -> Result<Self, Self::Error> {
        CompetitorProfile::new(dto.name, dto.pain_focus, dto.gain_focus)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Request envelopes and query parameters
// ════════════════════════════════════════════════════════════════════════════

/// Request to assess a value proposition canvas.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessVpcRequest {
    pub vpc: ValueCanvasDto,
}

/// Request to assess a business model canvas.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessBmcRequest {
    pub bmc: BusinessCanvasDto,
    #[serde(default)]
    pub vpc: Option<ValueCanvasDto>,
}

/// Request to analyze fit.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeFitRequest {
    pub vpc: ValueCanvasDto,
    #[serde(default)]
    pub bmc: Option<BusinessCanvasDto>,
}

/// Request to compare against competitors.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareCompetitorsRequest {
    pub vpc: ValueCanvasDto,
    #[serde(default)]
    pub competitors: Vec<CompetitorProfileDto>,
}

/// Response body format, selected via `?format=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    Json,
    Markdown,
}

/// Query parameters shared by all assessment endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FormatQuery {
    #[serde(default)]
    pub format: Option<ResponseFormat>,
}

impl FormatQuery {
    /// Returns true when the caller asked for a rendered markdown report.
    pub fn wants_markdown(&self) -> bool {
        self.format == Some(ResponseFormat::Markdown)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One scored quality characteristic.
#[derive(Debug, Clone, Serialize)]
pub struct CharacteristicScoreDto {
    pub name: String,
    pub score: u8,
    pub rationale: String,
}

impl From<&CharacteristicScore> for CharacteristicScoreDto {
    fn from(entry: &CharacteristicScore) -> Self {
        Self {
            name: entry.characteristic.label().to_string(),
            score: entry.score.value(),
            rationale: entry.rationale.clone(),
        }
    }
}

/// The ten-characteristic quality report.
#[derive(Debug, Clone, Serialize)]
pub struct VpcQualityDto {
    pub total: u8,
    pub max: u8,
    pub characteristics: Vec<CharacteristicScoreDto>,
}

impl From<&VpcQualityReport> for VpcQualityDto {
    fn from(report: &VpcQualityReport) -> Self {
        Self {
            total: report.total,
            max: VpcQualityReport::MAX_TOTAL,
            characteristics: report.characteristics.iter().map(Into::into).collect(),
        }
    }
}

/// One scored attractiveness dimension.
#[derive(Debug, Clone, Serialize)]
pub struct DimensionScoreDto {
    pub name: String,
    pub score: u8,
    pub rationale: String,
}

impl From<&DimensionScore> for DimensionScoreDto {
    fn from(entry: &DimensionScore) -> Self {
        Self {
            name: entry.dimension.label().to_string(),
            score: entry.score.value(),
            rationale: entry.rationale.clone(),
        }
    }
}

/// The seven-dimension attractiveness report.
#[derive(Debug, Clone, Serialize)]
pub struct BmcAttractivenessDto {
    pub total: u8,
    pub max: u8,
    pub dimensions: Vec<DimensionScoreDto>,
}

impl From<&BmcAttractivenessReport> for BmcAttractivenessDto {
    fn from(report: &BmcAttractivenessReport) -> Self {
        Self {
            total: report.total,
            max: BmcAttractivenessReport::MAX_TOTAL,
            dimensions: report.dimensions.iter().map(Into::into).collect(),
        }
    }
}

/// Problem-Solution Fit on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemSolutionFitDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_coverage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gain_coverage: Option<f64>,
    pub score: f64,
    pub band: String,
    pub rationale: String,
}

impl From<&ProblemSolutionFit> for ProblemSolutionFitDto {
    fn from(psf: &ProblemSolutionFit) -> Self {
        Self {
            pain_coverage: psf.pain_coverage,
            gain_coverage: psf.gain_coverage,
            score: psf.score,
            band: psf.band.label().to_string(),
            rationale: psf.rationale.clone(),
        }
    }
}

/// Product-Market Fit indicators on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct MarketIndicatorsDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pain_frequency: Option<f64>,
    pub solution_effectiveness: f64,
    pub disclaimer: String,
}

impl From<&MarketIndicators> for MarketIndicatorsDto {
    fn from(indicators: &MarketIndicators) -> Self {
        Self {
            pain_intensity: indicators.pain_intensity,
            pain_frequency: indicators.pain_frequency,
            solution_effectiveness: indicators.solution_effectiveness,
            disclaimer: indicators.disclaimer.clone(),
        }
    }
}

/// One Business Model Fit sub-check on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentCheckDto {
    pub score: f64,
    pub detail: String,
}

impl From<&AlignmentCheck> for AlignmentCheckDto {
    fn from(check: &AlignmentCheck) -> Self {
        Self {
            score: check.score,
            detail: check.detail.clone(),
        }
    }
}

/// Business Model Fit on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessModelFitDto {
    pub segment_alignment: AlignmentCheckDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_alignment: Option<AlignmentCheckDto>,
    pub resource_alignment: AlignmentCheckDto,
    pub score: f64,
    pub band: String,
}

impl From<&BusinessModelFit> for BusinessModelFitDto {
    fn from(bmf: &BusinessModelFit) -> Self {
        Self {
            segment_alignment: (&bmf.segment_alignment).into(),
            channel_alignment: bmf.channel_alignment.as_ref().map(Into::into),
            resource_alignment: (&bmf.resource_alignment).into(),
            score: bmf.score,
            band: bmf.band.label().to_string(),
        }
    }
}

/// The full fit report on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct FitDto {
    pub problem_solution: ProblemSolutionFitDto,
    pub market_indicators: MarketIndicatorsDto,
    /// Null when no business model canvas accompanied the request.
    pub business_model: Option<BusinessModelFitDto>,
}

impl From<&FitReport> for FitDto {
    fn from(report: &FitReport) -> Self {
        Self {
            problem_solution: (&report.problem_solution).into(),
            market_indicators: (&report.market_indicators).into(),
            business_model: report.business_model.as_ref().map(Into::into),
        }
    }
}

/// One improvement recommendation on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationDto {
    pub area: String,
    pub rationale: String,
    pub suggestion: String,
}

impl From<&Recommendation> for RecommendationDto {
    fn from(rec: &Recommendation) -> Self {
        Self {
            area: rec.area.clone(),
            rationale: rec.rationale.clone(),
            suggestion: rec.suggestion.clone(),
        }
    }
}

/// Per-competitor overlap counts on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct OverlapDto {
    pub name: String,
    pub pain_overlap: usize,
    pub gain_overlap: usize,
    pub total_overlap: usize,
}

impl From<&CompetitorOverlap> for OverlapDto {
    fn from(overlap: &CompetitorOverlap) -> Self {
        Self {
            name: overlap.name.clone(),
            pain_overlap: overlap.pain_overlap,
            gain_overlap: overlap.gain_overlap,
            total_overlap: overlap.total(),
        }
    }
}

/// The competitive comparison on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitiveDto {
    pub overlaps: Vec<OverlapDto>,
    pub unique_strengths: Vec<String>,
    pub exposed_gaps: Vec<String>,
    pub threats: Vec<String>,
    pub copy_difficulty: String,
    pub positioning: String,
}

impl From<&CompetitiveReport> for CompetitiveDto {
    fn from(report: &CompetitiveReport) -> Self {
        Self {
            overlaps: report.overlaps.iter().map(Into::into).collect(),
            unique_strengths: report.unique_strengths.clone(),
            exposed_gaps: report.exposed_gaps.clone(),
            threats: report.threats.clone(),
            copy_difficulty: report.copy_difficulty.label().to_string(),
            positioning: report.positioning.clone(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response envelopes
// ════════════════════════════════════════════════════════════════════════════

/// Response for a VPC assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessVpcResponse {
    pub company: String,
    pub target_segment: String,
    pub quality: VpcQualityDto,
    pub fit: FitDto,
    pub recommendations: Vec<RecommendationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl AssessVpcResponse {
    pub fn new(canvas: &ValueCanvas, result: &AssessVpcResult, markdown: Option<String>) -> Self {
        Self {
            company: canvas.company().to_string(),
            target_segment: canvas.target_segment().to_string(),
            quality: (&result.quality).into(),
            fit: (&result.fit).into(),
            recommendations: result.recommendations.iter().map(Into::into).collect(),
            markdown,
            generated_at: Utc::now(),
        }
    }
}

/// Response for a BMC assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessBmcResponse {
    pub company: String,
    pub attractiveness: BmcAttractivenessDto,
    /// Null unless a VPC accompanied the request.
    pub alignment: Option<BusinessModelFitDto>,
    pub recommendations: Vec<RecommendationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl AssessBmcResponse {
    pub fn new(canvas: &BusinessCanvas, result: &AssessBmcResult, markdown: Option<String>) -> Self {
        Self {
            company: canvas.company().to_string(),
            attractiveness: (&result.attractiveness).into(),
            alignment: result.alignment.as_ref().map(Into::into),
            recommendations: result.recommendations.iter().map(Into::into).collect(),
            markdown,
            generated_at: Utc::now(),
        }
    }
}

/// Response for a fit analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeFitResponse {
    pub company: String,
    pub target_segment: String,
    pub fit: FitDto,
    pub recommendations: Vec<RecommendationDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl AnalyzeFitResponse {
    pub fn new(canvas: &ValueCanvas, result: &AnalyzeFitResult, markdown: Option<String>) -> Self {
        Self {
            company: canvas.company().to_string(),
            target_segment: canvas.target_segment().to_string(),
            fit: (&result.fit).into(),
            recommendations: result.recommendations.iter().map(Into::into).collect(),
            markdown,
            generated_at: Utc::now(),
        }
    }
}

/// Response for a competitive comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CompareCompetitorsResponse {
    pub company: String,
    pub comparison: CompetitiveDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl CompareCompetitorsResponse {
    pub fn new(
        canvas: &ValueCanvas,
        result: &CompareCompetitorsResult,
        markdown: Option<String>,
    ) -> Self {
        Self {
            company: canvas.company().to_string(),
            comparison: (&result.report).into(),
            markdown,
            generated_at: Utc::now(),
        }
    }
}

/// Liveness response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: err.to_string(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Conversion helpers
// ════════════════════════════════════════════════════════════════════════════

fn convert<D, T>(dtos: Vec<D>) -> Result<Vec<T>, ValidationError>
where
    T: TryFrom<D, Error = ValidationError>,
{
    dtos.into_iter().map(T::try_from).collect()
}

fn ids(raw: Vec<String>) -> Result<Vec<ItemId>, ValidationError> {
    raw.into_iter().map(ItemId::new).collect()
}

fn opt_id(raw: Option<String>) -> Result<Option<ItemId>, ValidationError> {
    raw.map(ItemId::new).transpose()
}
