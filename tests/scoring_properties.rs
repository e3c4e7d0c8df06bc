//! Property tests for canvas scoring, fit analysis, and comparison.
//!
//! Canvases are built from draft tuples whose selectors are reduced
//! modulo the enum tables, so every generated input constructs a valid
//! canvas and the analyzers must handle it.

use proptest::prelude::*;

use canvaslens::application::handlers::{AssessVpcCommand, AssessVpcHandler};
use canvaslens::domain::canvas::{
    ActivityType, BusinessCanvas, Channel, ChannelPhase, CostItem, CostType, CustomerGain,
    CustomerJob, CustomerPain, CustomerRelationship, CustomerSegment, GainCreator, GainType,
    JobType, KeyActivity, KeyPartnership, KeyResource, PainReliever, PartnershipType,
    PricingMechanism, ProductCategory, ProductService, RelationshipType, ResourceType,
    RevenueStream, SegmentType, ValueCanvas, ValuePropositionRef,
};
use canvaslens::domain::competitive::{compare, CompetitorProfile, THREAT_OVERLAP_THRESHOLD};
use canvaslens::domain::fit::{analyze_fit, FitBand};
use canvaslens::domain::foundation::{ItemId, Level, Thresholds};
use canvaslens::domain::recommend::recommend;
use canvaslens::domain::scoring::{
    score_bmc, score_vpc, BmcAttractivenessReport, Characteristic, Dimension, VpcQualityReport,
};

const JOB_TYPES: [JobType; 3] = [JobType::Functional, JobType::Social, JobType::Emotional];
const GAIN_TYPES: [GainType; 4] = [
    GainType::Required,
    GainType::Expected,
    GainType::Desired,
    GainType::Unexpected,
];
const PRODUCT_CATEGORIES: [ProductCategory; 4] = [
    ProductCategory::Physical,
    ProductCategory::Digital,
    ProductCategory::Service,
    ProductCategory::Financial,
];
const SEGMENT_TYPES: [SegmentType; 5] = [
    SegmentType::MassMarket,
    SegmentType::Niche,
    SegmentType::Segmented,
    SegmentType::Diversified,
    SegmentType::MultiSided,
];
const PHASES: [ChannelPhase; 5] = [
    ChannelPhase::Awareness,
    ChannelPhase::Evaluation,
    ChannelPhase::Purchase,
    ChannelPhase::Delivery,
    ChannelPhase::AfterSales,
];
const RELATIONSHIP_TYPES: [RelationshipType; 6] = [
    RelationshipType::PersonalAssistance,
    RelationshipType::DedicatedAssistance,
    RelationshipType::SelfService,
    RelationshipType::Automated,
    RelationshipType::Communities,
    RelationshipType::CoCreation,
];
const PRICING: [PricingMechanism; 6] = [
    PricingMechanism::Fixed,
    PricingMechanism::Dynamic,
    PricingMechanism::Auction,
    PricingMechanism::MarketDependent,
    PricingMechanism::VolumeDependent,
    PricingMechanism::Negotiation,
];
const RESOURCE_TYPES: [ResourceType; 4] = [
    ResourceType::Physical,
    ResourceType::Intellectual,
    ResourceType::Human,
    ResourceType::Financial,
];
const ACTIVITY_TYPES: [ActivityType; 3] = [
    ActivityType::Production,
    ActivityType::ProblemSolving,
    ActivityType::Platform,
];
const PARTNERSHIP_TYPES: [PartnershipType; 4] = [
    PartnershipType::StrategicAlliance,
    PartnershipType::Coopetition,
    PartnershipType::JointVenture,
    PartnershipType::BuyerSupplier,
];

/// Focus-area vocabulary shared between the canvas and competitor claims.
const FOCUS_POOL: [&str; 6] = [
    "automated alerts",
    "supplier escrow",
    "demand forecasting",
    "loyalty points",
    "same-day delivery",
    "price smoothing",
];

fn id(s: String) -> ItemId {
    ItemId::new(s).unwrap()
}

#[derive(Debug, Clone)]
struct VpcDraft {
    /// (job type selector, importance, satisfaction)
    jobs: Vec<(u8, u8, u8)>,
    /// (severity, frequency, addressed by a reliever)
    pains: Vec<(u8, u8, bool)>,
    /// (gain type selector, importance, created by a creator)
    gains: Vec<(u8, u8, bool)>,
    /// category selectors
    products: Vec<u8>,
}

fn arb_vpc() -> impl Strategy<Value = VpcDraft> {
    (
        proptest::collection::vec((0..3u8, 1..=5u8, 1..=5u8), 0..5),
        proptest::collection::vec((1..=5u8, 1..=5u8, any::<bool>()), 0..5),
        proptest::collection::vec((0..4u8, 1..=5u8, any::<bool>()), 0..5),
        proptest::collection::vec(0..4u8, 0..4),
    )
        .prop_map(|(jobs, pains, gains, products)| VpcDraft {
            jobs,
            pains,
            gains,
            products,
        })
}

fn build_vpc(draft: &VpcDraft) -> ValueCanvas {
    let jobs = draft
        .jobs
        .iter()
        .enumerate()
        .map(|(i, &(t, importance, satisfaction))| {
            CustomerJob::new(
                id(format!("j{i}")),
                format!("Job {i}"),
                JOB_TYPES[t as usize % JOB_TYPES.len()],
                Level::new(importance),
                Level::new(satisfaction),
            )
            .unwrap()
        })
        .collect();
    let pains = draft
        .pains
        .iter()
        .enumerate()
        .map(|(i, &(severity, frequency, _))| {
            CustomerPain::new(
                id(format!("p{i}")),
                format!("Pain {i}"),
                Level::new(severity),
                Level::new(frequency),
                vec![],
            )
            .unwrap()
        })
        .collect();
    let gains = draft
        .gains
        .iter()
        .enumerate()
        .map(|(i, &(t, importance, _))| {
            CustomerGain::new(
                id(format!("g{i}")),
                format!("Gain {i}"),
                GAIN_TYPES[t as usize % GAIN_TYPES.len()],
                Level::new(importance),
            )
            .unwrap()
        })
        .collect();
    let products = draft
        .products
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            ProductService::new(
                id(format!("pr{i}")),
                format!("Product {i}"),
                PRODUCT_CATEGORIES[c as usize % PRODUCT_CATEGORIES.len()],
            )
            .unwrap()
        })
        .collect();
    let relievers = draft
        .pains
        .iter()
        .enumerate()
        .filter(|(_, &(_, _, addressed))| addressed)
        .map(|(i, _)| {
            PainReliever::new(format!("Relieves pain {i}"), vec![id(format!("p{i}"))], None)
                .unwrap()
        })
        .collect();
    let creators = draft
        .gains
        .iter()
        .enumerate()
        .filter(|(_, &(_, _, created))| created)
        .map(|(i, _)| {
            GainCreator::new(format!("Creates gain {i}"), vec![id(format!("g{i}"))], None)
                .unwrap()
        })
        .collect();

    ValueCanvas::new(
        "Acme",
        "Small retailers",
        jobs,
        pains,
        gains,
        products,
        relievers,
        creators,
    )
    .unwrap()
}

/// Rebuilds the draft canvas with one extra severe pain appended,
/// optionally also adding the reliever that covers it. Both variants share
/// the same pain pool, so they differ only by that single reliever.
fn with_extra_pain(draft: &VpcDraft, relieved: bool) -> ValueCanvas {
    let base = build_vpc(draft);
    let extra = id("p-extra".to_string());

    let mut pains = base.pains().to_vec();
    pains.push(
        CustomerPain::new(
            extra.clone(),
            "Critical unmet pain",
            Level::new(5),
            Level::new(5),
            vec![],
        )
        .unwrap(),
    );
    let mut relievers = base.relievers().to_vec();
    if relieved {
        relievers.push(
            PainReliever::new("Targets the critical pain", vec![extra], None).unwrap(),
        );
    }

    ValueCanvas::new(
        "Acme",
        "Small retailers",
        base.jobs().to_vec(),
        pains,
        base.gains().to_vec(),
        base.products().to_vec(),
        relievers,
        base.creators().to_vec(),
    )
    .unwrap()
}

#[derive(Debug, Clone)]
struct BmcDraft {
    segments: Vec<u8>,
    propositions: u8,
    /// phase bitmask per channel
    channels: Vec<u8>,
    relationships: Vec<u8>,
    /// (pricing selector, recurring)
    revenue: Vec<(u8, bool)>,
    resources: Vec<u8>,
    activities: Vec<u8>,
    partnerships: Vec<u8>,
    fixed_costs: Vec<bool>,
}

fn arb_bmc() -> impl Strategy<Value = BmcDraft> {
    (
        proptest::collection::vec(0..5u8, 0..4),
        0..3u8,
        proptest::collection::vec(0..32u8, 0..4),
        proptest::collection::vec(0..6u8, 0..4),
        proptest::collection::vec((0..6u8, any::<bool>()), 0..4),
        proptest::collection::vec(0..4u8, 0..4),
        proptest::collection::vec(0..3u8, 0..4),
        proptest::collection::vec(0..4u8, 0..4),
        proptest::collection::vec(any::<bool>(), 0..4),
    )
        .prop_map(
            |(
                segments,
                propositions,
                channels,
                relationships,
                revenue,
                resources,
                activities,
                partnerships,
                fixed_costs,
            )| BmcDraft {
                segments,
                propositions,
                channels,
                relationships,
                revenue,
                resources,
                activities,
                partnerships,
                fixed_costs,
            },
        )
}

fn build_bmc(draft: &BmcDraft) -> BusinessCanvas {
    let segments = draft
        .segments
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            CustomerSegment::new(format!("Segment {i}"), SEGMENT_TYPES[t as usize % 5]).unwrap()
        })
        .collect();
    let value_propositions = (0..draft.propositions)
        .map(|i| ValuePropositionRef::new(format!("Proposition {i}"), format!("Segment {i}")).unwrap())
        .collect();
    let channels = draft
        .channels
        .iter()
        .enumerate()
        .map(|(i, &mask)| {
            let phases: Vec<ChannelPhase> = PHASES
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, &phase)| phase)
                .collect();
            Channel::new(format!("Channel {i}"), phases).unwrap()
        })
        .collect();
    let relationships = draft
        .relationships
        .iter()
        .map(|&t| CustomerRelationship::new(RELATIONSHIP_TYPES[t as usize % 6], None))
        .collect();
    let revenue_streams = draft
        .revenue
        .iter()
        .enumerate()
        .map(|(i, &(p, recurring))| {
            RevenueStream::new(format!("Stream {i}"), PRICING[p as usize % 6], recurring).unwrap()
        })
        .collect();
    let key_resources = draft
        .resources
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            KeyResource::new(format!("Resource {i}"), RESOURCE_TYPES[t as usize % 4]).unwrap()
        })
        .collect();
    let key_activities = draft
        .activities
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            KeyActivity::new(format!("Activity {i}"), ACTIVITY_TYPES[t as usize % 3]).unwrap()
        })
        .collect();
    let partnerships = draft
        .partnerships
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            KeyPartnership::new(format!("Partner {i}"), PARTNERSHIP_TYPES[t as usize % 4]).unwrap()
        })
        .collect();
    let cost_items = draft
        .fixed_costs
        .iter()
        .enumerate()
        .map(|(i, &fixed)| {
            let cost_type = if fixed { CostType::Fixed } else { CostType::Variable };
            CostItem::new(format!("Cost {i}"), cost_type).unwrap()
        })
        .collect();

    BusinessCanvas::new(
        "Acme",
        None,
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
    .unwrap()
}

fn focus_canvas(pain_focus: &[u8], gain_focus: &[u8]) -> ValueCanvas {
    let relievers = pain_focus
        .iter()
        .map(|&s| PainReliever::new(FOCUS_POOL[s as usize % 6], vec![], None).unwrap())
        .collect();
    let creators = gain_focus
        .iter()
        .map(|&s| GainCreator::new(FOCUS_POOL[s as usize % 6], vec![], None).unwrap())
        .collect();
    ValueCanvas::new(
        "Acme",
        "Small retailers",
        vec![],
        vec![],
        vec![],
        vec![],
        relievers,
        creators,
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every canvas scores all ten characteristics in report order,
    /// each 1-5 with a rationale, and the total is exactly their sum.
    #[test]
    fn property_vpc_report_covers_all_ten_in_order(draft in arb_vpc()) {
        let report = score_vpc(&build_vpc(&draft));

        prop_assert_eq!(report.characteristics.len(), Characteristic::ALL.len());
        for (entry, expected) in report.characteristics.iter().zip(Characteristic::ALL) {
            prop_assert_eq!(entry.characteristic, expected);
            prop_assert!((1..=5).contains(&entry.score.value()));
            prop_assert!(!entry.rationale.is_empty());
        }

        let sum: u8 = report.characteristics.iter().map(|c| c.score.value()).sum();
        prop_assert_eq!(report.total, sum);
        prop_assert!(report.total >= VpcQualityReport::MIN_TOTAL);
        prop_assert!(report.total <= VpcQualityReport::MAX_TOTAL);
    }

    /// PROPERTY: Scoring the same canvas twice yields identical reports.
    #[test]
    fn property_vpc_scoring_is_deterministic(draft in arb_vpc()) {
        let canvas = build_vpc(&draft);
        prop_assert_eq!(score_vpc(&canvas), score_vpc(&canvas));
    }

    /// PROPERTY: Every business model scores all seven dimensions in report
    /// order with the total as their sum.
    #[test]
    fn property_bmc_report_covers_all_seven_in_order(draft in arb_bmc()) {
        let report = score_bmc(&build_bmc(&draft));

        prop_assert_eq!(report.dimensions.len(), Dimension::ALL.len());
        for (entry, expected) in report.dimensions.iter().zip(Dimension::ALL) {
            prop_assert_eq!(entry.dimension, expected);
            prop_assert!((1..=5).contains(&entry.score.value()));
            prop_assert!(!entry.rationale.is_empty());
        }

        let sum: u8 = report.dimensions.iter().map(|d| d.score.value()).sum();
        prop_assert_eq!(report.total, sum);
        prop_assert!(report.total >= BmcAttractivenessReport::MIN_TOTAL);
        prop_assert!(report.total <= BmcAttractivenessReport::MAX_TOTAL);
    }

    /// PROPERTY: Scoring the same business model twice yields identical reports.
    #[test]
    fn property_bmc_scoring_is_deterministic(draft in arb_bmc()) {
        let canvas = build_bmc(&draft);
        prop_assert_eq!(score_bmc(&canvas), score_bmc(&canvas));
    }

    /// PROPERTY: Fit scores stay on the 0-100 scale, the band always matches
    /// the classifier, and no business model stage appears without a canvas.
    #[test]
    fn property_fit_stays_within_bounds(draft in arb_vpc()) {
        let thresholds = Thresholds::default();
        let report = analyze_fit(&build_vpc(&draft), None, &thresholds);
        let psf = &report.problem_solution;

        prop_assert!((0.0..=100.0).contains(&psf.score));
        if let Some(coverage) = psf.pain_coverage {
            prop_assert!((0.0..=100.0).contains(&coverage));
        }
        if let Some(coverage) = psf.gain_coverage {
            prop_assert!((0.0..=100.0).contains(&coverage));
        }
        prop_assert_eq!(psf.band, FitBand::classify(psf.score, &thresholds));

        let indicators = &report.market_indicators;
        prop_assert_eq!(indicators.solution_effectiveness, psf.score);
        if let Some(intensity) = indicators.pain_intensity {
            prop_assert!((1.0..=5.0).contains(&intensity));
        }
        if let Some(frequency) = indicators.pain_frequency {
            prop_assert!((1.0..=5.0).contains(&frequency));
        }

        prop_assert!(report.business_model.is_none());
    }

    /// PROPERTY: Covering a previously-unaddressed severe pain with a new
    /// reliever never lowers completeness or problem-solution fit.
    #[test]
    fn property_covering_an_open_pain_is_monotone(draft in arb_vpc()) {
        let thresholds = Thresholds::default();
        let before = with_extra_pain(&draft, false);
        let after = with_extra_pain(&draft, true);

        let psf_before = analyze_fit(&before, None, &thresholds).problem_solution.score;
        let psf_after = analyze_fit(&after, None, &thresholds).problem_solution.score;
        prop_assert!(psf_after >= psf_before);

        let completeness = |canvas: &ValueCanvas| {
            score_vpc(canvas)
                .characteristic(Characteristic::Completeness)
                .unwrap()
                .score
        };
        prop_assert!(completeness(&after) >= completeness(&before));
    }

    /// PROPERTY: Adding a business model introduces a bounded alignment stage
    /// without disturbing the problem-solution stage.
    #[test]
    fn property_business_model_stage_is_bounded_and_isolated(
        vpc_draft in arb_vpc(),
        bmc_draft in arb_bmc(),
    ) {
        let thresholds = Thresholds::default();
        let vpc = build_vpc(&vpc_draft);
        let bmc = build_bmc(&bmc_draft);

        let with = analyze_fit(&vpc, Some(&bmc), &thresholds);
        let without = analyze_fit(&vpc, None, &thresholds);
        prop_assert_eq!(&with.problem_solution, &without.problem_solution);

        let bmf = with.business_model.unwrap();
        prop_assert!((0.0..=100.0).contains(&bmf.score));
        prop_assert_eq!(bmf.band, FitBand::classify(bmf.score, &thresholds));
        prop_assert!((0.0..=100.0).contains(&bmf.segment_alignment.score));
        prop_assert!((0.0..=100.0).contains(&bmf.resource_alignment.score));
        if let Some(channel) = &bmf.channel_alignment {
            prop_assert!((0.0..=100.0).contains(&channel.score));
        }
    }

    /// PROPERTY: The recommendation list holds exactly the qualifying areas up
    /// to the cap, sorted weakest first.
    #[test]
    fn property_recommendations_match_qualifying_areas(
        draft in arb_vpc(),
        cutoff in 1..=5u8,
        max in 1..=8usize,
    ) {
        let thresholds = Thresholds {
            recommendation_cutoff: cutoff,
            max_recommendations: max,
            ..Thresholds::default()
        };
        let canvas = build_vpc(&draft);
        let quality = score_vpc(&canvas);
        let fit = analyze_fit(&canvas, None, &thresholds);

        let qualifying = quality
            .characteristics
            .iter()
            .filter(|c| c.score.value() < cutoff)
            .count()
            + usize::from(fit.problem_solution.score < thresholds.fit_poor_below);

        let recommendations = recommend(&quality, None, &fit, &thresholds);
        prop_assert_eq!(recommendations.len(), qualifying.min(max));

        for pair in recommendations.windows(2) {
            prop_assert!(pair[0].normalized <= pair[1].normalized);
        }
        for rec in &recommendations {
            prop_assert!((0.0..=1.0).contains(&rec.normalized));
            prop_assert!(!rec.area.is_empty());
            prop_assert!(!rec.rationale.is_empty());
            prop_assert!(!rec.suggestion.is_empty());
        }
    }

    /// PROPERTY: Comparison reports one overlap per competitor, sorted worst
    /// first, with threats exactly where the overlap exceeds the threshold.
    #[test]
    fn property_comparison_orders_overlaps_and_flags_threats(
        our_pains in proptest::collection::vec(0..6u8, 0..4),
        our_gains in proptest::collection::vec(0..6u8, 0..4),
        rivals in proptest::collection::vec(
            (proptest::collection::vec(0..6u8, 0..4), proptest::collection::vec(0..6u8, 0..4)),
            0..4,
        ),
    ) {
        let canvas = focus_canvas(&our_pains, &our_gains);
        let competitors: Vec<CompetitorProfile> = rivals
            .iter()
            .enumerate()
            .map(|(i, (pains, gains))| {
                CompetitorProfile::new(
                    format!("Rival {i}"),
                    pains.iter().map(|&s| FOCUS_POOL[s as usize % 6].to_string()).collect(),
                    gains.iter().map(|&s| FOCUS_POOL[s as usize % 6].to_string()).collect(),
                )
                .unwrap()
            })
            .collect();

        let report = compare(&canvas, &competitors);

        prop_assert_eq!(report.overlaps.len(), competitors.len());
        for pair in report.overlaps.windows(2) {
            prop_assert!(pair[0].total() >= pair[1].total());
        }

        let expected_threats = report
            .overlaps
            .iter()
            .filter(|o| o.total() > THREAT_OVERLAP_THRESHOLD)
            .count();
        prop_assert_eq!(report.threats.len(), expected_threats);

        for strength in &report.unique_strengths {
            prop_assert!(!report.exposed_gaps.contains(strength));
            prop_assert!(FOCUS_POOL.contains(&strength.as_str()));
        }
        prop_assert!(!report.positioning.is_empty());
    }

    /// PROPERTY: Competitor claim casing never changes overlap counts.
    #[test]
    fn property_comparison_ignores_claim_casing(
        our_pains in proptest::collection::vec(0..6u8, 1..4),
        claims in proptest::collection::vec(0..6u8, 1..4),
    ) {
        let canvas = focus_canvas(&our_pains, &[]);
        let lower: Vec<String> = claims
            .iter()
            .map(|&s| FOCUS_POOL[s as usize % 6].to_string())
            .collect();
        let upper: Vec<String> = lower.iter().map(|c| c.to_uppercase()).collect();

        let a = compare(
            &canvas,
            &[CompetitorProfile::new("Rival", lower, vec![]).unwrap()],
        );
        let b = compare(
            &canvas,
            &[CompetitorProfile::new("Rival", upper, vec![]).unwrap()],
        );

        prop_assert_eq!(a.overlaps[0].pain_overlap, b.overlaps[0].pain_overlap);
        prop_assert_eq!(&a.exposed_gaps, &b.exposed_gaps);
        prop_assert_eq!(&a.unique_strengths, &b.unique_strengths);
    }

    /// PROPERTY: The full assessment pipeline is deterministic end to end.
    #[test]
    fn property_full_assessment_is_deterministic(draft in arb_vpc()) {
        let handler = AssessVpcHandler::new(Thresholds::default());
        let cmd = AssessVpcCommand { canvas: build_vpc(&draft) };

        let a = handler.handle(&cmd);
        let b = handler.handle(&cmd);
        prop_assert_eq!(a.quality, b.quality);
        prop_assert_eq!(a.fit, b.fit);
        prop_assert_eq!(a.recommendations, b.recommendations);
    }

    /// PROPERTY: The rendered report always opens with the company header and
    /// quotes the quality total verbatim.
    #[test]
    fn property_markdown_report_quotes_the_quality_total(draft in arb_vpc()) {
        let handler = AssessVpcHandler::new(Thresholds::default());
        let cmd = AssessVpcCommand { canvas: build_vpc(&draft) };
        let result = handler.handle(&cmd);

        let markdown = canvaslens::adapters::render::vpc_assessment(&cmd.canvas, &result);
        prop_assert!(markdown.starts_with("# Value Proposition Canvas Assessment: Acme"));
        let expected_total = format!(
            "**Total Score: {} / {}**",
            result.quality.total,
            VpcQualityReport::MAX_TOTAL
        );
        prop_assert!(markdown.contains(&expected_total));
    }
}
