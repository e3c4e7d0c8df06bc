//! Value Proposition Canvas records.
//!
//! The customer profile (jobs, pains, gains) and the value map (products,
//! pain relievers, gain creators) are built once by the validation boundary
//! and never mutated afterwards. Relievers and creators point at profile
//! items by id; whether those ids resolve is the canvas index's business,
//! not a construction error.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{ItemId, Level, ValidationError};

/// What kind of progress a customer job represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    Functional,
    Social,
    Emotional,
}

impl JobType {
    /// All job types, in canonical order.
    pub const ALL: [JobType; 3] = [JobType::Functional, JobType::Social, JobType::Emotional];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            JobType::Functional => "Functional",
            JobType::Social => "Social",
            JobType::Emotional => "Emotional",
        }
    }
}

/// How strongly the customer expects a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainType {
    Required,
    Expected,
    Desired,
    Unexpected,
}

impl GainType {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            GainType::Required => "Required",
            GainType::Expected => "Expected",
            GainType::Desired => "Desired",
            GainType::Unexpected => "Unexpected",
        }
    }
}

/// Broad delivery category of a product or service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Physical,
    Digital,
    Service,
    Financial,
}

impl ProductCategory {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Physical => "Physical",
            ProductCategory::Digital => "Digital",
            ProductCategory::Service => "Service",
            ProductCategory::Financial => "Financial",
        }
    }
}

/// A job the customer is trying to get done.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerJob {
    pub id: ItemId,
    pub description: String,
    pub job_type: JobType,
    /// How much the job matters to the customer.
    pub importance: Level,
    /// How well existing solutions already serve it.
    pub satisfaction: Level,
}

impl CustomerJob {
    /// Creates a new job, returning error if the description is blank.
    pub fn new(
        id: ItemId,
        description: impl Into<String>,
        job_type: JobType,
        importance: Level,
        satisfaction: Level,
    ) -> Result<Self, ValidationError> {
        let description = non_blank("description", description)?;
        Ok(Self {
            id,
            description,
            job_type,
            importance,
            satisfaction,
        })
    }
}

/// An obstacle or negative outcome the customer experiences.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerPain {
    pub id: ItemId,
    pub description: String,
    pub severity: Level,
    pub frequency: Level,
    /// Jobs this pain blocks. Ids may dangle; the index reports those.
    pub related_jobs: Vec<ItemId>,
}

impl CustomerPain {
    /// Creates a new pain, returning error if the description is blank.
    pub fn new(
        id: ItemId,
        description: impl Into<String>,
        severity: Level,
        frequency: Level,
        related_jobs: Vec<ItemId>,
    ) -> Result<Self, ValidationError> {
        let description = non_blank("description", description)?;
        Ok(Self {
            id,
            description,
            severity,
            frequency,
            related_jobs,
        })
    }

    /// Severity times frequency (1-25), the weight a pain carries in
    /// coverage and focus computations.
    pub fn weight(&self) -> u16 {
        u16::from(self.severity.value()) * u16::from(self.frequency.value())
    }
}

/// A benefit the customer wants or would be surprised by.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerGain {
    pub id: ItemId,
    pub description: String,
    pub gain_type: GainType,
    pub importance: Level,
}

impl CustomerGain {
    /// Creates a new gain, returning error if the description is blank.
    pub fn new(
        id: ItemId,
        description: impl Into<String>,
        gain_type: GainType,
        importance: Level,
    ) -> Result<Self, ValidationError> {
        let description = non_blank("description", description)?;
        Ok(Self {
            id,
            description,
            gain_type,
            importance,
        })
    }
}

/// A product or service the company offers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductService {
    pub id: ItemId,
    pub description: String,
    pub category: ProductCategory,
}

impl ProductService {
    /// Creates a new product or service, returning error if the description is blank.
    pub fn new(
        id: ItemId,
        description: impl Into<String>,
        category: ProductCategory,
    ) -> Result<Self, ValidationError> {
        let description = non_blank("description", description)?;
        Ok(Self {
            id,
            description,
            category,
        })
    }
}

/// How an offering reduces specific pains.
#[derive(Debug, Clone, PartialEq)]
pub struct PainReliever {
    pub description: String,
    /// Pains this reliever addresses, by id.
    pub relieves: Vec<ItemId>,
    /// The product delivering the relief, if attributed.
    pub product: Option<ItemId>,
}

impl PainReliever {
    /// Creates a new pain reliever, returning error if the description is blank.
    pub fn new(
        description: impl Into<String>,
        relieves: Vec<ItemId>,
        product: Option<ItemId>,
    ) -> Result<Self, ValidationError> {
        let description = non_blank("description", description)?;
        Ok(Self {
            description,
            relieves,
            product,
        })
    }
}

/// How an offering produces specific gains.
#[derive(Debug, Clone, PartialEq)]
pub struct GainCreator {
    pub description: String,
    /// Gains this creator produces, by id.
    pub creates: Vec<ItemId>,
    /// The product delivering the gain, if attributed.
    pub product: Option<ItemId>,
}

impl GainCreator {
    /// Creates a new gain creator, returning error if the description is blank.
    pub fn new(
        description: impl Into<String>,
        creates: Vec<ItemId>,
        product: Option<ItemId>,
    ) -> Result<Self, ValidationError> {
        let description = non_blank("description", description)?;
        Ok(Self {
            description,
            creates,
            product,
        })
    }
}

/// A complete Value Proposition Canvas.
///
/// Lists may be empty; ids must be unique within their list. Construction
/// is the only mutation point, so every analysis function can take the
/// canvas by shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueCanvas {
    company: String,
    target_segment: String,
    jobs: Vec<CustomerJob>,
    pains: Vec<CustomerPain>,
    gains: Vec<CustomerGain>,
    products: Vec<ProductService>,
    relievers: Vec<PainReliever>,
    creators: Vec<GainCreator>,
}

impl ValueCanvas {
    /// Assembles a canvas, rejecting blank identity fields and duplicate
    /// ids within a list.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company: impl Into<String>,
        target_segment: impl Into<String>,
        jobs: Vec<CustomerJob>,
        pains: Vec<CustomerPain>,
        gains: Vec<CustomerGain>,
        products: Vec<ProductService>,
        relievers: Vec<PainReliever>,
        creators: Vec<GainCreator>,
    ) -> Result<Self, ValidationError> {
        let company = non_blank("company", company)?;
        let target_segment = non_blank("target_segment", target_segment)?;

        ensure_unique_ids("jobs", jobs.iter().map(|j| &j.id))?;
        ensure_unique_ids("pains", pains.iter().map(|p| &p.id))?;
        ensure_unique_ids("gains", gains.iter().map(|g| &g.id))?;
        ensure_unique_ids("products", products.iter().map(|p| &p.id))?;

        Ok(Self {
            company,
            target_segment,
            jobs,
            pains,
            gains,
            products,
            relievers,
            creators,
        })
    }

    /// Returns the company name.
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the customer segment this canvas targets.
    pub fn target_segment(&self) -> &str {
        &self.target_segment
    }

    /// Returns the customer jobs.
    pub fn jobs(&self) -> &[CustomerJob] {
        &self.jobs
    }

    /// Returns the customer pains.
    pub fn pains(&self) -> &[CustomerPain] {
        &self.pains
    }

    /// Returns the customer gains.
    pub fn gains(&self) -> &[CustomerGain] {
        &self.gains
    }

    /// Returns the products and services.
    pub fn products(&self) -> &[ProductService] {
        &self.products
    }

    /// Returns the pain relievers.
    pub fn relievers(&self) -> &[PainReliever] {
        &self.relievers
    }

    /// Returns the gain creators.
    pub fn creators(&self) -> &[GainCreator] {
        &self.creators
    }

    /// Returns true when all six lists are empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
            && self.pains.is_empty()
            && self.gains.is_empty()
            && self.products.is_empty()
            && self.relievers.is_empty()
            && self.creators.is_empty()
    }

    /// Returns true when the value-map side (products, relievers, creators)
    /// holds anything.
    pub fn has_value_map(&self) -> bool {
        !self.products.is_empty() || !self.relievers.is_empty() || !self.creators.is_empty()
    }

    /// Number of non-empty lists among the six (0-6).
    pub fn populated_sections(&self) -> usize {
        [
            !self.jobs.is_empty(),
            !self.pains.is_empty(),
            !self.gains.is_empty(),
            !self.products.is_empty(),
            !self.relievers.is_empty(),
            !self.creators.is_empty(),
        ]
        .iter()
        .filter(|populated| **populated)
        .count()
    }
}

fn non_blank(field: &str, value: impl Into<String>) -> Result<String, ValidationError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(value)
}

fn ensure_unique_ids<'a>(
    field: &str,
    ids: impl Iterator<Item = &'a ItemId>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::duplicate_id(field, id.as_str()));
        }
    }
    Ok(())
}
