//! Cross-reference index over a Value Proposition Canvas.
//!
//! Built once per analysis pass. Resolves every id reference a canvas
//! carries (reliever -> pain, creator -> gain, either -> product,
//! pain -> job) against the owning lists, records what resolved and what
//! dangled, and exposes the derived views every scorer needs. Iteration
//! orders are fixed: canvas order for items, encounter order for
//! unresolved references.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::domain::foundation::ItemId;

use super::vpc::{CustomerGain, CustomerJob, CustomerPain, ProductService, ValueCanvas};

/// Which list a reference was expected to resolve in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefTarget {
    Job,
    Pain,
    Gain,
    Product,
}

impl RefTarget {
    /// Returns the lowercase label used in rationale text.
    pub fn label(&self) -> &'static str {
        match self {
            RefTarget::Job => "job",
            RefTarget::Pain => "pain",
            RefTarget::Gain => "gain",
            RefTarget::Product => "product",
        }
    }
}

/// A reference that does not resolve within its canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRef {
    pub target: RefTarget,
    pub id: ItemId,
}

impl UnresolvedRef {
    /// Renders the reference for rationale text, e.g. `pain 'p9'`.
    pub fn describe(&self) -> String {
        format!("{} '{}'", self.target.label(), self.id)
    }
}

/// Resolved view over one canvas.
pub struct VpcIndex<'a> {
    jobs_by_id: HashMap<&'a str, &'a CustomerJob>,
    pains_by_id: HashMap<&'a str, &'a CustomerPain>,
    gains_by_id: HashMap<&'a str, &'a CustomerGain>,
    products_by_id: HashMap<&'a str, &'a ProductService>,
    addressed_pain_ids: HashSet<&'a str>,
    created_gain_ids: HashSet<&'a str>,
    addressed_pains: Vec<&'a CustomerPain>,
    created_gains: Vec<&'a CustomerGain>,
    linked_product_ids: BTreeSet<&'a str>,
    resolved_pain_refs: usize,
    resolved_gain_refs: usize,
    unresolved: Vec<UnresolvedRef>,
}

impl<'a> VpcIndex<'a> {
    /// Indexes the canvas. One linear pass over each list plus one over
    /// every reference.
    pub fn new(canvas: &'a ValueCanvas) -> Self {
        let jobs_by_id: HashMap<_, _> =
            canvas.jobs().iter().map(|j| (j.id.as_str(), j)).collect();
        let pains_by_id: HashMap<_, _> =
            canvas.pains().iter().map(|p| (p.id.as_str(), p)).collect();
        let gains_by_id: HashMap<_, _> =
            canvas.gains().iter().map(|g| (g.id.as_str(), g)).collect();
        let products_by_id: HashMap<_, _> =
            canvas.products().iter().map(|p| (p.id.as_str(), p)).collect();

        let mut addressed_pain_ids = HashSet::new();
        let mut created_gain_ids = HashSet::new();
        let mut linked_product_ids = BTreeSet::new();
        let mut resolved_pain_refs = 0;
        let mut resolved_gain_refs = 0;
        let mut unresolved = Vec::new();
        let mut seen_unresolved = HashSet::new();

        let mut note_unresolved = |list: &mut Vec<UnresolvedRef>,
                                   seen: &mut HashSet<(RefTarget, String)>,
                                   target: RefTarget,
                                   id: &ItemId| {
            if seen.insert((target, id.as_str().to_string())) {
                list.push(UnresolvedRef {
                    target,
                    id: id.clone(),
                });
            }
        };

        for reliever in canvas.relievers() {
            for pain_id in &reliever.relieves {
                match pains_by_id.get(pain_id.as_str()) {
                    Some(pain) => {
                        resolved_pain_refs += 1;
                        addressed_pain_ids.insert(pain.id.as_str());
                    }
                    None => note_unresolved(
                        &mut unresolved,
                        &mut seen_unresolved,
                        RefTarget::Pain,
                        pain_id,
                    ),
                }
            }
            if let Some(product_id) = &reliever.product {
                match products_by_id.get(product_id.as_str()) {
                    Some(product) => {
                        linked_product_ids.insert(product.id.as_str());
                    }
                    None => note_unresolved(
                        &mut unresolved,
                        &mut seen_unresolved,
                        RefTarget::Product,
                        product_id,
                    ),
                }
            }
        }

        for creator in canvas.creators() {
            for gain_id in &creator.creates {
                match gains_by_id.get(gain_id.as_str()) {
                    Some(gain) => {
                        resolved_gain_refs += 1;
                        created_gain_ids.insert(gain.id.as_str());
                    }
                    None => note_unresolved(
                        &mut unresolved,
                        &mut seen_unresolved,
                        RefTarget::Gain,
                        gain_id,
                    ),
                }
            }
            if let Some(product_id) = &creator.product {
                match products_by_id.get(product_id.as_str()) {
                    Some(product) => {
                        linked_product_ids.insert(product.id.as_str());
                    }
                    None => note_unresolved(
                        &mut unresolved,
                        &mut seen_unresolved,
                        RefTarget::Product,
                        product_id,
                    ),
                }
            }
        }

        for pain in canvas.pains() {
            for job_id in &pain.related_jobs {
                if !jobs_by_id.contains_key(job_id.as_str()) {
                    note_unresolved(
                        &mut unresolved,
                        &mut seen_unresolved,
                        RefTarget::Job,
                        job_id,
                    );
                }
            }
        }

        // Canvas order, so downstream rationale text is stable.
        let addressed_pains = canvas
            .pains()
            .iter()
            .filter(|p| addressed_pain_ids.contains(p.id.as_str()))
            .collect();
        let created_gains = canvas
            .gains()
            .iter()
            .filter(|g| created_gain_ids.contains(g.id.as_str()))
            .collect();

        Self {
            jobs_by_id,
            pains_by_id,
            gains_by_id,
            products_by_id,
            addressed_pain_ids,
            created_gain_ids,
            addressed_pains,
            created_gains,
            linked_product_ids,
            resolved_pain_refs,
            resolved_gain_refs,
            unresolved,
        }
    }

    /// Looks up a job by id.
    pub fn job(&self, id: &ItemId) -> Option<&'a CustomerJob> {
        self.jobs_by_id.get(id.as_str()).copied()
    }

    /// Looks up a pain by id.
    pub fn pain(&self, id: &ItemId) -> Option<&'a CustomerPain> {
        self.pains_by_id.get(id.as_str()).copied()
    }

    /// Looks up a gain by id.
    pub fn gain(&self, id: &ItemId) -> Option<&'a CustomerGain> {
        self.gains_by_id.get(id.as_str()).copied()
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &ItemId) -> Option<&'a ProductService> {
        self.products_by_id.get(id.as_str()).copied()
    }

    /// Pains with at least one resolved reliever reference, in canvas order.
    pub fn addressed_pains(&self) -> &[&'a CustomerPain] {
        &self.addressed_pains
    }

    /// Gains with at least one resolved creator reference, in canvas order.
    pub fn created_gains(&self) -> &[&'a CustomerGain] {
        &self.created_gains
    }

    /// Returns true if any resolved reliever reference targets this pain.
    pub fn pain_is_addressed(&self, id: &ItemId) -> bool {
        self.addressed_pain_ids.contains(id.as_str())
    }

    /// Returns true if any resolved creator reference targets this gain.
    pub fn gain_is_created(&self, id: &ItemId) -> bool {
        self.created_gain_ids.contains(id.as_str())
    }

    /// Dangling references in encounter order, deduplicated per (kind, id).
    pub fn unresolved(&self) -> &[UnresolvedRef] {
        &self.unresolved
    }

    /// Returns true when every reference in the canvas resolves.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Total resolved pain and gain references, counted with multiplicity.
    pub fn resolved_reference_count(&self) -> usize {
        self.resolved_pain_refs + self.resolved_gain_refs
    }

    /// Distinct pains and gains addressed by the value map.
    pub fn distinct_addressed_count(&self) -> usize {
        self.addressed_pains.len() + self.created_gains.len()
    }

    /// Distinct products the value map attributes relief or gains to.
    pub fn linked_product_count(&self) -> usize {
        self.linked_product_ids.len()
    }
}
