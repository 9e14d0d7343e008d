//! Referred pain patterns — the relational core of the graph.
//!
//! A pattern owns its visceral source by value and names its dermatomal
//! basis by level code. Level codes are resolved against the dermatome
//! registry at query time, never stored as references.

use serde::{Deserialize, Serialize};

use super::{BodyRegion, LevelSet, Pathway, VisceralSource};

/// How often pain from the source is felt in a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Classic,
    Common,
    Variant,
}

/// A body-surface region a pattern refers pain to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRegion {
    pub region: BodyRegion,
    pub likelihood: Likelihood,
    pub description: String,
    pub highlight_color: String,
}

impl ReferralRegion {
    pub fn new(
        region: BodyRegion,
        likelihood: Likelihood,
        description: impl Into<String>,
        highlight_color: impl Into<String>,
    ) -> Self {
        Self {
            region,
            likelihood,
            description: description.into(),
            highlight_color: highlight_color.into(),
        }
    }
}

/// The physiological explanation of a referral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mechanism {
    pub theory: String,
    pub convergence_point: String,
    pub somatic_dermatomes: LevelSet,
    pub visceral_dermatomes: LevelSet,
    /// How the CNS misattributes the visceral signal to the surface.
    pub central_misinterpretation: String,
}

/// Bedside characteristics of the referred pain.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalFeatures {
    pub quality: Vec<String>,
    pub intensity: String,
    pub timing: String,
    pub aggravating_factors: Vec<String>,
    pub relieving_factors: Vec<String>,
    pub associated_symptoms: Vec<String>,
    pub typical_patient: String,
}

/// Reading depth for tiered explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExplanationLevel {
    Basic = 1,
    Simple = 2,
    Intermediate = 3,
    Advanced = 4,
    Expert = 5,
}

impl ExplanationLevel {
    pub const ALL: [ExplanationLevel; 5] = [
        Self::Basic,
        Self::Simple,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    /// Level from its 1-based depth.
    pub fn from_depth(depth: u8) -> Option<Self> {
        Self::ALL.get(usize::from(depth).checked_sub(1)?).copied()
    }
}

/// Five graduated prose explanations of one pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Explanations {
    pub level1: String,
    pub level2: String,
    pub level3: String,
    pub level4: String,
    pub level5: String,
}

impl Explanations {
    pub fn at(&self, level: ExplanationLevel) -> &str {
        match level {
            ExplanationLevel::Basic => &self.level1,
            ExplanationLevel::Simple => &self.level2,
            ExplanationLevel::Intermediate => &self.level3,
            ExplanationLevel::Advanced => &self.level4,
            ExplanationLevel::Expert => &self.level5,
        }
    }
}

/// A named association between a source organ and the surface regions
/// where its pain is felt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferredPainPattern {
    pub pattern_id: String,
    pub source_name: String,
    pub source_organ: VisceralSource,
    pub referral_regions: Vec<ReferralRegion>,
    pub dermatomal_basis: LevelSet,
    pub mechanism: Mechanism,
    pub pathway: Pathway,
    pub clinical_characteristics: ClinicalFeatures,
    pub explanations: Explanations,
}

impl ReferredPainPattern {
    pub fn refers_to(&self, region: BodyRegion) -> bool {
        self.referral_regions.iter().any(|r| r.region == region)
    }

    pub fn has_classic_referral(&self) -> bool {
        self.referral_regions
            .iter()
            .any(|r| r.likelihood == Likelihood::Classic)
    }

    /// Referral regions at the given likelihood, in definition order.
    pub fn regions_with(&self, likelihood: Likelihood) -> impl Iterator<Item = &ReferralRegion> {
        self.referral_regions
            .iter()
            .filter(move |r| r.likelihood == likelihood)
    }
}
