//! Query engine — pure read functions over a catalog.
//!
//! Every function here is deterministic and side-effect free. Single-item
//! lookups return `Option`; multi-item queries return a `Vec` that is empty
//! on a miss and otherwise in catalog definition order.

use crate::catalog::Catalog;
use crate::model::*;
use crate::ReferralGraph;

/// Outcome of following one related-pattern edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelatedPattern<'a> {
    Resolved(&'a ReferredPainPattern),
    /// The edge names a pattern the catalog does not have.
    Broken(&'a PatternRef),
}

impl<'a> RelatedPattern<'a> {
    pub fn resolved(self) -> Option<&'a ReferredPainPattern> {
        match self {
            Self::Resolved(p) => Some(p),
            Self::Broken(_) => None,
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self, Self::Broken(_))
    }
}

impl<C: Catalog> ReferralGraph<C> {
    // ========================================================================
    // Dermatome registry
    // ========================================================================

    pub fn dermatome(&self, level: DermatomeLevel) -> Option<&Dermatome> {
        self.catalog().dermatome(level)
    }

    /// Look up by level code. An unparseable code is a miss.
    pub fn dermatome_by_code(&self, code: &str) -> Option<&Dermatome> {
        code.parse().ok().and_then(|level| self.dermatome(level))
    }

    pub fn all_dermatomes(&self) -> &[Dermatome] {
        self.catalog().dermatomes()
    }

    /// Dermatomes whose body-region set contains `region`, in C → S order.
    pub fn dermatomes_for_region(&self, region: BodyRegion) -> Vec<&Dermatome> {
        self.catalog()
            .dermatomes()
            .iter()
            .filter(|d| d.covers(region))
            .collect()
    }

    /// `dermatomes_for_region` keyed by a region tag such as `"arm-left"`.
    /// An unknown tag matches nothing.
    pub fn dermatomes_for_region_tag(&self, tag: &str) -> Vec<&Dermatome> {
        tag.parse::<BodyRegion>()
            .map_or_else(|_| Vec::new(), |region| self.dermatomes_for_region(region))
    }

    /// Resolve a level set, dropping levels the registry does not have.
    pub fn resolve_levels(&self, levels: &[DermatomeLevel]) -> Vec<&Dermatome> {
        levels.iter().filter_map(|&level| self.dermatome(level)).collect()
    }

    // ========================================================================
    // Visceral source registry
    // ========================================================================

    pub fn source(&self, organ_id: &str) -> Option<&VisceralSource> {
        self.catalog().source(organ_id)
    }

    pub fn all_sources(&self) -> &[VisceralSource] {
        self.catalog().sources()
    }

    // ========================================================================
    // Pain pattern catalog
    // ========================================================================

    pub fn pattern(&self, pattern_id: &str) -> Option<&ReferredPainPattern> {
        self.catalog().pattern(pattern_id)
    }

    /// Patterns whose embedded source organ is `organ_id`.
    pub fn patterns_by_organ(&self, organ_id: &str) -> Vec<&ReferredPainPattern> {
        self.catalog()
            .patterns()
            .iter()
            .filter(|p| p.source_organ.organ_id == organ_id)
            .collect()
    }

    /// Patterns that list `region` among their referral regions.
    pub fn patterns_referring_to_region(&self, region: BodyRegion) -> Vec<&ReferredPainPattern> {
        self.catalog()
            .patterns()
            .iter()
            .filter(|p| p.refers_to(region))
            .collect()
    }

    /// `patterns_referring_to_region` keyed by a region tag. An unknown tag
    /// matches nothing.
    pub fn patterns_referring_to_region_tag(&self, tag: &str) -> Vec<&ReferredPainPattern> {
        tag.parse::<BodyRegion>()
            .map_or_else(|_| Vec::new(), |region| self.patterns_referring_to_region(region))
    }

    pub fn all_patterns(&self) -> &[ReferredPainPattern] {
        self.catalog().patterns()
    }

    // ========================================================================
    // Education annex
    // ========================================================================

    /// Education entry for a pattern. Related-pattern edges are left
    /// unresolved; follow them with `resolve` or `related_patterns`.
    pub fn education(&self, pattern_id: &str) -> Option<&EducationEntry> {
        self.catalog().education(pattern_id)
    }

    /// Follow one weak pattern edge.
    pub fn resolve(&self, edge: &PatternRef) -> Option<&ReferredPainPattern> {
        self.pattern(edge.id())
    }

    /// Follow every related-pattern edge of a pattern's education entry,
    /// keeping broken edges visible.
    pub fn related_patterns(&self, pattern_id: &str) -> Vec<RelatedPattern<'_>> {
        let Some(entry) = self.education(pattern_id) else {
            return Vec::new();
        };
        entry
            .related_patterns
            .iter()
            .map(|edge| match self.resolve(edge) {
                Some(p) => RelatedPattern::Resolved(p),
                None => RelatedPattern::Broken(edge),
            })
            .collect()
    }
}
