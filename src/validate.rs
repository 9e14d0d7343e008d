//! Integrity pass over a whole catalog.
//!
//! Lookups never fail at read time, so a catalog can hold dangling level
//! codes, broken pattern edges or malformed pathways without any query
//! noticing. This pass walks every record and reports all of them at once.
//!
//! | Check | Violation |
//! |-------|-----------|
//! | basis level resolves | `UnresolvedBasisLevel` |
//! | mechanism levels resolve | `UnresolvedMechanismLevel` |
//! | innervation levels resolve | `UnresolvedInnervationLevel` |
//! | embedded source is registered | `UnknownSource` |
//! | embedded source equals registry record | `SourceMismatch` |
//! | related-pattern edges resolve | `BrokenRelatedPattern` |
//! | education entry has a pattern | `OrphanEducation` |
//! | steps numbered 1..=N | `StepNumberGap` |
//! | durations sum to the total | `DurationMismatch` |
//! | durations sum without overflow | `DurationOverflow` |
//! | at least one referral region | `EmptyReferral` |
//! | at least one classic region | `NoClassicReferral` |

use crate::catalog::Catalog;
use crate::model::{DermatomeLevel, ReferredPainPattern};
use crate::{Error, ReferralGraph, Result};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntegrityViolation {
    #[error("pattern {pattern_id}: dermatomal basis level {level} is not in the registry")]
    UnresolvedBasisLevel { pattern_id: String, level: DermatomeLevel },

    #[error("pattern {pattern_id}: mechanism level {level} is not in the registry")]
    UnresolvedMechanismLevel { pattern_id: String, level: DermatomeLevel },

    #[error("source {organ_id}: innervation level {level} is not in the registry")]
    UnresolvedInnervationLevel { organ_id: String, level: DermatomeLevel },

    #[error("pattern {pattern_id}: source organ {organ_id} is not in the source registry")]
    UnknownSource { pattern_id: String, organ_id: String },

    #[error("pattern {pattern_id}: embedded source {organ_id} differs from the registry record")]
    SourceMismatch { pattern_id: String, organ_id: String },

    #[error("education {pattern_id}: related pattern {target} does not exist")]
    BrokenRelatedPattern { pattern_id: String, target: String },

    #[error("education {pattern_id}: no pattern with this id")]
    OrphanEducation { pattern_id: String },

    #[error("pattern {pattern_id}: expected step number {expected}, found {found}")]
    StepNumberGap { pattern_id: String, expected: u32, found: u32 },

    #[error("pattern {pattern_id}: declared total {declared}ms, steps sum to {summed}ms")]
    DurationMismatch { pattern_id: String, declared: u64, summed: u64 },

    #[error("pattern {pattern_id}: step durations overflow a 64-bit millisecond total")]
    DurationOverflow { pattern_id: String },

    #[error("pattern {pattern_id}: no referral regions")]
    EmptyReferral { pattern_id: String },

    #[error("pattern {pattern_id}: no classic referral region")]
    NoClassicReferral { pattern_id: String },
}

impl<C: Catalog> ReferralGraph<C> {
    /// Every integrity violation in the catalog, in record order.
    pub fn integrity_report(&self) -> Vec<IntegrityViolation> {
        let catalog = self.catalog();
        let mut out = Vec::new();

        for source in catalog.sources() {
            for &level in &source.innervation.sympathetic_levels {
                if catalog.dermatome(level).is_none() {
                    out.push(IntegrityViolation::UnresolvedInnervationLevel {
                        organ_id: source.organ_id.clone(),
                        level,
                    });
                }
            }
        }

        for pattern in catalog.patterns() {
            self.check_pattern(pattern, &mut out);
        }

        for entry in catalog.education_entries() {
            if catalog.pattern(&entry.pattern_id).is_none() {
                out.push(IntegrityViolation::OrphanEducation { pattern_id: entry.pattern_id.clone() });
            }
            for edge in &entry.related_patterns {
                if self.resolve(edge).is_none() {
                    out.push(IntegrityViolation::BrokenRelatedPattern {
                        pattern_id: entry.pattern_id.clone(),
                        target: edge.id().to_string(),
                    });
                }
            }
        }

        for violation in &out {
            tracing::warn!(%violation, "integrity violation");
        }
        out
    }

    /// `Err(Error::Integrity)` carrying the full report if it is non-empty.
    pub fn validate(&self) -> Result<()> {
        let report = self.integrity_report();
        if report.is_empty() {
            Ok(())
        } else {
            Err(Error::Integrity(report))
        }
    }

    fn check_pattern(&self, pattern: &ReferredPainPattern, out: &mut Vec<IntegrityViolation>) {
        let catalog = self.catalog();
        let id = || pattern.pattern_id.clone();

        for level in unresolved(catalog, &pattern.dermatomal_basis) {
            out.push(IntegrityViolation::UnresolvedBasisLevel { pattern_id: id(), level });
        }
        let mechanism = &pattern.mechanism;
        let mechanism_levels = mechanism.somatic_dermatomes.iter().chain(&mechanism.visceral_dermatomes);
        let mut seen: Vec<DermatomeLevel> = Vec::new();
        for &level in mechanism_levels {
            if catalog.dermatome(level).is_none() && !seen.contains(&level) {
                seen.push(level);
                out.push(IntegrityViolation::UnresolvedMechanismLevel { pattern_id: id(), level });
            }
        }

        let embedded = &pattern.source_organ;
        match catalog.source(&embedded.organ_id) {
            None => out.push(IntegrityViolation::UnknownSource {
                pattern_id: id(),
                organ_id: embedded.organ_id.clone(),
            }),
            Some(registered) if registered != embedded => out.push(IntegrityViolation::SourceMismatch {
                pattern_id: id(),
                organ_id: embedded.organ_id.clone(),
            }),
            Some(_) => {}
        }

        let pathway = &pattern.pathway;
        if let Some((expected, found)) = pathway.numbering_gap() {
            out.push(IntegrityViolation::StepNumberGap { pattern_id: id(), expected, found });
        }
        match pathway.checked_duration() {
            None => out.push(IntegrityViolation::DurationOverflow { pattern_id: id() }),
            Some(summed) if summed != pathway.total_duration => {
                out.push(IntegrityViolation::DurationMismatch {
                    pattern_id: id(),
                    declared: pathway.total_duration,
                    summed,
                });
            }
            Some(_) => {}
        }

        if pattern.referral_regions.is_empty() {
            out.push(IntegrityViolation::EmptyReferral { pattern_id: id() });
        } else if !pattern.has_classic_referral() {
            out.push(IntegrityViolation::NoClassicReferral { pattern_id: id() });
        }
    }
}

fn unresolved<'a, C: Catalog>(
    catalog: &'a C,
    levels: &'a [DermatomeLevel],
) -> impl Iterator<Item = DermatomeLevel> + 'a {
    levels.iter().copied().filter(move |&level| catalog.dermatome(level).is_none())
}
