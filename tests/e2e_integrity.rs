//! End-to-end integrity tests over the shipped dataset.
//!
//! These are the checks that guard the builder's silent-drop policy: if
//! any of them fail, some query is quietly returning less than it should.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use referral_graph::{Catalog, IntegrityViolation, Likelihood, ReferralGraph};

fn graph() -> &'static ReferralGraph {
    referral_graph::global()
}

#[test]
fn shipped_dataset_has_no_violations() {
    assert_eq!(graph().integrity_report(), Vec::<IntegrityViolation>::new());
    graph().validate().unwrap();
}

#[test]
fn every_basis_level_resolves() {
    for pattern in graph().all_patterns() {
        let resolved = graph().resolve_levels(&pattern.dermatomal_basis);
        assert_eq!(resolved.len(), pattern.dermatomal_basis.len(), "{}", pattern.pattern_id);
    }
}

#[test]
fn every_related_pattern_resolves() {
    for entry in graph().catalog().education_entries() {
        for edge in &entry.related_patterns {
            assert!(graph().resolve(edge).is_some(), "{} -> {}", entry.pattern_id, edge);
        }
    }
}

#[test]
fn embedded_sources_match_registry() {
    for pattern in graph().all_patterns() {
        let registered = graph().source(&pattern.source_organ.organ_id).unwrap();
        assert_eq!(registered, &pattern.source_organ);
    }
}

#[test]
fn pathways_are_numbered_and_summed() {
    for pattern in graph().all_patterns() {
        let pathway = &pattern.pathway;
        let numbers: Vec<u32> = pathway.steps.iter().map(|s| s.step_number).collect();
        let expected: Vec<u32> = (1..=pathway.len() as u32).collect();
        assert_eq!(numbers, expected, "{}", pattern.pattern_id);
        assert_eq!(pathway.summed_duration(), pathway.total_duration, "{}", pattern.pattern_id);
    }
}

#[test]
fn cardiac_pathway_durations() {
    let cardiac = graph().pattern("cardiac-referred-pain").unwrap();
    let durations: Vec<u64> = cardiac.pathway.steps.iter().map(|s| s.duration).collect();
    assert_eq!(durations, vec![2000, 1500, 1500, 2000, 1500, 1500, 2000]);
    assert_eq!(cardiac.pathway.total_duration, 12000);
    assert!(cardiac.pathway.loopable);
}

#[test]
fn every_pattern_has_a_classic_referral() {
    for pattern in graph().all_patterns() {
        assert!(!pattern.referral_regions.is_empty());
        assert!(
            pattern.referral_regions.iter().any(|r| r.likelihood == Likelihood::Classic),
            "{}",
            pattern.pattern_id
        );
    }
}

#[test]
fn keys_are_unique() {
    let g = graph();
    let levels: HashSet<_> = g.all_dermatomes().iter().map(|d| d.level).collect();
    assert_eq!(levels.len(), g.all_dermatomes().len());
    let ids: HashSet<_> = g.all_patterns().iter().map(|p| p.pattern_id.as_str()).collect();
    assert_eq!(ids.len(), g.all_patterns().len());
}
