//! End-to-end tests for the registry and catalog queries.
//!
//! Runs against the process-wide built-in graph through the crate-root
//! functions, the same surface a host renderer uses.

use pretty_assertions::assert_eq;
use referral_graph::{
    BodyRegion, DermatomeLevel, ExplanationLevel, Likelihood, OrganSystem, ReferralGraph,
    SpinalSegment,
};

fn levels(dermatomes: &[&referral_graph::Dermatome]) -> Vec<DermatomeLevel> {
    dermatomes.iter().map(|d| d.level).collect()
}

// ============================================================================
// 1. Dermatome registry
// ============================================================================

#[test]
fn dermatome_registry_spans_c3_to_s2_in_order() {
    let all = referral_graph::get_all_dermatomes();
    assert_eq!(all.len(), 25);
    assert_eq!(all.first().map(|d| d.level), Some(DermatomeLevel::C3));
    assert_eq!(all.last().map(|d| d.level), Some(DermatomeLevel::S2));
    assert!(all.windows(2).all(|w| w[0].level < w[1].level));
}

#[test]
fn dermatome_lookup_by_level_and_code() {
    let c4 = referral_graph::get_dermatome(DermatomeLevel::C4).unwrap();
    assert!(c4.covers(BodyRegion::ShoulderLeft));
    assert_eq!(c4.level.segment(), SpinalSegment::Cervical);

    let by_code = referral_graph::get_dermatome_by_code("T10").unwrap();
    assert_eq!(by_code.level, DermatomeLevel::T10);
}

#[test]
fn invalid_or_unregistered_codes_are_misses() {
    assert!(referral_graph::get_dermatome_by_code("Z9").is_none());
    assert!(referral_graph::get_dermatome_by_code("t10").is_none());
    assert!(referral_graph::get_dermatome(DermatomeLevel::C1).is_none());
    assert!(referral_graph::get_dermatome(DermatomeLevel::S5).is_none());
}

#[test]
fn arm_left_maps_to_c5_through_t1() {
    use DermatomeLevel::*;
    let arm = referral_graph::get_dermatomes_for_region(BodyRegion::ArmLeft);
    assert_eq!(levels(&arm), vec![C5, C6, C7, C8, T1]);
}

#[test]
fn region_queries_follow_registry_order() {
    use DermatomeLevel::*;
    let shoulder = referral_graph::get_dermatomes_for_region(BodyRegion::ShoulderRight);
    assert_eq!(levels(&shoulder), vec![C4, C5]);
    assert!(referral_graph::get_dermatomes_for_region(BodyRegion::Jaw).is_empty());
}

#[test]
fn region_tag_queries_accept_wire_tags() {
    use DermatomeLevel::*;
    let arm = referral_graph::get_dermatomes_for_region_tag("arm-left");
    assert_eq!(levels(&arm), vec![C5, C6, C7, C8, T1]);
    assert_eq!(referral_graph::get_patterns_referring_to_region_tag("shoulder-left").len(), 2);

    assert!(referral_graph::get_dermatomes_for_region_tag("elbow").is_empty());
    assert!(referral_graph::get_dermatomes_for_region_tag("ARM-LEFT").is_empty());
    assert!(referral_graph::get_patterns_referring_to_region_tag("elbow").is_empty());
}

// ============================================================================
// 2. Visceral source registry
// ============================================================================

#[test]
fn source_registry_contents() {
    let g = referral_graph::global();
    let ids: Vec<&str> = g.all_sources().iter().map(|s| s.organ_id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["heart", "gallbladder", "diaphragm-central", "appendix", "kidney", "ureter", "pancreas", "spleen"]
    );

    let heart = referral_graph::get_source("heart").unwrap();
    assert_eq!(heart.system, OrganSystem::Cardiac);
    assert_eq!(heart.structure_id, "cardiovascular-heart");
    assert!(referral_graph::get_source("liver").is_none());
}

// ============================================================================
// 3. Pain pattern catalog
// ============================================================================

#[test]
fn heart_yields_only_cardiac() {
    let ids: Vec<&str> = referral_graph::get_patterns_by_organ("heart")
        .iter()
        .map(|p| p.pattern_id.as_str())
        .collect();
    assert_eq!(ids, vec!["cardiac-referred-pain"]);
}

#[test]
fn unknown_organ_yields_empty_sequence() {
    assert!(referral_graph::get_patterns_by_organ("unknown-organ").is_empty());
    assert!(referral_graph::get_pattern("unknown-pattern").is_none());
}

#[test]
fn catalog_definition_order() {
    let ids: Vec<&str> = referral_graph::get_all_referred_pain_patterns()
        .iter()
        .map(|p| p.pattern_id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec![
            "cardiac-referred-pain",
            "gallbladder-referred-pain",
            "diaphragm-referred-pain",
            "appendix-referred-pain",
            "renal-ureteral-referred-pain",
            "pancreatic-referred-pain",
        ]
    );
}

#[test]
fn patterns_referring_to_shoulder_left() {
    let ids: Vec<&str> = referral_graph::get_patterns_referring_to_region(BodyRegion::ShoulderLeft)
        .iter()
        .map(|p| p.pattern_id.as_str())
        .collect();
    assert_eq!(ids, vec!["cardiac-referred-pain", "diaphragm-referred-pain"]);
}

#[test]
fn cardiac_classic_regions_and_explanations() {
    let cardiac = referral_graph::get_pattern("cardiac-referred-pain").unwrap();
    let classic: Vec<BodyRegion> = cardiac.regions_with(Likelihood::Classic).map(|r| r.region).collect();
    assert_eq!(classic, vec![BodyRegion::ArmLeft, BodyRegion::ChestAnterior]);

    for level in ExplanationLevel::ALL {
        assert!(!cardiac.explanations.at(level).is_empty());
    }
}

// ============================================================================
// 4. Education annex
// ============================================================================

#[test]
fn education_entries_match_patterns() {
    for pattern in referral_graph::get_all_referred_pain_patterns() {
        let entry = referral_graph::get_pain_referral_education(&pattern.pattern_id).unwrap();
        assert_eq!(entry.pattern_id, pattern.pattern_id);
        assert!(!entry.red_flags.is_empty());
    }
    assert!(referral_graph::get_pain_referral_education("unknown").is_none());
}

#[test]
fn related_pattern_edges_resolve_lazily() {
    let g = referral_graph::global();
    let entry = g.education("renal-ureteral-referred-pain").unwrap();
    let target = g.resolve(&entry.related_patterns[0]).unwrap();
    assert_eq!(target.pattern_id, "appendix-referred-pain");
}

// ============================================================================
// 5. Independent graphs
// ============================================================================

#[test]
fn private_graph_matches_global() {
    let local = ReferralGraph::builtin();
    let global = referral_graph::global();
    assert_eq!(local.all_patterns(), global.all_patterns());
    assert_eq!(local.all_dermatomes(), global.all_dermatomes());
}

#[test]
fn global_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| referral_graph::get_patterns_by_organ("heart").len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 1);
    }
}
