//! End-to-end tests for the single-document snapshot.

use pretty_assertions::assert_eq;
use referral_graph::{Error, GraphDocument, MemoryCatalog, ReferralGraph};

#[test]
fn snapshot_reloads_into_an_equivalent_graph() {
    let shipped = referral_graph::global();
    let mut buf = Vec::new();
    shipped.write_document(&mut buf).unwrap();

    let doc = GraphDocument::from_json_str(std::str::from_utf8(&buf).unwrap()).unwrap();
    let reloaded = ReferralGraph::with_catalog(MemoryCatalog::from_document(doc).unwrap());

    assert_eq!(reloaded.all_sources(), shipped.all_sources());
    assert_eq!(reloaded.education("cardiac-referred-pain"), shipped.education("cardiac-referred-pain"));
    assert_eq!(
        reloaded.create_visualization("gallbladder-referred-pain"),
        shipped.create_visualization("gallbladder-referred-pain")
    );
}

#[test]
fn edited_snapshot_surfaces_integrity_violations() {
    let mut doc = referral_graph::global().export_document();
    doc.dermatomes.retain(|d| d.level.code() != "C4");

    let graph = ReferralGraph::from_document(doc).unwrap();
    let state = graph.create_visualization("gallbladder-referred-pain").unwrap();
    assert_eq!(state.dermatomal_overlay.dermatomes.len(), 3);
    assert!(matches!(graph.validate(), Err(Error::Integrity(v)) if !v.is_empty()));
}

#[test]
fn malformed_documents_are_rejected() {
    assert!(matches!(GraphDocument::from_json_str("[]"), Err(Error::Serialization(_))));
    let bad_level = r#"{"version":1,"dermatomes":[{"level":"Q1","bodyRegions":[],"surfaceArea":"","landmarks":[],"highlightColor":"","sensoryTestPoint":""}],"sources":[],"patterns":[],"education":[]}"#;
    assert!(GraphDocument::from_json_str(bad_level).is_err());

    let empty = r#"{"version":1,"dermatomes":[],"sources":[],"patterns":[],"education":[]}"#;
    let graph = ReferralGraph::from_document(GraphDocument::from_json_str(empty).unwrap()).unwrap();
    assert!(graph.all_patterns().is_empty());
    assert!(graph.create_visualization("cardiac-referred-pain").is_none());
    assert!(graph.validate().is_ok());
}
