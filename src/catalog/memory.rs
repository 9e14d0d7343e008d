//! In-memory catalog.
//!
//! This is the reference implementation of `Catalog`. Each registry is a
//! `Vec` in definition order plus a hash index from key to position, so
//! point lookups are O(1) and enumerations keep the authored order.
//!
//! The catalog is immutable once built. Construction is the only place a
//! registry can be rejected, and it only rejects duplicate keys; graph
//! integrity (dangling levels, broken edges, bad pathways) is reported by
//! `ReferralGraph::integrity_report()`.

use std::fmt::Display;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::export::GraphDocument;
use crate::model::*;
use crate::{Error, Result};
use super::{builtin, Catalog};

// ============================================================================
// MemoryCatalog
// ============================================================================

/// In-memory referred-pain knowledge graph storage.
#[derive(Debug, Clone)]
pub struct MemoryCatalog {
    dermatomes: Vec<Dermatome>,
    dermatome_index: HashMap<DermatomeLevel, usize>,
    sources: Vec<VisceralSource>,
    source_index: HashMap<String, usize>,
    patterns: Vec<ReferredPainPattern>,
    pattern_index: HashMap<String, usize>,
    education: Vec<EducationEntry>,
    education_index: HashMap<String, usize>,
}

impl MemoryCatalog {
    /// Build a catalog from its four registries.
    ///
    /// Fails with `Error::DuplicateKey` if any registry repeats a key.
    pub fn from_parts(
        dermatomes: Vec<Dermatome>,
        sources: Vec<VisceralSource>,
        patterns: Vec<ReferredPainPattern>,
        education: Vec<EducationEntry>,
    ) -> Result<Self> {
        let dermatome_index = index_by("dermatomes", &dermatomes, |d| d.level)?;
        let source_index = index_by("sources", &sources, |s| s.organ_id.clone())?;
        let pattern_index = index_by("patterns", &patterns, |p| p.pattern_id.clone())?;
        let education_index = index_by("education", &education, |e| e.pattern_id.clone())?;

        Ok(Self {
            dermatomes,
            dermatome_index,
            sources,
            source_index,
            patterns,
            pattern_index,
            education,
            education_index,
        })
    }

    /// The shipped dataset.
    pub fn builtin() -> Self {
        Self::from_parts(
            builtin::dermatomes(),
            builtin::sources(),
            builtin::patterns(),
            builtin::education(),
        )
        .expect("built-in registries have unique keys")
    }

    /// Load a catalog from a serialized graph document.
    pub fn from_document(doc: GraphDocument) -> Result<Self> {
        Self::from_parts(doc.dermatomes, doc.sources, doc.patterns, doc.education)
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Map each record's key to its position, rejecting repeats.
fn index_by<T, K, F>(registry: &'static str, items: &[T], key: F) -> Result<HashMap<K, usize>>
where
    K: Eq + Hash + Display,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let k = key(item);
        if index.contains_key(&k) {
            return Err(Error::DuplicateKey { registry, key: k.to_string() });
        }
        index.insert(k, pos);
    }
    Ok(index)
}

// ============================================================================
// Catalog impl
// ============================================================================

impl Catalog for MemoryCatalog {
    fn dermatome(&self, level: DermatomeLevel) -> Option<&Dermatome> {
        self.dermatome_index.get(&level).map(|&i| &self.dermatomes[i])
    }

    fn dermatomes(&self) -> &[Dermatome] {
        &self.dermatomes
    }

    fn source(&self, organ_id: &str) -> Option<&VisceralSource> {
        self.source_index.get(organ_id).map(|&i| &self.sources[i])
    }

    fn sources(&self) -> &[VisceralSource] {
        &self.sources
    }

    fn pattern(&self, pattern_id: &str) -> Option<&ReferredPainPattern> {
        self.pattern_index.get(pattern_id).map(|&i| &self.patterns[i])
    }

    fn patterns(&self) -> &[ReferredPainPattern] {
        &self.patterns
    }

    fn education(&self, pattern_id: &str) -> Option<&EducationEntry> {
        self.education_index.get(pattern_id).map(|&i| &self.education[i])
    }

    fn education_entries(&self) -> &[EducationEntry] {
        &self.education
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_counts() {
        let c = MemoryCatalog::builtin();
        assert_eq!(c.dermatomes().len(), 25);
        assert_eq!(c.sources().len(), 8);
        assert_eq!(c.patterns().len(), 6);
        assert_eq!(c.education_entries().len(), 6);
    }

    #[test]
    fn test_point_lookups() {
        let c = MemoryCatalog::builtin();
        assert_eq!(c.dermatome(DermatomeLevel::T10).unwrap().surface_area, "Umbilicus level");
        assert!(c.dermatome(DermatomeLevel::C1).is_none());
        assert_eq!(c.source("spleen").unwrap().organ_name, "Spleen");
        assert!(c.source("liver").is_none());
        assert!(c.pattern("cardiac-referred-pain").is_some());
        assert!(c.education("nope").is_none());
    }

    #[test]
    fn test_duplicate_dermatome_rejected() {
        let d = Dermatome::new(DermatomeLevel::C4, [BodyRegion::Neck], "neck");
        let err = MemoryCatalog::from_parts(vec![d.clone(), d], vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateKey { registry: "dermatomes", ref key } if key == "C4"
        ));
    }

    #[test]
    fn test_duplicate_pattern_rejected() {
        let mut patterns = builtin::patterns();
        patterns.push(patterns[0].clone());
        let err = MemoryCatalog::from_parts(
            builtin::dermatomes(),
            builtin::sources(),
            patterns,
            builtin::education(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey { registry: "patterns", .. }));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let c = MemoryCatalog::from_parts(vec![], vec![], vec![], vec![]).unwrap();
        assert!(c.patterns().is_empty());
        assert!(c.pattern("cardiac-referred-pain").is_none());
    }
}
