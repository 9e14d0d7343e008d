//! Document export — the whole graph as one JSON document.
//!
//! A `GraphDocument` is a self-contained snapshot of the four registries,
//! suitable for diffing a reference dataset against another catalog or for
//! loading a catalog from disk.
//!
//! ```text
//! ReferralGraph → export_document() → GraphDocument → JSON
//!   → GraphDocument::from_json_str() → MemoryCatalog::from_document()
//! ```
//!
//! Registries are arrays rather than keyed objects so that definition order
//! survives the round trip.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::*;
use crate::{Error, ReferralGraph, Result};

/// Current document format version.
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    pub version: u32,
    pub dermatomes: Vec<Dermatome>,
    pub sources: Vec<VisceralSource>,
    pub patterns: Vec<ReferredPainPattern>,
    pub education: Vec<EducationEntry>,
}

impl GraphDocument {
    /// Snapshot any catalog.
    pub fn from_catalog<C: Catalog>(catalog: &C) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            dermatomes: catalog.dermatomes().to_vec(),
            sources: catalog.sources().to_vec(),
            patterns: catalog.patterns().to_vec(),
            education: catalog.education_entries().to_vec(),
        }
    }

    /// Parse a document, rejecting versions this crate does not read.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let doc: Self = serde_json::from_str(s)?;
        if doc.version != DOCUMENT_VERSION {
            return Err(Error::InvalidDocument(format!(
                "unsupported version {} (expected {DOCUMENT_VERSION})",
                doc.version
            )));
        }
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<C: Catalog> ReferralGraph<C> {
    pub fn export_document(&self) -> GraphDocument {
        GraphDocument::from_catalog(self.catalog())
    }

    /// Write the document as pretty-printed JSON followed by a newline.
    pub fn write_document(&self, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.export_document())?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_round_trip() {
        let g = ReferralGraph::builtin();
        let mut buf = Vec::new();
        g.write_document(&mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let doc = GraphDocument::from_json_str(&text).unwrap();
        assert_eq!(doc, g.export_document());

        let reloaded = ReferralGraph::from_document(doc).unwrap();
        assert_eq!(reloaded.all_dermatomes(), g.all_dermatomes());
        assert_eq!(reloaded.all_patterns(), g.all_patterns());
        assert!(reloaded.validate().is_ok());
    }

    #[test]
    fn test_wire_shape() {
        let json = serde_json::to_value(ReferralGraph::builtin().export_document()).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["dermatomes"][0]["level"], "C3");
        assert_eq!(json["dermatomes"][0]["bodyRegions"][0], "neck");
        assert_eq!(json["patterns"][0]["patternId"], "cardiac-referred-pain");
        assert_eq!(json["patterns"][0]["pathway"]["totalDuration"], 12000);
        assert_eq!(json["education"][1]["relatedPatterns"][0], "diaphragm-referred-pain");
    }

    #[test]
    fn test_rejects_unknown_version() {
        let mut doc = ReferralGraph::builtin().export_document();
        doc.version = 99;
        let text = doc.to_json_pretty().unwrap();
        assert!(matches!(GraphDocument::from_json_str(&text), Err(Error::InvalidDocument(_))));
    }

    #[test]
    fn test_duplicate_keys_rejected_on_load() {
        let mut doc = ReferralGraph::builtin().export_document();
        let dup = doc.patterns[0].clone();
        doc.patterns.push(dup);
        assert!(matches!(
            ReferralGraph::from_document(doc),
            Err(Error::DuplicateKey { registry: "patterns", .. })
        ));
    }
}
