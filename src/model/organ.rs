//! Visceral pain sources and their innervation.

use serde::{Deserialize, Serialize};

use super::LevelSet;

/// Organ system classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganSystem {
    Cardiac,
    Hepatobiliary,
    Pulmonary,
    Gastrointestinal,
    Urogenital,
}

/// Autonomic and afferent wiring of an organ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Innervation {
    /// Spinal levels the sympathetic afferents enter at.
    pub sympathetic_levels: LevelSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parasympathetic_source: Option<String>,
    pub afferent_pathway: String,
    pub central_processing: String,
}

/// An internal organ whose pain can be referred to the body surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisceralSource {
    pub organ_id: String,
    pub organ_name: String,
    pub system: OrganSystem,
    /// Id into the anatomical structure catalog used by the renderer.
    pub structure_id: String,
    pub innervation: Innervation,
    pub common_conditions: Vec<String>,
}

impl VisceralSource {
    pub fn new(
        organ_id: impl Into<String>,
        organ_name: impl Into<String>,
        system: OrganSystem,
        structure_id: impl Into<String>,
        innervation: Innervation,
    ) -> Self {
        Self {
            organ_id: organ_id.into(),
            organ_name: organ_name.into(),
            system,
            structure_id: structure_id.into(),
            innervation,
            common_conditions: Vec::new(),
        }
    }

    pub fn with_conditions(mut self, conditions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.common_conditions = conditions.into_iter().map(Into::into).collect();
        self
    }
}
