//! Explorer result — a pattern bundled with its education entry and
//! camera defaults, for a guided walkthrough view.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{Dermatome, EducationEntry, Pathway, ReferredPainPattern, Vec3};
use crate::ReferralGraph;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewSettings {
    pub camera_position: Vec3,
    pub show_dermatomes: bool,
    pub animation_speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerResult {
    /// Display name of the source organ.
    pub source_organ: String,
    pub referral_pattern: ReferredPainPattern,
    pub dermatomal_map: Vec<Dermatome>,
    pub educational_content: EducationEntry,
    pub animation_path: Pathway,
    pub view_settings: ViewSettings,
}

impl<C: Catalog> ReferralGraph<C> {
    /// Returns `None` unless both the pattern and its education entry exist.
    pub fn create_explorer_result(&self, pattern_id: &str) -> Option<ExplorerResult> {
        let pattern = self.pattern(pattern_id)?;
        let Some(education) = self.education(pattern_id) else {
            tracing::debug!(pattern_id, "explorer result requested for pattern without education");
            return None;
        };
        let config = self.config();

        Some(ExplorerResult {
            source_organ: pattern.source_organ.organ_name.clone(),
            referral_pattern: pattern.clone(),
            dermatomal_map: self
                .resolve_levels(&pattern.dermatomal_basis)
                .into_iter()
                .cloned()
                .collect(),
            educational_content: education.clone(),
            animation_path: pattern.pathway.clone(),
            view_settings: ViewSettings {
                camera_position: config.camera_position,
                show_dermatomes: config.show_dermatomes,
                animation_speed: config.animation_speed,
            },
        })
    }
}
