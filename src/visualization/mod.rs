//! Visualization state builder.
//!
//! Derives a render-ready descriptor from a pattern selection. The
//! descriptor is a fresh value: mutating it never touches the catalog.
//!
//! | Field | Derived from |
//! |-------|--------------|
//! | `active_pattern` | the selected pattern (copied) |
//! | `dermatomal_overlay` | `dermatomal_basis`, resolved against the registry |
//! | `pathway_animation` | config: stopped, step 0, configured speed |
//! | `source_highlight` | source `structure_id` + `SourceColorPolicy` |
//! | `referral_highlights` | `referral_regions` (copied) |

pub mod config;
pub mod explorer;

pub use config::{SourceColorPolicy, VisualizationConfig, DEFAULT_SOURCE_COLOR};
pub use explorer::{ExplorerResult, ViewSettings};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::model::{Dermatome, DermatomeLevel, LevelSet, ReferralRegion, ReferredPainPattern};
use crate::ReferralGraph;

/// How much of the dermatome map the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    Full,
    RelevantOnly,
    Single,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DermatomalOverlay {
    pub dermatomes: Vec<Dermatome>,
    pub display_mode: DisplayMode,
    pub opacity: f32,
    /// Levels currently picked out. Starts as the pattern's full basis.
    pub selected_levels: LevelSet,
}

impl DermatomalOverlay {
    /// Narrow the overlay to one level of the pattern's basis.
    /// Returns false if the level is not part of the overlay.
    pub fn focus(&mut self, level: DermatomeLevel) -> bool {
        if !self.dermatomes.iter().any(|d| d.level == level) {
            return false;
        }
        self.selected_levels.clear();
        self.selected_levels.push(level);
        self.display_mode = DisplayMode::Single;
        true
    }
}

/// Playback flags the renderer drives. See `playback::PathwayPlayer`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationControl {
    pub is_playing: bool,
    /// 0-based index into `active_pattern.pathway.steps`.
    pub current_step: usize,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceHighlight {
    pub structure_id: String,
    pub color: String,
    pub opacity: f32,
}

/// Everything a renderer needs to draw one selected pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationState {
    pub active_pattern: ReferredPainPattern,
    pub dermatomal_overlay: DermatomalOverlay,
    pub pathway_animation: AnimationControl,
    pub source_highlight: SourceHighlight,
    pub referral_highlights: Vec<ReferralRegion>,
}

impl<C: Catalog> ReferralGraph<C> {
    /// Build the initial visualization state for a pattern.
    ///
    /// Returns `None` if the pattern id is unknown. Basis levels missing from
    /// the dermatome registry are dropped from the overlay.
    pub fn create_visualization(&self, pattern_id: &str) -> Option<VisualizationState> {
        let Some(pattern) = self.pattern(pattern_id) else {
            tracing::debug!(pattern_id, "visualization requested for unknown pattern");
            return None;
        };
        Some(self.visualize(pattern))
    }

    /// Build the visualization state for a pattern value already in hand.
    pub fn visualize(&self, pattern: &ReferredPainPattern) -> VisualizationState {
        let config = self.config();
        VisualizationState {
            active_pattern: pattern.clone(),
            dermatomal_overlay: DermatomalOverlay {
                dermatomes: self.overlay_dermatomes(pattern),
                display_mode: config.display_mode,
                opacity: config.overlay_opacity,
                selected_levels: pattern.dermatomal_basis.clone(),
            },
            pathway_animation: AnimationControl {
                is_playing: false,
                current_step: 0,
                speed: config.animation_speed,
            },
            source_highlight: SourceHighlight {
                structure_id: pattern.source_organ.structure_id.clone(),
                color: config.source_color.resolve(pattern),
                opacity: config.source_opacity,
            },
            referral_highlights: pattern.referral_regions.clone(),
        }
    }

    /// Resolve a pattern's dermatomal basis in basis order.
    fn overlay_dermatomes(&self, pattern: &ReferredPainPattern) -> Vec<Dermatome> {
        let mut out = Vec::with_capacity(pattern.dermatomal_basis.len());
        for &level in &pattern.dermatomal_basis {
            match self.dermatome(level) {
                Some(d) => out.push(d.clone()),
                None => tracing::warn!(
                    pattern_id = %pattern.pattern_id,
                    level = %level,
                    "dropping unresolved dermatome from overlay"
                ),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::model::BodyRegion;
    use crate::MemoryCatalog;
    use pretty_assertions::assert_eq;

    fn levels_of(state: &VisualizationState) -> Vec<DermatomeLevel> {
        state.dermatomal_overlay.dermatomes.iter().map(|d| d.level).collect()
    }

    #[test]
    fn test_gallbladder_overlay_in_basis_order() {
        use DermatomeLevel::*;
        let g = ReferralGraph::builtin();
        let state = g.create_visualization("gallbladder-referred-pain").unwrap();
        assert_eq!(levels_of(&state), vec![T7, T8, T9, C4]);
        assert_eq!(state.dermatomal_overlay.display_mode, DisplayMode::RelevantOnly);
        assert_eq!(state.dermatomal_overlay.opacity, 0.6);
        assert_eq!(state.dermatomal_overlay.selected_levels.as_slice(), &[T7, T8, T9, C4]);
        assert_eq!(
            state.pathway_animation,
            AnimationControl { is_playing: false, current_step: 0, speed: 1.0 }
        );
        assert_eq!(state.source_highlight.structure_id, "digestive-gallbladder");
        assert_eq!(state.source_highlight.color, "#E74C3C");
        assert_eq!(state.source_highlight.opacity, 0.8);
        assert_eq!(state.referral_highlights, state.active_pattern.referral_regions);
    }

    #[test]
    fn test_unknown_pattern_is_none() {
        let g = ReferralGraph::builtin();
        assert!(g.create_visualization("nonexistent").is_none());
        assert!(g.create_visualization("").is_none());
    }

    #[test]
    fn test_unresolved_basis_level_dropped() {
        let mut patterns = builtin::patterns();
        patterns[1].dermatomal_basis.push(DermatomeLevel::S5);
        let catalog = MemoryCatalog::from_parts(
            builtin::dermatomes(),
            builtin::sources(),
            patterns,
            builtin::education(),
        )
        .unwrap();
        let g = ReferralGraph::with_catalog(catalog);
        let state = g.create_visualization("gallbladder-referred-pain").unwrap();
        assert_eq!(state.dermatomal_overlay.dermatomes.len(), 4);
        assert_eq!(state.active_pattern.dermatomal_basis.len(), 5);
    }

    #[test]
    fn test_state_is_independent_of_catalog() {
        let g = ReferralGraph::builtin();
        let mut state = g.create_visualization("cardiac-referred-pain").unwrap();
        state.active_pattern.referral_regions.clear();
        state.dermatomal_overlay.dermatomes.clear();
        let pattern = g.pattern("cardiac-referred-pain").unwrap();
        assert_eq!(pattern.referral_regions.len(), 6);
        assert!(pattern.refers_to(BodyRegion::ArmLeft));
    }

    #[test]
    fn test_config_flows_into_state() {
        let config = VisualizationConfig {
            display_mode: DisplayMode::Full,
            overlay_opacity: 0.4,
            animation_speed: 2.0,
            source_color: SourceColorPolicy::FirstPathwayStep,
            ..Default::default()
        };
        let g = ReferralGraph::builtin().with_config(config).unwrap();
        let state = g.create_visualization("appendix-referred-pain").unwrap();
        assert_eq!(state.dermatomal_overlay.display_mode, DisplayMode::Full);
        assert_eq!(state.dermatomal_overlay.opacity, 0.4);
        assert_eq!(state.pathway_animation.speed, 2.0);
        assert_eq!(state.source_highlight.color, "#E67E22");
    }

    #[test]
    fn test_out_of_range_config_is_rejected() {
        let opaque = VisualizationConfig { overlay_opacity: 2.0, ..Default::default() };
        assert!(matches!(
            ReferralGraph::builtin().with_config(opaque),
            Err(crate::Error::InvalidConfig(_))
        ));
        let frozen = VisualizationConfig { animation_speed: 0.0, ..Default::default() };
        assert!(matches!(
            ReferralGraph::builtin().with_config(frozen),
            Err(crate::Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_focus_single_level() {
        let g = ReferralGraph::builtin();
        let mut state = g.create_visualization("gallbladder-referred-pain").unwrap();
        assert!(!state.dermatomal_overlay.focus(DermatomeLevel::L1));
        assert!(state.dermatomal_overlay.focus(DermatomeLevel::C4));
        assert_eq!(state.dermatomal_overlay.display_mode, DisplayMode::Single);
        assert_eq!(state.dermatomal_overlay.selected_levels.as_slice(), &[DermatomeLevel::C4]);
    }

    #[test]
    fn test_state_serializes_camel_case() {
        let g = ReferralGraph::builtin();
        let state = g.create_visualization("diaphragm-referred-pain").unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["dermatomalOverlay"]["displayMode"], "relevant-only");
        assert_eq!(json["pathwayAnimation"]["isPlaying"], false);
        assert_eq!(json["sourceHighlight"]["structureId"], "respiratory-diaphragm");
    }
}
