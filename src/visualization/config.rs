//! Visualization policy — the builder-owned defaults, made configurable.

use serde::{Deserialize, Serialize};

use crate::model::{Likelihood, ReferredPainPattern, Vec3};
use crate::{Error, Result};
use super::DisplayMode;

/// Color used for the source organ when no pattern-derived color applies.
pub const DEFAULT_SOURCE_COLOR: &str = "#E74C3C";

/// How the builder picks the source-organ highlight color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", content = "color", rename_all = "kebab-case")]
pub enum SourceColorPolicy {
    /// One color for every pattern's source.
    Fixed(String),
    /// The first pathway step's highlight color (the source organ step).
    FirstPathwayStep,
    /// The first classic referral region's highlight color.
    FirstClassicRegion,
}

impl Default for SourceColorPolicy {
    fn default() -> Self {
        Self::Fixed(DEFAULT_SOURCE_COLOR.to_string())
    }
}

impl SourceColorPolicy {
    /// Color for this pattern, falling back to `DEFAULT_SOURCE_COLOR` when
    /// the pattern has nothing to derive from.
    pub fn resolve(&self, pattern: &ReferredPainPattern) -> String {
        let derived = match self {
            Self::Fixed(color) => Some(color.as_str()),
            Self::FirstPathwayStep => pattern
                .pathway
                .step(0)
                .map(|s| s.highlight_color.as_str()),
            Self::FirstClassicRegion => pattern
                .regions_with(Likelihood::Classic)
                .next()
                .map(|r| r.highlight_color.as_str()),
        };
        derived.unwrap_or(DEFAULT_SOURCE_COLOR).to_string()
    }
}

/// Builder policy for `VisualizationState` and `ExplorerResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisualizationConfig {
    pub display_mode: DisplayMode,
    pub overlay_opacity: f32,
    /// Initial playback speed multiplier.
    pub animation_speed: f32,
    pub source_color: SourceColorPolicy,
    pub source_opacity: f32,
    pub camera_position: Vec3,
    pub show_dermatomes: bool,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::RelevantOnly,
            overlay_opacity: 0.6,
            animation_speed: 1.0,
            source_color: SourceColorPolicy::default(),
            source_opacity: 0.8,
            camera_position: Vec3::new(0.0, 0.0, 2.5),
            show_dermatomes: true,
        }
    }
}

impl VisualizationConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("overlayOpacity", self.overlay_opacity),
            ("sourceOpacity", self.source_opacity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!("{name} must be within 0..=1, got {value}")));
            }
        }
        if !(self.animation_speed.is_finite() && self.animation_speed > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "animationSpeed must be positive, got {}",
                self.animation_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    #[test]
    fn test_defaults() {
        let c = VisualizationConfig::default();
        assert_eq!(c.display_mode, DisplayMode::RelevantOnly);
        assert_eq!(c.overlay_opacity, 0.6);
        assert_eq!(c.animation_speed, 1.0);
        assert_eq!(c.source_opacity, 0.8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let c = VisualizationConfig::from_json_str(
            r##"{"overlayOpacity": 0.3, "sourceColor": {"policy": "first-pathway-step"}}"##,
        )
        .unwrap();
        assert_eq!(c.overlay_opacity, 0.3);
        assert_eq!(c.source_color, SourceColorPolicy::FirstPathwayStep);
        assert_eq!(c.display_mode, DisplayMode::RelevantOnly);
        assert_eq!(c.animation_speed, 1.0);
    }

    #[test]
    fn test_fixed_color_json() {
        let c = VisualizationConfig::from_json_str(
            r##"{"sourceColor": {"policy": "fixed", "color": "#00FF00"}}"##,
        )
        .unwrap();
        assert_eq!(c.source_color, SourceColorPolicy::Fixed("#00FF00".into()));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = VisualizationConfig::from_json_str(r#"{"overlayOpacity": 1.5}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = VisualizationConfig::from_json_str(r#"{"animationSpeed": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        let err = VisualizationConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_color_policies() {
        let patterns = builtin::patterns();
        let gallbladder = &patterns[1];
        assert_eq!(SourceColorPolicy::default().resolve(gallbladder), "#E74C3C");
        assert_eq!(SourceColorPolicy::FirstPathwayStep.resolve(gallbladder), "#27AE60");
        assert_eq!(SourceColorPolicy::FirstClassicRegion.resolve(gallbladder), "#27AE60");

        let mut empty = gallbladder.clone();
        empty.pathway.steps.clear();
        empty.referral_regions.clear();
        assert_eq!(SourceColorPolicy::FirstPathwayStep.resolve(&empty), DEFAULT_SOURCE_COLOR);
        assert_eq!(SourceColorPolicy::FirstClassicRegion.resolve(&empty), DEFAULT_SOURCE_COLOR);
    }
}
