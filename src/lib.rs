//! # referral-graph — Referred-Pain Knowledge Graph
//!
//! A read-only graph of dermatomes, visceral organs and the referred pain
//! patterns that connect them, plus the derivation of a render-ready
//! visualization descriptor from a pattern selection.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `Catalog` is the contract between queries and data
//! 2. **Ids, not pointers**: records cross-reference by id or level code and
//!    are resolved lazily; a pattern owns only its visceral source
//! 3. **Build once, read forever**: catalogs are immutable after
//!    construction and shared across threads without locks
//! 4. **Misses are values**: every lookup returns `Option` or an empty `Vec`;
//!    integrity problems are found by `integrity_report()`, not at read time
//!
//! ## Quick Start
//!
//! ```rust
//! use referral_graph::{BodyRegion, DisplayMode};
//!
//! let heart = referral_graph::get_patterns_by_organ("heart");
//! assert_eq!(heart[0].pattern_id, "cardiac-referred-pain");
//!
//! let arm = referral_graph::get_dermatomes_for_region(BodyRegion::ArmLeft);
//! assert_eq!(arm.len(), 5);
//!
//! let state = referral_graph::create_pain_referral_visualization("gallbladder-referred-pain")
//!     .expect("pattern exists");
//! assert_eq!(state.dermatomal_overlay.display_mode, DisplayMode::RelevantOnly);
//! assert!(!state.pathway_animation.is_playing);
//! ```
//!
//! ## Components
//!
//! | Component | Module | Description |
//! |-----------|--------|-------------|
//! | Model | `model` | Dermatomes, sources, patterns, pathways, education |
//! | Catalog | `catalog` | `Catalog` trait, `MemoryCatalog`, built-in dataset |
//! | Query engine | `query` | Pure lookups and filters over a catalog |
//! | Visualization | `visualization` | `VisualizationState` builder and config |
//! | Playback | `playback` | Reference player for pathway animation |
//! | Validation | `validate` | Referential and pathway integrity pass |
//! | Export | `export` | Single-document JSON snapshot |

use std::sync::LazyLock;

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod catalog;
pub mod query;
pub mod visualization;
pub mod playback;
pub mod validate;
pub mod export;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    AtypicalPresentation, BodyRegion, ClinicalFeatures, Dermatome, DermatomeLevel,
    EducationEntry, ExplanationLevel, Explanations, Innervation, LevelSet, Likelihood,
    Mechanism, OrganSystem, Pathway, PathwayStep, PatternRef, ReferralRegion,
    ReferredPainPattern, SpinalSegment, Vec3, VisceralSource,
};

// ============================================================================
// Re-exports: Catalog, queries, derived views
// ============================================================================

pub use catalog::{Catalog, MemoryCatalog};
pub use query::RelatedPattern;
pub use visualization::{
    AnimationControl, DermatomalOverlay, DisplayMode, ExplorerResult, SourceColorPolicy,
    SourceHighlight, ViewSettings, VisualizationConfig, VisualizationState,
};
pub use playback::{PathwayPlayer, PlaybackEvent, PlaybackState};
pub use validate::IntegrityViolation;
pub use export::GraphDocument;

/// Shown alongside any referral content.
pub const PAIN_REFERRAL_DISCLAIMER: &str = "\
This educational content about pain referral patterns is for informational purposes only
and does not constitute medical advice. Understanding referred pain patterns is important
for general health literacy, but any concerning symptoms should be evaluated by a
qualified healthcare provider. Do not use this information to self-diagnose or delay
seeking appropriate medical care.";

// ============================================================================
// Top-level ReferralGraph handle
// ============================================================================

/// The primary entry point. A `ReferralGraph` wraps a catalog and the
/// visualization policy applied when deriving view state from it.
#[derive(Debug, Clone)]
pub struct ReferralGraph<C: Catalog = MemoryCatalog> {
    catalog: C,
    config: VisualizationConfig,
}

impl<C: Catalog> ReferralGraph<C> {
    /// Create a graph over the given catalog with default visualization policy.
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog, config: VisualizationConfig::default() }
    }

    /// Replace the visualization policy.
    ///
    /// Fails with `Error::InvalidConfig` on an out-of-range opacity or a
    /// non-positive animation speed, the same checks `from_json_str` runs.
    pub fn with_config(mut self, config: VisualizationConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Access the underlying catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &VisualizationConfig {
        &self.config
    }
}

impl ReferralGraph<MemoryCatalog> {
    /// Graph over the shipped dataset.
    pub fn builtin() -> Self {
        Self::with_catalog(MemoryCatalog::builtin())
    }

    /// Graph over a previously exported document.
    pub fn from_document(doc: GraphDocument) -> Result<Self> {
        Ok(Self::with_catalog(MemoryCatalog::from_document(doc)?))
    }
}

impl Default for ReferralGraph<MemoryCatalog> {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Process-wide graph
// ============================================================================

static GLOBAL: LazyLock<ReferralGraph> = LazyLock::new(|| {
    let graph = ReferralGraph::builtin();
    tracing::info!(
        dermatomes = graph.catalog().dermatomes().len(),
        sources = graph.catalog().sources().len(),
        patterns = graph.catalog().patterns().len(),
        "referral graph initialized"
    );
    graph
});

/// The shared built-in graph. Built on first use, never mutated.
pub fn global() -> &'static ReferralGraph {
    &GLOBAL
}

pub fn get_dermatome(level: DermatomeLevel) -> Option<&'static Dermatome> {
    global().dermatome(level)
}

/// Look up a dermatome by level code. Unknown codes are a miss, not an error.
pub fn get_dermatome_by_code(code: &str) -> Option<&'static Dermatome> {
    global().dermatome_by_code(code)
}

pub fn get_all_dermatomes() -> &'static [Dermatome] {
    global().all_dermatomes()
}

pub fn get_dermatomes_for_region(region: BodyRegion) -> Vec<&'static Dermatome> {
    global().dermatomes_for_region(region)
}

/// Region lookup by tag. Unknown tags yield an empty list.
pub fn get_dermatomes_for_region_tag(tag: &str) -> Vec<&'static Dermatome> {
    global().dermatomes_for_region_tag(tag)
}

pub fn get_source(organ_id: &str) -> Option<&'static VisceralSource> {
    global().source(organ_id)
}

pub fn get_pattern(pattern_id: &str) -> Option<&'static ReferredPainPattern> {
    global().pattern(pattern_id)
}

pub fn get_patterns_by_organ(organ_id: &str) -> Vec<&'static ReferredPainPattern> {
    global().patterns_by_organ(organ_id)
}

pub fn get_patterns_referring_to_region(region: BodyRegion) -> Vec<&'static ReferredPainPattern> {
    global().patterns_referring_to_region(region)
}

pub fn get_patterns_referring_to_region_tag(tag: &str) -> Vec<&'static ReferredPainPattern> {
    global().patterns_referring_to_region_tag(tag)
}

pub fn get_all_referred_pain_patterns() -> &'static [ReferredPainPattern] {
    global().all_patterns()
}

pub fn get_pain_referral_education(pattern_id: &str) -> Option<&'static EducationEntry> {
    global().education(pattern_id)
}

pub fn create_pain_referral_visualization(pattern_id: &str) -> Option<VisualizationState> {
    global().create_visualization(pattern_id)
}

pub fn create_pain_referral_explorer_result(pattern_id: &str) -> Option<ExplorerResult> {
    global().create_explorer_result(pattern_id)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown dermatome level: {0}")]
    UnknownLevel(String),

    #[error("Unknown body region: {0}")]
    UnknownRegion(String),

    #[error("Duplicate key in {registry} registry: {key}")]
    DuplicateKey { registry: &'static str, key: String },

    #[error("Graph integrity check failed with {} violation(s)", .0.len())]
    Integrity(Vec<IntegrityViolation>),

    #[error("Invalid playback transition: cannot {action} while {from:?}")]
    InvalidTransition { from: PlaybackState, action: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
