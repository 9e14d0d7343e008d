//! # Catalog Trait
//!
//! The read contract between the query layer and a dataset. Every lookup
//! the knowledge graph needs is defined here.
//!
//! Catalogs are built once and never mutated. All methods take `&self`,
//! return borrowed records, and never fail: a miss is `None` or an empty
//! slice. That makes any `Catalog` safe to share across threads without
//! locking.
//!
//! ## Implementations
//!
//! | Catalog | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryCatalog` | `memory` | Definition-ordered vectors with hash indexes |

pub mod memory;
pub mod builtin;

use crate::model::*;

pub use memory::MemoryCatalog;

// ============================================================================
// Catalog Trait
// ============================================================================

/// Read-only access to the four registries of the graph.
pub trait Catalog: Send + Sync {
    // ========================================================================
    // Dermatome registry
    // ========================================================================

    fn dermatome(&self, level: DermatomeLevel) -> Option<&Dermatome>;

    /// All dermatomes in registry order (C → S).
    fn dermatomes(&self) -> &[Dermatome];

    // ========================================================================
    // Visceral source registry
    // ========================================================================

    fn source(&self, organ_id: &str) -> Option<&VisceralSource>;

    fn sources(&self) -> &[VisceralSource];

    // ========================================================================
    // Pain pattern catalog
    // ========================================================================

    fn pattern(&self, pattern_id: &str) -> Option<&ReferredPainPattern>;

    /// All patterns in definition order.
    fn patterns(&self) -> &[ReferredPainPattern];

    // ========================================================================
    // Education annex
    // ========================================================================

    fn education(&self, pattern_id: &str) -> Option<&EducationEntry>;

    fn education_entries(&self) -> &[EducationEntry];
}
