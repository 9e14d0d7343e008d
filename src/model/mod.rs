//! # Knowledge Graph Model
//!
//! Plain data records for the referred-pain graph. These types cross every
//! boundary: catalog ↔ query ↔ visualization ↔ document export.
//!
//! Design rule: records refer to each other by id or level code, never by
//! pointer. A pattern embeds its visceral source by value; everything else
//! is resolved through a `Catalog`. This module is pure data — no I/O,
//! no state.

pub mod dermatome;
pub mod region;
pub mod organ;
pub mod pathway;
pub mod pattern;
pub mod education;

pub use dermatome::{Dermatome, DermatomeLevel, LevelSet, SpinalSegment};
pub use region::BodyRegion;
pub use organ::{Innervation, OrganSystem, VisceralSource};
pub use pathway::{Pathway, PathwayStep, Vec3};
pub use pattern::{
    ClinicalFeatures, ExplanationLevel, Explanations, Likelihood, Mechanism,
    ReferralRegion, ReferredPainPattern,
};
pub use education::{AtypicalPresentation, EducationEntry, PatternRef};
