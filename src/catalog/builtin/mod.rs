//! The shipped referred-pain dataset.
//!
//! Each function returns a fresh registry in definition order. Patterns
//! embed their visceral source by calling the same constructor the source
//! registry uses, so the embedded copy and the registry copy cannot drift.

mod dermatomes;
mod sources;
mod patterns;
mod education;

pub use dermatomes::dermatomes;
pub use sources::sources;
pub use patterns::patterns;
pub use education::education;

use crate::model::{DermatomeLevel, LevelSet};

fn levels(codes: &[DermatomeLevel]) -> LevelSet {
    LevelSet::from_slice(codes)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
