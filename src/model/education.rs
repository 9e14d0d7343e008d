//! Clinical guidance attached to a pattern, with weak edges to other patterns.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weak, non-owning reference to a pattern by id.
///
/// Holding a `PatternRef` says nothing about whether the target exists.
/// Resolve it through the query layer; a miss is a broken link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternRef(pub String);

impl PatternRef {
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatternRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatternRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A presentation that departs from the classic one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtypicalPresentation {
    pub description: String,
    pub population: String,
    pub frequency: String,
    pub clinical_pearl: String,
}

impl AtypicalPresentation {
    pub fn new(
        description: impl Into<String>,
        population: impl Into<String>,
        frequency: impl Into<String>,
        clinical_pearl: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            population: population.into(),
            frequency: frequency.into(),
            clinical_pearl: clinical_pearl.into(),
        }
    }
}

/// Education annex entry. Shares its id with exactly one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub pattern_id: String,
    pub clinical_relevance: String,
    pub diagnostic_importance: String,
    pub classic_presentation: String,
    pub atypical_presentations: Vec<AtypicalPresentation>,
    pub differential_considerations: Vec<String>,
    pub red_flags: Vec<String>,
    pub related_patterns: Vec<PatternRef>,
}
