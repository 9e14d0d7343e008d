//! Dermatome levels and dermatome records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

use super::BodyRegion;
use crate::Error;

/// Spinal nerve root level, ordered cranial to caudal (C1 → S5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DermatomeLevel {
    C1, C2, C3, C4, C5, C6, C7, C8,
    T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12,
    L1, L2, L3, L4, L5,
    S1, S2, S3, S4, S5,
}

/// A small ordered set of levels. Most patterns touch six levels or fewer.
pub type LevelSet = SmallVec<[DermatomeLevel; 6]>;

impl DermatomeLevel {
    /// Every level in anatomical order.
    pub const ALL: [DermatomeLevel; 30] = [
        Self::C1, Self::C2, Self::C3, Self::C4, Self::C5, Self::C6, Self::C7, Self::C8,
        Self::T1, Self::T2, Self::T3, Self::T4, Self::T5, Self::T6,
        Self::T7, Self::T8, Self::T9, Self::T10, Self::T11, Self::T12,
        Self::L1, Self::L2, Self::L3, Self::L4, Self::L5,
        Self::S1, Self::S2, Self::S3, Self::S4, Self::S5,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::C1 => "C1", Self::C2 => "C2", Self::C3 => "C3", Self::C4 => "C4",
            Self::C5 => "C5", Self::C6 => "C6", Self::C7 => "C7", Self::C8 => "C8",
            Self::T1 => "T1", Self::T2 => "T2", Self::T3 => "T3", Self::T4 => "T4",
            Self::T5 => "T5", Self::T6 => "T6", Self::T7 => "T7", Self::T8 => "T8",
            Self::T9 => "T9", Self::T10 => "T10", Self::T11 => "T11", Self::T12 => "T12",
            Self::L1 => "L1", Self::L2 => "L2", Self::L3 => "L3", Self::L4 => "L4",
            Self::L5 => "L5",
            Self::S1 => "S1", Self::S2 => "S2", Self::S3 => "S3", Self::S4 => "S4",
            Self::S5 => "S5",
        }
    }

    /// Spinal segment this level belongs to.
    pub fn segment(self) -> SpinalSegment {
        match self.code().as_bytes()[0] {
            b'C' => SpinalSegment::Cervical,
            b'T' => SpinalSegment::Thoracic,
            b'L' => SpinalSegment::Lumbar,
            _ => SpinalSegment::Sacral,
        }
    }
}

impl fmt::Display for DermatomeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DermatomeLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.code() == s)
            .ok_or_else(|| Error::UnknownLevel(s.to_string()))
    }
}

impl Serialize for DermatomeLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for DermatomeLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Spinal cord segment grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpinalSegment {
    Cervical,
    Thoracic,
    Lumbar,
    Sacral,
}

/// Body-surface mapping for one spinal level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dermatome {
    pub level: DermatomeLevel,
    pub body_regions: Vec<BodyRegion>,
    pub surface_area: String,
    pub landmarks: Vec<String>,
    pub highlight_color: String,
    /// Canonical point for a pinprick or light-touch exam.
    pub sensory_test_point: String,
}

impl Dermatome {
    pub fn new(
        level: DermatomeLevel,
        body_regions: impl IntoIterator<Item = BodyRegion>,
        surface_area: impl Into<String>,
    ) -> Self {
        Self {
            level,
            body_regions: body_regions.into_iter().collect(),
            surface_area: surface_area.into(),
            landmarks: Vec::new(),
            highlight_color: String::new(),
            sensory_test_point: String::new(),
        }
    }

    pub fn with_landmarks(mut self, landmarks: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.landmarks = landmarks.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = color.into();
        self
    }

    pub fn with_test_point(mut self, point: impl Into<String>) -> Self {
        self.sensory_test_point = point.into();
        self
    }

    pub fn covers(&self, region: BodyRegion) -> bool {
        self.body_regions.contains(&region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parse_and_display() {
        assert_eq!("T10".parse::<DermatomeLevel>().unwrap(), DermatomeLevel::T10);
        assert_eq!(DermatomeLevel::S2.to_string(), "S2");
        assert!("Z9".parse::<DermatomeLevel>().is_err());
        assert!("t7".parse::<DermatomeLevel>().is_err());
    }

    #[test]
    fn test_level_ordering_is_anatomical() {
        assert!(DermatomeLevel::C8 < DermatomeLevel::T1);
        assert!(DermatomeLevel::T12 < DermatomeLevel::L1);
        assert!(DermatomeLevel::L5 < DermatomeLevel::S1);
        let mut sorted = DermatomeLevel::ALL;
        sorted.sort();
        assert_eq!(sorted, DermatomeLevel::ALL);
    }

    #[test]
    fn test_level_serde_uses_code() {
        let json = serde_json::to_string(&DermatomeLevel::C4).unwrap();
        assert_eq!(json, "\"C4\"");
        let back: DermatomeLevel = serde_json::from_str("\"L2\"").unwrap();
        assert_eq!(back, DermatomeLevel::L2);
        assert!(serde_json::from_str::<DermatomeLevel>("\"X1\"").is_err());
    }

    #[test]
    fn test_segment() {
        assert_eq!(DermatomeLevel::C3.segment(), SpinalSegment::Cervical);
        assert_eq!(DermatomeLevel::T12.segment(), SpinalSegment::Thoracic);
        assert_eq!(DermatomeLevel::L1.segment(), SpinalSegment::Lumbar);
        assert_eq!(DermatomeLevel::S5.segment(), SpinalSegment::Sacral);
    }

    #[test]
    fn test_dermatome_covers() {
        let d = Dermatome::new(DermatomeLevel::C4, [BodyRegion::Neck, BodyRegion::ShoulderLeft], "Upper shoulder");
        assert!(d.covers(BodyRegion::Neck));
        assert!(!d.covers(BodyRegion::ArmLeft));
    }
}
