//! Body-surface regions that dermatomes map to and pain refers to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A body-surface region tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyRegion {
    Neck,
    Jaw,
    ShoulderLeft,
    ShoulderRight,
    ArmLeft,
    ArmRight,
    ChestAnterior,
    ChestPosterior,
    BackMid,
    Epigastrium,
    RightUpperQuadrant,
    LeftUpperQuadrant,
    Periumbilical,
    RightLowerQuadrant,
    LeftLowerQuadrant,
    FlankLeft,
    FlankRight,
    GroinLeft,
    GroinRight,
    ThighAnterior,
    ThighPosterior,
    Knee,
    Leg,
    Foot,
}

impl BodyRegion {
    pub const ALL: [BodyRegion; 24] = [
        Self::Neck,
        Self::Jaw,
        Self::ShoulderLeft,
        Self::ShoulderRight,
        Self::ArmLeft,
        Self::ArmRight,
        Self::ChestAnterior,
        Self::ChestPosterior,
        Self::BackMid,
        Self::Epigastrium,
        Self::RightUpperQuadrant,
        Self::LeftUpperQuadrant,
        Self::Periumbilical,
        Self::RightLowerQuadrant,
        Self::LeftLowerQuadrant,
        Self::FlankLeft,
        Self::FlankRight,
        Self::GroinLeft,
        Self::GroinRight,
        Self::ThighAnterior,
        Self::ThighPosterior,
        Self::Knee,
        Self::Leg,
        Self::Foot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neck => "neck",
            Self::Jaw => "jaw",
            Self::ShoulderLeft => "shoulder-left",
            Self::ShoulderRight => "shoulder-right",
            Self::ArmLeft => "arm-left",
            Self::ArmRight => "arm-right",
            Self::ChestAnterior => "chest-anterior",
            Self::ChestPosterior => "chest-posterior",
            Self::BackMid => "back-mid",
            Self::Epigastrium => "epigastrium",
            Self::RightUpperQuadrant => "right-upper-quadrant",
            Self::LeftUpperQuadrant => "left-upper-quadrant",
            Self::Periumbilical => "periumbilical",
            Self::RightLowerQuadrant => "right-lower-quadrant",
            Self::LeftLowerQuadrant => "left-lower-quadrant",
            Self::FlankLeft => "flank-left",
            Self::FlankRight => "flank-right",
            Self::GroinLeft => "groin-left",
            Self::GroinRight => "groin-right",
            Self::ThighAnterior => "thigh-anterior",
            Self::ThighPosterior => "thigh-posterior",
            Self::Knee => "knee",
            Self::Leg => "leg",
            Self::Foot => "foot",
        }
    }
}

impl fmt::Display for BodyRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyRegion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::UnknownRegion(s.to_string()))
    }
}
