//! Pathway — the ordered anatomical waypoints a referral animation walks.

use serde::{Deserialize, Serialize};

/// A point in renderer model space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// One waypoint of a pathway animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathwayStep {
    /// 1-indexed position in the pathway.
    pub step_number: u32,
    pub structure: String,
    /// Id into the anatomical structure catalog used by the renderer.
    pub structure_id: String,
    pub action: String,
    pub highlight_color: String,
    /// How long the step stays active, in milliseconds.
    pub duration: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
}

impl PathwayStep {
    pub fn new(
        step_number: u32,
        structure: impl Into<String>,
        structure_id: impl Into<String>,
        action: impl Into<String>,
        highlight_color: impl Into<String>,
        duration: u64,
    ) -> Self {
        Self {
            step_number,
            structure: structure.into(),
            structure_id: structure_id.into(),
            action: action.into(),
            highlight_color: highlight_color.into(),
            duration,
            position: None,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }
}

/// An ordered step sequence with a declared total duration.
///
/// Well-formed pathways number their steps 1..=N without gaps and declare
/// `total_duration == sum(step.duration)`. The catalog's integrity pass
/// checks both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pathway {
    pub steps: Vec<PathwayStep>,
    pub total_duration: u64,
    pub loopable: bool,
}

impl Pathway {
    /// Build a pathway whose declared total is the sum of its steps,
    /// saturating at `u64::MAX`.
    pub fn from_steps(steps: Vec<PathwayStep>, loopable: bool) -> Self {
        let mut pathway = Self { steps, total_duration: 0, loopable };
        pathway.total_duration = pathway.summed_duration();
        pathway
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step at a 0-based index.
    pub fn step(&self, index: usize) -> Option<&PathwayStep> {
        self.steps.get(index)
    }

    /// Sum of step durations, saturating at `u64::MAX`.
    pub fn summed_duration(&self) -> u64 {
        self.steps.iter().fold(0u64, |acc, s| acc.saturating_add(s.duration))
    }

    /// Exact sum of step durations, or `None` if it does not fit in a `u64`.
    pub fn checked_duration(&self) -> Option<u64> {
        self.steps.iter().try_fold(0u64, |acc, s| acc.checked_add(s.duration))
    }

    /// First step number that breaks the 1..=N sequence, as `(expected, found)`.
    pub fn numbering_gap(&self) -> Option<(u32, u32)> {
        self.steps
            .iter()
            .zip(1u32..)
            .find(|(step, expected)| step.step_number != *expected)
            .map(|(step, expected)| (expected, step.step_number))
    }

    /// 0-based index of the step active `elapsed` ms after the start.
    /// Returns `None` once `elapsed >= total`.
    pub fn step_index_at(&self, elapsed: u64) -> Option<usize> {
        let mut boundary = 0u64;
        for (i, step) in self.steps.iter().enumerate() {
            boundary = boundary.saturating_add(step.duration);
            if elapsed < boundary {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_steps() -> Pathway {
        Pathway::from_steps(
            vec![
                PathwayStep::new(1, "A", "a", "start", "#111111", 1000),
                PathwayStep::new(2, "B", "b", "relay", "#222222", 500),
                PathwayStep::new(3, "C", "c", "arrive", "#333333", 1500),
            ],
            false,
        )
    }

    #[test]
    fn test_from_steps_sums_durations() {
        let p = three_steps();
        assert_eq!(p.total_duration, 3000);
        assert_eq!(p.summed_duration(), p.total_duration);
        assert_eq!(p.numbering_gap(), None);
    }

    #[test]
    fn test_numbering_gap() {
        let mut p = three_steps();
        p.steps[2].step_number = 4;
        assert_eq!(p.numbering_gap(), Some((3, 4)));
        p.steps[0].step_number = 0;
        assert_eq!(p.numbering_gap(), Some((1, 0)));
    }

    #[test]
    fn test_step_index_at() {
        let p = three_steps();
        assert_eq!(p.step_index_at(0), Some(0));
        assert_eq!(p.step_index_at(999), Some(0));
        assert_eq!(p.step_index_at(1000), Some(1));
        assert_eq!(p.step_index_at(1499), Some(1));
        assert_eq!(p.step_index_at(2999), Some(2));
        assert_eq!(p.step_index_at(3000), None);
    }

    #[test]
    fn test_oversized_durations_saturate() {
        let p = Pathway::from_steps(
            vec![
                PathwayStep::new(1, "A", "a", "start", "#111111", u64::MAX),
                PathwayStep::new(2, "B", "b", "relay", "#222222", 1),
            ],
            true,
        );
        assert_eq!(p.total_duration, u64::MAX);
        assert_eq!(p.summed_duration(), u64::MAX);
        assert_eq!(p.checked_duration(), None);
        assert_eq!(p.step_index_at(u64::MAX - 1), Some(0));
        assert_eq!(p.step_index_at(u64::MAX), None);
        assert_eq!(three_steps().checked_duration(), Some(3000));
    }
}
