//! Pathway playback — a reference player for the animation control block.
//!
//! The player owns no clock. The host render loop calls `advance(delta_ms)`
//! once per frame and applies the returned events.
//!
//! ```text
//!            play()              step timers elapse
//!   Idle ─────────────▶ Playing ───────────────────▶ Completed
//!    ▲                   │  ▲    (loopable: wrap to step 0, stay Playing)
//!    │          pause()  ▼  │ play()
//!    │                  Paused
//!    └──────── reset() from any state
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{Pathway, PathwayStep};
use crate::visualization::AnimationControl;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
    Completed,
}

/// Something the renderer should react to after an `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The step at this 0-based index became current.
    StepEntered(usize),
    /// A loopable pathway wrapped back to step 0.
    Looped,
    /// A non-loopable pathway ran past its last step.
    Completed,
}

pub type Events = SmallVec<[PlaybackEvent; 4]>;

/// Drives one pathway through the Idle/Playing/Paused/Completed machine.
#[derive(Debug, Clone)]
pub struct PathwayPlayer<'p> {
    pathway: &'p Pathway,
    state: PlaybackState,
    current_step: usize,
    /// Milliseconds spent in the current step.
    step_elapsed: f64,
    speed: f32,
}

impl<'p> PathwayPlayer<'p> {
    /// A player in `Idle` at step 0, speed 1.0.
    pub fn new(pathway: &'p Pathway) -> Self {
        Self {
            pathway,
            state: PlaybackState::Idle,
            current_step: 0,
            step_elapsed: 0.0,
            speed: 1.0,
        }
    }

    /// Resume from an exported control block.
    ///
    /// A stopped block at step 0 is `Idle`, a stopped block elsewhere is
    /// `Paused`. An out-of-range step is clamped to the last step and a
    /// non-positive speed falls back to 1.0.
    pub fn from_control(pathway: &'p Pathway, control: AnimationControl) -> Self {
        let current_step = control.current_step.min(pathway.len().saturating_sub(1));
        let state = match (control.is_playing, current_step) {
            (true, _) => PlaybackState::Playing,
            (false, 0) => PlaybackState::Idle,
            (false, _) => PlaybackState::Paused,
        };
        let speed = if valid_speed(control.speed) { control.speed } else { 1.0 };
        Self { pathway, state, current_step, step_elapsed: 0.0, speed }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The step currently highlighted, if the pathway has any.
    pub fn current(&self) -> Option<&'p PathwayStep> {
        self.pathway.step(self.current_step)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        if !valid_speed(speed) {
            return Err(Error::InvalidConfig(format!("playback speed must be positive, got {speed}")));
        }
        self.speed = speed;
        Ok(())
    }

    /// Milliseconds into the pathway, measured from the start of step 0.
    pub fn elapsed(&self) -> f64 {
        let before = self.pathway.steps[..self.current_step.min(self.pathway.len())]
            .iter()
            .fold(0u64, |acc, s| acc.saturating_add(s.duration));
        before as f64 + self.step_elapsed
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Idle/Paused → Playing.
    pub fn play(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => {
                self.state = PlaybackState::Playing;
                Ok(())
            }
            from => Err(Error::InvalidTransition { from, action: "play" }),
        }
    }

    /// Playing → Paused. The current step and its progress are kept.
    pub fn pause(&mut self) -> Result<()> {
        match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                Ok(())
            }
            from => Err(Error::InvalidTransition { from, action: "pause" }),
        }
    }

    /// Any state → Idle at step 0.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.current_step = 0;
        self.step_elapsed = 0.0;
    }

    /// Advance the step timer by `delta_ms` of wall time, scaled by speed.
    ///
    /// Does nothing unless `Playing`. One call may cross several steps.
    /// On a loopable pathway, whole laps inside a single delta collapse
    /// into one `Looped` event. A scaled delta too large for `f64` is
    /// clamped to `f64::MAX`.
    pub fn advance(&mut self, delta_ms: f64) -> Events {
        let mut events = Events::new();
        if self.state != PlaybackState::Playing || !(delta_ms.is_finite() && delta_ms > 0.0) {
            return events;
        }

        let lap = self.pathway.summed_duration() as f64;
        if self.pathway.is_empty() || lap == 0.0 {
            self.finish(&mut events);
            return events;
        }

        let last = self.pathway.len() - 1;
        let mut budget = (delta_ms * f64::from(self.speed)).min(f64::MAX);
        let mut looped = false;
        loop {
            let duration = self.pathway.steps[self.current_step].duration as f64;
            let left = duration - self.step_elapsed;
            if budget < left {
                self.step_elapsed += budget;
                break;
            }
            budget -= left;

            if self.current_step < last {
                self.current_step += 1;
                self.step_elapsed = 0.0;
                events.push(PlaybackEvent::StepEntered(self.current_step));
            } else if self.pathway.loopable {
                self.current_step = 0;
                self.step_elapsed = 0.0;
                // after one wrap the budget is below a lap, anything left is rounding
                if looped {
                    break;
                }
                looped = true;
                events.push(PlaybackEvent::Looped);
                budget %= lap;
            } else {
                self.finish(&mut events);
                break;
            }
        }
        events
    }

    fn finish(&mut self, events: &mut Events) {
        self.state = PlaybackState::Completed;
        self.current_step = self.pathway.len().saturating_sub(1);
        self.step_elapsed = self.current().map_or(0.0, |s| s.duration as f64);
        events.push(PlaybackEvent::Completed);
    }

    /// The control block describing this player right now.
    pub fn control(&self) -> AnimationControl {
        AnimationControl {
            is_playing: self.state == PlaybackState::Playing,
            current_step: self.current_step,
            speed: self.speed,
        }
    }
}

fn valid_speed(speed: f32) -> bool {
    speed.is_finite() && speed > 0.0
}
