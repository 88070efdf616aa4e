//! A single from/to transition
//!
//! Transitions interpolate an element's whole `VisualState` between two
//! snapshots over a duration, after an optional delay. Time is advanced by
//! the owner via `tick`; the transition never schedules itself.

use crate::easing::Easing;
use glint_core::VisualState;

/// A from/to tween over `VisualState`
#[derive(Clone, Debug)]
pub struct Transition {
    from: VisualState,
    to: VisualState,
    duration_ms: f32,
    easing: Easing,
    /// Starts negative when delayed, counts up through [0, duration]
    current_time: f32,
    playing: bool,
}

impl Transition {
    pub fn new(from: VisualState, to: VisualState, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            easing,
            current_time: 0.0,
            playing: false,
        }
    }

    /// Begin playback after `delay_ms`
    pub fn start(&mut self, delay_ms: f32) {
        self.current_time = -delay_ms.max(0.0);
        self.playing = true;
    }

    /// Stop in place; the current value is frozen wherever it is
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether playback has run to the end of the duration
    pub fn is_finished(&self) -> bool {
        !self.playing && self.current_time >= self.duration_ms
    }

    /// Current progress (0.0 to 1.0); the delay period reads as 0.0
    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            // Zero-duration transitions snap once their delay elapses
            return if self.current_time >= 0.0 { 1.0 } else { 0.0 };
        }
        if self.current_time <= 0.0 {
            return 0.0;
        }
        (self.current_time / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current interpolated state
    pub fn value(&self) -> VisualState {
        let eased = self.easing.apply(self.progress());
        VisualState::lerp(&self.from, &self.to, eased)
    }

    pub fn from_state(&self) -> &VisualState {
        &self.from
    }

    pub fn to_state(&self) -> &VisualState {
        &self.to
    }

    /// Advance by delta time in milliseconds
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt_ms;

        if self.current_time >= self.duration_ms {
            self.current_time = self.duration_ms;
            self.playing = false;
        }
    }
}
