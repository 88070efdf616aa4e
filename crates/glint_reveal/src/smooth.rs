//! Smooth-scroll driver
//!
//! Eases the host's raw scroll position toward a target offset so reveal
//! activations ride a glide instead of raw wheel deltas. The constructor
//! refuses to exist under reduced motion - hosts fall back to feeding raw
//! offsets straight into the engine.

use glint_motion::Easing;
use glint_theme::prefers_reduced_motion;

/// Glide tuning
#[derive(Clone, Copy, Debug)]
pub struct SmoothScrollConfig {
    /// Time to reach a new target, in milliseconds
    pub duration_ms: f32,
    /// Glide curve
    pub easing: Easing,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            easing: Easing::EaseOutExpo,
        }
    }
}

/// Eased scroll offset, ticked by the host frame loop
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    start: f32,
    target: f32,
    current: f32,
    elapsed_ms: f32,
}

impl SmoothScroll {
    /// Create a driver starting at `offset`. Returns `None` when the viewer
    /// prefers reduced motion.
    pub fn new(offset: f32) -> Option<Self> {
        Self::with_config(offset, SmoothScrollConfig::default())
    }

    pub fn with_config(offset: f32, config: SmoothScrollConfig) -> Option<Self> {
        if prefers_reduced_motion() {
            tracing::debug!("smooth scroll disabled by motion preference");
            return None;
        }
        Some(Self {
            config,
            start: offset,
            target: offset,
            current: offset,
            elapsed_ms: 0.0,
        })
    }

    /// Begin gliding toward a new offset from wherever the glide currently
    /// is
    pub fn set_target(&mut self, offset: f32) {
        self.start = self.current;
        self.target = offset;
        self.elapsed_ms = 0.0;
    }

    /// Advance the glide and return the eased offset, ready for
    /// `RevealEngine::on_scroll`
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if self.is_settled() {
            return self.current;
        }
        self.elapsed_ms += dt_ms;
        let t = (self.elapsed_ms / self.config.duration_ms).clamp(0.0, 1.0);
        let eased = self.config.easing.apply(t);
        self.current = self.start + (self.target - self.start) * eased;
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed_ms >= self.config.duration_ms || self.current == self.target
    }
}
