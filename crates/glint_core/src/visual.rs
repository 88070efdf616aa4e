//! Animated visual state and the host element seam
//!
//! `VisualState` is the complete set of properties a reveal transition can
//! drive: translation offset, opacity, and uniform scale. A settled element
//! is `VisualState::default()` (no offset, fully opaque, unscaled).

use std::sync::{Arc, Mutex};

/// A snapshot of an element's animatable visual properties
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    /// Horizontal offset in logical pixels (positive = right)
    pub translate_x: f32,
    /// Vertical offset in logical pixels (positive = down)
    pub translate_y: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Uniform scale factor
    pub scale: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SETTLED
    }
}

impl VisualState {
    /// The resting state: in place, opaque, unscaled
    pub const SETTLED: VisualState = VisualState {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    /// Hidden at a vertical offset (the usual entry starting point)
    pub const fn offset_y(y: f32) -> Self {
        VisualState {
            translate_x: 0.0,
            translate_y: y,
            opacity: 0.0,
            scale: 1.0,
        }
    }

    /// Hidden at a horizontal offset
    pub const fn offset_x(x: f32) -> Self {
        VisualState {
            translate_x: x,
            translate_y: 0.0,
            opacity: 0.0,
            scale: 1.0,
        }
    }

    /// Hidden at a scale factor
    pub const fn scaled(scale: f32) -> Self {
        VisualState {
            translate_x: 0.0,
            translate_y: 0.0,
            opacity: 0.0,
            scale,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Linear interpolation between two states
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            translate_x: from.translate_x + (to.translate_x - from.translate_x) * t,
            translate_y: from.translate_y + (to.translate_y - from.translate_y) * t,
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            scale: from.scale + (to.scale - from.scale) * t,
        }
    }
}

/// The seam between Glint and the host's element model.
///
/// Hosts implement this for whatever their elements are (retained widgets,
/// style handles, test doubles); Glint only ever pushes whole `VisualState`
/// snapshots through it.
pub trait MotionTarget: Send {
    /// Apply a visual state snapshot to the element
    fn apply(&mut self, state: &VisualState);
}

/// Shared, lock-guarded target handle.
///
/// Bindings hold targets while the host keeps its own reference to observe
/// the applied state, so targets live behind `Arc<Mutex>`.
pub type SharedTarget = Arc<Mutex<dyn MotionTarget>>;

/// Wrap a target for use in a binding
pub fn shared_target<T: MotionTarget + 'static>(target: T) -> SharedTarget {
    Arc::new(Mutex::new(target))
}
