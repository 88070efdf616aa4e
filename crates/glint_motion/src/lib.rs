//! Glint Motion System
//!
//! From/to transitions and the machinery that drives them:
//!
//! - **Easing**: the curve menu used by transitions and the smooth scroller
//! - **Transition**: a single from/to tween with delay, duration, and easing
//! - **TransitionSet**: a keyed group of transitions ticked together
//! - **Presets**: the closed table of named reveal animations
//! - **Runtime**: the process-wide init-once registration guard

pub mod easing;
pub mod presets;
pub mod runtime;
pub mod set;
pub mod transition;

pub use easing::Easing;
pub use presets::{PresetError, RevealPreset};
pub use runtime::{ensure_registered, is_registered};
pub use set::{TransitionId, TransitionSet};
pub use transition::Transition;
