//! Staggered text entrances
//!
//! Headline text reveals one unit (word or letter) at a time, each unit
//! rising from below its own line box while fading in. The host splits its
//! string with [`split_units`], creates one target per unit, and binds the
//! result; the engine's fire-once guarantee means the headline animates on
//! first sight only.

use crate::binding::{Element, RevealBinding};
use glint_core::{SharedTarget, VisualState};
use glint_motion::Easing;

/// How to break a string into animated units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// One unit per whitespace-separated word
    #[default]
    Words,
    /// One unit per character (whitespace preserved as units)
    Letters,
}

/// Split text into reveal units
pub fn split_units(text: &str, mode: SplitMode) -> Vec<String> {
    match mode {
        SplitMode::Words => text.split_whitespace().map(str::to_string).collect(),
        SplitMode::Letters => text.chars().map(String::from).collect(),
    }
}

/// Builder for a staggered text-entrance binding
#[derive(Clone, Copy, Debug)]
pub struct TextReveal {
    pub delay_ms: f32,
    pub duration_ms: f32,
    pub stagger_ms: f32,
}

impl Default for TextReveal {
    fn default() -> Self {
        Self {
            delay_ms: 0.0,
            duration_ms: 600.0,
            stagger_ms: 40.0,
        }
    }
}

impl TextReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn stagger(mut self, stagger_ms: f32) -> Self {
        self.stagger_ms = stagger_ms.max(0.0);
        self
    }

    /// Build the binding: `units` are the per-unit targets in reading
    /// order, `unit_height` the line-box height they rise out of.
    pub fn binding(
        &self,
        trigger: Element,
        units: Vec<SharedTarget>,
        unit_height: f32,
    ) -> RevealBinding {
        RevealBinding::new(trigger)
            .children(units)
            .custom(VisualState::offset_y(unit_height), VisualState::SETTLED)
            .delay(self.delay_ms)
            .duration(self.duration_ms)
            .stagger(self.stagger_ms)
            .easing(Easing::EaseOutQuart)
    }
}
