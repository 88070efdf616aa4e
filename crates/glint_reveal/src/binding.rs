//! Reveal binding configuration

use glint_core::{SharedTarget, VisualState};
use glint_motion::{Easing, PresetError, RevealPreset};

/// Default activation line: the sensor's top edge at 85% of viewport height
pub const DEFAULT_THRESHOLD: f32 = 0.85;
/// Default transition duration in milliseconds
pub const DEFAULT_DURATION_MS: f32 = 700.0;
/// Default inter-target stagger in milliseconds
pub const DEFAULT_STAGGER_MS: f32 = 100.0;

/// A renderable element: the animated target plus its document-space top
/// edge (used when the element acts as the visibility sensor)
pub struct Element {
    pub target: SharedTarget,
    pub document_top: f32,
}

impl Element {
    pub fn new(target: SharedTarget, document_top: f32) -> Self {
        Self {
            target,
            document_top,
        }
    }
}

/// What a binding animates: a resolved preset, a preset name resolved at
/// bind time, or explicit from/to states
#[derive(Clone, Debug)]
pub enum RevealAnimation {
    Preset(RevealPreset),
    /// Resolved (and possibly rejected) when the binding is armed
    Named(String),
    Custom { from: VisualState, to: VisualState },
}

impl RevealAnimation {
    /// Resolve to a (from, to) pair; unknown names are the caller's error
    pub fn resolve(&self) -> Result<(VisualState, VisualState), PresetError> {
        match self {
            RevealAnimation::Preset(preset) => Ok(preset.states()),
            RevealAnimation::Named(name) => Ok(RevealPreset::from_name(name)?.states()),
            RevealAnimation::Custom { from, to } => Ok((*from, *to)),
        }
    }
}

/// A one-shot enter-viewport transition, built fluently and armed with
/// [`crate::RevealEngine::bind`].
///
/// The trigger is always the visibility sensor. If children are supplied
/// they are the animated targets, revealed in the order given (document
/// order) with the configured stagger; otherwise the trigger itself is the
/// single target.
pub struct RevealBinding {
    pub trigger: Element,
    pub children: Vec<SharedTarget>,
    pub animation: RevealAnimation,
    pub delay_ms: f32,
    pub duration_ms: f32,
    pub stagger_ms: f32,
    pub threshold: f32,
    pub easing: Easing,
}

impl RevealBinding {
    /// New binding with the default `fade-up` entrance
    pub fn new(trigger: Element) -> Self {
        Self {
            trigger,
            children: Vec::new(),
            animation: RevealAnimation::Preset(RevealPreset::FadeUp),
            delay_ms: 0.0,
            duration_ms: DEFAULT_DURATION_MS,
            stagger_ms: DEFAULT_STAGGER_MS,
            threshold: DEFAULT_THRESHOLD,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Animate with a resolved preset
    pub fn preset(mut self, preset: RevealPreset) -> Self {
        self.animation = RevealAnimation::Preset(preset);
        self
    }

    /// Animate with a preset looked up by name at bind time
    pub fn preset_name(mut self, name: impl Into<String>) -> Self {
        self.animation = RevealAnimation::Named(name.into());
        self
    }

    /// Animate with explicit from/to states
    pub fn custom(mut self, from: VisualState, to: VisualState) -> Self {
        self.animation = RevealAnimation::Custom { from, to };
        self
    }

    /// Animated child targets in document order (the trigger stays the
    /// sensor)
    pub fn children(mut self, children: Vec<SharedTarget>) -> Self {
        self.children = children;
        self
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

    /// Activation line as a fraction of viewport height. Call sites tune
    /// within 0.80-0.90; values are clamped to [0, 1].
    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}
