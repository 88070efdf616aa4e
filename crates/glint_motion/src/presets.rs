//! The closed table of named reveal presets
//!
//! Each preset is a (from, to) pair of visual states. The set is closed:
//! resolving an unknown name is a caller error surfaced at bind time, never
//! silently substituted.

use glint_core::VisualState;
use thiserror::Error;

/// Error raised when a preset name cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reveal preset \"{0}\"")]
pub struct PresetError(pub String);

/// A named entry animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealPreset {
    /// Rise 40px while fading in
    FadeUp,
    /// Enter from 60px left while fading in
    FadeLeft,
    /// Enter from 60px right while fading in
    FadeRight,
    /// Grow from 90% scale while fading in
    ScaleIn,
    /// Rise 30px while fading in; targets are the trigger's children,
    /// revealed in document order
    StaggerChildren,
}

impl RevealPreset {
    /// Every preset, in declaration order
    pub fn all() -> &'static [RevealPreset] {
        &[
            RevealPreset::FadeUp,
            RevealPreset::FadeLeft,
            RevealPreset::FadeRight,
            RevealPreset::ScaleIn,
            RevealPreset::StaggerChildren,
        ]
    }

    /// The preset's wire name
    pub fn name(&self) -> &'static str {
        match self {
            RevealPreset::FadeUp => "fade-up",
            RevealPreset::FadeLeft => "fade-left",
            RevealPreset::FadeRight => "fade-right",
            RevealPreset::ScaleIn => "scale-in",
            RevealPreset::StaggerChildren => "stagger-children",
        }
    }

    /// Resolve a preset by name; unknown names are an error
    pub fn from_name(name: &str) -> Result<Self, PresetError> {
        match name {
            "fade-up" => Ok(RevealPreset::FadeUp),
            "fade-left" => Ok(RevealPreset::FadeLeft),
            "fade-right" => Ok(RevealPreset::FadeRight),
            "scale-in" => Ok(RevealPreset::ScaleIn),
            "stagger-children" => Ok(RevealPreset::StaggerChildren),
            other => Err(PresetError(other.to_string())),
        }
    }

    /// The preset's (from, to) state pair
    pub fn states(&self) -> (VisualState, VisualState) {
        match self {
            RevealPreset::FadeUp => (VisualState::offset_y(40.0), VisualState::SETTLED),
            RevealPreset::FadeLeft => (VisualState::offset_x(-60.0), VisualState::SETTLED),
            RevealPreset::FadeRight => (VisualState::offset_x(60.0), VisualState::SETTLED),
            RevealPreset::ScaleIn => (VisualState::scaled(0.9), VisualState::SETTLED),
            RevealPreset::StaggerChildren => (VisualState::offset_y(30.0), VisualState::SETTLED),
        }
    }

    /// Whether this preset animates the trigger's children rather than the
    /// trigger itself
    pub fn animates_children(&self) -> bool {
        matches!(self, RevealPreset::StaggerChildren)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for preset in RevealPreset::all() {
            assert_eq!(RevealPreset::from_name(preset.name()), Ok(*preset));
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = RevealPreset::from_name("fade-down").unwrap_err();
        assert_eq!(err, PresetError("fade-down".to_string()));
    }

    #[test]
    fn test_every_preset_lands_settled() {
        for preset in RevealPreset::all() {
            let (from, to) = preset.states();
            assert_eq!(to, VisualState::SETTLED, "{}", preset.name());
            assert_eq!(from.opacity, 0.0, "{} starts hidden", preset.name());
        }
    }

    #[test]
    fn test_fade_up_offsets() {
        let (from, _) = RevealPreset::FadeUp.states();
        assert_eq!(from.translate_y, 40.0);

        let (from, _) = RevealPreset::StaggerChildren.states();
        assert_eq!(from.translate_y, 30.0);
    }

    #[test]
    fn test_horizontal_presets_mirror() {
        let (left, _) = RevealPreset::FadeLeft.states();
        let (right, _) = RevealPreset::FadeRight.states();
        assert_eq!(left.translate_x, -right.translate_x);
    }
}
