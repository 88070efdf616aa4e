//! Reduced-motion behavior
//!
//! Separate test binary: `StyleState` is process-wide, and this suite needs
//! it initialized with the reduced-motion preference set.

use glint_core::{shared_target, MotionTarget, VisualState};
use glint_reveal::{Element, RevealBinding, RevealEngine, SmoothScroll};
use glint_theme::{ColorScheme, PaletteBundle, StyleState};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Option<VisualState>>>);

impl MotionTarget for Recorder {
    fn apply(&mut self, state: &VisualState) {
        *self.0.lock().unwrap() = Some(*state);
    }
}

#[test]
fn reduced_motion_settles_immediately_and_arms_nothing() {
    StyleState::init(PaletteBundle::default(), ColorScheme::Light, true);

    let engine = RevealEngine::new(1000.0);
    let recorder = Recorder::default();

    let handle = engine
        .bind(
            RevealBinding::new(Element::new(shared_target(recorder.clone()), 5000.0))
                .preset_name("fade-up"),
        )
        .unwrap();

    // Final state right away: settled, not hidden
    assert_eq!(*recorder.0.lock().unwrap(), Some(VisualState::SETTLED));
    assert!(handle.has_fired());

    // No watch was armed: scrolling and ticking change nothing
    engine.on_scroll(10_000.0);
    engine.tick(5_000.0);
    assert_eq!(engine.active_transitions(), 0);
    assert_eq!(*recorder.0.lock().unwrap(), Some(VisualState::SETTLED));

    // The smooth-scroll driver refuses to exist under reduced motion
    assert!(SmoothScroll::new(0.0).is_none());
}
