//! Integration tests for the reveal engine
//!
//! These run without initializing `StyleState`, so the motion gate reads
//! motion-allowed throughout; the reduced-motion path has its own test
//! binary.

use glint_core::{shared_target, MotionTarget, SharedTarget, VisualState};
use glint_motion::Easing;
use glint_reveal::{Element, RevealBinding, RevealEngine, RevealError};
use std::sync::{Arc, Mutex};

/// Test double that records every applied state
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<RecorderInner>>);

#[derive(Default)]
struct RecorderInner {
    state: Option<VisualState>,
    applies: usize,
}

impl MotionTarget for Recorder {
    fn apply(&mut self, state: &VisualState) {
        let mut inner = self.0.lock().unwrap();
        inner.state = Some(*state);
        inner.applies += 1;
    }
}

impl Recorder {
    fn state(&self) -> VisualState {
        self.0.lock().unwrap().state.expect("no state applied yet")
    }

    fn applies(&self) -> usize {
        self.0.lock().unwrap().applies
    }

    fn target(&self) -> SharedTarget {
        shared_target(self.clone())
    }
}

/// The canonical scenario: fade-up fires exactly once when the sensor
/// crosses 85% of viewport height, and never before.
#[test]
fn fade_up_fires_exactly_once_on_crossing() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    // Sensor top at 1850: with the 0.85 default threshold the activation
    // line sits 850px into a 1000px viewport, so the crossing happens at
    // scroll offset 1000.
    let handle = engine
        .bind(
            RevealBinding::new(Element::new(card.target(), 1850.0))
                .preset_name("fade-up")
                .duration(700.0)
                .easing(Easing::Linear),
        )
        .unwrap();

    // Bound but not crossed: parked at the from state, no flash of the
    // settled appearance
    assert_eq!(card.state(), VisualState::offset_y(40.0));
    assert!(!handle.has_fired());

    engine.on_scroll(500.0);
    engine.tick(100.0);
    assert_eq!(card.state(), VisualState::offset_y(40.0));
    assert_eq!(engine.active_transitions(), 0);

    // Crossing starts the transition
    engine.on_scroll(1000.0);
    assert!(handle.has_fired());
    assert_eq!(engine.active_transitions(), 1);

    engine.tick(350.0);
    let mid = card.state();
    assert!((mid.translate_y - 20.0).abs() < 0.01);
    assert!((mid.opacity - 0.5).abs() < 0.01);

    engine.tick(350.0);
    assert_eq!(card.state(), VisualState::SETTLED);
    assert_eq!(engine.active_transitions(), 0);

    // Scrolling away and back re-crosses the line; the binding stays spent
    let applies_after_settle = card.applies();
    engine.on_scroll(0.0);
    engine.on_scroll(2000.0);
    engine.on_scroll(1000.0);
    engine.tick(1000.0);
    assert_eq!(engine.active_transitions(), 0);
    assert_eq!(card.applies(), applies_after_settle);
    assert_eq!(card.state(), VisualState::SETTLED);
}

#[test]
fn children_stagger_in_document_order() {
    let engine = RevealEngine::new(1000.0);
    let sensor = Recorder::default();
    let items: Vec<Recorder> = (0..3).map(|_| Recorder::default()).collect();

    engine
        .bind(
            RevealBinding::new(Element::new(sensor.target(), 0.0))
                .preset_name("stagger-children")
                .children(items.iter().map(Recorder::target).collect())
                .duration(100.0)
                .stagger(100.0)
                .easing(Easing::Linear),
        )
        .unwrap();

    // Children are the animated targets; the sensor itself is left alone
    assert_eq!(sensor.applies(), 0);
    for item in &items {
        assert_eq!(item.state(), VisualState::offset_y(30.0));
    }

    // Already inside the activation line: fires on the first offset feed
    engine.on_scroll(0.0);
    assert_eq!(engine.active_transitions(), 3);

    // 50ms: first child mid-flight, the rest still waiting out their stagger
    engine.tick(50.0);
    assert!((items[0].state().translate_y - 15.0).abs() < 0.01);
    assert_eq!(items[1].state(), VisualState::offset_y(30.0));
    assert_eq!(items[2].state(), VisualState::offset_y(30.0));

    // 150ms: first settled, second mid-flight
    engine.tick(100.0);
    assert_eq!(items[0].state(), VisualState::SETTLED);
    assert!((items[1].state().translate_y - 15.0).abs() < 0.01);
    assert_eq!(items[2].state(), VisualState::offset_y(30.0));

    // 250ms: second settled, third mid-flight
    engine.tick(100.0);
    assert_eq!(items[1].state(), VisualState::SETTLED);
    assert!((items[2].state().translate_y - 15.0).abs() < 0.01);

    engine.tick(100.0);
    for item in &items {
        assert_eq!(item.state(), VisualState::SETTLED);
    }
    assert_eq!(engine.active_transitions(), 0);
}

#[test]
fn cancel_before_crossing_leaves_from_state() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    let handle = engine
        .bind(RevealBinding::new(Element::new(card.target(), 5000.0)))
        .unwrap();
    assert_eq!(card.state(), VisualState::offset_y(40.0));
    let applies_at_bind = card.applies();

    handle.cancel();
    assert!(!handle.is_bound());
    assert_eq!(engine.binding_count(), 0);

    // The crossing that would have fired is now a dead letter
    engine.on_scroll(10_000.0);
    engine.tick(5_000.0);
    assert_eq!(card.state(), VisualState::offset_y(40.0));
    assert_eq!(card.applies(), applies_at_bind);

    // Double cancel is a safe no-op
    handle.cancel();
}

#[test]
fn cancel_mid_flight_abandons_in_place() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    let handle = engine
        .bind(
            RevealBinding::new(Element::new(card.target(), 0.0))
                .duration(1000.0)
                .easing(Easing::Linear),
        )
        .unwrap();

    engine.on_scroll(0.0);
    engine.tick(500.0);
    let frozen = card.state();
    assert!(frozen.opacity > 0.0 && frozen.opacity < 1.0);

    handle.cancel();
    engine.tick(5_000.0);
    // No rollback, no completion: the target stays wherever it was
    assert_eq!(card.state(), frozen);
    assert_eq!(engine.active_transitions(), 0);
}

#[test]
fn unknown_preset_is_rejected_at_bind_time() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    let err = engine
        .bind(RevealBinding::new(Element::new(card.target(), 0.0)).preset_name("fade-down"))
        .unwrap_err();
    assert!(matches!(err, RevealError::UnknownPreset(_)));

    // The rejected binding armed nothing and touched nothing
    assert_eq!(card.applies(), 0);
    assert_eq!(engine.binding_count(), 0);
}

#[test]
fn custom_states_and_tuned_threshold() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    let from = VisualState::scaled(0.5).with_opacity(0.2);
    engine
        .bind(
            RevealBinding::new(Element::new(card.target(), 1800.0))
                .custom(from, VisualState::SETTLED)
                .threshold(0.8)
                .duration(200.0)
                .easing(Easing::Linear),
        )
        .unwrap();
    assert_eq!(card.state(), from);

    // Activation line at 0.8 * 1000 = 800: crossing needs offset >= 1000
    engine.on_scroll(999.0);
    assert_eq!(engine.active_transitions(), 0);
    engine.on_scroll(1000.0);
    engine.tick(200.0);
    assert_eq!(card.state(), VisualState::SETTLED);
}

#[test]
fn viewport_resize_moves_the_activation_line() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    engine
        .bind(RevealBinding::new(Element::new(card.target(), 1850.0)).duration(0.0))
        .unwrap();

    // Activation line at 850: a 950px-deep sensor top stays parked
    engine.on_scroll(900.0);
    assert_eq!(engine.active_transitions(), 0);

    // A taller viewport moves the line to 1020 and the same offset crosses
    engine.set_viewport_height(1200.0);
    engine.on_scroll(900.0);
    engine.tick(16.0);
    assert_eq!(card.state(), VisualState::SETTLED);
}

#[test]
fn delay_holds_the_from_state() {
    let engine = RevealEngine::new(1000.0);
    let card = Recorder::default();

    engine
        .bind(
            RevealBinding::new(Element::new(card.target(), 0.0))
                .delay(300.0)
                .duration(100.0)
                .easing(Easing::Linear),
        )
        .unwrap();

    engine.on_scroll(0.0);
    engine.tick(250.0);
    assert_eq!(card.state(), VisualState::offset_y(40.0));

    engine.tick(150.0);
    assert_eq!(card.state(), VisualState::SETTLED);
}
