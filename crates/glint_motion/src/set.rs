//! Keyed transition groups
//!
//! A `TransitionSet` owns active transitions and ticks them together each
//! frame. Owners keep the returned keys to read interpolated values and to
//! drop transitions that finished.

use crate::transition::Transition;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct TransitionId;
}

/// A group of transitions ticked as one
#[derive(Default)]
pub struct TransitionSet {
    transitions: SlotMap<TransitionId, Transition>,
}

impl TransitionSet {
    pub fn new() -> Self {
        Self {
            transitions: SlotMap::with_key(),
        }
    }

    /// Insert a transition and start it after `delay_ms`
    pub fn insert(&mut self, mut transition: Transition, delay_ms: f32) -> TransitionId {
        transition.start(delay_ms);
        self.transitions.insert(transition)
    }

    pub fn get(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id)
    }

    pub fn remove(&mut self, id: TransitionId) -> Option<Transition> {
        self.transitions.remove(id)
    }

    /// Advance every transition by delta time
    pub fn tick(&mut self, dt_ms: f32) {
        for (_, transition) in self.transitions.iter_mut() {
            transition.tick(dt_ms);
        }
    }

    /// Remove and return the ids of transitions that have run to completion
    pub fn drain_finished(&mut self) -> SmallVec<[TransitionId; 4]> {
        let finished: SmallVec<[TransitionId; 4]> = self
            .transitions
            .iter()
            .filter(|(_, t)| t.is_finished())
            .map(|(id, _)| id)
            .collect();
        for id in &finished {
            self.transitions.remove(*id);
        }
        finished
    }

    /// Whether any transition is still playing or pending
    pub fn has_active(&self) -> bool {
        self.transitions.iter().any(|(_, t)| !t.is_finished())
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
