//! The reveal engine
//!
//! Tick-driven: the host feeds scroll offsets into `on_scroll` and frame
//! deltas into `tick`. Scroll updates only decide which bindings fire;
//! all visual mutation happens inside `tick`, so a binding can never be
//! re-entered from its own callback.

use crate::binding::RevealBinding;
use crate::error::RevealError;
use crate::handle::RevealHandle;
use crate::observer::{ScrollWatcher, ViewportWatch, WatchId};
use glint_core::{SharedTarget, VisualState};
use glint_motion::{ensure_registered, Easing, Transition, TransitionId, TransitionSet};
use glint_theme::prefers_reduced_motion;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex};

new_key_type! {
    pub struct BindingId;
}

struct BoundReveal {
    watch: Option<WatchId>,
    targets: SmallVec<[SharedTarget; 4]>,
    from: VisualState,
    to: VisualState,
    delay_ms: f32,
    duration_ms: f32,
    stagger_ms: f32,
    easing: Easing,
    /// In-flight transitions, paired with the index of their target
    active: SmallVec<[(TransitionId, usize); 4]>,
    fired: bool,
}

pub(crate) struct EngineInner {
    watcher: ScrollWatcher,
    bindings: SlotMap<BindingId, BoundReveal>,
    watch_index: FxHashMap<WatchId, BindingId>,
    transitions: TransitionSet,
}

impl EngineInner {
    pub(crate) fn cancel(&mut self, id: BindingId) {
        let Some(binding) = self.bindings.remove(id) else {
            // Already cancelled or never armed; cancel must stay a no-op
            return;
        };
        if let Some(watch) = binding.watch {
            self.watcher.unsubscribe(watch);
            self.watch_index.remove(&watch);
        }
        for (transition, _) in binding.active {
            // Abandoned in place: the target keeps whatever state the last
            // tick applied
            self.transitions.remove(transition);
        }
        tracing::debug!("reveal binding cancelled");
    }

    pub(crate) fn has_fired(&self, id: BindingId) -> bool {
        self.bindings.get(id).is_some_and(|b| b.fired)
    }

    pub(crate) fn is_bound(&self, id: BindingId) -> bool {
        self.bindings.contains_key(id)
    }

    fn fire(&mut self, watch: WatchId) {
        let Some(&binding_id) = self.watch_index.get(&watch) else {
            return;
        };
        self.watch_index.remove(&watch);
        self.watcher.unsubscribe(watch);

        let Some(binding) = self.bindings.get_mut(binding_id) else {
            return;
        };
        binding.watch = None;
        binding.fired = true;

        for index in 0..binding.targets.len() {
            let transition = Transition::new(
                binding.from,
                binding.to,
                binding.duration_ms,
                binding.easing,
            );
            let delay = binding.delay_ms + index as f32 * binding.stagger_ms;
            let id = self.transitions.insert(transition, delay);
            binding.active.push((id, index));
        }

        tracing::debug!(targets = binding.targets.len(), "reveal binding fired");
    }
}

/// The scroll-reveal engine.
///
/// Cheap to clone handles out of; all state lives behind one lock, shared
/// with the [`RevealHandle`]s it hands back.
pub struct RevealEngine {
    inner: Arc<Mutex<EngineInner>>,
}

impl RevealEngine {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(EngineInner {
                watcher: ScrollWatcher::new(viewport_height),
                bindings: SlotMap::with_key(),
                watch_index: FxHashMap::default(),
                transitions: TransitionSet::new(),
            })),
        }
    }

    /// Arm a reveal binding.
    ///
    /// Applies the `from` state to every target immediately, so elements
    /// never flash their settled appearance before the entrance plays.
    /// Under reduced motion no watch is armed and targets are set straight
    /// to their final `to` state.
    ///
    /// After binding a batch, feed the current offset through
    /// [`RevealEngine::on_scroll`] so sensors already inside the activation
    /// line fire without waiting for the next real scroll event.
    pub fn bind(&self, binding: RevealBinding) -> Result<RevealHandle, RevealError> {
        ensure_registered();

        let (from, to) = binding.animation.resolve()?;

        let mut targets: SmallVec<[SharedTarget; 4]> = SmallVec::new();
        if binding.children.is_empty() {
            targets.push(binding.trigger.target.clone());
        } else {
            targets.extend(binding.children.iter().cloned());
        }

        // Sampled once per binding; the answer holds for its lifetime
        let reduced = prefers_reduced_motion();
        let initial = if reduced { &to } else { &from };
        for target in &targets {
            target.lock().unwrap().apply(initial);
        }

        let mut inner = self.inner.lock().unwrap();
        let watch = (!reduced).then(|| {
            inner
                .watcher
                .subscribe(binding.trigger.document_top, binding.threshold)
        });

        let id = inner.bindings.insert(BoundReveal {
            watch,
            targets,
            from,
            to,
            delay_ms: binding.delay_ms,
            duration_ms: binding.duration_ms,
            stagger_ms: binding.stagger_ms,
            easing: binding.easing,
            active: SmallVec::new(),
            fired: reduced,
        });
        if let Some(watch) = watch {
            inner.watch_index.insert(watch, id);
        }

        Ok(RevealHandle::new(Arc::downgrade(&self.inner), id))
    }

    /// Feed a scroll offset. Bindings whose sensors cross their activation
    /// line start their transitions; everything else is a no-op.
    pub fn on_scroll(&self, scroll_offset: f32) {
        let mut inner = self.inner.lock().unwrap();
        let crossed = inner.watcher.advance(scroll_offset);
        for watch in crossed {
            inner.fire(watch);
        }
    }

    /// Host resize: update the activation geometry
    pub fn set_viewport_height(&self, height: f32) {
        self.inner.lock().unwrap().watcher.set_viewport_height(height);
    }

    /// Advance in-flight transitions and push their values to the targets
    pub fn tick(&self, dt_ms: f32) {
        let mut inner = self.inner.lock().unwrap();
        if inner.transitions.is_empty() {
            return;
        }

        inner.transitions.tick(dt_ms);

        // Apply current values (finished transitions read as their `to`
        // state here, before being drained)
        for (_, binding) in inner.bindings.iter() {
            for (transition, index) in &binding.active {
                if let Some(t) = inner.transitions.get(*transition) {
                    let value = t.value();
                    binding.targets[*index].lock().unwrap().apply(&value);
                }
            }
        }

        let finished = inner.transitions.drain_finished();
        if !finished.is_empty() {
            for (_, binding) in inner.bindings.iter_mut() {
                binding
                    .active
                    .retain(|(transition, _)| !finished.contains(transition));
            }
        }
    }

    /// Number of live bindings (armed, fired, or settled)
    pub fn binding_count(&self) -> usize {
        self.inner.lock().unwrap().bindings.len()
    }

    /// Number of in-flight transitions
    pub fn active_transitions(&self) -> usize {
        self.inner.lock().unwrap().transitions.len()
    }
}
