//! Viewport-crossing subscriptions
//!
//! A watch fires when its sensor's document-space top edge crosses an
//! activation line, a fixed fraction of the viewport height. Each watch
//! fires at most once: the fired guard is checked unconditionally before
//! the crossing test, so repeated crossings and callback re-entry are
//! structurally impossible.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct WatchId;
}

/// The viewport-crossing subscription contract.
///
/// Any implementation works for the reveal engine - native intersection
/// callbacks, scroll-position polling, or a host scroll library - as long
/// as it keeps the fire-once guarantee and supports explicit unsubscribe.
pub trait ViewportWatch {
    /// Register a sensor. `document_top` is the sensor's top edge in
    /// document coordinates; `threshold` is the activation line as a
    /// fraction of viewport height.
    fn subscribe(&mut self, document_top: f32, threshold: f32) -> WatchId;

    /// Remove a subscription. Unknown ids are a no-op.
    fn unsubscribe(&mut self, id: WatchId);

    /// Feed a new scroll offset; returns the watches that crossed their
    /// activation line on this update. A returned watch never fires again.
    fn advance(&mut self, scroll_offset: f32) -> SmallVec<[WatchId; 4]>;
}

struct WatchEntry {
    document_top: f32,
    threshold: f32,
    fired: bool,
}

/// Scroll-position implementation of [`ViewportWatch`]
pub struct ScrollWatcher {
    viewport_height: f32,
    scroll_offset: f32,
    entries: SlotMap<WatchId, WatchEntry>,
}

impl ScrollWatcher {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            scroll_offset: 0.0,
            entries: SlotMap::with_key(),
        }
    }

    /// Update the viewport height (host resize). Armed watches keep their
    /// thresholds and are re-evaluated on the next `advance`.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// The most recently observed scroll offset
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Number of live subscriptions (fired or not)
    pub fn watch_count(&self) -> usize {
        self.entries.len()
    }
}

impl ViewportWatch for ScrollWatcher {
    fn subscribe(&mut self, document_top: f32, threshold: f32) -> WatchId {
        self.entries.insert(WatchEntry {
            document_top,
            threshold,
            fired: false,
        })
    }

    fn unsubscribe(&mut self, id: WatchId) {
        self.entries.remove(id);
    }

    fn advance(&mut self, scroll_offset: f32) -> SmallVec<[WatchId; 4]> {
        self.scroll_offset = scroll_offset;
        let activation_base = self.viewport_height;

        let mut crossed = SmallVec::new();
        for (id, entry) in self.entries.iter_mut() {
            if entry.fired {
                continue;
            }
            let top_in_viewport = entry.document_top - scroll_offset;
            if top_in_viewport <= activation_base * entry.threshold {
                entry.fired = true;
                crossed.push(id);
            }
        }
        crossed
    }
}
