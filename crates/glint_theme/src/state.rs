//! Global style state singleton
//!
//! `StyleState` is the shared style source every animated component reads:
//! the current color scheme, the ambient palette bundle, and the viewer's
//! motion preference. Scheme changes notify subscribers (the ambient
//! renderer re-colors in place); the motion preference is deliberately not
//! subscribable - components sample it once at init and keep that answer
//! for their lifetime.

use crate::palette::{AmbientPalette, PaletteBundle};
use crate::scheme::ColorScheme;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock, RwLock};

/// Global style state instance
static STYLE_STATE: OnceLock<StyleState> = OnceLock::new();

/// Key for a scheme-change subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StyleWatchId(u64);

type SchemeWatcher = Box<dyn Fn(ColorScheme) + Send + Sync>;

/// Process-wide style source
pub struct StyleState {
    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Viewer's reduced-motion accessibility preference
    reduced_motion: AtomicBool,

    /// Ambient palette pair for the two schemes
    palettes: RwLock<PaletteBundle>,

    /// Scheme-change subscriptions
    watchers: Mutex<FxHashMap<StyleWatchId, SchemeWatcher>>,

    /// Next subscription key
    next_watch: AtomicU64,
}

impl StyleState {
    /// Initialize the global style state (call once at app startup)
    pub fn init(palettes: PaletteBundle, scheme: ColorScheme, reduced_motion: bool) {
        let state = StyleState {
            scheme: RwLock::new(scheme),
            reduced_motion: AtomicBool::new(reduced_motion),
            palettes: RwLock::new(palettes),
            watchers: Mutex::new(FxHashMap::default()),
            next_watch: AtomicU64::new(1),
        };

        let _ = STYLE_STATE.set(state);
    }

    /// Initialize with the built-in palettes and environment-probed
    /// preferences
    pub fn init_default() {
        Self::init(
            PaletteBundle::default(),
            ColorScheme::default(),
            detect_reduced_motion(),
        );
    }

    /// Get the global style state instance
    pub fn get() -> &'static StyleState {
        STYLE_STATE
            .get()
            .expect("StyleState not initialized. Call StyleState::init() at app startup.")
    }

    /// Try to get the global style state (returns None if not initialized)
    pub fn try_get() -> Option<&'static StyleState> {
        STYLE_STATE.get()
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme and notify subscribers
    pub fn set_scheme(&self, scheme: ColorScheme) {
        {
            let mut current = self.scheme.write().unwrap();
            if *current == scheme {
                return;
            }
            tracing::debug!(
                "StyleState::set_scheme - switching from {:?} to {:?}",
                *current,
                scheme
            );
            *current = scheme;
        }

        let watchers = self.watchers.lock().unwrap();
        for watcher in watchers.values() {
            watcher(scheme);
        }
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    /// Subscribe to scheme changes; the callback runs on every switch until
    /// unsubscribed
    pub fn subscribe(&self, watcher: impl Fn(ColorScheme) + Send + Sync + 'static) -> StyleWatchId {
        let id = StyleWatchId(self.next_watch.fetch_add(1, Ordering::SeqCst));
        self.watchers.lock().unwrap().insert(id, Box::new(watcher));
        id
    }

    /// Remove a scheme-change subscription. Unknown ids are a no-op.
    pub fn unsubscribe(&self, id: StyleWatchId) {
        self.watchers.lock().unwrap().remove(&id);
    }

    // ========== Motion Preference ==========

    /// The viewer's reduced-motion preference
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.load(Ordering::SeqCst)
    }

    /// Update the reduced-motion flag (platform layer only).
    ///
    /// Components that already sampled the old value keep their settled
    /// presentation; the new value applies to components mounted after this
    /// call.
    pub fn set_reduced_motion(&self, reduced: bool) {
        self.reduced_motion.store(reduced, Ordering::SeqCst);
    }

    // ========== Palettes ==========

    /// The ambient palette for the current scheme
    pub fn palette(&self) -> AmbientPalette {
        self.palette_for(self.scheme())
    }

    /// The ambient palette for a specific scheme
    pub fn palette_for(&self, scheme: ColorScheme) -> AmbientPalette {
        self.palettes.read().unwrap().for_scheme(scheme).clone()
    }

    /// Replace the palette bundle
    pub fn set_palettes(&self, palettes: PaletteBundle) {
        *self.palettes.write().unwrap() = palettes;
    }
}

/// The motion-preference gate.
///
/// Side-effect-free query; never fails. Reads the preference at call time -
/// callers consult it once before committing to an animation path and render
/// final (settled, not hidden) states when it returns true. Before
/// `StyleState::init`, motion is assumed allowed.
pub fn prefers_reduced_motion() -> bool {
    StyleState::try_get()
        .map(StyleState::reduced_motion)
        .unwrap_or(false)
}

/// Probe the environment for a reduced-motion request.
///
/// Embedders with a real accessibility signal should pass their own value to
/// `StyleState::init` instead.
fn detect_reduced_motion() -> bool {
    match std::env::var("GLINT_REDUCED_MOTION") {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "reduce"),
        Err(_) => false,
    }
}
