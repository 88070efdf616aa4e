//! The ambient background renderer
//!
//! Lifecycle: `mount` (may decline), `frame` per tick, `resize`, `unmount`.
//! Theme switches arrive through a `StyleState` subscription that only sets
//! a flag; the next frame re-colors the field in place before stepping, so
//! the frame path is the only writer of blob state.

use crate::blob::BlobField;
use crate::surface::{DrawSurface, RadialFade};
use glint_core::{Point, Viewport};
use glint_theme::{
    prefers_reduced_motion, AmbientPalette, ColorScheme, PaletteBundle, StyleState, StyleWatchId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mount-time tuning
#[derive(Clone, Copy, Debug)]
pub struct AmbientOptions {
    /// Fixed RNG seed for reproducible fields; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Device-pixel-ratio cap
    pub max_pixel_ratio: f32,
}

impl Default for AmbientOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_pixel_ratio: 2.0,
        }
    }
}

/// Scheme-change mailbox written by the style subscription, drained by the
/// frame path
struct SchemeSignal {
    changed: AtomicBool,
    scheme: Mutex<ColorScheme>,
}

/// The ambient background layer
pub struct AmbientBackground<S: DrawSurface> {
    surface: S,
    field: BlobField,
    rng: StdRng,
    pixel_scale: f32,
    max_pixel_ratio: f32,
    palettes: PaletteBundle,
    palette: AmbientPalette,
    signal: Arc<SchemeSignal>,
    watch: Option<StyleWatchId>,
    torn_down: bool,
}

impl<S: DrawSurface> AmbientBackground<S> {
    /// Mount the background on a surface.
    ///
    /// Declines (returns `None`) when the surface has no usable drawing
    /// context or the viewer prefers reduced motion; the hosting page
    /// simply runs without a backdrop.
    pub fn mount(mut surface: S, options: AmbientOptions) -> Option<Self> {
        if prefers_reduced_motion() {
            tracing::debug!("ambient background disabled by motion preference");
            return None;
        }
        if surface.acquire().is_none() {
            tracing::warn!("ambient surface unavailable; background disabled");
            return None;
        }

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let (palettes, scheme) = match StyleState::try_get() {
            Some(state) => (
                PaletteBundle::new(
                    state.palette_for(ColorScheme::Light),
                    state.palette_for(ColorScheme::Dark),
                ),
                state.scheme(),
            ),
            None => (PaletteBundle::default(), ColorScheme::default()),
        };
        let palette = palettes.for_scheme(scheme).clone();

        let viewport = surface.viewport();
        let field = BlobField::generate(viewport.size(), &palette, &mut rng);

        let signal = Arc::new(SchemeSignal {
            changed: AtomicBool::new(false),
            scheme: Mutex::new(scheme),
        });
        let watch = StyleState::try_get().map(|state| {
            let signal = signal.clone();
            state.subscribe(move |scheme| {
                *signal.scheme.lock().unwrap() = scheme;
                signal.changed.store(true, Ordering::SeqCst);
            })
        });

        Some(Self {
            surface,
            field,
            rng,
            pixel_scale: viewport.scale_clamped(options.max_pixel_ratio),
            max_pixel_ratio: options.max_pixel_ratio,
            palettes,
            palette,
            signal,
            watch,
            torn_down: false,
        })
    }

    /// One animation frame: drain a pending theme switch, advance the
    /// field, and repaint every blob as a radial wash
    pub fn frame(&mut self) {
        if self.torn_down {
            return;
        }

        if self.signal.changed.swap(false, Ordering::SeqCst) {
            let scheme = *self.signal.scheme.lock().unwrap();
            self.palette = self.palettes.for_scheme(scheme).clone();
            self.field.recolor(&self.palette);
            tracing::debug!(?scheme, "ambient field re-colored");
        }

        self.field.step();

        let Some(mut recorder) = self.surface.acquire() else {
            tracing::trace!("ambient frame skipped; surface context unavailable");
            return;
        };
        recorder.clear();
        recorder.set_scale(self.pixel_scale);
        for blob in self.field.blobs() {
            recorder.fill_radial(RadialFade::new(
                Point::new(blob.x, blob.y),
                blob.radius,
                blob.color,
            ));
        }
        self.surface.present(recorder);
    }

    /// Host resize: recompute pixel scaling and regenerate the field from
    /// scratch (fresh random positions; trajectories are not preserved)
    pub fn resize(&mut self, viewport: Viewport) {
        if self.torn_down {
            return;
        }
        self.pixel_scale = viewport.scale_clamped(self.max_pixel_ratio);
        self.field = BlobField::generate(viewport.size(), &self.palette, &mut self.rng);
        tracing::debug!(
            blobs = self.field.len(),
            width = viewport.width,
            "ambient field regenerated"
        );
    }

    /// Tear down: disconnect the style subscription and go inert.
    /// Idempotent; later `frame`/`resize` calls are no-ops.
    pub fn unmount(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        if let (Some(watch), Some(state)) = (self.watch.take(), StyleState::try_get()) {
            state.unsubscribe(watch);
        }
    }

    /// The simulated field (primarily for host-side introspection)
    pub fn field(&self) -> &BlobField {
        &self.field
    }

    pub fn pixel_scale(&self) -> f32 {
        self.pixel_scale
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: DrawSurface> Drop for AmbientBackground<S> {
    fn drop(&mut self) {
        self.unmount();
    }
}
