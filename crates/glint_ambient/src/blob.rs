//! The blob field simulation
//!
//! A fixed-size set of drifting radial washes. Blobs advance by their
//! velocity every frame and wrap toroidally: once a blob's visible extent
//! has fully left an edge it re-enters from the opposite edge with its
//! velocity intact, keeping density constant forever.

use glint_core::{Color, Size};
use glint_theme::AmbientPalette;
use rand::Rng;

/// Viewport width below which the field runs with fewer blobs
pub const NARROW_BREAKPOINT: f32 = 768.0;
/// Field size on narrow viewports
pub const NARROW_BLOB_COUNT: usize = 3;
/// Field size on wide viewports
pub const WIDE_BLOB_COUNT: usize = 5;

/// Velocity components are drawn from (-MAX_DRIFT/2, MAX_DRIFT/2)
const MAX_DRIFT: f32 = 0.4;
/// Radius range as a fraction of the smaller viewport dimension
const RADIUS_BASE: f32 = 0.25;
const RADIUS_SPREAD: f32 = 0.2;

/// One drifting wash
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub color: Color,
}

impl Blob {
    /// Advance one frame
    fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    /// Re-enter from the opposite edge once fully outside a bound
    fn wrap(&mut self, bounds: Size) {
        if self.x < -self.radius {
            self.x = bounds.width + self.radius;
        }
        if self.x > bounds.width + self.radius {
            self.x = -self.radius;
        }
        if self.y < -self.radius {
            self.y = bounds.height + self.radius;
        }
        if self.y > bounds.height + self.radius {
            self.y = -self.radius;
        }
    }
}

/// The full field, regenerated wholesale on resize
#[derive(Clone, Debug)]
pub struct BlobField {
    blobs: Vec<Blob>,
    bounds: Size,
}

impl BlobField {
    /// Field size for a viewport width
    pub fn count_for_width(width: f32) -> usize {
        if width < NARROW_BREAKPOINT {
            NARROW_BLOB_COUNT
        } else {
            WIDE_BLOB_COUNT
        }
    }

    /// Generate a fresh field: random positions inside the bounds, random
    /// drift, radii proportional to the smaller dimension, palette colors
    /// assigned by index
    pub fn generate(bounds: Size, palette: &AmbientPalette, rng: &mut impl Rng) -> Self {
        let count = Self::count_for_width(bounds.width);
        let min_dimension = bounds.min_dimension();

        let blobs = (0..count)
            .map(|i| Blob {
                x: rng.gen::<f32>() * bounds.width,
                y: rng.gen::<f32>() * bounds.height,
                vx: (rng.gen::<f32>() - 0.5) * MAX_DRIFT,
                vy: (rng.gen::<f32>() - 0.5) * MAX_DRIFT,
                radius: min_dimension * (RADIUS_BASE + rng.gen::<f32>() * RADIUS_SPREAD),
                color: palette.color_for(i),
            })
            .collect();

        Self { blobs, bounds }
    }

    /// Advance every blob one frame and wrap the strays
    pub fn step(&mut self) {
        for blob in &mut self.blobs {
            blob.advance();
            blob.wrap(self.bounds);
        }
    }

    /// Re-color in place by index; positions and velocities survive
    pub fn recolor(&mut self, palette: &AmbientPalette) {
        for (i, blob) in self.blobs.iter_mut().enumerate() {
            blob.color = palette.color_for(i);
        }
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn blobs_mut(&mut self) -> &mut [Blob] {
        &mut self.blobs
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}
