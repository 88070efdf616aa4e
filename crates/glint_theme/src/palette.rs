//! Ambient palettes
//!
//! The background renderer colors its blobs from a small per-scheme palette.
//! Built-in palettes mirror the product's sky/indigo/violet/cyan washes;
//! custom palettes load from TOML.

use crate::scheme::ColorScheme;
use glint_core::Color;
use serde::Deserialize;
use thiserror::Error;

/// Palette loading/validation errors
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse palette config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color \"{0}\"")]
    InvalidColor(String),
    #[error("palette for {0:?} has no colors")]
    EmptyPalette(ColorScheme),
}

/// An ordered set of wash colors for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientPalette {
    colors: Vec<Color>,
}

impl AmbientPalette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Color for a blob index; indices beyond the palette wrap around.
    /// An empty palette reads as transparent.
    pub fn color_for(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::TRANSPARENT;
        }
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The dark-scheme wash set
    pub fn dark_default() -> Self {
        Self::new(vec![
            Color::from_rgba8(56, 189, 248, 38), // sky
            Color::from_rgba8(99, 102, 241, 31), // indigo
            Color::from_rgba8(14, 165, 233, 26), // deep sky
            Color::from_rgba8(139, 92, 246, 20), // violet
            Color::from_rgba8(6, 182, 212, 26),  // cyan
        ])
    }

    /// The light-scheme wash set (dimmer, over a pale page)
    pub fn light_default() -> Self {
        Self::new(vec![
            Color::from_rgba8(2, 132, 199, 20),  // sky
            Color::from_rgba8(79, 70, 229, 15),  // indigo
            Color::from_rgba8(14, 165, 233, 15), // deep sky
            Color::from_rgba8(124, 58, 237, 13), // violet
            Color::from_rgba8(8, 145, 178, 15),  // cyan
        ])
    }
}

/// A light/dark palette pair
#[derive(Clone, Debug, PartialEq)]
pub struct PaletteBundle {
    pub light: AmbientPalette,
    pub dark: AmbientPalette,
}

impl PaletteBundle {
    pub fn new(light: AmbientPalette, dark: AmbientPalette) -> Self {
        Self { light, dark }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &AmbientPalette {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    /// Load a bundle from a TOML document:
    ///
    /// ```toml
    /// [light]
    /// colors = [{ hex = "#0284c7", opacity = 0.08 }]
    ///
    /// [dark]
    /// colors = [{ hex = "#38bdf8", opacity = 0.15 }]
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self, ThemeError> {
        let config: BundleConfig = toml::from_str(input)?;
        Ok(Self::new(
            config.light.resolve(ColorScheme::Light)?,
            config.dark.resolve(ColorScheme::Dark)?,
        ))
    }
}

impl Default for PaletteBundle {
    fn default() -> Self {
        Self::new(
            AmbientPalette::light_default(),
            AmbientPalette::dark_default(),
        )
    }
}

#[derive(Debug, Deserialize)]
struct BundleConfig {
    light: PaletteConfig,
    dark: PaletteConfig,
}

#[derive(Debug, Deserialize)]
struct PaletteConfig {
    colors: Vec<ColorConfig>,
}

#[derive(Debug, Deserialize)]
struct ColorConfig {
    hex: String,
    #[serde(default = "default_opacity")]
    opacity: f32,
}

fn default_opacity() -> f32 {
    1.0
}

impl PaletteConfig {
    fn resolve(&self, scheme: ColorScheme) -> Result<AmbientPalette, ThemeError> {
        if self.colors.is_empty() {
            return Err(ThemeError::EmptyPalette(scheme));
        }
        let colors = self
            .colors
            .iter()
            .map(|c| {
                Color::parse_hex(&c.hex)
                    .map(|color| color.with_alpha(c.opacity.clamp(0.0, 1.0)))
                    .ok_or_else(|| ThemeError::InvalidColor(c.hex.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AmbientPalette::new(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_have_five_washes() {
        assert_eq!(AmbientPalette::light_default().len(), 5);
        assert_eq!(AmbientPalette::dark_default().len(), 5);
    }

    #[test]
    fn test_color_for_wraps() {
        let palette = AmbientPalette::dark_default();
        assert_eq!(palette.color_for(0), palette.color_for(5));
        assert_eq!(palette.color_for(2), palette.color_for(7));
    }

    #[test]
    fn test_from_toml() {
        let bundle = PaletteBundle::from_toml_str(
            r##"
            [light]
            colors = [{ hex = "#0284c7", opacity = 0.08 }]

            [dark]
            colors = [{ hex = "#38bdf8", opacity = 0.15 }, { hex = "#6366f1" }]
            "##,
        )
        .unwrap();
        assert_eq!(bundle.light.len(), 1);
        assert_eq!(bundle.dark.len(), 2);
        assert!((bundle.dark.color_for(0).a - 0.15).abs() < 1e-6);
        // Omitted opacity reads as fully opaque
        assert_eq!(bundle.dark.color_for(1).a, 1.0);
    }

    #[test]
    fn test_from_toml_rejects_bad_color() {
        let err = PaletteBundle::from_toml_str(
            r##"
            [light]
            colors = [{ hex = "#zzz" }]

            [dark]
            colors = [{ hex = "#38bdf8" }]
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor(_)));
    }

    #[test]
    fn test_from_toml_rejects_empty_palette() {
        let err = PaletteBundle::from_toml_str(
            r##"
            [light]
            colors = []

            [dark]
            colors = [{ hex = "#38bdf8" }]
            "##,
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::EmptyPalette(ColorScheme::Light)));
    }
}
