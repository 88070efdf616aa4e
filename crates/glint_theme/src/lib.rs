//! Glint Style State
//!
//! The shared style source the animation layer reads from:
//!
//! - **Color scheme**: the light/dark flag and its change subscriptions
//! - **Ambient palettes**: the per-scheme color sets the background
//!   renderer paints with, loadable from TOML
//! - **Motion preference**: the viewer's reduced-motion accessibility
//!   setting, sampled by each component at init time
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glint_theme::{StyleState, prefers_reduced_motion};
//!
//! // Initialize once at app startup
//! StyleState::init_default();
//!
//! // Components consult the gate before committing to an animation path
//! if prefers_reduced_motion() {
//!     // render final states, skip all animation setup
//! }
//!
//! // The platform layer flips the scheme; subscribers are notified
//! StyleState::get().toggle_scheme();
//! ```

pub mod palette;
pub mod scheme;
pub mod state;

pub use palette::{AmbientPalette, PaletteBundle, ThemeError};
pub use scheme::ColorScheme;
pub use state::{prefers_reduced_motion, StyleState, StyleWatchId};
