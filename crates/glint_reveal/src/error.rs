//! Reveal engine errors

use glint_motion::PresetError;
use thiserror::Error;

/// Errors surfaced at bind time
#[derive(Debug, Error)]
pub enum RevealError {
    /// The binding named a preset outside the closed preset table
    #[error(transparent)]
    UnknownPreset(#[from] PresetError),
}
