//! Glint Ambient Background
//!
//! A continuously animated backdrop, decoupled from scroll:
//!
//! - **Surface**: the command-buffer drawing seam hosts implement
//! - **Blob field**: the fixed-size particle set with toroidal wrapping
//! - **AmbientBackground**: mount/frame/resize/unmount lifecycle plus
//!   in-place re-coloring on theme switches
//! - **FrameLoop**: a cancellable fixed-rate driver for hosts without a
//!   display-refresh callback
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glint_ambient::{AmbientBackground, AmbientOptions, FrameLoop};
//!
//! let Some(background) = AmbientBackground::mount(surface, AmbientOptions::default()) else {
//!     return; // no drawing surface or reduced motion: page runs without it
//! };
//! let background = std::sync::Arc::new(std::sync::Mutex::new(background));
//! let driver = {
//!     let background = background.clone();
//!     FrameLoop::spawn(60, move |_| background.lock().unwrap().frame())
//! };
//! // on unmount: drop(driver); background.lock().unwrap().unmount();
//! ```

pub mod blob;
pub mod frame_loop;
pub mod renderer;
pub mod surface;

pub use blob::{Blob, BlobField};
pub use frame_loop::FrameLoop;
pub use renderer::{AmbientBackground, AmbientOptions};
pub use surface::{DrawSurface, PaintCommand, PaintRecorder, RadialFade};
