//! Glint Scroll-Reveal Engine
//!
//! One-shot entry transitions keyed to viewport crossings:
//!
//! - **ViewportWatch**: the fire-once crossing-subscription contract, with
//!   `ScrollWatcher` as the provided scroll-position implementation
//! - **RevealBinding**: trigger + targets + animation + timing, built
//!   fluently and armed with [`RevealEngine::bind`]
//! - **RevealEngine**: applies `from` states at bind time, fires each
//!   binding at most once, staggers multi-target reveals, and drives the
//!   in-flight transitions from the host's tick
//! - **RevealHandle**: idempotent cancellation for unmount paths
//! - **SmoothScroll**: eased scroll-offset driver feeding the engine
//! - **TextReveal**: staggered word/letter entrance helper
//!
//! # Quick start
//!
//! ```rust,ignore
//! use glint_core::shared_target;
//! use glint_reveal::{Element, RevealBinding, RevealEngine};
//!
//! let engine = RevealEngine::new(900.0);
//! let handle = engine.bind(
//!     RevealBinding::new(Element::new(card, 1400.0))
//!         .preset_name("fade-up")?
//!         .duration(700.0),
//! )?;
//!
//! // host scroll + frame callbacks
//! engine.on_scroll(scroll_offset);
//! engine.tick(frame_dt_ms);
//! ```

pub mod binding;
pub mod engine;
pub mod error;
pub mod handle;
pub mod observer;
pub mod smooth;
pub mod text;

pub use binding::{Element, RevealAnimation, RevealBinding};
pub use engine::RevealEngine;
pub use error::RevealError;
pub use handle::RevealHandle;
pub use observer::{ScrollWatcher, ViewportWatch, WatchId};
pub use smooth::{SmoothScroll, SmoothScrollConfig};
pub use text::{split_units, SplitMode, TextReveal};
