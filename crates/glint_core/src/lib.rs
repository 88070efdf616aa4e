//! Glint Core Types
//!
//! Foundational value types shared by every Glint crate:
//!
//! - **Color**: f32 RGBA with hex/u8 constructors and interpolation
//! - **Geometry**: points, sizes, rects, and the viewport descriptor
//! - **Visual state**: the animated property set (offset, opacity, scale)
//! - **MotionTarget**: the seam trait hosts implement so Glint can drive
//!   their elements' visual properties

pub mod color;
pub mod geometry;
pub mod visual;

pub use color::Color;
pub use geometry::{Point, Rect, Size, Viewport};
pub use visual::{shared_target, MotionTarget, SharedTarget, VisualState};
