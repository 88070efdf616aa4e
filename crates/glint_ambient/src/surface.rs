//! The drawing-surface seam
//!
//! The renderer records paint commands into a `PaintRecorder` and hands the
//! buffer back to the host surface each frame. Hosts replay the commands
//! against whatever raster backend they own; tests inspect them directly.

use glint_core::{Color, Point, Viewport};

/// A radial wash: the color at full strength in the center, fading to
/// fully transparent at the rim
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialFade {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

impl RadialFade {
    pub fn new(center: Point, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// The rim color (hue preserved, alpha zero)
    pub fn rim_color(&self) -> Color {
        self.color.faded_out()
    }
}

/// A paint command for the host's raster backend
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    /// Wipe the whole surface
    Clear,
    /// Scale subsequent drawing by the device-pixel factor
    SetScale(f32),
    /// Fill a radial wash
    FillRadial(RadialFade),
}

/// Records one frame's worth of paint commands
#[derive(Debug, Default)]
pub struct PaintRecorder {
    commands: Vec<PaintCommand>,
}

impl PaintRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.push(PaintCommand::Clear);
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.commands.push(PaintCommand::SetScale(scale));
    }

    pub fn fill_radial(&mut self, fade: RadialFade) {
        self.commands.push(PaintCommand::FillRadial(fade));
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }
}

/// The surface the ambient layer draws on.
///
/// `acquire` may fail (a host canvas without a usable context); the
/// renderer treats that as "no background" and never as a fault.
pub trait DrawSurface {
    /// Current logical size and device pixel ratio
    fn viewport(&self) -> Viewport;

    /// Begin a frame; `None` means the drawing context is unavailable
    fn acquire(&mut self) -> Option<PaintRecorder>;

    /// Replay a finished frame
    fn present(&mut self, recorder: PaintRecorder);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_preserves_order() {
        let mut recorder = PaintRecorder::new();
        recorder.clear();
        recorder.set_scale(2.0);
        recorder.fill_radial(RadialFade::new(Point::new(1.0, 2.0), 10.0, Color::TRANSPARENT));

        let commands = recorder.take_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], PaintCommand::Clear);
        assert!(matches!(commands[1], PaintCommand::SetScale(s) if s == 2.0));
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn test_rim_is_transparent_same_hue() {
        let fade = RadialFade::new(Point::ZERO, 5.0, Color::from_rgba8(56, 189, 248, 38));
        let rim = fade.rim_color();
        assert_eq!(rim.a, 0.0);
        assert_eq!(rim.r, fade.color.r);
    }
}
