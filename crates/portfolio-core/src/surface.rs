//! Drawing surface abstraction for the particle background.
//!
//! The simulator only speaks in terms of the handful of Canvas 2D operations
//! it needs. The web frontend implements [`Surface`] over
//! `CanvasRenderingContext2d`; tests use recording surfaces so a frame can be
//! inspected without a browser.

use glam::Vec2;
use std::fmt;

/// CSS `hsla()` color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// CSS `rgba()` color; channels in 0..=255, alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba(pub [f32; 4]);

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "rgba({},{},{},{})", r as u8, g as u8, b as u8, a)
    }
}

/// How a line segment is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    /// Flat color drawn under an extra global alpha.
    Solid { color: Rgba, global_alpha: f32 },
    /// Linear gradient from the segment start to its end.
    Gradient { start: Hsla, end: Hsla },
}

/// Radial glow: `color` at the centre fading to transparent at `fade_radius`,
/// filled over a disc of `fill_radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Hsla,
    pub fill_radius: f32,
    pub fade_radius: f32,
}

/// Backing buffer dimensions in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

pub trait Surface {
    /// Size the backing store for a `css_width × css_height` viewport and
    /// reset the transform so logical css pixels map onto it at `scale`.
    fn resize(&mut self, css_width: f32, css_height: f32, backing: BackingSize, scale: f64);
    fn clear(&mut self, width: f32, height: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    /// Stroke several segments with one shared style.
    ///
    /// Surfaces with per-style setup cost override this to pay it once.
    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], stroke: Stroke) {
        for &(from, to) in segments {
            self.stroke_line(from, to, stroke);
        }
    }
    fn fill_glow(&mut self, center: Vec2, glow: Glow);
}

/// Clamp a host-reported device pixel ratio into the supported range.
#[inline]
pub fn effective_dpr(reported: f64) -> f64 {
    if reported.is_finite() && reported > 0.0 {
        reported.min(crate::constants::MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Device-pixel backing size for a css-pixel viewport.
#[inline]
pub fn backing_size(width: f32, height: f32, dpr: f64) -> BackingSize {
    BackingSize {
        width: (width as f64 * dpr).floor().max(0.0) as u32,
        height: (height as f64 * dpr).floor().max(0.0) as u32,
    }
}
