//! Screen ↔ map coordinate scaling.
//!
//! The map image is usually drawn scaled; `scale_x`/`scale_y` are map pixels
//! per screen pixel.  Pointer events arrive in screen pixels and are scaled
//! up before touching the graph; node positions are scaled down for drawing.

use cm_core::{CoreError, DisplayConfig, Point};
use cm_graph::Segment;

use crate::EditorResult;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    /// Both scales must be finite and positive.
    pub fn new(scale_x: f64, scale_y: f64) -> EditorResult<Self> {
        for s in [scale_x, scale_y] {
            if !(s.is_finite() && s > 0.0) {
                return Err(CoreError::Config(format!("viewport scale must be positive, got {s}")).into());
            }
        }
        Ok(Self { scale_x, scale_y })
    }

    /// Map drawn at native resolution.
    pub fn identity() -> Self {
        Self { scale_x: 1.0, scale_y: 1.0 }
    }

    /// Uniform scale from an image-to-screen pixel ratio, clamped to the
    /// range allowed by `display`.
    pub fn from_ratio(ratio: f64, display: &DisplayConfig) -> EditorResult<Self> {
        display.validate()?;
        let r = display.clamp_ratio(ratio);
        Self::new(r, r)
    }

    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Screen pixel → map pixel (truncating).
    pub fn to_map(&self, x: i32, y: i32) -> Point {
        Point::new(
            (f64::from(x) * self.scale_x) as i32,
            (f64::from(y) * self.scale_y) as i32,
        )
    }

    /// Map pixel → screen pixel (truncating).
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(
            (f64::from(p.x) / self.scale_x) as i32,
            (f64::from(p.y) / self.scale_y) as i32,
        )
    }

    pub fn segment_to_screen(&self, s: Segment) -> Segment {
        Segment { from: self.to_screen(s.from), to: self.to_screen(s.to) }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity()
    }
}
