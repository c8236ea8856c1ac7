//! Display and editor configuration.
//!
//! Both structs are plain values: the host application builds them (or
//! loads them from a TOML/JSON file with the `serde` feature) and passes them
//! to whichever component needs them.  Nothing here is process-global.

use crate::{CoreError, CoreResult};

// ── DisplayConfig ─────────────────────────────────────────────────────────────

/// Screen bounds and the allowed image-to-screen pixel ratio range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayConfig {
    /// Screen width in pixels.
    pub screen_width: u32,

    /// Screen height in pixels.
    pub screen_height: u32,

    /// Smallest ratio of map-image pixels to screen pixels (fully zoomed in).
    pub min_image_px_ratio: f64,

    /// Largest ratio of map-image pixels to screen pixels (fully zoomed out).
    pub max_image_px_ratio: f64,
}

impl DisplayConfig {
    /// Reject non-positive screen sizes and an empty or inverted ratio range.
    pub fn validate(&self) -> CoreResult<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(CoreError::Config(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        let (lo, hi) = (self.min_image_px_ratio, self.max_image_px_ratio);
        if !(lo.is_finite() && hi.is_finite() && lo > 0.0 && lo <= hi) {
            return Err(CoreError::Config(format!(
                "image pixel ratio range [{lo}, {hi}] is invalid"
            )));
        }
        Ok(())
    }

    /// Clamp `ratio` into `[min_image_px_ratio, max_image_px_ratio]`.
    #[inline]
    pub fn clamp_ratio(&self, ratio: f64) -> f64 {
        ratio.clamp(self.min_image_px_ratio, self.max_image_px_ratio)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_width:       1920,
            screen_height:      1080,
            min_image_px_ratio: 1.0,
            max_image_px_ratio: 4.0,
        }
    }
}

// ── EditorConfig ──────────────────────────────────────────────────────────────

/// Tunables for interactive map editing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorConfig {
    /// Maximum distance, in map pixels, between a click and a node for the
    /// click to hit that node.  Default: 8.
    pub max_click_distance: f64,
}

impl EditorConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let d = self.max_click_distance;
        if d.is_finite() && d >= 0.0 {
            Ok(())
        } else {
            Err(CoreError::Config(format!(
                "max_click_distance must be finite and non-negative, got {d}"
            )))
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { max_click_distance: 8.0 }
    }
}
