//! Canvas configuration supplied by the host page.
//!
//! The host passes a JSON object when it creates the engine. Every field is
//! optional:
//!
//! - `width`, `height`: canvas extent in CSS pixels (default 800 × 600)
//! - `handle_radius`: half-width of a corner handle's hit square (default 8)
//! - `resize_clamp`: `"invert"` (default) or `{ "min_size": n }`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, HANDLE_RADIUS_PX};
use crate::error::ConfigError;

/// What a resize does when a corner is dragged past its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeClamp {
    /// Let width/height go negative; the shape flips over its anchor.
    #[default]
    Invert,
    /// Keep width and height at least this large, anchor corner fixed.
    MinSize(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub handle_radius: f64,
    pub resize_clamp: ResizeClamp,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            handle_radius: HANDLE_RADIUS_PX,
            resize_clamp: ResizeClamp::default(),
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns `Parse` for malformed JSON or unknown fields, `Invalid` for
    /// values that fail [`CanvasConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that dimensions are positive, the handle radius is non-negative,
    /// and any minimum size is positive. All values must be finite.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfigError::Invalid(format!("width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::Invalid(format!("height must be positive, got {}", self.height)));
        }
        if !(self.handle_radius.is_finite() && self.handle_radius >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "handle_radius must be non-negative, got {}",
                self.handle_radius
            )));
        }
        if let ResizeClamp::MinSize(min) = self.resize_clamp {
            if !(min.is_finite() && min > 0.0) {
                return Err(ConfigError::Invalid(format!("min_size must be positive, got {min}")));
            }
        }
        Ok(())
    }
}
