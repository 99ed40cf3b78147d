// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery tuning, loadable from TOML.
//!
//! Every field is optional in the file; missing fields keep their defaults.
//!
//! ```toml
//! max_zoom = 4.0
//! page_animation_ms = 250
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Longest accepted animation or tap interval, in milliseconds.
pub const MAX_DURATION_MS: u64 = 10_000;

/// Tunable gallery behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Largest zoom scale; the smallest is always 1.
    pub max_zoom: f64,
    /// Longest pause between the taps of a double-tap.
    pub double_tap_interval_ms: u64,
    /// How far a finger may wander and still count as tapping.
    pub tap_slop: f64,
    /// How far a finger must move before it drags.
    pub drag_slop: f64,
    /// Duration of an animated double-tap zoom.
    pub zoom_animation_ms: u64,
    /// Duration of a full page transition.
    pub page_animation_ms: u64,
    /// Fraction of the page width a swipe must travel to turn the page.
    pub swipe_threshold: f64,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            max_zoom: folio_zoom::ZoomViewport::DEFAULT_MAX_ZOOM,
            double_tap_interval_ms: folio_gesture::tap::DEFAULT_TAP_INTERVAL_MS,
            tap_slop: folio_gesture::tap::DEFAULT_TAP_SLOP,
            drag_slop: folio_gesture::drag::DEFAULT_DRAG_SLOP,
            zoom_animation_ms: folio_zoom::DEFAULT_ZOOM_ANIMATION_MS,
            page_animation_ms: folio_pager::DEFAULT_PAGE_ANIMATION_MS,
            swipe_threshold: folio_pager::DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl GalleryConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and the matching
    /// validation error for out-of-range values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Serialize`] if a value has no TOML form.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Checks every field against its accepted range.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_zoom.is_finite() || self.max_zoom < 1.0 {
            return Err(ConfigError::InvalidZoomRange(self.max_zoom));
        }
        if !(self.swipe_threshold > 0.0 && self.swipe_threshold <= 1.0) {
            return Err(ConfigError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        for (field, value) in [("tap_slop", self.tap_slop), ("drag_slop", self.drag_slop)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidSlop { field, value });
            }
        }
        for (field, value) in [
            ("double_tap_interval_ms", self.double_tap_interval_ms),
            ("zoom_animation_ms", self.zoom_animation_ms),
            ("page_animation_ms", self.page_animation_ms),
        ] {
            if value > MAX_DURATION_MS {
                return Err(ConfigError::InvalidDuration {
                    field,
                    value,
                    max: MAX_DURATION_MS,
                });
            }
        }
        Ok(())
    }
}
