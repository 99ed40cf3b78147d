// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Why an image asset could not be provided.
#[derive(Debug, Error)]
pub enum AssetError {
    /// No asset with this name exists.
    #[error("asset `{0}` not found")]
    NotFound(String),
    /// The asset file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The asset could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    /// The image has no pixels, or its pixel buffer does not match its size.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

/// Why a [`GalleryConfig`](crate::GalleryConfig) was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The TOML text is malformed or has fields of the wrong type.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be written as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The maximum zoom is below the fixed minimum of 1 or not finite.
    #[error("max_zoom must be a finite value of at least 1, got {0}")]
    InvalidZoomRange(f64),
    /// The swipe threshold is outside `(0, 1]`.
    #[error("swipe_threshold must be in (0, 1], got {0}")]
    InvalidSwipeThreshold(f64),
    /// A slop radius is negative or not finite.
    #[error("{field} must be a finite, non-negative distance, got {value}")]
    InvalidSlop {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A duration is longer than any animation or tap window should be.
    #[error("{field} must be at most {max} ms, got {value}")]
    InvalidDuration {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u64,
        /// Largest accepted value.
        max: u64,
    },
}
