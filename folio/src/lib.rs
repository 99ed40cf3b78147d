// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio: a headless photo gallery.
//!
//! A [`Gallery`] is a horizontal pager of full-screen images. Each page can
//! be pinched or double-tapped into magnification and panned while
//! magnified; the pages can be swiped or jumped between with a page
//! indicator. The gallery arbitrates between the two:
//!
//! - While a page is zooming or zoomed, swiping is disabled and the
//!   indicator is hidden, so horizontal drags pan the image instead of
//!   turning the page.
//! - When the page is back at scale 1, swiping and the indicator return.
//! - A page that leaves the screen is reset to scale 1.
//! - Zoom gestures are ignored while the pages are moving.
//!
//! The gallery does not draw and does not own a clock. Hosts feed it pointer
//! events (or already-recognized gestures), call [`Gallery::advance`] from
//! their frame clock and draw whatever [`Gallery::frame`] describes.
//!
//! The building blocks live in their own crates and are re-exported here:
//! [`folio_zoom`] for the zoomable page, [`folio_pager`] for the carousel and
//! [`folio_gesture`] for pointer recognition.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio::{Gallery, GalleryConfig, Image, MemoryLoader, PointerEvent};
//! use folio_gesture::PointerId;
//! use kurbo::{Point, Size};
//!
//! let photo = Image::solid(400, 300, [200, 180, 160, 255]).unwrap();
//! let loader = MemoryLoader::new()
//!     .with("photo1", photo.clone())
//!     .with("photo2", photo);
//!
//! let viewport = Size::new(390.0, 844.0);
//! let mut gallery =
//!     Gallery::from_assets(GalleryConfig::default(), viewport, &loader, &["photo1", "photo2"]);
//! while gallery.is_animating() {
//!     gallery.advance(16);
//! }
//! assert_eq!(gallery.current_index(), Some(0));
//!
//! // Double-tap the middle of the screen.
//! let finger = PointerId(0);
//! let center = Point::new(195.0, 422.0);
//! for t in [0, 120] {
//!     gallery.pointer_down(PointerEvent::new(finger, center, t));
//!     gallery.pointer_up(PointerEvent::new(finger, center, t + 40));
//! }
//! while gallery.is_animating() {
//!     gallery.advance(16);
//! }
//!
//! let frame = gallery.frame();
//! assert_eq!(frame.scale, 3.0);
//! assert!(frame.indicator.is_hidden());
//! assert!(!gallery.pager().is_transitioning_enabled());
//! ```
//!
//! ## Configuration
//!
//! [`GalleryConfig`] carries the tunables (maximum zoom, tap and drag
//! tolerances, animation durations, swipe threshold) and can be read from
//! TOML with [`GalleryConfig::from_toml_str`] or [`GalleryConfig::load`].
//!
//! ## Logging
//!
//! Folio emits [`tracing`] events: `debug` for page and zoom mode changes,
//! `trace` for animation steps and ignored gestures, and `warn` for assets
//! that could not be loaded.

mod appearance;
pub mod assets;
pub mod config;
mod error;
mod gallery;
mod image;
mod input;
mod page;

pub use appearance::{Appearance, StatusBarStyle};
pub use assets::{AssetLoader, DEFAULT_ASSETS, DirectoryLoader, MemoryLoader};
pub use config::GalleryConfig;
pub use error::{AssetError, ConfigError};
pub use gallery::{Gallery, GalleryEvent, GalleryEvents, GalleryFrame};
pub use image::Image;
pub use input::PointerEvent;
pub use page::ZoomPage;

pub use folio_gesture;
pub use folio_pager;
pub use folio_zoom;
