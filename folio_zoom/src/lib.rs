// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Zoom: a headless, zoomable single-image viewport.
//!
//! This crate models one page of a photo gallery: an image inside a
//! scrollable region that can be pinched or double-tapped into magnification
//! and panned while magnified. It focuses on:
//! - Viewport state: zoom scale within `[min, max]`, content offset, and
//!   clamping so the scaled content always covers the viewport.
//! - Coordinate conversion between view, scroll and content space.
//! - The double-tap zoom target, which toggles between the maximum zoom and
//!   the identity.
//! - Mode notifications ([`ZoomEvent`]) telling an owner when a zoom
//!   interaction starts and whether it ended up magnified or back at scale 1.
//!
//! It does **not** render, decode images or recognize gestures. Callers are
//! expected to:
//! - Feed recognized gestures (pinch factor, double-tap location, pan delta)
//!   into a [`ZoomView`].
//! - Drive zoom animations from their frame clock with [`ZoomView::advance`].
//! - React to the returned [`ZoomEvents`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use folio_zoom::{ZoomEventKind, ZoomView};
//!
//! // `Size` doubles as image content: it only needs an intrinsic size.
//! let mut view = ZoomView::new(Size::new(300.0, 600.0));
//! view.set_image(Some(Size::new(1200.0, 800.0)));
//!
//! // Double-tap the center; the first event announces the interaction.
//! let events = view.double_tap(Point::new(150.0, 300.0));
//! assert_eq!(events[0].kind, ZoomEventKind::WillZoomIn);
//!
//! // Drive the animation to completion.
//! while view.is_animating() {
//!     view.advance(16);
//! }
//! assert_eq!(view.scale(), 3.0);
//! ```
//!
//! ## Design notes
//!
//! - The content box always matches the viewport at scale 1; images are
//!   aspect-fit inside it (see [`aspect_fit`]).
//! - The view never holds a reference to its owner: notifications are the
//!   return values of the calls that caused them.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod animation;
mod geometry;
mod view;
mod viewport;

pub use animation::{AnimationFrame, ZoomAnimation};
pub use geometry::{aspect_fit, double_tap_zoom_rect, identity_zoom_rect};
pub use view::{
    DEFAULT_ZOOM_ANIMATION_MS, ZoomContent, ZoomEvent, ZoomEventKind, ZoomEvents, ZoomMode,
    ZoomView,
};
pub use viewport::{ZoomViewport, ZoomViewportDebugInfo};
