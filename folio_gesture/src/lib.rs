// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Gesture: headless recognizers for touch and pointer input.
//!
//! This crate provides small, focused state machines that turn raw pointer
//! down/move/up events into the gestures a photo gallery needs:
//!
//! - [`drag`]: a pointer that moves past a slop radius becomes a drag, with
//!   incremental and total offsets.
//! - [`tap`]: consecutive taps within spatial and temporal tolerance, for
//!   example a double-tap.
//! - [`pinch`]: the scale factor and midpoint of a two-pointer pinch.
//!
//! Each recognizer is:
//!
//! - **Minimal and focused**: it handles one interaction pattern.
//! - **Passive**: it never decides what a gesture means; callers route the
//!   recognized gesture to whichever consumer owns it.
//! - **Clock-agnostic**: timestamps are caller-supplied milliseconds.
//!
//! ## Routing sketch
//!
//! ```rust
//! use kurbo::Point;
//! use folio_gesture::PointerId;
//! use folio_gesture::drag::{DragState, DragUpdate};
//! use folio_gesture::tap::TapRecognizer;
//!
//! let mut drag = DragState::default();
//! let mut taps = TapRecognizer::double_tap();
//! let finger = PointerId(0);
//!
//! // Every pointer event goes to both recognizers; whichever recognizes
//! // its gesture first wins.
//! drag.on_down(finger, Point::new(10.0, 10.0));
//! taps.on_down(finger, Point::new(10.0, 10.0), 0);
//!
//! let pos = Point::new(60.0, 10.0);
//! taps.on_move(finger, pos);
//! let update = drag.on_move(finger, pos);
//! assert!(matches!(update, Some(DragUpdate::Began { .. })));
//!
//! // The drag moved too far to also count as a tap.
//! assert_eq!(taps.on_up(finger, pos, 80), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod pinch;
pub mod tap;

/// Identifier of a pointer (finger, pen or mouse) supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);
