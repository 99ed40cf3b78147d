// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag recognition: a pointer becomes a drag once it moves past a slop radius.
//!
//! ## Usage
//!
//! 1) Call [`DragState::on_down`] when the pointer goes down.
//! 2) Feed moves into [`DragState::on_move`]. The first move beyond the slop
//!    radius yields [`DragUpdate::Began`]; later moves yield
//!    [`DragUpdate::Moved`] with the delta since the previous move.
//! 3) [`DragState::on_up`] ends the drag and reports the total offset, or
//!    `None` if the pointer never left the slop radius (a tap, not a drag).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use folio_gesture::PointerId;
//! use folio_gesture::drag::{DragState, DragUpdate};
//!
//! let mut drag = DragState::new(8.0);
//! let finger = PointerId(1);
//!
//! drag.on_down(finger, Point::new(100.0, 100.0));
//! // Jitter inside the slop radius is not a drag.
//! assert_eq!(drag.on_move(finger, Point::new(103.0, 100.0)), None);
//!
//! // Leaving the radius starts the drag.
//! assert!(matches!(
//!     drag.on_move(finger, Point::new(80.0, 100.0)),
//!     Some(DragUpdate::Began { .. })
//! ));
//!
//! let end = drag.on_up(finger, Point::new(60.0, 100.0)).unwrap();
//! assert_eq!(end.total, Vec2::new(-40.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

use crate::PointerId;

/// Default drag slop in logical pixels.
pub const DEFAULT_DRAG_SLOP: f64 = 8.0;

/// Progress reported by [`DragState::on_move`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    /// The pointer just left the slop radius.
    Began {
        /// Where the pointer went down.
        origin: Point,
        /// Movement from `origin` to the current position.
        delta: Vec2,
    },
    /// The drag continued.
    Moved {
        /// Movement since the previous update.
        delta: Vec2,
        /// Movement since the pointer went down.
        total: Vec2,
    },
}

/// Summary of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    /// Where the pointer went down.
    pub origin: Point,
    /// Movement from `origin` to the release position.
    pub total: Vec2,
}

/// Tracks one pointer from down to up and decides whether it dragged.
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    slop: f64,
    pointer: Option<PointerId>,
    start_pos: Point,
    last_pos: Point,
    dragging: bool,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_SLOP)
    }
}

impl DragState {
    /// Creates a tracker with the given slop radius.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            slop: slop.max(0.0),
            pointer: None,
            start_pos: Point::ZERO,
            last_pos: Point::ZERO,
            dragging: false,
        }
    }

    /// Starts tracking `pointer` at `pos`, replacing any previous pointer.
    pub fn on_down(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = pos;
        self.last_pos = pos;
        self.dragging = false;
    }

    /// Updates the tracked pointer. Other pointers are ignored.
    pub fn on_move(&mut self, pointer: PointerId, pos: Point) -> Option<DragUpdate> {
        if self.pointer != Some(pointer) {
            return None;
        }
        if !self.dragging {
            if pos.distance(self.start_pos) <= self.slop {
                return None;
            }
            self.dragging = true;
            self.last_pos = pos;
            return Some(DragUpdate::Began {
                origin: self.start_pos,
                delta: pos - self.start_pos,
            });
        }
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        Some(DragUpdate::Moved {
            delta,
            total: pos - self.start_pos,
        })
    }

    /// Releases the tracked pointer.
    ///
    /// Returns the drag summary if the pointer had started dragging.
    pub fn on_up(&mut self, pointer: PointerId, pos: Point) -> Option<DragEnd> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let was_dragging = self.dragging;
        let origin = self.start_pos;
        self.cancel();
        was_dragging.then(|| DragEnd {
            origin,
            total: pos - origin,
        })
    }

    /// Forgets the tracked pointer without reporting anything.
    pub fn cancel(&mut self) {
        self.pointer = None;
        self.dragging = false;
    }

    /// Returns `true` while a pointer is down, dragging or not.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    /// Returns `true` once the tracked pointer has left the slop radius.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}
