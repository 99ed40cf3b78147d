// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch tracking.
//!
//! [`PinchState`] snapshots the distance between two pointers when a pinch
//! starts and reports, for every later pair of positions, the cumulative
//! scale factor and the current midpoint.
//!
//! ```
//! use kurbo::Point;
//! use folio_gesture::pinch::PinchState;
//!
//! let mut pinch = PinchState::default();
//! pinch.start(Point::new(100.0, 100.0), Point::new(200.0, 100.0));
//!
//! let frame = pinch.update(Point::new(50.0, 100.0), Point::new(250.0, 100.0)).unwrap();
//! assert_eq!(frame.scale, 2.0);
//! assert_eq!(frame.center, Point::new(150.0, 100.0));
//! ```

use kurbo::Point;

/// Pointer separations below this are too small to derive a stable ratio.
pub const MIN_PINCH_DISTANCE: f64 = 1.0;

/// One update of a running pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchFrame {
    /// Current separation divided by the separation at start.
    pub scale: f64,
    /// Midpoint between the two pointers.
    pub center: Point,
}

/// Tracks a pinch between two pointers.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchState {
    initial_distance: Option<f64>,
}

impl PinchState {
    /// Starts a pinch from two pointer positions and returns their midpoint.
    pub fn start(&mut self, a: Point, b: Point) -> Point {
        self.initial_distance = Some(a.distance(b));
        a.midpoint(b)
    }

    /// Reports the scale and center for new pointer positions.
    ///
    /// Returns `None` when no pinch is active. If the pinch started with the
    /// pointers almost on top of each other, the scale stays at `1.0`.
    pub fn update(&self, a: Point, b: Point) -> Option<PinchFrame> {
        let initial = self.initial_distance?;
        let scale = if initial < MIN_PINCH_DISTANCE {
            1.0
        } else {
            a.distance(b) / initial
        };
        Some(PinchFrame {
            scale,
            center: a.midpoint(b),
        })
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.initial_distance = None;
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.initial_distance.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_without_start_is_none() {
        let pinch = PinchState::default();
        assert!(!pinch.is_active());
        assert_eq!(pinch.update(Point::ZERO, Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn spreading_and_contracting_scale_relative_to_start() {
        let mut pinch = PinchState::default();
        let center = pinch.start(Point::new(0.0, 0.0), Point::new(0.0, 100.0));
        assert_eq!(center, Point::new(0.0, 50.0));

        let wide = pinch
            .update(Point::new(0.0, -50.0), Point::new(0.0, 150.0))
            .unwrap();
        assert_eq!(wide.scale, 2.0);

        let narrow = pinch
            .update(Point::new(0.0, 25.0), Point::new(0.0, 75.0))
            .unwrap();
        assert_eq!(narrow.scale, 0.5);
    }

    #[test]
    fn coincident_start_keeps_unit_scale() {
        let mut pinch = PinchState::default();
        pinch.start(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        let frame = pinch
            .update(Point::new(0.0, 0.0), Point::new(100.0, 0.0))
            .unwrap();
        assert_eq!(frame.scale, 1.0);
    }

    #[test]
    fn end_deactivates() {
        let mut pinch = PinchState::default();
        pinch.start(Point::ZERO, Point::new(10.0, 0.0));
        pinch.end();
        assert!(!pinch.is_active());
    }
}
