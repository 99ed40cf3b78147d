// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-tap recognition with spatial and temporal tolerance.
//!
//! [`TapRecognizer`] counts consecutive taps of a single pointer and fires
//! once the configured number of taps has been reached. A tap is a down/up
//! pair that stays within the slop radius; consecutive taps must start within
//! `max_interval_ms` of the previous release and within the slop radius of the
//! first tap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use folio_gesture::PointerId;
//! use folio_gesture::tap::TapRecognizer;
//!
//! let mut taps = TapRecognizer::double_tap();
//! let finger = PointerId(1);
//!
//! taps.on_down(finger, Point::new(10.0, 10.0), 1_000);
//! assert_eq!(taps.on_up(finger, Point::new(10.0, 10.0), 1_050), None);
//!
//! taps.on_down(finger, Point::new(12.0, 11.0), 1_200);
//! let tap = taps.on_up(finger, Point::new(12.0, 11.0), 1_250).unwrap();
//! assert_eq!(tap.count, 2);
//! ```

use kurbo::Point;

use crate::PointerId;

/// Default maximum time between a release and the next press, in milliseconds.
pub const DEFAULT_TAP_INTERVAL_MS: u64 = 300;

/// Default tap slop in logical pixels.
pub const DEFAULT_TAP_SLOP: f64 = 24.0;

/// A recognized multi-tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tap {
    /// Release position of the final tap.
    pub location: Point,
    /// Number of taps recognized; equals the recognizer's requirement.
    pub count: u32,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    pointer: PointerId,
    pos: Point,
}

/// Recognizes `taps_required` consecutive taps.
#[derive(Clone, Copy, Debug)]
pub struct TapRecognizer {
    taps_required: u32,
    max_interval_ms: u64,
    slop: f64,
    count: u32,
    first_pos: Point,
    last_up_ms: u64,
    press: Option<Press>,
}

impl TapRecognizer {
    /// Creates a recognizer firing after `taps_required` taps (at least one).
    #[must_use]
    pub fn new(taps_required: u32, max_interval_ms: u64, slop: f64) -> Self {
        Self {
            taps_required: taps_required.max(1),
            max_interval_ms,
            slop: slop.max(0.0),
            count: 0,
            first_pos: Point::ZERO,
            last_up_ms: 0,
            press: None,
        }
    }

    /// A two-tap recognizer with default tolerances.
    #[must_use]
    pub fn double_tap() -> Self {
        Self::new(2, DEFAULT_TAP_INTERVAL_MS, DEFAULT_TAP_SLOP)
    }

    /// Returns how many taps this recognizer requires.
    #[must_use]
    pub fn taps_required(&self) -> u32 {
        self.taps_required
    }

    /// Returns the taps counted so far in the current sequence.
    #[must_use]
    pub fn pending_taps(&self) -> u32 {
        self.count
    }

    /// Records a press.
    ///
    /// A press that comes too late or too far from the first tap starts a new
    /// sequence.
    pub fn on_down(&mut self, pointer: PointerId, pos: Point, time_ms: u64) {
        if self.count > 0 {
            let late = time_ms.saturating_sub(self.last_up_ms) > self.max_interval_ms;
            let far = pos.distance(self.first_pos) > self.slop;
            if late || far {
                self.count = 0;
            }
        }
        if self.count == 0 {
            self.first_pos = pos;
        }
        self.press = Some(Press { pointer, pos });
    }

    /// Records movement; leaving the slop radius cancels the sequence.
    pub fn on_move(&mut self, pointer: PointerId, pos: Point) {
        if let Some(press) = self.press
            && press.pointer == pointer
            && pos.distance(press.pos) > self.slop
        {
            self.cancel();
        }
    }

    /// Records a release and returns the tap once enough have been counted.
    pub fn on_up(&mut self, pointer: PointerId, pos: Point, time_ms: u64) -> Option<Tap> {
        let press = self.press.take()?;
        if press.pointer != pointer {
            self.press = Some(press);
            return None;
        }
        if pos.distance(press.pos) > self.slop {
            self.cancel();
            return None;
        }
        self.count += 1;
        self.last_up_ms = time_ms;
        if self.count < self.taps_required {
            return None;
        }
        let count = self.count;
        self.count = 0;
        Some(Tap {
            location: pos,
            count,
        })
    }

    /// Abandons the current sequence, for example when a second pointer
    /// turns the interaction into a pinch.
    pub fn cancel(&mut self) {
        self.count = 0;
        self.press = None;
    }
}
