// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_gesture::PointerId;
use folio_gesture::drag::DragState;
use folio_gesture::pinch::PinchState;
use folio_gesture::tap::TapRecognizer;
use kurbo::Point;
use smallvec::SmallVec;

use crate::GalleryConfig;

/// A raw pointer sample from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which finger, pen or mouse this sample belongs to.
    pub pointer: PointerId,
    /// Position in view coordinates.
    pub position: Point,
    /// Timestamp in milliseconds on any monotonic clock.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates a pointer sample.
    #[must_use]
    pub fn new(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            position,
            time_ms,
        }
    }
}

/// Who receives the movement of a drag; fixed from drag begin to drag end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum DragOwner {
    Pager,
    Zoom,
}

/// Recognizers fed by the raw pointer stream.
#[derive(Clone, Debug)]
pub(crate) struct InputState {
    pub(crate) drag: DragState,
    pub(crate) taps: TapRecognizer,
    pub(crate) pinch: PinchState,
    pointers: SmallVec<[(PointerId, Point); 2]>,
}

impl InputState {
    pub(crate) fn new(config: &GalleryConfig) -> Self {
        Self {
            drag: DragState::new(config.drag_slop),
            taps: TapRecognizer::new(2, config.double_tap_interval_ms, config.tap_slop),
            pinch: PinchState::default(),
            pointers: SmallVec::new(),
        }
    }

    /// Records a pressed pointer and returns how many are down.
    pub(crate) fn press(&mut self, pointer: PointerId, pos: Point) -> usize {
        match self.pointers.iter_mut().find(|(id, _)| *id == pointer) {
            Some(entry) => entry.1 = pos,
            None => self.pointers.push((pointer, pos)),
        }
        self.pointers.len()
    }

    pub(crate) fn moved(&mut self, pointer: PointerId, pos: Point) {
        if let Some(entry) = self.pointers.iter_mut().find(|(id, _)| *id == pointer) {
            entry.1 = pos;
        }
    }

    /// Forgets a released pointer and returns how many are still down.
    pub(crate) fn release(&mut self, pointer: PointerId) -> usize {
        self.pointers.retain(|(id, _)| *id != pointer);
        self.pointers.len()
    }

    /// Positions of the first two pointers down.
    pub(crate) fn pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [(_, a), (_, b), ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Abandons every gesture in progress.
    pub(crate) fn reset(&mut self) {
        self.drag.cancel();
        self.taps.cancel();
        self.pinch.end();
        self.pointers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_pressed_pointers_in_order() {
        let mut input = InputState::new(&GalleryConfig::default());
        assert_eq!(input.press(PointerId(1), Point::new(1.0, 0.0)), 1);
        assert_eq!(input.pair(), None);
        assert_eq!(input.press(PointerId(2), Point::new(2.0, 0.0)), 2);
        input.moved(PointerId(1), Point::new(5.0, 0.0));
        assert_eq!(
            input.pair(),
            Some((Point::new(5.0, 0.0), Point::new(2.0, 0.0)))
        );
        // Pressing an already-down pointer only moves it.
        assert_eq!(input.press(PointerId(2), Point::new(3.0, 0.0)), 2);
        assert_eq!(input.release(PointerId(1)), 1);
        assert_eq!(input.release(PointerId(9)), 1);
    }
}
