// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// An animated transition between two zoom/offset pairs.
///
/// The animation is driven explicitly: callers feed elapsed milliseconds into
/// [`ZoomAnimation::advance`] from their frame clock. Progress follows an
/// ease-out cubic curve and the final step lands exactly on the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnimation {
    from_zoom: f64,
    to_zoom: f64,
    from_offset: Vec2,
    to_offset: Vec2,
    duration_ms: u64,
    elapsed_ms: u64,
}

/// One interpolated frame of a [`ZoomAnimation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    /// Zoom factor for this frame.
    pub zoom: f64,
    /// Content offset for this frame.
    pub offset: Vec2,
    /// `true` once the animation has reached its target.
    pub finished: bool,
}

impl ZoomAnimation {
    /// Creates an animation from `(from_zoom, from_offset)` to
    /// `(to_zoom, to_offset)` lasting `duration_ms`.
    #[must_use]
    pub fn new(from: (f64, Vec2), to: (f64, Vec2), duration_ms: u64) -> Self {
        Self {
            from_zoom: from.0,
            to_zoom: to.0,
            from_offset: from.1,
            to_offset: to.1,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    /// Returns the target zoom.
    #[must_use]
    pub fn target_zoom(&self) -> f64 {
        self.to_zoom
    }

    /// Returns `true` once all of the duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Advances the animation by `dt_ms` and returns the resulting frame.
    pub fn advance(&mut self, dt_ms: u64) -> AnimationFrame {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.duration_ms);
        if self.is_finished() {
            return AnimationFrame {
                zoom: self.to_zoom,
                offset: self.to_offset,
                finished: true,
            };
        }
        let t = ease_out_cubic(self.elapsed_ms as f64 / self.duration_ms as f64);
        AnimationFrame {
            zoom: self.from_zoom + (self.to_zoom - self.from_zoom) * t,
            offset: self.from_offset.lerp(self.to_offset, t),
            finished: false,
        }
    }

    /// Jumps straight to the target frame.
    pub fn finish(&mut self) -> AnimationFrame {
        self.advance(self.duration_ms)
    }
}

/// Ease-out cubic: fast start, gentle landing.
pub(crate) fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
