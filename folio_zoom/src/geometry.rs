// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom-target geometry for double-tap and reset gestures.

use kurbo::{Point, Rect, Size};

use crate::viewport::ZoomViewport;

/// Computes the content-space rectangle a double-tap at `location` zooms to.
///
/// `location` is in content coordinates. With `s` the current zoom and
/// `s' = min(2s, max)`:
/// - If `s' != s`, the rectangle is the viewport size divided by the maximum
///   zoom, centered on `location`. Fitting it into the viewport lands exactly
///   on the maximum zoom, whatever `s'` was.
/// - Otherwise the viewport is already at the maximum. The rectangle is the
///   displayed content frame divided by the maximum zoom, centered on
///   `location` converted from scroll into content coordinates. Fitting it
///   collapses back to the identity zoom.
///
/// Repeated double-taps therefore toggle between the maximum zoom and the
/// identity. A non-positive zoom yields [`Rect::ZERO`].
#[must_use]
pub fn double_tap_zoom_rect(viewport: &ZoomViewport, location: Point) -> Rect {
    let scale = viewport.zoom();
    let max = viewport.max_zoom();
    if scale <= 0.0 || max <= 0.0 {
        return Rect::ZERO;
    }
    let target = (scale * 2.0).min(max);
    if target != scale {
        Rect::from_center_size(location, viewport.view_size() / max)
    } else {
        zoom_rect_for_scale(viewport, scale, location)
    }
}

/// Rectangle covering the displayed content frame at `scale`, divided by the
/// maximum zoom and centered on the scroll-space point `center`.
fn zoom_rect_for_scale(viewport: &ZoomViewport, scale: f64, center: Point) -> Rect {
    if scale <= 0.0 {
        return Rect::ZERO;
    }
    let frame = viewport.content_size() * scale;
    let size = frame / viewport.max_zoom();
    let center = viewport.scroll_to_content_point(center);
    Rect::from_center_size(center, size)
}

/// Rectangle that returns the viewport to the identity state: the full
/// content box, centered on the content center.
#[must_use]
pub fn identity_zoom_rect(viewport: &ZoomViewport) -> Rect {
    Rect::from_origin_size(Point::ZERO, viewport.content_size())
}

/// Largest rectangle with the aspect ratio of `intrinsic` that fits inside
/// `bounds`, centered in it.
///
/// Returns [`Rect::ZERO`] when either size is empty.
#[must_use]
pub fn aspect_fit(intrinsic: Size, bounds: Rect) -> Rect {
    if intrinsic.width <= 0.0 || intrinsic.height <= 0.0 {
        return Rect::ZERO;
    }
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return Rect::ZERO;
    }
    let scale = (bounds.width() / intrinsic.width).min(bounds.height() / intrinsic.height);
    Rect::from_center_size(bounds.center(), intrinsic * scale)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{aspect_fit, double_tap_zoom_rect, identity_zoom_rect};
    use crate::viewport::ZoomViewport;

    #[test]
    fn zoom_in_rect_targets_max_zoom() {
        let vp = ZoomViewport::new(Size::new(300.0, 600.0));
        let rect = double_tap_zoom_rect(&vp, Point::new(150.0, 300.0));
        assert_eq!(rect.size(), Size::new(100.0, 200.0));
        assert_eq!(rect.center(), Point::new(150.0, 300.0));

        let (zoom, _) = vp.target_for_rect(rect).unwrap();
        assert_eq!(zoom, 3.0);
    }

    #[test]
    fn zoom_in_divides_by_max_not_by_doubled_scale() {
        let mut vp = ZoomViewport::new(Size::new(300.0, 600.0));
        vp.set_zoom_limits(1.0, 8.0);
        let rect = double_tap_zoom_rect(&vp, Point::new(150.0, 300.0));
        let (zoom, _) = vp.target_for_rect(rect).unwrap();
        assert_eq!(zoom, 8.0);
    }

    #[test]
    fn intermediate_pinch_scale_still_jumps_to_max() {
        let mut vp = ZoomViewport::new(Size::new(300.0, 600.0));
        vp.set_zoom(1.2);
        let p = vp.view_to_content_point(Point::new(150.0, 300.0));
        let rect = double_tap_zoom_rect(&vp, p);
        let (zoom, _) = vp.target_for_rect(rect).unwrap();
        assert_eq!(zoom, 3.0);
    }

    #[test]
    fn zoom_out_rect_at_max_collapses_to_identity() {
        let mut vp = ZoomViewport::new(Size::new(300.0, 600.0));
        vp.set_zoom(3.0);
        let rect = double_tap_zoom_rect(&vp, Point::new(40.0, 70.0));
        assert_eq!(rect.size(), Size::new(300.0, 600.0));

        let (zoom, offset) = vp.target_for_rect(rect).unwrap();
        assert_eq!(zoom, 1.0);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn identity_rect_covers_content() {
        let vp = ZoomViewport::new(Size::new(320.0, 480.0));
        assert_eq!(identity_zoom_rect(&vp), Rect::new(0.0, 0.0, 320.0, 480.0));
    }

    #[test]
    fn aspect_fit_letterboxes_wide_image() {
        let fitted = aspect_fit(Size::new(400.0, 200.0), Rect::new(0.0, 0.0, 300.0, 600.0));
        assert_eq!(fitted, Rect::new(0.0, 225.0, 300.0, 375.0));
        assert_eq!(aspect_fit(Size::ZERO, Rect::new(0.0, 0.0, 1.0, 1.0)), Rect::ZERO);
    }
}
