// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Zoom values closer than this to a limit are snapped onto the limit.
///
/// Zoom-to-rect divides sizes that were themselves produced by multiplying
/// with the limits, so a round trip may land a few ulps away from `1.0`.
const SNAP_EPSILON: f64 = 1e-9;

/// Scrollable, zoomable region over a content box.
///
/// `ZoomViewport` models a scroll region the size of the viewport whose
/// content box is scaled by a uniform zoom factor. Three coordinate spaces are
/// involved:
/// - **view** space: relative to the viewport's top-left corner on screen.
/// - **scroll** space: the scaled content plane; `view + content_offset`.
/// - **content** space: the unscaled content box; `scroll / zoom`.
///
/// The content offset is always clamped so that the scaled content covers the
/// viewport. When the scaled content is smaller than the viewport along an
/// axis, the content is centered along that axis instead.
#[derive(Clone, Debug)]
pub struct ZoomViewport {
    view_size: Size,
    content_size: Size,
    zoom: f64,
    offset: Vec2,
    min_zoom: f64,
    max_zoom: f64,
}

impl ZoomViewport {
    /// Default minimum zoom factor.
    pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
    /// Default maximum zoom factor.
    pub const DEFAULT_MAX_ZOOM: f64 = 3.0;

    /// Creates a viewport of `view_size` whose content box matches the view.
    ///
    /// - Initial zoom is `1.0`.
    /// - Zoom is clamped to `[1, 3]` by default.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let mut vp = Self {
            view_size,
            content_size: view_size,
            zoom: 1.0,
            offset: Vec2::ZERO,
            min_zoom: Self::DEFAULT_MIN_ZOOM,
            max_zoom: Self::DEFAULT_MAX_ZOOM,
        };
        vp.clamp_offset();
        vp
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Resizes the viewport. The content box follows the viewport size.
    ///
    /// Zoom is preserved; the offset is re-clamped.
    pub fn set_view_size(&mut self, size: Size) {
        if self.view_size == size {
            return;
        }
        self.view_size = size;
        self.content_size = size;
        self.clamp_offset();
    }

    /// Returns the unscaled content box size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the content size at the current zoom.
    #[must_use]
    pub fn scaled_content_size(&self) -> Size {
        self.content_size * self.zoom
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the minimum zoom factor.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Returns `true` when the zoom sits on the minimum.
    #[must_use]
    pub fn is_at_min_zoom(&self) -> bool {
        self.zoom == self.min_zoom
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`. Non-positive or
    /// non-finite limits are ignored. The current zoom is clamped into the new
    /// range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if !(min_zoom.is_finite() && max_zoom.is_finite()) || min_zoom <= 0.0 || max_zoom <= 0.0 {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        let center = self.view_center();
        self.set_zoom_about_view_point(center, self.zoom);
    }

    /// Returns the content offset: the scroll-space point shown at the
    /// viewport's top-left corner.
    #[must_use]
    pub fn content_offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the content offset, clamping it to the content bounds.
    pub fn set_content_offset(&mut self, offset: Vec2) {
        self.offset = offset;
        self.clamp_offset();
    }

    /// Sets the zoom factor about the viewport center.
    pub fn set_zoom(&mut self, zoom: f64) {
        let center = self.view_center();
        self.set_zoom_about_view_point(center, zoom);
    }

    /// Sets an absolute zoom factor, keeping `anchor_view` fixed on screen as
    /// far as clamping allows.
    pub fn set_zoom_about_view_point(&mut self, anchor_view: Point, zoom: f64) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        let new_zoom = self.snap_zoom(zoom);
        let anchor_content = self.view_to_content_point(anchor_view);
        self.zoom = new_zoom;
        self.offset = anchor_content.to_vec2() * new_zoom - anchor_view.to_vec2();
        self.clamp_offset();
    }

    /// Multiplies the zoom by `factor` about an anchor in view coordinates.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        self.set_zoom_about_view_point(anchor_view, self.zoom * factor);
    }

    /// Moves the content by `delta` in view space, following the finger.
    ///
    /// Dragging right (`delta.x > 0`) reveals content further left, so the
    /// offset decreases.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset -= delta;
        self.clamp_offset();
    }

    /// Computes the zoom and offset that fit the content-space `rect` into the
    /// viewport, without applying them.
    ///
    /// Returns `None` for empty rects or an empty viewport.
    #[must_use]
    pub fn target_for_rect(&self, rect: Rect) -> Option<(f64, Vec2)> {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return None;
        }
        if self.view_size.width <= 0.0 || self.view_size.height <= 0.0 {
            return None;
        }
        let sx = self.view_size.width / rect.width();
        let sy = self.view_size.height / rect.height();
        let zoom = self.snap_zoom(sx.min(sy));
        let offset = rect.center().to_vec2() * zoom - self.view_center().to_vec2();
        Some((zoom, self.clamped_offset(zoom, offset)))
    }

    /// Zooms so that the content-space `rect` fills the viewport.
    ///
    /// Returns `false` (and changes nothing) for empty rects.
    pub fn zoom_to_rect(&mut self, rect: Rect) -> bool {
        match self.target_for_rect(rect) {
            Some((zoom, offset)) => {
                self.zoom = zoom;
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    /// Applies a zoom and offset pair, as produced by [`Self::target_for_rect`]
    /// or an interpolation between two of them.
    pub fn set_zoom_and_offset(&mut self, zoom: f64, offset: Vec2) {
        if !zoom.is_finite() || zoom <= 0.0 {
            return;
        }
        self.zoom = self.snap_zoom(zoom);
        self.offset = offset;
        self.clamp_offset();
    }

    /// Returns the content-space rectangle currently visible.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        let origin = (self.offset / self.zoom).to_point();
        Rect::from_origin_size(origin, self.view_size / self.zoom)
    }

    /// Converts a view-space point into content coordinates.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() + self.offset) / self.zoom).to_point()
    }

    /// Converts a content-space point into view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.zoom - self.offset).to_point()
    }

    /// Converts a scroll-space point into content coordinates.
    #[must_use]
    pub fn scroll_to_content_point(&self, pt: Point) -> Point {
        (pt.to_vec2() / self.zoom).to_point()
    }

    /// Returns the viewport center in view coordinates.
    #[must_use]
    pub fn view_center(&self) -> Point {
        Point::new(self.view_size.width / 2.0, self.view_size.height / 2.0)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomViewportDebugInfo {
        ZoomViewportDebugInfo {
            view_size: self.view_size,
            content_size: self.content_size,
            visible_content_rect: self.visible_content_rect(),
            zoom: self.zoom,
            content_offset: self.offset,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }

    fn snap_zoom(&self, zoom: f64) -> f64 {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (clamped - self.min_zoom).abs() < SNAP_EPSILON {
            self.min_zoom
        } else if (clamped - self.max_zoom).abs() < SNAP_EPSILON {
            self.max_zoom
        } else {
            clamped
        }
    }

    fn clamp_offset(&mut self) {
        self.offset = self.clamped_offset(self.zoom, self.offset);
    }

    fn clamped_offset(&self, zoom: f64, offset: Vec2) -> Vec2 {
        let scaled = self.content_size * zoom;
        Vec2::new(
            clamp_axis(offset.x, scaled.width, self.view_size.width),
            clamp_axis(offset.y, scaled.height, self.view_size.height),
        )
    }
}

/// Clamps one offset axis so the scaled content covers the view, or centers
/// it when it is smaller than the view.
fn clamp_axis(offset: f64, scaled: f64, view: f64) -> f64 {
    if scaled <= view {
        -(view - scaled) / 2.0
    } else {
        offset.clamp(0.0, scaled - view)
    }
}

/// Debug snapshot of a [`ZoomViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomViewportDebugInfo {
    /// Viewport size.
    pub view_size: Size,
    /// Unscaled content box size.
    pub content_size: Size,
    /// Content-space rectangle currently visible.
    pub visible_content_rect: Rect,
    /// Current zoom factor.
    pub zoom: f64,
    /// Current content offset in scroll space.
    pub content_offset: Vec2,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::ZoomViewport;

    fn vp() -> ZoomViewport {
        ZoomViewport::new(Size::new(300.0, 600.0))
    }

    #[test]
    fn identity_state_is_centered() {
        let vp = vp();
        assert_eq!(vp.zoom(), 1.0);
        assert_eq!(vp.content_offset(), Vec2::ZERO);
        assert_eq!(vp.visible_content_rect(), Rect::new(0.0, 0.0, 300.0, 600.0));
    }

    #[test]
    fn view_content_roundtrip_when_zoomed() {
        let mut vp = vp();
        vp.set_zoom(2.0);
        let view_pt = Point::new(10.0, 25.0);
        let content = vp.view_to_content_point(view_pt);
        let back = vp.content_to_view_point(content);
        assert!((back.x - view_pt.x).abs() < 1e-9);
        assert!((back.y - view_pt.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut vp = vp();
        vp.set_zoom(10.0);
        assert_eq!(vp.zoom(), 3.0);
        vp.set_zoom(0.1);
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = vp();
        let anchor = Point::new(150.0, 300.0);
        let before = vp.view_to_content_point(anchor);
        vp.zoom_about_view_point(anchor, 2.0);
        let after = vp.view_to_content_point(anchor);
        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn pan_is_clamped_to_content_bounds() {
        let mut vp = vp();
        vp.set_zoom(2.0);
        vp.pan_by_view(Vec2::new(10_000.0, 10_000.0));
        assert_eq!(vp.content_offset(), Vec2::ZERO);
        vp.pan_by_view(Vec2::new(-10_000.0, -10_000.0));
        assert_eq!(vp.content_offset(), Vec2::new(300.0, 600.0));
    }

    #[test]
    fn pan_at_identity_is_a_no_op() {
        let mut vp = vp();
        vp.pan_by_view(Vec2::new(40.0, -15.0));
        assert_eq!(vp.content_offset(), Vec2::ZERO);
    }

    #[test]
    fn zoom_to_rect_fits_rect() {
        let mut vp = vp();
        let rect = Rect::from_center_size(Point::new(150.0, 300.0), Size::new(100.0, 200.0));
        assert!(vp.zoom_to_rect(rect));
        assert_eq!(vp.zoom(), 3.0);
        let visible = vp.visible_content_rect();
        assert!((visible.center().x - 150.0).abs() < 1e-9);
        assert!((visible.center().y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_to_empty_rect_is_rejected() {
        let mut vp = vp();
        assert!(!vp.zoom_to_rect(Rect::ZERO));
        assert_eq!(vp.zoom(), 1.0);
    }

    #[test]
    fn zoom_to_full_content_snaps_to_identity() {
        let mut vp = ZoomViewport::new(Size::new(375.1, 667.3));
        vp.set_zoom(3.0);
        let frame = vp.scaled_content_size() / vp.max_zoom();
        let rect = Rect::from_center_size(Point::new(10.0, 10.0), frame);
        assert!(vp.zoom_to_rect(rect));
        assert_eq!(vp.zoom(), 1.0);
        assert!(vp.is_at_min_zoom());
        assert_eq!(vp.content_offset(), Vec2::ZERO);
    }

    #[test]
    fn limits_are_normalized_and_validated() {
        let mut vp = vp();
        vp.set_zoom_limits(4.0, 2.0);
        assert_eq!(vp.min_zoom(), 2.0);
        assert_eq!(vp.max_zoom(), 4.0);
        assert_eq!(vp.zoom(), 2.0);

        vp.set_zoom_limits(0.0, 5.0);
        assert_eq!(vp.min_zoom(), 2.0);
        let info = vp.debug_info();
        assert!(info.min_zoom <= info.max_zoom);
    }

    #[test]
    fn resizing_keeps_zoom_and_reclamps() {
        let mut vp = vp();
        vp.set_zoom(3.0);
        vp.pan_by_view(Vec2::new(-10_000.0, 0.0));
        vp.set_view_size(Size::new(200.0, 400.0));
        assert_eq!(vp.zoom(), 3.0);
        assert_eq!(vp.content_offset().x, 400.0);
    }
}
