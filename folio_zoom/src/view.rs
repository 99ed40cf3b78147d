// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::animation::ZoomAnimation;
use crate::geometry::{aspect_fit, double_tap_zoom_rect, identity_zoom_rect};
use crate::viewport::ZoomViewport;

/// Default duration of an animated double-tap zoom, in milliseconds.
pub const DEFAULT_ZOOM_ANIMATION_MS: u64 = 250;

/// Content that can be displayed in a [`ZoomView`].
pub trait ZoomContent {
    /// Natural size of the content, used for aspect-fit placement.
    fn intrinsic_size(&self) -> Size;
}

impl ZoomContent for Size {
    fn intrinsic_size(&self) -> Size {
        *self
    }
}

/// Kind of a zoom mode notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomEventKind {
    /// A zoom interaction (pinch or animated zoom) is starting.
    WillZoomIn,
    /// The scale changed during an interaction and is above the minimum.
    DidZoomIn,
    /// The scale changed during an interaction and is back at the minimum.
    DidZoomOut,
}

/// Mode notification emitted by a [`ZoomView`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomEvent {
    /// What happened.
    pub kind: ZoomEventKind,
    /// The zoom scale right after the event.
    pub scale: f64,
}

/// Events produced by a single [`ZoomView`] call, in emission order.
pub type ZoomEvents = SmallVec<[ZoomEvent; 4]>;

/// Steady or transient zoom mode of a [`ZoomView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Scale is at the minimum and no interaction is running.
    #[default]
    Idle,
    /// A pinch or zoom animation is in progress.
    Zooming,
    /// Scale is above the minimum and no interaction is running.
    Zoomed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Interaction {
    Idle,
    Pinch { start_zoom: f64 },
    Animating(ZoomAnimation),
}

/// A single zoomable image page.
///
/// `ZoomView` owns an optional image and a [`ZoomViewport`]. Every operation
/// that can change the zoom mode returns the [`ZoomEvents`] it produced, so
/// the owner can react without the view holding a reference back to it.
///
/// Ordering guarantees:
/// - Each interaction starts with exactly one [`ZoomEventKind::WillZoomIn`].
/// - Every scale change within that interaction is reported as
///   [`ZoomEventKind::DidZoomIn`] or [`ZoomEventKind::DidZoomOut`].
/// - A `DidZoomOut` is only ever emitted with the scale at the minimum.
/// - An interaction that ends at the minimum always reports `DidZoomOut`
///   last, even if its scale never changed.
#[derive(Clone, Debug)]
pub struct ZoomView<I> {
    image: Option<I>,
    viewport: ZoomViewport,
    mode: ZoomMode,
    interaction: Interaction,
    last_event: Option<ZoomEventKind>,
    animation_ms: u64,
}

impl<I> ZoomView<I> {
    /// Creates an empty view over a viewport of `view_size`.
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        Self {
            image: None,
            viewport: ZoomViewport::new(view_size),
            mode: ZoomMode::Idle,
            interaction: Interaction::Idle,
            last_event: None,
            animation_ms: DEFAULT_ZOOM_ANIMATION_MS,
        }
    }

    /// Replaces the displayed image. `None` shows a blank page.
    ///
    /// Zoom scale and offset are left untouched.
    pub fn set_image(&mut self, image: Option<I>) {
        self.image = image;
    }

    /// Returns the displayed image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        self.image.as_ref()
    }

    /// Sets the maximum zoom factor. The minimum stays at `1.0`.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        self.viewport
            .set_zoom_limits(ZoomViewport::DEFAULT_MIN_ZOOM, max_zoom);
    }

    /// Sets the duration used for animated zooms. `0` applies zooms at once.
    pub fn set_animation_duration(&mut self, duration_ms: u64) {
        self.animation_ms = duration_ms;
    }

    /// Resizes the viewport.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport.set_view_size(size);
    }

    /// Returns the underlying viewport.
    #[must_use]
    pub fn viewport(&self) -> &ZoomViewport {
        &self.viewport
    }

    /// Returns the current zoom scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Returns the current content offset.
    #[must_use]
    pub fn content_offset(&self) -> Vec2 {
        self.viewport.content_offset()
    }

    /// Returns the current zoom mode.
    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    /// Returns `true` while a zoom animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.interaction, Interaction::Animating(_))
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_pinching(&self) -> bool {
        matches!(self.interaction, Interaction::Pinch { .. })
    }

    /// Returns the content-space rectangle currently visible.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.viewport.visible_content_rect()
    }

    /// Starts a pinch anchored at `anchor` (view coordinates).
    ///
    /// A running zoom animation is abandoned at its current scale.
    pub fn pinch_begin(&mut self, anchor: Point) -> ZoomEvents {
        let mut events = ZoomEvents::new();
        self.interaction = Interaction::Pinch {
            start_zoom: self.viewport.zoom(),
        };
        self.begin_interaction(&mut events);
        tracing::trace!(x = anchor.x, y = anchor.y, "pinch began");
        events
    }

    /// Updates a pinch with the cumulative `factor` since [`Self::pinch_begin`].
    ///
    /// The scale is clamped to the viewport's limits; `anchor` stays fixed on
    /// screen where clamping allows. Ignored when no pinch is running.
    pub fn pinch_update(&mut self, factor: f64, anchor: Point) -> ZoomEvents {
        let mut events = ZoomEvents::new();
        let Interaction::Pinch { start_zoom } = self.interaction else {
            return events;
        };
        let old = self.viewport.zoom();
        self.viewport
            .set_zoom_about_view_point(anchor, start_zoom * factor);
        self.push_scale_change(old, &mut events);
        events
    }

    /// Ends a pinch; the current scale becomes the steady state.
    ///
    /// A pinch that ends at the minimum scale without having reported it
    /// emits a closing `DidZoomOut`.
    pub fn pinch_end(&mut self) -> ZoomEvents {
        let mut events = ZoomEvents::new();
        if self.is_pinching() {
            self.interaction = Interaction::Idle;
            self.end_interaction(&mut events);
        }
        events
    }

    /// Handles a double-tap at `location` (view coordinates).
    ///
    /// Starts an animated zoom toward the double-tap target (see
    /// [`double_tap_zoom_rect`]). Ignored while another interaction is
    /// running, and when the target is degenerate or already reached.
    pub fn double_tap(&mut self, location: Point) -> ZoomEvents {
        let mut events = ZoomEvents::new();
        if self.interaction != Interaction::Idle {
            tracing::trace!("double-tap ignored during an interaction");
            return events;
        }
        let location = self.viewport.view_to_content_point(location);
        let rect = double_tap_zoom_rect(&self.viewport, location);
        let Some(target) = self.viewport.target_for_rect(rect) else {
            return events;
        };
        let from = (self.viewport.zoom(), self.viewport.content_offset());
        if target == from {
            return events;
        }
        self.begin_interaction(&mut events);
        self.interaction =
            Interaction::Animating(ZoomAnimation::new(from, target, self.animation_ms));
        if self.animation_ms == 0 {
            events.extend(self.advance(0));
        }
        events
    }

    /// Advances a running zoom animation by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u64) -> ZoomEvents {
        let mut events = ZoomEvents::new();
        let Interaction::Animating(animation) = &mut self.interaction else {
            return events;
        };
        let frame = animation.advance(dt_ms);
        let old = self.viewport.zoom();
        self.viewport.set_zoom_and_offset(frame.zoom, frame.offset);
        self.push_scale_change(old, &mut events);
        if frame.finished {
            self.interaction = Interaction::Idle;
            self.end_interaction(&mut events);
        }
        events
    }

    /// Pans the content by `delta` (view space, following the finger).
    ///
    /// Panning is clamped to the content bounds and never changes the mode.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.viewport.pan_by_view(delta);
    }

    /// Resets the view after it left the screen.
    ///
    /// If the scale is above the minimum, the view zooms to the identity
    /// rectangle without animation. The reset is its own interaction: it
    /// emits `WillZoomIn` followed by `DidZoomOut`.
    pub fn did_disappear(&mut self) -> ZoomEvents {
        let mut events = ZoomEvents::new();
        self.interaction = Interaction::Idle;
        if self.viewport.is_at_min_zoom() {
            self.end_interaction(&mut events);
            return events;
        }
        self.begin_interaction(&mut events);
        let old = self.viewport.zoom();
        let rect = identity_zoom_rect(&self.viewport);
        if !self.viewport.zoom_to_rect(rect) {
            self.viewport.set_zoom(ZoomViewport::DEFAULT_MIN_ZOOM);
        }
        self.push_scale_change(old, &mut events);
        self.end_interaction(&mut events);
        tracing::debug!(scale = self.viewport.zoom(), "zoom reset after disappearing");
        events
    }

    fn begin_interaction(&mut self, events: &mut ZoomEvents) {
        self.mode = ZoomMode::Zooming;
        self.last_event = Some(ZoomEventKind::WillZoomIn);
        events.push(ZoomEvent {
            kind: ZoomEventKind::WillZoomIn,
            scale: self.viewport.zoom(),
        });
    }

    fn push_scale_change(&mut self, old: f64, events: &mut ZoomEvents) {
        let scale = self.viewport.zoom();
        if scale == old {
            return;
        }
        let kind = if self.viewport.is_at_min_zoom() {
            ZoomEventKind::DidZoomOut
        } else {
            ZoomEventKind::DidZoomIn
        };
        self.last_event = Some(kind);
        events.push(ZoomEvent { kind, scale });
    }

    /// Closes the interaction window; every interaction that ends at the
    /// minimum scale has reported `DidZoomOut` by the time this returns.
    fn end_interaction(&mut self, events: &mut ZoomEvents) {
        if self.mode == ZoomMode::Zooming
            && self.viewport.is_at_min_zoom()
            && self.last_event != Some(ZoomEventKind::DidZoomOut)
        {
            self.last_event = Some(ZoomEventKind::DidZoomOut);
            events.push(ZoomEvent {
                kind: ZoomEventKind::DidZoomOut,
                scale: self.viewport.zoom(),
            });
        }
        self.settle();
    }

    fn settle(&mut self) {
        self.mode = if self.viewport.is_at_min_zoom() {
            ZoomMode::Idle
        } else {
            ZoomMode::Zoomed
        };
    }
}

impl<I: ZoomContent> ZoomView<I> {
    /// Returns where the image sits in content space (aspect-fit), if any.
    #[must_use]
    pub fn image_content_rect(&self) -> Option<Rect> {
        let image = self.image.as_ref()?;
        let bounds = Rect::from_origin_size(Point::ZERO, self.viewport.content_size());
        Some(aspect_fit(image.intrinsic_size(), bounds))
    }

    /// Returns where the image is drawn in view space at the current zoom.
    #[must_use]
    pub fn image_view_rect(&self) -> Option<Rect> {
        let rect = self.image_content_rect()?;
        let p0 = self.viewport.content_to_view_point(rect.origin());
        let p1 = self
            .viewport
            .content_to_view_point(Point::new(rect.x1, rect.y1));
        Some(Rect::from_points(p0, p1))
    }
}
