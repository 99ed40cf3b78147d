// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_gesture::drag::DragUpdate;
use folio_pager::{NodeId, PageIndicator, PagePlacement, Pager, PagerEvent, PagerEvents};
use folio_zoom::{ZoomEvent, ZoomEventKind, ZoomEvents, ZoomView};
use kurbo::{Point, Rect, Size, Vec2};
use smallvec::SmallVec;

use crate::assets::{AssetLoader, DEFAULT_ASSETS};
use crate::input::{DragOwner, InputState, PointerEvent};
use crate::{Appearance, GalleryConfig, Image, ZoomPage};

/// Something that happened inside the gallery, after the gallery reacted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GalleryEvent {
    /// A page's zoom mode changed.
    Zoom {
        /// Index of the page.
        page: usize,
        /// The notification.
        event: ZoomEvent,
    },
    /// The pager finished a transition or a page appeared or disappeared.
    Pager(PagerEvent),
}

/// Events returned by gallery operations, in the order they happened.
pub type GalleryEvents = SmallVec<[GalleryEvent; 8]>;

/// Everything a host needs to draw the gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryFrame {
    /// Index of the displayed page.
    pub current_index: Option<usize>,
    /// Horizontal offset of the displayed page from its resting position.
    pub swipe_offset: f64,
    /// Every page on screen with its horizontal offset.
    pub visible_pages: SmallVec<[PagePlacement; 2]>,
    /// Zoom scale of the displayed page.
    pub scale: f64,
    /// Scroll offset of the displayed page's zoomed content.
    pub content_offset: Vec2,
    /// Where the displayed page's image is drawn, in view coordinates.
    pub image_rect: Option<Rect>,
    /// The page indicator.
    pub indicator: PageIndicator,
    /// Colors and chrome styling.
    pub appearance: Appearance,
}

/// A swipeable gallery of zoomable images.
///
/// The gallery owns a [`Pager`] of [`ZoomPage`]s and keeps the two in step:
/// while a page is zoomed the pager cannot be swiped and its indicator is
/// hidden; once the page is back at scale 1 both return. A page that leaves
/// the screen is reset to scale 1.
#[derive(Clone, Debug)]
pub struct Gallery {
    config: GalleryConfig,
    appearance: Appearance,
    viewport: Size,
    pager: Pager<ZoomPage>,
    input: InputState,
    drag_owner: Option<DragOwner>,
}

impl Gallery {
    /// Creates a gallery with one page per image and starts showing the
    /// first page.
    ///
    /// `None` entries become blank pages.
    #[must_use]
    pub fn new(config: GalleryConfig, viewport: Size, images: Vec<Option<Image>>) -> Self {
        let mut pager = Pager::new(viewport.width);
        pager.set_animation_duration(config.page_animation_ms);
        pager.set_swipe_threshold(config.swipe_threshold);
        let pages = (0..)
            .zip(images)
            .map(|(id, image)| {
                let mut page = ZoomPage::new(NodeId(id), viewport, image);
                page.zoom.set_max_zoom(config.max_zoom);
                page.zoom.set_animation_duration(config.zoom_animation_ms);
                page
            })
            .collect();
        pager.set_pages(pages);

        let mut gallery = Self {
            input: InputState::new(&config),
            config,
            appearance: Appearance::default(),
            viewport,
            pager,
            drag_owner: None,
        };
        let started = gallery.pager.set_start_page(0);
        let mut events = GalleryEvents::new();
        gallery.apply_pager_events(started, &mut events);
        tracing::debug!(pages = gallery.pager.len(), "gallery created");
        gallery
    }

    /// Creates a gallery from named assets.
    ///
    /// Assets that fail to load become blank pages and are logged.
    #[must_use]
    pub fn from_assets(
        config: GalleryConfig,
        viewport: Size,
        loader: &impl AssetLoader,
        names: &[&str],
    ) -> Self {
        let images = names
            .iter()
            .map(|name| match loader.load(name) {
                Ok(image) => Some(image),
                Err(error) => {
                    tracing::warn!(name, %error, "asset unavailable, showing a blank page");
                    None
                }
            })
            .collect();
        Self::new(config, viewport, images)
    }

    /// Creates a gallery from [`DEFAULT_ASSETS`].
    #[must_use]
    pub fn with_default_assets(
        config: GalleryConfig,
        viewport: Size,
        loader: &impl AssetLoader,
    ) -> Self {
        Self::from_assets(config, viewport, loader, &DEFAULT_ASSETS)
    }

    /// The configuration the gallery was built with.
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Colors and chrome styling.
    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Replaces the colors and chrome styling.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// The underlying pager.
    #[must_use]
    pub fn pager(&self) -> &Pager<ZoomPage> {
        &self.pager
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pager.len()
    }

    /// Returns `true` if the gallery has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pager.is_empty()
    }

    /// Index of the displayed page.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.pager.current_index()
    }

    /// The displayed page.
    #[must_use]
    pub fn current_page(&self) -> Option<&ZoomPage> {
        self.pager.page(self.pager.current_index()?)
    }

    /// The page at `index`.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&ZoomPage> {
        self.pager.page(index)
    }

    /// Size of the area the gallery fills.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Resizes every page and the pager.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.pager.set_page_width(size.width);
        for page in self.pager.pages_mut() {
            page.zoom.set_viewport_size(size);
        }
    }

    /// Returns `true` while a page transition or a zoom animation runs.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pager.is_transitioning() || self.pager.pages().iter().any(|p| p.zoom.is_animating())
    }

    /// Navigates to page `index` without user input.
    pub fn show_page(&mut self, index: usize) -> GalleryEvents {
        let events = self.pager.set_start_page(index);
        let mut out = GalleryEvents::new();
        self.apply_pager_events(events, &mut out);
        out
    }

    /// Handles a tap on the page indicator asking for page `index`.
    pub fn select_indicator(&mut self, index: usize) -> GalleryEvents {
        let events = self.pager.select_indicator(index);
        let mut out = GalleryEvents::new();
        self.apply_pager_events(events, &mut out);
        out
    }

    fn zoom_gestures_blocked(&self) -> bool {
        self.pager.is_transitioning() || self.pager.is_swiping()
    }

    /// Handles a recognized double-tap at `location` (view coordinates).
    ///
    /// Ignored while the pages are moving.
    pub fn double_tap(&mut self, location: Point) -> GalleryEvents {
        if self.zoom_gestures_blocked() {
            tracing::trace!("double-tap ignored during a page transition");
            return GalleryEvents::new();
        }
        self.with_current_zoom(|zoom| zoom.double_tap(location))
    }

    /// Starts a pinch on the displayed page around `center`.
    ///
    /// Ignored while the pages are moving.
    pub fn pinch_begin(&mut self, center: Point) -> GalleryEvents {
        if self.zoom_gestures_blocked() {
            tracing::trace!("pinch ignored during a page transition");
            return GalleryEvents::new();
        }
        self.cancel_drag();
        self.with_current_zoom(|zoom| zoom.pinch_begin(center))
    }

    /// Updates the pinch with the cumulative `scale` since it began.
    pub fn pinch_update(&mut self, scale: f64, center: Point) -> GalleryEvents {
        self.with_current_zoom(|zoom| zoom.pinch_update(scale, center))
    }

    /// Ends the pinch.
    pub fn pinch_end(&mut self) -> GalleryEvents {
        self.with_current_zoom(ZoomView::pinch_end)
    }

    /// Starts a recognized drag.
    ///
    /// The drag swipes the pager when swiping is allowed and pans the
    /// displayed page otherwise. That choice holds until [`drag_end`].
    ///
    /// [`drag_end`]: Self::drag_end
    pub fn drag_begin(&mut self) {
        let pinching = self.current_page().is_some_and(|page| page.zoom.is_pinching());
        self.drag_owner = if pinching || self.pager.current_index().is_none() {
            None
        } else if self.pager.is_transitioning_enabled() {
            self.pager.swipe_begin().then_some(DragOwner::Pager)
        } else {
            Some(DragOwner::Zoom)
        };
        tracing::trace!(owner = ?self.drag_owner, "drag began");
    }

    /// Feeds drag movement: `delta` since the last update and `total` since
    /// the drag started.
    pub fn drag_update(&mut self, delta: Vec2, total: Vec2) {
        match self.drag_owner {
            Some(DragOwner::Pager) => self.pager.swipe_update(total.x),
            Some(DragOwner::Zoom) => {
                if let Some(index) = self.pager.current_index()
                    && let Some(page) = self.pager.page_mut(index)
                {
                    page.zoom.pan_by(delta);
                }
            }
            None => {}
        }
    }

    /// Ends the drag after a total movement of `total`.
    pub fn drag_end(&mut self, total: Vec2) -> GalleryEvents {
        let mut out = GalleryEvents::new();
        if self.drag_owner.take() == Some(DragOwner::Pager) {
            self.pager.swipe_update(total.x);
            let events = self.pager.swipe_end();
            self.apply_pager_events(events, &mut out);
        }
        out
    }

    /// Drops the drag without completing it; a swipe slides back.
    fn cancel_drag(&mut self) {
        if self.drag_owner.take() == Some(DragOwner::Pager) {
            self.pager.swipe_update(0.0);
            // A swipe with no travel settles without a transition.
            self.pager.swipe_end();
        }
    }

    /// Feeds a pointer press.
    ///
    /// A first pointer may become a drag or a tap; a second one turns the
    /// interaction into a pinch.
    pub fn pointer_down(&mut self, event: PointerEvent) -> GalleryEvents {
        let PointerEvent {
            pointer,
            position,
            time_ms,
        } = event;
        match self.input.press(pointer, position) {
            1 => {
                self.input.drag.on_down(pointer, position);
                self.input.taps.on_down(pointer, position, time_ms);
                GalleryEvents::new()
            }
            2 => {
                self.cancel_drag();
                self.input.drag.cancel();
                self.input.taps.cancel();
                match self.input.pair() {
                    Some((a, b)) => {
                        let center = self.input.pinch.start(a, b);
                        self.pinch_begin(center)
                    }
                    None => GalleryEvents::new(),
                }
            }
            _ => GalleryEvents::new(),
        }
    }

    /// Feeds pointer movement.
    pub fn pointer_move(&mut self, event: PointerEvent) -> GalleryEvents {
        let PointerEvent {
            pointer, position, ..
        } = event;
        self.input.moved(pointer, position);
        if self.input.pinch.is_active() {
            return match self.input.pair().and_then(|(a, b)| self.input.pinch.update(a, b)) {
                Some(frame) => self.pinch_update(frame.scale, frame.center),
                None => GalleryEvents::new(),
            };
        }
        self.input.taps.on_move(pointer, position);
        match self.input.drag.on_move(pointer, position) {
            Some(DragUpdate::Began { delta, .. }) => {
                self.drag_begin();
                self.drag_update(delta, delta);
            }
            Some(DragUpdate::Moved { delta, total }) => self.drag_update(delta, total),
            None => {}
        }
        GalleryEvents::new()
    }

    /// Feeds a pointer release.
    pub fn pointer_up(&mut self, event: PointerEvent) -> GalleryEvents {
        let PointerEvent {
            pointer,
            position,
            time_ms,
        } = event;
        let remaining = self.input.release(pointer);
        if self.input.pinch.is_active() {
            if remaining < 2 {
                self.input.pinch.end();
                return self.pinch_end();
            }
            return GalleryEvents::new();
        }
        let mut out = GalleryEvents::new();
        if let Some(drag) = self.input.drag.on_up(pointer, position) {
            // A drag is never part of a tap sequence.
            self.input.taps.cancel();
            out.extend(self.drag_end(drag.total));
        }
        if let Some(tap) = self.input.taps.on_up(pointer, position, time_ms) {
            out.extend(self.double_tap(tap.location));
        }
        out
    }

    /// Abandons every gesture in progress, for example when the host loses
    /// pointer capture.
    pub fn pointer_cancel(&mut self) -> GalleryEvents {
        let pinching = self.input.pinch.is_active();
        self.input.reset();
        self.cancel_drag();
        if pinching {
            return self.pinch_end();
        }
        GalleryEvents::new()
    }

    /// Advances page transitions and zoom animations by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u64) -> GalleryEvents {
        let mut out = GalleryEvents::new();
        let events = self.pager.advance(dt_ms);
        self.apply_pager_events(events, &mut out);
        for index in 0..self.pager.len() {
            let Some(page) = self.pager.page_mut(index) else {
                continue;
            };
            if !page.zoom.is_animating() {
                continue;
            }
            let events = page.zoom.advance(dt_ms);
            self.apply_zoom_events(index, events, &mut out);
        }
        out
    }

    /// Snapshot of what to draw.
    #[must_use]
    pub fn frame(&self) -> GalleryFrame {
        let page = self.current_page();
        GalleryFrame {
            current_index: self.pager.current_index(),
            swipe_offset: self.pager.swipe_offset(),
            visible_pages: self.pager.visible_pages(),
            scale: page.map_or(1.0, |page| page.zoom.scale()),
            content_offset: page.map_or(Vec2::ZERO, |page| page.zoom.content_offset()),
            image_rect: page.and_then(|page| page.zoom.image_view_rect()),
            indicator: *self.pager.indicator(),
            appearance: self.appearance,
        }
    }

    fn with_current_zoom(
        &mut self,
        f: impl FnOnce(&mut ZoomView<Image>) -> ZoomEvents,
    ) -> GalleryEvents {
        let mut out = GalleryEvents::new();
        let Some(index) = self.pager.current_index() else {
            return out;
        };
        let Some(page) = self.pager.page_mut(index) else {
            return out;
        };
        let events = f(&mut page.zoom);
        self.apply_zoom_events(index, events, &mut out);
        out
    }

    /// Mirrors a page's zoom mode onto the pager chrome.
    fn apply_zoom_events(&mut self, page: usize, events: ZoomEvents, out: &mut GalleryEvents) {
        for event in events {
            match event.kind {
                ZoomEventKind::WillZoomIn => self.pager.disable_transitioning(),
                ZoomEventKind::DidZoomIn => self.pager.hide_page_control(),
                ZoomEventKind::DidZoomOut => {
                    self.pager.enable_transitioning();
                    self.pager.show_page_control();
                }
            }
            out.push(GalleryEvent::Zoom { page, event });
        }
    }

    /// Resets pages that left the screen.
    fn apply_pager_events(&mut self, events: PagerEvents, out: &mut GalleryEvents) {
        for event in events {
            out.push(GalleryEvent::Pager(event));
            if let PagerEvent::PageDidDisappear(index) = event
                && let Some(page) = self.pager.page_mut(index)
            {
                let reset = page.zoom.did_disappear();
                self.apply_zoom_events(index, reset, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(300.0, 600.0);

    fn gallery(n: usize) -> Gallery {
        let config = GalleryConfig {
            zoom_animation_ms: 0,
            page_animation_ms: 0,
            ..GalleryConfig::default()
        };
        let images = (0..n)
            .map(|_| Image::solid(4, 2, [0, 0, 0, 255]).ok())
            .collect();
        Gallery::new(config, VIEW, images)
    }

    #[test]
    fn zero_duration_startup_is_settled() {
        let gallery = gallery(3);
        assert!(!gallery.is_animating());
        assert_eq!(gallery.current_index(), Some(0));
    }

    #[test]
    fn pan_drag_is_owned_by_the_zoomed_page() {
        let mut gallery = gallery(3);
        gallery.double_tap(Point::new(150.0, 300.0));
        assert!(!gallery.pager().is_transitioning_enabled());
        let before = gallery.frame().content_offset;

        gallery.drag_begin();
        assert_eq!(gallery.drag_owner, Some(DragOwner::Zoom));
        gallery.drag_update(Vec2::new(-40.0, 0.0), Vec2::new(-40.0, 0.0));
        assert!(gallery.drag_end(Vec2::new(-40.0, 0.0)).is_empty());

        assert_eq!(gallery.current_index(), Some(0));
        assert_eq!(gallery.frame().content_offset, before + Vec2::new(40.0, 0.0));
    }

    #[test]
    fn swipe_drag_is_owned_by_the_pager() {
        let mut gallery = gallery(3);
        gallery.drag_begin();
        assert_eq!(gallery.drag_owner, Some(DragOwner::Pager));
        gallery.drag_update(Vec2::new(-150.0, 0.0), Vec2::new(-150.0, 0.0));
        assert_eq!(gallery.frame().swipe_offset, -150.0);
        gallery.drag_end(Vec2::new(-150.0, 0.0));
        assert_eq!(gallery.current_index(), Some(1));
    }

    #[test]
    fn pinch_waits_for_the_swipe_to_end() {
        let mut gallery = gallery(3);
        gallery.drag_begin();
        gallery.drag_update(Vec2::new(-20.0, 0.0), Vec2::new(-20.0, 0.0));
        // Zoom gestures wait until the swipe is released.
        assert!(gallery.pinch_begin(Point::new(150.0, 300.0)).is_empty());

        gallery.drag_end(Vec2::new(-20.0, 0.0));
        gallery.advance(0);
        let events = gallery.pinch_begin(Point::new(150.0, 300.0));
        assert_eq!(events.len(), 1);
        assert!(!gallery.pager().is_transitioning_enabled());
    }

    #[test]
    fn empty_gallery_ignores_everything() {
        let mut gallery = gallery(0);
        assert!(gallery.is_empty());
        assert!(gallery.double_tap(Point::ZERO).is_empty());
        assert!(gallery.select_indicator(0).is_empty());
        gallery.drag_begin();
        assert_eq!(gallery.drag_owner, None);
        let frame = gallery.frame();
        assert_eq!(frame.current_index, None);
        assert_eq!(frame.scale, 1.0);
        assert!(frame.indicator.is_hidden());
    }

    #[test]
    fn resizing_reaches_every_page() {
        let mut gallery = gallery(2);
        gallery.set_viewport_size(Size::new(500.0, 400.0));
        assert_eq!(gallery.pager().page_width(), 500.0);
        for index in 0..2 {
            let page = gallery.page(index).unwrap();
            assert_eq!(page.zoom.viewport().view_size(), Size::new(500.0, 400.0));
        }
    }
}
