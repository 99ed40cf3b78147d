// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::indicator::PageIndicator;
use crate::transition::{NavigationDirection, Transition, TransitionKind};

/// Default duration of a full page transition, in milliseconds.
pub const DEFAULT_PAGE_ANIMATION_MS: u64 = 300;

/// Default fraction of the page width a swipe must travel to complete.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 0.5;

/// Opaque handle to the host's renderable node for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// A page the [`Pager`] can display.
///
/// The pager only needs to know how to reach the page's node; everything
/// else about the page belongs to its owner.
pub trait Page {
    /// The renderable node backing this page.
    fn node(&self) -> NodeId;
}

/// Lifecycle notifications produced by the [`Pager`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerEvent {
    /// A transition finished animating.
    ///
    /// `completed` is `false` when a swipe was released short of the
    /// threshold and snapped back. `previous` is the page that was displayed
    /// before the transition.
    DidFinishAnimating {
        /// Whether the transition landed on its target page.
        completed: bool,
        /// The page displayed before the transition, if any.
        previous: Option<usize>,
    },
    /// The page at this index left the screen.
    PageDidDisappear(usize),
    /// The page at this index is now fully on screen.
    PageDidAppear(usize),
}

/// Events returned by pager operations, in the order they happened.
pub type PagerEvents = SmallVec<[PagerEvent; 3]>;

/// A page on screen and its horizontal offset from the resting position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PagePlacement {
    /// Index of the page.
    pub index: usize,
    /// Horizontal offset in pixels; negative is toward the leading edge.
    pub offset: f64,
}

/// Horizontal page carousel with a page indicator.
///
/// See the [crate docs](crate) for an overview.
#[derive(Clone, Debug)]
pub struct Pager<P> {
    pages: Vec<P>,
    displayed: Option<usize>,
    indicator: PageIndicator,
    transitions_requested: bool,
    indicator_requested: bool,
    page_width: f64,
    swipe_threshold: f64,
    animation_ms: u64,
    /// Horizontal translation of an active swipe.
    swipe: Option<f64>,
    transition: Option<Transition>,
}

impl<P> Default for Pager<P> {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<P> Pager<P> {
    /// Creates an empty pager whose pages are `page_width` pixels wide.
    #[must_use]
    pub fn new(page_width: f64) -> Self {
        let mut indicator = PageIndicator::default();
        indicator.set_hidden(true);
        Self {
            pages: Vec::new(),
            displayed: None,
            indicator,
            transitions_requested: true,
            indicator_requested: true,
            page_width: page_width.max(0.0),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            animation_ms: DEFAULT_PAGE_ANIMATION_MS,
            swipe: None,
            transition: None,
        }
    }

    /// Replaces the pages.
    ///
    /// The old pages are dropped and nothing is displayed until
    /// [`set_start_page`](Self::set_start_page). With more than one page,
    /// swiping is enabled and the indicator gets one dot per page; with one
    /// page or none, both are off.
    pub fn set_pages(&mut self, pages: Vec<P>) {
        self.pages = pages;
        self.displayed = None;
        self.swipe = None;
        self.transition = None;
        self.transitions_requested = true;
        self.indicator.set_number_of_pages(self.pages.len());
        self.indicator.set_current_page(0);
        self.refresh_indicator();
        tracing::debug!(
            pages = self.pages.len(),
            transitions = self.is_transitioning_enabled(),
            "pages set"
        );
    }

    /// Displays page `index` with a forward transition and moves the
    /// indicator to it.
    ///
    /// Out-of-range indices are ignored. A transition already in flight is
    /// completed first; its events lead the returned list.
    pub fn set_start_page(&mut self, index: usize) -> PagerEvents {
        if index >= self.pages.len() {
            tracing::debug!(index, pages = self.pages.len(), "start page out of range");
            return PagerEvents::new();
        }
        self.navigate(index, NavigationDirection::Forward)
    }

    /// Handles a tap on the indicator asking for page `index`.
    ///
    /// Ignored while the indicator is hidden, or when `index` is out of range
    /// or already current. Otherwise navigates forward if `index` lies after
    /// the current page, in reverse if before. Indicator navigation works
    /// even while swiping is disabled.
    pub fn select_indicator(&mut self, index: usize) -> PagerEvents {
        if self.indicator.is_hidden() || index >= self.pages.len() {
            tracing::debug!(index, "indicator selection ignored");
            return PagerEvents::new();
        }
        let Some(current) = self.current_index() else {
            return self.navigate(index, NavigationDirection::Forward);
        };
        if index == current {
            return PagerEvents::new();
        }
        let direction = if index > current {
            NavigationDirection::Forward
        } else {
            NavigationDirection::Reverse
        };
        self.navigate(index, direction)
    }

    fn navigate(&mut self, to: usize, direction: NavigationDirection) -> PagerEvents {
        let mut events = self.finish_transition();
        self.swipe = None;
        let from = self.displayed;
        self.displayed = Some(to);
        self.indicator.set_current_page(to);
        self.transition = Some(Transition::new(
            from,
            to,
            direction,
            TransitionKind::Programmatic,
            (0.0, 1.0),
            self.animation_ms,
        ));
        tracing::debug!(?from, to, ?direction, "page transition started");
        events.extend(self.settle());
        events
    }

    /// Allows swipe navigation, if there is more than one page.
    pub fn enable_transitioning(&mut self) {
        if self.transitions_requested {
            return;
        }
        self.transitions_requested = true;
        tracing::debug!(
            effective = self.is_transitioning_enabled(),
            "transitions enabled"
        );
    }

    /// Forbids swipe navigation.
    ///
    /// A swipe that is still under the finger snaps back.
    pub fn disable_transitioning(&mut self) {
        if !self.transitions_requested {
            return;
        }
        self.transitions_requested = false;
        self.cancel_swipe();
        tracing::debug!("transitions disabled");
    }

    /// Returns `true` if a swipe would currently be accepted.
    #[must_use]
    pub fn is_transitioning_enabled(&self) -> bool {
        self.transitions_requested && self.pages.len() > 1
    }

    /// Shows the indicator, if there is more than one page.
    pub fn show_page_control(&mut self) {
        if self.indicator_requested {
            return;
        }
        self.indicator_requested = true;
        self.refresh_indicator();
        tracing::debug!(hidden = self.indicator.is_hidden(), "page control shown");
    }

    /// Hides the indicator.
    pub fn hide_page_control(&mut self) {
        if !self.indicator_requested {
            return;
        }
        self.indicator_requested = false;
        self.refresh_indicator();
        tracing::debug!("page control hidden");
    }

    fn refresh_indicator(&mut self) {
        let visible = self.indicator_requested && self.pages.len() > 1;
        self.indicator.set_hidden(!visible);
    }

    /// Starts tracking a horizontal swipe.
    ///
    /// Returns `false`, and ignores the rest of the swipe, when swiping is
    /// disabled, a transition is in flight or nothing is displayed.
    pub fn swipe_begin(&mut self) -> bool {
        if !self.is_transitioning_enabled() || self.transition.is_some() || self.displayed.is_none()
        {
            tracing::trace!("swipe ignored");
            return false;
        }
        self.swipe = Some(0.0);
        true
    }

    /// Updates the active swipe with the finger's total horizontal travel.
    ///
    /// Negative values move toward the next page.
    pub fn swipe_update(&mut self, dx: f64) {
        if let Some(swipe) = &mut self.swipe {
            *swipe = dx;
        }
    }

    /// Releases the active swipe.
    ///
    /// Past the threshold toward an existing neighbor the swipe animates on
    /// to that neighbor; short of it, it animates back. Only a swipe that
    /// lands exactly on a page settles immediately and returns events; the
    /// rest arrive from [`advance`](Self::advance).
    pub fn swipe_end(&mut self) -> PagerEvents {
        let Some(dx) = self.swipe.take() else {
            return PagerEvents::new();
        };
        let Some((direction, to, progress)) = self.swipe_target(dx) else {
            return PagerEvents::new();
        };
        let end = if progress >= self.swipe_threshold {
            1.0
        } else {
            0.0
        };
        self.transition = Some(Transition::new(
            self.displayed,
            to,
            direction,
            TransitionKind::Swipe,
            (progress, end),
            self.animation_ms,
        ));
        tracing::debug!(to, progress, completing = end > 0.0, "swipe released");
        self.settle()
    }

    fn cancel_swipe(&mut self) {
        let Some(dx) = self.swipe.take() else {
            return;
        };
        if let Some((direction, to, progress)) = self.swipe_target(dx) {
            self.transition = Some(Transition::new(
                self.displayed,
                to,
                direction,
                TransitionKind::Swipe,
                (progress, 0.0),
                self.animation_ms,
            ));
        }
    }

    /// Direction, neighbor and progress for a swipe of `dx` pixels.
    fn swipe_target(&self, dx: f64) -> Option<(NavigationDirection, usize, f64)> {
        let current = self.displayed?;
        let (direction, to) = if dx < 0.0 {
            (NavigationDirection::Forward, self.page_after(current)?)
        } else {
            (NavigationDirection::Reverse, self.page_before(current)?)
        };
        if self.page_width <= 0.0 {
            return None;
        }
        let progress = (dx.abs() / self.page_width).min(1.0);
        (progress > 0.0).then_some((direction, to, progress))
    }

    /// Advances the transition in flight by `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: u64) -> PagerEvents {
        if let Some(transition) = &mut self.transition {
            transition.advance(dt_ms);
            tracing::trace!(progress = transition.progress(), "page transition step");
        }
        self.settle()
    }

    fn settle(&mut self) -> PagerEvents {
        match self.transition {
            Some(transition) if transition.is_finished() => self.finish_transition(),
            _ => PagerEvents::new(),
        }
    }

    /// Completes the transition in flight, if any, and reports it.
    fn finish_transition(&mut self) -> PagerEvents {
        let mut events = PagerEvents::new();
        let Some(mut transition) = self.transition.take() else {
            return events;
        };
        transition.finish();
        let completed = transition.completes();
        let previous = match transition.kind {
            TransitionKind::Programmatic => transition.from,
            TransitionKind::Swipe => self.displayed,
        };
        if transition.kind == TransitionKind::Swipe {
            if completed {
                self.displayed = Some(transition.to);
            }
            if let Some(current) = self.displayed {
                self.indicator.set_current_page(current);
            }
        }
        tracing::debug!(completed, ?previous, current = ?self.displayed, "page transition finished");
        events.push(PagerEvent::DidFinishAnimating {
            completed,
            previous,
        });
        if completed {
            if let Some(previous) = previous
                && previous != transition.to
            {
                events.push(PagerEvent::PageDidDisappear(previous));
            }
            events.push(PagerEvent::PageDidAppear(transition.to));
        }
        events
    }

    /// Index of the displayed page, or `None` when nothing is displayed.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.displayed
    }

    /// Index of the page after `index`; there is none after the last page.
    #[must_use]
    pub fn page_after(&self, index: usize) -> Option<usize> {
        let next = index.checked_add(1)?;
        (next < self.pages.len()).then_some(next)
    }

    /// Index of the page before `index`; there is none before the first page.
    #[must_use]
    pub fn page_before(&self, index: usize) -> Option<usize> {
        if index >= self.pages.len() {
            return None;
        }
        index.checked_sub(1)
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if there are no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The page at `index`.
    #[must_use]
    pub fn page(&self, index: usize) -> Option<&P> {
        self.pages.get(index)
    }

    /// The page at `index`, mutably.
    pub fn page_mut(&mut self, index: usize) -> Option<&mut P> {
        self.pages.get_mut(index)
    }

    /// All pages.
    #[must_use]
    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    /// All pages, mutably.
    pub fn pages_mut(&mut self) -> &mut [P] {
        &mut self.pages
    }

    /// The page indicator.
    #[must_use]
    pub fn indicator(&self) -> &PageIndicator {
        &self.indicator
    }

    /// Returns `true` while a page transition is animating.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Direction of the transition in flight.
    #[must_use]
    pub fn transition_direction(&self) -> Option<NavigationDirection> {
        self.transition.map(|transition| transition.direction)
    }

    /// Returns `true` while a swipe is under the finger.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.swipe.is_some()
    }

    /// Page width in pixels.
    #[must_use]
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Sets the page width in pixels; negative widths become zero.
    pub fn set_page_width(&mut self, width: f64) {
        self.page_width = width.max(0.0);
    }

    /// Sets the fraction of the page width a swipe must travel to complete.
    ///
    /// Values outside `(0, 1]` are ignored.
    pub fn set_swipe_threshold(&mut self, threshold: f64) {
        if threshold > 0.0 && threshold <= 1.0 {
            self.swipe_threshold = threshold;
        }
    }

    /// Sets the duration of a full page transition.
    pub fn set_animation_duration(&mut self, ms: u64) {
        self.animation_ms = ms;
    }

    /// Pages on screen with their horizontal offsets.
    ///
    /// At rest this is the displayed page at offset zero; during a swipe or
    /// transition it also includes the page sliding in or out.
    #[must_use]
    pub fn visible_pages(&self) -> SmallVec<[PagePlacement; 2]> {
        let mut placements = SmallVec::new();
        let width = self.page_width;
        if let Some(transition) = &self.transition {
            let p = transition.progress();
            let sign = match transition.direction {
                NavigationDirection::Forward => 1.0,
                NavigationDirection::Reverse => -1.0,
            };
            if let Some(from) = transition.from
                && from != transition.to
            {
                placements.push(PagePlacement {
                    index: from,
                    offset: -sign * p * width,
                });
            }
            placements.push(PagePlacement {
                index: transition.to,
                offset: sign * (1.0 - p) * width,
            });
            return placements;
        }
        let Some(current) = self.displayed else {
            return placements;
        };
        match self.swipe.and_then(|dx| self.swipe_target(dx)) {
            Some((direction, to, progress)) => {
                let sign = match direction {
                    NavigationDirection::Forward => 1.0,
                    NavigationDirection::Reverse => -1.0,
                };
                placements.push(PagePlacement {
                    index: current,
                    offset: -sign * progress * width,
                });
                placements.push(PagePlacement {
                    index: to,
                    offset: sign * (1.0 - progress) * width,
                });
            }
            None => placements.push(PagePlacement {
                index: current,
                offset: 0.0,
            }),
        }
        placements
    }

    /// Horizontal offset of the displayed page; zero at rest.
    #[must_use]
    pub fn swipe_offset(&self) -> f64 {
        let Some(current) = self.displayed else {
            return 0.0;
        };
        self.visible_pages()
            .iter()
            .find(|placement| placement.index == current)
            .map_or(0.0, |placement| placement.offset)
    }
}

impl<P: Page> Pager<P> {
    /// Node of the displayed page.
    #[must_use]
    pub fn current_node(&self) -> Option<NodeId> {
        self.displayed
            .and_then(|index| self.pages.get(index))
            .map(Page::node)
    }
}
