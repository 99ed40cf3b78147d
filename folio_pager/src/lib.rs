// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Pager: a headless horizontal page carousel.
//!
//! This crate focuses on the _bookkeeping_ of paging: which page is
//! displayed, where the page indicator points, whether the user may swipe,
//! and the lifecycle of the transition that moves from one page to the next.
//! It does **not** know what a page shows; pages only expose a node handle
//! through the [`Page`] trait.
//!
//! The core type is [`Pager`], which tracks:
//! - The ordered pages. Neighbors are not circular: the first page has no
//!   predecessor and the last page has no successor.
//! - The displayed page. [`Pager::current_index`] is derived from it.
//! - A [`PageIndicator`] with one dot per page.
//! - Whether swiping is enabled and whether the indicator is shown. Both are
//!   caller requests that only take effect with more than one page.
//! - The transition in flight, driven by [`Pager::advance`].
//!
//! Operations that finish a transition return [`PagerEvents`] describing what
//! happened, so owners can react to pages leaving and entering the screen.
//!
//! ## Minimal example
//!
//! ```rust
//! use folio_pager::{Pager, PagerEvent};
//!
//! // Any type can be a page; here pages are plain numbers.
//! let mut pager = Pager::new(320.0);
//! pager.set_pages(vec![10_u32, 20, 30]);
//! pager.set_start_page(0);
//! pager.advance(1_000);
//! assert_eq!(pager.current_index(), Some(0));
//!
//! // The finger moves left past half the page width, then lifts.
//! assert!(pager.swipe_begin());
//! pager.swipe_update(-200.0);
//! pager.swipe_end();
//! let events = pager.advance(1_000);
//!
//! assert_eq!(pager.current_index(), Some(1));
//! assert_eq!(pager.indicator().current_page(), 1);
//! assert!(events.contains(&PagerEvent::PageDidDisappear(0)));
//! assert!(events.contains(&PagerEvent::PageDidAppear(1)));
//! ```
//!
//! ## Swiping and the indicator
//!
//! A swipe reports the finger's total horizontal travel. Moving left heads to
//! the next page. On release the swipe completes if it traveled at least the
//! swipe threshold (half the page width by default) toward an existing
//! neighbor; otherwise the pages slide back. Swipes are ignored entirely
//! while transitioning is disabled.
//!
//! Tapping the indicator ([`Pager::select_indicator`]) navigates forward or
//! in reverse depending on where the tapped dot lies relative to the current
//! page. It is ignored while the indicator is hidden, but not while swiping
//! is disabled.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod indicator;
mod pager;
mod transition;

pub use indicator::PageIndicator;
pub use pager::{
    DEFAULT_PAGE_ANIMATION_MS, DEFAULT_SWIPE_THRESHOLD, NodeId, Page, PagePlacement, Pager,
    PagerEvent, PagerEvents,
};
pub use transition::NavigationDirection;
