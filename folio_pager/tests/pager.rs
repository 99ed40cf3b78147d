// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `folio_pager` crate.
//!
//! These exercise the `Pager<P>` API end to end: how page count gates swiping
//! and the indicator, how swipes and indicator taps move between pages, and
//! which lifecycle events each transition reports.

use folio_pager::{NavigationDirection, Pager, PagerEvent};

const WIDTH: f64 = 400.0;

/// A pager over `n` pages resting on the first one.
fn settled(n: usize) -> Pager<usize> {
    let mut pager = Pager::new(WIDTH);
    pager.set_pages((0..n).collect());
    pager.set_start_page(0);
    pager.advance(1_000);
    pager
}

fn swipe(pager: &mut Pager<usize>, dx: f64) -> Vec<PagerEvent> {
    let mut events = Vec::new();
    if pager.swipe_begin() {
        pager.swipe_update(dx / 2.0);
        pager.swipe_update(dx);
        events.extend(pager.swipe_end());
        events.extend(pager.advance(1_000));
    }
    events
}

#[test]
fn empty_pager_displays_nothing() {
    let mut pager = Pager::<usize>::new(WIDTH);
    pager.set_pages(Vec::new());
    assert_eq!(pager.current_index(), None);
    assert!(pager.indicator().is_hidden());
    assert!(!pager.is_transitioning_enabled());
    assert!(pager.set_start_page(0).is_empty());
    assert!(!pager.swipe_begin());
    assert_eq!(pager.swipe_offset(), 0.0);
}

#[test]
fn many_pages_enable_swiping_and_indicator() {
    let pager = settled(6);
    assert_eq!(pager.len(), 6);
    assert_eq!(pager.current_index(), Some(0));
    assert_eq!(pager.indicator().number_of_pages(), 6);
    assert_eq!(pager.indicator().current_page(), 0);
    assert!(!pager.indicator().is_hidden());
    assert!(pager.is_transitioning_enabled());
}

#[test]
fn single_page_hides_indicator_and_forbids_swiping() {
    let mut pager = settled(1);
    assert!(pager.indicator().is_hidden());
    assert!(!pager.is_transitioning_enabled());

    // Requests cannot override the page count.
    pager.enable_transitioning();
    pager.show_page_control();
    assert!(pager.indicator().is_hidden());
    assert!(!pager.is_transitioning_enabled());
    assert!(swipe(&mut pager, -WIDTH).is_empty());
}

#[test]
fn replacing_pages_resets_display() {
    let mut pager = settled(3);
    pager.disable_transitioning();
    pager.set_pages(vec![7, 8]);
    assert_eq!(pager.current_index(), None);
    assert_eq!(pager.indicator().number_of_pages(), 2);
    assert!(pager.is_transitioning_enabled());
}

#[test]
fn start_page_reports_appearance_after_animation() {
    let mut pager = Pager::new(WIDTH);
    pager.set_pages(vec![0, 1, 2]);
    assert!(pager.set_start_page(2).is_empty());
    assert!(pager.is_transitioning());
    assert_eq!(
        pager.transition_direction(),
        Some(NavigationDirection::Forward)
    );
    assert_eq!(pager.current_index(), Some(2));
    assert_eq!(pager.indicator().current_page(), 2);

    let events = pager.advance(1_000);
    assert_eq!(
        events.as_slice(),
        &[
            PagerEvent::DidFinishAnimating {
                completed: true,
                previous: None,
            },
            PagerEvent::PageDidAppear(2),
        ]
    );
    assert!(!pager.is_transitioning());
}

#[test]
fn start_page_out_of_range_is_ignored() {
    let mut pager = settled(3);
    assert!(pager.set_start_page(3).is_empty());
    assert_eq!(pager.current_index(), Some(0));
    assert!(!pager.is_transitioning());
}

#[test]
fn swipe_left_past_threshold_moves_forward() {
    let mut pager = settled(3);
    let events = swipe(&mut pager, -0.6 * WIDTH);
    assert_eq!(
        events,
        vec![
            PagerEvent::DidFinishAnimating {
                completed: true,
                previous: Some(0),
            },
            PagerEvent::PageDidDisappear(0),
            PagerEvent::PageDidAppear(1),
        ]
    );
    assert_eq!(pager.current_index(), Some(1));
    assert_eq!(pager.indicator().current_page(), 1);
}

#[test]
fn swipe_right_past_threshold_moves_back() {
    let mut pager = settled(3);
    swipe(&mut pager, -WIDTH);
    assert_eq!(pager.current_index(), Some(1));
    swipe(&mut pager, WIDTH);
    assert_eq!(pager.current_index(), Some(0));
    assert_eq!(pager.indicator().current_page(), 0);
}

#[test]
fn short_swipe_snaps_back() {
    let mut pager = settled(3);
    let events = swipe(&mut pager, -0.3 * WIDTH);
    assert_eq!(
        events,
        vec![PagerEvent::DidFinishAnimating {
            completed: false,
            previous: Some(0),
        }]
    );
    assert_eq!(pager.current_index(), Some(0));
    assert_eq!(pager.swipe_offset(), 0.0);
}

#[test]
fn current_page_stays_displayed_until_swipe_completes() {
    let mut pager = settled(3);
    assert!(pager.swipe_begin());
    pager.swipe_update(-0.8 * WIDTH);
    pager.swipe_end();
    assert!(pager.is_transitioning());
    assert_eq!(pager.current_index(), Some(0));

    pager.advance(10);
    assert_eq!(pager.current_index(), Some(0));
    assert!(pager.swipe_offset() < -0.8 * WIDTH);

    pager.advance(1_000);
    assert_eq!(pager.current_index(), Some(1));
    assert_eq!(pager.swipe_offset(), 0.0);
}

#[test]
fn swipes_are_ignored_while_disabled() {
    let mut pager = settled(3);
    pager.disable_transitioning();
    assert!(swipe(&mut pager, -WIDTH).is_empty());
    assert_eq!(pager.current_index(), Some(0));

    pager.enable_transitioning();
    swipe(&mut pager, -WIDTH);
    assert_eq!(pager.current_index(), Some(1));
}

#[test]
fn swipes_are_ignored_during_a_transition() {
    let mut pager = settled(3);
    pager.select_indicator(2);
    assert!(pager.is_transitioning());
    assert!(!pager.swipe_begin());
}

#[test]
fn toggles_are_idempotent() {
    let mut pager = settled(3);
    pager.disable_transitioning();
    pager.disable_transitioning();
    assert!(!pager.is_transitioning_enabled());
    pager.enable_transitioning();
    assert!(pager.is_transitioning_enabled());
    pager.enable_transitioning();
    assert!(pager.is_transitioning_enabled());

    pager.hide_page_control();
    pager.hide_page_control();
    assert!(pager.indicator().is_hidden());
    pager.show_page_control();
    pager.show_page_control();
    assert!(!pager.indicator().is_hidden());
}

#[test]
fn indicator_tap_navigates_in_both_directions() {
    let mut pager = settled(4);

    assert!(pager.select_indicator(2).is_empty());
    assert_eq!(
        pager.transition_direction(),
        Some(NavigationDirection::Forward)
    );
    assert_eq!(pager.current_index(), Some(2));
    let events = pager.advance(1_000);
    assert!(events.contains(&PagerEvent::PageDidDisappear(0)));
    assert!(events.contains(&PagerEvent::PageDidAppear(2)));

    pager.select_indicator(0);
    assert_eq!(
        pager.transition_direction(),
        Some(NavigationDirection::Reverse)
    );
    pager.advance(1_000);
    assert_eq!(pager.current_index(), Some(0));
    assert_eq!(pager.indicator().current_page(), 0);
}

#[test]
fn indicator_tap_ignores_current_hidden_and_out_of_range() {
    let mut pager = settled(3);
    assert!(pager.select_indicator(0).is_empty());
    assert!(!pager.is_transitioning());

    assert!(pager.select_indicator(9).is_empty());
    assert!(!pager.is_transitioning());

    pager.hide_page_control();
    pager.select_indicator(1);
    assert!(!pager.is_transitioning());
    assert_eq!(pager.current_index(), Some(0));
}

#[test]
fn indicator_tap_works_while_swiping_is_disabled() {
    let mut pager = settled(3);
    pager.disable_transitioning();
    pager.select_indicator(1);
    pager.advance(1_000);
    assert_eq!(pager.current_index(), Some(1));
}
