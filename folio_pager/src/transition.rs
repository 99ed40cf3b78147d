// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Which way a page transition moves through the page list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationDirection {
    /// Toward higher indices; the new page enters from the trailing edge.
    Forward,
    /// Toward lower indices; the new page enters from the leading edge.
    Reverse,
}

/// What started a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TransitionKind {
    /// `set_start_page` or an indicator tap. The target page is displayed
    /// from the start; the animation only slides the previous page out.
    Programmatic,
    /// A released swipe. The target page becomes displayed on completion.
    Swipe,
}

/// An animated page transition.
///
/// Progress runs from `start` to `end`, where `0.0` shows `from` in place and
/// `1.0` shows `to` in place. A swipe released short of the threshold
/// animates back toward `0.0` and does not complete.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Transition {
    pub(crate) from: Option<usize>,
    pub(crate) to: usize,
    pub(crate) direction: NavigationDirection,
    pub(crate) kind: TransitionKind,
    start: f64,
    end: f64,
    duration_ms: u64,
    elapsed_ms: u64,
}

impl Transition {
    pub(crate) fn new(
        from: Option<usize>,
        to: usize,
        direction: NavigationDirection,
        kind: TransitionKind,
        (start, end): (f64, f64),
        full_duration_ms: u64,
    ) -> Self {
        let start = start.clamp(0.0, 1.0);
        let end = end.clamp(0.0, 1.0);
        // Partial swipes only animate the remaining distance, rounded to the
        // nearest millisecond.
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the product is non-negative and at most the full duration"
        )]
        let duration_ms = (full_duration_ms as f64 * (end - start).abs() + 0.5) as u64;
        Self {
            from,
            to,
            direction,
            kind,
            start,
            end,
            duration_ms,
            elapsed_ms: 0,
        }
    }

    /// Returns `true` if the transition lands on `to`.
    pub(crate) fn completes(&self) -> bool {
        self.end >= 1.0
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    pub(crate) fn advance(&mut self, dt_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms).min(self.duration_ms);
    }

    pub(crate) fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms;
    }

    /// Current progress in `[0, 1]`.
    pub(crate) fn progress(&self) -> f64 {
        if self.is_finished() {
            return self.end;
        }
        let t = self.elapsed_ms as f64 / self.duration_ms as f64;
        self.start + (self.end - self.start) * ease_out_cubic(t)
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::{NavigationDirection, Transition, TransitionKind};

    #[test]
    fn partial_swipe_animates_remaining_fraction() {
        let mut t = Transition::new(
            Some(0),
            1,
            NavigationDirection::Forward,
            TransitionKind::Swipe,
            (0.75, 1.0),
            400,
        );
        assert!(t.completes());
        assert_eq!(t.progress(), 0.75);
        t.advance(50);
        assert!(t.progress() > 0.75);
        t.advance(50);
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn cancelled_swipe_returns_to_zero() {
        let mut t = Transition::new(
            Some(1),
            0,
            NavigationDirection::Reverse,
            TransitionKind::Swipe,
            (0.2, 0.0),
            300,
        );
        assert!(!t.completes());
        t.finish();
        assert_eq!(t.progress(), 0.0);
    }

    #[test]
    fn zero_duration_is_finished_at_once() {
        let t = Transition::new(
            None,
            0,
            NavigationDirection::Forward,
            TransitionKind::Programmatic,
            (0.0, 1.0),
            0,
        );
        assert!(t.is_finished());
        assert_eq!(t.progress(), 1.0);
    }
}
