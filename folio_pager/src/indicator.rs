// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// State of the page indicator: one dot per page, one of them current.
///
/// The indicator is plain data; the [`Pager`](crate::Pager) decides its dot
/// count, current dot and visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PageIndicator {
    number_of_pages: usize,
    current_page: usize,
    hidden: bool,
}

impl PageIndicator {
    /// Returns the number of dots.
    #[must_use]
    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    /// Returns the highlighted dot.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns `true` when the indicator is not shown.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_number_of_pages(&mut self, count: usize) {
        self.number_of_pages = count;
        self.current_page = self.current_page.min(count.saturating_sub(1));
    }

    pub(crate) fn set_current_page(&mut self, index: usize) {
        if index < self.number_of_pages {
            self.current_page = index;
        }
    }

    pub(crate) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::PageIndicator;

    #[test]
    fn current_page_stays_in_range() {
        let mut indicator = PageIndicator::default();
        indicator.set_number_of_pages(3);
        indicator.set_current_page(2);
        assert_eq!(indicator.current_page(), 2);

        indicator.set_current_page(7);
        assert_eq!(indicator.current_page(), 2);

        indicator.set_number_of_pages(2);
        assert_eq!(indicator.current_page(), 1);

        indicator.set_number_of_pages(0);
        assert_eq!(indicator.current_page(), 0);
    }
}
