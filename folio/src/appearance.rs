// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use peniko::color::palette::css;

/// Preferred style of the system status bar over the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusBarStyle {
    /// Dark text and icons, for light backgrounds.
    #[default]
    DarkContent,
    /// Light text and icons, for dark backgrounds.
    LightContent,
}

/// Colors and chrome styling the host should apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    /// Status bar style.
    pub status_bar: StatusBarStyle,
    /// Color behind the pages.
    pub background: Color,
    /// Color of the indicator dots.
    pub page_indicator_tint: Color,
    /// Color of the dot for the current page.
    pub current_page_indicator_tint: Color,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            status_bar: StatusBarStyle::DarkContent,
            background: css::WHITE,
            page_indicator_tint: css::GRAY,
            current_page_indicator_tint: css::BLACK,
        }
    }
}
