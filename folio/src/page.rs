// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use folio_pager::{NodeId, Page};
use folio_zoom::ZoomView;
use kurbo::Size;

use crate::Image;

/// One gallery page: a zoomable view over an optional image.
#[derive(Clone, Debug)]
pub struct ZoomPage {
    node: NodeId,
    /// The page's zoom state.
    pub zoom: ZoomView<Image>,
}

impl ZoomPage {
    /// Creates a page for `image` over a viewport of `viewport` size.
    ///
    /// `None` shows a blank page.
    #[must_use]
    pub fn new(node: NodeId, viewport: Size, image: Option<Image>) -> Self {
        let mut zoom = ZoomView::new(viewport);
        zoom.set_image(image);
        Self { node, zoom }
    }

    /// The page's image, if it has one.
    #[must_use]
    pub fn image(&self) -> Option<&Image> {
        self.zoom.image()
    }
}

impl Page for ZoomPage {
    fn node(&self) -> NodeId {
        self.node
    }
}
