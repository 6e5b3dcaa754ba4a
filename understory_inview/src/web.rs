// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings via `web_sys`.
//!
//! - [`OffsetNode`] is implemented for `web_sys::HtmlElement`, reading
//!   `offsetWidth`/`offsetHeight`/`offsetLeft`/`offsetTop`/`offsetParent`.
//!   An offset parent that is not an `HtmlElement` is reported as
//!   [`InViewError::BrokenChain`] rather than ending the walk early.
//! - [`WindowMetrics`] reads scroll offset and viewport size from a window.
//! - [`in_view`] combines both against the global window.
//!
//! ```no_run
//! # #[cfg(target_arch = "wasm32")]
//! fn lazy_load(img: &web_sys::HtmlElement) -> Result<bool, understory_inview::InViewError> {
//!     use understory_inview::{InViewOptions, web};
//!     web::in_view(img, &InViewOptions::new().with_threshold(0.1))
//! }
//! ```

use kurbo::{Size, Vec2};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

use crate::error::InViewError;
use crate::evaluate::is_in_viewport;
use crate::metrics::{MetricsSource, ViewportMetrics};
use crate::node::OffsetNode;
use crate::options::InViewOptions;

impl OffsetNode for HtmlElement {
    fn offset_size(&self) -> Size {
        Size::new(f64::from(self.offset_width()), f64::from(self.offset_height()))
    }

    fn offset_origin(&self) -> Vec2 {
        Vec2::new(f64::from(self.offset_left()), f64::from(self.offset_top()))
    }

    fn offset_parent(&self) -> Result<Option<Self>, InViewError> {
        // Inherent `HtmlElement::offset_parent` returns an `Element`.
        match HtmlElement::offset_parent(self) {
            None => Ok(None),
            Some(parent) => parent
                .dyn_into::<Self>()
                .map(Some)
                .map_err(|_| InViewError::BrokenChain),
        }
    }
}

/// Viewport metrics for a browser window.
///
/// The reading source is detected once, in [`WindowMetrics::new`], with
/// [`MetricsSource::detect`]. Readings are still taken fresh on every query.
#[derive(Clone, Debug)]
pub struct WindowMetrics {
    window: Window,
    document_element: Option<Element>,
    source: MetricsSource,
}

impl WindowMetrics {
    /// Wraps `window`, choosing the reading source it supports.
    #[must_use]
    pub fn new(window: Window) -> Self {
        let document_element = window.document().and_then(|doc| doc.document_element());
        let window_has_size = js_number(window.inner_width()).is_some();
        let source = MetricsSource::detect(window_has_size, document_element.is_some());
        Self {
            window,
            document_element,
            source,
        }
    }

    /// Wraps the global `window`, if there is one.
    #[must_use]
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    /// The source chosen at construction.
    #[must_use]
    pub fn source(&self) -> MetricsSource {
        self.source
    }

    fn element_reading(&self, read: impl Fn(&Element) -> i32) -> Option<f64> {
        self.document_element
            .as_ref()
            .map(|el| f64::from(read(el)))
    }
}

fn js_number(value: Result<JsValue, JsValue>) -> Option<f64> {
    value.ok().and_then(|v| v.as_f64())
}

impl ViewportMetrics for WindowMetrics {
    fn scroll_offset(&self) -> Vec2 {
        Vec2::new(
            self.source.read(
                || self.window.page_x_offset().ok(),
                || self.element_reading(Element::scroll_left),
            ),
            self.source.read(
                || self.window.page_y_offset().ok(),
                || self.element_reading(Element::scroll_top),
            ),
        )
    }

    fn viewport_size(&self) -> Size {
        Size::new(
            self.source.read(
                || js_number(self.window.inner_width()),
                || self.element_reading(Element::client_width),
            ),
            self.source.read(
                || js_number(self.window.inner_height()),
                || self.element_reading(Element::client_height),
            ),
        )
    }
}

/// Returns `true` if `element` is inside the global window's viewport.
///
/// # Errors
///
/// - [`InViewError::NoWindow`] outside a browsing context.
/// - Anything [`is_in_viewport`] reports.
pub fn in_view(element: &HtmlElement, options: &InViewOptions) -> Result<bool, InViewError> {
    let metrics = WindowMetrics::from_global().ok_or(InViewError::NoWindow)?;
    is_in_viewport(element, &metrics, options)
}
