// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport metrics providers.

use kurbo::{Rect, Size, Vec2};

/// Source of the page scroll offset and viewport size.
///
/// Hosts provide one implementation per environment (a browser window, a
/// headless test harness, an embedded web view) and select it once; the
/// evaluator only ever talks to this trait.
pub trait ViewportMetrics {
    /// Current horizontal (`x`) and vertical (`y`) scroll distance of the page.
    fn scroll_offset(&self) -> Vec2;

    /// Current width and height of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// The visible region in document coordinates.
    fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll_offset().to_point(), self.viewport_size())
    }
}

impl<M: ViewportMetrics + ?Sized> ViewportMetrics for &M {
    fn scroll_offset(&self) -> Vec2 {
        (**self).scroll_offset()
    }

    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }

    fn viewport_rect(&self) -> Rect {
        (**self).viewport_rect()
    }
}

/// Viewport metrics held as plain values.
///
/// Useful for headless hosts that already know their scroll position and
/// window size, and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticMetrics {
    scroll: Vec2,
    size: Size,
}

impl StaticMetrics {
    /// Creates metrics for a viewport of `size` scrolled by `scroll`.
    #[must_use]
    pub fn new(scroll: Vec2, size: Size) -> Self {
        Self { scroll, size }
    }

    /// Sets the scroll offset.
    pub fn set_scroll_offset(&mut self, scroll: Vec2) {
        self.scroll = scroll;
    }

    /// Scrolls by `delta`.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.scroll += delta;
    }

    /// Sets the viewport size.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl ViewportMetrics for StaticMetrics {
    fn scroll_offset(&self) -> Vec2 {
        self.scroll
    }

    fn viewport_size(&self) -> Size {
        self.size
    }
}

/// Which host readings a browser-backed [`ViewportMetrics`] uses.
///
/// Browsers expose the scroll offset and viewport size twice: on the window
/// (`pageXOffset`, `innerWidth`, ...) and on the document element
/// (`scrollLeft`, `clientWidth`, ...). A provider picks one with
/// [`MetricsSource::detect`] when it is created and then reads only from that
/// source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricsSource {
    /// `window.pageXOffset`/`pageYOffset` and `window.innerWidth`/`innerHeight`.
    Window,
    /// `document.documentElement.scrollLeft`/`scrollTop` and
    /// `clientWidth`/`clientHeight`.
    DocumentElement,
}

impl MetricsSource {
    /// Chooses a source from what the host supports.
    ///
    /// The window wins whenever it reports a viewport size. Without one, the
    /// document element is used if there is one. With neither, the window is
    /// kept and its missing readings count as `0`.
    #[must_use]
    pub fn detect(window_has_size: bool, has_document_element: bool) -> Self {
        if window_has_size || !has_document_element {
            Self::Window
        } else {
            Self::DocumentElement
        }
    }

    /// Takes one reading from this source.
    ///
    /// Only the closure for the selected source is called. A missing or
    /// non-numeric reading counts as `0`.
    pub fn read(
        self,
        window: impl FnOnce() -> Option<f64>,
        document_element: impl FnOnce() -> Option<f64>,
    ) -> f64 {
        match self {
            Self::Window => window(),
            Self::DocumentElement => document_element(),
        }
        .unwrap_or(0.0)
    }
}
