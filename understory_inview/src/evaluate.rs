// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visibility test itself.
//!
//! Rectangles here are compared through their raw `x0`/`y0`/`x1`/`y1` fields.
//! A threshold above `0.5` produces a trimmed element box whose edges have
//! crossed; normalizing it would turn a stricter test into a looser one.

use kurbo::Rect;

use crate::error::InViewError;
use crate::metrics::ViewportMetrics;
use crate::node::{OffsetNode, element_rect_with_limit};
use crate::options::InViewOptions;

/// Trims `element` by `threshold` times its own width/height on every side.
#[must_use]
pub fn threshold_rect(element: Rect, threshold: f64) -> Rect {
    let dx = element.width() * threshold;
    let dy = element.height() * threshold;
    Rect {
        x0: element.x0 + dx,
        y0: element.y0 + dy,
        x1: element.x1 - dx,
        y1: element.y1 - dy,
    }
}

/// Applies the per-edge offsets in `options` to `viewport`.
///
/// Positive offsets move each edge inward; negative offsets grow the viewport.
#[must_use]
pub fn container_rect(viewport: Rect, options: &InViewOptions) -> Rect {
    let insets = options.offsets();
    Rect {
        x0: viewport.x0 + insets.x0,
        y0: viewport.y0 + insets.y0,
        x1: viewport.x1 - insets.x1,
        y1: viewport.y1 - insets.y1,
    }
}

/// Strict axis-aligned overlap test.
///
/// Boxes that only touch along an edge do not overlap.
#[must_use]
pub fn overlaps(element: Rect, container: Rect) -> bool {
    element.y0 < container.y1
        && element.y1 > container.y0
        && element.x0 < container.x1
        && element.x1 > container.x0
}

/// Tests an element box against a viewport box, both in document coordinates.
///
/// This is the geometric core of [`is_in_viewport`], for hosts that already
/// have both rectangles.
#[must_use]
pub fn rect_in_view(element: Rect, viewport: Rect, options: &InViewOptions) -> bool {
    overlaps(
        threshold_rect(element, options.effective_threshold()),
        container_rect(viewport, options),
    )
}

/// Returns `true` if `element` is inside the viewport described by `metrics`.
///
/// Geometry is read fresh on every call: the element's offset chain, then the
/// scroll offset, then the viewport size. Nothing is mutated.
///
/// # Errors
///
/// - [`InViewError::ChainTooDeep`] when the offset chain is longer than
///   [`InViewOptions::max_chain_depth`].
/// - [`InViewError::NonFiniteGeometry`] when the element or viewport readings
///   are NaN or infinite.
pub fn is_in_viewport<N, M>(
    element: &N,
    metrics: &M,
    options: &InViewOptions,
) -> Result<bool, InViewError>
where
    N: OffsetNode,
    M: ViewportMetrics + ?Sized,
{
    let element = element_rect_with_limit(element, options.max_chain_depth)?;
    let viewport = read_viewport(metrics)?;
    Ok(rect_in_view(element, viewport, options))
}

/// Runs the same query as [`is_in_viewport`] and returns every intermediate
/// rectangle alongside the verdict.
///
/// # Errors
///
/// Same as [`is_in_viewport`].
pub fn inspect<N, M>(
    element: &N,
    metrics: &M,
    options: &InViewOptions,
) -> Result<InViewDebugInfo, InViewError>
where
    N: OffsetNode,
    M: ViewportMetrics + ?Sized,
{
    let element_rect = element_rect_with_limit(element, options.max_chain_depth)?;
    let viewport_rect = read_viewport(metrics)?;
    let threshold = options.effective_threshold();
    let trimmed_rect = threshold_rect(element_rect, threshold);
    let container_rect = container_rect(viewport_rect, options);
    Ok(InViewDebugInfo {
        element_rect,
        viewport_rect,
        threshold,
        trimmed_rect,
        container_rect,
        in_view: overlaps(trimmed_rect, container_rect),
    })
}

fn read_viewport<M: ViewportMetrics + ?Sized>(metrics: &M) -> Result<Rect, InViewError> {
    let viewport = metrics.viewport_rect();
    if viewport.is_finite() {
        Ok(viewport)
    } else {
        Err(InViewError::NonFiniteGeometry)
    }
}

/// Snapshot of one visibility query, for debugging and inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewDebugInfo {
    /// Element bounds in document coordinates.
    pub element_rect: Rect,
    /// Visible region in document coordinates, before offsets.
    pub viewport_rect: Rect,
    /// Threshold after defaulting.
    pub threshold: f64,
    /// Element bounds after trimming by `threshold`.
    pub trimmed_rect: Rect,
    /// Viewport after applying the edge offsets.
    pub container_rect: Rect,
    /// Whether `trimmed_rect` overlaps `container_rect`.
    pub in_view: bool,
}
