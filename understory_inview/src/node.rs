// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element geometry: the offset-parent chain and document-space bounds.

use kurbo::{Rect, Size, Vec2};

use crate::error::InViewError;

/// Default cap on the number of nodes visited by [`element_rect`].
pub const DEFAULT_MAX_CHAIN_DEPTH: usize = 1024;

/// An element whose position is expressed relative to a chain of offset parents.
///
/// This mirrors the DOM `offsetParent` model: each node knows its own border-box
/// size, its offset from its offset parent, and the offset parent itself. The
/// chain ends at a node with no offset parent (typically the document body).
///
/// Implementations are expected to be cheap handles (an index into an arena, a
/// reference-counted host object) since the walk produces one per ancestor.
pub trait OffsetNode: Sized {
    /// Border-box width and height of this node.
    fn offset_size(&self) -> Size;

    /// Offset of this node's border box from its offset parent's padding edge.
    ///
    /// `x` is the left offset and `y` the top offset.
    fn offset_origin(&self) -> Vec2;

    /// The next node in the chain, or `None` at the root or when detached.
    ///
    /// # Errors
    ///
    /// Returns [`InViewError::BrokenChain`] when an offset parent exists but
    /// cannot be represented as `Self`. Ending the walk there instead would
    /// silently drop the remaining offsets.
    fn offset_parent(&self) -> Result<Option<Self>, InViewError>;
}

/// Returns the document-space bounds of `node`, visiting at most
/// [`DEFAULT_MAX_CHAIN_DEPTH`] nodes.
///
/// See [`element_rect_with_limit`].
pub fn element_rect<N: OffsetNode>(node: &N) -> Result<Rect, InViewError> {
    element_rect_with_limit(node, DEFAULT_MAX_CHAIN_DEPTH)
}

/// Returns the document-space bounds of `node`.
///
/// The origin is the sum of the offsets of `node` and every offset parent above
/// it; the size is `node`'s own size. At most `limit` nodes (including `node`
/// itself) are visited, so a `limit` of zero rejects every node.
///
/// # Errors
///
/// - [`InViewError::ChainTooDeep`] when the chain is longer than `limit`.
/// - [`InViewError::BrokenChain`] when an offset parent cannot be followed.
/// - [`InViewError::NonFiniteGeometry`] when a size or offset is NaN or infinite.
pub fn element_rect_with_limit<N: OffsetNode>(node: &N, limit: usize) -> Result<Rect, InViewError> {
    if limit == 0 {
        return Err(InViewError::ChainTooDeep { limit });
    }
    let size = node.offset_size();
    let mut origin = node.offset_origin();
    let mut visited = 1;
    let mut next = node.offset_parent()?;
    while let Some(parent) = next {
        if visited >= limit {
            return Err(InViewError::ChainTooDeep { limit });
        }
        visited += 1;
        origin += parent.offset_origin();
        next = parent.offset_parent()?;
    }
    if !(origin.is_finite() && size.is_finite()) {
        return Err(InViewError::NonFiniteGeometry);
    }
    Ok(Rect::from_origin_size(origin.to_point(), size))
}
