// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a visibility query cannot produce a trustworthy answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InViewError {
    /// The offset-parent chain had more than `limit` nodes.
    ///
    /// Real documents are far shallower than the default limit; hitting it
    /// almost always means the chain loops back on itself.
    ChainTooDeep {
        /// The cap that was exceeded.
        limit: usize,
    },
    /// An offset parent exists but could not be followed, so the element's
    /// position would be missing the remaining ancestors' offsets.
    BrokenChain,
    /// An element or viewport reading was NaN or infinite.
    NonFiniteGeometry,
    /// No host window was available to read viewport metrics from.
    NoWindow,
}

impl fmt::Display for InViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChainTooDeep { limit } => {
                write!(f, "offset parent chain exceeds {limit} nodes (malformed or cyclic)")
            }
            Self::BrokenChain => f.write_str("offset parent chain has a link that cannot be followed"),
            Self::NonFiniteGeometry => f.write_str("element or viewport geometry is not finite"),
            Self::NoWindow => f.write_str("no window is available to measure the viewport"),
        }
    }
}

impl core::error::Error for InViewError {}
