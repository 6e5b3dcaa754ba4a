// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-call options for visibility queries.

use kurbo::Insets;

use crate::node::DEFAULT_MAX_CHAIN_DEPTH;

/// Threshold used when none (or zero) is given.
pub const DEFAULT_THRESHOLD: f64 = 0.25;

/// Options for a single visibility query.
///
/// All fields are optional in spirit: a zero or NaN `threshold` falls back to
/// [`DEFAULT_THRESHOLD`], and a NaN offset falls back to `0`. Use the
/// `effective_*` accessors to read the values the evaluator actually uses.
///
/// Offsets are in the same units as the layout (typically CSS pixels).
/// Positive offsets move the corresponding viewport edge inward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element's own width/height trimmed from each side
    /// before testing overlap.
    ///
    /// `0.25` means the middle half of the element (in each axis) must reach
    /// into the viewport. Values above `0.5` invert the trimmed box and make
    /// the test progressively harder to pass.
    pub threshold: f64,
    /// Inset applied to the top edge of the viewport.
    pub offset_top: f64,
    /// Inset applied to the right edge of the viewport.
    pub offset_right: f64,
    /// Inset applied to the bottom edge of the viewport.
    pub offset_bottom: f64,
    /// Inset applied to the left edge of the viewport.
    pub offset_left: f64,
    /// Maximum number of nodes visited while walking the offset-parent chain.
    pub max_chain_depth: usize,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            offset_top: 0.0,
            offset_right: 0.0,
            offset_bottom: 0.0,
            offset_left: 0.0,
            max_chain_depth: DEFAULT_MAX_CHAIN_DEPTH,
        }
    }
}

impl InViewOptions {
    /// Creates options with the default threshold and no offsets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns a copy with all four offsets taken from `insets`.
    ///
    /// `Insets` is interpreted as `x0` = left, `y0` = top, `x1` = right,
    /// `y1` = bottom.
    #[must_use]
    pub fn with_offsets(mut self, insets: Insets) -> Self {
        self.offset_left = insets.x0;
        self.offset_top = insets.y0;
        self.offset_right = insets.x1;
        self.offset_bottom = insets.y1;
        self
    }

    /// Returns a copy with a different cap on the offset-parent walk.
    #[must_use]
    pub fn with_max_chain_depth(mut self, depth: usize) -> Self {
        self.max_chain_depth = depth;
        self
    }

    /// The threshold the evaluator uses.
    ///
    /// Zero and NaN mean "unset" and yield [`DEFAULT_THRESHOLD`]. A threshold
    /// of exactly zero therefore cannot be requested; pass a tiny positive
    /// value such as `f64::MIN_POSITIVE` instead.
    #[must_use]
    pub fn effective_threshold(&self) -> f64 {
        or_default(self.threshold, DEFAULT_THRESHOLD)
    }

    /// The viewport insets the evaluator uses, with NaN offsets replaced by `0`.
    #[must_use]
    pub fn offsets(&self) -> Insets {
        Insets::new(
            or_default(self.offset_left, 0.0),
            or_default(self.offset_top, 0.0),
            or_default(self.offset_right, 0.0),
            or_default(self.offset_bottom, 0.0),
        )
    }
}

fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        default
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Insets;

    use super::{DEFAULT_THRESHOLD, InViewOptions};

    #[test]
    fn zero_and_nan_threshold_fall_back_to_default() {
        assert_eq!(
            InViewOptions::new().with_threshold(0.0).effective_threshold(),
            DEFAULT_THRESHOLD
        );
        assert_eq!(
            InViewOptions::new()
                .with_threshold(f64::NAN)
                .effective_threshold(),
            DEFAULT_THRESHOLD
        );
        assert_eq!(
            InViewOptions::new().with_threshold(0.6).effective_threshold(),
            0.6
        );
    }

    #[test]
    fn offsets_map_insets_to_edges() {
        let opts = InViewOptions::new().with_offsets(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(opts.offset_left, 1.0);
        assert_eq!(opts.offset_top, 2.0);
        assert_eq!(opts.offset_right, 3.0);
        assert_eq!(opts.offset_bottom, 4.0);
        assert_eq!(opts.offsets(), Insets::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn nan_offsets_read_as_zero() {
        let opts = InViewOptions {
            offset_top: f64::NAN,
            offset_right: -5.0,
            ..InViewOptions::default()
        };
        let insets = opts.offsets();
        assert_eq!(insets.y0, 0.0);
        assert_eq!(insets.x1, -5.0);
    }
}
