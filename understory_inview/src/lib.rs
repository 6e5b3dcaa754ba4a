// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_inview --heading-base-level=0

//! Understory In View: decide whether an element is inside the visible viewport.
//!
//! This crate answers one question: given an element laid out in a scrolling
//! document, is enough of it inside the viewport to count as "in view"? It is
//! the kind of check that drives lazy loading and scroll-triggered animation.
//!
//! The computation is a single synchronous pass:
//! - Walk the element's offset-parent chain and accumulate its document
//!   position ([`element_rect`]).
//! - Read the page scroll offset and the viewport size from a
//!   [`ViewportMetrics`] provider.
//! - Shrink the element box by a [`threshold`](InViewOptions::threshold)
//!   fraction of its own size on every side, and adjust the viewport box by
//!   per-edge offsets.
//! - Report whether the two boxes overlap, with touching edges counting as
//!   *not* overlapping.
//!
//! It does **not** listen to scroll or resize events, poll, cache layout, or
//! batch elements. Callers are expected to:
//! - Decide when to ask (scroll handlers, animation frames, debouncing).
//! - Supply an [`OffsetNode`] for their element type and a
//!   [`ViewportMetrics`] for their host.
//!
//! On `wasm32` the `web` module provides both for `web_sys` and a one-call
//! `in_view` helper. Headless hosts and tests can use [`OffsetTree`] and
//! [`StaticMetrics`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use understory_inview::{InViewOptions, OffsetTree, StaticMetrics, is_in_viewport};
//!
//! // An 800x600 viewport that has not been scrolled.
//! let metrics = StaticMetrics::new(Vec2::ZERO, Size::new(800.0, 600.0));
//!
//! let mut tree = OffsetTree::new();
//! let body = tree.insert(None, Vec2::ZERO, Size::new(800.0, 3_000.0));
//! let card = tree.insert(Some(body), Vec2::new(100.0, 1_000.0), Size::new(200.0, 200.0));
//!
//! let options = InViewOptions::default();
//! assert!(!is_in_viewport(&tree.node(card), &metrics, &options).unwrap());
//!
//! // Scroll the card into view.
//! let metrics = StaticMetrics::new(Vec2::new(0.0, 800.0), Size::new(800.0, 600.0));
//! assert!(is_in_viewport(&tree.node(card), &metrics, &options).unwrap());
//! ```
//!
//! ## Thresholds and offsets
//!
//! ```rust
//! use kurbo::{Insets, Rect};
//! use understory_inview::{InViewOptions, rect_in_view};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! // Only the top 20px of this 200px element are on screen.
//! let element = Rect::new(100.0, 580.0, 300.0, 780.0);
//!
//! assert!(!rect_in_view(element, viewport, &InViewOptions::default()));
//! assert!(rect_in_view(element, viewport, &InViewOptions::new().with_threshold(0.05)));
//!
//! // Reserve 100px at the top for a sticky header.
//! let header = InViewOptions::new().with_offsets(Insets::new(0.0, 100.0, 0.0, 0.0));
//! assert!(!rect_in_view(Rect::new(0.0, 0.0, 100.0, 100.0), viewport, &header));
//! ```
//!
//! ## Design notes
//!
//! - Every call reads geometry fresh; nothing is cached between calls.
//! - The offset-parent walk is capped (see [`DEFAULT_MAX_CHAIN_DEPTH`]) and
//!   reports [`InViewError::ChainTooDeep`] instead of looping on a cyclic chain.
//! - A detached element (no offset parent) contributes only its own offsets;
//!   the result is then relative to an unknown origin.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod evaluate;
mod metrics;
mod node;
mod options;
mod tree;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::InViewError;
pub use evaluate::{
    InViewDebugInfo, container_rect, inspect, is_in_viewport, overlaps, rect_in_view,
    threshold_rect,
};
pub use metrics::{MetricsSource, StaticMetrics, ViewportMetrics};
pub use node::{DEFAULT_MAX_CHAIN_DEPTH, OffsetNode, element_rect, element_rect_with_limit};
pub use options::{DEFAULT_THRESHOLD, InViewOptions};
pub use tree::{NodeId, OffsetRef, OffsetTree};
