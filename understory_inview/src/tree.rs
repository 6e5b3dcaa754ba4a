// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless arena of offset nodes.

use alloc::vec::Vec;

use kurbo::{Size, Vec2};

use crate::error::InViewError;
use crate::node::OffsetNode;

/// Identifier for a node in an [`OffsetTree`].
///
/// Ids are slot indices; they are only meaningful for the tree that issued them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry {
    parent: Option<NodeId>,
    origin: Vec2,
    size: Size,
}

/// An arena of nodes positioned relative to their offset parents.
///
/// This is the offset-parent model of a laid-out document without a document:
/// each node stores its size, its offset from its parent, and the parent id.
/// Hosts that run their own layout can mirror the results here, and tests use
/// it to build exact scenarios.
///
/// The tree does not validate parent links. Re-parenting can create a cycle;
/// [`crate::element_rect`] reports such chains as
/// [`InViewError::ChainTooDeep`], and a parent id issued by another tree as
/// [`InViewError::BrokenChain`].
#[derive(Clone, Debug, Default)]
pub struct OffsetTree {
    nodes: Vec<Entry>,
}

impl OffsetTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node offset by `origin` from `parent` (or from the document
    /// origin when `parent` is `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, origin: Vec2, size: Size) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "More than u32::MAX nodes is not a supported use case."
        )]
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Entry {
            parent,
            origin,
            size,
        });
        id
    }

    /// Changes the offset parent of `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn set_offset_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id.idx()].parent = parent;
    }

    /// Moves `id` relative to its offset parent.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn set_origin(&mut self, id: NodeId, origin: Vec2) {
        self.nodes[id.idx()].origin = origin;
    }

    /// Resizes `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    pub fn set_size(&mut self, id: NodeId, size: Size) {
        self.nodes[id.idx()].size = size;
    }

    /// Returns a handle to `id` if it belongs to this tree.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<OffsetRef<'_>> {
        (id.idx() < self.nodes.len()).then_some(OffsetRef { tree: self, id })
    }

    /// Returns a handle to `id` for use with the evaluator.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> OffsetRef<'_> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("{id:?} does not belong to this OffsetTree"),
        }
    }
}

/// A borrowed handle to a node in an [`OffsetTree`].
#[derive(Clone, Copy, Debug)]
pub struct OffsetRef<'a> {
    tree: &'a OffsetTree,
    id: NodeId,
}

impl OffsetRef<'_> {
    /// The id of this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    fn entry(&self) -> &Entry {
        &self.tree.nodes[self.id.idx()]
    }
}

impl OffsetNode for OffsetRef<'_> {
    fn offset_size(&self) -> Size {
        self.entry().size
    }

    fn offset_origin(&self) -> Vec2 {
        self.entry().origin
    }

    fn offset_parent(&self) -> Result<Option<Self>, InViewError> {
        match self.entry().parent {
            None => Ok(None),
            Some(parent) => self.tree.get(parent).map(Some).ok_or(InViewError::BrokenChain),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{NodeId, OffsetTree};
    use crate::{InViewError, OffsetNode, element_rect};

    #[test]
    fn nested_nodes_accumulate_offsets() {
        let mut tree = OffsetTree::new();
        let body = tree.insert(None, Vec2::new(8.0, 8.0), Size::new(800.0, 2_000.0));
        let section = tree.insert(Some(body), Vec2::new(0.0, 400.0), Size::new(800.0, 600.0));
        let img = tree.insert(Some(section), Vec2::new(20.0, 30.0), Size::new(100.0, 50.0));

        assert_eq!(tree.len(), 3);
        assert_eq!(
            element_rect(&tree.node(img)).unwrap(),
            Rect::new(28.0, 438.0, 128.0, 488.0)
        );
    }

    #[test]
    fn detached_node_only_counts_itself() {
        let mut tree = OffsetTree::new();
        let body = tree.insert(None, Vec2::ZERO, Size::new(800.0, 2_000.0));
        let item = tree.insert(Some(body), Vec2::new(0.0, 500.0), Size::new(10.0, 10.0));
        tree.set_origin(body, Vec2::new(0.0, 100.0));
        assert_eq!(element_rect(&tree.node(item)).unwrap().y0, 600.0);

        tree.set_offset_parent(item, None);
        assert_eq!(element_rect(&tree.node(item)).unwrap().y0, 500.0);
    }

    #[test]
    fn cyclic_chain_is_reported() {
        let mut tree = OffsetTree::new();
        let a = tree.insert(None, Vec2::ZERO, Size::new(1.0, 1.0));
        let b = tree.insert(Some(a), Vec2::ZERO, Size::new(1.0, 1.0));
        tree.set_offset_parent(a, Some(b));

        assert!(matches!(
            element_rect(&tree.node(b)),
            Err(InViewError::ChainTooDeep { .. })
        ));
    }

    #[test]
    fn parent_from_another_tree_breaks_the_chain() {
        let mut small = OffsetTree::new();
        let foreign = small.insert(None, Vec2::ZERO, Size::new(1.0, 1.0));
        let _ = small.insert(Some(foreign), Vec2::ZERO, Size::new(1.0, 1.0));
        let stray = small.insert(None, Vec2::ZERO, Size::new(1.0, 1.0));

        let mut tree = OffsetTree::new();
        let item = tree.insert(None, Vec2::new(0.0, 300.0), Size::new(10.0, 10.0));
        tree.set_offset_parent(item, Some(stray));

        assert_eq!(element_rect(&tree.node(item)), Err(InViewError::BrokenChain));
    }

    #[test]
    fn foreign_ids_are_not_resolved() {
        let tree = OffsetTree::new();
        assert!(tree.is_empty());
        assert!(tree.get(NodeId(3)).is_none());

        let mut other = OffsetTree::new();
        let id = other.insert(None, Vec2::ZERO, Size::new(4.0, 4.0));
        other.set_size(id, Size::new(5.0, 6.0));
        assert_eq!(other.node(id).offset_size(), Size::new(5.0, 6.0));
        assert_eq!(other.node(id).id(), id);
    }
}
