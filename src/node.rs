//! Tree nodes for [`VectorTree`](crate::VectorTree).
//!
//! Two node kinds form the tree: leaves own a buffer of elements, interior
//! nodes own an ordered run of child references. Children are homogeneous
//! per level (a parent of leaves holds only leaves), so the kinds are
//! expressed as a sum type per slot rather than a trait hierarchy.
//!
//! Child references have shared ownership: a node stays alive as long as any
//! tree transitively reaches it. `Clone` on a node is *shallow* — an
//! interior copy bumps the reference counts of its children — which is
//! exactly the copy performed along a path during an update. Duplicating a
//! whole subtree is the separate, explicit [`Node::deep_clone`].

use crate::ReferenceCounter;

/// Shared reference to a node.
pub(crate) type NodeRef<T> = ReferenceCounter<Node<T>>;

/// A single node of the tree.
#[derive(Debug, Clone)]
pub(crate) enum Node<T> {
    /// An interior node holding up to `B` children, left-packed.
    Interior(Vec<NodeRef<T>>),
    /// A leaf node holding up to `B` elements.
    Leaf(Vec<T>),
}

impl<T> Node<T> {
    /// A fresh interior node with no children.
    ///
    /// The buffer is reserved up front so that growing the child run never
    /// reallocates.
    pub(crate) fn interior(fan_out: usize) -> Self {
        Self::Interior(Vec::with_capacity(fan_out))
    }

    /// A fresh leaf with an empty buffer.
    pub(crate) fn leaf(fan_out: usize) -> Self {
        Self::Leaf(Vec::with_capacity(fan_out))
    }

    /// The number of live slots: children for an interior node, elements
    /// for a leaf.
    #[cfg(test)]
    pub(crate) fn occupancy(&self) -> usize {
        match self {
            Self::Interior(children) => children.len(),
            Self::Leaf(items) => items.len(),
        }
    }
}

impl<T: Clone> Node<T> {
    /// Duplicates the entire subtree below (and including) this node.
    ///
    /// Unlike `Clone`, no node is shared with the original: every interior
    /// and leaf node in the result is freshly allocated with a reference
    /// count of one, so the caller may mutate the copy throughout.
    pub(crate) fn deep_clone(&self) -> NodeRef<T> {
        match self {
            Self::Interior(children) => ReferenceCounter::new(Self::Interior(
                children.iter().map(|child| child.deep_clone()).collect(),
            )),
            Self::Leaf(items) => ReferenceCounter::new(Self::Leaf(items.clone())),
        }
    }

    /// Applies `function` to every element of the subtree in index order.
    ///
    /// Requires unique ownership of every node below, which
    /// [`Node::deep_clone`] guarantees; a shared node reached here would be
    /// copied by `make_mut` rather than mutated, so the traversal stays
    /// correct either way.
    pub(crate) fn for_each_mut<F>(&mut self, function: &mut F)
    where
        F: FnMut(&mut T),
    {
        match self {
            Self::Interior(children) => {
                for child in children {
                    ReferenceCounter::make_mut(child).for_each_mut(function);
                }
            }
            Self::Leaf(items) => {
                for item in items {
                    function(item);
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
