//! Depth and leaf count
//!
//! Both walk the tree with an explicit stack, so arbitrarily deep trees do
//! not grow the call stack.

use super::types::Tree;

/// Number of levels: 1 for a leaf, otherwise 1 + the deepest child
#[must_use]
pub fn depth<T>(tree: &Tree<T>) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(tree, 1_usize)];

    while let Some((node, level)) = stack.pop() {
        deepest = deepest.max(level);
        stack.extend(node.children().iter().map(|child| (child, level + 1)));
    }

    deepest
}

/// Number of nodes without children
#[must_use]
pub fn leaf_count<T>(tree: &Tree<T>) -> usize {
    let mut leaves = 0;
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            leaves += 1;
        } else {
            stack.extend(node.children());
        }
    }

    leaves
}

impl<T> Tree<T> {
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        depth(self)
    }

    #[inline]
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        leaf_count(self)
    }
}
