//! Checks whether a binary tree satisfies the binary search tree ordering.
//!
//! Comparing each node with its children is not enough: in
//!
//! ```text
//!     5
//!    / \
//!   1   6
//!      / \
//!     3   7
//! ```
//!
//! every parent/child pair is ordered but `3` sits in the right subtree of `5`. Instead each node
//! inherits an open range `(lower, upper)` from its ancestors: going left narrows the upper bound
//! to the parent's value and going right narrows the lower bound.
//!
//! # Examples
//!
//! ```
//! use containers::btree::{bst, Tree};
//!
//! let less = |a: &i64, b: &i64| a < b;
//!
//! let tree = Tree::from_level_order(vec![Some(2), Some(1), Some(3)]).unwrap();
//! assert!(bst::is_bst(Some(tree.root()), less, &i64::MIN, &i64::MAX));
//!
//! let tree = Tree::from_level_order(vec![Some(5), Some(1), Some(6), None, None, Some(3), Some(7)])
//!     .unwrap();
//! assert!(!tree.is_bst_by(less, &i64::MIN, &i64::MAX));
//! ```

use tracing::trace;

use super::{Node, Tree};

/// Returns whether every node below `root` lies strictly inside the range its ancestors allow.
///
/// `less` must be a strict total order. `lower` and `upper` stand in for "no constraint" and are
/// usually the smallest and largest values of `T`. Because the bounds are exclusive, a node whose
/// value equals one of them fails the check. An empty tree (`None`) is a binary search tree.
pub fn is_bst<T, F>(root: Option<&Node<T>>, less: F, lower: &T, upper: &T) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    within(root, &less, lower, upper)
}

fn within<T, F>(node: Option<&Node<T>>, less: &F, lower: &T, upper: &T) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    let node = match node {
        Some(node) => node,
        None => return true,
    };

    let value = node.value();
    if !less(lower, value) || !less(value, upper) {
        trace!("node value outside of its inherited range");
        return false;
    }

    within(node.left(), less, lower, value) && within(node.right(), less, value, upper)
}

/// Like [`within`] but ordered by `Ord`, with `None` meaning the side is unbounded.
fn within_open<T>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool
where
    T: Ord,
{
    let node = match node {
        Some(node) => node,
        None => return true,
    };

    let value = node.value();
    let above_lower = lower.map_or(true, |lower| lower < value);
    let below_upper = upper.map_or(true, |upper| value < upper);
    if !above_lower || !below_upper {
        trace!("node value outside of its inherited range");
        return false;
    }

    within_open(node.left(), lower, Some(value)) && within_open(node.right(), Some(value), upper)
}

impl<T> Tree<T> {
    /// [`is_bst`] applied to this tree's root.
    pub fn is_bst_by<F>(&self, less: F, lower: &T, upper: &T) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        is_bst(Some(self.root()), less, lower, upper)
    }

    /// Whether this tree is a binary search tree under `T`'s own ordering. No sentinel bounds are
    /// needed so every value of `T`, including its minimum and maximum, is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::btree::Tree;
    ///
    /// let tree = Tree::from_level_order(vec![Some(0u8), None, Some(u8::MAX)]).unwrap();
    /// assert!(tree.is_search_tree());
    ///
    /// let tree = Tree::from_level_order(vec![Some("b"), Some("c"), Some("a")]).unwrap();
    /// assert!(!tree.is_search_tree());
    /// ```
    pub fn is_search_tree(&self) -> bool
    where
        T: Ord,
    {
        within_open(Some(self.root()), None, None)
    }
}
