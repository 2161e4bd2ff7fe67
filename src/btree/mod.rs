//! A binary tree built from a level-order ("LeetCode style") list of slots.
//!
//! Slot `i` holds the node whose children live in slots `2i + 1` and `2i + 2`. A slot can be
//! absent (`None`), in which case there is no node there and none of the slots that would have
//! been its descendants are ever looked at, populated or not.
//!
//! # Examples
//!
//! ```
//! use containers::btree::Tree;
//!
//! //     2
//! //    / \
//! //   1   3
//! let tree = Tree::from_level_order(vec![Some(2), Some(1), Some(3)]).unwrap();
//!
//! assert_eq!(tree.pre_order_values(), vec![2, 1, 3]);
//! assert_eq!(tree.in_order_values(), vec![1, 2, 3]);
//! assert_eq!(tree.post_order_values(), vec![1, 3, 2]);
//!
//! // Children know who their parent is.
//! let left = tree.root().left().unwrap();
//! assert_eq!(left.parent().map(|p| *p.value()), Some(2));
//! ```

use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};

pub mod bst;

/// A non-empty binary tree. The tree is immutable once built and every node is freed when the
/// `Tree` is dropped.
pub struct Tree<T> {
    root: Rc<Node<T>>,
    len: usize,
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl<T> Tree<T> {
    /// Builds a tree from a level-order list of slots, moving each value into its node.
    ///
    /// Fails with [`Error::EmptyInput`] if there are no slots and with [`Error::AbsentRoot`] if
    /// the first slot is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::btree::Tree;
    /// use containers::Error;
    ///
    /// //   1
    /// //    \
    /// //     3
    /// //    / \
    /// //   6   7
    /// //
    /// // Slots 3 and 4 would be children of the absent slot 1 so they are never read.
    /// let slots = vec![Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7)];
    /// let tree = Tree::from_level_order(slots).unwrap();
    /// assert_eq!(tree.pre_order_values(), vec![1, 3, 6, 7]);
    ///
    /// let empty = Tree::<i32>::from_level_order(Vec::new());
    /// assert_eq!(empty.unwrap_err(), Error::EmptyInput);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn from_level_order<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut slots: Vec<Option<T>> = values.into_iter().collect();
        if slots.is_empty() {
            return Err(Error::EmptyInput);
        }

        let root = Node::from_slots(&mut slots, 0, &Weak::new()).ok_or(Error::AbsentRoot)?;
        let mut len = 0;
        root.walk_pre_order(&mut |_| len += 1);
        debug!(slots = slots.len(), nodes = len, "built tree");

        Ok(Self { root, len })
    }

    /// The root node. A `Tree` always has one.
    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    /// The number of nodes in the tree. This is at most the number of slots the tree was built
    /// from.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: construction refuses to build an empty tree.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// How many levels are in the tree. A tree that is just a root has a height of 1.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Calls `f` on every node, visiting each node before its left then right subtrees.
    pub fn walk_pre_order<F>(&self, mut f: F)
    where
        F: FnMut(&Node<T>),
    {
        self.root.walk_pre_order(&mut f);
    }

    /// Calls `f` on every node, visiting each node between its left and right subtrees.
    pub fn walk_in_order<F>(&self, mut f: F)
    where
        F: FnMut(&Node<T>),
    {
        self.root.walk_in_order(&mut f);
    }

    /// Calls `f` on every node, visiting each node after its left then right subtrees.
    pub fn walk_post_order<F>(&self, mut f: F)
    where
        F: FnMut(&Node<T>),
    {
        self.root.walk_post_order(&mut f);
    }

    /// Copies the values out in pre-order.
    pub fn pre_order_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_values(Node::walk_pre_order)
    }

    /// Copies the values out in in-order. For a binary search tree this is sorted.
    pub fn in_order_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_values(Node::walk_in_order)
    }

    /// Copies the values out in post-order.
    pub fn post_order_values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.collect_values(Node::walk_post_order)
    }

    fn collect_values(&self, walk: Walk<T>) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        walk(self.root(), &mut |node| values.push(node.value.clone()));

        values
    }
}

/// One of the `Node::walk_*` traversals.
type Walk<T> = fn(&Node<T>, &mut dyn FnMut(&Node<T>));

/// A node in a [`Tree`]. A node owns its children and holds a weak reference back to its parent,
/// so dropping the root frees everything below it.
pub struct Node<T> {
    value: T,
    parent: Weak<Node<T>>,
    left: Option<Rc<Node<T>>>,
    right: Option<Rc<Node<T>>>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> Node<T> {
    /// Builds the subtree rooted at slot `index`, taking values out of `slots` as it goes.
    ///
    /// Returns `None` if `index` is past the end or the slot is absent. Either way the slots under
    /// `index` are left alone.
    fn from_slots(slots: &mut [Option<T>], index: usize, parent: &Weak<Self>) -> Option<Rc<Self>> {
        let value = match slots.get_mut(index).map(Option::take) {
            None => {
                trace!(index, "slot out of range");
                return None;
            }
            Some(None) => {
                trace!(index, "absent slot, skipping its subtree");
                return None;
            }
            Some(Some(value)) => value,
        };

        // `index < slots.len()` so neither child index can overflow.
        Some(Rc::new_cyclic(|this| Self {
            value,
            parent: parent.clone(),
            left: Self::from_slots(slots, 2 * index + 1, this),
            right: Self::from_slots(slots, 2 * index + 2, this),
        }))
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The parent of this node. `None` for the root.
    pub fn parent(&self) -> Option<Rc<Self>> {
        self.parent.upgrade()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn height(&self) -> usize {
        let left = self.left().map_or(0, Self::height);
        let right = self.right().map_or(0, Self::height);

        left.max(right) + 1
    }

    fn walk_pre_order(&self, f: &mut dyn FnMut(&Self)) {
        f(self);
        if let Some(left) = self.left() {
            left.walk_pre_order(f);
        }
        if let Some(right) = self.right() {
            right.walk_pre_order(f);
        }
    }

    fn walk_in_order(&self, f: &mut dyn FnMut(&Self)) {
        if let Some(left) = self.left() {
            left.walk_in_order(f);
        }
        f(self);
        if let Some(right) = self.right() {
            right.walk_in_order(f);
        }
    }

    fn walk_post_order(&self, f: &mut dyn FnMut(&Self)) {
        if let Some(left) = self.left() {
            left.walk_post_order(f);
        }
        if let Some(right) = self.right() {
            right.walk_post_order(f);
        }
        f(self);
    }
}
