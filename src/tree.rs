//! An unbalanced BST that owns its elements directly: the element is its own key.
//!
//! Nothing here rebalances. Feeding the tree sorted input turns it into a linked list, which
//! is why every walk in this module (and in [`iter`][crate::iter]) keeps an explicit stack
//! instead of recursing.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Error, Order, OrderedTree};
//!
//! let mut tree = OrderedTree::new();
//! for x in [5, 11, 18, -1, 4, 1] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [-1, 1, 4, 5, 11, 18]);
//! assert_eq!(tree.minimum(), Ok(&-1));
//! assert_eq!(tree.maximum(), Ok(&18));
//!
//! // Removing returns the element that was stored.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.find(&5), Err(Error::NotFound));
//!
//! let mut from_root = Vec::new();
//! tree.traverse(Order::FromRoot, |x| from_root.push(*x));
//! assert_eq!(from_root, [11, -1, 4, 1, 18]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::config::{Order, Policy};
use crate::error::{Error, Result};
use crate::iter::{IntoIter, Iter, IterMut};

/// An owning link to a subtree. `None` is an empty slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// One entry of the tree: an element and its two children.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree ordered by the elements themselves.
///
/// For every entry, everything in its left subtree is `<=` it and everything in its right
/// subtree is `>` it. Whether equal elements may be stored more than once is decided by the
/// [`Policy`] the tree was built with.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
    policy: Policy,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        teardown(self.root.take());
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    /// Copies the tree entry for entry, so the clone has exactly the same shape.
    fn clone(&self) -> Self {
        // Root, right, left. Reversed that's post-order so both children of an entry are built
        // before the entry itself.
        let mut sources = Vec::with_capacity(self.len);
        let mut pending: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = pending.pop() {
            sources.push(node);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for source in sources.into_iter().rev() {
            let right = source.right.as_ref().and_then(|_| built.pop());
            let left = source.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: source.value.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
            policy: self.policy,
        }
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty tree that ignores duplicate inserts ([`Policy::Set`]).
    pub fn new() -> Self {
        Self::with_policy(Policy::Set)
    }

    /// Generates a new, empty tree that keeps every inserted element, duplicates included
    /// ([`Policy::Multiset`]).
    pub fn multiset() -> Self {
        Self::with_policy(Policy::Multiset)
    }

    /// Generates a new, empty tree with the given insertion policy.
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            root: None,
            len: 0,
            policy,
        }
    }

    /// The insertion policy this tree was built with.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// The number of entries in the tree.
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of entries on the longest path from the root down to a leaf. An empty tree
    /// has a height of 0 and a tree built from sorted input has a height equal to its length.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            pending.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            pending.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Drops every entry, leaving the tree empty. The policy is kept.
    pub fn clear(&mut self) {
        teardown(self.root.take());
        self.len = 0;
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.traversal(Order::Ascending)
    }

    /// Iterates over the elements in the given order.
    pub fn traversal(&self, order: Order) -> Iter<'_, T> {
        Iter::new(&self.root, order, self.len)
    }

    /// Iterates mutably over the elements in the given order.
    ///
    /// # Ordering precondition
    ///
    /// An element may only be changed if it keeps its position relative to every other
    /// element. See [`IterMut`] for what happens otherwise.
    pub fn traversal_mut(&mut self, order: Order) -> IterMut<'_, T> {
        IterMut::new(&mut self.root, order, self.len)
    }

    /// Calls `visit` on every element, in the given order, before returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Order::Descending, |x| seen.push(*x));
    /// assert_eq!(seen, [3, 2, 1]);
    /// ```
    pub fn traverse<F>(&self, order: Order, visit: F)
    where
        F: FnMut(&T),
    {
        self.traversal(order).for_each(visit);
    }

    /// Calls `visit` on every element, in the given order, letting it change elements in
    /// place.
    ///
    /// # Ordering precondition
    ///
    /// **`visit` must not change any element's position relative to the others.** Shifting
    /// every element by the same amount is fine; anything that reorders them silently breaks
    /// the tree and leaves every later operation with unspecified results. This is not
    /// checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// tree.traverse_mut(Order::FromRoot, |x| *x += 10);
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [11, 12, 13]);
    /// ```
    pub fn traverse_mut<F>(&mut self, order: Order, visit: F)
    where
        F: FnMut(&mut T),
    {
        self.traversal_mut(order).for_each(visit);
    }

    /// Inserts `value`, returning whether a new entry was created.
    ///
    /// Equal-or-less goes left on the way down. Under [`Policy::Set`] meeting an equal element
    /// on the way down drops `value` and leaves the tree untouched. Under
    /// [`Policy::Multiset`] the value always gets its own entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut set = OrderedTree::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    ///
    /// let mut bag = OrderedTree::multiset();
    /// assert!(bag.insert(1));
    /// assert!(bag.insert(1));
    /// assert_eq!(bag.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let policy = self.policy;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Equal if policy == Policy::Set => {
                    trace!("element already present, insert skipped");
                    return false;
                }
                Ordering::Less | Ordering::Equal => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Whether an element equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.descend(value).is_some()
    }

    /// Finds the stored element equal to `value`.
    ///
    /// Fails with [`Error::EmptyContainer`] if the tree is empty and [`Error::NotFound`] if
    /// nothing matches.
    pub fn find(&self, value: &T) -> Result<&T>
    where
        T: Ord,
    {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.descend(value)
            .map(|node| &node.value)
            .ok_or(Error::NotFound)
    }

    /// Finds the stored element equal to `value` and hands it out mutably.
    ///
    /// Fails like [`OrderedTree::find`].
    ///
    /// # Ordering precondition
    ///
    /// **The element must keep its position relative to every other element.** Turning `11`
    /// into `12` in a tree holding `5, 11, 18` is fine; turning it into `20` is not. A change
    /// that reorders elements silently corrupts the tree: later lookups, inserts and removals
    /// give unspecified results. This is not checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [5, 11, 18].into_iter().collect();
    /// *tree.find_mut(&11)? += 1;
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 12, 18]);
    /// # Ok::<(), ordered_tree::Error>(())
    /// ```
    pub fn find_mut(&mut self, value: &T) -> Result<&mut T>
    where
        T: Ord,
    {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }

        let mut cursor = self.root.as_deref_mut();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => return Ok(&mut node.value),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        Err(Error::NotFound)
    }

    /// The smallest element. Fails with [`Error::EmptyContainer`] if there isn't one.
    pub fn minimum(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyContainer)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// The largest element. Fails with [`Error::EmptyContainer`] if there isn't one.
    pub fn maximum(&self) -> Result<&T> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyContainer)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Removes the first entry equal to `value` met on the way down from the root and returns
    /// its element. If nothing matches, nothing happens and `None` is returned.
    ///
    /// An entry with two children isn't unlinked itself. It takes over the element of a
    /// neighbour that has at most one child and that neighbour is unlinked instead: the
    /// in-order successor for [`Policy::Set`], the in-order predecessor for
    /// [`Policy::Multiset`] (so duplicates always stay on the left).
    ///
    /// Under [`Policy::Multiset`] only one entry goes per call; any other equal entries stay.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let policy = self.policy;
        let slot = locate(&mut self.root, value)?;
        let removed = unlink(slot, policy)?;
        self.len -= 1;
        Some(removed)
    }

    /// Walks down from the root to the first entry equal to `value`.
    fn descend(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Checks the ordering bounds of every entry and that `len` matches what is reachable.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self)
    where
        T: Ord + fmt::Debug,
    {
        let mut reachable = 0;
        // (entry, exclusive lower bound, inclusive upper bound)
        let mut pending: Vec<(&Node<T>, Option<&T>, Option<&T>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        while let Some((node, above, at_most)) = pending.pop() {
            reachable += 1;
            if let Some(above) = above {
                assert!(node.value > *above, "{:?} is right of {:?}", node.value, above);
            }
            if let Some(at_most) = at_most {
                assert!(node.value <= *at_most, "{:?} is left of {:?}", node.value, at_most);
            }
            pending.extend(
                node.left
                    .as_deref()
                    .map(|left| (left, above, Some(&node.value))),
            );
            pending.extend(
                node.right
                    .as_deref()
                    .map(|right| (right, Some(&node.value), at_most)),
            );
        }
        assert_eq!(reachable, self.len);
        assert_eq!(self.root.is_none(), self.len == 0);
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    /// Builds a [`Policy::Set`] tree, inserting in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its elements in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);
        IntoIter::new(self.root.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Finds the slot holding the first entry equal to `value` on the way down from `slot`.
fn locate<'a, T>(mut slot: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>>
where
    T: Ord,
{
    loop {
        match value.cmp(&slot.as_deref()?.value) {
            Ordering::Equal => return Some(slot),
            Ordering::Less => slot = &mut slot.as_mut()?.left,
            Ordering::Greater => slot = &mut slot.as_mut()?.right,
        }
    }
}

/// Removes the entry in `slot` from the tree and returns its element.
fn unlink<T>(slot: &mut Link<T>, policy: Policy) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        let heir = match policy {
            Policy::Set => take_leftmost(&mut node.right),
            Policy::Multiset => take_rightmost(&mut node.left),
        };
        trace!(%policy, "entry with two children takes over a neighbour's element");
        return heir.map(|heir| mem::replace(&mut node.value, heir));
    }

    let Node { value, left, right } = *slot.take()?;
    let has_child = left.is_some() || right.is_some();
    trace!(has_child, "unlinking entry");
    *slot = left.or(right);
    Some(value)
}

/// Unlinks the leftmost entry below `slot`, splicing in its right child, and returns its
/// element.
fn take_leftmost<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_ref()?.left.is_some() {
        slot = &mut slot.as_mut()?.left;
    }
    let Node { value, right, .. } = *slot.take()?;
    *slot = right;
    Some(value)
}

/// Mirror image of [`take_leftmost`].
fn take_rightmost<T>(mut slot: &mut Link<T>) -> Option<T> {
    while slot.as_ref()?.right.is_some() {
        slot = &mut slot.as_mut()?.right;
    }
    let Node { value, left, .. } = *slot.take()?;
    *slot = left;
    Some(value)
}

/// Drops a whole subtree one entry at a time.
fn teardown<T>(root: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
