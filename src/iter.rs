//! Lazy traversals over an [`OrderedTree`][crate::OrderedTree].
//!
//! None of these recurse. Each one keeps its own stack of pending work so a tree that has
//! degenerated into a long chain can be walked without blowing the call stack.

use std::iter::FusedIterator;

use crate::config::Order;
use crate::tree::{Link, Node};

/// One unit of pending work: either hand out an element or split a subtree into its parts.
enum Work<N, V> {
    Visit(V),
    Expand(N),
}

/// Pushes the parts of a split node so that popping them yields `order`'s visiting sequence.
fn schedule<N, V>(
    pending: &mut Vec<Work<N, V>>,
    order: Order,
    value: V,
    left: Option<N>,
    right: Option<N>,
) {
    match order {
        Order::Ascending => {
            pending.extend(right.map(Work::Expand));
            pending.push(Work::Visit(value));
            pending.extend(left.map(Work::Expand));
        }
        Order::Descending => {
            pending.extend(left.map(Work::Expand));
            pending.push(Work::Visit(value));
            pending.extend(right.map(Work::Expand));
        }
        Order::FromRoot => {
            pending.extend(right.map(Work::Expand));
            pending.extend(left.map(Work::Expand));
            pending.push(Work::Visit(value));
        }
    }
}

/// Borrowing iterator over the elements of a tree in a chosen [`Order`].
///
/// Created by [`OrderedTree::iter`][crate::OrderedTree::iter] and
/// [`OrderedTree::traversal`][crate::OrderedTree::traversal].
pub struct Iter<'a, T> {
    order: Order,
    pending: Vec<Work<&'a Node<T>, &'a T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, order: Order, len: usize) -> Self {
        Self {
            order,
            pending: root.as_deref().map(Work::Expand).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(work) = self.pending.pop() {
            match work {
                Work::Visit(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Work::Expand(node) => schedule(
                    &mut self.pending,
                    self.order,
                    &node.value,
                    node.left.as_deref(),
                    node.right.as_deref(),
                ),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        let pending = self
            .pending
            .iter()
            .map(|work| match work {
                Work::Visit(value) => Work::Visit(*value),
                Work::Expand(node) => Work::Expand(*node),
            })
            .collect();
        Self {
            order: self.order,
            pending,
            remaining: self.remaining,
        }
    }
}

/// Mutably borrowing iterator over the elements of a tree in a chosen [`Order`].
///
/// Created by [`OrderedTree::traversal_mut`][crate::OrderedTree::traversal_mut].
///
/// # Ordering precondition
///
/// Elements handed out by this iterator may be changed in place **only if the change keeps
/// every element in the same position relative to all the others**. Nothing checks this. If
/// it is violated the tree's ordering is silently corrupted and every later operation gives
/// unspecified (though memory safe) results.
pub struct IterMut<'a, T> {
    order: Order,
    pending: Vec<Work<&'a mut Node<T>, &'a mut T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(root: &'a mut Link<T>, order: Order, len: usize) -> Self {
        Self {
            order,
            pending: root.as_deref_mut().map(Work::Expand).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(work) = self.pending.pop() {
            match work {
                Work::Visit(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
                Work::Expand(node) => {
                    // Splitting the node hands out disjoint borrows of its three parts.
                    let Node { value, left, right } = node;
                    schedule(
                        &mut self.pending,
                        self.order,
                        value,
                        left.as_deref_mut(),
                        right.as_deref_mut(),
                    );
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a tree in ascending order.
///
/// Created by `OrderedTree::into_iter`. Entries are freed as the iterator moves past them.
pub struct IntoIter<T> {
    /// Entries whose left subtree has already been queued, deepest on top.
    spine: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            spine: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.spine.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.spine.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Right subtrees still hang off the spine; drain them one entry at a time.
        for _ in self.by_ref() {}
    }
}
