//! An ordered container built on a plain (unbalanced) Binary Search Tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. Here a `Node` stores a single
//! element, which is also what the tree is ordered by, and up to two child
//! `Node`s. The invariants kept by [`OrderedTree`] are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a value
//!    less than or equal to its own value.
//! 2. For every `Node`, all the `Node`s in its right subtree have a value
//!    greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` where `height` is the longest path from the
//! root `Node` to a leaf `Node`. Nothing rebalances the tree, so the height
//! depends entirely on insertion order: shuffled input gives roughly
//! `O(lg N)`, sorted input gives `N`. Sorted iteration falls out of the
//! invariants by visiting the left subtree, then the subtree root, then the
//! right subtree.
//!
//! ## Duplicates
//!
//! Whether equal elements can be stored more than once is fixed per tree by
//! its [`Policy`]. A [`Policy::Set`] tree silently ignores a second insert of
//! an equal element. A [`Policy::Multiset`] tree keeps both, the newer one
//! landing in the left subtree of the older.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let mut tree = OrderedTree::multiset();
//! tree.extend([3, 1, 3, 2]);
//!
//! assert_eq!(tree.len(), 4);
//! assert_eq!(tree.traversal(Order::Descending).copied().collect::<Vec<_>>(), [3, 3, 2, 1]);
//!
//! // One entry at a time.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert!(tree.contains(&3));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod iter;
pub mod tree;


pub use config::{Order, Policy};
pub use error::{Error, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use tree::OrderedTree;
