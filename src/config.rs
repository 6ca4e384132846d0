//! The knobs a caller can turn: how duplicates are handled on insert and which order a
//! traversal visits elements in.
//!
//! Both can be parsed from text so they can come straight out of a config file or a command
//! line flag.
//!
//! ```
//! use ordered_tree::{Error, Order, Policy};
//!
//! assert_eq!("multiset".parse::<Policy>(), Ok(Policy::Multiset));
//! assert_eq!("desc".parse::<Order>(), Ok(Order::Descending));
//! assert_eq!(
//!     "sideways".parse::<Order>(),
//!     Err(Error::InvalidArgument("sideways".to_string()))
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// What `insert` does with a value equal to one already stored.
///
/// A tree picks its policy once, at construction, and keeps it for its whole life.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Inserting a value that is already present does nothing.
    #[default]
    Set,
    /// Every insert creates a new entry. Equal values pile up in the left subtree of the first
    /// equal entry met on the way down.
    Multiset,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Set => "set",
            Self::Multiset => "multiset",
        })
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "set" | "dedup" => Ok(Self::Set),
            "multiset" | "multi" => Ok(Self::Multiset),
            _ => Err(Error::InvalidArgument(s.to_string())),
        }
    }
}

/// The order a traversal visits elements in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, then the entry, then the right subtree. Yields a non-decreasing sequence.
    Ascending,
    /// Right subtree, then the entry, then the left subtree. Exactly the reverse of
    /// [`Order::Ascending`].
    Descending,
    /// The entry, then its left subtree, then its right subtree (pre-order). This follows the
    /// physical shape of the tree rather than the sorted order.
    FromRoot,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::FromRoot => "from-root",
        })
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            "from-root" | "from_root" | "root" | "pre-order" | "preorder" => Ok(Self::FromRoot),
            _ => Err(Error::InvalidArgument(s.to_string())),
        }
    }
}
