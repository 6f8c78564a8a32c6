//! Package implement a Red Black tree, balanced by parent-linked insert
//! fixup.
//!
//! Quoting from [Wikipedia][wiki-rbt]:
//!
//! > In a red–black tree, each node stores an extra bit representing
//! > "color", used to ensure that the tree remains balanced during
//! > insertions and deletions.
//!
//! [RbTree] is an ordered set of keys. Each insert attaches the key as a
//! red leaf and then walks upward from that leaf, repairing the tree by
//! recoloring and rotating until following rules hold again:
//!
//! * Root is black.
//! * No red node has a red parent.
//! * Every path from a node to an empty child slot passes through the
//!   same number of black nodes.
//! * Keys are in sorted order, in-order.
//!
//! - Parametrised over `key-type`.
//! - Insert, lookup and in-order iteration.
//! - Nodes are kept in an arena, parent links are plain slot indices.
//! - No deletion.
//! - Not thread safe, callers must serialize mutations.
//!
//! Constructing a new [RbTree] instance and inserting keys:
//!
//! ```
//! use rbfix::RbTree;
//!
//! let mut index: RbTree<u32> = RbTree::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! for key in [3, 2, 1, 5].iter() {
//!     index.insert(*key).unwrap();
//! }
//! assert_eq!(index.len(), 4);
//! assert!(index.contains(&5));
//! assert_eq!(index.to_level_order_string(), "[ 2, 1, 3, 5 ]");
//!
//! index.validate().unwrap();
//! ```
//!
//! Duplicate keys are rejected by default, refer to [Duplicates] for
//! other policies:
//!
//! ```
//! use rbfix::{Duplicates, Error, RbTree};
//!
//! let mut index: RbTree<u32> = RbTree::new();
//! index.insert(10).unwrap();
//! assert!(matches!(index.insert(10), Err(Error::DuplicateKey(_, _))));
//!
//! let mut index: RbTree<u32> = RbTree::with_duplicates(Duplicates::InsertRight);
//! index.insert(10).unwrap();
//! index.insert(10).unwrap();
//! assert_eq!(index.len(), 2);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, msg: "unbalanced blacks {} {}", lb, rb);
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
}

mod fixup;
mod node;
mod rbtree;
mod store;

pub use rbtree::{RbTree, Shape, Stats};
pub use store::Iter;

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
    DuplicateKey(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            DuplicateKey(p, msg) => write!(f, "{} DuplicateKey: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;

/// Color of a node, as reported by [RbTree::color_of] and [Shape].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Policy for inserting a key that is already present in the tree.
///
/// Whichever policy is chosen applies to every insert on that instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicates {
    /// Leave the tree untouched and fail with [Error::DuplicateKey].
    Reject,
    /// Treat the new key as greater than its equals and descend right.
    /// In-order traversal then yields keys in non-decreasing order.
    InsertRight,
}

impl Default for Duplicates {
    fn default() -> Self {
        Duplicates::Reject
    }
}
