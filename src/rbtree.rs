//! Module provide ordered-set implemented by [RbTree] type.
//!
//! RbTree is implemented using [red-black][wiki-rbt] tree, with parent
//! links, balanced bottom-up after each insert.
//!
//! - Each entry in RbTree instance is a key.
//! - Parametrised over `key-type`.
//! - Insert, contains, in-order iteration.
//! - Level order dump of keys and colors, for inspection.
//! - No deletion.
//! - Not thread safe.
//!
//! Inspecting the shape of a tree:
//!
//! ```
//! use rbfix::{Color, RbTree};
//!
//! let mut index: RbTree<u32> = RbTree::new();
//! for key in 1..8 {
//!     index.insert(key).unwrap();
//! }
//!
//! let stats = index.validate().unwrap();
//! assert_eq!(stats.n_count, 7);
//! assert!(stats.depth <= 5);
//!
//! let shapes = index.level_order();
//! let root = &shapes[0];
//! assert_eq!(root.color, Color::Black);
//! assert_eq!(root.parent, None);
//!
//! let keys: Vec<u32> = index.iter().cloned().collect();
//! assert_eq!(keys, vec![1, 2, 3, 4, 5, 6, 7]);
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use log::{debug, trace};

use std::{borrow::Borrow, cmp, collections::VecDeque, fmt};

use crate::{
    fixup::fixup,
    node::NodeRef,
    store::{Iter, Store},
    Color, Duplicates, Error, Result,
};

/// RbTree manage a single instance of in-memory ordered-set using
/// [red-black][rbt] tree.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
pub struct RbTree<K> {
    store: Store<K>,
    dups: Duplicates,
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        RbTree::new()
    }
}

impl<K> RbTree<K> {
    /// Create an empty instance of RbTree, rejecting duplicate keys.
    pub fn new() -> RbTree<K> {
        RbTree::with_duplicates(Duplicates::default())
    }

    /// Create an empty instance of RbTree, with `dups` policy for keys
    /// that are already present.
    pub fn with_duplicates(dups: Duplicates) -> RbTree<K> {
        RbTree {
            store: Store::new(),
            dups,
        }
    }
}

/// Maintenance API.
impl<K> RbTree<K> {
    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Return the duplicate-key policy for this instance.
    #[inline]
    pub fn to_duplicates(&self) -> Duplicates {
        self.dups
    }

    /// Return number of nodes on the longest path from root, zero for
    /// an empty tree.
    pub fn height(&self) -> usize {
        let root = self.store.to_root();
        let mut stack: Vec<(NodeRef, usize)> = root.map(|r| (r, 1)).into_iter().collect();

        let mut height = 0;
        while let Some((nref, depth)) = stack.pop() {
            height = cmp::max(height, depth);
            stack.extend(self.store.left(nref).map(|n| (n, depth + 1)));
            stack.extend(self.store.right(nref).map(|n| (n, depth + 1)));
        }
        height
    }

    #[allow(dead_code)]
    #[cfg(test)]
    pub fn pretty_print(&self)
    where
        K: fmt::Debug,
    {
        if let Some(root) = self.store.to_root() {
            self.pretty_print_node(root, "".to_string())
        }
    }

    #[cfg(test)]
    fn pretty_print_node(&self, nref: NodeRef, mut prefix: String)
    where
        K: fmt::Debug,
    {
        let node = self.store.as_node(nref);
        match node.is_black() {
            true => println!("{}(b)<{:?}>", prefix, node.key),
            false => println!("{}(r)<{:?}>", prefix, node.key),
        }
        prefix.push_str("  ");
        if let Some(l) = node.left {
            self.pretty_print_node(l, prefix.clone())
        }
        if let Some(r) = node.right {
            self.pretty_print_node(r, prefix)
        }
    }
}

impl<K> RbTree<K> {
    /// Insert key into this instance. Fails with [Error::DuplicateKey] if
    /// key is already present and duplicates are rejected, tree is left
    /// untouched in that case.
    pub fn insert(&mut self, key: K) -> Result<()>
    where
        K: Ord,
    {
        self.do_insert(key).map(|_| ())
    }

    // return the number of fixup cases applied.
    fn do_insert(&mut self, key: K) -> Result<usize>
    where
        K: Ord,
    {
        let nref = match self.store.insert_leaf(key, self.dups) {
            Some(nref) => nref,
            None => {
                debug!("insert(): rejected duplicate key, len:{}", self.len());
                return err_at!(DuplicateKey, msg: "key already present");
            }
        };

        let n = fixup(&mut self.store, nref);
        trace!("insert(): {:?} fixed in {} steps", nref, n);

        let root = self.store.root_of(nref);
        debug_assert_eq!(Some(root), self.store.to_root());
        self.store.set_black(root);

        Ok(n)
    }

    /// Check whether key is present.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.store.find(key).is_some()
    }

    /// Return color of the node holding key.
    pub fn color_of<Q>(&self, key: &Q) -> Option<Color>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.store.find(key).map(|nref| self.store.to_color(nref))
    }

    /// Return an iterator over all keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.store.iter()
    }

    /// Return every node's key, color and links, root first and then
    /// level by level, left to right.
    pub fn level_order(&self) -> Vec<Shape<'_, K>> {
        let store = &self.store;
        let key_of = move |nref: NodeRef| store.as_node(nref).as_key();

        let mut queue: VecDeque<NodeRef> = store.to_root().into_iter().collect();
        let mut shapes = vec![];
        while let Some(nref) = queue.pop_front() {
            let node = store.as_node(nref);
            queue.extend(node.left);
            queue.extend(node.right);

            shapes.push(Shape {
                key: node.as_key(),
                color: node.to_color(),
                parent: node.parent.map(key_of),
                left: node.left.map(key_of),
                right: node.right.map(key_of),
            });
        }
        shapes
    }

    /// Render keys in level order, like `[ 2, 1, 3, 5 ]`.
    pub fn to_level_order_string(&self) -> String
    where
        K: fmt::Display,
    {
        let keys: Vec<String> = self
            .level_order()
            .into_iter()
            .map(|shape| shape.key.to_string())
            .collect();

        match keys.is_empty() {
            true => "[ ]".to_string(),
            false => format!("[ {} ]", keys.join(", ")),
        }
    }

    /// Validate tree with following rules:
    ///
    /// * Root is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Every child links back to its parent.
    /// * Make sure keys are in sorted order.
    /// * Height is within `2 * log2(n + 1)`.
    ///
    /// Additionally return statistics on the tree, refer to [Stats].
    pub fn validate(&self) -> Result<Stats>
    where
        K: Ord + fmt::Debug,
    {
        let root = self.store.to_root();
        if self.store.is_red(root) {
            return err_at!(Fatal, msg: "red root {:?}", root);
        }

        let (n_count, n_blacks, depth) = (0, 0, 1);
        let (n_count, n_blacks, depth) =
            self.validate_tree(root, None, false, n_count, n_blacks, depth)?;
        if n_count != self.len() {
            return err_at!(Fatal, msg: "mismatch in count {} != {}", n_count, self.len());
        }

        let mut iter = self.iter();
        if let Some(mut prev) = iter.next() {
            for key in iter {
                let sorted = match self.dups {
                    Duplicates::Reject => prev < key,
                    Duplicates::InsertRight => prev <= key,
                };
                if !sorted {
                    return err_at!(Fatal, msg: "sort {:?} {:?}", prev, key);
                }
                prev = key;
            }
        }

        let bound = 2.0 * ((n_count + 1) as f64).log2();
        if (depth as f64) > bound {
            return err_at!(Fatal, msg: "depth {} for {} entries", depth, n_count);
        }

        Ok(Stats {
            n_count,
            n_blacks,
            depth,
        })
    }

    fn validate_tree(
        &self,
        node: Option<NodeRef>,
        parent: Option<NodeRef>,
        fromred: bool,
        mut n_count: usize,
        mut n_blacks: usize,
        depth: usize,
    ) -> Result<(usize, usize, usize)>
    where
        K: Ord + fmt::Debug,
    {
        let node = match node {
            Some(node) => node,
            None => return Ok((n_count, n_blacks, depth - 1)),
        };
        n_count += 1;

        if self.store.parent(node) != parent {
            let key = self.store.as_node(node).as_key();
            return err_at!(Fatal, msg: "parent link for {:?}", key);
        }

        let red = self.store.is_red(Some(node));
        if fromred && red {
            let key = self.store.as_node(node).as_key();
            return err_at!(Fatal, msg: "consecutive reds at {:?}", key);
        }

        if !red {
            n_blacks += 1;
        }

        let (left, rigt) = (self.store.left(node), self.store.right(node));
        let (n_count, lb, ld) =
            self.validate_tree(left, Some(node), red, n_count, n_blacks, depth + 1)?;
        let (n_count, rb, rd) =
            self.validate_tree(rigt, Some(node), red, n_count, n_blacks, depth + 1)?;
        if lb != rb {
            return err_at!(Fatal, msg: "unbalanced blacks {} {}", lb, rb);
        }

        Ok((n_count, lb, cmp::max(ld, rd)))
    }
}

/// Statistics on [RbTree], returned by [RbTree::validate].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of keys.
    pub n_count: usize,
    /// Number of black nodes on any path from root to an empty child
    /// slot, root included.
    pub n_blacks: usize,
    /// Number of nodes on the longest path from root.
    pub depth: usize,
}

/// A node in [RbTree::level_order] listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape<'a, K> {
    pub key: &'a K,
    pub color: Color,
    pub parent: Option<&'a K>,
    pub left: Option<&'a K>,
    pub right: Option<&'a K>,
}

#[cfg(test)]
#[path = "rbtree_test.rs"]
mod rbtree_test;
