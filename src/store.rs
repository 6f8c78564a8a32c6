//! Module implement the unbalanced binary-search-tree underneath [RbTree].
//!
//! Nodes live in an arena owned by [Store] and refer to each other by
//! [NodeRef]. Child slots define the tree shape, parent slots are
//! navigational back-links kept consistent by every mutation here:
//! if `a.left == Some(b)` then `b.parent == Some(a)`, likewise for right.
//!
//! Store knows nothing about colors beyond reading and writing them,
//! balancing is done by the fixup engine on top of [Store::insert_leaf]
//! and [Store::rotate].
//!
//! [RbTree]: crate::RbTree

use log::debug;

use std::{borrow::Borrow, cmp::Ordering};

use crate::{
    node::{Node, NodeRef, Side},
    Color, Duplicates,
};

pub struct Store<K> {
    nodes: Vec<Node<K>>,
    root: Option<NodeRef>,
}

impl<K> Store<K> {
    pub fn new() -> Store<K> {
        Store {
            nodes: Vec::default(),
            root: None,
        }
    }

    /// Return number of nodes in this store.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn to_root(&self) -> Option<NodeRef> {
        self.root
    }

    #[inline]
    pub fn as_node(&self, nref: NodeRef) -> &Node<K> {
        &self.nodes[nref.0]
    }

    #[inline]
    fn as_mut_node(&mut self, nref: NodeRef) -> &mut Node<K> {
        &mut self.nodes[nref.0]
    }
}

/// Relational accessors, all total.
impl<K> Store<K> {
    #[inline]
    pub fn parent(&self, nref: NodeRef) -> Option<NodeRef> {
        self.as_node(nref).parent
    }

    #[inline]
    pub fn left(&self, nref: NodeRef) -> Option<NodeRef> {
        self.as_node(nref).left
    }

    #[inline]
    pub fn right(&self, nref: NodeRef) -> Option<NodeRef> {
        self.as_node(nref).right
    }

    #[inline]
    pub fn child(&self, nref: NodeRef, side: Side) -> Option<NodeRef> {
        self.as_node(nref).child(side)
    }

    /// Return the side of its parent `nref` hangs from, None for root.
    pub fn side_of(&self, nref: NodeRef) -> Option<Side> {
        let parent = self.parent(nref)?;
        match self.right(parent) == Some(nref) {
            true => Some(Side::Right),
            false => Some(Side::Left),
        }
    }

    #[inline]
    pub fn is_right_child(&self, nref: NodeRef) -> bool {
        self.side_of(nref) == Some(Side::Right)
    }

    /// Walk parent links up from `nref` to the node that has no parent.
    pub fn root_of(&self, mut nref: NodeRef) -> NodeRef {
        while let Some(parent) = self.parent(nref) {
            nref = parent;
        }
        nref
    }
}

/// Color accessors. An absent node is black.
impl<K> Store<K> {
    #[inline]
    pub fn is_red(&self, nref: Option<NodeRef>) -> bool {
        nref.map_or(false, |nref| !self.as_node(nref).is_black())
    }

    #[inline]
    pub fn is_black(&self, nref: Option<NodeRef>) -> bool {
        !self.is_red(nref)
    }

    #[inline]
    pub fn to_color(&self, nref: NodeRef) -> Color {
        self.as_node(nref).to_color()
    }

    #[inline]
    pub fn set_red(&mut self, nref: NodeRef) {
        self.as_mut_node(nref).set_red()
    }

    #[inline]
    pub fn set_black(&mut self, nref: NodeRef) {
        self.as_mut_node(nref).set_black()
    }

    /// Exchange colors between two nodes.
    pub fn swap_colors(&mut self, a: NodeRef, b: NodeRef) {
        let (ca, cb) = (self.to_color(a), self.to_color(b));
        self.as_mut_node(a).set_color(cb);
        self.as_mut_node(b).set_color(ca);
    }
}

impl<K> Store<K> {
    /// Attach `key` as a red leaf, in sorted position. Return None if
    /// key is already present and `dups` rejects it.
    pub fn insert_leaf(&mut self, key: K, dups: Duplicates) -> Option<NodeRef>
    where
        K: Ord,
    {
        let (mut parent, mut side) = (None, Side::Left);

        let mut cursor = self.root;
        while let Some(nref) = cursor {
            side = match key.cmp(self.as_node(nref).as_key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal if dups == Duplicates::InsertRight => Side::Right,
                Ordering::Equal => {
                    debug!("insert_leaf(): duplicate key at {:?}", nref);
                    return None;
                }
            };
            parent = Some(nref);
            cursor = self.child(nref, side);
        }

        let nref = NodeRef(self.nodes.len());
        self.nodes.push(Node::new(key, parent));
        match parent {
            Some(parent) => self.as_mut_node(parent).set_child(side, Some(nref)),
            None => self.root = Some(nref),
        }
        Some(nref)
    }

    /// Find a node holding `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<NodeRef>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cursor = self.root;
        while let Some(nref) = cursor {
            cursor = match self.as_node(nref).key.borrow().cmp(key) {
                Ordering::Less => self.right(nref),
                Ordering::Greater => self.left(nref),
                Ordering::Equal => return Some(nref),
            };
        }
        None
    }

    //              (g)                        (g)
    //               |                          |
    //             parent                     child
    //             /    \                     /   \
    //          child    c       ==>         a   parent
    //          /   \                             /   \
    //         a   inner                       inner   c
    //
    // Shown for a left child, mirrored for a right child. Colors are
    // left untouched.
    /// Pivot `child` up into `parent`'s position. `child` must be a
    /// direct child of `parent`.
    pub fn rotate(&mut self, child: NodeRef, parent: NodeRef) {
        let side = match self.side_of(child) {
            Some(side) if self.parent(child) == Some(parent) => side,
            _ => panic!(
                "rotate(): {:?} is not a child of {:?} ? Call the programmer",
                child, parent
            ),
        };
        let (grand, gside) = (self.parent(parent), self.side_of(parent));
        let inner = self.child(child, side.opposite());

        self.as_mut_node(parent).set_child(side, inner);
        if let Some(inner) = inner {
            self.as_mut_node(inner).parent = Some(parent);
        }
        self.as_mut_node(child).set_child(side.opposite(), Some(parent));
        self.as_mut_node(parent).parent = Some(child);

        self.as_mut_node(child).parent = grand;
        match (grand, gside) {
            (Some(grand), Some(gside)) => {
                self.as_mut_node(grand).set_child(gside, Some(child))
            }
            _ => self.root = Some(child),
        }
    }

    /// Return an in-order iterator over all keys.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut paths = Vec::default();
        build_iter(self, self.root, &mut paths);
        Iter { store: self, paths }
    }
}

/// In-order iterator over keys of [RbTree](crate::RbTree).
pub struct Iter<'a, K> {
    store: &'a Store<K>,
    paths: Vec<Fragment>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let store: &'a Store<K> = self.store;
        loop {
            let path = self.paths.last_mut()?;
            match path.flag {
                IFlag::Left => {
                    path.flag = IFlag::Center;
                    break Some(store.as_node(path.node).as_key());
                }
                IFlag::Center => {
                    path.flag = IFlag::Right;
                    let right = store.right(path.node);
                    build_iter(store, right, &mut self.paths)
                }
                IFlag::Right => {
                    self.paths.pop();
                }
            }
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum IFlag {
    Left,
    Center,
    Right,
}

#[derive(Debug)]
struct Fragment {
    flag: IFlag,
    node: NodeRef,
}

fn build_iter<K>(store: &Store<K>, mut node: Option<NodeRef>, paths: &mut Vec<Fragment>) {
    while let Some(nref) = node {
        paths.push(Fragment {
            flag: IFlag::Left,
            node: nref,
        });
        node = store.left(nref);
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
