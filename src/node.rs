use std::fmt;

use crate::Color;

/// Reference to a node, an index into the arena of the tree that
/// allocated it. Only meaningful for that tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(pub(crate) usize);

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which child slot of its parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Return the other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Node corresponds to a single key in RbTree instance.
#[derive(Clone)]
pub struct Node<K> {
    pub key: K,
    pub black: bool,               // store: black or red
    pub parent: Option<NodeRef>,   // back-link, never owning
    pub left: Option<NodeRef>,     // store: left child
    pub right: Option<NodeRef>,    // store: right child
}

impl<K> Node<K> {
    /// New nodes are red leaves.
    pub fn new(key: K, parent: Option<NodeRef>) -> Node<K> {
        Node {
            key,
            black: false,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }

    #[inline]
    pub fn to_color(&self) -> Color {
        match self.black {
            true => Color::Black,
            false => Color::Red,
        }
    }

    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.black = color == Color::Black
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeRef> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub fn set_child(&mut self, side: Side, child: Option<NodeRef>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub fn as_key(&self) -> &K {
        &self.key
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
