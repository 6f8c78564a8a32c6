//! Module implement insert fixup for [RbTree](crate::RbTree).
//!
//! A freshly attached leaf is red. If its parent is also red the tree has
//! a red-red conflict, which is resolved by one of three cases, decided by
//! the color of the aunt (parent's sibling) and by whether node and parent
//! hang on the same side of their parents:
//!
//! ```text
//!   Triangle, aunt black       Line, aunt black        Recolor, aunt red
//!
//!        g(b)                      g(b)                     g(b)
//!        /  \                      /  \                     /  \
//!      p(r)  a(b)                p(r)  a(b)               p(r)  a(r)
//!        \                       /                        /
//!        n(r)                  n(r)                     n(r)
//! ```
//!
//! * Triangle rotates `n` over `p`, turning it into a line with `p` as
//!   the node under repair.
//! * Line rotates `p` over `g` and swaps their colors. Terminal.
//! * Recolor paints `p` and `a` black, `g` red, and continues from `g`,
//!   two levels up.
//!
//! Absent aunt counts as black. Ascent is a loop, not recursion. Root is
//! left for the caller to paint black.

use log::trace;

use crate::{node::NodeRef, store::Store};

/// Nodes related to the node under repair. Every lookup is optional,
/// nothing here can fault on a missing ancestor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Family {
    pub node: NodeRef,
    pub parent: NodeRef,
    pub grandparent: Option<NodeRef>,
    pub aunt: Option<NodeRef>,
    // only traced, cases never look at it.
    pub sibling: Option<NodeRef>,
}

impl Family {
    /// Return None if `node` is the root.
    pub fn of<K>(store: &Store<K>, node: NodeRef) -> Option<Family> {
        let parent = store.parent(node)?;
        let grandparent = store.parent(parent);
        let aunt = match (grandparent, store.side_of(parent)) {
            (Some(grand), Some(side)) => store.child(grand, side.opposite()),
            _ => None,
        };
        let sibling = store
            .side_of(node)
            .and_then(|side| store.child(parent, side.opposite()));

        Some(Family {
            node,
            parent,
            grandparent,
            aunt,
            sibling,
        })
    }

    // node and parent hang on opposite sides.
    fn is_triangle<K>(&self, store: &Store<K>) -> bool {
        store.is_right_child(self.node) != store.is_right_child(self.parent)
    }
}

/// Repair step for a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    /// Node is the root.
    Root,
    /// No red-red conflict at this node.
    Settled,
    Triangle {
        node: NodeRef,
        parent: NodeRef,
    },
    Line {
        parent: NodeRef,
        grandparent: NodeRef,
    },
    Recolor {
        node: NodeRef,
        parent: NodeRef,
        aunt: NodeRef,
        grandparent: NodeRef,
    },
}

impl Case {
    /// Classify the repair needed at `node`.
    pub fn of<K>(store: &Store<K>, node: NodeRef) -> Case {
        let family = match Family::of(store, node) {
            Some(family) => family,
            None => return Case::Root,
        };
        let Family { parent, aunt, .. } = family;
        trace!(
            "family node:{:?} parent:{:?} grandparent:{:?} aunt:{:?} sibling:{:?}",
            node,
            parent,
            family.grandparent,
            aunt,
            family.sibling
        );

        if store.is_black(Some(node)) || store.is_black(Some(parent)) {
            return Case::Settled;
        }
        // red parent without grandparent is a red root, painted by caller.
        let grandparent = match family.grandparent {
            Some(grandparent) => grandparent,
            None => return Case::Settled,
        };

        match aunt.filter(|aunt| store.is_red(Some(*aunt))) {
            None if family.is_triangle(store) => Case::Triangle { node, parent },
            None => Case::Line {
                parent,
                grandparent,
            },
            Some(aunt) => Case::Recolor {
                node,
                parent,
                aunt,
                grandparent,
            },
        }
    }

    /// Apply this case to the store and return the next node to repair.
    pub fn apply<K>(self, store: &mut Store<K>) -> Option<NodeRef> {
        match self {
            Case::Root | Case::Settled => None,
            Case::Triangle { node, parent } => {
                store.rotate(node, parent);
                Some(parent)
            }
            Case::Line {
                parent,
                grandparent,
            } => {
                store.rotate(parent, grandparent);
                store.swap_colors(parent, grandparent);
                None
            }
            Case::Recolor {
                node,
                parent,
                aunt,
                grandparent,
            } => {
                store.set_black(parent);
                store.set_black(aunt);
                store.set_red(grandparent);
                store.set_red(node);
                Some(grandparent)
            }
        }
    }
}

/// Restore red-black rules after `node` was attached as a red leaf,
/// except for the root's color. Return the number of cases applied.
pub fn fixup<K>(store: &mut Store<K>, node: NodeRef) -> usize {
    let (mut next, mut n) = (Some(node), 0);
    while let Some(node) = next {
        let case = Case::of(store, node);
        trace!("fixup(): {:?}", case);
        next = case.apply(store);
        n += 1;
    }
    n
}

#[cfg(test)]
#[path = "fixup_test.rs"]
mod fixup_test;
