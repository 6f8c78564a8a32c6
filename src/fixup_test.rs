use super::*;

use crate::{Color, Duplicates};

// attach `keys` in order, then paint `blacks` black, rest stay red.
fn make_store(keys: &[u32], blacks: &[u32]) -> Store<u32> {
    let mut store = Store::new();
    for key in keys.iter() {
        store.insert_leaf(*key, Duplicates::Reject).unwrap();
    }
    for key in blacks.iter() {
        let nref = store.find(key).unwrap();
        store.set_black(nref);
    }
    store
}

fn nref(store: &Store<u32>, key: u32) -> NodeRef {
    store.find(&key).unwrap()
}

fn key_of(store: &Store<u32>, nref: Option<NodeRef>) -> Option<u32> {
    nref.map(|nref| *store.as_node(nref).as_key())
}

fn color(store: &Store<u32>, key: u32) -> Color {
    store.to_color(nref(store, key))
}

#[test]
fn test_family() {
    let store = make_store(&[20, 10, 30, 5, 15, 25], &[20]);

    assert_eq!(Family::of(&store, nref(&store, 20)), None);

    let family = Family::of(&store, nref(&store, 10)).unwrap();
    assert_eq!(key_of(&store, Some(family.parent)), Some(20));
    assert_eq!(family.grandparent, None);
    assert_eq!(family.aunt, None);
    assert_eq!(key_of(&store, family.sibling), Some(30));

    let family = Family::of(&store, nref(&store, 5)).unwrap();
    assert_eq!(key_of(&store, Some(family.parent)), Some(10));
    assert_eq!(key_of(&store, family.grandparent), Some(20));
    assert_eq!(key_of(&store, family.aunt), Some(30));
    assert_eq!(key_of(&store, family.sibling), Some(15));

    let family = Family::of(&store, nref(&store, 25)).unwrap();
    assert_eq!(key_of(&store, Some(family.parent)), Some(30));
    assert_eq!(key_of(&store, family.aunt), Some(10));
    assert_eq!(family.sibling, None);
}

#[test]
fn test_case_root_and_settled() {
    let store = make_store(&[20, 10, 30, 5], &[20, 10, 30]);
    assert_eq!(Case::of(&store, nref(&store, 20)), Case::Root);
    // black parent.
    assert_eq!(Case::of(&store, nref(&store, 5)), Case::Settled);
    // black node.
    assert_eq!(Case::of(&store, nref(&store, 10)), Case::Settled);

    // red root with a red child, no grandparent to work with.
    let store = make_store(&[20, 10], &[]);
    assert_eq!(Case::of(&store, nref(&store, 10)), Case::Settled);
}

#[test]
fn test_case_recolor() {
    let mut store = make_store(&[2, 1, 3, 5], &[2]);
    let case = Case::of(&store, nref(&store, 5));
    assert_eq!(
        case,
        Case::Recolor {
            node: nref(&store, 5),
            parent: nref(&store, 3),
            aunt: nref(&store, 1),
            grandparent: nref(&store, 2),
        }
    );

    assert_eq!(case.apply(&mut store), Some(nref(&store, 2)));
    assert_eq!(color(&store, 2), Color::Red);
    assert_eq!(color(&store, 1), Color::Black);
    assert_eq!(color(&store, 3), Color::Black);
    assert_eq!(color(&store, 5), Color::Red);
    // recolor never changes shape.
    assert_eq!(key_of(&store, store.to_root()), Some(2));
    assert_eq!(Case::of(&store, nref(&store, 2)), Case::Root);
}

#[test]
fn test_case_triangle() {
    let mut store = make_store(&[10, 5, 7], &[10]);
    let case = Case::of(&store, nref(&store, 7));
    assert_eq!(
        case,
        Case::Triangle {
            node: nref(&store, 7),
            parent: nref(&store, 5),
        }
    );

    // 7 takes 5's place, 5 becomes the node under repair.
    assert_eq!(case.apply(&mut store), Some(nref(&store, 5)));
    let root = store.to_root().unwrap();
    assert_eq!(key_of(&store, Some(root)), Some(10));
    assert_eq!(key_of(&store, store.left(root)), Some(7));
    assert_eq!(key_of(&store, store.left(nref(&store, 7))), Some(5));
    assert_eq!(color(&store, 7), Color::Red);
    assert_eq!(color(&store, 5), Color::Red);

    // and is now in line.
    let case = Case::of(&store, nref(&store, 5));
    assert_eq!(
        case,
        Case::Line {
            parent: nref(&store, 7),
            grandparent: nref(&store, 10),
        }
    );
    assert_eq!(case.apply(&mut store), None);
    assert_eq!(key_of(&store, store.to_root()), Some(7));
    assert_eq!(color(&store, 7), Color::Black);
    assert_eq!(color(&store, 5), Color::Red);
    assert_eq!(color(&store, 10), Color::Red);
}

#[test]
fn test_case_triangle_mirrored() {
    let mut store = make_store(&[10, 15, 12], &[10]);
    let case = Case::of(&store, nref(&store, 12));
    assert_eq!(
        case,
        Case::Triangle {
            node: nref(&store, 12),
            parent: nref(&store, 15),
        }
    );
    assert_eq!(case.apply(&mut store), Some(nref(&store, 15)));
    let root = store.to_root().unwrap();
    assert_eq!(key_of(&store, store.right(root)), Some(12));
    assert_eq!(key_of(&store, store.right(nref(&store, 12))), Some(15));
}

#[test]
fn test_case_line_black_aunt() {
    let mut store = make_store(&[20, 10, 30, 5], &[20, 30]);
    let case = Case::of(&store, nref(&store, 5));
    assert_eq!(
        case,
        Case::Line {
            parent: nref(&store, 10),
            grandparent: nref(&store, 20),
        }
    );

    assert_eq!(case.apply(&mut store), None);
    let root = store.to_root().unwrap();
    assert_eq!(key_of(&store, Some(root)), Some(10));
    assert_eq!(key_of(&store, store.left(root)), Some(5));
    assert_eq!(key_of(&store, store.right(root)), Some(20));
    assert_eq!(key_of(&store, store.right(nref(&store, 20))), Some(30));
    assert_eq!(color(&store, 10), Color::Black);
    assert_eq!(color(&store, 20), Color::Red);
    assert_eq!(color(&store, 30), Color::Black);
    assert_eq!(color(&store, 5), Color::Red);
}

#[test]
fn test_case_line_below_root() {
    // line rotation under a non-root grandparent keeps the tree root.
    // 10 and 5 red under black 20, 20 has no right child.
    let mut store = make_store(&[50, 20, 80, 10, 5], &[50, 20, 80]);

    let case = Case::of(&store, nref(&store, 5));
    assert_eq!(
        case,
        Case::Line {
            parent: nref(&store, 10),
            grandparent: nref(&store, 20),
        }
    );
    case.apply(&mut store);
    assert_eq!(key_of(&store, store.to_root()), Some(50));
    assert_eq!(key_of(&store, store.left(nref(&store, 50))), Some(10));
    assert_eq!(store.parent(nref(&store, 10)), Some(nref(&store, 50)));
}

#[test]
fn test_fixup_propagates() {
    let mut store = make_store(&[8, 4, 12, 2, 6, 10, 14, 1], &[8, 4, 12]);
    let leaf = nref(&store, 1);

    // 1 under red 2 with red aunt 6: recolor, then 4 turns red under
    // black 8 and is settled.
    let n = fixup(&mut store, leaf);
    assert_eq!(n, 2);
    assert_eq!(color(&store, 4), Color::Red);
    assert_eq!(color(&store, 2), Color::Black);
    assert_eq!(color(&store, 6), Color::Black);
    assert_eq!(color(&store, 1), Color::Red);
    assert_eq!(key_of(&store, store.to_root()), Some(8));
}

#[test]
fn test_fixup_single_leaf() {
    let mut store = make_store(&[1], &[]);
    let leaf = nref(&store, 1);
    assert_eq!(fixup(&mut store, leaf), 1);
    // root painting is left to the caller.
    assert_eq!(color(&store, 1), Color::Red);
}
