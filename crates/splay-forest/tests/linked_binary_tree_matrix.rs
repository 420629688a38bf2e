use splay_forest::{LinkedBinaryTree, Position, TreeError};

//        a
//      /   \
//     b     c
//    / \     \
//   d   e     f
fn fixture() -> (LinkedBinaryTree<char>, Vec<Position>) {
    let mut tree = LinkedBinaryTree::new();
    let a = tree.add_root('a').unwrap();
    let b = tree.add_left(a, 'b').unwrap();
    let c = tree.add_right(a, 'c').unwrap();
    let d = tree.add_left(b, 'd').unwrap();
    let e = tree.add_right(b, 'e').unwrap();
    let f = tree.add_right(c, 'f').unwrap();
    (tree, vec![a, b, c, d, e, f])
}

fn labels(tree: &LinkedBinaryTree<char>, order: impl Iterator<Item = Position>) -> String {
    order.map(|p| *tree.element(p).unwrap()).collect()
}

#[test]
fn tree_traversal_orders_matrix() {
    let (tree, _) = fixture();
    assert_eq!(labels(&tree, tree.preorder()), "abdecf");
    assert_eq!(labels(&tree, tree.postorder()), "debfca");
    assert_eq!(labels(&tree, tree.inorder()), "dbeacf");
    assert_eq!(labels(&tree, tree.breadth_first()), "abcdef");
    assert_eq!(labels(&tree, tree.positions()), "dbeacf");
    assert_eq!(tree.elements().collect::<String>(), "dbeacf");

    let empty = LinkedBinaryTree::<char>::new();
    assert_eq!(empty.preorder().count(), 0);
    assert_eq!(empty.inorder().count(), 0);
    assert_eq!(empty.postorder().count(), 0);
    assert_eq!(empty.breadth_first().count(), 0);
}

#[test]
fn tree_traversal_is_single_pass_matrix() {
    let (tree, _) = fixture();
    let mut walk = tree.preorder();
    assert_eq!(walk.by_ref().count(), 6);
    assert_eq!(walk.next(), None);
    // A fresh call starts over.
    assert_eq!(tree.preorder().count(), 6);
}

#[test]
fn tree_queries_matrix() {
    let (tree, p) = fixture();
    let (a, b, c, d, e, f) = (p[0], p[1], p[2], p[3], p[4], p[5]);

    assert_eq!(tree.len(), 6);
    assert!(!tree.is_empty());
    assert_eq!(tree.root(), Some(a));
    assert_eq!(tree.is_root(a), Ok(true));
    assert_eq!(tree.is_root(b), Ok(false));
    assert_eq!(tree.is_leaf(d), Ok(true));
    assert_eq!(tree.is_leaf(c), Ok(false));

    assert_eq!(tree.num_children(a), Ok(2));
    assert_eq!(tree.num_children(c), Ok(1));
    assert_eq!(tree.num_children(f), Ok(0));
    assert_eq!(tree.children(b).unwrap().collect::<Vec<_>>(), vec![d, e]);
    assert_eq!(tree.children(c).unwrap().collect::<Vec<_>>(), vec![f]);

    assert_eq!(tree.parent(e), Ok(Some(b)));
    assert_eq!(tree.left(c), Ok(None));
    assert_eq!(tree.right(c), Ok(Some(f)));
    assert_eq!(tree.sibling(b), Ok(Some(c)));
    assert_eq!(tree.sibling(d), Ok(Some(e)));
    assert_eq!(tree.sibling(f), Ok(None));
    assert_eq!(tree.sibling(a), Ok(None));

    assert_eq!(tree.depth(a), Ok(0));
    assert_eq!(tree.depth(e), Ok(2));
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.subtree_height(c), Ok(1));
    assert_eq!(tree.subtree_height(f), Ok(0));
    assert_eq!(LinkedBinaryTree::<u8>::new().height(), -1);
}

#[test]
fn tree_occupied_slots_matrix() {
    let (mut tree, p) = fixture();
    assert_eq!(tree.add_root('z'), Err(TreeError::DuplicateSlot));
    assert_eq!(tree.add_left(p[0], 'z'), Err(TreeError::DuplicateSlot));
    assert_eq!(tree.add_right(p[2], 'z'), Err(TreeError::DuplicateSlot));
    assert!(tree.add_left(p[2], 'g').is_ok());
    assert_eq!(tree.len(), 7);
}

#[test]
fn tree_delete_matrix() {
    let (mut tree, p) = fixture();
    let (a, b, c, d, f) = (p[0], p[1], p[2], p[3], p[5]);

    assert_eq!(tree.delete(b), Err(TreeError::TwoChildren));

    // One child: `f` is promoted into `c`'s slot.
    assert_eq!(tree.delete(c), Ok('c'));
    assert_eq!(tree.right(a), Ok(Some(f)));
    assert_eq!(tree.parent(f), Ok(Some(a)));
    assert_eq!(labels(&tree, tree.inorder()), "dbeaf");

    // Leaf.
    assert_eq!(tree.delete(d), Ok('d'));
    assert_eq!(tree.left(b), Ok(None));
    assert_eq!(tree.len(), 4);

    // Stale handles fail fast.
    assert_eq!(tree.element(c), Err(TreeError::InvalidPosition));
    assert_eq!(tree.delete(c), Err(TreeError::InvalidPosition));
    assert_eq!(tree.depth(d), Err(TreeError::InvalidPosition));
}

#[test]
fn tree_delete_root_matrix() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root(1).unwrap();
    let child = tree.add_left(root, 2).unwrap();

    assert_eq!(tree.delete(root), Ok(1));
    assert_eq!(tree.root(), Some(child));
    assert_eq!(tree.parent(child), Ok(None));

    assert_eq!(tree.delete(child), Ok(2));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.len(), 0);
}

#[test]
fn tree_replace_matrix() {
    let (mut tree, p) = fixture();
    assert_eq!(tree.replace(p[1], 'B'), Ok('b'));
    *tree.element_mut(p[2]).unwrap() = 'C';
    assert_eq!(labels(&tree, tree.preorder()), "aBdeCf");
}

#[test]
fn tree_attach_matrix() {
    let mut tree = LinkedBinaryTree::new();
    let root = tree.add_root('r').unwrap();

    let mut left = LinkedBinaryTree::new();
    let l = left.add_root('l').unwrap();
    left.add_left(l, 'x').unwrap();
    let mut right = LinkedBinaryTree::new();
    right.add_root('y').unwrap();

    tree.attach(root, left, right).unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(labels(&tree, tree.preorder()), "rlxy");
    assert_eq!(labels(&tree, tree.inorder()), "xlry");

    // Only leaves accept new subtrees.
    assert_eq!(
        tree.attach(root, LinkedBinaryTree::new(), LinkedBinaryTree::new()),
        Err(TreeError::NotLeaf)
    );
}

#[test]
fn tree_positions_are_tree_specific_matrix() {
    let (tree, _) = fixture();
    let (other, p) = fixture();
    assert_eq!(tree.element(p[0]), Err(TreeError::InvalidPosition));
    assert_eq!(other.element(p[0]), Ok(&'a'));
}

#[test]
fn tree_print_matrix() {
    let (tree, _) = fixture();
    let expected = "a\n├─ ← b\n│  ├─ ← d\n│  └─ → e\n└─ → c\n   ├─ ← ∅\n   └─ → f";
    assert_eq!(tree.print("", |c| c.to_string()), expected);
    assert_eq!(LinkedBinaryTree::<char>::new().print("", |c| c.to_string()), "∅");
}

#[test]
fn tree_clear_matrix() {
    let (mut tree, p) = fixture();
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.element(p[0]), Err(TreeError::InvalidPosition));
    assert!(tree.add_root('n').is_ok());
}

#[test]
fn tree_clone_rejects_source_positions_matrix() {
    let (mut tree, p) = fixture();
    let copy = tree.clone();
    assert_eq!(copy.len(), 6);
    assert_eq!(labels(&copy, copy.preorder()), "abdecf");
    assert_eq!(copy.element(p[0]), Err(TreeError::InvalidPosition));

    tree.delete(p[5]).unwrap();
    assert_eq!(copy.element(p[5]), Err(TreeError::InvalidPosition));
    assert_eq!(copy.len(), 6);

    // Positions taken from the copy work on the copy only.
    let root = copy.root().unwrap();
    assert_eq!(copy.element(root), Ok(&'a'));
    assert_eq!(tree.element(root), Err(TreeError::InvalidPosition));
}
