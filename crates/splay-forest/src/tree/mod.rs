//! Linked binary tree over a [`NodeStore`].
//!
//! The tree manages the root and child slots and offers the classic
//! traversals. It has no notion of key order; [`TreeMap`](crate::TreeMap)
//! layers that on top.

mod traversal;

pub use traversal::{BreadthFirst, Elements, Inorder, Postorder, Preorder};

use crate::error::TreeError;
use crate::position::Position;
use crate::print::{print_tree, PrintChild};
use crate::rotate;
use crate::store::NodeStore;
use crate::types::Side;
use crate::util::{self, get_l, get_p, get_r, relink, replace_in_parent};

#[derive(Clone, Debug)]
pub struct LinkedBinaryTree<T> {
    store: NodeStore<T>,
    root: Option<u32>,
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedBinaryTree<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: NodeStore::with_capacity(capacity),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<Position> {
        self.root.map(|i| self.store.position(i))
    }

    pub fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.store.parent(p)
    }

    pub fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.store.left(p)
    }

    pub fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        self.store.right(p)
    }

    /// The other child of `p`'s parent, if any.
    pub fn sibling(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let i = self.store.validate(p)?;
        let nodes = self.store.nodes();
        let Some(parent) = get_p(nodes, i) else {
            return Ok(None);
        };
        let other = if get_l(nodes, parent) == Some(i) {
            get_r(nodes, parent)
        } else {
            get_l(nodes, parent)
        };
        Ok(other.map(|j| self.store.position(j)))
    }

    pub fn num_children(&self, p: Position) -> Result<usize, TreeError> {
        let i = self.store.validate(p)?;
        let nodes = self.store.nodes();
        Ok(get_l(nodes, i).is_some() as usize + get_r(nodes, i).is_some() as usize)
    }

    /// Existing children of `p`, left before right.
    pub fn children(&self, p: Position) -> Result<impl Iterator<Item = Position>, TreeError> {
        let (l, r) = (self.store.left(p)?, self.store.right(p)?);
        Ok([l, r].into_iter().flatten())
    }

    pub fn is_root(&self, p: Position) -> Result<bool, TreeError> {
        let i = self.store.validate(p)?;
        Ok(self.root == Some(i))
    }

    pub fn is_leaf(&self, p: Position) -> Result<bool, TreeError> {
        Ok(self.num_children(p)? == 0)
    }

    /// Number of edges between `p` and the root.
    pub fn depth(&self, p: Position) -> Result<usize, TreeError> {
        let i = self.store.validate(p)?;
        Ok(util::depth(self.store.nodes(), i))
    }

    /// Height of the whole tree; `-1` when empty.
    pub fn height(&self) -> isize {
        util::height(self.store.nodes(), self.root)
    }

    /// Height of the subtree rooted at `p`; `0` for a leaf.
    pub fn subtree_height(&self, p: Position) -> Result<isize, TreeError> {
        let i = self.store.validate(p)?;
        Ok(util::height(self.store.nodes(), Some(i)))
    }

    pub fn element(&self, p: Position) -> Result<&T, TreeError> {
        self.store.element(p)
    }

    pub fn element_mut(&mut self, p: Position) -> Result<&mut T, TreeError> {
        self.store.element_mut(p)
    }

    /// Replaces the element at `p`, returning the old one.
    pub fn replace(&mut self, p: Position, element: T) -> Result<T, TreeError> {
        self.store.replace(p, element)
    }

    pub fn add_root(&mut self, element: T) -> Result<Position, TreeError> {
        if self.root.is_some() {
            return Err(TreeError::DuplicateSlot);
        }
        let p = self.store.create(element);
        self.root = Some(p.index);
        Ok(p)
    }

    pub fn add_left(&mut self, p: Position, element: T) -> Result<Position, TreeError> {
        self.add_child(p, element, Side::Left)
    }

    pub fn add_right(&mut self, p: Position, element: T) -> Result<Position, TreeError> {
        self.add_child(p, element, Side::Right)
    }

    fn add_child(&mut self, p: Position, element: T, side: Side) -> Result<Position, TreeError> {
        let i = self.store.validate(p)?;
        if util::child(self.store.nodes(), i, side).is_some() {
            return Err(TreeError::DuplicateSlot);
        }
        let child = self.store.create(element);
        relink(self.store.nodes_mut(), i, Some(child.index), side);
        Ok(child)
    }

    /// Removes the node at `p` and returns its element. A single child
    /// takes `p`'s place. Nodes with two children are rejected.
    pub fn delete(&mut self, p: Position) -> Result<T, TreeError> {
        let i = self.store.validate(p)?;
        let nodes = self.store.nodes();
        if get_l(nodes, i).is_some() && get_r(nodes, i).is_some() {
            return Err(TreeError::TwoChildren);
        }
        Ok(self.remove_index(i))
    }

    /// Stores `element` in a new leaf at `slot`, or as the root when `slot`
    /// is `None`. The slot must be empty.
    pub(crate) fn insert_leaf(&mut self, slot: Option<(u32, Side)>, element: T) -> u32 {
        let leaf = self.store.create(element).index;
        match slot {
            Some((parent, side)) => {
                debug_assert!(util::child(self.store.nodes(), parent, side).is_none());
                relink(self.store.nodes_mut(), parent, Some(leaf), side);
            }
            None => {
                debug_assert!(self.root.is_none());
                self.root = Some(leaf);
            }
        }
        leaf
    }

    /// Unlinks and frees node `i`, which has at most one child.
    pub(crate) fn remove_index(&mut self, i: u32) -> T {
        let nodes = self.store.nodes();
        let child = get_l(nodes, i).or(get_r(nodes, i));
        self.root = replace_in_parent(self.store.nodes_mut(), self.root, i, child);
        self.store.free(i)
    }

    /// Grafts `left` and `right` as the subtrees of the leaf `p`. Both trees
    /// are consumed; their nodes move into this tree.
    pub fn attach(
        &mut self,
        p: Position,
        left: LinkedBinaryTree<T>,
        right: LinkedBinaryTree<T>,
    ) -> Result<(), TreeError> {
        if !self.is_leaf(p)? {
            return Err(TreeError::NotLeaf);
        }
        self.graft(p.index, left, Side::Left);
        self.graft(p.index, right, Side::Right);
        Ok(())
    }

    fn graft(&mut self, parent: u32, mut other: LinkedBinaryTree<T>, side: Side) {
        let Some(root) = other.root else {
            return;
        };
        let mut stack = vec![(root, parent, side)];
        while let Some((from, to, side)) = stack.pop() {
            let nodes = other.store.nodes_mut();
            let Some(element) = nodes[from as usize].element.take() else {
                continue;
            };
            let (l, r) = (get_l(nodes, from), get_r(nodes, from));
            let moved = self.store.create(element).index;
            relink(self.store.nodes_mut(), to, Some(moved), side);
            stack.extend(l.map(|l| (l, moved, Side::Left)));
            stack.extend(r.map(|r| (r, moved, Side::Right)));
        }
    }

    /// Rotates `p` above its parent.
    pub fn rotate(&mut self, p: Position) -> Result<(), TreeError> {
        let i = self.store.validate(p)?;
        if get_p(self.store.nodes(), i).is_none() {
            return Err(TreeError::NoParent);
        }
        self.root = rotate::rotate(self.store.nodes_mut(), self.root, i);
        Ok(())
    }

    /// Trinode restructure of `p` with its parent and grandparent. Returns
    /// the position now at the top of the restructured subtree.
    pub fn restructure(&mut self, p: Position) -> Result<Position, TreeError> {
        let i = self.store.validate(p)?;
        let nodes = self.store.nodes();
        let Some(parent) = get_p(nodes, i) else {
            return Err(TreeError::NoGrandparent);
        };
        if get_p(nodes, parent).is_none() {
            return Err(TreeError::NoGrandparent);
        }
        let (root, top) = rotate::restructure(self.store.nodes_mut(), self.root, i);
        self.root = root;
        Ok(self.store.position(top))
    }

    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(self)
    }

    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(self)
    }

    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(self)
    }

    pub fn breadth_first(&self) -> BreadthFirst<'_, T> {
        BreadthFirst::new(self)
    }

    /// All positions, in inorder.
    pub fn positions(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    /// All elements, in inorder.
    pub fn elements(&self) -> Elements<'_, T> {
        Elements::new(self)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.root = None;
    }

    /// Dumps the tree shape, labelling every node with `fmt`.
    pub fn print<F>(&self, tab: &str, fmt: F) -> String
    where
        F: Fn(&T) -> String,
    {
        match self.root {
            Some(root) => self.print_node(root, tab, &fmt),
            None => "∅".to_string(),
        }
    }

    fn print_node(&self, i: u32, tab: &str, fmt: &dyn Fn(&T) -> String) -> String {
        let nodes = self.store.nodes();
        let label = fmt(self.store.get(i));
        let (l, r) = (get_l(nodes, i), get_r(nodes, i));
        if l.is_none() && r.is_none() {
            return label;
        }
        let left = |tab: &str| match l {
            Some(c) => format!("← {}", self.print_node(c, tab, fmt)),
            None => "← ∅".to_string(),
        };
        let right = |tab: &str| match r {
            Some(c) => format!("→ {}", self.print_node(c, tab, fmt)),
            None => "→ ∅".to_string(),
        };
        let children: [Option<&PrintChild<'_>>; 2] = [Some(&left), Some(&right)];
        format!("{label}{}", print_tree(tab, &children))
    }

    pub(crate) fn index(&self, p: Position) -> Result<u32, TreeError> {
        self.store.validate(p)
    }

    pub(crate) fn position(&self, index: u32) -> Position {
        self.store.position(index)
    }

    pub(crate) fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub(crate) fn store(&self) -> &NodeStore<T> {
        &self.store
    }

    pub(crate) fn get(&self, index: u32) -> &T {
        self.store.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: u32) -> &mut T {
        self.store.get_mut(index)
    }

    pub(crate) fn swap_elements(&mut self, a: u32, b: u32) {
        self.store.swap_elements(a, b);
    }
}
