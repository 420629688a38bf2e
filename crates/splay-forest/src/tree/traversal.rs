//! Lazy traversals of a [`LinkedBinaryTree`].
//!
//! Each iterator is single pass and walks the arena with an explicit stack
//! or queue, so tall trees cannot overflow the call stack. The shared
//! borrow of the tree rules out mutation while a traversal is live.

use std::collections::VecDeque;

use super::LinkedBinaryTree;
use crate::position::Position;
use crate::util::{get_l, get_r};

pub struct Preorder<'a, T> {
    tree: &'a LinkedBinaryTree<T>,
    stack: Vec<u32>,
}

impl<'a, T> Preorder<'a, T> {
    pub(super) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root_index().into_iter().collect(),
        }
    }
}

impl<T> Iterator for Preorder<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let tree = self.tree;
        let i = self.stack.pop()?;
        let nodes = tree.store().nodes();
        self.stack.extend(get_r(nodes, i));
        self.stack.extend(get_l(nodes, i));
        Some(tree.position(i))
    }
}

pub struct Postorder<'a, T> {
    tree: &'a LinkedBinaryTree<T>,
    // (node, children already pushed)
    stack: Vec<(u32, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(super) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        Self {
            tree,
            stack: tree.root_index().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<T> Iterator for Postorder<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let tree = self.tree;
        let nodes = tree.store().nodes();
        while let Some((i, expanded)) = self.stack.pop() {
            if expanded {
                return Some(tree.position(i));
            }
            self.stack.push((i, true));
            self.stack.extend(get_r(nodes, i).map(|r| (r, false)));
            self.stack.extend(get_l(nodes, i).map(|l| (l, false)));
        }
        None
    }
}

pub struct Inorder<'a, T> {
    tree: &'a LinkedBinaryTree<T>,
    stack: Vec<u32>,
    curr: Option<u32>,
}

impl<'a, T> Inorder<'a, T> {
    pub(super) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            curr: tree.root_index(),
        }
    }
}

impl<T> Iterator for Inorder<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let tree = self.tree;
        let nodes = tree.store().nodes();
        while let Some(i) = self.curr {
            self.stack.push(i);
            self.curr = get_l(nodes, i);
        }
        let i = self.stack.pop()?;
        self.curr = get_r(nodes, i);
        Some(tree.position(i))
    }
}

pub struct BreadthFirst<'a, T> {
    tree: &'a LinkedBinaryTree<T>,
    fringe: VecDeque<u32>,
}

impl<'a, T> BreadthFirst<'a, T> {
    pub(super) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        Self {
            tree,
            fringe: tree.root_index().into_iter().collect(),
        }
    }
}

impl<T> Iterator for BreadthFirst<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let tree = self.tree;
        let i = self.fringe.pop_front()?;
        let nodes = tree.store().nodes();
        self.fringe.extend(get_l(nodes, i));
        self.fringe.extend(get_r(nodes, i));
        Some(tree.position(i))
    }
}

/// Elements in inorder.
pub struct Elements<'a, T> {
    inner: Inorder<'a, T>,
}

impl<'a, T> Elements<'a, T> {
    pub(super) fn new(tree: &'a LinkedBinaryTree<T>) -> Self {
        Self {
            inner: Inorder::new(tree),
        }
    }
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.inner.tree;
        let p = self.inner.next()?;
        Some(tree.get(p.index))
    }
}
