//! Arena that owns every node of a linked binary tree.

use crate::error::TreeError;
use crate::position::{Position, TreeId};
use crate::tree_node::TreeNode;
use crate::types::Side;
use crate::util::{self, get_l, get_p, get_r, relink, set_p, side_of};

/// Slot arena with a free list.
///
/// Nodes refer to each other by index only; the store is the single owner
/// of their memory. Vacated slots are recycled, and their generation is
/// bumped so stale [`Position`]s are rejected.
#[derive(Debug)]
pub struct NodeStore<T> {
    id: TreeId,
    nodes: Vec<TreeNode<T>>,
    free: Vec<u32>,
}

// A clone is a separate tree: it gets its own id, so positions minted by the
// source never resolve on it.
impl<T: Clone> Clone for NodeStore<T> {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::next(),
            nodes: self.nodes.clone(),
            free: self.free.clone(),
        }
    }
}

impl<T> Default for NodeStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeStore<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: TreeId::next(),
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `element` in a fresh, unlinked node.
    pub fn create(&mut self, element: T) -> Position {
        let index = match self.free.pop() {
            Some(index) => {
                let node = &mut self.nodes[index as usize];
                node.element = Some(element);
                index
            }
            None => {
                self.nodes.push(TreeNode::new(element));
                (self.nodes.len() - 1) as u32
            }
        };
        self.position(index)
    }

    pub fn parent(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let i = self.validate(p)?;
        Ok(get_p(&self.nodes, i).map(|j| self.position(j)))
    }

    pub fn left(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let i = self.validate(p)?;
        Ok(get_l(&self.nodes, i).map(|j| self.position(j)))
    }

    pub fn right(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let i = self.validate(p)?;
        Ok(get_r(&self.nodes, i).map(|j| self.position(j)))
    }

    pub fn set_left(&mut self, p: Position, child: Option<Position>) -> Result<(), TreeError> {
        self.set_child(p, child, Side::Left)
    }

    pub fn set_right(&mut self, p: Position, child: Option<Position>) -> Result<(), TreeError> {
        self.set_child(p, child, Side::Right)
    }

    /// Links `child` into the `side` slot of `p`. A child that already
    /// hangs elsewhere is unhooked from its old slot first, and the node it
    /// displaces from `p`'s slot is left without a parent.
    fn set_child(&mut self, p: Position, child: Option<Position>, side: Side) -> Result<(), TreeError> {
        let i = self.validate(p)?;
        let c = child.map(|c| self.validate(c)).transpose()?;
        if let Some(c) = c {
            if let (Some(old), Some(old_side)) = (get_p(&self.nodes, c), side_of(&self.nodes, c)) {
                relink(&mut self.nodes, old, None, old_side);
                set_p(&mut self.nodes, c, None);
            }
        }
        if let Some(displaced) = util::child(&self.nodes, i, side) {
            set_p(&mut self.nodes, displaced, None);
        }
        relink(&mut self.nodes, i, c, side);
        Ok(())
    }

    pub fn element(&self, p: Position) -> Result<&T, TreeError> {
        let i = self.validate(p)?;
        self.nodes[i as usize]
            .element
            .as_ref()
            .ok_or(TreeError::InvalidPosition)
    }

    pub fn element_mut(&mut self, p: Position) -> Result<&mut T, TreeError> {
        let i = self.validate(p)?;
        self.nodes[i as usize]
            .element
            .as_mut()
            .ok_or(TreeError::InvalidPosition)
    }

    /// Swaps in `element`, returning the previous one.
    pub fn replace(&mut self, p: Position, element: T) -> Result<T, TreeError> {
        Ok(std::mem::replace(self.element_mut(p)?, element))
    }

    /// Frees the node at `p` and returns its element. Links are cleared on
    /// the freed node only; neighbours must already have been unlinked.
    pub fn remove(&mut self, p: Position) -> Result<T, TreeError> {
        let i = self.validate(p)?;
        Ok(self.free(i))
    }

    pub(crate) fn free(&mut self, i: u32) -> T {
        let node = &mut self.nodes[i as usize];
        let Some(element) = node.element.take() else {
            unreachable!("freeing vacant slot {i}");
        };
        node.p = None;
        node.l = None;
        node.r = None;
        node.generation = node.generation.wrapping_add(1);
        self.free.push(i);
        element
    }

    /// Drops every node. Positions handed out so far become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.id = TreeId::next();
    }

    /// Returns the arena index behind `p` if it is a live node of this store.
    pub(crate) fn validate(&self, p: Position) -> Result<u32, TreeError> {
        if p.tree != self.id {
            return Err(TreeError::InvalidPosition);
        }
        match self.nodes.get(p.index as usize) {
            Some(node) if node.generation == p.generation && !node.is_vacant() => Ok(p.index),
            _ => Err(TreeError::InvalidPosition),
        }
    }

    pub(crate) fn position(&self, index: u32) -> Position {
        Position {
            tree: self.id,
            index,
            generation: self.nodes[index as usize].generation,
        }
    }

    pub(crate) fn swap_elements(&mut self, a: u32, b: u32) {
        let (a, b) = (a as usize, b as usize);
        let tmp = self.nodes[a].element.take();
        self.nodes[a].element = self.nodes[b].element.take();
        self.nodes[b].element = tmp;
    }

    pub(crate) fn nodes(&self) -> &[TreeNode<T>] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [TreeNode<T>] {
        &mut self.nodes
    }

    pub(crate) fn get(&self, index: u32) -> &T {
        match &self.nodes[index as usize].element {
            Some(element) => element,
            None => unreachable!("linked index {index} points at a vacant slot"),
        }
    }

    pub(crate) fn get_mut(&mut self, index: u32) -> &mut T {
        match &mut self.nodes[index as usize].element {
            Some(element) => element,
            None => unreachable!("linked index {index} points at a vacant slot"),
        }
    }
}
