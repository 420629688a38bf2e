//! Rebalancing hooks used by [`TreeMap`](crate::TreeMap).

use crate::position::Position;
use crate::tree::LinkedBinaryTree;

/// A balancing policy plugged into a [`TreeMap`](crate::TreeMap).
///
/// The map performs the structural change and then calls one hook with the
/// position that changed. Policies reshape the tree through
/// [`LinkedBinaryTree::rotate`] and [`LinkedBinaryTree::restructure`],
/// which keep the in-order sequence intact. Every hook is a no-op unless
/// overridden.
///
/// Hooks only ever receive positions the map produced during the same call,
/// so they are infallible.
pub trait Rebalance {
    /// `p` was just attached as a new leaf.
    fn on_insert<T>(&mut self, _tree: &mut LinkedBinaryTree<T>, _p: Position) {}

    /// A child of `anchor` was removed. `anchor` is `None` when the removed
    /// node was the root.
    fn on_delete<T>(&mut self, _tree: &mut LinkedBinaryTree<T>, _anchor: Option<Position>) {}

    /// `p` was looked up or had its value overwritten.
    fn on_access<T>(&mut self, _tree: &mut LinkedBinaryTree<T>, _p: Position) {}
}

/// Plain binary search tree: never reshapes anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl Rebalance for Unbalanced {}
