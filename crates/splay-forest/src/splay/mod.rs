//! Splay rebalancing.
//!
//! Every inserted or accessed node, and the parent of every removed node, is
//! rotated up to the root. No balance bookkeeping is stored; the amortized
//! cost of any operation sequence is O(log n) per operation.

use crate::balance::Rebalance;
use crate::error::TreeError;
use crate::position::Position;
use crate::tree::LinkedBinaryTree;

/// One splay step, classified by the shape above the target node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplayStep {
    /// Parent is the root: single rotation.
    Zig,
    /// Node and parent are children on the same side: rotate the parent,
    /// then the node.
    ZigZig,
    /// Node and parent are children on opposite sides: rotate the node
    /// twice.
    ZigZag,
}

/// Performs a single splay step on `p`. Returns `None` when `p` is already
/// the root.
pub fn splay_step<T>(tree: &mut LinkedBinaryTree<T>, p: Position) -> Result<Option<SplayStep>, TreeError> {
    let Some(parent) = tree.parent(p)? else {
        return Ok(None);
    };
    if tree.parent(parent)?.is_none() {
        tree.rotate(p)?;
        return Ok(Some(SplayStep::Zig));
    }
    // Aligned shapes lift the parent; `p` still needs one more rotation.
    if tree.restructure(p)? == p {
        Ok(Some(SplayStep::ZigZag))
    } else {
        tree.rotate(p)?;
        Ok(Some(SplayStep::ZigZig))
    }
}

/// Rotates `p` up until it is the root. Returns the number of steps taken.
pub fn splay<T>(tree: &mut LinkedBinaryTree<T>, p: Position) -> Result<usize, TreeError> {
    let mut steps = 0;
    while let Some(_step) = splay_step(tree, p)? {
        #[cfg(feature = "tracing")]
        tracing::trace!(step = ?_step, ?p, "splay step");
        steps += 1;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(steps, "splay finished");
    Ok(steps)
}

/// The splay balancing policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Splay;

impl Splay {
    fn splay_to_root<T>(&mut self, tree: &mut LinkedBinaryTree<T>, p: Position) {
        if let Err(err) = splay(tree, p) {
            panic!("splay target {p:?} is not a live node: {err}");
        }
    }
}

impl Rebalance for Splay {
    fn on_insert<T>(&mut self, tree: &mut LinkedBinaryTree<T>, p: Position) {
        self.splay_to_root(tree, p);
    }

    fn on_delete<T>(&mut self, tree: &mut LinkedBinaryTree<T>, anchor: Option<Position>) {
        if let Some(p) = anchor {
            self.splay_to_root(tree, p);
        }
    }

    fn on_access<T>(&mut self, tree: &mut LinkedBinaryTree<T>, p: Position) {
        self.splay_to_root(tree, p);
    }
}
