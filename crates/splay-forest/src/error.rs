//! Error types for the tree and map layers.

use thiserror::Error;

/// Structural errors raised by the node store, the linked tree and the
/// rotation primitive.
///
/// All of these indicate a programming mistake on the caller's side: a
/// position that outlived its node, a slot that is already taken, or a
/// rotation requested on a node without the required ancestors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("position does not refer to a live node of this tree")]
    InvalidPosition,
    #[error("target slot is already occupied")]
    DuplicateSlot,
    #[error("cannot delete a node with two children")]
    TwoChildren,
    #[error("position must be a leaf")]
    NotLeaf,
    #[error("cannot rotate the root")]
    NoParent,
    #[error("trinode restructure requires a grandparent")]
    NoGrandparent,
}

/// Errors raised by [`TreeMap`](crate::TreeMap) operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    #[error("key not found")]
    NotFound,
    #[error(transparent)]
    Tree(#[from] TreeError),
}
