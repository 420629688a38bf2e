use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of one tree instance. Positions remember the tree that minted
/// them so a handle cannot be used on another tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(u32);

impl TreeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to a live node of a specific tree.
///
/// A position stays valid until its node is removed. Using it afterwards,
/// or on a different tree, yields
/// [`TreeError::InvalidPosition`](crate::TreeError::InvalidPosition).
/// Rotations and value updates keep positions valid; they move nodes, not
/// elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) tree: TreeId,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}
