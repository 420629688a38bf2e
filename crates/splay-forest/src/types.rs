//! Link trait and shared type aliases.
//!
//! Nodes never own each other. Every "pointer" is an `Option<u32>` index
//! into a `Vec`-backed arena, so the parent back-reference cannot form an
//! ownership cycle. Index-level helpers in [`util`](crate::util) and
//! [`rotate`](crate::rotate) take the arena as a slice and work with
//! indices only.

use std::cmp::Ordering;

/// Parent / left / right links of an arena node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Default comparator type used by [`TreeMap`](crate::TreeMap).
pub type Comparator<K> = fn(&K, &K) -> Ordering;

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
