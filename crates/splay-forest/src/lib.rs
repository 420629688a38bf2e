//! Arena-backed linked binary trees and a sorted map with pluggable
//! rebalancing.
//!
//! Nodes live in a single arena owned by the tree. Parent and child links
//! are `Option<u32>` indices instead of pointers, so the parent
//! back-reference never creates an ownership cycle. Callers hold opaque
//! [`Position`] handles, which are checked against the arena on every use:
//! a handle whose node was removed is rejected with
//! [`TreeError::InvalidPosition`] rather than reading a recycled slot.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`store`] | [`NodeStore`]: slot arena, generations, free list |
//! | [`tree`] | [`LinkedBinaryTree`]: root/child slots, traversals |
//! | [`rotate`] | single rotation and trinode restructure over indices |
//! | [`balance`] | [`Rebalance`] hooks and the no-op [`Unbalanced`] policy |
//! | [`splay`] | zig / zig-zig / zig-zag and the [`Splay`] policy |
//! | [`map`] | [`TreeMap`] and [`SplayMap`] |
//! | [`util`] | index-level navigation shared by all of the above |
//!
//! ```
//! use splay_forest::SplayMap;
//!
//! let mut map = SplayMap::<i32, &str>::new();
//! map.set(5, "five");
//! map.set(3, "three");
//! map.set(8, "eight");
//!
//! assert_eq!(map.get(&3), Ok(&"three"));
//! // The key just read is now at the root.
//! assert_eq!(map.root().and_then(|p| map.key(p).ok()), Some(&3));
//! assert_eq!(map.find_ge(&4), Some((&5, &"five")));
//! ```

pub mod balance;
pub mod error;
pub mod item;
pub mod map;
pub mod position;
pub mod print;
pub mod rotate;
pub mod splay;
pub mod store;
pub mod tree;
pub mod tree_node;
pub mod types;
pub mod util;

pub use balance::{Rebalance, Unbalanced};
pub use error::{MapError, TreeError};
pub use item::Item;
pub use map::{SplayMap, TreeMap};
pub use position::Position;
pub use splay::{splay, splay_step, Splay, SplayStep};
pub use store::NodeStore;
pub use tree::LinkedBinaryTree;
pub use tree_node::TreeNode;
pub use types::{Comparator, Node, Side};
