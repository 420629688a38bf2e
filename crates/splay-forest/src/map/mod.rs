//! Sorted map on a linked binary search tree.
//!
//! [`TreeMap`] keeps keys in strict comparator order (no duplicates) and
//! reports every structural change to a [`Rebalance`] policy. With the
//! default [`Unbalanced`] policy it is a plain BST; [`SplayMap`] plugs in
//! [`Splay`].

mod iter;

pub use iter::{Iter, Keys, Range, Values};

use std::cmp::Ordering;
use std::fmt;

use crate::balance::{Rebalance, Unbalanced};
use crate::error::{MapError, TreeError};
use crate::item::Item;
use crate::position::Position;
use crate::splay::Splay;
use crate::tree::LinkedBinaryTree;
use crate::types::{Comparator, Side};
use crate::util::{first, get_l, get_p, get_r, last, next, prev, subtree_last};

/// Ordered map using the splay policy.
pub type SplayMap<K, V, C = Comparator<K>> = TreeMap<K, V, Splay, C>;

pub struct TreeMap<K, V, B = Unbalanced, C = Comparator<K>>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    tree: LinkedBinaryTree<Item<K, V>>,
    policy: B,
    comparator: C,
}

impl<K, V, B> TreeMap<K, V, B, Comparator<K>>
where
    K: Ord,
    B: Rebalance + Default,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocates arena room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_parts(B::default(), <K as Ord>::cmp, capacity)
    }
}

impl<K, V, B> Default for TreeMap<K, V, B, Comparator<K>>
where
    K: Ord,
    B: Rebalance + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, B> TreeMap<K, V, B, Comparator<K>>
where
    K: Ord,
    B: Rebalance,
{
    pub fn with_policy(policy: B) -> Self {
        Self::with_parts(policy, <K as Ord>::cmp, 0)
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    B: Rebalance + Default,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_parts(B::default(), comparator, 0)
    }
}

impl<K, V, B, C> TreeMap<K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_parts(policy: B, comparator: C, capacity: usize) -> Self {
        Self {
            tree: LinkedBinaryTree::with_capacity(capacity),
            policy,
            comparator,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying linked tree, for shape inspection and traversals.
    pub fn tree(&self) -> &LinkedBinaryTree<Item<K, V>> {
        &self.tree
    }

    pub fn policy(&self) -> &B {
        &self.policy
    }

    pub fn root(&self) -> Option<Position> {
        self.tree.root()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    #[inline]
    fn key_at(&self, i: u32) -> &K {
        self.tree.get(i).key()
    }

    #[inline]
    fn compare_at(&self, key: &K, i: u32) -> Ordering {
        (self.comparator)(key, self.key_at(i))
    }

    fn entry_at(&self, i: u32) -> (&K, &V) {
        let item = self.tree.get(i);
        (item.key(), item.value())
    }

    /// Descends from the root toward `key`. Returns the matching node or,
    /// on a miss, the last node visited.
    fn search(&self, key: &K) -> Option<u32> {
        let nodes = self.tree.store().nodes();
        let mut curr = self.tree.root_index()?;
        loop {
            let child = match self.compare_at(key, curr) {
                Ordering::Equal => return Some(curr),
                Ordering::Less => get_l(nodes, curr),
                Ordering::Greater => get_r(nodes, curr),
            };
            match child {
                Some(c) => curr = c,
                None => return Some(curr),
            }
        }
    }

    fn access(&mut self, i: u32) {
        let p = self.tree.position(i);
        self.policy.on_access(&mut self.tree, p);
    }

    /// Searches for `key`, runs the access hook on the node found and
    /// returns its index. The hook never frees nodes, so the index stays
    /// valid.
    fn find_index(&mut self, key: &K) -> Option<u32> {
        let i = self.search(key)?;
        self.access(i);
        Some(i)
    }

    fn find_exact(&mut self, key: &K) -> Result<u32, MapError> {
        let i = self.find_index(key).ok_or(MapError::NotFound)?;
        match self.compare_at(key, i) {
            Ordering::Equal => Ok(i),
            _ => Err(MapError::NotFound),
        }
    }

    /// Position holding `key`, or the nearest node visited while looking for
    /// it. `None` only for an empty map.
    pub fn find_position(&mut self, key: &K) -> Option<Position> {
        self.find_index(key).map(|i| self.tree.position(i))
    }

    pub fn get(&mut self, key: &K) -> Result<&V, MapError> {
        let i = self.find_exact(key)?;
        Ok(self.tree.get(i).value())
    }

    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, MapError> {
        let i = self.find_exact(key)?;
        Ok(self.tree.get_mut(i).value_mut())
    }

    /// Like [`get`](Self::get) but falls back to `default` on a miss.
    pub fn get_or<'a>(&'a mut self, key: &K, default: &'a V) -> &'a V {
        match self.find_exact(key) {
            Ok(i) => self.tree.get(i).value(),
            Err(_) => default,
        }
    }

    pub fn contains_key(&mut self, key: &K) -> bool {
        self.find_exact(key).is_ok()
    }

    /// Finds the node holding `key`, or the empty child slot where it
    /// would be attached (`None` for an empty tree).
    fn locate(&self, key: &K) -> Result<u32, Option<(u32, Side)>> {
        let Some(i) = self.search(key) else {
            return Err(None);
        };
        match self.compare_at(key, i) {
            Ordering::Equal => Ok(i),
            Ordering::Less => Err(Some((i, Side::Left))),
            Ordering::Greater => Err(Some((i, Side::Right))),
        }
    }

    fn insert_at(&mut self, slot: Option<(u32, Side)>, key: K, value: V) -> u32 {
        let leaf = self.tree.insert_leaf(slot, Item::new(key, value));
        let p = self.tree.position(leaf);
        self.policy.on_insert(&mut self.tree, p);
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len(), "inserted new key");
        leaf
    }

    /// Inserts or overwrites. Returns the previous value when `key` was
    /// already present.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.locate(&key) {
            Ok(i) => {
                let old = self.tree.get_mut(i).set_value(value);
                self.access(i);
                Some(old)
            }
            Err(slot) => {
                self.insert_at(slot, key, value);
                None
            }
        }
    }

    /// Returns the value for `key`, inserting `value` first if absent.
    pub fn set_default(&mut self, key: K, value: V) -> &mut V {
        let i = match self.locate(&key) {
            Ok(i) => {
                self.access(i);
                i
            }
            Err(slot) => self.insert_at(slot, key, value),
        };
        self.tree.get_mut(i).value_mut()
    }

    /// Removes `key` and returns its value.
    pub fn delete_key(&mut self, key: &K) -> Result<V, MapError> {
        let Some(i) = self.search(key) else {
            return Err(MapError::NotFound);
        };
        if self.compare_at(key, i) != Ordering::Equal {
            self.access(i);
            return Err(MapError::NotFound);
        }
        Ok(self.delete_index(i).1)
    }

    /// Removes the entry at `p`.
    ///
    /// A node with two children first trades items with its in-order
    /// predecessor, and the predecessor's node is the one unlinked. `p`
    /// itself then stays live and holds the predecessor's entry.
    pub fn delete(&mut self, p: Position) -> Result<(K, V), TreeError> {
        let i = self.tree.index(p)?;
        Ok(self.delete_index(i))
    }

    fn delete_index(&mut self, mut i: u32) -> (K, V) {
        let nodes = self.tree.store().nodes();
        if let (Some(l), Some(_)) = (get_l(nodes, i), get_r(nodes, i)) {
            let pred = subtree_last(nodes, l);
            self.tree.swap_elements(i, pred);
            i = pred;
        }
        let anchor = get_p(self.tree.store().nodes(), i);
        let item = self.tree.remove_index(i);
        let anchor = anchor.map(|a| self.tree.position(a));
        self.policy.on_delete(&mut self.tree, anchor);
        #[cfg(feature = "tracing")]
        tracing::debug!(len = self.len(), "deleted key");
        item.into_pair()
    }

    /// Removes and returns the entry with the smallest key.
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        let i = first(self.tree.store().nodes(), self.tree.root_index())?;
        Some(self.delete_index(i))
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        let i = last(self.tree.store().nodes(), self.tree.root_index())?;
        Some(self.delete_index(i))
    }

    pub fn first(&self) -> Option<Position> {
        first(self.tree.store().nodes(), self.tree.root_index()).map(|i| self.tree.position(i))
    }

    pub fn last(&self) -> Option<Position> {
        last(self.tree.store().nodes(), self.tree.root_index()).map(|i| self.tree.position(i))
    }

    /// In-order predecessor of `p`; `Ok(None)` for the first position.
    pub fn before(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let i = self.tree.index(p)?;
        Ok(prev(self.tree.store().nodes(), i).map(|j| self.tree.position(j)))
    }

    /// In-order successor of `p`; `Ok(None)` for the last position.
    pub fn after(&self, p: Position) -> Result<Option<Position>, TreeError> {
        let i = self.tree.index(p)?;
        Ok(next(self.tree.store().nodes(), i).map(|j| self.tree.position(j)))
    }

    pub fn key(&self, p: Position) -> Result<&K, TreeError> {
        Ok(self.tree.element(p)?.key())
    }

    pub fn value(&self, p: Position) -> Result<&V, TreeError> {
        Ok(self.tree.element(p)?.value())
    }

    pub fn value_mut(&mut self, p: Position) -> Result<&mut V, TreeError> {
        Ok(self.tree.element_mut(p)?.value_mut())
    }

    pub fn entry(&self, p: Position) -> Result<(&K, &V), TreeError> {
        let i = self.tree.index(p)?;
        Ok(self.entry_at(i))
    }

    pub fn find_min(&self) -> Option<(&K, &V)> {
        first(self.tree.store().nodes(), self.tree.root_index()).map(|i| self.entry_at(i))
    }

    pub fn find_max(&self) -> Option<(&K, &V)> {
        last(self.tree.store().nodes(), self.tree.root_index()).map(|i| self.entry_at(i))
    }

    // A failed descent ends at either the floor or the ceiling of `key`, so
    // each bound query needs at most one step from the anchor.

    fn floor_index(&mut self, key: &K, strict: bool) -> Option<u32> {
        let i = self.find_index(key)?;
        match self.compare_at(key, i) {
            Ordering::Greater => Some(i),
            Ordering::Equal if !strict => Some(i),
            _ => prev(self.tree.store().nodes(), i),
        }
    }

    fn ceiling_index(&mut self, key: &K, strict: bool) -> Option<u32> {
        let i = self.find_index(key)?;
        match self.compare_at(key, i) {
            Ordering::Less => Some(i),
            Ordering::Equal if !strict => Some(i),
            _ => next(self.tree.store().nodes(), i),
        }
    }

    /// Entry with the greatest key `<= key`.
    pub fn find_le(&mut self, key: &K) -> Option<(&K, &V)> {
        let i = self.floor_index(key, false)?;
        Some(self.entry_at(i))
    }

    /// Entry with the greatest key `< key`.
    pub fn find_lt(&mut self, key: &K) -> Option<(&K, &V)> {
        let i = self.floor_index(key, true)?;
        Some(self.entry_at(i))
    }

    /// Entry with the least key `>= key`.
    pub fn find_ge(&mut self, key: &K) -> Option<(&K, &V)> {
        let i = self.ceiling_index(key, false)?;
        Some(self.entry_at(i))
    }

    /// Entry with the least key `> key`.
    pub fn find_gt(&mut self, key: &K) -> Option<(&K, &V)> {
        let i = self.ceiling_index(key, true)?;
        Some(self.entry_at(i))
    }

    /// Entries with `start <= key < stop`, in key order. A missing `start`
    /// begins at the minimum; a missing `stop` runs to the maximum.
    pub fn find_range<'a>(&'a mut self, start: Option<&K>, stop: Option<&'a K>) -> Range<'a, K, V, B, C> {
        let front = match start {
            Some(start) => self.ceiling_index(start, false),
            None => first(self.tree.store().nodes(), self.tree.root_index()),
        };
        Range::new(&*self, front, stop)
    }

    /// Entries in key order. Reverse with `.rev()`.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.tree)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Keys from largest to smallest.
    pub fn keys_rev(&self) -> std::iter::Rev<Keys<'_, K, V>> {
        self.keys().rev()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Dumps the tree shape with each node labelled by its key.
    pub fn print(&self, tab: &str) -> String
    where
        K: fmt::Debug,
    {
        self.tree.print(tab, |item| format!("{:?}", item.key()))
    }
}

impl<K, V, B, C> fmt::Debug for TreeMap<K, V, B, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, B, C> Extend<(K, V)> for TreeMap<K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.set(k, v);
        }
    }
}

impl<K, V, B> FromIterator<(K, V)> for TreeMap<K, V, B, Comparator<K>>
where
    K: Ord,
    B: Rebalance + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, B, C> IntoIterator for &'a TreeMap<K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
