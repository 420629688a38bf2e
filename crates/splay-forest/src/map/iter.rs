use std::cmp::Ordering;
use std::iter::FusedIterator;

use super::TreeMap;
use crate::balance::Rebalance;
use crate::item::Item;
use crate::tree::LinkedBinaryTree;
use crate::util::{first, last, next, prev};

/// Entries of a [`TreeMap`] in key order; double ended.
pub struct Iter<'a, K, V> {
    tree: &'a LinkedBinaryTree<Item<K, V>>,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(tree: &'a LinkedBinaryTree<Item<K, V>>) -> Self {
        let nodes = tree.store().nodes();
        Self {
            tree,
            front: first(nodes, tree.root_index()),
            back: last(nodes, tree.root_index()),
            remaining: tree.len(),
        }
    }

    fn pair(&self, i: u32) -> (&'a K, &'a V) {
        let tree = self.tree;
        let item = tree.get(i);
        (item.key(), item.value())
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = next(self.tree.store().nodes(), i);
        Some(self.pair(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.back?;
        self.remaining -= 1;
        self.back = prev(self.tree.store().nodes(), i);
        Some(self.pair(i))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

pub struct Keys<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    pub(super) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

/// Entries with keys in `[start, stop)`, produced by
/// [`TreeMap::find_range`].
pub struct Range<'a, K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    map: &'a TreeMap<K, V, B, C>,
    curr: Option<u32>,
    stop: Option<&'a K>,
}

impl<'a, K, V, B, C> Range<'a, K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    pub(super) fn new(map: &'a TreeMap<K, V, B, C>, curr: Option<u32>, stop: Option<&'a K>) -> Self {
        Self { map, curr, stop }
    }
}

impl<'a, K, V, B, C> Iterator for Range<'a, K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        let i = self.curr?;
        let (k, v) = map.entry_at(i);
        if let Some(stop) = self.stop {
            if (map.comparator)(k, stop) != Ordering::Less {
                self.curr = None;
                return None;
            }
        }
        self.curr = next(map.tree.store().nodes(), i);
        Some((k, v))
    }
}

impl<K, V, B, C> FusedIterator for Range<'_, K, V, B, C>
where
    B: Rebalance,
    C: Fn(&K, &K) -> Ordering,
{
}
