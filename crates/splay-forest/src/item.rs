/// Key-value pair stored by [`TreeMap`](crate::TreeMap).
///
/// The key is fixed once the item is built; the value can be changed in
/// place without reshaping the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<K, V> {
    key: K,
    value: V,
}

impl<K, V> Item<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, returning the previous one.
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
