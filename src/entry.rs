/// A stored key-value pair. Neither half can be changed once it is in a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consume the entry, returning `(key, value)`
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
