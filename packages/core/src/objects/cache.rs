//! Compute-once value caching

use std::hash::Hash;

use hashbrown::HashMap;

/// Return the cached value for `key`, computing it with `get_value` only
/// the first time the key is seen
pub fn get_cached_value<'c, K, V, F>(key: K, get_value: F, cache: &'c mut HashMap<K, V>) -> &'c V
where
    K: Eq + Hash,
    F: FnOnce(&K) -> V,
{
    cache.entry(key).or_insert_with_key(|key| get_value(key))
}

/// Keyed cache that counts hits and misses
#[derive(Debug, Clone)]
pub struct ValueCache<K, V> {
    entries: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for ValueCache<K, V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: Eq + Hash, V> ValueCache<K, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, computed with `get_value` on first access
    pub fn get_or_compute<F>(&mut self, key: K, get_value: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        if self.entries.contains_key(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        get_cached_value(key, get_value, &mut self.entries)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once_per_key() {
        let calls = Cell::new(0);
        let mut cache = HashMap::new();
        let square = |k: &u32| {
            calls.set(calls.get() + 1);
            k * k
        };

        assert_eq!(*get_cached_value(4, square, &mut cache), 16);
        assert_eq!(*get_cached_value(4, square, &mut cache), 16);
        assert_eq!(*get_cached_value(5, square, &mut cache), 25);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn counts_hits_and_misses() {
        let mut cache = ValueCache::new();
        cache.get_or_compute("a", |k| k.len());
        cache.get_or_compute("a", |_| unreachable!("cached"));
        cache.get_or_compute("bb", |k| k.len());

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 2);
        assert_eq!(cache.get(&"bb"), Some(&2));
    }
}
