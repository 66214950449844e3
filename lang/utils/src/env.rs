//! Persistent environments shared by every pass that threads a scope.

use std::{fmt::Debug, hash::Hash};

/// An immutable name-to-payload map.
///
/// `update` never touches the receiver; it hands back a new environment that
/// shares structure with the old one. Binding a name that is already present
/// shadows it in the new environment only, so sibling subtrees that start
/// from the same environment never observe each other's bindings.
#[derive(Clone)]
pub struct Env<K, V>
where
    K: Hash + Eq,
{
    inner: im::HashMap<K, V>,
}

impl<K, V> Env<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Env { inner: im::HashMap::new() }
    }

    #[inline]
    #[must_use]
    pub fn update(&self, key: K, value: V) -> Self {
        Env { inner: self.inner.update(key, value) }
    }

    #[must_use]
    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }
}

impl<K, V> Default for Env<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for Env<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}
