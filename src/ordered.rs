//! Last-update ordered containers
//!
//! `LastUpdateMap` and `LastUpdateSet` keep entries in insertion order, with
//! one twist over a plain index map: re-inserting an existing key relocates
//! it to the most-recent position. The whole pipeline depends on this
//! ordering discipline — variable keys, condition rows and truth-table
//! buckets all iterate in "last updated" order.
//!
//! Both types are thin wrappers over `indexmap`; relocation is implemented
//! as a shift-remove followed by an append rather than a pure overwrite.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::hash::Hash;

/// Insertion-ordered map where updating an existing key moves it to the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastUpdateMap<K: Hash + Eq, V> {
    inner: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> LastUpdateMap<K, V> {
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Insert a key-value pair, relocating the key to the most-recent
    /// position if it was already present. Returns the previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.inner.shift_remove(&key);
        self.inner.insert(key, value);
        previous
    }

    /// Update a value in place without relocating its key.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Remove a key, shifting later entries down to preserve order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.inner.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.inner.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Hash + Eq, V> Default for LastUpdateMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality disregards order, matching the underlying index map.
impl<K: Hash + Eq, V: PartialEq> PartialEq for LastUpdateMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Hash + Eq, V: Eq> Eq for LastUpdateMap<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for LastUpdateMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Hash + Eq, V> IntoIterator for LastUpdateMap<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a LastUpdateMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Insertion-ordered set where re-inserting an element moves it to the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastUpdateSet<T: Hash + Eq> {
    inner: IndexSet<T>,
}

impl<T: Hash + Eq> LastUpdateSet<T> {
    pub fn new() -> Self {
        Self {
            inner: IndexSet::new(),
        }
    }

    /// Insert a value, relocating it to the most-recent position if already
    /// present. Returns `true` when the value was not present before.
    pub fn insert(&mut self, value: T) -> bool {
        let fresh = !self.inner.shift_remove(&value);
        self.inner.insert(value);
        fresh
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Hash + Eq + Clone> LastUpdateSet<T> {
    /// Union preserving this set's order first, then the other's.
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }
}

impl<T: Hash + Eq> Default for LastUpdateSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality disregards order, matching the underlying index set.
impl<T: Hash + Eq> PartialEq for LastUpdateSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for LastUpdateSet<T> {}

impl<T: Hash + Eq> Extend<T> for LastUpdateSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for LastUpdateSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq> IntoIterator for LastUpdateSet<T> {
    type Item = T;
    type IntoIter = indexmap::set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a LastUpdateSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
