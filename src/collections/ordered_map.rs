use super::entry::{Entry, IntoKey};
use crate::error::{DictError, KeyProblem, Result};
use im::{HashMap, HashSet, Vector};
use std::fmt;

/// Insertion-ordered map with unique, non-empty string keys.
///
/// Entries live in a persistent `im::Vector`, with a side `im::HashMap` from key to position.
/// Cloning is cheap and shares structure, so every transform can start from a copy of its
/// input without paying for the whole map.
pub struct OrderedMap<V> {
    entries: Vector<Entry<V>>,
    index: HashMap<String, usize>,
}

impl<V: Clone> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vector::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a map from `(key, value)` pairs in order. Duplicate keys are rejected rather than
    /// letting the last one win.
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKey,
    {
        let mut map = Self::new();
        for (key, value) in entries {
            let key = key.into_key()?;
            if map.index.contains_key(&key) {
                return Err(DictError::invalid_key(key, KeyProblem::Duplicate));
            }
            map.push_new(key, value);
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.get_full(key).map(|(_, value)| value)
    }

    /// Like `get`, but also reports the entry's position.
    pub fn get_full(&self, key: &str) -> Option<(usize, &V)> {
        let position = *self.index.get(key)?;
        self.entries
            .get(position)
            .map(|entry| (position, entry.value()))
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
        self.entries
            .get(index)
            .map(|entry| (entry.key(), entry.value()))
    }

    /// Updates an existing key in place, or appends a new entry at the end. Returns the value
    /// that was replaced, if any.
    pub fn set<K: IntoKey>(&mut self, key: K, value: V) -> Result<Option<V>> {
        let key = key.into_key()?;
        Ok(self.set_valid(key, value))
    }

    /// `set` for a key that is known to be valid already, e.g. one read out of another map.
    pub(crate) fn set_valid(&mut self, key: String, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&position) => {
                // the index only ever holds positions of live entries
                let slot = self.entries[position].value_mut();
                Some(std::mem::replace(slot, value))
            }
            None => {
                tracing::trace!(key = %key, position = self.entries.len(), "appending entry");
                self.push_new(key, value);
                None
            }
        }
    }

    /// Replaces the value at `index`, keeping its key. Positions past the end are an error; new
    /// entries always need a key.
    pub fn set_index(&mut self, index: usize, value: V) -> Result<V> {
        let len = self.entries.len();
        match self.entries.get_mut(index) {
            Some(entry) => Ok(std::mem::replace(entry.value_mut(), value)),
            None => Err(DictError::IndexOutOfRange {
                index,
                len,
                type_label: "dict",
            }),
        }
    }

    /// Returns a copy without the named keys. Keys that are not present are ignored.
    pub fn without<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut dropped = HashSet::new();
        for key in keys {
            let key = key.as_ref();
            if self.has(key) {
                dropped.insert(key.to_string());
            } else {
                tracing::trace!(key = %key, "omitted key was not present");
            }
        }
        if dropped.is_empty() {
            return self.clone();
        }
        let mut out = Self::new();
        for entry in self.entries.iter() {
            if !dropped.contains(entry.key()) {
                out.push_new(entry.key().to_string(), entry.value().clone());
            }
        }
        out
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(Entry::key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.entries.iter().map(Entry::value)
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Entry<V>> + ExactSizeIterator + '_ {
        self.entries.iter()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    pub fn into_entries(self) -> Vector<Entry<V>> {
        self.entries
    }

    fn push_new(&mut self, key: String, value: V) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push_back(Entry::from_valid(key, value));
    }
}

impl<V: Clone> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for OrderedMap<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

// The index is a function of the entries, so comparing entries is enough.
impl<V: Clone + PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for OrderedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over `(key, value)` pairs in insertion order.
pub struct Iter<'a, V> {
    inner: im::vector::Iter<'a, Entry<V>>,
}

impl<'a, V: Clone> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (entry.key(), entry.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V: Clone> DoubleEndedIterator for Iter<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|entry| (entry.key(), entry.value()))
    }
}

impl<'a, V: Clone> ExactSizeIterator for Iter<'a, V> {}
