//! Capability traits shared by dicts, sequences and records.
//!
//! Reading and writing are split so that a wrapper can forward the read half of a container
//! untouched while answering every write itself; see `Immutable`.

use crate::collections::{IntoKey, OrderedMap};
use crate::dict::Label;
use crate::error::{DictError, Result};
use crate::Dict;
use std::collections::BTreeMap;

/// Positional read access.
pub trait Container {
    type Value;

    /// Short name of the container kind, used in error messages.
    fn type_label(&self) -> &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value_at(&self, index: usize) -> Option<&Self::Value>;

    /// Iterates values in position order, using the container's own iterator.
    fn iter_values(&self) -> Values<'_, Self::Value>;
}

/// Read access by key.
///
/// `lookup` carries the container's miss policy: a plain dict or record answers `Ok(None)`,
/// a `DefaultDict` answers with its default, and a `StrictDict` fails with `KeyNotFound`.
pub trait Keyed: Container {
    fn lookup(&self, key: &str) -> Result<Option<&Self::Value>>;

    fn has(&self, key: &str) -> bool;

    fn key_at(&self, index: usize) -> Option<&str>;

    fn label(&self) -> Label {
        Label::Named(self.type_label().into())
    }

    /// Collects the requested keys that exist into a new dict, in request order. A strict
    /// container fails on the first requested key that is missing.
    fn lookup_multi<I, K>(&self, keys: I) -> Result<Dict<Self::Value>>
    where
        Self: Sized,
        Self::Value: Clone,
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut out = OrderedMap::new();
        for key in keys {
            let key = key.as_ref();
            if !self.has(key) {
                // permissive containers answer Ok here and the key is skipped
                self.lookup(key)?;
                continue;
            }
            if let Some(value) = self.lookup(key)? {
                out.set_valid(key.to_string(), value.clone());
            }
        }
        Ok(Dict::from_map(out, self.label()))
    }

    fn iter_keys(&self) -> Keys<'_>;

    fn iter_entries(&self) -> Entries<'_, Self::Value>;
}

/// Positional write access.
pub trait Writable: Container {
    /// Replaces the value at `index`, returning the old one. Sequences also accept
    /// `index == len()`, which appends and returns `None`.
    fn set_index(&mut self, index: usize, value: Self::Value) -> Result<Option<Self::Value>>;
}

/// Write access by key.
pub trait KeyedWritable: Keyed + Writable {
    fn set(&mut self, key: &str, value: Self::Value) -> Result<Option<Self::Value>>;

    fn set_multi<IK, IV, K>(&mut self, keys: IK, values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = Self::Value>,
        K: AsRef<str>;
}

trait Cursor<T>: DoubleEndedIterator<Item = T> + ExactSizeIterator {}

impl<T, I> Cursor<T> for I where I: DoubleEndedIterator<Item = T> + ExactSizeIterator {}

pub struct Values<'a, V> {
    inner: Box<dyn Cursor<&'a V> + 'a>,
}

impl<'a, V> Values<'a, V> {
    pub fn new<I>(iter: I) -> Self
    where
        I: DoubleEndedIterator<Item = &'a V> + ExactSizeIterator + 'a,
    {
        Values {
            inner: Box::new(iter),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> DoubleEndedIterator for Values<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, V> ExactSizeIterator for Values<'a, V> {}

pub struct Keys<'a> {
    inner: Box<dyn Cursor<&'a str> + 'a>,
}

impl<'a> Keys<'a> {
    pub fn new<I>(iter: I) -> Self
    where
        I: DoubleEndedIterator<Item = &'a str> + ExactSizeIterator + 'a,
    {
        Keys {
            inner: Box::new(iter),
        }
    }
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Keys<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a> ExactSizeIterator for Keys<'a> {}

pub struct Entries<'a, V> {
    inner: Box<dyn Cursor<(&'a str, &'a V)> + 'a>,
}

impl<'a, V> Entries<'a, V> {
    pub fn new<I>(iter: I) -> Self
    where
        I: DoubleEndedIterator<Item = (&'a str, &'a V)> + ExactSizeIterator + 'a,
    {
        Entries {
            inner: Box::new(iter),
        }
    }
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> DoubleEndedIterator for Entries<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a, V> ExactSizeIterator for Entries<'a, V> {}

impl<V: Clone> Container for Dict<V> {
    type Value = V;

    fn type_label(&self) -> &'static str {
        "dict"
    }

    fn len(&self) -> usize {
        Dict::len(self)
    }

    fn value_at(&self, index: usize) -> Option<&V> {
        self.get_index(index).map(|(_, value)| value)
    }

    fn iter_values(&self) -> Values<'_, V> {
        Values::new(self.values())
    }
}

impl<V: Clone> Keyed for Dict<V> {
    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        Ok(self.get(key))
    }

    fn has(&self, key: &str) -> bool {
        Dict::has(self, key)
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.get_index(index).map(|(key, _)| key)
    }

    fn label(&self) -> Label {
        Dict::label(self).clone()
    }

    fn iter_keys(&self) -> Keys<'_> {
        Keys::new(self.keys())
    }

    fn iter_entries(&self) -> Entries<'_, V> {
        Entries::new(self.iter())
    }
}

impl<V: Clone> Writable for Dict<V> {
    fn set_index(&mut self, index: usize, value: V) -> Result<Option<V>> {
        Dict::set_index(self, index, value).map(Some)
    }
}

impl<V: Clone> KeyedWritable for Dict<V> {
    fn set(&mut self, key: &str, value: V) -> Result<Option<V>> {
        Dict::set(self, key, value)
    }

    fn set_multi<IK, IV, K>(&mut self, keys: IK, values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
        K: AsRef<str>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        let keys: Vec<&str> = keys.iter().map(|key| key.as_ref()).collect();
        Dict::set_multi(self, keys, values)
    }
}

/// A plain sequence. It has positions but no keys.
impl<T> Container for Vec<T> {
    type Value = T;

    fn type_label(&self) -> &'static str {
        "list"
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn value_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn iter_values(&self) -> Values<'_, T> {
        Values::new(self.iter())
    }
}

impl<T> Writable for Vec<T> {
    fn set_index(&mut self, index: usize, value: T) -> Result<Option<T>> {
        let len = Vec::len(self);
        if index < len {
            Ok(Some(std::mem::replace(&mut self[index], value)))
        } else if index == len {
            self.push(value);
            Ok(None)
        } else {
            Err(DictError::IndexOutOfRange {
                index,
                len,
                type_label: "list",
            })
        }
    }
}

/// A generic named record. Positions follow the map's key order.
impl<V> Container for BTreeMap<String, V> {
    type Value = V;

    fn type_label(&self) -> &'static str {
        "record"
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn value_at(&self, index: usize) -> Option<&V> {
        self.values().nth(index)
    }

    fn iter_values(&self) -> Values<'_, V> {
        Values::new(self.values())
    }
}

impl<V> Keyed for BTreeMap<String, V> {
    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        Ok(self.get(key))
    }

    fn has(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.keys().nth(index).map(String::as_str)
    }

    fn iter_keys(&self) -> Keys<'_> {
        Keys::new(self.keys().map(String::as_str))
    }

    fn iter_entries(&self) -> Entries<'_, V> {
        Entries::new(self.iter().map(|(key, value)| (key.as_str(), value)))
    }
}

impl<V> Writable for BTreeMap<String, V> {
    fn set_index(&mut self, index: usize, value: V) -> Result<Option<V>> {
        let len = BTreeMap::len(self);
        match self.values_mut().nth(index) {
            Some(slot) => Ok(Some(std::mem::replace(slot, value))),
            None => Err(DictError::IndexOutOfRange {
                index,
                len,
                type_label: "record",
            }),
        }
    }
}

impl<V> KeyedWritable for BTreeMap<String, V> {
    fn set(&mut self, key: &str, value: V) -> Result<Option<V>> {
        Ok(self.insert(key.into_key()?, value))
    }

    fn set_multi<IK, IV, K>(&mut self, keys: IK, values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
        K: AsRef<str>,
    {
        let keys: Vec<K> = keys.into_iter().collect();
        let values: Vec<V> = values.into_iter().collect();
        if keys.len() != values.len() {
            return Err(DictError::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }
        let keys = keys
            .iter()
            .map(|key| key.as_ref().into_key())
            .collect::<Result<Vec<_>>>()?;
        self.extend(keys.into_iter().zip(values));
        Ok(())
    }
}
