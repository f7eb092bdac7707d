//! The base `Dict` type and its constructors.

use crate::collections::{Entry, IntoKey, Iter, OrderedMap};
use crate::error::{DictError, Result};
use crate::Value;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;


/// Identifies a dict in diagnostics such as `KeyNotFound`.
///
/// Unless one is given explicitly, a dict is labelled with the call site that built it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Site(&'static Location<'static>),
    Named(Arc<str>),
}

impl Label {
    #[track_caller]
    pub fn caller() -> Self {
        Label::Site(Location::caller())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Site(location) => write!(
                f,
                "dict@{}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            Label::Named(name) => f.write_str(name),
        }
    }
}

/// An ordered dictionary with unique string keys.
///
/// A miss on a base `Dict` is not an error: `get` returns `None`. A key stored with a null
/// value (`Value::Null`, or `None` for `Option` values) still exists, and only `omit` removes
/// entries.
pub struct Dict<V = Value> {
    map: OrderedMap<V>,
    label: Label,
}

impl<V: Clone> Dict<V> {
    #[track_caller]
    pub fn new() -> Self {
        Self {
            map: OrderedMap::new(),
            label: Label::caller(),
        }
    }

    /// Builds a dict from `(key, value)` pairs, keeping their order. Empty, missing and
    /// duplicate keys are all `InvalidKey` errors.
    #[track_caller]
    pub fn from_entries<I, K>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKey,
    {
        let label = Label::caller();
        Ok(Self {
            map: OrderedMap::from_entries(entries)?,
            label,
        })
    }

    pub(crate) fn from_map(map: OrderedMap<V>, label: Label) -> Self {
        Self { map, label }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label: String = label.into();
        self.label = Label::Named(label.into());
        self
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.has(key)
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    pub fn get_index(&self, index: usize) -> Option<(&str, &V)> {
        self.map.get_index(index)
    }

    /// Returns a dict holding just the requested keys that exist, in request order. Missing
    /// keys are left out silently.
    pub fn get_multi<I, K>(&self, keys: I) -> Dict<V>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut out = OrderedMap::new();
        for key in keys {
            let key = key.as_ref();
            if let Some(value) = self.map.get(key) {
                out.set_valid(key.to_string(), value.clone());
            }
        }
        Dict::from_map(out, self.label.clone())
    }

    /// Sets one key, returning the value it replaced. Existing keys keep their position, new
    /// ones are appended.
    pub fn set<K: IntoKey>(&mut self, key: K, value: V) -> Result<Option<V>> {
        self.map.set(key, value)
    }

    /// Sets several keys from parallel sequences. All keys are validated, and the lengths
    /// compared, before anything is written.
    pub fn set_multi<IK, IV, K>(&mut self, keys: IK, values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
        K: IntoKey,
    {
        let pairs = zip_exact(keys, values)?;
        for (key, value) in pairs {
            self.map.set_valid(key, value);
        }
        Ok(())
    }

    pub fn set_index(&mut self, index: usize, value: V) -> Result<V> {
        self.map.set_index(index, value)
    }

    /// Returns a copy of this dict without `keys`. Keys that are not present are ignored.
    pub fn omit<I, K>(&self, keys: I) -> Dict<V>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        Dict::from_map(self.map.without(keys), self.label.clone())
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.map.keys()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.map.values()
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &Entry<V>> + ExactSizeIterator + '_ {
        self.map.entries()
    }

    pub fn iter(&self) -> Iter<'_, V> {
        self.map.iter()
    }

    pub fn as_ordered_map(&self) -> &OrderedMap<V> {
        &self.map
    }

    pub fn into_entries(self) -> Vec<Entry<V>> {
        self.map.into_entries().into_iter().collect()
    }
}

/// Validates keys and pairs them with values, failing on a length mismatch.
fn zip_exact<IK, IV, K, V>(keys: IK, values: IV) -> Result<Vec<(String, V)>>
where
    IK: IntoIterator<Item = K>,
    IV: IntoIterator<Item = V>,
    K: IntoKey,
{
    let keys: Vec<K> = keys.into_iter().collect();
    let values: Vec<V> = values.into_iter().collect();
    if keys.len() != values.len() {
        return Err(DictError::LengthMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }
    keys.into_iter()
        .zip(values)
        .map(|(key, value)| Ok((key.into_key()?, value)))
        .collect()
}

/// Builds a dict from parallel key and value sequences.
#[track_caller]
pub fn make_dict<IK, IV, K, V>(keys: IK, values: IV) -> Result<Dict<V>>
where
    IK: IntoIterator<Item = K>,
    IV: IntoIterator<Item = V>,
    K: IntoKey,
    V: Clone,
{
    let label = Label::caller();
    let pairs = zip_exact(keys, values)?;
    Ok(Dict::from_map(OrderedMap::from_entries(pairs)?, label))
}

/// Converts any keyed record, such as a `BTreeMap` or a list of `(Option<String>, V)` members,
/// into a dict in the record's iteration order.
#[track_caller]
pub fn as_dict<I, K, V>(record: I) -> Result<Dict<V>>
where
    I: IntoIterator<Item = (K, V)>,
    K: IntoKey,
    V: Clone,
{
    Dict::from_entries(record)
}

impl<V: Clone> Clone for Dict<V> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
            label: self.label.clone(),
        }
    }
}

impl<V: Clone> Default for Dict<V> {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

// Labels are diagnostics only and take no part in equality.
impl<V: Clone + PartialEq> PartialEq for Dict<V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<V: Clone + fmt::Debug> fmt::Debug for Dict<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ", self.label)?;
        fmt::Debug::fmt(&self.map, f)
    }
}

impl<'a, V: Clone> IntoIterator for &'a Dict<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Clone> IntoIterator for Dict<V> {
    type Item = (String, V);
    type IntoIter = std::iter::Map<im::vector::ConsumingIter<Entry<V>>, fn(Entry<V>) -> (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.map
            .into_entries()
            .into_iter()
            .map(Entry::into_parts as fn(Entry<V>) -> (String, V))
    }
}
