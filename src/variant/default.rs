use crate::access::{Container, Entries, Keyed, KeyedWritable, Keys, Values, Writable};
use crate::dict::Label;
use crate::error::Result;
use crate::{Dict, Value};
use std::ops::{Deref, DerefMut};

/// A dict that answers misses with a fallback value instead of `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultDict<V: Clone = Value> {
    dict: Dict<V>,
    default: V,
}

impl<V: Clone> DefaultDict<V> {
    pub fn new(dict: Dict<V>, default: V) -> Self {
        Self { dict, default }
    }

    /// The stored value for `key`, or the default when there is none.
    pub fn get(&self, key: &str) -> &V {
        self.dict.get(key).unwrap_or(&self.default)
    }

    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Reconfigures the fallback, returning the previous one.
    pub fn set_default(&mut self, default: V) -> V {
        std::mem::replace(&mut self.default, default)
    }

    /// Like `Dict::omit`, but keeps the default.
    pub fn omit<I, K>(&self, keys: I) -> DefaultDict<V>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        DefaultDict::new(self.dict.omit(keys), self.default.clone())
    }

    pub fn into_inner(self) -> Dict<V> {
        self.dict
    }

    pub fn into_parts(self) -> (Dict<V>, V) {
        (self.dict, self.default)
    }
}

/// Wraps `dict` so that misses return `default`.
pub fn default_dict<V: Clone>(dict: Dict<V>, default: V) -> DefaultDict<V> {
    DefaultDict::new(dict, default)
}

/// Rebuilds `dict` with a new default. `DefaultDict`s deref to their dict, so this also
/// replaces the default of an existing one.
pub fn with_default<V: Clone>(dict: &Dict<V>, default: V) -> DefaultDict<V> {
    DefaultDict::new(dict.clone(), default)
}

impl<V: Clone> Deref for DefaultDict<V> {
    type Target = Dict<V>;

    fn deref(&self) -> &Dict<V> {
        &self.dict
    }
}

impl<V: Clone> DerefMut for DefaultDict<V> {
    fn deref_mut(&mut self) -> &mut Dict<V> {
        &mut self.dict
    }
}

impl<V: Clone> Container for DefaultDict<V> {
    type Value = V;

    fn type_label(&self) -> &'static str {
        "default_dict"
    }

    fn len(&self) -> usize {
        self.dict.len()
    }

    fn value_at(&self, index: usize) -> Option<&V> {
        self.dict.value_at(index)
    }

    fn iter_values(&self) -> Values<'_, V> {
        self.dict.iter_values()
    }
}

impl<V: Clone> Keyed for DefaultDict<V> {
    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        Ok(Some(self.get(key)))
    }

    fn has(&self, key: &str) -> bool {
        self.dict.has(key)
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.dict.key_at(index)
    }

    fn label(&self) -> Label {
        self.dict.label().clone()
    }

    fn iter_keys(&self) -> Keys<'_> {
        self.dict.iter_keys()
    }

    fn iter_entries(&self) -> Entries<'_, V> {
        self.dict.iter_entries()
    }
}

impl<V: Clone> Writable for DefaultDict<V> {
    fn set_index(&mut self, index: usize, value: V) -> Result<Option<V>> {
        Writable::set_index(&mut self.dict, index, value)
    }
}

impl<V: Clone> KeyedWritable for DefaultDict<V> {
    fn set(&mut self, key: &str, value: V) -> Result<Option<V>> {
        self.dict.set(key, value)
    }

    fn set_multi<IK, IV, K>(&mut self, keys: IK, values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
        K: AsRef<str>,
    {
        KeyedWritable::set_multi(&mut self.dict, keys, values)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dict;

    #[test]
    fn test_miss_returns_default() {
        let d = default_dict(dict!(a = 1).unwrap(), 0);
        assert_eq!(&1, d.get("a"));
        assert_eq!(&0, d.get("b"));
        assert!(!d.has("b"));
        assert_eq!(Ok(Some(&0)), d.lookup("b"));
    }

    #[test]
    fn test_reconfigure_default() {
        let mut d = default_dict(dict!(a = 1).unwrap(), 0);
        assert_eq!(0, d.set_default(-1));
        assert_eq!(&-1, d.get("missing"));

        let rebuilt = with_default(&d, 5);
        assert_eq!(&5, rebuilt.get("missing"));
        assert_eq!(&-1, d.get("missing"));
    }

    #[test]
    fn test_multi_read_omits_missing() {
        let d = default_dict(dict!(a = 1, b = 2).unwrap(), 0);
        let sub = d.lookup_multi(vec!["b", "x"]).unwrap();
        assert_eq!(vec!["b"], sub.keys().collect::<Vec<_>>());
        assert_eq!(sub, d.get_multi(vec!["b", "x"]));
    }

    #[test]
    fn test_writes_go_to_the_dict() {
        let mut d = default_dict(dict!(a = 1).unwrap(), 0);
        d.set("b", 2).unwrap();
        assert_eq!(&2, d.get("b"));
        let trimmed = d.omit(vec!["a"]);
        assert_eq!(&0, trimmed.get("a"));
        assert_eq!(vec![&2], trimmed.values().collect::<Vec<_>>());
    }
}
