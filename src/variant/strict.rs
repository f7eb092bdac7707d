use crate::access::{Container, Entries, Keyed, KeyedWritable, Keys, Values, Writable};
use crate::dict::Label;
use crate::error::{DictError, Result};
use crate::{Dict, Value};
use std::ops::{Deref, DerefMut};

/// A dict whose misses are `KeyNotFound` errors.
#[derive(Clone, Debug, PartialEq)]
pub struct StrictDict<V: Clone = Value> {
    dict: Dict<V>,
}

impl<V: Clone> StrictDict<V> {
    pub fn new(dict: Dict<V>) -> Self {
        Self { dict }
    }

    pub fn get(&self, key: &str) -> Result<&V> {
        self.dict.get(key).ok_or_else(|| self.not_found(key))
    }

    /// Reads several keys at once. The first requested key that is missing fails the whole
    /// read.
    pub fn get_multi<I, K>(&self, keys: I) -> Result<Dict<V>>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        self.lookup_multi(keys)
    }

    /// Like `Dict::omit`, but stays strict.
    pub fn omit<I, K>(&self, keys: I) -> StrictDict<V>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        StrictDict::new(self.dict.omit(keys))
    }

    pub fn into_inner(self) -> Dict<V> {
        self.dict
    }

    fn not_found(&self, key: &str) -> DictError {
        DictError::KeyNotFound {
            key: key.to_string(),
            label: self.dict.label().to_string(),
        }
    }
}

pub fn strict_dict<V: Clone>(dict: Dict<V>) -> StrictDict<V> {
    StrictDict::new(dict)
}

impl<V: Clone> Deref for StrictDict<V> {
    type Target = Dict<V>;

    fn deref(&self) -> &Dict<V> {
        &self.dict
    }
}

impl<V: Clone> DerefMut for StrictDict<V> {
    fn deref_mut(&mut self) -> &mut Dict<V> {
        &mut self.dict
    }
}

impl<V: Clone> Container for StrictDict<V> {
    type Value = V;

    fn type_label(&self) -> &'static str {
        "strict_dict"
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

impl<V: Clone> Keyed for StrictDict<V> {
    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        self.get(key).map(Some)
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

impl<V: Clone> Writable for StrictDict<V> {
    fn set_index(&mut self, index: usize, value: V) -> Result<Option<V>> {
        Writable::set_index(&mut self.dict, index, value)
    }
}

impl<V: Clone> KeyedWritable for StrictDict<V> {
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
    fn test_miss_is_an_error() {
        let d = strict_dict(dict!(a = 1).unwrap().with_label("limits"));
        assert_eq!(Ok(&1), d.get("a"));
        assert_eq!(
            Err(DictError::KeyNotFound {
                key: "b".to_string(),
                label: "limits".to_string(),
            }),
            d.get("b")
        );
    }

    #[test]
    fn test_default_label_names_call_site() {
        let d = strict_dict(dict!(a = 1).unwrap());
        let err = d.get("b").unwrap_err().to_string();
        assert!(err.contains("dict@"), "{}", err);
        assert!(err.contains("strict.rs"), "{}", err);
    }

    #[test]
    fn test_multi_read_fails_on_first_missing() {
        let d = strict_dict(dict!(a = 1, b = 2).unwrap().with_label("s"));
        assert_eq!(
            vec!["b", "a"],
            d.get_multi(vec!["b", "a"]).unwrap().keys().collect::<Vec<_>>()
        );
        assert_eq!(
            Err(DictError::KeyNotFound {
                key: "x".to_string(),
                label: "s".to_string(),
            }),
            d.get_multi(vec!["a", "x", "y"]).map(|sub| sub.len())
        );
    }

    #[test]
    fn test_other_operations_match_base_dict() {
        let mut d = strict_dict(dict!(a = 1).unwrap());
        d.set("b", 2).unwrap();
        assert!(d.has("b"));
        assert_eq!(vec!["a", "b"], d.keys().collect::<Vec<_>>());
        let trimmed = d.omit(vec!["a", "nope"]);
        assert!(trimmed.get("a").is_err());
        assert_eq!(Ok(&2), trimmed.get("b"));
    }
}
