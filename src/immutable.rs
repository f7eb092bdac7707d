//! Read-only wrapping for any container.

use crate::access::{Container, Entries, Keyed, KeyedWritable, Keys, Values, Writable};
use crate::collections::IntoKey;
use crate::dict::Label;
use crate::error::{DictError, MutationTarget, Result};
use crate::Dict;
use std::fmt;
use std::ops::Deref;

/// Wraps a dict, sequence or record so that every write fails with `ImmutableMutation`.
///
/// Reads go straight to the wrapped container, either through `Deref` or through the
/// `Container`/`Keyed` traits. The wrapping is shallow: containers stored as values are not
/// frozen with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Immutable<C> {
    inner: C,
}

impl<C> Immutable<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Container> Immutable<C> {
    fn refuse<T>(&self, target: MutationTarget) -> Result<T> {
        let type_label = self.inner.type_label();
        tracing::debug!(%target, type_label, "write refused by immutable wrapper");
        Err(DictError::ImmutableMutation { target, type_label })
    }
}

pub fn immutable<C>(inner: C) -> Immutable<C> {
    Immutable::new(inner)
}

/// Builds an immutable dict straight from `(key, value)` pairs.
#[track_caller]
pub fn immutable_dict<I, K, V>(entries: I) -> Result<Immutable<Dict<V>>>
where
    I: IntoIterator<Item = (K, V)>,
    K: IntoKey,
    V: Clone,
{
    Dict::from_entries(entries).map(Immutable::new)
}

impl<C> Deref for Immutable<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C: Container> Container for Immutable<C> {
    type Value = C::Value;

    fn type_label(&self) -> &'static str {
        self.inner.type_label()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn value_at(&self, index: usize) -> Option<&C::Value> {
        self.inner.value_at(index)
    }

    fn iter_values(&self) -> Values<'_, C::Value> {
        self.inner.iter_values()
    }
}

impl<C: Keyed> Keyed for Immutable<C> {
    fn lookup(&self, key: &str) -> Result<Option<&C::Value>> {
        self.inner.lookup(key)
    }

    fn has(&self, key: &str) -> bool {
        self.inner.has(key)
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.inner.key_at(index)
    }

    fn label(&self) -> Label {
        self.inner.label()
    }

    fn iter_keys(&self) -> Keys<'_> {
        self.inner.iter_keys()
    }

    fn iter_entries(&self) -> Entries<'_, C::Value> {
        self.inner.iter_entries()
    }
}

impl<C: Container> Writable for Immutable<C> {
    fn set_index(&mut self, index: usize, _value: C::Value) -> Result<Option<C::Value>> {
        self.refuse(MutationTarget::Index(index))
    }
}

impl<C: Keyed> KeyedWritable for Immutable<C> {
    fn set(&mut self, key: &str, _value: C::Value) -> Result<Option<C::Value>> {
        self.refuse(MutationTarget::Key(key.to_string()))
    }

    fn set_multi<IK, IV, K>(&mut self, keys: IK, _values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = C::Value>,
        K: AsRef<str>,
    {
        let keys = keys.into_iter().map(|key| key.as_ref().to_string()).collect();
        self.refuse(MutationTarget::Keys(keys))
    }
}

impl<C: fmt::Display> fmt::Display for Immutable<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dict, strict_dict, Value};
    use std::collections::BTreeMap;

    #[test]
    fn test_dict_reads_pass_through() {
        let d = immutable_dict(vec![("a", 1), ("b", 2)]).unwrap();
        assert_eq!(Some(&1), d.get("a"));
        assert_eq!(Ok(Some(&1)), d.lookup("a"));
        assert!(d.has("b"));
        assert_eq!(vec!["a", "b"], d.iter_keys().collect::<Vec<_>>());
        assert_eq!(vec![&1, &2], d.iter_values().collect::<Vec<_>>());
        assert_eq!(vec![("a", &1), ("b", &2)], d.iter_entries().collect::<Vec<_>>());
        assert_eq!(2, d.len());
    }

    #[test]
    fn test_dict_writes_refused() {
        let mut d = immutable_dict(vec![("a", 1)]).unwrap();
        assert_eq!(
            Err(DictError::ImmutableMutation {
                target: MutationTarget::Key("a".to_string()),
                type_label: "dict",
            }),
            d.set("a", 2)
        );
        assert_eq!(
            Err(DictError::ImmutableMutation {
                target: MutationTarget::Index(0),
                type_label: "dict",
            }),
            d.set_index(0, 2)
        );
        assert_eq!(
            Err(DictError::ImmutableMutation {
                target: MutationTarget::Keys(vec!["a".to_string(), "b".to_string()]),
                type_label: "dict",
            }),
            d.set_multi(vec!["a", "b"], vec![1, 2])
        );
        assert_eq!(Some(&1), d.get("a"));
    }

    #[test]
    fn test_wraps_sequences() {
        let mut v = immutable(vec![Value::from(1), Value::Null]);
        assert_eq!(Some(&Value::Null), v.value_at(1));
        assert_eq!(2, v.iter_values().count());
        assert_eq!(
            Err(DictError::ImmutableMutation {
                target: MutationTarget::Index(2),
                type_label: "list",
            }),
            v.set_index(2, Value::from(3))
        );
        assert_eq!(2, v.len());
    }

    #[test]
    fn test_wraps_records() {
        let mut r = BTreeMap::new();
        r.insert("name".to_string(), "x");
        let mut r = immutable(r);
        assert_eq!(Ok(Some(&"x")), r.lookup("name"));
        assert_eq!(vec![("name", &"x")], r.iter_entries().collect::<Vec<_>>());
        assert_eq!(1, r.iter_keys().len());
        assert!(matches!(
            r.set("name", "y"),
            Err(DictError::ImmutableMutation {
                type_label: "record",
                ..
            })
        ));
    }

    #[test]
    fn test_keeps_variant_miss_policy() {
        let d = immutable(strict_dict(dict!(a = 1).unwrap()));
        assert!(matches!(d.lookup("b"), Err(DictError::KeyNotFound { .. })));
        assert!(d.get("b").is_err());
    }

    #[test]
    fn test_wrapping_is_shallow() {
        let inner = dict!(x = Value::from(1)).unwrap();
        let d = immutable_dict(vec![("nested", Value::from(inner))]).unwrap();
        let mut nested = d.get("nested").and_then(Value::as_dict).cloned().unwrap();
        assert!(nested.set("x", Value::from(2)).is_ok());
    }
}
