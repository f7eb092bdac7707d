//! Dict variants that change what a miss means.
//!
//! `DefaultDict` and `StrictDict` both deref to the base `Dict`, so everything except lookup
//! behaves the same across variants. `AnyDict` picks between them at runtime and is what
//! `DictOptions::build` hands back.

mod default;
mod strict;

pub use default::{default_dict, with_default, DefaultDict};
pub use strict::{strict_dict, StrictDict};

use crate::access::{Container, Entries, Keyed, KeyedWritable, Keys, Values, Writable};
use crate::dict::Label;
use crate::error::Result;
use crate::{Dict, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum AnyDict<V: Clone = Value> {
    Plain(Dict<V>),
    Default(DefaultDict<V>),
    Strict(StrictDict<V>),
}

impl<V: Clone> AnyDict<V> {
    pub fn as_dict(&self) -> &Dict<V> {
        match self {
            AnyDict::Plain(d) => d,
            AnyDict::Default(d) => &**d,
            AnyDict::Strict(d) => &**d,
        }
    }

    pub fn as_dict_mut(&mut self) -> &mut Dict<V> {
        match self {
            AnyDict::Plain(d) => d,
            AnyDict::Default(d) => &mut **d,
            AnyDict::Strict(d) => &mut **d,
        }
    }

    /// Drops the variant, keeping the entries.
    pub fn into_dict(self) -> Dict<V> {
        match self {
            AnyDict::Plain(d) => d,
            AnyDict::Default(d) => d.into_inner(),
            AnyDict::Strict(d) => d.into_inner(),
        }
    }
}

impl<V: Clone> From<Dict<V>> for AnyDict<V> {
    fn from(d: Dict<V>) -> Self {
        AnyDict::Plain(d)
    }
}

impl<V: Clone> From<DefaultDict<V>> for AnyDict<V> {
    fn from(d: DefaultDict<V>) -> Self {
        AnyDict::Default(d)
    }
}

impl<V: Clone> From<StrictDict<V>> for AnyDict<V> {
    fn from(d: StrictDict<V>) -> Self {
        AnyDict::Strict(d)
    }
}

impl<V: Clone> Container for AnyDict<V> {
    type Value = V;

    fn type_label(&self) -> &'static str {
        match self {
            AnyDict::Plain(d) => d.type_label(),
            AnyDict::Default(d) => d.type_label(),
            AnyDict::Strict(d) => d.type_label(),
        }
    }

    fn len(&self) -> usize {
        self.as_dict().len()
    }

    fn value_at(&self, index: usize) -> Option<&V> {
        self.as_dict().value_at(index)
    }

    fn iter_values(&self) -> Values<'_, V> {
        self.as_dict().iter_values()
    }
}

impl<V: Clone> Keyed for AnyDict<V> {
    fn lookup(&self, key: &str) -> Result<Option<&V>> {
        match self {
            AnyDict::Plain(d) => d.lookup(key),
            AnyDict::Default(d) => d.lookup(key),
            AnyDict::Strict(d) => d.lookup(key),
        }
    }

    fn has(&self, key: &str) -> bool {
        self.as_dict().has(key)
    }

    fn key_at(&self, index: usize) -> Option<&str> {
        self.as_dict().key_at(index)
    }

    fn label(&self) -> Label {
        self.as_dict().label().clone()
    }

    fn iter_keys(&self) -> Keys<'_> {
        self.as_dict().iter_keys()
    }

    fn iter_entries(&self) -> Entries<'_, V> {
        self.as_dict().iter_entries()
    }
}

impl<V: Clone> Writable for AnyDict<V> {
    fn set_index(&mut self, index: usize, value: V) -> Result<Option<V>> {
        Writable::set_index(self.as_dict_mut(), index, value)
    }
}

impl<V: Clone> KeyedWritable for AnyDict<V> {
    fn set(&mut self, key: &str, value: V) -> Result<Option<V>> {
        self.as_dict_mut().set(key, value)
    }

    fn set_multi<IK, IV, K>(&mut self, keys: IK, values: IV) -> Result<()>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
        K: AsRef<str>,
    {
        KeyedWritable::set_multi(self.as_dict_mut(), keys, values)
    }
}
