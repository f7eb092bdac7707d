//! Pure transforms over dicts. None of them modify their inputs; each returns a new dict that
//! keeps the label of its first argument.

use crate::collections::Entry;
use crate::error::Result;
use crate::value::Nullable;
use crate::Dict;
use std::fmt::Display;

mod equals;
mod filter;
mod invert;
mod map;
mod merge;

pub use equals::equals;
pub use filter::{compact_dict, discard_dict, keep_dict};
pub use invert::invert;
pub use map::map_dict;
pub use merge::{defaults, extend};

pub fn has<V: Clone>(d: &Dict<V>, key: &str) -> bool {
    d.has(key)
}

/// Returns a new dict without `keys`. Keys that are not present are ignored.
pub fn omit<V, I, K>(d: &Dict<V>, keys: I) -> Dict<V>
where
    V: Clone,
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    d.omit(keys)
}

/// Snapshot of `d`'s entries in order.
pub fn entries<V: Clone>(d: &Dict<V>) -> Vec<Entry<V>> {
    d.entries().cloned().collect()
}

/// Method-call forms of the transforms, for chaining.
pub trait DictExt<V: Clone>: Sized {
    fn map_values<T, F>(&self, f: F) -> Dict<T>
    where
        T: Clone,
        F: FnMut(&str, &V) -> T;

    fn keep<F: FnMut(&str, &V) -> bool>(&self, predicate: F) -> Dict<V>;

    fn discard<F: FnMut(&str, &V) -> bool>(&self, predicate: F) -> Dict<V>;

    fn compact(&self) -> Dict<V>
    where
        V: Nullable;

    fn inverted(&self) -> Result<Dict<String>>
    where
        V: Display;

    fn merged(&self, other: &Dict<V>) -> Dict<V>;

    fn with_defaults(&self, fallback: &Dict<V>) -> Dict<V>;

    fn compare(&self, other: &Dict<V>) -> Dict<bool>
    where
        V: PartialEq;
}

impl<V: Clone> DictExt<V> for Dict<V> {
    fn map_values<T, F>(&self, f: F) -> Dict<T>
    where
        T: Clone,
        F: FnMut(&str, &V) -> T,
    {
        map_dict(self, f)
    }

    fn keep<F: FnMut(&str, &V) -> bool>(&self, predicate: F) -> Dict<V> {
        keep_dict(self, predicate)
    }

    fn discard<F: FnMut(&str, &V) -> bool>(&self, predicate: F) -> Dict<V> {
        discard_dict(self, predicate)
    }

    fn compact(&self) -> Dict<V>
    where
        V: Nullable,
    {
        compact_dict(self)
    }

    fn inverted(&self) -> Result<Dict<String>>
    where
        V: Display,
    {
        invert(self)
    }

    fn merged(&self, other: &Dict<V>) -> Dict<V> {
        extend(self, std::iter::once(other))
    }

    fn with_defaults(&self, fallback: &Dict<V>) -> Dict<V> {
        defaults(self, fallback)
    }

    fn compare(&self, other: &Dict<V>) -> Dict<bool>
    where
        V: PartialEq,
    {
        equals(self, other)
    }
}
