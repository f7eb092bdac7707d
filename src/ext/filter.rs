use crate::collections::OrderedMap;
use crate::value::Nullable;
use crate::Dict;

/// Keeps the entries for which `predicate` holds, in their original order.
pub fn keep_dict<V, F>(d: &Dict<V>, mut predicate: F) -> Dict<V>
where
    V: Clone,
    F: FnMut(&str, &V) -> bool,
{
    let mut out = OrderedMap::new();
    for (key, value) in d {
        if predicate(key, value) {
            out.set_valid(key.to_string(), value.clone());
        }
    }
    Dict::from_map(out, d.label().clone())
}

/// Drops the entries for which `predicate` holds.
pub fn discard_dict<V, F>(d: &Dict<V>, mut predicate: F) -> Dict<V>
where
    V: Clone,
    F: FnMut(&str, &V) -> bool,
{
    keep_dict(d, |key, value| !predicate(key, value))
}

/// Drops exactly the entries whose value is the null-marker.
pub fn compact_dict<V: Clone + Nullable>(d: &Dict<V>) -> Dict<V> {
    discard_dict(d, |_, value| value.is_null())
}
