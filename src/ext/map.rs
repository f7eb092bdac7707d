use crate::collections::OrderedMap;
use crate::Dict;

/// Replaces every value with `f(key, value)`, keeping keys and order.
pub fn map_dict<V, T, F>(d: &Dict<V>, mut f: F) -> Dict<T>
where
    V: Clone,
    T: Clone,
    F: FnMut(&str, &V) -> T,
{
    let mut out = OrderedMap::new();
    for (key, value) in d {
        out.set_valid(key.to_string(), f(key, value));
    }
    Dict::from_map(out, d.label().clone())
}
