use crate::collections::OrderedMap;
use crate::Dict;

/// Compares two dicts key by key.
///
/// The result covers every key of either dict: first `d`'s keys in order, then the ones only
/// `other` has. A key is `true` when both sides hold it with equal values.
///
/// Values are compared with `PartialEq`, so a `Value::Float(NAN)` is never equal to another
/// `NAN`, as in IEEE 754.
pub fn equals<V: Clone + PartialEq>(d: &Dict<V>, other: &Dict<V>) -> Dict<bool> {
    let mut out = OrderedMap::new();
    for (key, value) in d {
        out.set_valid(key.to_string(), other.get(key) == Some(value));
    }
    for (key, _) in other {
        if !d.has(key) {
            out.set_valid(key.to_string(), false);
        }
    }
    Dict::from_map(out, d.label().clone())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dict, Value};

    #[test]
    fn test_equals_per_key() {
        let out = equals(&dict!(a = 1, b = 2).unwrap(), &dict!(a = 1, b = 3).unwrap());
        assert_eq!(dict!(a = true, b = false).unwrap(), out);
    }

    #[test]
    fn test_one_sided_keys_are_false() {
        let out = equals(&dict!(a = 1, b = 2).unwrap(), &dict!(c = 3, a = 1).unwrap());
        assert_eq!(vec!["a", "b", "c"], out.keys().collect::<Vec<_>>());
        assert_eq!(vec![&true, &false, &false], out.values().collect::<Vec<_>>());
    }

    #[test]
    fn test_deep_equality() {
        let nested = || Value::from(vec![Value::from(1), Value::Null]);
        let out = equals(
            &dict!(l = nested(), n = Value::Null).unwrap(),
            &dict!(l = nested(), n = Value::Null).unwrap(),
        );
        assert!(out.values().all(|same| *same));
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let nan = || Value::from(f64::NAN);
        let out = equals(
            &dict!(x = nan(), y = Value::from(0.5)).unwrap(),
            &dict!(x = nan(), y = Value::from(0.5)).unwrap(),
        );
        assert_eq!(dict!(x = false, y = true).unwrap(), out);
    }
}
