use crate::collections::OrderedMap;
use crate::error::{DictError, KeyProblem, Result};
use crate::Dict;
use std::fmt::Display;

/// Swaps keys and values: each value, stringified, becomes a key mapping to its old key.
///
/// When two values stringify to the same key the last one wins. The shared key stays where it
/// was first produced and holds the later original key. A value that stringifies to `""` is
/// an `InvalidKey` error.
pub fn invert<V: Clone + Display>(d: &Dict<V>) -> Result<Dict<String>> {
    let mut out = OrderedMap::new();
    for (key, value) in d {
        let new_key = value.to_string();
        if new_key.is_empty() {
            return Err(DictError::invalid_key(new_key, KeyProblem::Empty));
        }
        if let Some(previous) = out.set_valid(new_key, key.to_string()) {
            tracing::debug!(
                key = %value,
                dropped = %previous,
                kept = %key,
                "invert collision, later entry wins"
            );
        }
    }
    Ok(Dict::from_map(out, d.label().clone()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{dict, Value};

    #[test]
    fn test_invert_swaps() {
        let d = dict!(a = "x", b = "y").unwrap();
        let inv = invert(&d).unwrap();
        assert_eq!(dict!(x = "a".to_string(), y = "b".to_string()).unwrap(), inv);
    }

    #[test]
    fn test_invert_round_trip() {
        let d: Dict<String> = dict!(a = "x".to_string(), b = "y".to_string(), c = "z".to_string())
            .unwrap();
        assert_eq!(d, invert(&invert(&d).unwrap()).unwrap());
    }

    #[test]
    fn test_invert_collision_last_wins() {
        let d = dict!(a = 1, b = 2, c = 1).unwrap();
        let inv = invert(&d).unwrap();
        assert_eq!(vec!["1", "2"], inv.keys().collect::<Vec<_>>());
        assert_eq!(Some(&"c".to_string()), inv.get("1"));
    }

    #[test]
    fn test_invert_stringifies_values() {
        let d = dict!(t = Value::from(true), n = Value::Null, i = Value::from(7)).unwrap();
        let inv = invert(&d).unwrap();
        assert_eq!(vec!["true", "NULL", "7"], inv.keys().collect::<Vec<_>>());
    }

    #[test]
    fn test_invert_empty_string_value() {
        let d = dict!(a = "").unwrap();
        assert_eq!(
            Err(DictError::invalid_key("", KeyProblem::Empty)),
            invert(&d)
        );
    }
}
