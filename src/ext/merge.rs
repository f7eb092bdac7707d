use crate::Dict;

/// Merges `others` into a copy of `d`, left to right. Later dicts win on shared keys.
///
/// Keys already in `d` keep their position; new keys are appended in the order they are first
/// seen.
pub fn extend<'a, V, I>(d: &Dict<V>, others: I) -> Dict<V>
where
    V: Clone + 'a,
    I: IntoIterator<Item = &'a Dict<V>>,
{
    let mut out = d.as_ordered_map().clone();
    for other in others {
        for (key, value) in other {
            out.set_valid(key.to_string(), value.clone());
        }
    }
    Dict::from_map(out, d.label().clone())
}

/// Fills in keys of `fallback` that `d` lacks. Existing keys of `d` are never overwritten.
pub fn defaults<V: Clone>(d: &Dict<V>, fallback: &Dict<V>) -> Dict<V> {
    let mut out = d.as_ordered_map().clone();
    for (key, value) in fallback {
        if !out.has(key) {
            out.set_valid(key.to_string(), value.clone());
        }
    }
    Dict::from_map(out, d.label().clone())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dict;

    #[test]
    fn test_extend_overrides_and_appends() {
        let d = dict!(a = 1, b = 2).unwrap();
        let out = extend(&d, vec![&dict!(b = 3, c = 4).unwrap()]);
        assert_eq!(dict!(a = 1, b = 3, c = 4).unwrap(), out);
        assert_eq!(vec!["a", "b", "c"], out.keys().collect::<Vec<_>>());
        assert_eq!(Some(&2), d.get("b"));
    }

    #[test]
    fn test_extend_left_to_right() {
        let d = dict!(a = 1).unwrap();
        let x = dict!(z = 1, a = 2).unwrap();
        let y = dict!(a = 3, y = 9, z = 5).unwrap();
        let out = extend(&d, vec![&x, &y]);
        assert_eq!(vec!["a", "z", "y"], out.keys().collect::<Vec<_>>());
        assert_eq!(vec![&3, &5, &9], out.values().collect::<Vec<_>>());
    }

    #[test]
    fn test_extend_with_nothing_is_a_copy() {
        let d = dict!(a = 1).unwrap();
        assert_eq!(d, extend(&d, Vec::new()));
    }

    #[test]
    fn test_defaults_never_overwrite() {
        let d = dict!(a = 1).unwrap();
        let out = defaults(&d, &dict!(a = 99, b = 2).unwrap());
        assert_eq!(dict!(a = 1, b = 2).unwrap(), out);
    }
}
