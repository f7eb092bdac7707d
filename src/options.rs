//! Runtime selection of a dict variant.

use crate::collections::IntoKey;
use crate::error::{DictError, Result};
use crate::immutable::Immutable;
use crate::variant::{AnyDict, DefaultDict, StrictDict};
use crate::{Dict, Value};

/// Builder for dicts whose variant is decided at runtime, e.g. from user settings.
///
/// ```
/// use dicts::{DictOptions, Keyed};
///
/// let d = DictOptions::new()
///     .label("ports")
///     .default_value(80)
///     .build(vec![("https", 443)])
///     .unwrap();
/// assert_eq!(Ok(Some(&80)), d.lookup("http"));
/// ```
#[derive(Clone, Debug)]
pub struct DictOptions<V = Value> {
    label: Option<String>,
    default: Option<V>,
    strict: bool,
}

impl<V: Clone> DictOptions<V> {
    pub fn new() -> Self {
        Self {
            label: None,
            default: None,
            strict: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Misses return `default`. Cannot be combined with `strict`.
    pub fn default_value(mut self, default: V) -> Self {
        self.default = Some(default);
        self
    }

    /// Misses fail with `KeyNotFound`. Cannot be combined with `default_value`.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.strict && self.default.is_some() {
            tracing::debug!(label = ?self.label, "rejecting dict options with both default and strict");
            return Err(DictError::Configuration(
                "a dict cannot have a default value and be strict at the same time".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates the options, then builds the chosen variant from `entries`.
    #[track_caller]
    pub fn build<I, K>(self, entries: I) -> Result<AnyDict<V>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKey,
    {
        self.validate()?;
        let mut dict = Dict::from_entries(entries)?;
        if let Some(label) = self.label {
            dict = dict.with_label(label);
        }
        Ok(match (self.default, self.strict) {
            (Some(default), _) => DefaultDict::new(dict, default).into(),
            (None, true) => StrictDict::new(dict).into(),
            (None, false) => dict.into(),
        })
    }

    /// `build`, wrapped so that every write fails.
    #[track_caller]
    pub fn build_immutable<I, K>(self, entries: I) -> Result<Immutable<AnyDict<V>>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKey,
    {
        self.build(entries).map(Immutable::new)
    }
}

impl<V: Clone> Default for DictOptions<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::access::{Keyed, KeyedWritable};
    use crate::error::MutationTarget;

    #[test]
    fn test_default_and_strict_conflict() {
        let opts = DictOptions::new().default_value(0).strict();
        assert!(matches!(opts.validate(), Err(DictError::Configuration(_))));
        assert!(matches!(
            opts.build(vec![("a", 1)]),
            Err(DictError::Configuration(_))
        ));
    }

    #[test]
    fn test_builds_each_variant() {
        let plain = DictOptions::new().build(vec![("a", 1)]).unwrap();
        assert!(matches!(plain, AnyDict::Plain(_)));

        let strict = DictOptions::new().strict().label("s").build(vec![("a", 1)]).unwrap();
        assert!(matches!(strict, AnyDict::Strict(_)));
        assert_eq!("s", strict.label().to_string());

        let with_default = DictOptions::new().default_value(7).build(vec![("a", 1)]).unwrap();
        assert_eq!(Ok(Some(&7)), with_default.lookup("zzz"));
    }

    #[test]
    fn test_bad_entries_still_fail() {
        let res = DictOptions::new().build(vec![("a", 1), ("a", 2)]);
        assert!(matches!(res, Err(DictError::InvalidKey { .. })));
    }

    #[test]
    fn test_build_immutable() {
        let mut d = DictOptions::new().strict().build_immutable(vec![("a", 1)]).unwrap();
        assert_eq!(Ok(Some(&1)), d.lookup("a"));
        assert!(d.lookup("b").is_err());
        assert_eq!(
            Err(DictError::ImmutableMutation {
                target: MutationTarget::Key("a".to_string()),
                type_label: "strict_dict",
            }),
            d.set("a", 2)
        );
    }
}
