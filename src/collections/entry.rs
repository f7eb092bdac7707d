use crate::error::{DictError, KeyProblem, Result};

/// One key/value pair of a dict.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<V> {
    key: String,
    value: V,
}

impl<V> Entry<V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }

    /// Builds an entry from a key that has already been through `IntoKey`.
    pub(crate) fn from_valid(key: String, value: V) -> Self {
        Self { key, value }
    }
}

/// Builds a standalone entry, validating its key.
pub fn entry<K: IntoKey, V>(key: K, value: V) -> Result<Entry<V>> {
    Ok(Entry::from_valid(key.into_key()?, value))
}

/// Key material accepted by dict constructors.
///
/// `None` stands for an unnamed member of a record and is always refused, as is the empty
/// string.
pub trait IntoKey {
    fn into_key(self) -> Result<String>;
}

impl IntoKey for String {
    fn into_key(self) -> Result<String> {
        if self.is_empty() {
            Err(DictError::invalid_key(self, KeyProblem::Empty))
        } else {
            Ok(self)
        }
    }
}

impl IntoKey for &str {
    fn into_key(self) -> Result<String> {
        self.to_string().into_key()
    }
}

impl IntoKey for &String {
    fn into_key(self) -> Result<String> {
        self.as_str().into_key()
    }
}

impl<K: IntoKey> IntoKey for Option<K> {
    fn into_key(self) -> Result<String> {
        match self {
            Some(key) => key.into_key(),
            None => Err(DictError::invalid_key("", KeyProblem::Missing)),
        }
    }
}
