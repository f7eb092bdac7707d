//! The error type shared by every dict operation.

use std::fmt;
use thiserror::Error;

/// Why a key was refused at construction or conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyProblem {
    /// The key was the empty string.
    Empty,
    /// The key was not supplied at all, e.g. an unnamed record member.
    Missing,
    /// Another entry in the same input already uses this key.
    Duplicate,
}

impl fmt::Display for KeyProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyProblem::Empty => f.write_str("keys must not be empty"),
            KeyProblem::Missing => f.write_str("every entry needs a key"),
            KeyProblem::Duplicate => f.write_str("keys must be unique"),
        }
    }
}

/// The slot a rejected write was aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationTarget {
    Key(String),
    Keys(Vec<String>),
    Index(usize),
}

impl fmt::Display for MutationTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MutationTarget::Key(key) => write!(f, "key {:?}", key),
            MutationTarget::Keys(keys) => write!(f, "keys {:?}", keys),
            MutationTarget::Index(index) => write!(f, "index {}", index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictError {
    /// A key was empty, missing, or duplicated.
    #[error("invalid key {key:?}: {problem}")]
    InvalidKey { key: String, problem: KeyProblem },

    /// Parallel key and value sequences had different lengths.
    #[error("length mismatch: {keys} keys but {values} values")]
    LengthMismatch { keys: usize, values: usize },

    /// A strict lookup missed.
    #[error("key {key:?} not found in {label}")]
    KeyNotFound { key: String, label: String },

    /// A write was attempted through an `Immutable` wrapper.
    #[error("cannot assign {target} of immutable {type_label}")]
    ImmutableMutation {
        target: MutationTarget,
        type_label: &'static str,
    },

    /// Conflicting variant options were requested together.
    #[error("invalid dict configuration: {0}")]
    Configuration(String),

    /// A positional write landed past the end of the container.
    #[error("index {index} out of range for {type_label} of length {len}")]
    IndexOutOfRange {
        index: usize,
        len: usize,
        type_label: &'static str,
    },
}

impl DictError {
    pub(crate) fn invalid_key(key: impl Into<String>, problem: KeyProblem) -> Self {
        DictError::InvalidKey {
            key: key.into(),
            problem,
        }
    }
}

pub type Result<T> = std::result::Result<T, DictError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = DictError::KeyNotFound {
            key: "b".to_string(),
            label: "settings".to_string(),
        };
        assert_eq!("key \"b\" not found in settings", err.to_string());

        let err = DictError::ImmutableMutation {
            target: MutationTarget::Index(3),
            type_label: "list",
        };
        assert_eq!("cannot assign index 3 of immutable list", err.to_string());

        let err = DictError::invalid_key("", KeyProblem::Empty);
        assert_eq!("invalid key \"\": keys must not be empty", err.to_string());
    }
}
