//! Ordered dictionaries with string keys and stricter semantics than a plain map.
//!
//! A `Dict` keeps insertion order, refuses empty or duplicate keys, and tells a stored null
//! value apart from a key that is not there at all. On top of it sit `DefaultDict` (misses
//! answer with a fallback), `StrictDict` (misses are errors) and `Immutable` (writes are
//! errors), plus a set of pure transforms in `ext`.
//!
//! ```
//! use dicts::{dict, extend, strict_dict, Value};
//!
//! let d = dict!(os = Value::from("linux"), cores = Value::from(8)).unwrap();
//! assert_eq!(Some(&Value::from(8)), d.get("cores"));
//! assert_eq!(None, d.get("arch"));
//!
//! let merged = extend(&d, vec![&dict!(cores = Value::from(16)).unwrap()]);
//! assert_eq!(vec!["os", "cores"], merged.keys().collect::<Vec<_>>());
//!
//! assert!(strict_dict(merged).get("arch").is_err());
//! ```

pub mod access;
pub mod collections;
mod dict;
pub mod error;
pub mod ext;
mod immutable;
mod options;
mod render;
mod value;
pub mod variant;

pub use access::{Container, Keyed, KeyedWritable, Writable};
pub use collections::{entry, Entry, IntoKey};
pub use dict::{as_dict, make_dict, Dict, Label};
pub use error::{DictError, Result};
pub use ext::{
    compact_dict, defaults, discard_dict, entries, equals, extend, has, invert, keep_dict,
    map_dict, omit, DictExt,
};
pub use immutable::{immutable, immutable_dict, Immutable};
pub use options::DictOptions;
pub use value::{Nullable, Value};
pub use variant::{default_dict, strict_dict, with_default, AnyDict, DefaultDict, StrictDict};

/// Builds a `Dict` from inline pairs, either `key = value` with bare identifiers or
/// `"key" => value` with any key expression. Evaluates to `Result<Dict<_>>`, failing on
/// duplicate or empty keys.
///
/// ```
/// let d = dicts::dict!(a = 1, b = 2).unwrap();
/// let e = dicts::dict!("a" => 1, "b" => 2).unwrap();
/// assert_eq!(d, e);
/// assert!(dicts::dict!(a = 1, a = 2).is_err());
/// ```
#[macro_export]
macro_rules! dict {
    () => {
        $crate::Dict::from_entries(::std::vec::Vec::<(&str, _)>::new())
    };
    ($($key:ident = $value:expr),+ $(,)?) => {
        $crate::Dict::from_entries(::std::vec![$((::std::stringify!($key), $value)),+])
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Dict::from_entries(::std::vec![$(($key, $value)),+])
    };
}
