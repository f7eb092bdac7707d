//! The ordered storage every dict variant is built on.

mod entry;
mod ordered_map;

pub use entry::{entry, Entry, IntoKey};
pub use ordered_map::{Iter, OrderedMap};
