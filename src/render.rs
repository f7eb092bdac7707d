//! Aligned text rendering: one entry per line, keys right-aligned to the widest key.
//!
//! ```text
//!      os linux
//! version 6.1
//! ```
//!
//! Line breaks inside keys or values are written as `\n` and `\r`, so a dict with n entries
//! always renders as n lines. Width is counted in `char`s, so keys holding wide or combining
//! characters do not line up visually, though the output is still deterministic.

use crate::variant::{AnyDict, DefaultDict, StrictDict};
use crate::Dict;
use std::borrow::Cow;
use std::fmt::{self, Display};

fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(&['\n', '\r'][..]) {
        Cow::Owned(text.replace('\n', "\\n").replace('\r', "\\r"))
    } else {
        Cow::Borrowed(text)
    }
}

fn render<V: Clone + Display>(d: &Dict<V>, f: &mut fmt::Formatter) -> fmt::Result {
    let keys: Vec<Cow<'_, str>> = d.keys().map(single_line).collect();
    let width = keys.iter().map(|key| key.chars().count()).max().unwrap_or(0);
    for (i, (key, value)) in keys.iter().zip(d.values()).enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        let value = value.to_string();
        write!(f, "{:>width$} {}", key, single_line(&value), width = width)?;
    }
    Ok(())
}

impl<V: Clone + Display> Display for Dict<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(self, f)
    }
}

impl<V: Clone + Display> Display for DefaultDict<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(&**self, f)
    }
}

impl<V: Clone + Display> Display for StrictDict<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(&**self, f)
    }
}

impl<V: Clone + Display> Display for AnyDict<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render(self.as_dict(), f)
    }
}

#[cfg(test)]
mod test {
    use crate::{dict, immutable, Dict, Value};

    #[test]
    fn test_right_aligned() {
        let d = dict!(os = Value::from("linux"), version = Value::from(6.1)).unwrap();
        assert_eq!("     os linux\nversion 6.1", d.to_string());
    }

    #[test]
    fn test_one_line_per_entry() {
        let d = dict!(a = 1, bb = 2, ccc = 3).unwrap();
        let text = d.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(vec!["  a 1", " bb 2", "ccc 3"], lines);
        assert_eq!(text, immutable(d).to_string());
    }

    #[test]
    fn test_line_breaks_are_escaped() {
        let d = dict!(a = Value::from("x\ny"), b = Value::from(1)).unwrap();
        let text = d.to_string();
        assert_eq!(2, text.lines().count());
        assert_eq!("a x\\ny\nb 1", text);

        let d = dict!("two\r\nlines" => Value::from("crlf\r\n")).unwrap();
        assert_eq!("two\\r\\nlines crlf\\r\\n", d.to_string());
    }

    #[test]
    fn test_width_counts_chars() {
        let d = dict!("é" => 1, "abc" => 2).unwrap();
        assert_eq!("  é 1\nabc 2", d.to_string());
    }

    #[test]
    fn test_null_and_empty() {
        let d = dict!(gone = Value::Null).unwrap();
        assert_eq!("gone NULL", d.to_string());
        assert_eq!("", Dict::<Value>::new().to_string());
    }
}
