//! Spaced JSON rendering.
//!
//! Produces the same text as a default `json.dumps`: one space after every
//! `:` and `,`, no newlines, and every non-ASCII character escaped as
//! `\uXXXX` (UTF-16 code units, lower-case hex).

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

use crate::error::TypeError;

#[derive(Clone, Copy, Debug, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` as single-line JSON with `", "` and `": "` separators.
pub fn to_spaced_json<T: Serialize + ?Sized>(value: &T) -> Result<String, TypeError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| TypeError::Serialization(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| TypeError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_separators() {
        let value = json!({"a": "1", "b": "2"});
        assert_eq!(to_spaced_json(&value).unwrap(), r#"{"a": "1", "b": "2"}"#);
    }

    #[test]
    fn nested_and_arrays() {
        let value = json!({"k": [1, 2, {"x": null}]});
        assert_eq!(to_spaced_json(&value).unwrap(), r#"{"k": [1, 2, {"x": null}]}"#);
    }

    #[test]
    fn empty_containers() {
        assert_eq!(to_spaced_json(&json!({})).unwrap(), "{}");
        assert_eq!(to_spaced_json(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn non_ascii_is_escaped() {
        assert_eq!(to_spaced_json("café").unwrap(), r#""caf\u00e9""#);
        assert_eq!(to_spaced_json("🔥").unwrap(), r#""\ud83d\udd25""#);
    }

    #[test]
    fn control_escapes_untouched() {
        assert_eq!(to_spaced_json("a\"b\n").unwrap(), r#""a\"b\n""#);
    }
}
