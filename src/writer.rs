//! Canonical text writer.
//!
//! Output rules:
//!
//! - integers in decimal, floats in the shortest form that reads back to the
//!   same `f64` and always with a `.` or an exponent; NaN and infinities
//!   become `null`
//! - strings escape `"`, `\`, `/` (unless disabled), `\b \n \r \t`, and any
//!   other character below `0x20` with the configured [`ControlEscape`]
//! - object members in map iteration order (key order by default)

use crate::{ControlEscape, Value, WriteOptions};
use std::fmt::Write as _;

const HEX: &[u8; 16] = b"0123456789abcdef";

pub(crate) fn write_value(out: &mut String, value: &Value, options: &WriteOptions, level: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(i) => {
            let _ = write!(out, "{}", i);
        }
        Value::Uint(u) => {
            let _ = write!(out, "{}", u);
        }
        Value::Float(f) => write_float(out, *f),
        Value::String(s) => write_string(out, s, options),
        Value::Array(arr) => {
            if arr.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push('[');
            for (i, element) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_newline(out, options, level + 1);
                write_value(out, element, options, level + 1);
            }
            write_newline(out, options, level);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push('{');
            for (i, (key, member)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_newline(out, options, level + 1);
                write_string(out, key, options);
                out.push(':');
                if options.pretty {
                    out.push(' ');
                }
                write_value(out, member, options, level + 1);
            }
            write_newline(out, options, level);
            out.push('}');
        }
    }
}

fn write_newline(out: &mut String, options: &WriteOptions, level: usize) {
    if options.pretty {
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(options.indent * level));
    }
}

fn write_float(out: &mut String, f: f64) {
    if !f.is_finite() {
        out.push_str("null");
        return;
    }
    let start = out.len();
    let _ = write!(out, "{:?}", f);
    if !out[start..].contains(['.', 'e', 'E']) {
        out.push_str(".0");
    }
}

pub(crate) fn write_string(out: &mut String, s: &str, options: &WriteOptions) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '/' if options.escape_solidus => out.push_str("\\/"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => write_control(out, c as u8, options.control_escape),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn write_control(out: &mut String, byte: u8, escape: ControlEscape) {
    out.push_str(escape.prefix());
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0f) as usize] as char);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    fn compact(v: &Value) -> String {
        v.write()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(compact(&Value::Null), "null");
        assert_eq!(compact(&Value::Bool(false)), "false");
        assert_eq!(compact(&Value::Int(-3)), "-3");
        assert_eq!(compact(&Value::Uint(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_floats_keep_a_fraction_or_exponent() {
        assert_eq!(compact(&Value::Float(1.0)), "1.0");
        assert_eq!(compact(&Value::Float(-0.5)), "-0.5");
        assert_eq!(compact(&Value::Float(0.1)), "0.1");
        assert_eq!(compact(&Value::Float(1e300)), "1e300");
        assert_eq!(compact(&Value::Float(f64::NAN)), "null");
        assert_eq!(compact(&Value::Float(f64::NEG_INFINITY)), "null");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(compact(&Value::from("a\tb\"c")), r#""a\tb\"c""#);
        assert_eq!(compact(&Value::from("x/y\\z")), r#""x\/y\\z""#);
        assert_eq!(compact(&Value::from("\u{8}\n\r")), r#""\b\n\r""#);
        assert_eq!(compact(&Value::from("\u{1}\u{c}\u{1f}")), r#""\0001\000c\001f""#);
        assert_eq!(compact(&Value::from("é\u{7f}")), "\"é\u{7f}\"");
    }

    #[test]
    fn test_unicode_control_escape() {
        let options = WriteOptions::new().with_control_escape(ControlEscape::Unicode);
        assert_eq!(
            Value::from("\u{1b}").write_with_options(&options),
            r#""\u001b""#
        );
    }

    #[test]
    fn test_containers_compact() {
        assert_eq!(compact(&value!([])), "[]");
        assert_eq!(compact(&value!({})), "{}");
        assert_eq!(compact(&value!([1, "a", null])), r#"[1,"a",null]"#);
    }

    #[cfg(not(feature = "preserve_order"))]
    #[test]
    fn test_object_members_in_key_order() {
        let v = value!({"zeta": 1, "alpha": [true], "mid": {}});
        assert_eq!(compact(&v), r#"{"alpha":[true],"mid":{},"zeta":1}"#);
    }

    #[test]
    fn test_pretty() {
        let v = value!({"a": [1, 2], "b": {}});
        let expected = "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {}\n}";
        assert_eq!(v.write_with_options(&WriteOptions::pretty()), expected);

        let four = WriteOptions::pretty().with_indent(4);
        assert_eq!(value!([null]).write_with_options(&four), "[\n    null\n]");
    }
}
