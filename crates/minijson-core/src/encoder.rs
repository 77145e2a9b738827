//! JSON serializer — renders a [`Value`] tree as compact or indented text.
//!
//! Serialization is a pure function of the tree and the indent mode. It
//! performs no I/O and cannot fail: every value the model can hold has a
//! JSON spelling (non-finite numbers, which JSON cannot spell, render as
//! `null`).
//!
//! Compact mode inserts no whitespace beyond the `,` and `:` separators.
//! Pretty mode adds a newline after `{`/`[` and after each separator, and
//! indents every line by `depth * n` spaces. Empty containers render as
//! `[]`/`{}` with no interior whitespace in either mode.

use crate::value::{Object, Value};

/// Whitespace policy for [`dump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// No added whitespace; elements separated by `,`, keys by `:`.
    Compact,
    /// One element per line, `n` spaces per nesting level, keys by `": "`.
    Spaces(usize),
}

/// Serialize a value tree to JSON text.
pub fn dump(value: &Value, indent: Indent) -> String {
    let mut out = String::new();
    dump_value(value, indent, 0, &mut out);
    out
}

fn dump_value(value: &Value, indent: Indent, depth: usize, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => dump_number(*n, out),
        Value::String(s) => dump_string(s, out),
        Value::Array(arr) => dump_array(arr, indent, depth, out),
        Value::Object(map) => dump_object(map, indent, depth, out),
    }
}

/// Format a number as its shortest decimal form that parses back to the
/// same `f64` (the `Display` impl guarantees the roundtrip). Integral
/// values render without a trailing fractional part (`2.0` → `2`).
fn dump_number(n: f64, out: &mut String) {
    if n.is_finite() {
        out.push_str(&format!("{n}"));
    } else {
        out.push_str("null");
    }
}

fn dump_string(s: &str, out: &mut String) {
    out.push('"');
    escape_into(s, out);
    out.push('"');
}

/// Escape a string body: `" \` and the five named control characters get
/// their two-character escapes, any other control character becomes
/// `\u00XX` with uppercase hex, and everything else (non-ASCII included)
/// passes through unescaped.
fn escape_into(s: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let code = c as u32;
                out.push_str("\\u00");
                out.push(HEX[(code >> 4) as usize] as char);
                out.push(HEX[(code & 0xF) as usize] as char);
            }
            c => out.push(c),
        }
    }
}

fn dump_array(arr: &[Value], indent: Indent, depth: usize, out: &mut String) {
    out.push('[');
    if !arr.is_empty() {
        newline(indent, out);
        for (i, item) in arr.iter().enumerate() {
            pad(indent, depth + 1, out);
            dump_value(item, indent, depth + 1, out);
            if i + 1 < arr.len() {
                out.push(',');
            }
            newline(indent, out);
        }
        pad(indent, depth, out);
    }
    out.push(']');
}

fn dump_object(map: &Object, indent: Indent, depth: usize, out: &mut String) {
    out.push('{');
    if !map.is_empty() {
        newline(indent, out);
        let len = map.len();
        for (i, (key, val)) in map.iter().enumerate() {
            pad(indent, depth + 1, out);
            dump_string(key, out);
            out.push(':');
            if matches!(indent, Indent::Spaces(_)) {
                out.push(' ');
            }
            dump_value(val, indent, depth + 1, out);
            if i + 1 < len {
                out.push(',');
            }
            newline(indent, out);
        }
        pad(indent, depth, out);
    }
    out.push('}');
}

fn newline(indent: Indent, out: &mut String) {
    if matches!(indent, Indent::Spaces(_)) {
        out.push('\n');
    }
}

fn pad(indent: Indent, depth: usize, out: &mut String) {
    if let Indent::Spaces(n) = indent {
        out.push_str(&" ".repeat(depth * n));
    }
}
