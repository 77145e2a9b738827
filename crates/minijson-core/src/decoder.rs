//! JSON parser — recursive descent over a byte cursor with one-character
//! lookahead and no backtracking.
//!
//! # Key design decisions
//!
//! - **`\uXXXX` passthrough**: unicode escapes are copied into the output
//!   string verbatim (backslash, `u`, and the next four characters) rather
//!   than decoded to a code point. The four characters are not validated as
//!   hex digits. Dumping such a string reproduces the escape text.
//! - **Explicit termination errors**: end-of-input inside a string, array,
//!   or object is a syntax error, never a silently truncated value.
//! - **Depth cap**: arrays and objects may nest at most [`MAX_DEPTH`]
//!   levels; deeper input is rejected instead of exhausting the stack.
//! - **Byte offsets**: every syntax error carries the cursor's byte offset
//!   at the point of detection.

use crate::error::{JsonError, Result};
use crate::value::{Array, Object, Value};

/// Maximum array/object nesting the parser will follow before failing.
pub const MAX_DEPTH: usize = 128;

/// Parse a complete JSON document into a [`Value`] tree.
///
/// Exactly one top-level value is accepted. Trailing whitespace is skipped;
/// any other trailing content fails with a syntax error, so concatenated
/// multi-document input is rejected.
pub fn parse(text: &str) -> Result<Value> {
    let mut p = Parser::new(text);
    let value = p.parse_value(0)?;
    p.skip_ws();
    if !p.eof() {
        return Err(p.fail("trailing characters"));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser { input, pos: 0 }
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        match self.bump() {
            Some(b) if b == expected => Ok(()),
            _ => Err(self.fail(&format!("expected '{}'", expected as char))),
        }
    }

    fn fail(&self, message: &str) -> JsonError {
        JsonError::Syntax {
            offset: self.pos,
            message: message.to_string(),
        }
    }

    /// Grammar dispatch on the lookahead character. `depth` counts enclosing
    /// containers and is checked against [`MAX_DEPTH`] when recursing.
    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        self.skip_ws();
        match self.peek() {
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => Ok(Value::String(self.parse_string()?)),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            _ => Err(self.fail("unexpected token")),
        }
    }

    /// Match a keyword character by character; a mismatch at any position
    /// names the expected character. No partial-literal recovery.
    fn parse_literal(&mut self, word: &str, value: Value) -> Result<Value> {
        for b in word.bytes() {
            self.expect(b)?;
        }
        Ok(value)
    }

    /// Number grammar: `-`? (`0` | [1-9] digits* | digits+) (`.` digits+)?
    /// ([eE] [+-]? digits+)?. The captured slice goes through
    /// `f64::from_str`; overflow saturates to infinity as that conversion
    /// naturally provides.
    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                while matches!(self.peek(), Some(b'0'..=b'9')) {
                    self.pos += 1;
                }
            }
            _ => return Err(self.fail("bad number")),
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.digit_run()?;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.digit_run()?;
        }
        let text = &self.input[start..self.pos];
        let n: f64 = text.parse().map_err(|_| self.fail("bad number"))?;
        Ok(Value::Number(n))
    }

    /// Consume a run of at least one ASCII digit.
    fn digit_run(&mut self) -> Result<()> {
        if !matches!(self.peek(), Some(b'0'..=b'9')) {
            return Err(self.fail("bad number"));
        }
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        Ok(())
    }

    /// String grammar. Unescaped runs are copied as slices; the run
    /// boundaries (`"` and `\`) are ASCII, so the slices stay on UTF-8
    /// character boundaries.
    fn parse_string(&mut self) -> Result<String> {
        self.expect(b'"')?;
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            match self.bump() {
                None => return Err(self.fail("unterminated string")),
                Some(b'"') => {
                    out.push_str(&self.input[run_start..self.pos - 1]);
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.input[run_start..self.pos - 1]);
                    match self.bump() {
                        None => return Err(self.fail("unterminated string")),
                        Some(b'"') => out.push('"'),
                        Some(b'\\') => out.push('\\'),
                        Some(b'/') => out.push('/'),
                        Some(b'b') => out.push('\u{08}'),
                        Some(b'f') => out.push('\u{0C}'),
                        Some(b'n') => out.push('\n'),
                        Some(b'r') => out.push('\r'),
                        Some(b't') => out.push('\t'),
                        Some(b'u') => self.copy_unicode_escape(&mut out)?,
                        Some(_) => return Err(self.fail("bad escape")),
                    }
                    run_start = self.pos;
                }
                Some(_) => {}
            }
        }
    }

    /// Copy `\u` plus the following four characters verbatim, without
    /// validating them as hex digits or resolving a code point.
    fn copy_unicode_escape(&mut self, out: &mut String) -> Result<()> {
        out.push_str("\\u");
        let mut chars = self.input[self.pos..].chars();
        for _ in 0..4 {
            match chars.next() {
                Some(c) => {
                    out.push(c);
                    self.pos += c.len_utf8();
                }
                None => return Err(self.fail("unterminated string")),
            }
        }
        Ok(())
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(self.fail("nesting too deep"));
        }
        self.expect(b'[')?;
        let mut arr = Array::new();
        self.skip_ws();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::Array(arr));
        }
        loop {
            arr.push(self.parse_value(depth + 1)?);
            self.skip_ws();
            match self.bump() {
                Some(b']') => break,
                Some(b',') => self.skip_ws(),
                _ => return Err(self.fail("expected ',' or ']'")),
            }
        }
        Ok(Value::Array(arr))
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        if depth >= MAX_DEPTH {
            return Err(self.fail("nesting too deep"));
        }
        self.expect(b'{')?;
        let mut map = Object::new();
        self.skip_ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::Object(map));
        }
        loop {
            self.skip_ws();
            if self.peek() != Some(b'"') {
                return Err(self.fail("expected string key"));
            }
            let key = self.parse_string()?;
            self.skip_ws();
            self.expect(b':')?;
            let value = self.parse_value(depth + 1)?;
            // Duplicate keys: the later occurrence overwrites.
            map.insert(key, value);
            self.skip_ws();
            match self.bump() {
                Some(b'}') => break,
                Some(b',') => self.skip_ws(),
                _ => return Err(self.fail("expected ',' or '}'")),
            }
        }
        Ok(Value::Object(map))
    }
}
