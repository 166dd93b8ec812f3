//! JSON text → `Value` tree.
//!
//! A single-pass recursive-descent scanner over Unicode scalar values.
//! Each container routine calls [`Parser::parse_value`] for its members, so
//! nesting is tracked by the call stack; the current depth is passed down as
//! an argument and checked against [`ParseOptions::max_depth`].
//!
//! # Grammar notes
//!
//! - Escapes: `\\ \" \b \f \n \r \t`, plus `\uXXXX` with surrogate pairs.
//!   Any other escaped character (including `\/`) is rejected.
//! - Characters inside a literal are otherwise taken verbatim, control
//!   characters included, because the serializer emits them unescaped.
//! - Numbers follow the strict JSON grammar. No fraction and no exponent
//!   means `Int` (which must fit in i64); anything else is `Float`.
//! - `NaN`, `Infinity`, comments, and trailing commas are errors.
//!
//! Positions in errors are 0-based character offsets into the input.

use crate::array::Array;
use crate::error::{JsonError, Result, SyntaxError};
use crate::object::Object;
use crate::options::ParseOptions;
use crate::value::Value;

/// Parse JSON text with default options (bare scalars allowed, depth 128).
///
/// ```
/// use jsondom_core::{parse, Value};
///
/// let doc = parse(r#"{"a":{"b":{"c":1}}}"#).unwrap();
/// assert_eq!(doc.get("a").unwrap().get("b").unwrap().get("c").unwrap(), &Value::Int(1));
/// ```
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, &ParseOptions::default())
}

/// Parse JSON text with explicit options.
pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Value> {
    run(text, *options, None)
}

/// Parse text whose top-level value must open with the container named by
/// `expect` (`ExpectedObject` or `ExpectedArray`).
pub(crate) fn parse_expecting(text: &str, expect: Option<SyntaxError>) -> Result<Value> {
    run(text, ParseOptions::default(), expect)
}

fn run(text: &str, options: ParseOptions, expect: Option<SyntaxError>) -> Result<Value> {
    let result = Parser::new(text, options).parse_document(expect);
    if let Err(JsonError::MalformedJson { position, reason }) = &result {
        tracing::debug!(position, %reason, "rejected malformed JSON");
    }
    result
}

/// Scanning state for one parse call. Nothing outlives the call.
struct Parser<'a> {
    src: &'a str,
    /// Byte index of the next unread character.
    byte: usize,
    /// Character offset of the next unread character.
    offset: usize,
    options: ParseOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberShape {
    Integer,
    Decimal,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str, options: ParseOptions) -> Self {
        Self {
            src,
            byte: 0,
            offset: 0,
            options,
        }
    }

    fn parse_document(&mut self, expect: Option<SyntaxError>) -> Result<Value> {
        self.skip_whitespace();
        let first = self.peek().ok_or_else(|| self.error(SyntaxError::UnexpectedEnd))?;

        match expect {
            Some(SyntaxError::ExpectedObject) if first != '{' => {
                return Err(self.error(SyntaxError::ExpectedObject));
            }
            Some(SyntaxError::ExpectedArray) if first != '[' => {
                return Err(self.error(SyntaxError::ExpectedArray));
            }
            _ => {}
        }
        if !self.options.allow_scalar_root && first != '{' && first != '[' {
            return Err(self.error(SyntaxError::UnexpectedChar(first)));
        }

        let value = self.parse_value(0)?;

        self.skip_whitespace();
        if self.peek().is_some() {
            return Err(self.error(SyntaxError::TrailingCharacters));
        }
        Ok(value)
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.src[self.byte..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        self.offset += 1;
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n' | '\r') = self.peek() {
            self.bump();
        }
    }

    fn error(&self, reason: SyntaxError) -> JsonError {
        self.error_at(self.offset, reason)
    }

    fn error_at(&self, position: usize, reason: SyntaxError) -> JsonError {
        JsonError::MalformedJson { position, reason }
    }

    /// Error for whatever sits at the cursor when it was not what we wanted.
    fn unexpected(&self) -> JsonError {
        match self.peek() {
            Some(c) => self.error(SyntaxError::UnexpectedChar(c)),
            None => self.error(SyntaxError::UnexpectedEnd),
        }
    }

    fn expect(&mut self, want: char) -> Result<()> {
        if self.peek() == Some(want) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    // ── Values ──────────────────────────────────────────────────────────

    /// Parse one value starting at the next significant character.
    /// `depth` is the number of containers enclosing it.
    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error(SyntaxError::UnexpectedEnd)),
            Some('"') => self.parse_string().map(Value::String),
            Some('{') => self.parse_object(depth + 1).map(Value::Object),
            Some('[') => self.parse_array(depth + 1).map(Value::Array),
            Some('t') => self.parse_keyword("true", Value::Bool(true)),
            Some('f') => self.parse_keyword("false", Value::Bool(false)),
            Some('n') => self.parse_keyword("null", Value::Null),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some(c) => Err(self.error(SyntaxError::UnexpectedChar(c))),
        }
    }

    fn parse_keyword(&mut self, word: &str, value: Value) -> Result<Value> {
        if self.src[self.byte..].starts_with(word) {
            // keywords are ASCII: bytes == chars
            self.byte += word.len();
            self.offset += word.len();
            Ok(value)
        } else {
            Err(self.error(SyntaxError::InvalidLiteral))
        }
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(self.error(SyntaxError::NestingTooDeep(self.options.max_depth)));
        }
        Ok(())
    }

    /// `{` (`"key"` `:` value (`,` `"key"` `:` value)*)? `}`
    fn parse_object(&mut self, depth: usize) -> Result<Object> {
        self.enter(depth)?;
        self.bump(); // {

        let mut obj = Object::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.bump();
            return Ok(obj);
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some('"') {
                return Err(self.unexpected());
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            self.expect(':')?;

            let value = self.parse_value(depth)?;
            // last write wins on duplicate keys
            obj.put(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    return Ok(obj);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    /// `[` (value (`,` value)*)? `]`
    fn parse_array(&mut self, depth: usize) -> Result<Array> {
        self.enter(depth)?;
        self.bump(); // [

        let mut arr = Array::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            return Ok(arr);
        }

        loop {
            arr.push(self.parse_value(depth)?);

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    return Ok(arr);
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    // ── Literals ────────────────────────────────────────────────────────

    /// Parse a quoted literal, cursor on the opening quote.
    fn parse_string(&mut self) -> Result<String> {
        let start = self.offset;
        self.bump(); // "

        let mut out = String::new();
        loop {
            // Copy the run up to the next quote or backslash in one go.
            let rest = &self.src[self.byte..];
            let run = rest.find(['"', '\\']).unwrap_or(rest.len());
            if run > 0 {
                let chunk = &rest[..run];
                out.push_str(chunk);
                self.byte += run;
                self.offset += chunk.chars().count();
            }

            match self.bump() {
                None => return Err(self.error_at(start, SyntaxError::UnterminatedString)),
                Some('"') => return Ok(out),
                Some(_) => {
                    let escape_at = self.offset - 1;
                    let decoded = self.parse_escape(escape_at, start)?;
                    out.push(decoded);
                }
            }
        }
    }

    /// Decode the character after a backslash at `escape_at`.
    fn parse_escape(&mut self, escape_at: usize, literal_start: usize) -> Result<char> {
        match self.bump() {
            None => Err(self.error_at(literal_start, SyntaxError::UnterminatedString)),
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('b') => Ok('\u{8}'),
            Some('f') => Ok('\u{c}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_unicode_escape(escape_at),
            Some(other) => Err(self.error_at(escape_at, SyntaxError::InvalidEscape(other))),
        }
    }

    /// `\uXXXX`, cursor just past the `u`. A high surrogate must be followed
    /// by an escaped low surrogate.
    fn parse_unicode_escape(&mut self, escape_at: usize) -> Result<char> {
        let invalid = || JsonError::MalformedJson {
            position: escape_at,
            reason: SyntaxError::InvalidUnicodeEscape,
        };

        let unit = self.read_hex4().ok_or_else(invalid)?;
        let code = match unit {
            0xD800..=0xDBFF => {
                if self.bump() != Some('\\') || self.bump() != Some('u') {
                    return Err(invalid());
                }
                let low = self.read_hex4().ok_or_else(invalid)?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(invalid());
                }
                0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            0xDC00..=0xDFFF => return Err(invalid()),
            _ => u32::from(unit),
        };
        char::from_u32(code).ok_or_else(invalid)
    }

    fn read_hex4(&mut self) -> Option<u16> {
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let digit = self.bump()?.to_digit(16)?;
            unit = (unit << 4) | digit as u16;
        }
        Some(unit)
    }

    /// Scan the maximal `[0-9.eE+-]` run, then validate and classify it.
    fn parse_number(&mut self) -> Result<Value> {
        let start_byte = self.byte;
        let start = self.offset;
        while let Some('0'..='9' | '.' | 'e' | 'E' | '+' | '-') = self.peek() {
            self.bump();
        }
        let literal = &self.src[start_byte..self.byte];

        match classify_number(literal) {
            Some(NumberShape::Integer) => literal
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| self.error_at(start, SyntaxError::IntegerOverflow)),
            Some(NumberShape::Decimal) => match literal.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(f)),
                Ok(_) => Err(self.error_at(start, SyntaxError::NumberOutOfRange)),
                Err(_) => Err(self.error_at(start, SyntaxError::InvalidNumber)),
            },
            None => Err(self.error_at(start, SyntaxError::InvalidNumber)),
        }
    }
}

/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn classify_number(literal: &str) -> Option<NumberShape> {
    let bytes = literal.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = usize::from(bytes.first() == Some(&b'-'));
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits_from(i),
        _ => return None,
    }

    let mut shape = NumberShape::Integer;
    if bytes.get(i) == Some(&b'.') {
        let end = digits_from(i + 1);
        if end == i + 1 {
            return None;
        }
        i = end;
        shape = NumberShape::Decimal;
    }
    if let Some(b'e' | b'E') = bytes.get(i) {
        i += 1;
        if let Some(b'+' | b'-') = bytes.get(i) {
            i += 1;
        }
        let end = digits_from(i);
        if end == i {
            return None;
        }
        i = end;
        shape = NumberShape::Decimal;
    }

    (i == bytes.len()).then_some(shape)
}
