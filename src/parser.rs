//! HIML parsing.
//!
//! This module provides the [`Parser`], a recursive-descent driver over
//! a single-lookahead character cursor that builds [`Object`] trees.
//!
//! ## Overview
//!
//! - **Single pass**: one forward scan, one character of lookahead, no
//!   backtracking
//! - **Brace tolerant**: the document root needs no surrounding braces;
//!   a file can be a bare sequence of pairs
//! - **Sticky errors**: the first failure stops the parse, and the
//!   partially built tree is returned alongside it
//!
//! ## Grammar
//!
//! ```text
//! document := object(root)
//! object   := [ '{' ] pair* '}'      braces optional at the root
//! pair     := string '=' value
//!           | string object          named child shorthand
//!           | string                 bare array element
//! value    := object | string
//! ```
//!
//! Most users should use [`from_str`](crate::from_str) or
//! [`parse_partial`](crate::parse_partial) in the crate root.

use crate::scanner::{is_bare_char, Scanner};
use crate::{Error, Object, Value};

/// The HIML parser.
///
/// Consumes its input in one forward pass and produces the document root
/// together with the sticky error, if any.
///
/// # Examples
///
/// ```rust
/// use himl::Parser;
///
/// let (root, error) = Parser::new("retries = 3").parse();
/// assert!(error.is_none());
/// assert_eq!(root.get("retries").map(|v| v.to_i64()), Some(3));
/// ```
pub struct Parser<'a> {
    scanner: Scanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(input),
        }
    }

    /// Parses the whole input, returning the root object and the first
    /// error encountered.
    ///
    /// A returned error means the tree may be incomplete, not that it is
    /// empty: everything parsed before the failure is kept.
    pub fn parse(mut self) -> (Object, Option<Error>) {
        self.scanner.skip_whitespace();
        self.scanner.skip_line_comment();
        let root = self.parse_object(true);
        let error = self.scanner.take_error();
        (root, error)
    }

    fn parse_object(&mut self, is_root: bool) -> Object {
        let mut obj = Object::new();
        self.scanner.skip_whitespace();
        if is_root {
            // A file may or may not open with a brace.
            self.scanner.accept('{');
        } else {
            self.scanner.require('{');
        }
        loop {
            self.scanner.skip_whitespace();
            if self.scanner.accept('}') {
                return obj;
            }
            if self.scanner.at_end() || self.scanner.failed() {
                break;
            }
            self.parse_pair(&mut obj);
            self.scanner.accept(',');
        }
        obj
    }

    fn parse_pair(&mut self, obj: &mut Object) {
        self.scanner.skip_line_comment();

        let token = self.parse_token();
        if self.scanner.failed() {
            return;
        }
        self.scanner.skip_whitespace();

        if self.scanner.accept('=') {
            self.scanner.skip_whitespace();
            if let Some(value) = self.parse_value() {
                self.scanner.skip_whitespace();
                obj.set(token.unwrap_or_default(), value);
            }
        } else if self.scanner.current() == Some('{') {
            let mut child = self.parse_object(false);
            child.set_name(token.unwrap_or_default());
            obj.add(child);
        } else {
            let had_comma = self.scanner.accept(',');
            match token {
                Some(text) => obj.add(Value::String(text)),
                // `a, , b` keeps its explicit empty slot
                None if had_comma => obj.add(Value::String(String::new())),
                None => {
                    if let Some(found) = self.scanner.current() {
                        let offset = self.scanner.offset();
                        self.scanner.set_error(Error::unexpected(found, offset));
                    }
                }
            }
        }
    }

    fn parse_value(&mut self) -> Option<Value> {
        self.scanner.skip_line_comment();
        if self.scanner.at_end() {
            self.scanner.set_error(Error::UnexpectedEos);
            return None;
        }
        if self.scanner.current() == Some('{') {
            return Some(Value::Object(self.parse_object(false)));
        }
        let token = self.parse_token();
        if self.scanner.failed() {
            return None;
        }
        self.scanner.skip_whitespace();
        if self.scanner.current() == Some('{') {
            // `key = label { ... }` names the nested object
            let mut child = self.parse_object(false);
            child.set_name(token.unwrap_or_default());
            Some(Value::Object(child))
        } else {
            Some(Value::String(token.unwrap_or_default()))
        }
    }

    /// Parses one string token. `None` means the lookahead cannot start a
    /// token at all; a quoted token may legitimately be `Some("")`.
    fn parse_token(&mut self) -> Option<String> {
        let mut buf = String::new();
        if self.scanner.accept('"') {
            loop {
                match self.scanner.current() {
                    None | Some('"') => break,
                    Some('\\') => {
                        if let Some(decoded) = self.parse_escape() {
                            buf.push(decoded);
                        }
                    }
                    Some(c) => {
                        buf.push(c);
                        self.scanner.advance();
                    }
                }
            }
            self.scanner.require('"');
            Some(buf)
        } else {
            while let Some(c) = self.scanner.current() {
                if !is_bare_char(c) {
                    break;
                }
                buf.push(c);
                self.scanner.advance();
            }
            if buf.is_empty() {
                None
            } else {
                Some(trim_spaces(buf))
            }
        }
    }

    /// Decodes one escape sequence inside a quoted token. An unrecognized
    /// escape consumes the backslash and the character after it and
    /// contributes nothing; a backslash at end-of-stream is left for the
    /// closing-quote check to report.
    fn parse_escape(&mut self) -> Option<char> {
        self.scanner.require('\\');
        let c = self.scanner.current()?;
        let decoded = match c {
            'b' => Some('\u{0008}'),
            'f' => Some('\u{000C}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            '"' => Some('"'),
            '\\' => Some('\\'),
            '/' => Some('/'),
            _ => None,
        };
        self.scanner.advance();
        decoded
    }
}

fn trim_spaces(s: String) -> String {
    let trimmed = s.trim_matches(' ');
    if trimmed.len() == s.len() {
        s
    } else {
        trimmed.to_string()
    }
}
