//! Character-level cursor over HIML input.
//!
//! The scanner is deliberately tokenless: the parser reads single
//! characters with one-character lookahead and decides structure on its
//! own. Position is tracked as a byte offset so error messages can point
//! at the exact failure site.
//!
//! Errors are sticky. [`Scanner::require`] records the first failure and
//! every later `set_error` call is ignored; the parser polls
//! [`Scanner::failed`] to stop making progress.

use crate::Error;

/// Characters allowed in an unquoted (bare) token: ASCII letters and
/// digits, underscore, and anything outside ASCII so multi-byte text
/// passes through unquoted.
pub(crate) fn is_bare_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii()
}

pub(crate) struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    error: Option<Error>,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Scanner {
            input,
            pos: 0,
            error: None,
        }
    }

    /// The lookahead character, or `None` once the cursor passes the last
    /// byte.
    pub(crate) fn current(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// The character after the lookahead, without moving the cursor.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Byte offset of the lookahead character.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Moves the cursor forward by one character.
    pub(crate) fn advance(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Consumes the lookahead if it equals `expected`; otherwise leaves
    /// the cursor untouched.
    pub(crate) fn accept(&mut self, expected: char) -> bool {
        if self.current() != Some(expected) {
            return false;
        }
        self.advance();
        true
    }

    /// Like [`accept`](Self::accept), but a mismatch or end-of-stream
    /// records a sticky error and leaves the cursor where it failed.
    pub(crate) fn require(&mut self, expected: char) {
        match self.current() {
            None => self.set_error(Error::UnexpectedEos),
            Some(found) if found != expected => {
                self.set_error(Error::expected(expected, found, self.pos));
            }
            Some(_) => self.advance(),
        }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(c) = self.current() {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Skips `//` line comments, including runs of consecutive comment
    /// lines, together with the whitespace that follows each one. A lone
    /// `/` is not a comment and is left in place.
    pub(crate) fn skip_line_comment(&mut self) {
        while self.current() == Some('/') && self.peek_next() == Some('/') {
            while let Some(c) = self.current() {
                if c == '\r' || c == '\n' {
                    break;
                }
                self.advance();
            }
            self.skip_whitespace();
        }
    }

    /// Records `error` unless a failure is already recorded.
    pub(crate) fn set_error(&mut self, error: Error) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub(crate) fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub(crate) fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }
}
