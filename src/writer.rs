//! HIML serialization.
//!
//! This module provides the [`Writer`] that renders [`Object`] trees into
//! normalized HIML text. The output is always valid parser input, so
//! `parse -> write -> parse` is lossless and a second write is
//! byte-identical to the first.
//!
//! ## Output shape
//!
//! - Attributes come first, one per line, as `name = value`
//! - Runs of string children share one line, separated by `, `
//! - Object children always occupy their own block
//! - The anonymous document root is printed braceless, matching the
//!   brace-free files the parser accepts
//!
//! ## Usage
//!
//! Most users should use [`to_string`](crate::to_string) in the crate
//! root:
//!
//! ```rust
//! let root = himl::from_str("{a = 1, b = 2}").unwrap();
//! assert_eq!(himl::to_string(&root), "a = 1\nb = 2\n");
//! ```

use crate::scanner::is_bare_char;
use crate::{FormatOptions, Object, Value};

/// The HIML writer.
///
/// Renders a tree into an owned output buffer; create one per document.
///
/// # Examples
///
/// ```rust
/// use himl::{Object, Writer};
///
/// let mut root = Object::new();
/// root.set("a", "1");
///
/// let mut writer = Writer::new();
/// writer.write_document(&root);
/// assert_eq!(writer.finish(), "a = 1\n");
/// ```
pub struct Writer {
    output: String,
    options: FormatOptions,
}

impl Writer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(FormatOptions::default())
    }

    #[must_use]
    pub fn with_options(options: FormatOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Renders `root` as a document: unwrapped when unnamed, braced when
    /// it carries a name.
    pub fn write_document(&mut self, root: &Object) {
        self.write_object(root, 0);
    }

    /// Returns the rendered text.
    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }

    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::String(text) => self.write_string(text),
            Value::Object(obj) => self.write_object(obj, depth),
        }
    }

    fn write_object(&mut self, obj: &Object, depth: usize) {
        let wrapped = depth > 0 || !obj.name().is_empty();
        if wrapped {
            if !obj.name().is_empty() {
                self.write_string(obj.name());
                self.output.push(' ');
            }
            self.output.push_str("{\n");
        }

        for (name, value) in obj.attributes() {
            self.indent(depth);
            self.write_string(name);
            self.output.push_str(" = ");
            self.write_value(value, depth + 1);
            self.output.push('\n');
        }

        // String children accumulate on one line until an object child
        // (or the end of the sequence) breaks it.
        let children = obj.children();
        let mut same_line = false;
        for (i, child) in children.iter().enumerate() {
            if child.is_object() && same_line {
                self.output.push('\n');
                self.indent(depth);
            } else if !same_line {
                self.indent(depth);
            } else {
                self.output.push(' ');
            }
            self.write_value(child, depth + 1);
            if child.is_object() {
                self.output.push('\n');
                same_line = false;
            } else if i + 1 == children.len() {
                self.output.push('\n');
            } else {
                self.output.push(',');
                same_line = true;
            }
        }

        if wrapped {
            self.indent(depth.saturating_sub(1));
            self.output.push('}');
        }
    }

    /// Emits a string token, quoting and escaping whenever the text would
    /// not survive re-parsing as a bare token.
    fn write_string(&mut self, text: &str) {
        if !needs_quotes(text) {
            self.output.push_str(text);
            return;
        }
        self.output.push('"');
        for c in text.chars() {
            match c {
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\\' => self.output.push_str("\\\\"),
                '"' => self.output.push_str("\\\""),
                _ => self.output.push(c),
            }
        }
        self.output.push('"');
    }

    fn indent(&mut self, units: usize) {
        for _ in 0..units * self.options.indent {
            self.output.push(' ');
        }
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty text and text containing any non-bare character must be quoted,
/// or the reader would mis-lex (or drop) the token.
fn needs_quotes(text: &str) -> bool {
    text.is_empty() || !text.chars().all(is_bare_char)
}

/// Renders a single value the way it would appear in a document.
pub(crate) fn render_value(value: &Value) -> String {
    let mut writer = Writer::new();
    writer.write_value(value, 0);
    writer.finish()
}
