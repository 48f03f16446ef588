//! # himl
//!
//! A parser and writer for HIML, a small human-writable configuration
//! notation.
//!
//! ## What is HIML?
//!
//! HIML is a low-ceremony config syntax: keys and values are usually bare
//! unquoted tokens, commas are optional, `//` starts a line comment, and
//! the outermost braces may be left off entirely. A document is a tree of
//! exactly two node kinds: text strings and objects. Objects hold named
//! attributes (`key = value`) and positional, array-like children, and
//! the two coexist freely:
//!
//! ```text
//! // a server block and a bare list, no outer braces needed
//! server {
//!     host = localhost
//!     port = 8080
//! }
//! colors {
//!     red, green, blue
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Tolerant input**: optional braces at the root, optional commas,
//!   quoted or bare tokens, line comments
//! - **Strict output**: the writer emits one normalized form that is
//!   itself valid input, so documents round-trip byte-for-byte after one
//!   normalization pass
//! - **Partial results**: parse errors are sticky and the tree built
//!   before the failure is still available
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! let root = himl::from_str("host = localhost\nport = 8080").unwrap();
//!
//! assert_eq!(root.get("host").and_then(|v| v.as_str()), Some("localhost"));
//! assert_eq!(root.get("port").map(|v| v.to_i64()), Some(8080));
//! ```
//!
//! ## Normalized Output
//!
//! ```rust
//! let root = himl::from_str("{colors { red, green, blue }}").unwrap();
//! assert_eq!(himl::to_string(&root), "colors {\n    red, green, blue\n}\n");
//! ```
//!
//! ## Building Trees Programmatically
//!
//! ```rust
//! use himl::Object;
//!
//! let mut server = Object::with_name("server");
//! server.set("port", 8080);
//!
//! let mut root = Object::new();
//! root.add(server);
//!
//! assert_eq!(himl::to_string(&root), "server {\n    port = 8080\n}\n");
//! ```
//!
//! ## Value Model
//!
//! Everything is a string or an object; there is no number, boolean, or
//! null type. [`Value::to_i64`] and [`Value::to_f64`] are best-effort
//! views over the stored text and default to `0`/`0.0`.

pub mod error;
pub mod object;
pub mod options;
pub mod parser;
mod scanner;
pub mod value;
pub mod writer;

pub use error::{Error, Result};
pub use object::Object;
pub use options::FormatOptions;
pub use parser::Parser;
pub use value::Value;
pub use writer::Writer;

use std::io;

/// Parses a HIML document, failing on the first syntax error.
///
/// The input may be a braced object or a bare sequence of pairs; both
/// produce the anonymous root object.
///
/// # Examples
///
/// ```rust
/// let root = himl::from_str("name = demo").unwrap();
/// assert_eq!(root.get("name").and_then(|v| v.as_str()), Some("demo"));
/// ```
///
/// # Errors
///
/// Returns the sticky parse error; use [`parse_partial`] to also obtain
/// the tree built before the failure.
///
/// ```rust
/// let err = himl::from_str("{a = ").unwrap_err();
/// assert_eq!(err.to_string(), "Unexpected end of stream");
/// ```
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Object> {
    match Parser::new(input).parse() {
        (root, None) => Ok(root),
        (_, Some(error)) => Err(error),
    }
}

/// Parses a HIML document, returning the partial tree alongside any
/// error.
///
/// A reported error means the tree may be incomplete; everything parsed
/// before the failure is kept.
///
/// # Examples
///
/// ```rust
/// let (root, error) = himl::parse_partial("name = demo, broken = ");
///
/// assert!(error.is_some());
/// assert_eq!(root.get("name").and_then(|v| v.as_str()), Some("demo"));
/// assert!(root.get("broken").is_none());
/// ```
pub fn parse_partial(input: &str) -> (Object, Option<Error>) {
    Parser::new(input).parse()
}

/// Parses a HIML document from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the document is
/// malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Object> {
    let input = std::str::from_utf8(v).map_err(|e| Error::Message(e.to_string()))?;
    from_str(input)
}

/// Parses a HIML document from an I/O stream.
///
/// The whole stream is buffered first; there is no incremental mode.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let root = himl::from_reader(Cursor::new(b"a = 1")).unwrap();
/// assert_eq!(root.get("a").map(|v| v.to_i64()), Some(1));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8, or
/// the document is malformed.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Object> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&input)
}

/// Renders a tree as normalized HIML text.
///
/// An unnamed root prints braceless; serialization itself cannot fail.
///
/// # Examples
///
/// ```rust
/// let root = himl::from_str("{a = 1, b = 2}").unwrap();
/// assert_eq!(himl::to_string(&root), "a = 1\nb = 2\n");
/// ```
#[must_use]
pub fn to_string(root: &Object) -> String {
    to_string_with_options(root, FormatOptions::default())
}

/// Renders a tree as HIML text with custom formatting options.
///
/// # Examples
///
/// ```rust
/// use himl::FormatOptions;
///
/// let root = himl::from_str("db { host = local }").unwrap();
/// let text = himl::to_string_with_options(&root, FormatOptions::new().with_indent(2));
/// assert_eq!(text, "db {\n  host = local\n}\n");
/// ```
#[must_use]
pub fn to_string_with_options(root: &Object, options: FormatOptions) -> String {
    let mut writer = Writer::with_options(options);
    writer.write_document(root);
    writer.finish()
}

/// Renders a tree into an I/O writer.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, root: &Object) -> Result<()> {
    to_writer_with_options(writer, root, FormatOptions::default())
}

/// Renders a tree into an I/O writer with custom formatting options.
///
/// # Errors
///
/// Returns an error if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W: io::Write>(
    mut writer: W,
    root: &Object,
    options: FormatOptions,
) -> Result<()> {
    let text = to_string_with_options(root, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
