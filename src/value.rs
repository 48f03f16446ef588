//! Node values for HIML trees.
//!
//! This module provides the [`Value`] enum, the tagged node type of a
//! parsed HIML document. HIML has exactly two kinds of node: text leaves
//! and objects. There is no number, boolean, or null type; numeric access
//! is a best-effort view over the stored text.
//!
//! ## Examples
//!
//! ```rust
//! use himl::{Object, Value};
//!
//! let text = Value::from("8080");
//! assert!(text.is_string());
//! assert_eq!(text.to_i64(), 8080);
//!
//! let node = Value::from(Object::with_name("server"));
//! assert!(node.is_object());
//! ```

use crate::Object;
use std::fmt;

/// A single node in a HIML tree: either a text leaf or an object.
///
/// The enum is closed on purpose: tree walks and rendering match
/// exhaustively over the two kinds instead of downcasting.
///
/// # Examples
///
/// ```rust
/// use himl::Value;
///
/// let root = himl::from_str("name = demo").unwrap();
/// match root.get("name") {
///     Some(Value::String(s)) => assert_eq!(s, "demo"),
///     _ => panic!("expected a string attribute"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Object(Object),
}

impl Value {
    /// Returns `true` if the value is a text leaf.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a text leaf, returns the text. Otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::{Object, Value};
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(Object::new()).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is an object, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Reads the text as an integer; `0` when the value is an object or
    /// the text does not parse.
    ///
    /// This is a convenience view over the stored text, not a stored
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::Value;
    ///
    /// assert_eq!(Value::from("42").to_i64(), 42);
    /// assert_eq!(Value::from(" -7 ").to_i64(), -7);
    /// assert_eq!(Value::from("not a number").to_i64(), 0);
    /// ```
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        self.as_str()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Reads the text as a float; `0.0` when the value is an object or
    /// the text does not parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use himl::Value;
    ///
    /// assert_eq!(Value::from("2.5").to_f64(), 2.5);
    /// assert_eq!(Value::from("oops").to_f64(), 0.0);
    /// ```
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.as_str()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0.0)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::String(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::String(value.to_string())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

/// Renders the value the way the serializer would: text leaves are quoted
/// only when required, objects print as full blocks.
///
/// # Examples
///
/// ```rust
/// use himl::Value;
///
/// assert_eq!(Value::from("plain").to_string(), "plain");
/// assert_eq!(Value::from("two words").to_string(), "\"two words\"");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::writer::render_value(self))
    }
}
